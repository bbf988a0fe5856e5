use folio_core::{Rgba, Viewport};

/// 2-D drawing target the particle field paints into, in page coordinates
/// (origin top-left, y down).
pub trait RenderSurface {
    /// Match the backing store to the viewport
    fn set_size(&mut self, viewport: Viewport);
    fn clear(&mut self);
    fn fill_circle(&mut self, center: [f32; 2], radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: [f32; 2], to: [f32; 2], color: Rgba, width: f32);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: [f32; 2],
        radius: f32,
        color: Rgba,
    },
    Line {
        from: [f32; 2],
        to: [f32; 2],
        color: Rgba,
        width: f32,
    },
}

/// Retained display list: records one frame of draw calls so a renderer
/// can replay them later.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub size: Viewport,
    pub commands: Vec<DrawCommand>,
    /// Number of clears since creation, one per rendered frame
    pub clears: u64,
}

impl DrawList {
    pub fn new(size: Viewport) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn circles(&self) -> impl Iterator<Item = (&[f32; 2], f32, &Rgba)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((center, *radius, color)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (&[f32; 2], &[f32; 2], &Rgba, f32)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => Some((from, to, color, *width)),
            _ => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }
}

impl RenderSurface for DrawList {
    fn set_size(&mut self, viewport: Viewport) {
        self.size = viewport;
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn fill_circle(&mut self, center: [f32; 2], radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: [f32; 2], to: [f32; 2], color: Rgba, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }
}
