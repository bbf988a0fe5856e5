use serde::{Deserialize, Serialize};

/// 8-bit sRGB colour with a float alpha, the way stylesheets spell it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// The site accent, rgb(0, 212, 255)
    pub const ACCENT: Rgba = Rgba::new(0, 212, 255, 1.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with alpha replaced (clamped to [0, 1])
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Normalised [r, g, b, a] in sRGB space
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a,
        ]
    }
}

/// Pixel size of the viewport / drawing surface.
/// Stored and replaced as one value so readers never see a half-updated pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }
}

/// A vertical band of the page (a section or an observed element)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    /// Offset of the top edge from the document top
    pub top: f32,
    pub height: f32,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(Rgba::ACCENT.with_alpha(1.5).a, 1.0);
        assert_eq!(Rgba::ACCENT.with_alpha(-0.2).a, 0.0);
        assert_eq!(Rgba::ACCENT.with_alpha(0.25).g, 212);
    }

    #[test]
    fn test_to_f32() {
        let [r, g, b, a] = Rgba::new(0, 255, 51, 0.5).to_f32();
        assert_eq!((r, g, a), (0.0, 1.0, 0.5));
        assert!((b - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_section_bottom() {
        assert_eq!(Section::new("about", 900.0, 700.0).bottom(), 1600.0);
    }
}
