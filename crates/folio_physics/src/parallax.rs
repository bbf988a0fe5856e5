use folio_core::{PARALLAX_TILT, PARALLAX_TRAVEL, Viewport};

/// Offset of one floating card for a pointer position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardOffset {
    pub x: f32,
    pub y: f32,
    /// Degrees
    pub rotation: f32,
}

/// Cards further down the list move faster: speed = (index + 1) * 0.5
pub fn card_offset(index: usize, cursor: [f32; 2], viewport: Viewport) -> CardOffset {
    let speed = (index + 1) as f32 * 0.5;
    let x = axis_offset(cursor[0], viewport.width_f32(), speed);
    let y = axis_offset(cursor[1], viewport.height_f32(), speed);
    CardOffset {
        x,
        y,
        rotation: x * PARALLAX_TILT,
    }
}

fn axis_offset(cursor: f32, extent: f32, speed: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    (cursor / extent - 0.5) * speed * PARALLAX_TRAVEL
}
