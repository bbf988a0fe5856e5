use folio_core::GLOW_EASING;

/// Soft light that trails the pointer, closing a fixed fraction of the gap
/// every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorGlow {
    pub target: [f32; 2],
    pub position: [f32; 2],
    pub easing: f32,
}

impl Default for CursorGlow {
    fn default() -> Self {
        Self::new(GLOW_EASING)
    }
}

impl CursorGlow {
    pub fn new(easing: f32) -> Self {
        Self {
            target: [0.0, 0.0],
            position: [0.0, 0.0],
            easing,
        }
    }

    /// Latest pointer position
    pub fn set_target(&mut self, target: [f32; 2]) {
        self.target = target;
    }

    /// One frame of easing; returns the new position
    pub fn step(&mut self) -> [f32; 2] {
        self.position[0] += (self.target[0] - self.position[0]) * self.easing;
        self.position[1] += (self.target[1] - self.position[1]) * self.easing;
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_step_covers_tenth() {
        let mut glow = CursorGlow::default();
        glow.set_target([100.0, 50.0]);
        let p = glow.step();
        assert!((p[0] - 10.0).abs() < 1e-5);
        assert!((p[1] - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_converges_without_overshoot() {
        let mut glow = CursorGlow::default();
        glow.set_target([400.0, 300.0]);
        let mut last = 0.0;
        for _ in 0..200 {
            let p = glow.step();
            assert!(p[0] >= last && p[0] <= 400.0);
            last = p[0];
        }
        assert!((glow.position[0] - 400.0).abs() < 0.01);
        assert!((glow.position[1] - 300.0).abs() < 0.01);
    }
}
