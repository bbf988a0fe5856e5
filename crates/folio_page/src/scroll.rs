use folio_core::Section;

/// How far down the page the reader is, in percent
pub fn scroll_progress(scroll_top: f32, scroll_height: f32, client_height: f32) -> f32 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn back_to_top_visible(scroll_y: f32, threshold: f32) -> bool {
    scroll_y > threshold
}

/// Scroll offset for an in-page link such as `#projects`, leaving `offset`
/// of room for the fixed navbar. `None` when nothing matches; the page
/// then stays put.
pub fn anchor_target(href: &str, sections: &[Section], offset: f32) -> Option<f32> {
    let id = href.strip_prefix('#')?;
    sections
        .iter()
        .find(|s| s.id == id)
        .map(|s| (s.top - offset).max(0.0))
}

/// Eased scroll towards a target, one fixed step per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    pub position: f32,
    pub target: Option<f32>,
    /// Fraction of the remaining distance covered each frame
    pub rate: f32,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self {
            position: 0.0,
            target: None,
            rate: 0.15,
        }
    }
}

impl SmoothScroll {
    /// Snaps when closer than this
    const SETTLE: f32 = 0.5;

    pub fn scroll_to(&mut self, target: f32) {
        self.target = Some(target.max(0.0));
    }

    pub fn to_top(&mut self) {
        self.scroll_to(0.0);
    }

    /// A manual scroll overrides any animation in progress
    pub fn jump(&mut self, position: f32) {
        self.position = position.max(0.0);
        self.target = None;
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Advance one frame; returns the new position
    pub fn step(&mut self) -> f32 {
        if let Some(target) = self.target {
            let gap = target - self.position;
            if gap.abs() < Self::SETTLE {
                self.position = target;
                self.target = None;
            } else {
                self.position += gap * self.rate;
            }
        }
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 100.0);
        // Overscroll (rubber banding) stays in range
        assert_eq!(scroll_progress(2100.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_progress_without_scrollable_height() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 500.0, 800.0), 0.0);
    }

    #[test]
    fn test_back_to_top() {
        assert!(!back_to_top_visible(500.0, 500.0));
        assert!(back_to_top_visible(501.0, 500.0));
    }

    #[test]
    fn test_anchor_target() {
        let sections = vec![Section::new("home", 0.0, 900.0), Section::new("skills", 900.0, 500.0)];
        assert_eq!(anchor_target("#skills", &sections, 70.0), Some(830.0));
        assert_eq!(anchor_target("#home", &sections, 70.0), Some(0.0));
        assert_eq!(anchor_target("#missing", &sections, 70.0), None);
        assert_eq!(anchor_target("skills", &sections, 70.0), None);
    }

    #[test]
    fn test_smooth_scroll_settles() {
        let mut s = SmoothScroll::default();
        s.jump(1200.0);
        s.to_top();
        let mut frames = 0;
        while s.is_animating() {
            let before = s.position;
            let after = s.step();
            assert!(after <= before);
            frames += 1;
            assert!(frames < 200, "never settled");
        }
        assert_eq!(s.position, 0.0);
    }

    #[test]
    fn test_jump_cancels_animation() {
        let mut s = SmoothScroll::default();
        s.scroll_to(800.0);
        s.step();
        s.jump(40.0);
        assert!(!s.is_animating());
        assert_eq!(s.step(), 40.0);
    }
}
