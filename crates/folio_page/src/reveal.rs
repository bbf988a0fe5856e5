use folio_core::{RevealConfig, Section};
use std::time::Duration;

#[derive(Debug, Clone)]
struct Observed {
    bounds: Section,
    revealed: bool,
    children: Vec<bool>,
}

/// Reveal-on-scroll: marks elements once enough of them has entered the
/// viewport, then staggers their children in one after another.
#[derive(Debug, Clone, Default)]
pub struct RevealObserver {
    config: RevealConfig,
    elements: Vec<Observed>,
    /// (due time, element, child)
    pending: Vec<(Duration, usize, usize)>,
}

impl RevealObserver {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Watch an element with `children` animated descendants; returns its handle
    pub fn observe(&mut self, bounds: Section, children: usize) -> usize {
        self.elements.push(Observed {
            bounds,
            revealed: false,
            children: vec![false; children],
        });
        self.elements.len() - 1
    }

    pub fn is_revealed(&self, element: usize) -> bool {
        self.elements.get(element).is_some_and(|e| e.revealed)
    }

    pub fn child_revealed(&self, element: usize, child: usize) -> bool {
        self.elements
            .get(element)
            .and_then(|e| e.children.get(child))
            .copied()
            .unwrap_or(false)
    }

    pub fn bounds(&self, element: usize) -> Option<&Section> {
        self.elements.get(element).map(|e| &e.bounds)
    }

    /// Check every element against the viewport at `scroll_y`.
    /// Returns the handles revealed by this call.
    pub fn update(&mut self, scroll_y: f32, viewport_height: f32, now: Duration) -> Vec<usize> {
        let root_top = scroll_y;
        let root_bottom = scroll_y + (viewport_height - self.config.root_margin_bottom).max(0.0);
        let stagger = Duration::from_millis(self.config.stagger_ms);
        let mut newly = Vec::new();

        for (index, element) in self.elements.iter_mut().enumerate() {
            if element.revealed {
                continue;
            }
            if !intersects(&element.bounds, root_top, root_bottom, self.config.threshold) {
                continue;
            }
            element.revealed = true;
            for child in 0..element.children.len() {
                self.pending.push((now + stagger * child as u32, index, child));
            }
            newly.push(index);
        }

        newly
    }

    /// Apply child reveals that are due; returns (element, child) pairs
    pub fn poll(&mut self, now: Duration) -> Vec<(usize, usize)> {
        let mut due = Vec::new();
        self.pending.retain(|&(at, element, child)| {
            if at <= now {
                due.push((element, child));
                false
            } else {
                true
            }
        });
        for &(element, child) in &due {
            if let Some(slot) = self.elements[element].children.get_mut(child) {
                *slot = true;
            }
        }
        due
    }
}

fn intersects(bounds: &Section, root_top: f32, root_bottom: f32, threshold: f32) -> bool {
    let top = bounds.top.max(root_top);
    let bottom = bounds.bottom().min(root_bottom);

    if bounds.height <= 0.0 {
        return bounds.top >= root_top && bounds.top <= root_bottom;
    }
    let visible = bottom - top;
    if visible <= 0.0 {
        return false;
    }
    // Elements taller than the root can never reach the ratio; covering
    // the whole root counts
    visible / bounds.height >= threshold || visible >= root_bottom - root_top
}
