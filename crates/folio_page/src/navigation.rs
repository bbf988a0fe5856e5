use bevy::prelude::*;
use folio_core::{NavConfig, Section};
use folio_sim::Debounce;
use std::time::Duration;

/// Navbar and mobile menu state
#[derive(Resource, Debug, Clone)]
pub struct NavState {
    /// Navbar drawn in its compact "scrolled" style
    pub scrolled: bool,
    pub menu_open: bool,
    /// Page scrolling is locked while the mobile menu covers it
    pub body_scroll_locked: bool,
    /// Id of the section the reader is in
    pub active_section: Option<String>,
    config: NavConfig,
    resize: Debounce,
    pending_width: f32,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(NavConfig::default())
    }
}

impl NavState {
    pub fn new(config: NavConfig) -> Self {
        Self {
            scrolled: false,
            menu_open: false,
            body_scroll_locked: false,
            active_section: None,
            resize: Debounce::from_millis(config.resize_debounce_ms),
            pending_width: 0.0,
            config,
        }
    }

    /// Sections must be in document order
    pub fn on_scroll(&mut self, scroll_y: f32, sections: &[Section]) {
        self.scrolled = scroll_y > self.config.scrolled_threshold;
        self.active_section = sections
            .iter()
            .filter(|s| scroll_y >= s.top - self.config.section_offset)
            .last()
            .map(|s| s.id.clone());
    }

    pub fn toggle_menu(&mut self) {
        self.set_menu(!self.menu_open);
    }

    pub fn on_link_click(&mut self) {
        self.close_menu();
    }

    pub fn on_escape(&mut self) {
        self.close_menu();
    }

    /// Window width changed; acted on once resizing settles
    pub fn on_resize(&mut self, width: f32, now: Duration) {
        self.pending_width = width;
        self.resize.trigger(now);
    }

    /// Apply a settled resize. Returns true if the menu was closed.
    pub fn poll(&mut self, now: Duration) -> bool {
        if !self.resize.poll(now) {
            return false;
        }
        if self.pending_width > self.config.mobile_breakpoint && self.menu_open {
            self.close_menu();
            return true;
        }
        false
    }

    /// `href` is an in-page anchor like `#about`
    pub fn link_is_active(&self, href: &str) -> bool {
        let target = href.strip_prefix('#').unwrap_or(href);
        self.active_section.as_deref() == Some(target)
    }

    fn close_menu(&mut self) {
        if self.menu_open {
            self.set_menu(false);
        }
    }

    fn set_menu(&mut self, open: bool) {
        self.menu_open = open;
        self.body_scroll_locked = open;
    }
}
