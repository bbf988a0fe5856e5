use bevy::prelude::*;
use folio_core::Viewport;
use folio_physics::{FrameStats, ParticleField, RenderSurface};
use rand::Rng;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// "Call me again before the next repaint"
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Shared stop flag. Every clone observes the same cancellation, and it
/// may be tripped from any thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The frame ran and the next one was requested
    Rendered(FrameStats),
    /// The loop was stopped; nothing ran
    Cancelled,
    /// No surface to draw on; the loop ends without scheduling
    SurfaceLost,
}

/// Scheduler that just counts requests. Hosts (and tests) drain it to
/// decide whether to run another frame.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    pending: usize,
    pub total_requests: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one pending request
    pub fn take(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        true
    }

    pub fn pending(&self) -> usize {
        self.pending
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.pending += 1;
        self.total_requests += 1;
    }
}

/// The particle field plus its self-rescheduling frame loop
#[derive(Resource)]
pub struct FieldAnimation {
    field: ParticleField,
    token: CancelToken,
    /// A frame request is outstanding with the scheduler
    armed: bool,
    frames: u64,
    last_stats: FrameStats,
}

impl FieldAnimation {
    pub fn new(field: ParticleField) -> Self {
        Self {
            field,
            token: CancelToken::new(),
            armed: false,
            frames: 0,
            last_stats: FrameStats::default(),
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Handle for stopping the loop from elsewhere
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Frames rendered since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// True while a frame request is waiting on the scheduler
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Size the surface and request the first frame. Without a surface,
    /// after a stop or with a frame already outstanding nothing happens and
    /// `false` is returned.
    pub fn start<S, F>(&mut self, surface: Option<&mut S>, scheduler: &mut F) -> bool
    where
        S: RenderSurface,
        F: FrameScheduler,
    {
        let Some(surface) = surface else {
            return false;
        };
        if self.token.is_cancelled() || self.armed {
            return false;
        }
        surface.set_size(self.field.viewport());
        scheduler.request_frame();
        self.armed = true;
        true
    }

    /// Start again with a fresh token after [`FieldAnimation::stop`].
    /// Clones of the old token stay cancelled. A running loop is left alone.
    /// When the stopped loop still has a request outstanding, that request
    /// carries on under the new token instead of a second one being issued.
    pub fn restart<S, F>(&mut self, surface: Option<&mut S>, scheduler: &mut F) -> bool
    where
        S: RenderSurface,
        F: FrameScheduler,
    {
        if self.is_running() && self.armed {
            return false;
        }
        self.token = CancelToken::new();
        let started = match surface {
            Some(surface) if self.armed => {
                surface.set_size(self.field.viewport());
                true
            }
            surface => self.start(surface, scheduler),
        };
        if started {
            info!("Field animation restarted with {} particles", self.field.len());
        }
        started
    }

    /// One scheduled callback: draw a frame and request the next, unless
    /// stopped or the surface has gone away.
    pub fn on_frame<S, F>(&mut self, surface: Option<&mut S>, scheduler: &mut F) -> FrameOutcome
    where
        S: RenderSurface,
        F: FrameScheduler,
    {
        self.armed = false;
        if self.token.is_cancelled() {
            return FrameOutcome::Cancelled;
        }
        let Some(surface) = surface else {
            return FrameOutcome::SurfaceLost;
        };

        let stats = self.field.advance_frame(surface);
        self.frames += 1;
        self.last_stats = stats;

        if !self.token.is_cancelled() {
            scheduler.request_frame();
            self.armed = true;
        }
        FrameOutcome::Rendered(stats)
    }

    /// Stop requesting frames
    pub fn stop(&mut self) {
        if !self.token.is_cancelled() {
            self.token.cancel();
            info!("Field animation stopped after {} frames", self.frames);
        }
    }

    /// New viewport bounds; the surface follows when present
    pub fn resize<S: RenderSurface>(&mut self, viewport: Viewport, surface: Option<&mut S>) {
        match surface {
            Some(surface) => self.field.resize(viewport, surface),
            None => self.field.set_viewport(viewport),
        }
    }

    /// Throw away the population and scatter `count` new particles
    pub fn reinitialize(&mut self, count: usize, rng: &mut impl Rng) {
        self.field.initialize(count, rng);
        let viewport = self.field.viewport();
        info!(
            "Particle field initialized: {} particles in {}x{}",
            count, viewport.width, viewport.height
        );
    }
}
