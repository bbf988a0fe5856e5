use bevy::prelude::*;
use folio_core::{FolioConfig, Viewport};
use folio_physics::DrawList;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::animation::{FrameScheduler, ManualScheduler};
use crate::typewriter::{Typewriter, TypewriterClock};

/// Loaded configuration, shared by every plugin
#[derive(Resource, Clone, Default)]
pub struct FolioSettings(pub FolioConfig);

/// CPU display list the field draws into; the renderer replays it.
/// Removing this resource takes the surface away and ends the loop.
#[derive(Resource, Default)]
pub struct FieldCanvas(pub DrawList);

/// Outstanding "next frame" requests from the field loop
#[derive(Resource, Default)]
pub struct FrameRequests(pub ManualScheduler);

impl FrameScheduler for FrameRequests {
    fn request_frame(&mut self) {
        self.0.request_frame();
    }
}

#[derive(Resource)]
pub struct FieldRng(pub ChaCha8Rng);

impl FieldRng {
    /// Seeded when the config pins a seed, random otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Rotating headline text
#[derive(Resource)]
pub struct Headline(pub TypewriterClock);

impl Headline {
    pub fn from_config(config: &FolioConfig) -> Self {
        Self(TypewriterClock::new(Typewriter::new(&config.typewriter)))
    }
}

/// Window size in logical pixels, truncated to whole pixels
pub fn window_viewport(window: &Window) -> Viewport {
    Viewport::new(
        window.resolution.width().max(0.0) as u32,
        window.resolution.height().max(0.0) as u32,
    )
}
