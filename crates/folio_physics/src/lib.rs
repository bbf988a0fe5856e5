pub mod field;
pub mod glow;
pub mod parallax;
pub mod particle;
pub mod surface;

pub use field::{FrameStats, ParticleField};
pub use particle::Particle;
pub use surface::{DrawCommand, DrawList, RenderSurface};
