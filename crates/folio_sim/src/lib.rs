pub mod animation;
pub mod debounce;
pub mod pipeline;
pub mod state;
pub mod typewriter;

pub use animation::{CancelToken, FieldAnimation, FrameOutcome, FrameScheduler, ManualScheduler};
pub use debounce::Debounce;
pub use typewriter::{TypeStep, Typewriter, TypewriterClock};
