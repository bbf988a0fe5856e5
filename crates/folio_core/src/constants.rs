// Page-space units are CSS pixels; times are milliseconds unless stated.

/// Particles in the background field
pub const DEFAULT_PARTICLE_COUNT: usize = 100;

/// Pairs closer than this are joined by a line (exclusive bound)
pub const CONNECTION_DISTANCE: f32 = 150.0;

/// Per-axis speed bound, velocities are drawn from [-MAX_SPEED, MAX_SPEED)
pub const MAX_SPEED: f32 = 0.25;

/// Particle radius range [RADIUS_MIN, RADIUS_MAX)
pub const RADIUS_MIN: f32 = 1.0;
pub const RADIUS_MAX: f32 = 3.0;

/// Hairline width of connection strokes
pub const STROKE_WIDTH: f32 = 0.5;

/// Fraction of the remaining distance the cursor glow covers each frame
pub const GLOW_EASING: f32 = 0.1;

/// Parallax travel per unit of card speed
pub const PARALLAX_TRAVEL: f32 = 50.0;

/// Card rotation in degrees per pixel of horizontal offset
pub const PARALLAX_TILT: f32 = 0.1;

/// Navbar gets its "scrolled" look past this offset
pub const NAV_SCROLLED_THRESHOLD: f32 = 50.0;

/// A section becomes active this far before its top reaches the viewport top
pub const SECTION_ACTIVATION_OFFSET: f32 = 200.0;

/// Anchor scrolling stops this far above the target (fixed navbar height)
pub const ANCHOR_SCROLL_OFFSET: f32 = 70.0;

/// Back-to-top button shows past this offset
pub const BACK_TO_TOP_THRESHOLD: f32 = 500.0;

/// Wider than this the mobile menu is force-closed
pub const MOBILE_BREAKPOINT: f32 = 968.0;

pub const RESIZE_DEBOUNCE_MS: u64 = 250;

pub const TYPE_DELAY_MS: u64 = 100;
pub const DELETE_DELAY_MS: u64 = 50;
pub const WORD_HOLD_MS: u64 = 2000;
pub const NEXT_WORD_DELAY_MS: u64 = 500;

/// Minimum visible fraction before an element is revealed
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// The reveal root is the viewport shrunk by this much at the bottom
pub const REVEAL_ROOT_MARGIN_BOTTOM: f32 = 50.0;

/// Delay between consecutive child reveals
pub const REVEAL_STAGGER_MS: u64 = 100;

/// Success status on the contact form hides after this long
pub const STATUS_HIDE_MS: u64 = 5000;
