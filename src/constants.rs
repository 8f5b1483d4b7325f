/// Cursor tuning defaults.
///
/// Every knob here seeds a field of `CursorConfig` and can be overridden per
/// page through `data-cursor-*` attributes on the host element.

// Follower smoothing (fraction of remaining distance covered per tick)
pub const FOLLOWER_EASING: f32 = 0.15;

// Cursor dot
pub const DOT_SIZE: f32 = 12.0; // px
pub const DOT_PRESSED_SCALE: f32 = 1.5; // dot scale while the pointer is down

// Follower ring sizing (idle -> hovering an interactive element)
pub const RING_SIZE: f32 = 32.0; // px diameter
pub const RING_BORDER: f32 = 2.0; // px stroke
pub const RING_HOVER_SIZE: f32 = 50.0;
pub const RING_HOVER_BORDER: f32 = 3.0;
pub const RING_OPACITY: f32 = 0.6;
pub const HOVER_TRANSITION_SEC: f32 = 0.2;

// Trail particles
pub const TRAIL_TTL_MS: u64 = 800;
pub const TRAIL_EVERY_N_TICKS: u32 = 3; // spawn attempt stride
pub const TRAIL_MIN_DISTANCE: f32 = 4.0; // px moved since the last trail spawn
pub const TRAIL_MIN_SPEED: f32 = 1.0; // px per tick
pub const TRAIL_SKIP_PROBABILITY: f32 = 0.3; // chance an eligible spawn is dropped
pub const TRAIL_SPEED_FULL_INTENSITY: f32 = 20.0; // px per tick mapping to intensity 1
pub const TRAIL_SIZE_MIN: f32 = 2.0;
pub const TRAIL_SIZE_MAX: f32 = 5.0;
pub const TRAIL_BASE_OPACITY: f32 = 0.6;
pub const TRAIL_SCALE_DECAY: f32 = 0.5; // scale lost over a full lifetime

// Burst particles (pointer down)
pub const BURST_COUNT: usize = 12;
pub const BURST_TTL_MS: u64 = 1000;
pub const BURST_DISTANCE_MIN: f32 = 30.0;
pub const BURST_DISTANCE_MAX: f32 = 90.0;
pub const BURST_SPEED_MIN: f32 = 0.5;
pub const BURST_SPEED_MAX: f32 = 1.0;
pub const BURST_SIZE_MIN: f32 = 2.0;
pub const BURST_SIZE_MAX: f32 = 6.0;
pub const BURST_SCALE_DECAY: f32 = 0.3;

// Hard ceiling on live particles regardless of spawn policy
pub const MAX_LIVE_PARTICLES: usize = 256;

// Orbiting accents around the pointer
pub const ORB_COUNT: usize = 6;
pub const ORB_RADII: [f32; 3] = [20.0, 25.0, 30.0]; // cycled per orb
pub const ORB_PERIOD_SEC: f32 = 3.0; // one revolution
pub const ORB_SIZE: f32 = 8.0;
pub const ORB_OPACITY: f32 = 0.3;

// Mount gate: no custom cursor below the site's `lg` breakpoint
pub const MIN_VIEWPORT_WIDTH: f64 = 1024.0;
