use std::time::Duration;

// ── Background field ─────────────────────────────────────────────────────────

/// One star per this many square logical units of surface.
pub const STAR_AREA_PER_STAR: f32 = 3000.0;
pub const STAR_DEPTH_MIN: f32 = 0.2;
pub const STAR_DEPTH_MAX: f32 = 1.0;
/// Horizontal drift of a depth 1.0 star, logical units per frame.
pub const STAR_DRIFT_SPEED: f32 = 0.15;
/// Vertical drift of a depth 1.0 star, logical units per frame.
pub const STAR_FALL_SPEED: f32 = 0.02;
pub const STAR_SIZE_MIN: f32 = 0.8;
pub const STAR_SIZE_PER_DEPTH: f32 = 2.2;

pub const CONSTELLATION_COUNT: usize = 4;
pub const CONSTELLATION_DEPTH_MIN: f32 = 0.1;
pub const CONSTELLATION_DEPTH_MAX: f32 = 0.15;
pub const CONSTELLATION_SCALE_MIN: f32 = 120.0;
pub const CONSTELLATION_SCALE_MAX: f32 = 220.0;
pub const CONSTELLATION_ALPHA_MIN: f32 = 0.25;
pub const CONSTELLATION_ALPHA_MAX: f32 = 0.45;

// ── Rockets ──────────────────────────────────────────────────────────────────

pub const ROCKET_SPEED_MIN: f32 = 12.0;
pub const ROCKET_SPEED_MAX: f32 = 15.0;
pub const ROCKET_JITTER: f32 = 0.5;
/// Chance per frame that a climbing rocket sheds a trail particle.
pub const TRAIL_EMIT_CHANCE: f32 = 0.5;
pub const TRAIL_DECAY_MIN: f32 = 0.03;
pub const TRAIL_DECAY_MAX: f32 = 0.06;

// ── Bursts ───────────────────────────────────────────────────────────────────

/// Per-particle hue jitter around the burst hue, in degrees.
pub const BURST_HUE_JITTER: f32 = 20.0;
pub const BURST_SATURATION: f32 = 1.0;
pub const BURST_LIGHTNESS: f32 = 0.65;

/// Alpha at or below which a particle is spent. Repeated f32 subtraction can
/// leave a residue this small where exact arithmetic would reach zero.
pub const DEAD_ALPHA: f32 = 1e-5;

// ── Compositor ───────────────────────────────────────────────────────────────

/// Opacity of the black overlay laid over the previous frame when trails are on.
pub const TRAIL_FADE_ALPHA: f32 = 0.15;
/// Dash on/off lengths for constellation lines, logical units.
pub const CONSTELLATION_DASH: [f32; 2] = [16.0, 16.0];
pub const CONSTELLATION_LINE_ALPHA: f32 = 0.5;
pub const CONSTELLATION_DOT_RADIUS: f32 = 1.5;
pub const CONSTELLATION_COLOR: (u8, u8, u8) = (190, 210, 255);
pub const ROCKET_RADIUS_X: f32 = 1.5;
pub const ROCKET_RADIUS_Y: f32 = 4.0;
/// Least alpha a sub-pixel shape leaves on its pixel, so tiny sparks stay visible.
pub const MIN_DOT_COVERAGE: f32 = 0.35;

// ── Launching & input ────────────────────────────────────────────────────────

pub const AUTO_LAUNCH_INTERVAL_MIN: f32 = 0.3;
pub const AUTO_LAUNCH_INTERVAL_SPREAD: f32 = 0.8;
pub const DRAG_SPAWN_INTERVAL: Duration = Duration::from_millis(100);

// ── Host ─────────────────────────────────────────────────────────────────────

pub const DEFAULT_FPS: u32 = 60;
/// Logical units per terminal half-block pixel.
pub const DEFAULT_SCALE: f32 = 8.0;
