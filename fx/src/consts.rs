//! Shared timing and geometry constants for the animation engines.

// ── Typewriter ──────────────────────────────────────────────────

/// Delay between typed characters, in milliseconds.
pub const TYPE_DELAY_MS: u64 = 90;

/// Delay between deleted characters — deliberately faster than typing.
pub const DELETE_DELAY_MS: u64 = 40;

/// Dwell after a fully-typed word (and after a fully-erased one), in
/// milliseconds.
pub const DWELL_MS: u64 = 500;

/// Cursor blink half-period while the typewriter dwells.
pub const BLINK_INTERVAL_MS: u64 = 500;

// ── Starfield ───────────────────────────────────────────────────

/// Opacity lost by every star on every frame.
pub const FADE_STEP: f64 = 0.018;

/// Minimum gap between spawn batches, in milliseconds.
pub const SPAWN_GAP_MIN_MS: f64 = 400.0;

/// Random extra gap added on top of [`SPAWN_GAP_MIN_MS`].
pub const SPAWN_GAP_JITTER_MS: f64 = 400.0;

/// Smallest spawn batch; a random 0 or 1 extra star is added per batch.
pub const SPAWN_BATCH_MIN: usize = 2;

/// Star segment length range: `[MIN, MIN + SPREAD)`.
pub const STAR_LENGTH_MIN: f64 = 60.0;
pub const STAR_LENGTH_SPREAD: f64 = 40.0;

/// Star speed range in pixels per frame: `[MIN, MIN + SPREAD)`.
pub const STAR_SPEED_MIN: f64 = 6.0;
pub const STAR_SPEED_SPREAD: f64 = 3.0;

/// Star spawn opacity range: `[MIN, MIN + SPREAD)`.
pub const STAR_ALPHA_MIN: f64 = 0.5;
pub const STAR_ALPHA_SPREAD: f64 = 0.2;

/// Horizontal spawn band as fractions of the surface width: stars start in
/// `[5%, 95%)`.
pub const SPAWN_X_MARGIN: f64 = 0.05;
pub const SPAWN_X_BAND: f64 = 0.9;

/// Stars spawn within the first 20 px of surface height.
pub const SPAWN_Y_MAX: f64 = 20.0;

/// Target end-point band as fractions of the surface height: `[20%, 100%)`.
pub const END_Y_MARGIN: f64 = 0.2;
pub const END_Y_BAND: f64 = 0.8;

/// Total horizontal drift jitter; the heading aims at `±(JITTER / 2)` px
/// off the start column.
pub const DRIFT_JITTER: f64 = 200.0;

// ── Rendering ───────────────────────────────────────────────────

/// Soft glow radius around each star segment, in pixels.
pub const STAR_GLOW_BLUR: f64 = 4.0;

/// Star segment stroke width, in pixels.
pub const STAR_LINE_WIDTH: f64 = 1.1;
