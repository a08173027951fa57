//! Compile-time defaults.  `GameConfig::default()` is built from these, so
//! they remain the authoritative values when no config file is present.

// ── Play field ────────────────────────────────────────────────────────────────

pub const FIELD_WIDTH: f32 = 800.0;
pub const FIELD_HEIGHT: f32 = 800.0;

/// How far past an edge the ship may drift before it re-enters opposite.
pub const SHIP_WRAP_MARGIN: f32 = 50.0;

/// Bodies leave at -200 / 1000 but re-enter at 0 / 800.
pub const BODY_WRAP_MARGIN: f32 = 200.0;

// ── Ship ──────────────────────────────────────────────────────────────────────

pub const INITIAL_HEALTH: u32 = 3;
pub const PROJECTILE_POOL_SIZE: usize = 5;

/// Minimum milliseconds between two shots.
pub const FIRE_DELAY_MS: f32 = 100.0;

/// Degrees per millisecond.
pub const ROTATION_RATE: f32 = 0.25;

/// Pixels per millisecond while thrusting, before any boost.
pub const SHIP_BASE_SPEED: f32 = 0.35;

/// Length of the boost window that follows a thrust start.
pub const BOOST_DURATION_MS: f32 = 800.0;

/// Extra pixels per frame at the very start of the boost window.
pub const BOOST_MAX: f32 = 6.0;

/// Extra pixels per frame at the end of the boost window.
pub const BOOST_MIN: f32 = 1.0;

pub const PROJECTILE_SPEED: f32 = 0.40;
pub const SHIP_RADIUS: f32 = 10.0;

/// Where a projectile is parked after a hit, to be reclaimed next frame.
pub const PROJECTILE_PARK_X: f32 = -200.0;
pub const PROJECTILE_PARK_Y: f32 = -200.0;

// ── Asteroids ─────────────────────────────────────────────────────────────────

pub const ASTEROID_COUNT: usize = 6;

pub const LARGE_SPEED_MIN: f32 = 0.15;
pub const LARGE_SPEED_MAX: f32 = 0.25;
pub const SMALL_SPEED_MIN: f32 = 0.35;
pub const SMALL_SPEED_MAX: f32 = 0.40;

/// Global multiplier on both tier speed ranges.
pub const SPEED_FACTOR: f32 = 1.0;

/// A large body whose heading falls below both thresholds gets the spike.
pub const SPIKE_HEADING_X: f32 = 0.02;
pub const SPIKE_HEADING_Y: f32 = 0.1;
pub const SPIKE_MULTIPLIER: f32 = 10.0;

pub const LARGE_RADIUS: f32 = 30.0;
pub const SMALL_RADIUS: f32 = 15.0;

// ── Scores ────────────────────────────────────────────────────────────────────

pub const TOP_SCORES: usize = 3;
pub const SCORE_FILE: &str = "assets/score.txt";

pub const POINTS_LARGE: u32 = 2;
pub const POINTS_SMALL: u32 = 1;

// ── Front-end ─────────────────────────────────────────────────────────────────

pub const FRAME_MS: u64 = 16;
pub const LOG_FILE: &str = "asteroids.log";
pub const CONFIG_FILE: &str = "asteroids.toml";
pub const CONFIG_ENV: &str = "ASTEROIDS_CONFIG";
