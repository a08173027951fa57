//! Runtime tuning loaded from `asteroids.toml`.
//!
//! Every section defaults to the values in [`crate::constants`], and each
//! section is `#[serde(default)]`, so a file only needs the keys it wants to
//! override:
//!
//! ```toml
//! [ship]
//! fire_delay_ms = 150.0
//!
//! [asteroids]
//! count = 8
//! ```
//!
//! A missing file is not an error.  A file that exists but does not parse
//! is, and aborts startup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::*;
use crate::error::{GameError, GameResult};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field: FieldConfig,
    pub ship: ShipConfig,
    pub asteroids: AsteroidConfig,
    pub scores: ScoreConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
    pub ship_wrap_margin: f32,
    pub body_wrap_margin: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            ship_wrap_margin: SHIP_WRAP_MARGIN,
            body_wrap_margin: BODY_WRAP_MARGIN,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    pub initial_health: u32,
    pub pool_size: usize,
    pub fire_delay_ms: f32,
    pub rotation_rate: f32,
    pub base_speed: f32,
    pub boost_duration_ms: f32,
    pub boost_max: f32,
    pub boost_min: f32,
    pub projectile_speed: f32,
    pub radius: f32,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            initial_health: INITIAL_HEALTH,
            pool_size: PROJECTILE_POOL_SIZE,
            fire_delay_ms: FIRE_DELAY_MS,
            rotation_rate: ROTATION_RATE,
            base_speed: SHIP_BASE_SPEED,
            boost_duration_ms: BOOST_DURATION_MS,
            boost_max: BOOST_MAX,
            boost_min: BOOST_MIN,
            projectile_speed: PROJECTILE_SPEED,
            radius: SHIP_RADIUS,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct AsteroidConfig {
    pub count: usize,
    pub large_speed: (f32, f32),
    pub small_speed: (f32, f32),
    pub speed_factor: f32,
    pub spike_heading_x: f32,
    pub spike_heading_y: f32,
    pub spike_multiplier: f32,
    pub large_radius: f32,
    pub small_radius: f32,
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            count: ASTEROID_COUNT,
            large_speed: (LARGE_SPEED_MIN, LARGE_SPEED_MAX),
            small_speed: (SMALL_SPEED_MIN, SMALL_SPEED_MAX),
            speed_factor: SPEED_FACTOR,
            spike_heading_x: SPIKE_HEADING_X,
            spike_heading_y: SPIKE_HEADING_Y,
            spike_multiplier: SPIKE_MULTIPLIER,
            large_radius: LARGE_RADIUS,
            small_radius: SMALL_RADIUS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    pub path: PathBuf,
    pub table_size: usize,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(SCORE_FILE),
            table_size: TOP_SCORES,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub frame_ms: u64,
    pub log_path: PathBuf,
    /// Ring the terminal bell on explosions.
    pub bell: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_ms: FRAME_MS,
            log_path: PathBuf::from(LOG_FILE),
            bell: true,
        }
    }
}

impl GameConfig {
    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> GameResult<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(GameError::Config {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };
        Self::parse(&text).map_err(|message| GameError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn parse(text: &str) -> Result<Self, String> {
        let cfg: Self = toml::from_str(text).map_err(|e| e.to_string())?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        let (width, height) = (self.field.width, self.field.height);
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err("field width and height must be positive and finite".into());
        }
        for (name, (lo, hi)) in [
            ("large_speed", self.asteroids.large_speed),
            ("small_speed", self.asteroids.small_speed),
        ] {
            if !(lo.is_finite() && hi.is_finite()) || lo > hi || lo < 0.0 {
                return Err(format!("asteroids.{name} must be a finite, ascending, non-negative range"));
            }
        }
        if self.ship.boost_duration_ms < 0.0 || self.ship.fire_delay_ms < 0.0 {
            return Err("ship timers must be non-negative".into());
        }
        Ok(())
    }

    /// `$ASTEROIDS_CONFIG`, or `asteroids.toml` in the working directory.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }
}
