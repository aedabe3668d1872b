//! Giga Guy - tile-grid collision for a 2D side-scroller
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, slopes, collision resolution, tick)
//! - `level`: Row-based text level format
//! - `settings`: Data-driven physics tuning

pub mod level;
pub mod settings;
pub mod sim;

pub use level::{LevelError, level_to_text, load_level, parse_level};
pub use settings::{PhysicsSettings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Grid cell dimensions (world units)
    pub const CELL_WIDTH: f32 = 32.0;
    pub const CELL_HEIGHT: f32 = 32.0;

    /// Inward nudge of the lower side sample rows, keeps them from acting as floor points
    pub const SIDE_OFFSET: f32 = 3.0;
    /// Horizontal nudge of the end sample columns, keeps one-tile steps from favoring ends
    pub const END_OFFSET: f32 = 7.0;
    /// Height above the hitbox bottom of the middle slope probe
    pub const SLOPE_PROBE_HEIGHT: f32 = 2.0;

    /// Actor defaults
    pub const ACTOR_WIDTH: f32 = 32.0;
    pub const ACTOR_HEIGHT: f32 = 32.0;

    /// Physics defaults (pixels, seconds; y grows downward)
    pub const GRAVITY: f32 = 1800.0;
    pub const RUN_SPEED: f32 = 220.0;
    pub const JUMP_SPEED: f32 = 620.0;
    pub const MAX_FALL_SPEED: f32 = 900.0;
}

/// Cell size as a vector (width, height)
#[inline]
pub fn default_cell_size() -> Vec2 {
    Vec2::new(consts::CELL_WIDTH, consts::CELL_HEIGHT)
}

/// Actor size as a vector (width, height)
#[inline]
pub fn default_actor_size() -> Vec2 {
    Vec2::new(consts::ACTOR_WIDTH, consts::ACTOR_HEIGHT)
}
