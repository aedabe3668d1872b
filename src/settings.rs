//! Physics tuning
//!
//! Loaded from a JSON file; any missing field falls back to the defaults in
//! [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::max_fall_per_step;

/// Errors from loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("moving {per_step:.2} units per step exceeds the safe {limit:.2} for this actor")]
    TunnelingRisk { per_step: f32, limit: f32 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
}

/// Movement tuning for the tick driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Horizontal speed at full input (units/s)
    pub run_speed: f32,
    /// Initial upward speed of a jump (units/s)
    pub jump_speed: f32,
    /// Terminal fall speed (units/s)
    pub max_fall_speed: f32,
    /// Fixed timestep (s)
    pub dt: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            run_speed: RUN_SPEED,
            jump_speed: JUMP_SPEED,
            max_fall_speed: MAX_FALL_SPEED,
            dt: SIM_DT,
        }
    }
}

impl PhysicsSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded physics settings from {}", path.display());
        Ok(settings)
    }

    /// Per-step fall distance at terminal speed
    pub fn max_fall_per_step(&self) -> f32 {
        self.max_fall_speed * self.dt
    }

    /// Reject tuning the collision sampling cannot keep up with.
    ///
    /// Falling further than the gap between the lowest side samples and the
    /// bottom edge in one step lets the actor tunnel into the floor. Walking
    /// down the steepest ramp drops the actor by its full run distance, so
    /// run speed is held to the same limit.
    pub fn validate(&self, actor_size: Vec2, cell: Vec2) -> Result<(), SettingsError> {
        for (field, value) in [
            ("gravity", self.gravity),
            ("run_speed", self.run_speed),
            ("max_fall_speed", self.max_fall_speed),
            ("dt", self.dt),
        ] {
            if value <= 0.0 {
                return Err(SettingsError::NonPositive { field, value });
            }
        }

        let limit = max_fall_per_step(actor_size, cell);
        let per_step = self.max_fall_per_step().max(self.run_speed * self.dt);
        if per_step >= limit {
            return Err(SettingsError::TunnelingRisk { per_step, limit });
        }
        Ok(())
    }
}
