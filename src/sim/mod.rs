//! Deterministic simulation module
//!
//! All collision and movement logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable sample order (slopes, then sides, then ends)
//! - Grid is read-only once built
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod rect;
pub mod slope;
pub mod state;
pub mod tick;
pub mod tile;

pub use collision::{
    end_samples, max_fall_per_step, resolve, resolve_end, resolve_side, resolve_slope,
    side_samples, slope_samples,
};
pub use grid::{Axis, Grid, GridError};
pub use rect::Rect;
pub use slope::SlopeVariant;
pub use state::{Actor, Contacts, JumpState};
pub use tick::{TickInput, tick};
pub use tile::{Tile, TileKind};
