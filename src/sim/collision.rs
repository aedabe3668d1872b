//! Tile collision detection and response
//!
//! The tricky part of the engine: instead of sweeping the full hitbox, each step
//! probes a fixed set of sample points around it. A sample maps to one grid
//! cell, and a solid cell whose hitbox overlaps the actor is a hit. There are
//! three kinds of samples, resolved strictly in this order:
//!
//! 1. Slope samples down the horizontal center (center, 2 above bottom, bottom)
//! 2. Side samples on the left and right edges
//! 3. End samples on the top and bottom edges
//!
//! Slopes go first so that end correction can be skipped while the actor
//! stands on one; otherwise walking a ramp looks bumpy.
//!
//! Within a phase every hit is collected from the same hitbox before any
//! correction is applied, then corrections run in sample order. Later
//! corrections overwrite earlier ones.
//!
//! NOTE: per-step fall distance must stay below [`max_fall_per_step`], or the
//! lowest side samples reach into the floor row and push the actor sideways
//! (or it tunnels through the floor entirely).

use glam::Vec2;

use super::grid::Grid;
use super::rect::Rect;
use super::state::{Actor, Contacts};
use super::tile::Tile;
use crate::consts::*;

/// Slope probes: the hitbox's center column at its vertical center, just above
/// the bottom, and at the bottom
pub fn slope_samples(hitbox: &Rect) -> [Vec2; 3] {
    let x = hitbox.center().x;
    [
        Vec2::new(x, hitbox.center().y),
        Vec2::new(x, hitbox.bottom() - SLOPE_PROBE_HEIGHT),
        Vec2::new(x, hitbox.bottom()),
    ]
}

/// Side probes on the left and right edges.
///
/// Rows sit at fractions `(1 + i) / (2 * tiles_high)` of the height for
/// `i = 0, 2, 4, ...` up to `tiles_high`. Rows at or below the middle are
/// lifted by [`SIDE_OFFSET`] so they never act as floor points.
pub fn side_samples(hitbox: &Rect, cell: Vec2) -> Vec<Vec2> {
    let tiles_high = (hitbox.height() / cell.y).ceil();
    let mut samples = Vec::new();

    let mut i = 0.0;
    while i <= tiles_high {
        let fraction = (1.0 + i) / (tiles_high * 2.0);
        // Exactly 0.5 takes the lifted branch so 1x1 actors still get it
        let offset = if fraction < 0.5 { 0.0 } else { -SIDE_OFFSET };
        let y = hitbox.top() + fraction * hitbox.height() + offset;
        for edge in [hitbox.left(), hitbox.right()] {
            samples.push(Vec2::new(edge, y));
        }
        i += 2.0;
    }

    samples
}

/// End probes on the top and bottom edges.
///
/// Columns sit at fractions `i / tiles_wide` of the width for
/// `i = 0..=tiles_wide`, nudged by [`END_OFFSET`]: outward-side columns move
/// right, far-side columns move left, the exact middle stays put.
pub fn end_samples(hitbox: &Rect, cell: Vec2) -> Vec<Vec2> {
    let tiles_wide = (hitbox.width() / cell.x).ceil();
    let columns = tiles_wide as usize;
    let mut samples = Vec::with_capacity((columns + 1) * 2);

    for i in 0..=columns {
        let fraction = i as f32 / tiles_wide;
        let offset = if fraction < 0.5 {
            END_OFFSET
        } else if fraction > 0.5 {
            -END_OFFSET
        } else {
            0.0
        };
        let x = hitbox.left() + offset + fraction * hitbox.width();
        for edge in [hitbox.top(), hitbox.bottom()] {
            samples.push(Vec2::new(x, edge));
        }
    }

    samples
}

/// Largest downward move per step that keeps the lowest side row out of the
/// floor cell the bottom end samples are standing on
pub fn max_fall_per_step(size: Vec2, cell: Vec2) -> f32 {
    let hitbox = Rect::new(Vec2::ZERO, size);
    let lowest_side_row = side_samples(&hitbox, cell)
        .iter()
        .map(|p| p.y)
        .fold(f32::MIN, f32::max);
    hitbox.bottom() - lowest_side_row
}

fn collect_hits(grid: &Grid, samples: &[Vec2], hitbox: &Rect) -> Vec<Tile> {
    samples
        .iter()
        .filter_map(|&point| grid.probe(point, hitbox))
        .collect()
}

/// Resolve one step of actor-vs-grid collision.
///
/// Mutates position and velocity in place and replaces the actor's contacts.
/// Samples outside the grid read as empty space.
pub fn resolve(actor: &mut Actor, grid: &Grid) {
    let cell = grid.cell_size();
    let mut contacts = Contacts::default();

    // Slopes
    let hitbox = actor.hitbox();
    let hits = collect_hits(grid, &slope_samples(&hitbox), &hitbox);
    for tile in hits.iter().filter(|t| t.is_slope()) {
        resolve_slope(actor, &mut contacts, tile);
    }

    // Sides
    let hitbox = actor.hitbox();
    let hits = collect_hits(grid, &side_samples(&hitbox, cell), &hitbox);
    for tile in hits.iter().filter(|t| !t.is_slope()) {
        resolve_side(actor, &mut contacts, tile);
    }

    // Ends
    let hitbox = actor.hitbox();
    let hits = collect_hits(grid, &end_samples(&hitbox, cell), &hitbox);
    for tile in hits.iter().filter(|t| !t.is_slope()) {
        resolve_end(actor, &mut contacts, tile);
    }

    actor.commit(contacts);
}

/// Stand the actor on a slope surface.
///
/// The surface height is taken at the actor's horizontal center. The slope
/// variant is recorded even when the actor is above the surface, so the tick
/// driver can couple horizontal and vertical speed.
pub fn resolve_slope(actor: &mut Actor, contacts: &mut Contacts, tile: &Tile) {
    let hitbox = actor.hitbox();
    let (Some(variant), Some(surface)) = (tile.slope(), tile.surface_y(hitbox.center().x)) else {
        return;
    };
    contacts.on_slope = true;
    contacts.slope = Some(variant);

    if hitbox.bottom() > surface {
        log::trace!("slope {:?}: snap bottom {} -> {}", variant, hitbox.bottom(), surface);
        actor.pos.y = surface - hitbox.height();
        actor.vel.y = 0.0;
        contacts.on_ground = true;
    }
}

/// Push the actor out of a wall horizontally
pub fn resolve_side(actor: &mut Actor, contacts: &mut Contacts, tile: &Tile) {
    let hitbox = actor.hitbox();
    contacts.on_wall = true;

    if hitbox.left() < tile.hitbox.left() {
        actor.pos.x = tile.hitbox.left() - hitbox.width();
        contacts.on_right_wall = true;
    } else {
        actor.pos.x = tile.hitbox.right();
        contacts.on_right_wall = false;
    }
    actor.vel.x = 0.0;
    log::trace!("wall at x={}: actor x -> {}", tile.hitbox.left(), actor.pos.x);
}

/// Push the actor out of a floor or ceiling vertically
pub fn resolve_end(actor: &mut Actor, contacts: &mut Contacts, tile: &Tile) {
    let hitbox = actor.hitbox();

    if hitbox.top() < tile.hitbox.top() {
        // Floor. The slope phase already placed the actor; snapping again to
        // the flat tile's top makes ramps jitter.
        if contacts.on_slope {
            return;
        }
        actor.pos.y = tile.hitbox.top() - hitbox.height();
        actor.vel.y = 0.0;
        contacts.on_ground = true;
        if actor.jump.in_arc {
            contacts.jump_ended = true;
        }
    } else {
        // Ceiling
        actor.pos.y = tile.hitbox.bottom();
        actor.vel.y = 0.0;
        contacts.jump_ended = true;
    }
    log::trace!("end at y={}: actor y -> {}", tile.hitbox.top(), actor.pos.y);
}
