//! Fixed timestep simulation tick
//!
//! Integrates the actor's velocity and position, then hands it to the
//! collision resolver. Deterministic: same state + same inputs = same result.

use super::collision::resolve;
use super::grid::Grid;
use super::state::Actor;
use crate::settings::PhysicsSettings;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Horizontal intent in [-1, 1]
    pub move_dir: f32,
    /// Jump button held
    pub jump: bool,
}

/// Advance the actor by one fixed timestep of `settings.dt`
pub fn tick(actor: &mut Actor, grid: &Grid, input: &TickInput, settings: &PhysicsSettings) {
    let dt = settings.dt;
    let grounded = actor.contacts.on_ground;

    actor.vel.x = input.move_dir.clamp(-1.0, 1.0) * settings.run_speed;

    if input.jump && grounded && !actor.jump.is_jumping {
        actor.vel.y = -settings.jump_speed;
        actor.jump.is_jumping = true;
        actor.jump.in_arc = false;
        log::debug!("Jump from ({:.1}, {:.1})", actor.pos.x, actor.pos.y);
    }

    // Gravity, capped so one step never outruns the side samples
    actor.vel.y = (actor.vel.y + settings.gravity * dt).min(settings.max_fall_speed);

    // Past the apex the jump becomes an arc that can end on landing
    if actor.jump.is_jumping && actor.vel.y >= 0.0 {
        actor.jump.in_arc = true;
    }

    // Follow the ramp instead of launching off it on the way down
    if grounded
        && actor.contacts.on_slope
        && !actor.jump.is_jumping
        && let Some(slope) = actor.contacts.slope
    {
        let along = -slope.gradient() * actor.vel.x;
        actor.vel.y = actor.vel.y.max(along).min(settings.max_fall_speed);
    }

    actor.pos += actor.vel * dt;

    let was_grounded = grounded;
    resolve(actor, grid);

    if actor.contacts.on_ground && !was_grounded {
        log::debug!("Landed at ({:.1}, {:.1})", actor.pos.x, actor.pos.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{SlopeVariant, TileKind};
    use glam::Vec2;

    fn floor_grid() -> Grid {
        let mut grid = Grid::new(6, 10, Vec2::splat(32.0));
        for col in 0..10 {
            grid.place(4, col, TileKind::Flat);
        }
        grid
    }

    fn settle(actor: &mut Actor, grid: &Grid, settings: &PhysicsSettings) {
        for _ in 0..240 {
            tick(actor, grid, &TickInput::default(), settings);
        }
    }

    #[test]
    fn test_falls_and_lands_on_floor() {
        let grid = floor_grid();
        let settings = PhysicsSettings::default();
        let mut actor = Actor::new(Vec2::new(64.0, 0.0), Vec2::splat(32.0));

        settle(&mut actor, &grid, &settings);

        assert!(actor.contacts.on_ground);
        assert_eq!(actor.hitbox().bottom(), 128.0);
        assert_eq!(actor.vel.y, 0.0);
    }

    #[test]
    fn test_fall_speed_is_capped() {
        let grid = Grid::new(2, 2, Vec2::splat(32.0));
        let settings = PhysicsSettings::default();
        let mut actor = Actor::default();
        for _ in 0..600 {
            tick(&mut actor, &grid, &TickInput::default(), &settings);
        }
        assert_eq!(actor.vel.y, settings.max_fall_speed);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let grid = floor_grid();
        let settings = PhysicsSettings::default();
        let mut actor = Actor::new(Vec2::new(64.0, 0.0), Vec2::splat(32.0));
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };

        // Airborne: no jump
        tick(&mut actor, &grid, &jump, &settings);
        assert!(!actor.jump.is_jumping);

        settle(&mut actor, &grid, &settings);
        tick(&mut actor, &grid, &jump, &settings);
        assert!(actor.jump.is_jumping);
        assert!(actor.vel.y < 0.0);
        assert!(!actor.contacts.on_ground);

        // Ride the arc back down; landing ends the jump
        settle(&mut actor, &grid, &settings);
        assert!(!actor.jump.is_jumping);
        assert!(actor.contacts.on_ground);
        assert_eq!(actor.hitbox().bottom(), 128.0);
    }

    #[test]
    fn test_walks_into_wall() {
        let mut grid = floor_grid();
        grid.place(3, 6, TileKind::Flat);
        let settings = PhysicsSettings::default();
        let mut actor = Actor::new(Vec2::new(64.0, 96.0), Vec2::splat(32.0));
        let right = TickInput {
            move_dir: 1.0,
            ..Default::default()
        };

        for _ in 0..240 {
            tick(&mut actor, &grid, &right, &settings);
        }

        assert_eq!(actor.hitbox().right(), 192.0);
        assert!(actor.contacts.on_wall);
        assert!(actor.contacts.on_right_wall);
        assert!(actor.contacts.on_ground);
    }

    #[test]
    fn test_walks_up_a_ramp() {
        // Floor, then a 45 degree ramp up onto a one-tile ledge
        let mut grid = floor_grid();
        grid.place(3, 4, TileKind::Slope(SlopeVariant::Right45));
        for col in 5..10 {
            grid.place(3, col, TileKind::Flat);
        }
        let settings = PhysicsSettings::default();
        let mut actor = Actor::new(Vec2::new(32.0, 96.0), Vec2::splat(32.0));
        let right = TickInput {
            move_dir: 1.0,
            ..Default::default()
        };

        let mut touched_slope = false;
        for _ in 0..120 {
            tick(&mut actor, &grid, &right, &settings);
            touched_slope |= actor.contacts.on_slope;
        }

        assert!(touched_slope);
        assert!(actor.pos.x > 5.0 * 32.0);
        // Standing on the ledge
        assert_eq!(actor.hitbox().bottom(), 96.0);
    }

    #[test]
    fn test_slope_following_respects_fall_cap() {
        let grid = Grid::new(4, 4, Vec2::splat(32.0));
        let settings = PhysicsSettings {
            run_speed: 3000.0,
            ..Default::default()
        };
        // Standing on a ramp that drops away to the right
        let mut actor = Actor::new(Vec2::new(16.0, 16.0), Vec2::splat(32.0));
        actor.contacts.on_ground = true;
        actor.contacts.on_slope = true;
        actor.contacts.slope = Some(SlopeVariant::Left45);
        let right = TickInput {
            move_dir: 1.0,
            ..Default::default()
        };

        tick(&mut actor, &grid, &right, &settings);

        assert_eq!(actor.vel.y, settings.max_fall_speed);
        assert_eq!(actor.pos.y, 16.0 + settings.max_fall_per_step());
    }

    #[test]
    fn test_determinism() {
        let grid = floor_grid();
        let settings = PhysicsSettings::default();
        let mut a = Actor::new(Vec2::new(40.0, 10.0), Vec2::splat(32.0));
        let mut b = a.clone();

        let inputs = [
            TickInput {
                move_dir: 1.0,
                jump: false,
            },
            TickInput {
                move_dir: 0.5,
                jump: true,
            },
            TickInput::default(),
        ];
        for _ in 0..100 {
            for input in &inputs {
                tick(&mut a, &grid, input, &settings);
                tick(&mut b, &grid, input, &settings);
            }
        }
        assert_eq!(a, b);
    }
}
