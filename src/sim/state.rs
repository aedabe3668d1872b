//! Actor state and per-step contact context
//!
//! The actor is owned by the tick driver between steps and by the resolver
//! during one. Everything here is serializable for snapshots.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::slope::SlopeVariant;
use crate::consts::*;

/// Contact flags produced by one resolution step.
///
/// A fresh value starts every step; the resolver commits it to the actor when
/// the step ends.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Contacts {
    pub on_ground: bool,
    pub on_wall: bool,
    /// Meaningful only while `on_wall`: the wall is to the actor's right
    pub on_right_wall: bool,
    pub on_slope: bool,
    /// Last slope touched this step
    pub slope: Option<SlopeVariant>,
    /// A landing or ceiling bump ended the current jump
    pub jump_ended: bool,
}

/// Jump state, persists across steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JumpState {
    pub is_jumping: bool,
    /// Past the apex of the jump (descending)
    pub in_arc: bool,
}

/// The moving rectangle the grid collides against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left of the hitbox
    pub pos: Vec2,
    /// World units per second (y grows downward)
    pub vel: Vec2,
    /// Hitbox width and height
    pub size: Vec2,
    /// Contacts from the most recent resolution step
    #[serde(default)]
    pub contacts: Contacts,
    #[serde(default)]
    pub jump: JumpState,
}

impl Default for Actor {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::new(ACTOR_WIDTH, ACTOR_HEIGHT))
    }
}

impl Actor {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        debug_assert!(size.x > 0.0 && size.y > 0.0, "actor size must be positive");
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            contacts: Contacts::default(),
            jump: JumpState::default(),
        }
    }

    /// Builder-style velocity
    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    #[inline]
    pub fn hitbox(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn on_ground(&self) -> bool {
        self.contacts.on_ground
    }

    /// Apply a finished step's contacts
    pub fn commit(&mut self, contacts: Contacts) {
        if contacts.jump_ended {
            self.jump.is_jumping = false;
            self.jump.in_arc = false;
        }
        self.contacts = contacts;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hitbox_follows_position() {
        let mut actor = Actor::new(Vec2::new(10.0, 20.0), Vec2::new(32.0, 48.0));
        assert_eq!(actor.hitbox().bottom(), 68.0);
        actor.pos.y += 4.0;
        assert_eq!(actor.hitbox().bottom(), 72.0);
        assert_eq!(actor.hitbox().center().x, 26.0);
    }

    #[test]
    fn test_commit_replaces_contacts_and_ends_jump() {
        let mut actor = Actor::default();
        actor.jump = JumpState {
            is_jumping: true,
            in_arc: true,
        };
        actor.contacts.on_wall = true;

        actor.commit(Contacts {
            on_ground: true,
            ..Default::default()
        });
        assert!(actor.on_ground());
        assert!(!actor.contacts.on_wall);
        assert!(actor.jump.is_jumping, "jump persists until a step ends it");

        actor.commit(Contacts {
            jump_ended: true,
            ..Default::default()
        });
        assert!(!actor.jump.is_jumping);
    }

    #[test]
    fn test_serde_snapshot() {
        let actor = Actor::default().with_vel(Vec2::new(1.0, -2.0));
        let json = serde_json::to_string(&actor).unwrap();
        let back: Actor = serde_json::from_str(&json).unwrap();
        assert_eq!(actor, back);
    }
}
