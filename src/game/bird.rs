//! Bird physics: gravity, jump impulses, boundary clamping, and the
//! cosmetic rotation that drives sprite selection.

use crate::config::GameConfig;
use crate::geom::Vec2;

/// Rotation at or below which the nose-up sprite is shown.
const POSE_NOSE_UP_ROTATION: f64 = -10.0;
/// Rotation at or above which the nose-down sprite is shown.
const POSE_NOSE_DOWN_ROTATION: f64 = 5.0;

/// Which of the three bird sprites the renderer should draw. A pure
/// function of rotation; the simulation never reads it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirdPose {
    /// Fresh off a jump, rotated sharply upward.
    NoseUp,
    Neutral,
    /// Rotation has run toward the falling pose.
    NoseDown,
}

/// The player avatar. Collision shape is a circle of
/// [`GameConfig::bird_hit_radius`] around `center`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub center: Vec2,
    /// Vertical velocity in field pixels per second, positive = downward.
    pub velocity: f64,
    /// Degrees; negative = nose up. Cosmetic only.
    pub rotation: f64,
}

impl Bird {
    /// A bird at rest in the middle of the field.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            center: Vec2::new(config.field_width / 2.0, config.field_height / 2.0),
            velocity: 0.0,
            rotation: 0.0,
        }
    }

    /// Apply the jump impulse: full upward velocity and the nose-up pose,
    /// regardless of prior state.
    pub fn jump(&mut self, config: &GameConfig) {
        self.velocity = -config.bird_jump_force;
        self.rotation = -config.bird_rotation_min;
    }

    /// One tick of free fall: gravity accelerates the bird and the rotation
    /// free-runs toward the nose-down limit. Rotation only ever decreases
    /// again via [`Bird::jump`].
    pub fn fall(&mut self, config: &GameConfig, dt: f64) {
        self.velocity += config.bird_gravity * dt;
        if self.rotation < config.bird_rotation_max {
            self.rotation += config.bird_rotation_speed * dt;
        }
    }

    /// Advance the vertical position by the current velocity.
    pub fn integrate(&mut self, dt: f64) {
        self.center.y += self.velocity * dt;
    }

    /// Whether the bird center sits at or below the lower clamp limit.
    pub fn at_floor(&self, config: &GameConfig) -> bool {
        self.center.y >= config.floor_limit()
    }

    /// One full bird tick: impulse or fall, then integration.
    ///
    /// With `floor_rest` enabled, a bird already resting on the ground that
    /// is still moving downward stays put (velocity zeroed) unless this tick
    /// also carries a jump, so it never sinks into the base between the
    /// integration and the collision check.
    pub fn update(&mut self, config: &GameConfig, jump_requested: bool, dt: f64) {
        if jump_requested {
            self.jump(config);
        } else {
            self.fall(config, dt);
            if config.floor_rest && self.velocity > 0.0 && self.at_floor(config) {
                self.velocity = 0.0;
                return;
            }
        }

        self.integrate(dt);
    }

    /// Clamp the bird into the playable band. Returns true when either
    /// boundary was hit this tick; both boundaries are checked
    /// independently.
    pub fn clamp_to_field(&mut self, config: &GameConfig) -> bool {
        let mut collided = false;

        let floor = config.floor_limit();
        if self.center.y >= floor {
            self.center.y = floor;
            collided = true;
        }

        let ceiling = config.ceiling_limit();
        if self.center.y <= ceiling {
            self.center.y = ceiling;
            collided = true;
        }

        collided
    }

    /// Sprite selection from the current rotation.
    pub fn pose(&self) -> BirdPose {
        if self.rotation <= POSE_NOSE_UP_ROTATION {
            BirdPose::NoseUp
        } else if self.rotation >= POSE_NOSE_DOWN_ROTATION {
            BirdPose::NoseDown
        } else {
            BirdPose::Neutral
        }
    }
}
