//! Field constants and startup configuration.
//!
//! Every tunable the simulation consumes lives in [`GameConfig`], built once
//! at startup and validated before the terminal is touched. Presentation
//! toggles (hitbox overlay, sound) live in [`RenderOptions`] and are only
//! read by the UI and audio layers — the simulation itself has no toggles.

use std::fmt;

// Field dimensions (field pixels, not terminal cells)
pub const FIELD_WIDTH: f64 = 480.0;
pub const FIELD_HEIGHT: f64 = 854.0;
pub const BOUNDARY_TOP: f64 = 0.0;
pub const BOUNDARY_BOTTOM: f64 = 100.0;

// Obstacles
pub const OBSTACLE_WIDTH: f64 = 80.0;
pub const OBSTACLE_GAP_HEIGHT: f64 = 180.0;
pub const OBSTACLE_GAP_PADDING: f64 = 80.0;
pub const OBSTACLE_SPACING: f64 = 200.0;
pub const OBSTACLE_SPEED: f64 = 170.0;
pub const OBSTACLE_COUNT: usize = 2;
pub const GAP_STEPS: u32 = 5;

// Bird physics
pub const BIRD_HIT_RADIUS: f64 = 20.0;
pub const BIRD_JUMP_FORCE: f64 = 510.0;
pub const BIRD_GRAVITY: f64 = 1500.0;
pub const BIRD_ROTATION_SPEED: f64 = 100.0;
pub const BIRD_ROTATION_MIN: f64 = 60.0;
pub const BIRD_ROTATION_MAX: f64 = 60.0;

// Game-over flash overlay
pub const FLASH_INITIAL_ALPHA: f64 = 0.8;
pub const FLASH_DECAY_SPEED: f64 = 17.0;

// Scrolling strips: background moves at a quarter of the obstacle speed
pub const BACKGROUND_SPEED_DIVISOR: f64 = 4.0;
pub const STRIP_TILES: usize = 2;

// Outer loop frame cadence (~60 FPS)
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Simulation tunables, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub field_width: f64,
    pub field_height: f64,
    /// Height of the no-fly band at the top of the field.
    pub boundary_top: f64,
    /// Height of the ground band at the bottom of the field.
    pub boundary_bottom: f64,

    pub obstacle_width: f64,
    /// Vertical extent of the passable gap between a barrier pair.
    pub obstacle_gap_height: f64,
    /// Space reserved at both vertical extremes that a gap never enters.
    pub obstacle_gap_padding: f64,
    /// Horizontal distance between one obstacle's right edge and the next
    /// obstacle's left edge at the instant of recycling.
    pub obstacle_spacing: f64,
    pub obstacle_speed: f64,
    pub obstacle_count: usize,
    /// The playable band is divided into `gap_steps + 1` discrete gap
    /// positions; recycling draws one uniformly.
    pub gap_steps: u32,

    pub bird_hit_radius: f64,
    pub bird_jump_force: f64,
    pub bird_gravity: f64,
    pub bird_rotation_speed: f64,
    /// Nose-up pose angle applied on jump (stored positive, applied negated).
    pub bird_rotation_min: f64,
    /// Nose-down angle at which rotation stops accumulating.
    pub bird_rotation_max: f64,

    pub flash_initial_alpha: f64,
    pub flash_decay_speed: f64,

    pub background_speed_divisor: f64,
    pub strip_tiles: usize,

    /// When the bird is already resting on the lower boundary and no jump
    /// was requested, skip downward integration and zero the velocity so it
    /// cannot sink into the ground before the collision check runs.
    pub floor_rest: bool,
    /// Whether the background and ground keep scrolling on the intro screen.
    pub intro_scroll: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            boundary_top: BOUNDARY_TOP,
            boundary_bottom: BOUNDARY_BOTTOM,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_gap_height: OBSTACLE_GAP_HEIGHT,
            obstacle_gap_padding: OBSTACLE_GAP_PADDING,
            obstacle_spacing: OBSTACLE_SPACING,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_count: OBSTACLE_COUNT,
            gap_steps: GAP_STEPS,
            bird_hit_radius: BIRD_HIT_RADIUS,
            bird_jump_force: BIRD_JUMP_FORCE,
            bird_gravity: BIRD_GRAVITY,
            bird_rotation_speed: BIRD_ROTATION_SPEED,
            bird_rotation_min: BIRD_ROTATION_MIN,
            bird_rotation_max: BIRD_ROTATION_MAX,
            flash_initial_alpha: FLASH_INITIAL_ALPHA,
            flash_decay_speed: FLASH_DECAY_SPEED,
            background_speed_divisor: BACKGROUND_SPEED_DIVISOR,
            strip_tiles: STRIP_TILES,
            floor_rest: true,
            intro_scroll: true,
        }
    }
}

impl GameConfig {
    /// Scroll speed of the background strip family.
    pub fn background_speed(&self) -> f64 {
        self.obstacle_speed / self.background_speed_divisor
    }

    /// Lowest Y the bird center may occupy (resting on the ground band).
    pub fn floor_limit(&self) -> f64 {
        self.field_height - (self.bird_hit_radius + self.boundary_bottom)
    }

    /// Highest Y the bird center may occupy (touching the top boundary).
    pub fn ceiling_limit(&self) -> f64 {
        self.bird_hit_radius + self.boundary_top
    }

    /// Vertical span available for gap placement: the field minus both
    /// boundaries, the gap itself, and the padding reserved at the extremes.
    pub fn gap_placement_span(&self) -> f64 {
        self.field_height
            - (self.boundary_top
                + self.boundary_bottom
                + self.obstacle_gap_padding
                + self.obstacle_gap_height)
    }

    /// Validate once at startup. The simulation assumes these hold and has
    /// no per-frame guards for them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_gap_height", self.obstacle_gap_height),
            ("obstacle_spacing", self.obstacle_spacing),
            ("obstacle_speed", self.obstacle_speed),
            ("bird_hit_radius", self.bird_hit_radius),
            ("bird_jump_force", self.bird_jump_force),
            ("bird_gravity", self.bird_gravity),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive(name));
            }
        }

        let non_negative = [
            ("boundary_top", self.boundary_top),
            ("boundary_bottom", self.boundary_bottom),
            ("obstacle_gap_padding", self.obstacle_gap_padding),
            ("bird_rotation_speed", self.bird_rotation_speed),
            ("bird_rotation_min", self.bird_rotation_min),
            ("bird_rotation_max", self.bird_rotation_max),
            ("flash_initial_alpha", self.flash_initial_alpha),
            ("flash_decay_speed", self.flash_decay_speed),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative(name));
            }
        }

        if self.gap_steps == 0 {
            return Err(ConfigError::NonPositive("gap_steps"));
        }
        if self.background_speed_divisor <= 0.0 || !self.background_speed_divisor.is_finite() {
            return Err(ConfigError::NonPositive("background_speed_divisor"));
        }
        if self.obstacle_count < 2 {
            return Err(ConfigError::TooFewSlots("obstacle_count"));
        }
        if self.strip_tiles < 2 {
            return Err(ConfigError::TooFewSlots("strip_tiles"));
        }

        // The gap must fit between the boundaries with padding honored at
        // both extremes: the highest gap step may use at most
        // span * steps / (steps + 1) of the placement span.
        if self.obstacle_gap_padding > self.gap_placement_span() / f64::from(self.gap_steps + 1) {
            return Err(ConfigError::PlayableBandEmpty);
        }
        // The bird must fit between the clamp limits.
        if self.ceiling_limit() >= self.floor_limit() {
            return Err(ConfigError::PlayableBandEmpty);
        }

        Ok(())
    }
}

/// A configuration value that makes the field unplayable. Fatal at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    NonPositive(&'static str),
    Negative(&'static str),
    TooFewSlots(&'static str),
    PlayableBandEmpty,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive(name) => {
                write!(f, "{} must be a positive finite number", name)
            }
            ConfigError::Negative(name) => {
                write!(f, "{} must be a non-negative finite number", name)
            }
            ConfigError::TooFewSlots(name) => write!(f, "{} must be at least 2", name),
            ConfigError::PlayableBandEmpty => {
                write!(
                    f,
                    "boundaries, gap height and padding leave no playable band"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Presentation toggles consumed by the renderer and the audio sink choice.
/// Never read by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Overlay collision geometry (boundary lines, barrier outlines, the
    /// bird's hit circle) on top of the scene.
    pub draw_hitboxes: bool,
    /// Route game events to the terminal bell instead of the null sink.
    pub sound: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            draw_hitboxes: false,
            sound: true,
        }
    }
}
