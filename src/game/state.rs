//! Game state and the intro/play/over state machine.
//!
//! One [`update`] call per frame advances the whole simulation by `dt`
//! seconds and reports sound events through the audio sink. The state is
//! owned by the loop driver; the renderer and audio only ever borrow it.

use crate::audio::{AudioSink, SoundKind};
use crate::config::GameConfig;
use crate::game::bird::Bird;
use crate::game::obstacle::{self, Obstacle};
use crate::game::strip::{self, Strip};
use crate::ring::Ring;
use rand::Rng;

/// The three screens of the game. There is no pause, and intro is never
/// re-entered once left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Intro,
    Play,
    Over,
}

/// The whole simulation state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub mode: GameMode,
    /// Obstacles passed this session. Monotonic until reset.
    pub score: u32,
    /// Alpha of the white crash flash, only meaningful in [`GameMode::Over`].
    pub flash_intensity: f64,

    pub bird: Bird,
    pub obstacles: Ring<Obstacle>,
    pub backgrounds: Ring<Strip>,
    pub bases: Ring<Strip>,
}

impl GameState {
    /// A fresh game on the intro screen.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            mode: GameMode::Intro,
            score: 0,
            flash_intensity: 0.0,
            bird: Bird::new(config),
            obstacles: obstacle::initial_ring(config),
            backgrounds: strip::background_ring(config),
            bases: strip::base_ring(config),
        }
    }

    /// Rebuild bird, obstacles, strips and score to the start-of-session
    /// layout. The mode is left alone; callers decide where to go next.
    pub fn reset(&mut self, config: &GameConfig) {
        self.score = 0;
        self.flash_intensity = 0.0;
        self.bird = Bird::new(config);
        self.obstacles = obstacle::initial_ring(config);
        self.backgrounds = strip::background_ring(config);
        self.bases = strip::base_ring(config);
    }
}

/// Advance the simulation by one frame.
///
/// `jump_requested` is the edge-triggered input for this tick. Non-finite
/// or negative `dt` is treated as zero elapsed time; inputs still register.
pub fn update<R: Rng>(
    state: &mut GameState,
    config: &GameConfig,
    jump_requested: bool,
    dt: f64,
    rng: &mut R,
    audio: &mut dyn AudioSink,
) {
    let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

    if jump_requested {
        audio.play(SoundKind::Flap);
    }

    match state.mode {
        GameMode::Intro => update_intro(state, config, jump_requested, dt),
        GameMode::Play => update_play(state, config, jump_requested, dt, rng, audio),
        GameMode::Over => update_over(state, config, jump_requested, dt),
    }
}

/// Intro: the world idles (strips may keep drifting), the bird hangs in
/// place. The first jump starts the session.
fn update_intro(state: &mut GameState, config: &GameConfig, jump_requested: bool, dt: f64) {
    if config.intro_scroll {
        advance_strips(state, config, dt);
    }

    if jump_requested {
        state.bird.update(config, true, dt);
        state.mode = GameMode::Play;
    }
}

/// Play: the full per-tick pipeline. The order is load-bearing — scoring is
/// evaluated before the collision check, so a bird that passes an obstacle
/// and crashes in the same tick still keeps the point.
fn update_play<R: Rng>(
    state: &mut GameState,
    config: &GameConfig,
    jump_requested: bool,
    dt: f64,
    rng: &mut R,
    audio: &mut dyn AudioSink,
) {
    advance_strips(state, config, dt);
    obstacle::advance(&mut state.obstacles, config, dt, rng);

    state.bird.update(config, jump_requested, dt);

    let passes = obstacle::detect_pass(&state.bird, &mut state.obstacles, config);
    if passes > 0 {
        state.score += passes;
        audio.play(SoundKind::Point);
    }

    let boundary_hit = state.bird.clamp_to_field(config);
    if boundary_hit || obstacle::detect_collision(&state.bird, &state.obstacles, config) {
        state.flash_intensity = config.flash_initial_alpha;
        state.mode = GameMode::Over;
        audio.play(SoundKind::Hit);
    }
}

/// Over: the world freezes while the crash flash decays to exactly zero.
/// A jump restarts a fresh session immediately.
fn update_over(state: &mut GameState, config: &GameConfig, jump_requested: bool, dt: f64) {
    state.flash_intensity = (state.flash_intensity - config.flash_decay_speed * dt).max(0.0);

    if jump_requested {
        state.reset(config);
        state.bird.update(config, true, dt);
        state.mode = GameMode::Play;
    }
}

fn advance_strips(state: &mut GameState, config: &GameConfig, dt: f64) {
    strip::advance(&mut state.backgrounds, config.background_speed(), dt);
    strip::advance(&mut state.bases, config.obstacle_speed, dt);
}
