//! Core simulation: bird physics, obstacle scrolling, scoring, and the
//! intro/play/over state machine.

pub mod bird;
pub mod obstacle;
pub mod score;
pub mod state;
pub mod strip;

pub use bird::{Bird, BirdPose};
pub use obstacle::Obstacle;
pub use score::score_digits;
pub use state::{update, GameMode, GameState};
pub use strip::Strip;
