//! Skyward — a terminal flappy-bird arcade game.
//!
//! The library holds the whole simulation (physics, obstacles, scoring,
//! state machine) plus the ratatui scene; the binary wires it to a
//! terminal, a frame clock, and an audio sink.

pub mod audio;
pub mod config;
pub mod game;
pub mod geom;
pub mod input;
pub mod ring;
pub mod ui;

pub use audio::{AudioSink, SoundKind};
pub use config::{ConfigError, GameConfig, RenderOptions};
pub use game::{update, GameMode, GameState};
