//! Terminal presentation. Everything here borrows the game state read-only
//! and scales field coordinates onto whatever terminal area is available.

pub mod scene;

pub use scene::render_game;
