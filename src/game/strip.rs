//! Looping horizontal scroll for the background and ground strips.
//!
//! Both strip families tile a small ring of screen-wide bands edge to edge;
//! a band that scrolls fully off the left edge reattaches after the ring
//! predecessor, so the tiling never shows a seam regardless of tile count.

use crate::config::GameConfig;
use crate::geom::Vec2;
use crate::ring::Ring;

/// One tileable band of background or ground art.
#[derive(Debug, Clone, PartialEq)]
pub struct Strip {
    pub pos: Vec2,
    pub size: Vec2,
}

/// The background family: screen-wide tiles covering everything above the
/// ground band.
pub fn background_ring(config: &GameConfig) -> Ring<Strip> {
    let height = config.field_height - config.boundary_bottom;
    let slots = (0..config.strip_tiles)
        .map(|i| Strip {
            pos: Vec2::new(config.field_width * i as f64, 0.0),
            size: Vec2::new(config.field_width, height),
        })
        .collect();

    Ring::new(slots)
}

/// The ground family: screen-wide tiles covering the bottom boundary band.
pub fn base_ring(config: &GameConfig) -> Ring<Strip> {
    let slots = (0..config.strip_tiles)
        .map(|i| Strip {
            pos: Vec2::new(
                config.field_width * i as f64,
                config.field_height - config.boundary_bottom,
            ),
            size: Vec2::new(config.field_width, config.boundary_bottom),
        })
        .collect();

    Ring::new(slots)
}

/// Scroll all strips left by `speed * dt`; a strip fully past the left edge
/// moves to immediately follow its ring predecessor.
///
/// Same recycling shape as the obstacle ring: the wrap references the
/// predecessor's start-of-tick position and absorbs this frame's decrement,
/// so the tiles sit exactly edge to edge once the whole ring has moved.
pub fn advance(ring: &mut Ring<Strip>, speed: f64, dt: f64) {
    let decrement = speed * dt;
    let start_xs: Vec<f64> = ring.iter().map(|s| s.pos.x).collect();

    for i in 0..ring.len() {
        let mut next_x = start_xs[i] - decrement;

        if next_x <= -ring[i].size.x {
            let pred = ring.predecessor_index(i);
            next_x = start_xs[pred] + ring[pred].size.x - decrement;
        }

        ring[i].pos.x = next_x;
    }
}
