//! Paired-barrier obstacles: scrolling, recycling with randomized gaps,
//! pass detection for scoring, and collision against the bird.

use crate::config::GameConfig;
use crate::game::bird::Bird;
use crate::geom::{circle_intersects_rect, Rect};
use crate::ring::Ring;
use rand::Rng;

/// One top/bottom barrier pair. The rectangles are derived on demand from
/// `x` and `gap_offset` so they can never drift out of sync with the scroll
/// position.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge of both barriers, in field pixels.
    pub x: f64,
    /// Vertical distance from the top boundary to the bottom edge of the
    /// top barrier, i.e. where the gap starts.
    pub gap_offset: f64,
    /// Set once the bird has fully cleared this obstacle; cleared again on
    /// recycle.
    pub passed: bool,
}

impl Obstacle {
    /// The barrier hanging from the top boundary down to the gap.
    pub fn top_barrier(&self, config: &GameConfig) -> Rect {
        Rect::new(
            self.x,
            config.boundary_top,
            config.obstacle_width,
            self.gap_offset,
        )
    }

    /// The barrier rising from the ground band up to the gap.
    pub fn bottom_barrier(&self, config: &GameConfig) -> Rect {
        let top = config.boundary_top + self.gap_offset + config.obstacle_gap_height;
        Rect::new(
            self.x,
            top,
            config.obstacle_width,
            (config.field_height - config.boundary_bottom) - top,
        )
    }

    /// Whether the obstacle has fully scrolled past the left field edge.
    pub fn is_offscreen_left(&self, config: &GameConfig) -> bool {
        self.x <= -config.obstacle_width
    }
}

/// Gap offset for one of the `gap_steps + 1` discrete gap positions.
///
/// The placeable span (field minus boundaries, gap height and padding) is
/// divided into `gap_steps + 1` equal bands; step 0 sits right under the
/// top padding and each further step moves the gap one band down.
pub fn gap_offset_for_step(config: &GameConfig, step: u32) -> f64 {
    let band = config.gap_placement_span() / f64::from(config.gap_steps + 1);
    band * f64::from(step) + config.boundary_top + config.obstacle_gap_padding
}

/// The obstacle layout right after a reset: evenly spaced starting at the
/// right field edge, all gaps at the fixed just-below-center opening
/// position.
pub fn initial_ring(config: &GameConfig) -> Ring<Obstacle> {
    let opening_offset = gap_offset_for_step(config, config.gap_steps / 2 + 1);
    let stride = config.obstacle_width + config.obstacle_spacing;

    let slots = (0..config.obstacle_count)
        .map(|i| Obstacle {
            x: config.field_width + stride * i as f64,
            gap_offset: opening_offset,
            passed: false,
        })
        .collect();

    Ring::new(slots)
}

/// Scroll every obstacle left by one tick and recycle those that left the
/// field: a recycled obstacle reappears one spacing beyond its ring
/// predecessor with a freshly drawn gap.
///
/// Recycling references the predecessor's position from the start of the
/// tick and subtracts this frame's scroll decrement, so that once the whole
/// ring has advanced, the spacing between the recycled slot and its
/// predecessor is exact — no one-frame pop.
pub fn advance<R: Rng>(ring: &mut Ring<Obstacle>, config: &GameConfig, dt: f64, rng: &mut R) {
    let decrement = config.obstacle_speed * dt;
    let start_xs: Vec<f64> = ring.iter().map(|o| o.x).collect();

    for i in 0..ring.len() {
        let mut next_x = start_xs[i] - decrement;

        if next_x <= -config.obstacle_width {
            let pred = ring.predecessor_index(i);
            next_x =
                start_xs[pred] + config.obstacle_width + config.obstacle_spacing - decrement;

            let step = rng.gen_range(0..=config.gap_steps);
            ring[i].gap_offset = gap_offset_for_step(config, step);
            ring[i].passed = false;
        }

        ring[i].x = next_x;
    }
}

/// Count obstacles the bird newly cleared this tick: the bird's leading
/// edge must be strictly past the obstacle's trailing edge. Each obstacle
/// scores at most once per lifetime until recycled.
pub fn detect_pass(bird: &Bird, ring: &mut Ring<Obstacle>, config: &GameConfig) -> u32 {
    let leading_edge = bird.center.x - config.bird_hit_radius;
    let mut pass_count = 0;

    for obstacle in ring.iter_mut() {
        if obstacle.passed {
            continue;
        }
        if leading_edge <= obstacle.x + config.obstacle_width {
            continue;
        }

        obstacle.passed = true;
        pass_count += 1;
    }

    pass_count
}

/// Whether the bird's hit circle overlaps any barrier rectangle.
pub fn detect_collision(bird: &Bird, ring: &Ring<Obstacle>, config: &GameConfig) -> bool {
    ring.iter().any(|obstacle| {
        circle_intersects_rect(
            bird.center,
            config.bird_hit_radius,
            &obstacle.top_barrier(config),
        ) || circle_intersects_rect(
            bird.center,
            config.bird_hit_radius,
            &obstacle.bottom_barrier(config),
        )
    })
}
