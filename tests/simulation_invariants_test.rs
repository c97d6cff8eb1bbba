//! Integration test: simulation invariants over long runs.
//!
//! Exercises the physics and recycling rules through the public API for
//! thousands of ticks, checking the properties the renderer relies on:
//! finite geometry, exact obstacle spacing, valid gap positions, and
//! score/sound agreement.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use skyward::audio::{RecordingAudio, SoundKind};
use skyward::game::obstacle::gap_offset_for_step;
use skyward::game::update;
use skyward::{GameConfig, GameMode, GameState};

const DT: f64 = 0.016;

/// Keep the bird piloted through the nearest gap so play never ends.
fn pilot_bird(state: &mut GameState, config: &GameConfig) {
    let bird_x = state.bird.center.x;
    let nearest_gap = state
        .obstacles
        .iter()
        .min_by(|a, b| {
            let da = (a.x + config.obstacle_width / 2.0 - bird_x).abs();
            let db = (b.x + config.obstacle_width / 2.0 - bird_x).abs();
            da.partial_cmp(&db).unwrap()
        })
        .map(|o| o.gap_offset)
        .unwrap();

    state.bird.center.y =
        config.boundary_top + nearest_gap + config.obstacle_gap_height / 2.0;
    state.bird.velocity = 0.0;
}

#[test]
fn test_long_run_keeps_geometry_finite_and_valid() {
    let config = GameConfig::default();
    let mut state = GameState::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut audio = RecordingAudio::default();

    update(&mut state, &config, true, DT, &mut rng, &mut audio);

    for _ in 0..50_000 {
        update(&mut state, &config, false, DT, &mut rng, &mut audio);
        assert_eq!(state.mode, GameMode::Play);

        for obstacle in &state.obstacles {
            let top = obstacle.top_barrier(&config);
            let bottom = obstacle.bottom_barrier(&config);

            assert!(top.x.is_finite() && bottom.x.is_finite());
            assert!(top.height >= 0.0);
            assert!(bottom.height >= 0.0);
            // The fixed gap between the barrier pair.
            assert!(
                (bottom.y - top.bottom() - config.obstacle_gap_height).abs() < 1e-9
            );
            // Obstacles never drift past the recycle threshold.
            assert!(obstacle.x > -config.obstacle_width - config.obstacle_speed * DT);
        }

        for strip in state.backgrounds.iter().chain(state.bases.iter()) {
            assert!(strip.pos.x.is_finite());
            assert!(strip.pos.x > -strip.size.x - config.obstacle_speed * DT);
        }

        pilot_bird(&mut state, &config);
    }
}

#[test]
fn test_recycled_obstacles_keep_the_exact_stride() {
    let config = GameConfig::default();
    let mut state = GameState::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let mut audio = RecordingAudio::default();
    let stride = config.obstacle_width + config.obstacle_spacing;

    update(&mut state, &config, true, DT, &mut rng, &mut audio);

    let mut recycles = 0;
    for _ in 0..30_000 {
        let before: Vec<f64> = state.obstacles.iter().map(|o| o.x).collect();
        update(&mut state, &config, false, DT, &mut rng, &mut audio);

        for i in 0..state.obstacles.len() {
            if state.obstacles[i].x > before[i] {
                recycles += 1;
                let pred = state.obstacles.predecessor_index(i);
                assert!(
                    (state.obstacles[i].x - state.obstacles[pred].x - stride).abs() < 1e-9,
                    "stride broken after recycle #{}",
                    recycles
                );
                assert!(!state.obstacles[i].passed);
            }
        }

        pilot_bird(&mut state, &config);
    }

    assert!(recycles >= 50, "only {} recycles in 30k ticks", recycles);
}

#[test]
fn test_gap_offsets_always_come_from_the_step_table() {
    let config = GameConfig::default();
    let mut state = GameState::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let mut audio = RecordingAudio::default();

    let valid: Vec<f64> = (0..=config.gap_steps)
        .map(|step| gap_offset_for_step(&config, step))
        .collect();

    update(&mut state, &config, true, DT, &mut rng, &mut audio);

    for _ in 0..30_000 {
        update(&mut state, &config, false, DT, &mut rng, &mut audio);

        for obstacle in &state.obstacles {
            assert!(
                valid
                    .iter()
                    .any(|offset| (offset - obstacle.gap_offset).abs() < 1e-9),
                "gap offset {} is not a step value",
                obstacle.gap_offset
            );
        }

        pilot_bird(&mut state, &config);
    }
}

#[test]
fn test_score_matches_point_sounds_across_restarts() {
    let config = GameConfig::default();
    let mut state = GameState::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(14);
    let mut input_rng = ChaCha8Rng::seed_from_u64(15);
    let mut audio = RecordingAudio::default();
    let mut total_score = 0;

    update(&mut state, &config, true, DT, &mut rng, &mut audio);

    for i in 0..40_000 {
        if state.mode == GameMode::Over {
            total_score += state.score;
            update(&mut state, &config, true, DT, &mut rng, &mut audio);
            continue;
        }

        update(
            &mut state,
            &config,
            input_rng.gen_bool(0.05),
            DT,
            &mut rng,
            &mut audio,
        );

        // Pilot most of the time so some points actually happen.
        if i % 3 != 0 {
            pilot_bird(&mut state, &config);
        }
    }
    if state.mode != GameMode::Over {
        total_score += state.score;
    }

    let points = audio
        .played
        .iter()
        .filter(|kind| **kind == SoundKind::Point)
        .count() as u32;

    assert!(total_score > 0, "no points were ever scored");
    assert_eq!(points, total_score);
}
