//! UI rendering for the game scene.
//!
//! The play field is drawn cell by cell: each terminal cell maps back to a
//! point in field coordinates and is classified as barrier, ground, bird or
//! sky. Overlays (intro banner, crash flash, game-over box) sit on top.

use crate::config::{GameConfig, RenderOptions};
use crate::game::bird::BirdPose;
use crate::game::score::score_digits;
use crate::game::state::{GameMode, GameState};
use crate::geom::Vec2;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// How far inside a barrier edge the hitbox overlay paints, in field pixels.
const HITBOX_EDGE_THICKNESS: f64 = 6.0;

/// Render one frame of the game.
pub fn render_game(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    config: &GameConfig,
    options: &RenderOptions,
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Skyward ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    render_play_area(frame, inner, state, config, options);
    render_score(frame, inner, state.score);

    match state.mode {
        GameMode::Intro => render_intro_overlay(frame, inner),
        GameMode::Play => {}
        GameMode::Over => render_over_overlay(frame, inner, state),
    }
}

/// Draw the field: scrolling backdrop, ground band, barriers and the bird.
fn render_play_area(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    config: &GameConfig,
    options: &RenderOptions,
) {
    let cell_w = config.field_width / f64::from(area.width);
    let cell_h = config.field_height / f64::from(area.height);

    let bird_col = (state.bird.center.x / cell_w) as u16;
    let bird_row = (state.bird.center.y / cell_h) as u16;

    let mut lines = Vec::with_capacity(area.height as usize);

    for row in 0..area.height {
        let mut spans = Vec::with_capacity(area.width as usize);
        let field_y = (f64::from(row) + 0.5) * cell_h;

        for col in 0..area.width {
            let field_x = (f64::from(col) + 0.5) * cell_w;
            let point = Vec2::new(field_x, field_y);

            if options.draw_hitboxes && row == bird_row && col != bird_col {
                // Hit-circle outline, one cell thick.
                let dx = field_x - state.bird.center.x;
                if (dx.abs() - config.bird_hit_radius).abs() <= cell_w / 2.0 {
                    spans.push(Span::styled("•", Style::default().fg(Color::Red)));
                    continue;
                }
            }

            if row == bird_row && col == bird_col {
                spans.push(bird_span(state));
                continue;
            }

            if let Some(span) = barrier_span(point, state, config, options) {
                spans.push(span);
                continue;
            }

            if field_y >= config.field_height - config.boundary_bottom {
                spans.push(ground_span(field_x, state));
                continue;
            }

            spans.push(sky_span(field_x, field_y, cell_h, state, config, options));
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// The bird glyph, picked from its rotation pose.
fn bird_span(state: &GameState) -> Span<'static> {
    let glyph = match state.bird.pose() {
        BirdPose::NoseUp => "▲",
        BirdPose::Neutral => "►",
        BirdPose::NoseDown => "▼",
    };
    Span::styled(
        glyph,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

/// A barrier cell, or `None` if the point is in open air.
fn barrier_span(
    point: Vec2,
    state: &GameState,
    config: &GameConfig,
    options: &RenderOptions,
) -> Option<Span<'static>> {
    for obstacle in &state.obstacles {
        for rect in [obstacle.top_barrier(config), obstacle.bottom_barrier(config)] {
            if !rect.contains(point) {
                continue;
            }

            let near_edge = point.x - rect.x < HITBOX_EDGE_THICKNESS
                || rect.right() - point.x < HITBOX_EDGE_THICKNESS
                || point.y - rect.y < HITBOX_EDGE_THICKNESS
                || rect.bottom() - point.y < HITBOX_EDGE_THICKNESS;
            let color = if options.draw_hitboxes && near_edge {
                Color::Red
            } else {
                Color::Green
            };
            return Some(Span::styled("█", Style::default().fg(color)));
        }
    }

    None
}

/// Ground texture, phase-locked to the base strips so it visibly scrolls.
fn ground_span(field_x: f64, state: &GameState) -> Span<'static> {
    let phase = state
        .bases
        .iter()
        .find(|strip| field_x >= strip.pos.x && field_x < strip.pos.x + strip.size.x)
        .map(|strip| ((field_x - strip.pos.x) / 12.0) as i64)
        .unwrap_or(0);

    let glyph = if phase % 2 == 0 { "▒" } else { "░" };
    Span::styled(glyph, Style::default().fg(Color::Green))
}

/// Sky cells: mostly empty, with sparse clouds that drift with the
/// background strips at their slower speed.
fn sky_span(
    field_x: f64,
    field_y: f64,
    cell_h: f64,
    state: &GameState,
    config: &GameConfig,
    options: &RenderOptions,
) -> Span<'static> {
    if options.draw_hitboxes {
        // Mark the clamp boundaries the bird collides against; one cell thick.
        let near_top = (field_y - config.boundary_top).abs() <= cell_h / 2.0;
        let near_floor =
            (field_y - (config.field_height - config.boundary_bottom)).abs() <= cell_h / 2.0;
        if near_top || near_floor {
            return Span::styled("─", Style::default().fg(Color::Red));
        }
    }

    let local = state
        .backgrounds
        .iter()
        .find(|strip| field_x >= strip.pos.x && field_x < strip.pos.x + strip.size.x)
        .map(|strip| field_x - strip.pos.x)
        .unwrap_or(0.0);

    // Two cloud bands; cell count chosen so clouds repeat a few times per tile.
    let in_cloud_band = (120.0..170.0).contains(&field_y) || (300.0..350.0).contains(&field_y);
    if in_cloud_band && ((local / 30.0) as i64) % 5 == 0 {
        return Span::styled("~", Style::default().fg(Color::DarkGray));
    }

    Span::raw(" ")
}

/// Score readout in the top-right corner, most significant digit first.
fn render_score(frame: &mut Frame, area: Rect, score: u32) {
    let digits = score_digits(score);
    let text: String = digits.iter().rev().map(|d| d.to_string()).collect();

    let width = text.len() as u16;
    if area.width < width + 2 {
        return;
    }
    let score_area = Rect::new(area.x + area.width - width - 1, area.y, width, 1);

    let paragraph = Paragraph::new(Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(paragraph, score_area);
}

/// Centered banner shown until the first flap.
fn render_intro_overlay(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "S K Y W A R D",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Thread the bird through the gaps."),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Space]", Style::default().fg(Color::Cyan)),
            Span::raw(" flap    "),
            Span::styled("[Q]", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ]),
    ];

    let overlay = centered_rect(area, 38, 7);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    frame.render_widget(Clear, overlay);
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

/// Crash flash plus the game-over box.
fn render_over_overlay(frame: &mut Frame, area: Rect, state: &GameState) {
    if state.flash_intensity > 0.0 {
        render_flash(frame, area, state.flash_intensity);
    }

    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Score: {}", state.score)),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Space]", Style::default().fg(Color::Cyan)),
            Span::raw(" retry    "),
            Span::styled("[Q]", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ]),
    ];

    let overlay = centered_rect(area, 30, 7);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    frame.render_widget(Clear, overlay);
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

/// Whole-field white flash, quantized to shade blocks by intensity.
fn render_flash(frame: &mut Frame, area: Rect, intensity: f64) {
    let glyph = if intensity > 0.6 {
        "█"
    } else if intensity > 0.4 {
        "▓"
    } else if intensity > 0.2 {
        "▒"
    } else {
        "░"
    };

    let row: String = glyph.repeat(area.width as usize);
    let lines: Vec<Line> = (0..area.height)
        .map(|_| Line::from(Span::styled(row.clone(), Style::default().fg(Color::White))))
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// A `width` x `height` rect centered in `area`, clipped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
