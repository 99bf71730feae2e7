use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::{CELL_WIDTH, GLYPH_CELL, GridSize, PLAY_AREA_MARGIN_X, Theme};
use crate::game::{GamePhase, GameState};
use crate::snake::Position;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let content = inset_left(frame.area(), PLAY_AREA_MARGIN_X);
    let [header_area, board_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(state.bounds().height),
        Constraint::Length(2),
    ])
    .areas(content);

    render_header(frame, header_area, state, theme);
    render_board(frame, board_area, state, theme);
    render_footer(frame, footer_area, theme);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            format!("Score: {}", state.score),
            Style::new()
                .fg(theme.hud_score)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(phase_message(state.phase), Style::new().fg(theme.hud_message)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_board(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) {
    let bounds = state.bounds();
    let buffer = frame.buffer_mut();

    for row in 0..i32::from(bounds.height) {
        for col in 0..i32::from(bounds.width) {
            let Some((x, y)) = cell_origin(area, bounds, Position { row, col }) else {
                continue;
            };
            buffer.set_string(x, y, GLYPH_CELL, Style::new().fg(theme.board_cell));
        }
    }

    if let Some((x, y)) = cell_origin(area, bounds, state.fruit.position) {
        buffer.set_string(x, y, GLYPH_CELL, Style::new().bg(theme.fruit));
    }

    let head = state.snake.head();
    for segment in state.snake.segments() {
        let Some((x, y)) = cell_origin(area, bounds, *segment) else {
            continue;
        };

        let style = if *segment == head {
            Style::new()
                .bg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().bg(theme.snake_body)
        };
        buffer.set_string(x, y, GLYPH_CELL, style);
    }
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Press 'q' or Ctrl+C to quit",
            Style::new().fg(theme.footer),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn phase_message(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Starting => "Press SPACE to begin!",
        GamePhase::Ended => "Game Over!",
        GamePhase::Playing => "",
    }
}

/// Maps a logical cell to its top-left terminal column and row, or
/// `None` when the cell does not fit inside `board`.
fn cell_origin(board: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let col = u16::try_from(position.col).ok()?;
    let row = u16::try_from(position.row).ok()?;

    let x = board.x.saturating_add(col.saturating_mul(CELL_WIDTH));
    let y = board.y.saturating_add(row);
    if x.saturating_add(CELL_WIDTH) > board.right() || y >= board.bottom() {
        return None;
    }

    Some((x, y))
}

fn inset_left(area: Rect, margin: u16) -> Rect {
    let margin = margin.min(area.width);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(margin),
        height: area.height,
    }
}
