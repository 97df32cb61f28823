use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::config::GridSize;
use crate::grid::Position;
use crate::input::Direction;
use crate::snapshot::Snapshot;
use crate::ui::hud::render_hud;
use crate::ui::menu::render_game_over_menu;

/// Terminal columns used per grid cell, so cells look roughly square.
pub const CELL_COLUMNS: u16 = 2;

const GLYPH_BODY: &str = "██";
const GLYPH_DEBUG_CELL: &str = "░░";
const GLYPH_FOOD: &str = "◆ ";

/// Colours handed to the renderer. The simulation itself has no colour state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Palette {
    pub snake: Color,
    pub snake_head: Color,
    pub snake_dead: Color,
    pub food: Color,
    pub background: Color,
    pub border: Color,
    pub score: Color,
    /// Marks the real segment cells under the interpolated snake.
    pub debug: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            snake: Color::Rgb(0x43, 0x52, 0x3d),
            snake_head: Color::Rgb(0x2b, 0x36, 0x27),
            snake_dead: Color::Red,
            food: Color::Rgb(0xff, 0x69, 0xb4),
            background: Color::Rgb(0xc7, 0xf0, 0xd8),
            border: Color::Rgb(0x43, 0x52, 0x3d),
            score: Color::Rgb(0xa8, 0x89, 0x05),
            debug: Color::Rgb(0xfa, 0x80, 0x72),
        }
    }
}

/// Per-frame render switches.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct RenderOptions {
    /// Draw every occupied cell beneath the partially filled head and tail.
    pub debug_overlay: bool,
}

/// Renders the full game frame from a snapshot.
pub fn render(
    frame: &mut Frame<'_>,
    snapshot: &Snapshot,
    palette: &Palette,
    options: RenderOptions,
) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot, palette);

    let block = Block::bordered()
        .border_style(Style::new().fg(palette.border))
        .style(Style::new().bg(palette.background));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, snapshot, palette);
    if options.debug_overlay {
        render_debug_cells(frame, inner, snapshot, palette);
    }
    render_snake(frame, inner, snapshot, palette);

    if snapshot.game_over {
        render_game_over_menu(frame, play_area, snapshot.score, palette);
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, palette: &Palette) {
    let bounds = snapshot.geometry.size();
    let buffer = frame.buffer_mut();

    for item in snapshot.live_food() {
        let Some((x, y)) = logical_to_terminal(inner, bounds, item.position) else {
            continue;
        };
        buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(palette.food));
    }
}

fn render_debug_cells(
    frame: &mut Frame<'_>,
    inner: Rect,
    snapshot: &Snapshot,
    palette: &Palette,
) {
    let bounds = snapshot.geometry.size();
    let buffer = frame.buffer_mut();

    for segment in &snapshot.segments {
        let Some((x, y)) = logical_to_terminal(inner, bounds, *segment) else {
            continue;
        };
        buffer.set_string(x, y, GLYPH_DEBUG_CELL, Style::new().fg(palette.debug));
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, palette: &Palette) {
    let bounds = snapshot.geometry.size();
    let body_color = if snapshot.game_over {
        palette.snake_dead
    } else {
        palette.snake
    };
    let last = snapshot.segments.len().saturating_sub(1);

    let buffer = frame.buffer_mut();
    // Tail first so the head wins when segments overlap.
    for (index, segment) in snapshot.segments.iter().enumerate().rev() {
        let Some((x, y)) = logical_to_terminal(inner, bounds, *segment) else {
            continue;
        };

        if index == 0 {
            let glyph = if snapshot.game_over {
                GLYPH_BODY
            } else {
                head_glyph(snapshot.head_direction, snapshot.head_progress)
            };
            put_glyph(
                buffer,
                x,
                y,
                glyph,
                Style::new()
                    .fg(palette.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else if index == last && !snapshot.game_over {
            put_glyph(
                buffer,
                x,
                y,
                tail_glyph(snapshot.tail_direction, snapshot.tail_progress),
                Style::new().fg(body_color),
            );
        } else {
            put_glyph(buffer, x, y, GLYPH_BODY, Style::new().fg(body_color));
        }
    }
}

/// Writes `glyph` column by column, leaving blank columns untouched so
/// whatever is underneath shows through.
fn put_glyph(buffer: &mut Buffer, x: u16, y: u16, glyph: &str, style: Style) {
    for (offset, symbol) in (0..CELL_COLUMNS).zip(glyph.chars()) {
        if symbol == ' ' {
            continue;
        }
        buffer[(x + offset, y)].set_char(symbol).set_style(style);
    }
}

/// Head cell filled along its heading as the next tick approaches.
fn head_glyph(direction: Direction, progress: f64) -> &'static str {
    match direction {
        Direction::Up => half_step(progress, ["▄▄", "██"]),
        Direction::Down => half_step(progress, ["▀▀", "██"]),
        Direction::Left => quarter_step(progress, [" ▐", " █", "▐█", "██"]),
        Direction::Right => quarter_step(progress, ["▌ ", "█ ", "█▌", "██"]),
    }
}

/// Tail cell emptied from behind, leaving the part toward its heading.
fn tail_glyph(direction: Direction, progress: f64) -> &'static str {
    match direction {
        Direction::Up => half_step(progress, ["██", "▀▀"]),
        Direction::Down => half_step(progress, ["██", "▄▄"]),
        Direction::Left => quarter_step(progress, ["██", "█▌", "█ ", "▌ "]),
        Direction::Right => quarter_step(progress, ["██", "▐█", " █", " ▐"]),
    }
}

fn half_step(progress: f64, glyphs: [&'static str; 2]) -> &'static str {
    if progress < 0.5 { glyphs[0] } else { glyphs[1] }
}

fn quarter_step(progress: f64, glyphs: [&'static str; 4]) -> &'static str {
    let step = (progress.clamp(0.0, 1.0) * 4.0) as usize;
    glyphs[step.min(3)]
}

/// Terminal cell for a grid position, or `None` when it falls outside `inner`.
fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
