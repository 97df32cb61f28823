use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::renderer::Palette;
use crate::snapshot::Snapshot;

const HUD_MARGIN_X: u16 = 1;
const SEPARATOR: &str = " │ ";
const CONTROLS_HINT: &str = "arrows/WASD steer · q quit";

/// Renders the one-line HUD and returns the play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot,
    palette: &Palette,
) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let status_area = inset_horizontal(status_area, HUD_MARGIN_X);

    let stats = stats_line(snapshot, usize::from(status_area.width), palette);
    let stats_width = u16::try_from(stats.width()).unwrap_or(u16::MAX);
    let [stats_area, hint_area] =
        Layout::horizontal([Constraint::Length(stats_width), Constraint::Min(0)])
            .areas(status_area);

    frame.render_widget(Paragraph::new(stats), stats_area);

    if usize::from(hint_area.width) >= CONTROLS_HINT.width() + 1 {
        frame.render_widget(
            Paragraph::new(CONTROLS_HINT)
                .alignment(Alignment::Right)
                .style(Style::default().fg(Color::DarkGray)),
            hint_area,
        );
    }

    play_area
}

/// Score always shows; length and speed are dropped when space runs out.
fn stats_line(snapshot: &Snapshot, available_width: usize, palette: &Palette) -> Line<'static> {
    let score = format!("Score: {}", snapshot.score);
    let length = format!("Length: {}", snapshot.segments.len());
    let speed = format!("Speed: {} ms", snapshot.speed.as_millis());

    let score_style = Style::default()
        .fg(palette.score)
        .add_modifier(Modifier::BOLD);
    let mut spans = vec![Span::styled(score.clone(), score_style)];
    let mut used = score.width();

    for part in [length, speed] {
        let needed = SEPARATOR.width() + part.width();
        if used + needed > available_width {
            break;
        }
        used += needed;
        spans.push(Span::raw(SEPARATOR));
        spans.push(Span::raw(part));
    }

    Line::from(spans)
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        width: area.width.saturating_sub(total_margin),
        ..area
    }
}
