//! Terminal UI rendering for the woord TUI.
//!
//! Design philosophy: the phrase IS the interface.
//! - Minimal chrome: no box drawing, no borders, no labels
//! - One bold line of text, centered in the terminal
//! - Kerned glyphs (marked by the animator) render italic as the terminal's
//!   stand-in for the display-font spacing fix
//! - A muted help line at the bottom, expanded on demand
//!
//! This module renders from RenderState (immutable snapshot) - it never
//! mutates application state.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::kern::KERN_MARK;
use crate::render::RenderState;

const COLOR_TEXT_MUTED: Color = Color::DarkGray;

pub fn draw(frame: &mut Frame, state: &RenderState) {
    let [body, statusbar] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    render_phrase(frame, state, body);
    render_statusbar(frame, state, statusbar);
}

/// Render the phrase, vertically and horizontally centered.
fn render_phrase(frame: &mut Frame, state: &RenderState, area: Rect) {
    let top = area.height / 2;
    let line_area = Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height: 1.min(area.height),
    };

    let line = Line::from(phrase_spans(&state.display)).alignment(Alignment::Center);
    frame.render_widget(Paragraph::new(line), line_area);
}

/// Split the marked display string into styled spans. Text between a pair of
/// kerning markers is a single glyph that the display face wants tightened;
/// the terminal can't kern, so it gets an italic accent instead.
fn phrase_spans(display: &str) -> Vec<Span<'static>> {
    let base = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let kerned = base.add_modifier(Modifier::ITALIC);

    let mut spans = Vec::new();
    let mut buf = String::new();
    let mut in_kern = false;

    for c in display.chars() {
        if c == KERN_MARK {
            if !buf.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut buf),
                    if in_kern { kerned } else { base },
                ));
            }
            in_kern = !in_kern;
            continue;
        }
        buf.push(c);
    }
    if !buf.is_empty() {
        spans.push(Span::styled(buf, if in_kern { kerned } else { base }));
    }

    spans
}

/// Bottom line: collapsed shows only the '?' hint, expanded shows keys and
/// the digital time.
fn render_statusbar(frame: &mut Frame, state: &RenderState, area: Rect) {
    let muted = Style::default().fg(COLOR_TEXT_MUTED);

    let line = if state.show_help {
        let time = state
            .time
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-:--".to_string());
        Line::from(vec![
            Span::styled("q ", muted),
            Span::styled("quit", muted),
            Span::styled("   ? ", muted),
            Span::styled("hide", muted),
            Span::styled(format!("   {}", time), muted),
        ])
    } else {
        Line::from(Span::styled("?", muted))
    };

    frame.render_widget(Paragraph::new(line), area);
}
