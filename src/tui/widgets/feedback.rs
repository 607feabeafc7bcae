//! Submission feedback: a confirmation that reverts to idle after a deadline.
//!
//! The deadline lives inside the widget state and is checked on every tick, so
//! dropping or resetting the owner cancels it. Nothing fires after teardown.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Longest a confirmation can stay up; longer durations are clamped to this.
pub const MAX_DISPLAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Lifecycle of a widget's confirmation display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    /// Nothing to show.
    #[default]
    Idle,
    /// The confirmation is visible until `until`.
    Submitted { until: Instant },
}

impl Feedback {
    /// Shows the confirmation for `duration` starting at `now`, replacing any pending deadline.
    pub fn show(&mut self, now: Instant, duration: Duration) {
        let until = now.checked_add(duration.min(MAX_DISPLAY)).unwrap_or(now);
        *self = Self::Submitted { until };
    }

    /// Reverts to [`Feedback::Idle`] once the deadline has passed.
    ///
    /// Returns `true` if this call caused the revert.
    pub fn tick(&mut self, now: Instant) -> bool {
        match *self {
            Self::Submitted { until } if now >= until => {
                *self = Self::Idle;
                true
            }
            _ => false,
        }
    }

    /// Hides the confirmation immediately.
    pub fn dismiss(&mut self) {
        *self = Self::Idle;
    }

    /// Returns `true` while the confirmation is visible.
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted { .. })
    }

    /// Time left before the confirmation reverts, if it is visible.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match *self {
            Self::Idle => None,
            Self::Submitted { until } => Some(until.saturating_duration_since(now)),
        }
    }
}

/// Renders a green confirmation banner: a bold heading plus optional detail text.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_banner(heading: &str, detail: Option<&str>, frame: &mut Frame, area: Rect) {
    let green = Style::default().fg(Color::Green);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(green);

    let mut lines = vec![Line::from(Span::styled(
        format!("\u{2713} {heading}"),
        green.add_modifier(Modifier::BOLD),
    ))];
    if let Some(detail) = detail {
        lines.push(Line::from(Span::styled(detail, green)));
    }
    lines.push(Line::from(Span::styled(
        "Ctrl+D: dismiss",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
