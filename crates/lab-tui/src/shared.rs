//! Shared helpers for the tabs: status messages, panels, layout, the help popup.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Visual style of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// Something worked (green).
    Success,
    /// Plain information (white).
    Info,
    /// Rejected action (red).
    Error,
}

/// A one-line message shown under a tab's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    /// Visual style of this line.
    pub style: OutputStyle,
    /// The text content.
    pub text: String,
}

impl OutputLine {
    /// A success message.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            style: OutputStyle::Success,
            text: text.into(),
        }
    }

    /// An informational message.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            style: OutputStyle::Info,
            text: text.into(),
        }
    }

    /// An error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            style: OutputStyle::Error,
            text: text.into(),
        }
    }

    /// Render as a styled line.
    pub fn to_line(&self) -> Line<'static> {
        let color = match self.style {
            OutputStyle::Success => Color::Green,
            OutputStyle::Info => Color::White,
            OutputStyle::Error => Color::Red,
        };
        Line::from(Span::styled(self.text.clone(), Style::default().fg(color)))
    }
}

/// A bordered panel with a title.
pub fn panel(title: &str, color: Color) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

/// A dim label followed by a bold value.
pub fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White).bold()),
    ])
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw the global help popup.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 80, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  1-6 / Tab   Switch tab"),
        Line::from("  Ctrl+1..6   Switch tab while typing"),
        Line::from(""),
        Line::from("Home:     j/k move, Enter open"),
        Line::from("Tree:     j/k pick slot, a question, r result,"),
        Line::from("          s sample, p play, y/n answer, Esc build, x reset"),
        Line::from("          (form: type label, Tab emoji, Enter add, Esc cancel)"),
        Line::from("Pattern:  Enter start, r b g y p o press a color"),
        Line::from("Network:  j/k input, h/l adjust, i icon, Enter run, x reset"),
        Line::from("Quiz:     Enter start/submit/next, h human, a ai, x reset"),
        Line::from("Train:    c cat, d dog, t test, m model guesses, x reset"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  q / Ctrl+C  Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(panel("Help", Color::Cyan))
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
