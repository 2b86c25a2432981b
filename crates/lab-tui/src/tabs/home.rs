//! Home tab: the activity catalog.

use crossterm::event::{KeyCode, KeyEvent};
use lab_activities::{ActivityInfo, CATALOG, Difficulty};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use super::{InputMode, Tab, TabId};
use crate::shared::panel;

/// Home tab state.
pub struct HomeTab {
    selected: usize,
    /// Tab to open, set when the user presses Enter.
    requested: Option<TabId>,
}

impl Default for HomeTab {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeTab {
    /// Create the home tab with the first card selected.
    pub fn new() -> Self {
        Self {
            selected: 0,
            requested: None,
        }
    }

    /// The highlighted card.
    pub fn selected(&self) -> &'static ActivityInfo {
        &CATALOG[self.selected.min(CATALOG.len() - 1)]
    }

    /// Take the tab the user asked to open.
    pub fn take_request(&mut self) -> Option<TabId> {
        self.requested.take()
    }
}

fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Beginner => Color::Green,
        Difficulty::Intermediate => Color::Yellow,
        Difficulty::Advanced => Color::Red,
    }
}

impl Tab for HomeTab {
    fn input_mode(&self) -> InputMode {
        InputMode::Command
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(CATALOG.len() - 1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.requested = Some(TabId::for_activity(self.selected().kind));
            }
            _ => {}
        }
        false
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let block = panel("AI Learning Lab", Color::Cyan);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(Span::styled(
                "Discover how artificial intelligence works through hands-on activities.",
                Style::default().fg(Color::Cyan).italic(),
            )),
            Line::from(""),
        ];

        for (i, info) in CATALOG.iter().enumerate() {
            let marker = if i == self.selected { "\u{25b6} " } else { "  " };
            let title_style = if i == self.selected {
                Style::default().fg(Color::Black).bg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::White).bold()
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::raw(format!("{} ", info.icon)),
                Span::styled(info.title, title_style),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", info.difficulty),
                    Style::default().fg(difficulty_color(info.difficulty)),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("     {}", info.description),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    fn status_hint(&self) -> &str {
        "j/k:move  Enter:open  Tab:next  ?:help  q:quit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(tab: &mut HomeTab, code: KeyCode) {
        tab.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn enter_requests_selected_activity() {
        let mut home = HomeTab::new();
        press(&mut home, KeyCode::Char('j'));
        press(&mut home, KeyCode::Enter);
        assert_eq!(home.take_request(), Some(TabId::Network));
        assert_eq!(home.take_request(), None);
    }

    #[test]
    fn selection_is_clamped() {
        let mut home = HomeTab::new();
        press(&mut home, KeyCode::Up);
        assert_eq!(home.selected().title, "AI Training Simulator");
        for _ in 0..20 {
            press(&mut home, KeyCode::Down);
        }
        assert_eq!(home.selected().title, "AI vs Human");
    }
}
