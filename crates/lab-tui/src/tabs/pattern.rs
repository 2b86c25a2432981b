//! Pattern challenge tab.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use lab_activities::pattern::{Color as Pad, PatternPhase, PressOutcome};
use lab_activities::{LabConfig, PatternGame};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{InputMode, Tab};
use crate::shared::{OutputLine, field, panel};

/// Pattern challenge tab state.
pub struct PatternTab {
    game: PatternGame,
    best: u32,
    message: Option<OutputLine>,
}

impl PatternTab {
    /// Create an idle game.
    pub fn new(config: &LabConfig) -> Self {
        Self {
            game: PatternGame::new(config),
            best: 0,
            message: Some(OutputLine::info("Press Enter to start.")),
        }
    }

    /// The running game.
    pub fn game(&self) -> &PatternGame {
        &self.game
    }

    fn press(&mut self, pad: Pad) {
        match self.game.press(pad) {
            Ok(PressOutcome::Correct { remaining, .. }) => {
                self.message = Some(OutputLine::info(format!("Good! {remaining} to go.")));
            }
            Ok(PressOutcome::RoundComplete { round, score }) => {
                self.best = self.best.max(score);
                self.message = Some(OutputLine::success(format!(
                    "Round complete! Get ready for round {round}."
                )));
            }
            Ok(PressOutcome::Mismatch { expected, .. }) => {
                self.message = Some(OutputLine::error(format!(
                    "Game over! It was {expected}. Press Enter to try again."
                )));
            }
            Err(e) => self.message = Some(OutputLine::error(e.to_string())),
        }
    }
}

fn pad_key(c: char) -> Option<Pad> {
    match c {
        'r' => Some(Pad::Red),
        'b' => Some(Pad::Blue),
        'g' => Some(Pad::Green),
        'y' => Some(Pad::Yellow),
        'p' => Some(Pad::Purple),
        'o' => Some(Pad::Orange),
        _ => None,
    }
}

fn pad_color(pad: Pad) -> Color {
    match pad {
        Pad::Red => Color::Red,
        Pad::Blue => Color::Blue,
        Pad::Green => Color::Green,
        Pad::Yellow => Color::Yellow,
        Pad::Purple => Color::Magenta,
        Pad::Orange => Color::LightRed,
    }
}

impl Tab for PatternTab {
    fn input_mode(&self) -> InputMode {
        InputMode::Command
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if matches!(
                    self.game.phase(),
                    PatternPhase::Idle | PatternPhase::GameOver
                ) {
                    self.game.start();
                    self.message = Some(OutputLine::info("Watch the pattern..."));
                }
            }
            KeyCode::Char(c) => {
                if let Some(pad) = pad_key(c) {
                    self.press(pad);
                }
            }
            _ => {}
        }
        false
    }

    fn tick(&mut self, elapsed: Duration) -> bool {
        let was_showing = self.game.phase() == PatternPhase::Showing;
        let changed = self.game.tick(elapsed);
        if was_showing && self.game.accepts_input() {
            self.message = Some(OutputLine::info("Your turn! Repeat the pattern."));
        }
        changed
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.game.until_next_flash()
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Min(6),
                Constraint::Length(1),
            ])
            .split(area);

        let phase = match self.game.phase() {
            PatternPhase::Idle => "Ready",
            PatternPhase::Showing => "Watch...",
            PatternPhase::Input => "Your turn",
            PatternPhase::GameOver => "Game over",
        };
        let info = vec![
            field("Round", self.game.round().to_string()),
            field("Score", self.game.score().to_string()),
            field("Best", self.best.to_string()),
            field(
                "Progress",
                format!(
                    "{}/{} {phase}",
                    self.game.user_input().len(),
                    self.game.sequence().len()
                ),
            ),
        ];
        frame.render_widget(
            Paragraph::new(info).block(panel("Pattern Challenge", Color::Cyan)),
            rows[0],
        );

        let board = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(rows[1]);
        for (row, pads) in Pad::ALL.chunks(3).enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 3); 3])
                .split(board[row]);
            for (cell, pad) in cells.iter().zip(pads) {
                let lit = self.game.highlighted() == Some(*pad);
                let style = if lit {
                    Style::default().fg(Color::Black).bg(pad_color(*pad)).bold()
                } else {
                    Style::default().fg(pad_color(*pad))
                };
                let key = pad.to_string().chars().next().unwrap_or(' ');
                let label = format!("[{key}] {pad}");
                let widget = Paragraph::new(label)
                    .alignment(Alignment::Center)
                    .style(style)
                    .block(Block::default().borders(Borders::ALL).border_style(style));
                frame.render_widget(widget, *cell);
            }
        }

        if let Some(message) = &self.message {
            frame.render_widget(Paragraph::new(message.to_line()), rows[2]);
        }
    }

    fn status_hint(&self) -> &str {
        "Enter:start  r/b/g/y/p/o:press  ?:help  q:quit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(tab: &mut PatternTab, code: KeyCode) {
        tab.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn key_for(pad: Pad) -> char {
        pad.to_string().chars().next().unwrap()
    }

    #[test]
    fn full_round_through_keys() {
        let mut tab = PatternTab::new(&LabConfig::default().instant());
        press(&mut tab, KeyCode::Enter);
        tab.tick(Duration::ZERO);
        assert!(tab.game().accepts_input());

        let first = tab.game().sequence()[0];
        press(&mut tab, KeyCode::Char(key_for(first)));
        assert_eq!(tab.game().round(), 2);
        assert_eq!(tab.game().score(), 10);
    }

    #[test]
    fn keys_ignored_during_playback() {
        let mut tab = PatternTab::new(&LabConfig::default());
        press(&mut tab, KeyCode::Enter);
        press(&mut tab, KeyCode::Char('r'));
        assert_eq!(tab.game().phase(), PatternPhase::Showing);
        assert!(tab.next_deadline().is_some());
        press(&mut tab, KeyCode::Char('s'));
        press(&mut tab, KeyCode::Enter);
        assert_eq!(tab.game().phase(), PatternPhase::Showing);
        assert!(tab.game().user_input().is_empty());
    }
}
