//! Training simulator tab.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use lab_activities::training::{Label, TrainingPhase};
use lab_activities::{LabConfig, TrainingLab};
use ratatui::prelude::*;
use ratatui::widgets::{Gauge, Paragraph, Wrap};

use super::{InputMode, Tab};
use crate::shared::{OutputLine, field, panel};

/// Training simulator tab state.
pub struct TrainTab {
    lab: TrainingLab,
    message: Option<OutputLine>,
}

impl TrainTab {
    /// Create the tab in the training phase.
    pub fn new(config: &LabConfig) -> Self {
        Self {
            lab: TrainingLab::new(config),
            message: Some(OutputLine::info(
                "Teach the AI: add cat (c) and dog (d) examples.",
            )),
        }
    }

    /// The lab being shown.
    pub fn lab(&self) -> &TrainingLab {
        &self.lab
    }

    fn label_key(&mut self, label: Label) {
        let message = match self.lab.phase() {
            TrainingPhase::Training => match self.lab.add_example(label) {
                Ok(example) => OutputLine::success(format!("Added {} as a {label}.", example.emoji)),
                Err(e) => OutputLine::error(e.to_string()),
            },
            TrainingPhase::Testing => match self.lab.guess(label) {
                Ok(v) if v.is_correct() => {
                    OutputLine::success(format!("Correct! It was a {}.", v.actual))
                }
                Ok(v) => OutputLine::error(format!("Oops, that was a {}.", v.actual)),
                Err(e) => OutputLine::error(e.to_string()),
            },
        };
        self.message = Some(message);
    }

    fn model_guess(&mut self) {
        let guess = self.lab.predict();
        self.message = Some(match self.lab.guess(guess) {
            Ok(v) if v.is_correct() => OutputLine::success(format!("AI guessed {guess}. Correct!")),
            Ok(v) => OutputLine::error(format!("AI guessed {guess}, but it was a {}.", v.actual)),
            Err(e) => OutputLine::error(e.to_string()),
        });
    }
}

impl Tab for TrainTab {
    fn input_mode(&self) -> InputMode {
        InputMode::Command
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') => self.label_key(Label::Cat),
            KeyCode::Char('d') => self.label_key(Label::Dog),
            KeyCode::Char('t') | KeyCode::Enter => {
                let result = self.lab.start_testing().map(|_| ());
                self.message = Some(match result {
                    Ok(()) => OutputLine::info("Is it a cat or a dog?"),
                    Err(e) => OutputLine::error(e.to_string()),
                });
            }
            KeyCode::Char('m') => self.model_guess(),
            KeyCode::Char('x') => {
                self.lab.reset();
                self.message = Some(OutputLine::info("Training data cleared."));
            }
            _ => {}
        }
        false
    }

    fn tick(&mut self, elapsed: Duration) -> bool {
        self.lab.tick(elapsed)
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.lab.until_next_test()
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        let (cats, dogs) = self.lab.counts();
        let mut lines = vec![
            field("Phase", format!("{:?}", self.lab.phase())),
            field(
                "Examples",
                format!(
                    "{} (\u{1f431} {cats}  \u{1f436} {dogs}, need {})",
                    self.lab.examples().len(),
                    self.lab.min_examples()
                ),
            ),
            Line::from(""),
        ];
        let gallery: Vec<&str> = self.lab.examples().iter().map(|e| e.emoji).collect();
        lines.push(Line::from(gallery.join(" ")));
        lines.push(Line::from(""));

        if let Some(test) = self.lab.current_test() {
            lines.push(Line::from(Span::styled(
                format!("Test item: {}", test.emoji),
                Style::default().fg(Color::Yellow).bold(),
            )));
            match self.lab.verdict() {
                Some(v) if v.is_correct() => lines.push(Line::from(Span::styled(
                    "\u{2705} correct",
                    Style::default().fg(Color::Green),
                ))),
                Some(_) => lines.push(Line::from(Span::styled(
                    "\u{274c} incorrect",
                    Style::default().fg(Color::Red),
                ))),
                None => lines.push(Line::from("c: cat   d: dog   m: let the AI guess")),
            }
        }

        frame.render_widget(
            Paragraph::new(lines)
                .block(panel("AI Training Simulator", Color::Green))
                .wrap(Wrap { trim: false }),
            rows[0],
        );

        let tally = self.lab.tally();
        let gauge = Gauge::default()
            .block(panel("Accuracy", Color::Green))
            .gauge_style(Style::default().fg(Color::Green))
            .percent(u16::try_from(tally.accuracy().min(100)).unwrap_or(100))
            .label(format!(
                "{}% ({}/{})",
                tally.accuracy(),
                tally.correct,
                tally.total
            ));
        frame.render_widget(gauge, rows[1]);

        if let Some(message) = &self.message {
            frame.render_widget(Paragraph::new(message.to_line()), rows[2]);
        }
    }

    fn status_hint(&self) -> &str {
        match self.lab.phase() {
            TrainingPhase::Training => "c:cat  d:dog  t:test  x:reset  ?:help  q:quit",
            TrainingPhase::Testing => "c:cat  d:dog  m:AI guess  x:reset  ?:help  q:quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(tab: &mut TrainTab, code: KeyCode) {
        tab.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn train_then_test() {
        let mut tab = TrainTab::new(&LabConfig::default());
        press(&mut tab, KeyCode::Char('t'));
        assert_eq!(tab.lab().phase(), TrainingPhase::Training);

        for c in ['c', 'c', 'd', 'd'] {
            press(&mut tab, KeyCode::Char(c));
        }
        press(&mut tab, KeyCode::Char('t'));
        assert_eq!(tab.lab().phase(), TrainingPhase::Testing);

        press(&mut tab, KeyCode::Char('m'));
        assert_eq!(tab.lab().tally().total, 1);
        assert!(tab.tick(Duration::from_millis(1500)));
        assert!(tab.lab().verdict().is_none());
    }

    #[test]
    fn reset_key_clears() {
        let mut tab = TrainTab::new(&LabConfig::default());
        press(&mut tab, KeyCode::Char('d'));
        press(&mut tab, KeyCode::Char('x'));
        assert!(tab.lab().examples().is_empty());
    }
}
