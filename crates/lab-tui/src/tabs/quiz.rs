//! AI vs Human quiz tab.

use crossterm::event::{KeyCode, KeyEvent};
use lab_activities::quiz::{Mode, QuizPhase, Thinking};
use lab_activities::{LabConfig, QuizGame};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use super::{InputMode, Tab};
use crate::shared::{OutputLine, field, panel};

/// Quiz tab state.
pub struct QuizTab {
    quiz: QuizGame,
    message: Option<OutputLine>,
}

impl QuizTab {
    /// Create the tab on the intro screen.
    pub fn new(config: &LabConfig) -> Self {
        Self {
            quiz: QuizGame::new(config),
            message: None,
        }
    }

    /// The quiz being shown.
    pub fn quiz(&self) -> &QuizGame {
        &self.quiz
    }

    fn advance(&mut self) {
        let result = match self.quiz.phase() {
            QuizPhase::Intro | QuizPhase::Finished => {
                self.quiz.start();
                Ok(())
            }
            QuizPhase::Question => self.quiz.submit().map(|correct| {
                self.message = Some(if correct {
                    OutputLine::success("Correct! +20")
                } else {
                    OutputLine::error("Not quite.")
                });
            }),
            QuizPhase::Feedback { .. } => self.quiz.next().map(|_| self.message = None),
        };
        if let Err(e) = result {
            self.message = Some(OutputLine::error(e.to_string()));
        }
    }

    fn select(&mut self, mode: Mode) {
        if let Err(e) = self.quiz.select(mode) {
            self.message = Some(OutputLine::error(e.to_string()));
        }
    }
}

fn thinking_lines(title: &str, color: Color, thinking: &Thinking, chosen: bool) -> Vec<Line<'static>> {
    let title_style = if chosen {
        Style::default().fg(Color::Black).bg(color).bold()
    } else {
        Style::default().fg(color).bold()
    };
    let mut lines = vec![Line::from(Span::styled(title.to_string(), title_style))];
    for (i, step) in thinking.process.iter().enumerate() {
        lines.push(Line::from(format!("  {}. {step}", i + 1)));
    }
    lines.push(Line::from(Span::styled(
        format!("  \u{2192} {}", thinking.answer),
        Style::default().fg(Color::White).italic(),
    )));
    lines.push(Line::from(Span::styled(
        format!("  {}", thinking.traits.join(" \u{2022} ")),
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

impl QuizTab {
    fn intro_lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                "\u{1f916}\u{2764}\u{fe0f}  AI vs Human",
                Style::default().fg(Color::Cyan).bold(),
            )),
            Line::from("Discover how AI thinks differently from humans!"),
            Line::from(""),
            Line::from("HUMANS use emotions, feelings, and experience."),
            Line::from("AI uses math, patterns, and training data."),
            Line::from(""),
            Line::from(format!(
                "{} scenarios. Pick who handles each one: h for HUMAN, a for AI.",
                self.quiz.len()
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to start.",
                Style::default().fg(Color::Green),
            )),
        ]
    }

    fn finished_lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                "Learning Complete!",
                Style::default().fg(Color::Cyan).bold(),
            )),
            Line::from(""),
            field(
                "Score",
                format!("{} / {}", self.quiz.score(), self.quiz.max_score()),
            ),
            field("Percentage", format!("{}%", self.quiz.percentage())),
            Line::from(""),
            Line::from(Span::styled(
                self.quiz.rating().to_string(),
                Style::default().fg(Color::Yellow).bold(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to play again.",
                Style::default().fg(Color::Green),
            )),
        ]
    }

    fn scenario_lines(&self) -> Vec<Line<'static>> {
        let Some(scenario) = self.quiz.current() else {
            return Vec::new();
        };
        let selected = self.quiz.selected();
        let mut lines = vec![
            Line::from(Span::styled(
                format!(
                    "Scenario {}/{}   Score {}",
                    self.quiz.index() + 1,
                    self.quiz.len(),
                    self.quiz.score()
                ),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                format!("{} {}", scenario.icon, scenario.situation),
                Style::default().fg(Color::White).bold(),
            )),
            Line::from(Span::styled(
                scenario.question,
                Style::default().fg(Color::Cyan),
            )),
            Line::from(""),
        ];
        lines.extend(thinking_lines(
            "[h] \u{2764}\u{fe0f} HUMAN WAY",
            Color::LightRed,
            &scenario.human,
            selected == Some(Mode::Human),
        ));
        lines.push(Line::from(""));
        lines.extend(thinking_lines(
            "[a] \u{1f916} AI WAY",
            Color::LightBlue,
            &scenario.ai,
            selected == Some(Mode::Ai),
        ));

        if let QuizPhase::Feedback { correct } = self.quiz.phase() {
            lines.push(Line::from(""));
            let (verdict, color) = if correct {
                ("\u{2705} Correct!", Color::Green)
            } else {
                ("\u{274c} Not quite", Color::Red)
            };
            lines.push(Line::from(Span::styled(
                verdict,
                Style::default().fg(color).bold(),
            )));
            lines.push(Line::from(scenario.explanation));
        }
        lines
    }
}

impl Tab for QuizTab {
    fn input_mode(&self) -> InputMode {
        InputMode::Command
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.advance(),
            KeyCode::Char('h') | KeyCode::Left => self.select(Mode::Human),
            KeyCode::Char('a') | KeyCode::Right => self.select(Mode::Ai),
            KeyCode::Char('x') => {
                self.quiz.reset();
                self.message = None;
            }
            _ => {}
        }
        false
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(1)])
            .split(area);

        let lines = match self.quiz.phase() {
            QuizPhase::Intro => self.intro_lines(),
            QuizPhase::Finished => self.finished_lines(),
            QuizPhase::Question | QuizPhase::Feedback { .. } => self.scenario_lines(),
        };
        frame.render_widget(
            Paragraph::new(lines)
                .block(panel("AI vs Human", Color::Cyan))
                .wrap(Wrap { trim: false }),
            rows[0],
        );

        if let Some(message) = &self.message {
            frame.render_widget(Paragraph::new(message.to_line()), rows[1]);
        }
    }

    fn status_hint(&self) -> &str {
        match self.quiz.phase() {
            QuizPhase::Intro | QuizPhase::Finished => "Enter:start  ?:help  q:quit",
            QuizPhase::Question => "h:human  a:ai  Enter:submit  x:reset  ?:help  q:quit",
            QuizPhase::Feedback { .. } => "Enter:next  x:reset  ?:help  q:quit",
        }
    }
}
