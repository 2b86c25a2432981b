//! Neural network explorer tab.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use lab_activities::network::{Neuron, Stage};
use lab_activities::{LabConfig, NetworkExplorer};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::{InputMode, Tab};
use crate::shared::{OutputLine, panel};

/// Neural network tab state.
pub struct NetworkTab {
    explorer: NetworkExplorer,
    /// Which input slider the arrows move.
    focus: usize,
    message: Option<OutputLine>,
}

impl NetworkTab {
    /// Create the tab with both inputs at their defaults.
    pub fn new(config: &LabConfig) -> Self {
        Self {
            explorer: NetworkExplorer::new(config),
            focus: 0,
            message: Some(OutputLine::info(
                "Set the inputs, then press Enter to send them through.",
            )),
        }
    }

    /// The explorer being shown.
    pub fn explorer(&self) -> &NetworkExplorer {
        &self.explorer
    }

    fn nudge(&mut self, steps: i32) {
        if let Err(e) = self.explorer.nudge_input(self.focus, steps) {
            self.message = Some(OutputLine::error(e.to_string()));
        }
    }
}

fn neuron_span(neuron: Neuron) -> Span<'static> {
    if neuron.active {
        Span::styled(
            format!("({:>5.2})", neuron.value),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        )
    } else {
        Span::styled("(  -  )", Style::default().fg(Color::DarkGray))
    }
}

fn stage_name(stage: Option<Stage>) -> &'static str {
    match stage {
        None => "idle",
        Some(Stage::Inputs) => "reading inputs",
        Some(Stage::Hidden1) => "hidden layer 1",
        Some(Stage::Hidden2) => "hidden layer 2",
        Some(Stage::Output) => "done",
    }
}

impl Tab for NetworkTab {
    fn input_mode(&self) -> InputMode {
        InputMode::Command
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.focus = 0,
            KeyCode::Down | KeyCode::Char('j') => self.focus = 1,
            KeyCode::Left | KeyCode::Char('h') => self.nudge(-1),
            KeyCode::Right | KeyCode::Char('l') => self.nudge(1),
            KeyCode::Char('i') => self.explorer.cycle_icon(self.focus),
            KeyCode::Enter | KeyCode::Char(' ') => match self.explorer.process() {
                Ok(pass) => {
                    self.message = Some(OutputLine::info(format!(
                        "Processing... the output will be {:.2}",
                        pass.output
                    )));
                }
                Err(e) => self.message = Some(OutputLine::error(e.to_string())),
            },
            KeyCode::Char('x') if !self.explorer.is_animating() => {
                self.explorer.reset();
                self.message = Some(OutputLine::info("Network reset."));
            }
            _ => {}
        }
        false
    }

    fn tick(&mut self, elapsed: Duration) -> bool {
        let changed = self.explorer.tick(elapsed);
        if changed && self.explorer.stage() == Some(Stage::Output) {
            self.message = Some(OutputLine::success(format!(
                "Output: {:.2}",
                self.explorer.output().value
            )));
        }
        changed
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.explorer.until_next_stage()
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(1)])
            .split(area);

        let inputs = self.explorer.inputs();
        let mut lines = vec![Line::from(Span::styled(
            "Inputs",
            Style::default().fg(Color::DarkGray),
        ))];
        for (i, value) in inputs.iter().enumerate() {
            let marker = if i == self.focus { "\u{25b6}" } else { " " };
            let filled = (*value * 2.0).round() as usize;
            let bar = format!("{}{}", "\u{2588}".repeat(filled), "\u{2591}".repeat(20 - filled.min(20)));
            lines.push(Line::from(vec![
                Span::raw(format!("{marker} {} ", self.explorer.icon(i))),
                Span::styled(bar, Style::default().fg(Color::Yellow)),
                Span::raw(format!(" {value:>4.1}")),
            ]));
        }
        lines.push(Line::from(""));

        let glowing = self.explorer.active_connections();
        if !glowing.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("\u{26a1} {}", glowing.join("  ")),
                Style::default().fg(Color::Yellow).italic(),
            )));
        } else {
            lines.push(Line::from(""));
        }

        for (name, layer) in ["Hidden 1", "Hidden 2", "Output  "]
            .iter()
            .zip(self.explorer.layers())
        {
            let mut spans = vec![Span::styled(
                format!("{name} "),
                Style::default().fg(Color::DarkGray),
            )];
            for neuron in layer {
                spans.push(neuron_span(*neuron));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Stage: {}", stage_name(self.explorer.stage())),
            Style::default().fg(Color::DarkGray),
        )));

        frame.render_widget(
            Paragraph::new(lines).block(panel("Neural Network Explorer", Color::Blue)),
            rows[0],
        );

        if let Some(message) = &self.message {
            frame.render_widget(Paragraph::new(message.to_line()), rows[1]);
        }
    }

    fn status_hint(&self) -> &str {
        "j/k:input  h/l:adjust  i:icon  Enter:process  x:reset  ?:help  q:quit"
    }
}
