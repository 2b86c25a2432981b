//! Decision tree tab: grow a yes/no tree, then play it.

use crossterm::event::{KeyCode, KeyEvent};
use lab_core::node::{QUESTION_EMOJIS, RESULT_EMOJIS};
use lab_core::render::{node_line, render_path};
use lab_core::{Branch, DecisionTreeSession, Mode, NodeId, NodeSpec, PlayState};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use super::{InputMode, Tab};
use crate::shared::{OutputLine, field, panel};

/// The add-node form.
#[derive(Debug, Clone)]
struct NodeForm {
    parent: NodeId,
    branch: Branch,
    leaf: bool,
    text: String,
    emoji: usize,
}

impl NodeForm {
    fn palette(&self) -> &'static [&'static str] {
        if self.leaf {
            &RESULT_EMOJIS
        } else {
            &QUESTION_EMOJIS
        }
    }

    fn emoji(&self) -> &'static str {
        let palette = self.palette();
        palette[self.emoji % palette.len()]
    }

    fn spec(&self) -> NodeSpec {
        if self.leaf {
            NodeSpec::result(self.text.clone(), self.emoji())
        } else {
            NodeSpec::question(self.text.clone(), self.emoji())
        }
    }
}

/// Decision tree tab state.
pub struct TreeTab {
    session: DecisionTreeSession,
    /// Index into the tree's open slots.
    slot: usize,
    form: Option<NodeForm>,
    message: Option<OutputLine>,
}

impl Default for TreeTab {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeTab {
    /// Start with the default root question.
    pub fn new() -> Self {
        Self {
            session: DecisionTreeSession::new(),
            slot: 0,
            form: None,
            message: Some(OutputLine::info(
                "Add YES and NO answers under the root, then press p to play.",
            )),
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &DecisionTreeSession {
        &self.session
    }

    /// Last status message.
    pub fn message(&self) -> Option<&OutputLine> {
        self.message.as_ref()
    }

    fn selected_slot(&self) -> Option<(NodeId, Branch)> {
        let slots = self.session.tree().open_slots();
        slots.get(self.slot.min(slots.len().saturating_sub(1))).copied()
    }

    fn open_form(&mut self, leaf: bool) {
        match self.selected_slot() {
            Some((parent, branch)) => {
                self.form = Some(NodeForm {
                    parent,
                    branch,
                    leaf,
                    text: String::new(),
                    emoji: 0,
                });
            }
            None => self.message = Some(OutputLine::error("No open slot to fill.")),
        }
    }

    fn submit_form(&mut self) {
        let Some(form) = self.form.take() else {
            return;
        };
        match self.session.attach(form.parent, form.branch, form.spec()) {
            Ok(_) => {
                let kind = if form.leaf { "Result" } else { "Question" };
                self.message = Some(OutputLine::success(format!(
                    "{kind} added on {}.",
                    form.branch.label()
                )));
                self.slot = 0;
            }
            Err(e) => {
                self.message = Some(OutputLine::error(e.to_string()));
                self.form = Some(form);
            }
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Enter => self.submit_form(),
            KeyCode::Esc => self.form = None,
            KeyCode::Tab => form.emoji = (form.emoji + 1) % form.palette().len(),
            KeyCode::Backspace => {
                form.text.pop();
            }
            KeyCode::Char(c) => form.text.push(c),
            _ => {}
        }
    }

    fn handle_build_key(&mut self, key: KeyEvent) {
        let slots = self.session.tree().open_slots().len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.slot = (self.slot + 1).min(slots.saturating_sub(1));
            }
            KeyCode::Up | KeyCode::Char('k') => self.slot = self.slot.saturating_sub(1),
            KeyCode::Char('a') => self.open_form(false),
            KeyCode::Char('r') => self.open_form(true),
            KeyCode::Char('s') => match self.session.load_sample() {
                Ok(()) => {
                    self.slot = 0;
                    self.message = Some(OutputLine::success("Sample tree loaded."));
                }
                Err(e) => self.message = Some(OutputLine::error(e.to_string())),
            },
            KeyCode::Char('p') | KeyCode::Enter => self.start(),
            KeyCode::Char('x') => {
                self.session.reset();
                self.slot = 0;
                self.message = Some(OutputLine::info("Tree reset."));
            }
            _ => {}
        }
    }

    fn start(&mut self) {
        match self.session.start_playing() {
            Ok(_) => self.message = Some(OutputLine::info("Answer with y or n.")),
            Err(e) => self.message = Some(OutputLine::error(e.to_string())),
        }
    }

    fn handle_play_key(&mut self, key: KeyEvent) {
        let branch = match key.code {
            KeyCode::Char('y') | KeyCode::Left => Branch::Yes,
            KeyCode::Char('n') | KeyCode::Right => Branch::No,
            KeyCode::Char('r') => {
                self.start();
                return;
            }
            KeyCode::Esc | KeyCode::Char('b') => {
                self.session.back_to_build();
                self.message = Some(OutputLine::info("Back to building."));
                return;
            }
            _ => return,
        };
        match self.session.choose(branch) {
            Ok(PlayState::AtLeaf(_)) => {
                self.message = Some(OutputLine::success("The tree made its decision!"));
            }
            Ok(PlayState::Stuck) => {
                self.message = Some(OutputLine::error(
                    "This branch has no answer yet. Press b to keep building.",
                ));
            }
            Ok(PlayState::AtNode(_)) => self.message = None,
            Err(e) => self.message = Some(OutputLine::error(e.to_string())),
        }
    }

    fn build_panel(&self) -> Vec<Line<'static>> {
        let tree = self.session.tree();
        let mut lines = vec![
            field("Nodes", tree.len().to_string()),
            field("Depth", tree.depth().to_string()),
            Line::from(""),
            Line::from(Span::styled(
                "Open slots:",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let selected = self.selected_slot();
        for (parent, branch) in tree.open_slots() {
            let label = tree
                .get(parent)
                .map(|n| n.label.clone())
                .unwrap_or_default();
            let text = format!("{} {} \u{2192} [{}]", branch.glyph(), label, branch.label());
            let style = if selected == Some((parent, branch)) {
                Style::default().fg(Color::Black).bg(Color::Green).bold()
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(Span::styled(text, style)));
        }

        if let Some(form) = &self.form {
            let kind = if form.leaf { "result" } else { "question" };
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("New {kind} on [{}]:", form.branch.label()),
                Style::default().fg(Color::Yellow).bold(),
            )));
            lines.push(Line::from(format!("{} > {}_", form.emoji(), form.text)));
        }
        lines
    }

    fn play_panel(&self) -> Vec<Line<'static>> {
        let Mode::Play(player) = self.session.mode() else {
            return Vec::new();
        };
        let tree = self.session.tree();
        let mut lines = Vec::new();
        match player.state() {
            PlayState::AtNode(id) => {
                if let Some(node) = tree.get(id) {
                    lines.push(Line::from(Span::styled(
                        format!("{} {}", node.emoji, node.label),
                        Style::default().fg(Color::Yellow).bold(),
                    )));
                    lines.push(Line::from("  y: \u{1f44d} YES    n: \u{1f44e} NO"));
                }
            }
            PlayState::AtLeaf(id) => {
                if let Some(node) = tree.get(id) {
                    let glyph = node.result_emoji.clone().unwrap_or_else(|| node.emoji.clone());
                    let text = node.result.clone().unwrap_or_else(|| node.label.clone());
                    lines.push(Line::from(Span::styled(
                        format!("{glyph} {text}"),
                        Style::default().fg(Color::Green).bold(),
                    )));
                    lines.push(Line::from("  r: play again    b: build"));
                }
            }
            PlayState::Stuck => lines.push(Line::from(Span::styled(
                "\u{1f6a7} Dead end",
                Style::default().fg(Color::Red).bold(),
            ))),
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Decision path:",
            Style::default().fg(Color::DarkGray),
        )));
        lines.extend(render_path(player.path()).lines().map(|l| Line::from(l.to_string())));
        lines
    }
}

impl Tab for TreeTab {
    fn input_mode(&self) -> InputMode {
        if self.form.is_some() {
            InputMode::TextInput
        } else {
            InputMode::Command
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.form.is_some() {
            self.handle_form_key(key);
        } else if self.session.is_building() {
            self.handle_build_key(key);
        } else {
            self.handle_play_key(key);
        }
        false
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[0]);

        let current = self.session.player().and_then(|p| p.state().node());
        let outline: Vec<Line> = self
            .session
            .render_text()
            .lines()
            .map(|l| {
                let on_path = current
                    .and_then(|id| self.session.tree().get(id))
                    .is_some_and(|n| l.ends_with(&node_line(n)));
                if on_path {
                    Line::from(Span::styled(
                        l.to_string(),
                        Style::default().fg(Color::Yellow).bold(),
                    ))
                } else {
                    Line::from(l.to_string())
                }
            })
            .collect();
        frame.render_widget(
            Paragraph::new(outline).block(panel("Decision Tree", Color::Green)),
            cols[0],
        );

        let (title, lines) = if self.session.is_building() {
            ("Build", self.build_panel())
        } else {
            ("Play", self.play_panel())
        };
        frame.render_widget(
            Paragraph::new(lines)
                .block(panel(title, Color::Magenta))
                .wrap(Wrap { trim: false }),
            cols[1],
        );

        if let Some(message) = &self.message {
            frame.render_widget(Paragraph::new(message.to_line()), rows[1]);
        }
    }

    fn status_hint(&self) -> &str {
        if self.form.is_some() {
            "type label  Tab:emoji  Enter:add  Esc:cancel"
        } else if self.session.is_building() {
            "j/k:slot  a:question  r:result  s:sample  p:play  x:reset  ?:help  q:quit"
        } else {
            "y:yes  n:no  r:restart  b/Esc:build  ?:help  q:quit"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(tab: &mut TreeTab, code: KeyCode) {
        tab.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(tab: &mut TreeTab, text: &str) {
        for c in text.chars() {
            press(tab, KeyCode::Char(c));
        }
    }

    #[test]
    fn form_adds_result_on_selected_slot() {
        let mut tab = TreeTab::new();
        press(&mut tab, KeyCode::Char('r'));
        assert_eq!(tab.input_mode(), InputMode::TextInput);
        type_text(&mut tab, "A cat");
        press(&mut tab, KeyCode::Enter);

        assert_eq!(tab.input_mode(), InputMode::Command);
        assert_eq!(tab.session().tree().len(), 2);
        let root = tab.session().tree().root_node();
        assert!(root.child(Branch::Yes).is_some());
    }

    #[test]
    fn empty_label_keeps_form_open() {
        let mut tab = TreeTab::new();
        press(&mut tab, KeyCode::Char('a'));
        press(&mut tab, KeyCode::Enter);
        assert_eq!(tab.input_mode(), InputMode::TextInput);
        assert_eq!(
            tab.message().map(|m| m.style),
            Some(crate::shared::OutputStyle::Error)
        );
        press(&mut tab, KeyCode::Esc);
        assert_eq!(tab.input_mode(), InputMode::Command);
    }

    #[test]
    fn sample_plays_to_a_result() {
        let mut tab = TreeTab::new();
        press(&mut tab, KeyCode::Char('s'));
        press(&mut tab, KeyCode::Char('p'));
        assert!(!tab.session().is_building());
        press(&mut tab, KeyCode::Char('y'));
        press(&mut tab, KeyCode::Char('y'));
        let state = tab.session().player().map(|p| p.state());
        assert!(matches!(state, Some(PlayState::AtLeaf(_))));
        press(&mut tab, KeyCode::Esc);
        assert!(tab.session().is_building());
    }

    #[test]
    fn play_needs_a_child() {
        let mut tab = TreeTab::new();
        press(&mut tab, KeyCode::Char('p'));
        assert!(tab.session().is_building());
    }
}
