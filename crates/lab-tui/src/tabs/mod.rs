//! Tab definitions, trait, and tab bar rendering.

pub mod home;
pub mod network;
pub mod pattern;
pub mod quiz;
pub mod train;
pub mod tree;

use std::fmt;
use std::time::Duration;

use lab_activities::ActivityKind;
use ratatui::prelude::*;

/// Identifies which tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    /// Activity catalog.
    Home,
    /// Decision tree builder and player.
    Tree,
    /// Pattern recognition challenge.
    Pattern,
    /// Neural network explorer.
    Network,
    /// AI vs Human quiz.
    Quiz,
    /// Cat/dog training simulator.
    Train,
}

impl TabId {
    /// All tab IDs in display order.
    pub const ALL: [TabId; 6] = [
        TabId::Home,
        TabId::Tree,
        TabId::Pattern,
        TabId::Network,
        TabId::Quiz,
        TabId::Train,
    ];

    /// Parse a tab name, also accepting activity keys.
    pub fn from_name(name: &str) -> Option<TabId> {
        match name.to_lowercase().as_str() {
            "home" => Some(TabId::Home),
            other => other.parse::<ActivityKind>().ok().map(TabId::for_activity),
        }
    }

    /// The tab hosting an activity.
    pub fn for_activity(kind: ActivityKind) -> TabId {
        match kind {
            ActivityKind::DecisionTree => TabId::Tree,
            ActivityKind::PatternChallenge => TabId::Pattern,
            ActivityKind::NeuralNetwork => TabId::Network,
            ActivityKind::AiVsHuman => TabId::Quiz,
            ActivityKind::TrainAi => TabId::Train,
        }
    }

    /// Short name shown in the tab bar.
    pub fn name(self) -> &'static str {
        match self {
            TabId::Home => "Home",
            TabId::Tree => "Tree",
            TabId::Pattern => "Pattern",
            TabId::Network => "Network",
            TabId::Quiz => "Quiz",
            TabId::Train => "Train",
        }
    }

    /// Tab bar label, e.g. `[2]Tree`.
    pub fn title(self) -> String {
        format!("[{}]{}", self.index() + 1, self.name())
    }

    /// Index of this tab in the tab bar.
    pub fn index(self) -> usize {
        TabId::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Get the next tab (wrapping).
    pub fn next(self) -> TabId {
        TabId::ALL[(self.index() + 1) % TabId::ALL.len()]
    }

    /// Get the previous tab (wrapping).
    pub fn prev(self) -> TabId {
        TabId::ALL[(self.index() + TabId::ALL.len() - 1) % TabId::ALL.len()]
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name().to_lowercase())
    }
}

/// Whether a tab consumes keyboard input or uses single-key commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Single-key commands. Top-level handles tab switching, `q`, and `?`.
    Command,
    /// Text input: the tab has an open text field. Most keys go to the tab.
    TextInput,
}

/// Trait that each tab screen implements.
pub trait Tab {
    /// Return the input mode for event routing.
    fn input_mode(&self) -> InputMode;

    /// Handle a key event. Return `true` if the app should quit.
    fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> bool;

    /// Advance running animations. Return `true` if a redraw is needed.
    fn tick(&mut self, _elapsed: Duration) -> bool {
        false
    }

    /// Time until the next animation step, if one is pending.
    fn next_deadline(&self) -> Option<Duration> {
        None
    }

    /// Draw the tab content into the given area.
    fn draw(&self, frame: &mut Frame, area: Rect);

    /// Return context-sensitive status bar text.
    fn status_hint(&self) -> &str;
}

const DIVIDER: &str = " | ";

/// Draw the tab bar.
pub fn draw_tab_bar(frame: &mut Frame, active: TabId, area: Rect) {
    let mut spans = Vec::new();
    for tab in TabId::ALL {
        if tab.index() > 0 {
            spans.push(Span::styled(DIVIDER, Style::default().fg(Color::DarkGray)));
        }
        let style = if tab == active {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(tab.title(), style));
    }
    frame.render_widget(ratatui::widgets::Paragraph::new(Line::from(spans)), area);
}

/// Which tab label, if any, sits under column `col` of the tab bar.
pub fn tab_bar_hit_test(col: u16) -> Option<TabId> {
    let mut x = 0usize;
    let col = usize::from(col);
    for tab in TabId::ALL {
        let end = x + tab.title().chars().count();
        if (x..end).contains(&col) {
            return Some(tab);
        }
        x = end + DIVIDER.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_aliases() {
        assert_eq!(TabId::from_name("HOME"), Some(TabId::Home));
        assert_eq!(TabId::from_name("decision-tree"), Some(TabId::Tree));
        assert_eq!(TabId::from_name("quiz"), Some(TabId::Quiz));
        assert_eq!(TabId::from_name("nn"), Some(TabId::Network));
        assert_eq!(TabId::from_name("chess"), None);
    }

    #[test]
    fn wrapping_navigation() {
        assert_eq!(TabId::Home.prev(), TabId::Train);
        assert_eq!(TabId::Train.next(), TabId::Home);
        assert_eq!(TabId::Tree.next(), TabId::Pattern);
    }

    #[test]
    fn hit_test_follows_labels() {
        // "[1]Home | [2]Tree | ..."
        assert_eq!(tab_bar_hit_test(0), Some(TabId::Home));
        assert_eq!(tab_bar_hit_test(6), Some(TabId::Home));
        assert_eq!(tab_bar_hit_test(8), None);
        assert_eq!(tab_bar_hit_test(10), Some(TabId::Tree));
        assert_eq!(tab_bar_hit_test(500), None);
    }
}
