//! Top-level application state owning one instance of every tab.

use std::time::Duration;

use lab_activities::LabConfig;

use crate::tabs::home::HomeTab;
use crate::tabs::network::NetworkTab;
use crate::tabs::pattern::PatternTab;
use crate::tabs::quiz::QuizTab;
use crate::tabs::train::TrainTab;
use crate::tabs::tree::TreeTab;
use crate::tabs::{InputMode, Tab, TabId};

/// Main application state.
pub struct TuiApp {
    /// Currently active tab.
    pub active_tab: TabId,
    /// Whether to show the global help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Activity catalog.
    pub home: HomeTab,
    /// Decision tree builder.
    pub tree: TreeTab,
    /// Pattern challenge.
    pub pattern: PatternTab,
    /// Neural network explorer.
    pub network: NetworkTab,
    /// AI vs Human quiz.
    pub quiz: QuizTab,
    /// Training simulator.
    pub train: TrainTab,
}

impl TuiApp {
    /// Create the app with every activity fresh.
    pub fn new(config: LabConfig, start_tab: TabId) -> Self {
        Self {
            active_tab: start_tab,
            show_help: false,
            should_quit: false,
            home: HomeTab::new(),
            tree: TreeTab::new(),
            pattern: PatternTab::new(&config),
            network: NetworkTab::new(&config),
            quiz: QuizTab::new(&config),
            train: TrainTab::new(&config),
        }
    }

    /// Get the input mode of the currently active tab.
    pub fn active_input_mode(&self) -> InputMode {
        self.active_tab_ref().input_mode()
    }

    /// Get a reference to the active tab.
    pub fn active_tab_ref(&self) -> &dyn Tab {
        match self.active_tab {
            TabId::Home => &self.home,
            TabId::Tree => &self.tree,
            TabId::Pattern => &self.pattern,
            TabId::Network => &self.network,
            TabId::Quiz => &self.quiz,
            TabId::Train => &self.train,
        }
    }

    /// Get a mutable reference to the active tab.
    pub fn active_tab_mut(&mut self) -> &mut dyn Tab {
        match self.active_tab {
            TabId::Home => &mut self.home,
            TabId::Tree => &mut self.tree,
            TabId::Pattern => &mut self.pattern,
            TabId::Network => &mut self.network,
            TabId::Quiz => &mut self.quiz,
            TabId::Train => &mut self.train,
        }
    }

    fn tabs_mut(&mut self) -> [&mut dyn Tab; 6] {
        [
            &mut self.home,
            &mut self.tree,
            &mut self.pattern,
            &mut self.network,
            &mut self.quiz,
            &mut self.train,
        ]
    }

    /// Switch to a tab by ID.
    pub fn switch_tab(&mut self, tab: TabId) {
        tracing::debug!(from = %self.active_tab, to = %tab, "switch tab");
        self.active_tab = tab;
    }

    /// Forward a key to the active tab, then follow any navigation it requested.
    pub fn dispatch_key(&mut self, key: crossterm::event::KeyEvent) {
        if self.active_tab_mut().handle_key(key) {
            self.should_quit = true;
        }
        if let Some(tab) = self.home.take_request() {
            self.switch_tab(tab);
        }
    }

    /// Advance every running animation, including ones on hidden tabs.
    /// Returns true if anything changed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.tabs_mut()
            .into_iter()
            .fold(false, |changed, tab| tab.tick(elapsed) || changed)
    }

    /// Shortest wait until some tab has an animation step due.
    pub fn next_deadline(&self) -> Option<Duration> {
        [
            self.pattern.next_deadline(),
            self.network.next_deadline(),
            self.train.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn home_enter_opens_activity() {
        let mut app = TuiApp::new(LabConfig::default(), TabId::Home);
        app.dispatch_key(key(KeyCode::Char('j')));
        app.dispatch_key(key(KeyCode::Char('j')));
        app.dispatch_key(key(KeyCode::Enter));
        assert_eq!(app.active_tab, TabId::Tree);
    }

    #[test]
    fn hidden_tabs_keep_animating() {
        let mut app = TuiApp::new(LabConfig::default(), TabId::Pattern);
        app.dispatch_key(key(KeyCode::Enter));
        assert!(app.next_deadline().is_some());
        app.switch_tab(TabId::Quiz);
        assert!(app.tick(Duration::from_secs(5)));
        assert!(app.pattern.game().accepts_input());
        assert_eq!(app.next_deadline(), None);
    }
}
