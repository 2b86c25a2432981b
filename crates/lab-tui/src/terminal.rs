//! Terminal setup, teardown, and the main event loop.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::TuiApp;
use crate::tabs::{self, InputMode, TabId};

/// Longest wait for input when no animation is due.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Launch the TUI application.
pub fn run(mut app: TuiApp) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Draw, wait for input or the next animation step, feed elapsed time.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
) -> Result<(), String> {
    let mut last = Instant::now();
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            tracing::info!("quit");
            return Ok(());
        }

        let timeout = app.next_deadline().map_or(IDLE_POLL, |d| d.min(IDLE_POLL));
        if event::poll(timeout).map_err(|e| format!("event error: {e}"))? {
            let event = event::read().map_err(|e| format!("event error: {e}"))?;
            handle_event(app, event);
        }

        let now = Instant::now();
        app.tick(now - last);
        last = now;
    }
}

/// Handle a crossterm event.
fn handle_event(app: &mut TuiApp, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        _ => {}
    }
}

/// Handle keyboard input with mode-aware tab switching.
fn handle_key(app: &mut TuiApp, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => {
                app.should_quit = true;
                return;
            }
            code => {
                if let Some(tab) = ctrl_number_to_tab(code) {
                    app.switch_tab(tab);
                    return;
                }
            }
        }
    }

    if app.active_input_mode() == InputMode::Command {
        match key.code {
            KeyCode::Char('q') => {
                app.should_quit = true;
                return;
            }
            KeyCode::Char('?') => {
                app.show_help = !app.show_help;
                return;
            }
            KeyCode::Esc if app.show_help => {
                app.show_help = false;
                return;
            }
            KeyCode::Tab => {
                app.switch_tab(app.active_tab.next());
                return;
            }
            KeyCode::BackTab => {
                app.switch_tab(app.active_tab.prev());
                return;
            }
            KeyCode::Char(c) => {
                if let Some(tab) = digit_to_tab(c) {
                    app.switch_tab(tab);
                    return;
                }
            }
            _ => {}
        }
    }

    app.dispatch_key(key);
}

fn digit_to_tab(c: char) -> Option<TabId> {
    let idx = c.to_digit(10)? as usize;
    idx.checked_sub(1).and_then(|i| TabId::ALL.get(i)).copied()
}

/// Map Ctrl+digit to a tab.
fn ctrl_number_to_tab(code: KeyCode) -> Option<TabId> {
    match code {
        KeyCode::Char(c) => digit_to_tab(c),
        _ => None,
    }
}

/// Clicks on the tab bar switch tabs.
fn handle_mouse(app: &mut TuiApp, mouse: MouseEvent) {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) && mouse.row == 0 {
        if let Some(tab) = tabs::tab_bar_hit_test(mouse.column) {
            app.switch_tab(tab);
        }
    }
}

/// Main draw function.
fn draw(frame: &mut Frame, app: &TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tab_bar(frame, app.active_tab, chunks[0]);

    app.active_tab_ref().draw(frame, chunks[1]);

    let hint = app.active_tab_ref().status_hint();
    let status = Paragraph::new(hint).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[2]);

    if app.show_help {
        crate::shared::draw_help_popup(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_activities::LabConfig;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_switch_tabs_in_command_mode() {
        let mut app = TuiApp::new(LabConfig::default(), TabId::Home);
        handle_key(&mut app, key(KeyCode::Char('5')));
        assert_eq!(app.active_tab, TabId::Quiz);
        handle_key(&mut app, key(KeyCode::Char('9')));
        assert_eq!(app.active_tab, TabId::Quiz);
        handle_key(&mut app, key(KeyCode::Char('0')));
        assert_eq!(app.active_tab, TabId::Quiz);
    }

    #[test]
    fn typing_in_tree_form_does_not_switch_or_quit() {
        let mut app = TuiApp::new(LabConfig::default(), TabId::Tree);
        handle_key(&mut app, key(KeyCode::Char('a')));
        for c in "q1?".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        assert!(!app.should_quit);
        assert_eq!(app.active_tab, TabId::Tree);
        assert!(!app.show_help);

        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('3'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.active_tab, TabId::Pattern);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = TuiApp::new(LabConfig::default(), TabId::Home);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
