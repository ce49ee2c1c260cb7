use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::app::{App, InputMode};
use crate::config;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

/// Main terminal event loop: draws the current state and dispatches key
/// presses into `app`. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app, state) {
                    info!("quit requested");
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply one key press to `app`. Returns `true` when the app should exit.
pub fn handle_key_event(key: KeyEvent, app: &mut App, state: &mut EventLoopState) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if app.current_user().is_none() {
        state.pending_gg = false;
        return handle_login_key(key, app);
    }

    match app.mode {
        InputMode::Search => {
            state.pending_gg = false;
            handle_search_key(key, app);
            false
        }
        InputMode::AddForm => {
            state.pending_gg = false;
            handle_form_key(key, app);
            false
        }
        InputMode::Normal => handle_browse_key(key, app, state),
    }
}

fn handle_login_key(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('j') | KeyCode::Down => app.login_next(),
        KeyCode::Char('k') | KeyCode::Up => app.login_prev(),
        KeyCode::Enter => app.login_selected(),
        KeyCode::Char('a') => app.login("admin"),
        KeyCode::Char('u') => app.login("user"),
        _ => {}
    }
    false
}

fn handle_search_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => app.exit_search_mode(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Down => app.next(),
        KeyCode::Up => app.prev(),
        KeyCode::Char(c) => {
            if !c.is_control() {
                app.push_search_char(c);
            }
        }
        _ => {}
    }
}

fn handle_form_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.cancel_add_form(),
        KeyCode::Enter => {
            app.submit_add_form();
        }
        KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus_prev(),
        KeyCode::Backspace => app.form.pop_char(),
        KeyCode::Char(c) => {
            if !c.is_control() {
                app.form.push_char(c);
            }
        }
        _ => {}
    }
}

fn handle_browse_key(key: KeyEvent, app: &mut App, state: &mut EventLoopState) -> bool {
    if key.code == KeyCode::Char('g') {
        if state.pending_gg {
            app.select_first();
        }
        state.pending_gg = !state.pending_gg;
        return false;
    }
    // Any other key cancels a pending `g`.
    state.pending_gg = false;

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('/') => app.enter_search_mode(),
        KeyCode::Esc => app.clear_search(),
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Char('G') => app.select_last(),
        KeyCode::Char('f') => app.cycle_filter(),
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('o') => app.toggle_sort_order(),
        KeyCode::Char('b') => app.cycle_group(),
        KeyCode::Char('a') => app.open_add_form(),
        KeyCode::Char('d') | KeyCode::Delete => {
            app.delete_selected();
        }
        KeyCode::Char('L') => app.logout(),
        _ => {}
    }
    false
}
