use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

/// Handle a key event against the current state.
///
/// The help overlay intercepts everything: while it is up, only the keys that
/// close it do anything.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => app.focus_forward(),
        KeyCode::Char('h') | KeyCode::Left => app.focus_backward(),
        KeyCode::Char('H') => app.toggle_hide_done(),
        KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('o') => app.open_selected(),
        KeyCode::Char('j') | KeyCode::Down => app.move_selection(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_selection(-1),
        KeyCode::Char('g') => app.select_first(),
        KeyCode::Char('G') => app.select_last(),
        _ => {}
    }
}
