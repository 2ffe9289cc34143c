use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Shortcuts that apply on every screen. Returns true when the key was
/// consumed.
pub fn handle_global_shortcuts(key: KeyEvent, app: &mut App) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.ui.quit();
        return true;
    }
    false
}

/// Dashboard keys: Enter activates the logout control, q/Esc quit.
pub fn handle_dashboard_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.logout(),
        KeyCode::Char('q') | KeyCode::Esc => app.ui.quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppMode;

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut app = App::new();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_global_shortcuts(key, &mut app));
        assert!(app.ui.should_quit);
    }

    #[test]
    fn test_enter_on_dashboard_logs_out() {
        let mut app = App::new();
        app.complete_login("jo".to_string());
        handle_dashboard_input(KeyEvent::from(KeyCode::Enter), &mut app);
        assert_eq!(app.ui.mode, AppMode::Login);
        assert!(!app.auth.is_logged_in());
    }
}
