pub mod auth;
pub mod navigation;

use crate::app::App;
use crate::state::AppMode;
use crossterm::event::{self, KeyEvent};

/// Main input handler dispatcher
pub fn handle_key_event(key: KeyEvent, app: &mut App) {
    if key.kind != event::KeyEventKind::Press {
        return;
    }

    if navigation::handle_global_shortcuts(key, app) {
        return;
    }

    match app.ui.mode {
        AppMode::Login | AppMode::Register => auth::handle_auth_input(key, app),
        AppMode::Dashboard => navigation::handle_dashboard_input(key, app),
    }
}
