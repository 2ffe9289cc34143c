//! Keyboard handling for the login and register screens: typing, focus
//! cycling, password visibility, submit and screen switching.

use crate::app::App;
use crate::form::{Field, LoginField, SubmitOutcome};
use crate::state::{AppMode, InputMode};
use crossterm::event::{KeyCode, KeyEvent};

const LOGIN_FOCUS_ORDER: &[InputMode] = &[
    InputMode::LoginUsername,
    InputMode::LoginPassword,
    InputMode::AuthSubmit,
    InputMode::AuthSwitch,
];

const REGISTER_FOCUS_ORDER: &[InputMode] = &[
    InputMode::RegisterFirstName,
    InputMode::RegisterLastName,
    InputMode::RegisterEmail,
    InputMode::RegisterPassword,
    InputMode::RegisterConfirmPassword,
    InputMode::AuthSubmit,
    InputMode::AuthSwitch,
];

fn register_field(mode: InputMode) -> Option<Field> {
    match mode {
        InputMode::RegisterFirstName => Some(Field::FirstName),
        InputMode::RegisterLastName => Some(Field::LastName),
        InputMode::RegisterEmail => Some(Field::Email),
        InputMode::RegisterPassword => Some(Field::Password),
        InputMode::RegisterConfirmPassword => Some(Field::ConfirmPassword),
        _ => None,
    }
}

fn login_field(mode: InputMode) -> Option<LoginField> {
    match mode {
        InputMode::LoginUsername => Some(LoginField::Username),
        InputMode::LoginPassword => Some(LoginField::Password),
        _ => None,
    }
}

/// Handle authentication input (login/register)
pub fn handle_auth_input(key: KeyEvent, app: &mut App) {
    let is_login = app.ui.mode == AppMode::Login;
    let focus_order = if is_login { LOGIN_FOCUS_ORDER } else { REGISTER_FOCUS_ORDER };

    match key.code {
        KeyCode::Char(c) => {
            if let Some(im) = app.auth.input_mode {
                if let Some(field) = login_field(im) {
                    app.login.push_char(field, c);
                } else if let Some(field) = register_field(im) {
                    app.register.push_char(field, c);
                }
            }
        }
        KeyCode::Backspace => {
            if let Some(im) = app.auth.input_mode {
                if let Some(field) = login_field(im) {
                    app.login.pop_char(field);
                } else if let Some(field) = register_field(im) {
                    app.register.pop_char(field);
                }
            }
        }
        KeyCode::Tab => {
            let current_idx = focus_order
                .iter()
                .position(|m| Some(*m) == app.auth.input_mode)
                .unwrap_or(0);
            let next_idx = (current_idx + 1) % focus_order.len();
            app.auth.input_mode = Some(focus_order[next_idx]);
        }
        KeyCode::BackTab => {
            let current_idx = focus_order
                .iter()
                .position(|m| Some(*m) == app.auth.input_mode)
                .unwrap_or(0);
            let next_idx = (current_idx + focus_order.len() - 1) % focus_order.len();
            app.auth.input_mode = Some(focus_order[next_idx]);
        }
        // F3 mirrors the eye button: unmask the focused password field.
        KeyCode::F(3) => match app.auth.input_mode {
            Some(InputMode::LoginPassword) | Some(InputMode::RegisterPassword) => {
                app.auth.show_password = !app.auth.show_password;
            }
            Some(InputMode::RegisterConfirmPassword) => {
                app.auth.show_confirm_password = !app.auth.show_confirm_password;
            }
            _ => {}
        },
        KeyCode::Enter => match app.auth.input_mode {
            Some(InputMode::AuthSubmit) => submit(app, is_login),
            Some(InputMode::AuthSwitch) => {
                if is_login {
                    app.switch_to_register();
                } else {
                    app.switch_to_login();
                }
            }
            Some(im) => {
                // Enter on an input advances focus, like Tab.
                if let Some(idx) = focus_order.iter().position(|m| *m == im) {
                    app.auth.input_mode = Some(focus_order[(idx + 1) % focus_order.len()]);
                }
            }
            None => {}
        },
        KeyCode::Esc => app.ui.quit(),
        _ => {}
    }
}

fn submit(app: &mut App, is_login: bool) {
    let tick = app.ui.tick_count;
    if is_login {
        if let Some(username) = app.login.submit(tick) {
            app.complete_login(username);
        }
    } else {
        match app.register.submit(tick) {
            SubmitOutcome::Committed(registration) => app.complete_registration(registration),
            SubmitOutcome::Rejected | SubmitOutcome::AllEmpty => {}
        }
    }
}
