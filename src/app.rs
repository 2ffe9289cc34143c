//! Application aggregate: the view controller owning which screen is
//! visible and who is logged in, plus one form instance per auth
//! screen. Forms are created fresh on every mount and discarded on
//! commit or navigation away.

use crate::form::{LoginForm, RegisterForm, Registration};
use crate::model::User;
use crate::state::{AppMode, AuthState, InputMode, UiState};

pub struct App {
    pub ui: UiState,
    pub auth: AuthState,
    pub login: LoginForm,
    pub register: RegisterForm,
}

impl App {
    pub fn new() -> App {
        App {
            ui: UiState::default(),
            auth: AuthState::default(),
            login: LoginForm::new(),
            register: RegisterForm::new(),
        }
    }

    pub fn on_tick(&mut self) {
        self.ui.tick();
        let tick = self.ui.tick_count;
        self.login.on_tick(tick);
        self.register.on_tick(tick);
    }

    /// The `onRegister` edge: adopt the committed identity and leave
    /// the registration screen. The spent form is replaced.
    pub fn complete_registration(&mut self, registration: Registration) {
        tracing::debug!(first_name = %registration.first_name, "switching to dashboard");
        self.auth
            .login(User::from_registration(registration.first_name, registration.email));
        self.register = RegisterForm::new();
        self.ui.set_mode(AppMode::Dashboard);
    }

    /// The `onLogin` edge.
    pub fn complete_login(&mut self, username: String) {
        tracing::debug!(%username, "switching to dashboard");
        self.auth.login(User::from_login(username));
        self.login = LoginForm::new();
        self.ui.set_mode(AppMode::Dashboard);
    }

    pub fn logout(&mut self) {
        tracing::debug!("logged out");
        self.auth.logout();
        self.login = LoginForm::new();
        self.register = RegisterForm::new();
        self.ui.set_mode(AppMode::Login);
    }

    /// `onSwitchToLogin`: navigation is independent of validation
    /// state; the abandoned register form is dropped, banner timer and
    /// all.
    pub fn switch_to_login(&mut self) {
        self.register = RegisterForm::new();
        self.auth.reset_visibility();
        self.auth.set_input_mode(InputMode::LoginUsername);
        self.ui.set_mode(AppMode::Login);
    }

    pub fn switch_to_register(&mut self) {
        self.login = LoginForm::new();
        self.auth.reset_visibility();
        self.auth.set_input_mode(InputMode::RegisterFirstName);
        self.ui.set_mode(AppMode::Register);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Field, SubmitOutcome};

    #[test]
    fn test_registration_commit_adopts_identity() {
        let mut app = App::new();
        app.switch_to_register();
        app.register.set_value(Field::FirstName, "Jo");
        app.register.set_value(Field::LastName, "Lee");
        app.register.set_value(Field::Email, "jo@x.com");
        app.register.set_value(Field::Password, "Abcdef1!");
        app.register.set_value(Field::ConfirmPassword, "Abcdef1!");

        match app.register.submit(app.ui.tick_count) {
            SubmitOutcome::Committed(reg) => app.complete_registration(reg),
            other => panic!("expected commit, got {:?}", other),
        }

        assert_eq!(app.ui.mode, AppMode::Dashboard);
        let user = app.auth.current_user.as_ref().unwrap();
        assert_eq!(user.display_name, "Jo");
        assert_eq!(user.email.as_deref(), Some("jo@x.com"));
    }

    #[test]
    fn test_switching_screens_discards_form_state() {
        let mut app = App::new();
        app.switch_to_register();
        app.register.set_value(Field::Email, "half typed");
        app.register.submit(app.ui.tick_count);
        app.switch_to_login();
        app.switch_to_register();
        assert_eq!(app.register.value(Field::Email), "");
        assert_eq!(app.register.banner_message(), None);
        assert_eq!(app.register.error(Field::Email), None);
    }

    #[test]
    fn test_logout_returns_to_login() {
        let mut app = App::new();
        app.complete_login("jo".to_string());
        assert!(app.auth.is_logged_in());
        app.logout();
        assert!(!app.auth.is_logged_in());
        assert_eq!(app.ui.mode, AppMode::Login);
        assert_eq!(app.auth.input_mode, Some(InputMode::LoginUsername));
    }
}
