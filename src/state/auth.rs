use crate::model::User;

/// Which control on the current auth screen holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    LoginUsername,
    LoginPassword,
    RegisterFirstName,
    RegisterLastName,
    RegisterEmail,
    RegisterPassword,
    RegisterConfirmPassword,
    AuthSubmit,
    AuthSwitch,
}

/// State management for authentication
pub struct AuthState {
    pub current_user: Option<User>,
    pub input_mode: Option<InputMode>,
    pub show_password: bool,
    pub show_confirm_password: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            current_user: None,
            input_mode: Some(InputMode::LoginUsername),
            show_password: false,
            show_confirm_password: false,
        }
    }
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn login(&mut self, user: User) {
        self.current_user = Some(user);
        self.input_mode = None;
        self.reset_visibility();
    }

    pub fn logout(&mut self) {
        self.current_user = None;
        self.input_mode = Some(InputMode::LoginUsername);
        self.reset_visibility();
    }

    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.input_mode = Some(mode);
    }

    pub fn reset_visibility(&mut self) {
        self.show_password = false;
        self.show_confirm_password = false;
    }
}
