//! Login form. No field-level validation: any non-empty pair passes,
//! an empty submit raises the same auto-dismissing banner the
//! registration form uses.

use crate::form::banner::BannerState;
use crate::state::BANNER_TIMEOUT_MS;

pub const BOTH_FIELDS_REQUIRED: &str = "Please enter both username and password.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    username: String,
    password: String,
    banner: BannerState,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Username => &self.username,
            LoginField::Password => &self.password,
        }
    }

    pub fn banner_message(&self) -> Option<&str> {
        self.banner.message()
    }

    pub fn push_char(&mut self, field: LoginField, c: char) {
        self.value_mut(field).push(c);
    }

    pub fn pop_char(&mut self, field: LoginField) {
        self.value_mut(field).pop();
    }

    fn value_mut(&mut self, field: LoginField) -> &mut String {
        match field {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    /// Returns the username to adopt on success; on an empty field the
    /// banner goes up instead.
    pub fn submit(&mut self, tick_count: u64) -> Option<String> {
        if self.username.is_empty() || self.password.is_empty() {
            self.banner.show(BOTH_FIELDS_REQUIRED, BANNER_TIMEOUT_MS, tick_count);
            return None;
        }
        self.banner.clear();
        tracing::info!(username = %self.username, "login committed");
        Some(self.username.clone())
    }

    pub fn on_tick(&mut self, tick_count: u64) {
        self.banner.on_tick(tick_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TICK_RATE_MS;

    #[test]
    fn test_empty_submit_shows_banner() {
        let mut form = LoginForm::new();
        form.push_char(LoginField::Username, 'a');
        assert_eq!(form.submit(0), None);
        assert_eq!(form.banner_message(), Some(BOTH_FIELDS_REQUIRED));
    }

    #[test]
    fn test_any_non_empty_pair_logs_in() {
        let mut form = LoginForm::new();
        form.push_char(LoginField::Username, 'j');
        form.push_char(LoginField::Username, 'o');
        form.push_char(LoginField::Password, 'x');
        assert_eq!(form.submit(0), Some("jo".to_string()));
        assert_eq!(form.banner_message(), None);
    }

    #[test]
    fn test_banner_auto_dismisses() {
        let mut form = LoginForm::new();
        form.submit(7);
        let deadline = 7 + crate::state::BANNER_TIMEOUT_MS / TICK_RATE_MS;
        form.on_tick(deadline - 1);
        assert!(form.banner_message().is_some());
        form.on_tick(deadline);
        assert_eq!(form.banner_message(), None);
    }
}
