//! Local user model. There is no server: the identity adopted here is
//! whatever the login or registration form committed.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub display_name: String,
    pub email: Option<String>,
}

impl User {
    pub fn from_login(username: String) -> Self {
        Self {
            display_name: username,
            email: None,
        }
    }

    pub fn from_registration(first_name: String, email: String) -> Self {
        Self {
            display_name: first_name,
            email: Some(email),
        }
    }
}
