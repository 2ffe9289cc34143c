//! Validation orchestrator: runs every field validator over a form
//! snapshot, and decides whether the form as a whole may commit.

use crate::form::validators::{
    validate_confirm_password, validate_email, validate_name, validate_password,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];
}

/// Current value of every registration field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Snapshot {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

/// Per-field validation outcome. `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    confirm_password: Option<String>,
}

impl ErrorMap {
    pub fn get(&self, field: Field) -> Option<&str> {
        let slot = match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        };
        slot.as_deref()
    }

    pub fn set(&mut self, field: Field, message: Option<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = message;
    }

    pub fn all_clear(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }
}

/// Validate a single field against the snapshot. The confirm-password
/// validator also sees the current password value.
pub fn validate_field(snapshot: &Snapshot, field: Field) -> Option<String> {
    match field {
        Field::FirstName => validate_name(&snapshot.first_name, "First name"),
        Field::LastName => validate_name(&snapshot.last_name, "Last name"),
        Field::Email => validate_email(&snapshot.email),
        Field::Password => validate_password(&snapshot.password),
        Field::ConfirmPassword => {
            validate_confirm_password(&snapshot.confirm_password, &snapshot.password)
        }
    }
}

pub fn validate_all(snapshot: &Snapshot) -> ErrorMap {
    let mut errors = ErrorMap::default();
    for field in Field::ALL {
        errors.set(field, validate_field(snapshot, field));
    }
    errors
}

/// A commit requires a clear error map AND every field non-empty. The
/// second check is redundant today (every validator marks the empty
/// string invalid) but keeps commit safe if a validator ever loosens.
pub fn can_commit(errors: &ErrorMap, snapshot: &Snapshot) -> bool {
    errors.all_clear() && Field::ALL.iter().all(|f| !snapshot.value(*f).is_empty())
}

pub fn all_fields_empty(snapshot: &Snapshot) -> bool {
    Field::ALL.iter().all(|f| snapshot.value(*f).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_snapshot() -> Snapshot {
        Snapshot {
            first_name: "Jo".to_string(),
            last_name: "Lee".to_string(),
            email: "jo@x.com".to_string(),
            password: "Abcdef1!".to_string(),
            confirm_password: "Abcdef1!".to_string(),
        }
    }

    #[test]
    fn test_validate_all_empty_snapshot_is_all_required() {
        let errors = validate_all(&Snapshot::default());
        assert_eq!(errors.get(Field::FirstName), Some("First name is required"));
        assert_eq!(errors.get(Field::LastName), Some("Last name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Password), Some("Password is required"));
        assert_eq!(errors.get(Field::ConfirmPassword), Some("Please confirm your password"));
    }

    #[test]
    fn test_validate_all_valid_snapshot_is_clear() {
        let errors = validate_all(&valid_snapshot());
        assert!(errors.all_clear());
    }

    #[test]
    fn test_validate_all_is_idempotent() {
        let snapshot = Snapshot {
            first_name: "J".to_string(),
            email: "bad".to_string(),
            ..Snapshot::default()
        };
        assert_eq!(validate_all(&snapshot), validate_all(&snapshot));
    }

    #[test]
    fn test_can_commit_requires_clear_map_and_non_empty_fields() {
        let snapshot = valid_snapshot();
        assert!(can_commit(&validate_all(&snapshot), &snapshot));

        // A clear map alone is not enough: commit still blocks on an
        // empty field.
        let empty = Snapshot::default();
        assert!(!can_commit(&ErrorMap::default(), &empty));

        let mut errors = validate_all(&snapshot);
        errors.set(Field::Email, Some("Enter a valid email address".to_string()));
        assert!(!can_commit(&errors, &snapshot));
    }

    #[test]
    fn test_all_fields_empty() {
        assert!(all_fields_empty(&Snapshot::default()));
        let mut snapshot = Snapshot::default();
        snapshot.email = "j".to_string();
        assert!(!all_fields_empty(&snapshot));
    }
}
