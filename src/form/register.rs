//! Registration form state machine. Owns the field values, the cached
//! error map, the submitted gate and the general error banner, and is
//! the single place every edit and submit event flows through.

use crate::form::banner::BannerState;
use crate::form::orchestrator::{
    all_fields_empty, can_commit, validate_all, validate_field, ErrorMap, Field, Snapshot,
};
use crate::state::BANNER_TIMEOUT_MS;

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// Submitted gate. `Editing` until the first submit attempt, then
/// `Submitted` for the rest of the form's life. Field errors are only
/// ever displayed in `Submitted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitted,
}

/// Identity carried by a successful commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub first_name: String,
    pub email: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field validated; the caller should adopt the identity.
    Committed(Registration),
    /// Field errors are set and displayed inline.
    Rejected,
    /// Every field was empty; the banner is showing instead of
    /// per-field errors.
    AllEmpty,
}

#[derive(Debug, Default)]
pub struct RegisterForm {
    snapshot: Snapshot,
    errors: ErrorMap,
    phase: Phase,
    banner: BannerState,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.snapshot.value(field)
    }

    /// The error to display for a field, if any. Always `None` before
    /// the first submit attempt.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn banner_message(&self) -> Option<&str> {
        self.banner.message()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        self.snapshot.value_mut(field).push(c);
        self.after_edit(field);
    }

    pub fn pop_char(&mut self, field: Field) {
        self.snapshot.value_mut(field).pop();
        self.after_edit(field);
    }

    /// Replace a field's value wholesale (paste). Same re-validation
    /// rules as per-keystroke edits.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        *self.snapshot.value_mut(field) = value.into();
        self.after_edit(field);
    }

    /// Edit transition: before the first submit, typing never surfaces
    /// feedback; afterwards the edited field is re-validated, and a
    /// password edit re-checks confirm-password so a stale mismatch
    /// never outlives a corrected password.
    fn after_edit(&mut self, field: Field) {
        match self.phase {
            Phase::Editing => {
                self.errors.set(field, None);
            }
            Phase::Submitted => {
                self.errors.set(field, validate_field(&self.snapshot, field));
                if field == Field::Password && !self.snapshot.confirm_password.is_empty() {
                    self.errors.set(
                        Field::ConfirmPassword,
                        validate_field(&self.snapshot, Field::ConfirmPassword),
                    );
                }
            }
        }
    }

    /// Submit transition: flips the gate, re-validates everything, and
    /// either raises the banner (all fields empty), leaves the error
    /// map showing, or commits.
    pub fn submit(&mut self, tick_count: u64) -> SubmitOutcome {
        self.phase = Phase::Submitted;
        self.errors = validate_all(&self.snapshot);

        if all_fields_empty(&self.snapshot) {
            self.banner.show(ALL_FIELDS_REQUIRED, BANNER_TIMEOUT_MS, tick_count);
            return SubmitOutcome::AllEmpty;
        }
        self.banner.clear();

        if can_commit(&self.errors, &self.snapshot) {
            tracing::info!(first_name = %self.snapshot.first_name, "registration committed");
            return SubmitOutcome::Committed(Registration {
                first_name: self.snapshot.first_name.clone(),
                email: self.snapshot.email.clone(),
            });
        }
        SubmitOutcome::Rejected
    }

    pub fn on_tick(&mut self, tick_count: u64) {
        self.banner.on_tick(tick_count);
    }
}
