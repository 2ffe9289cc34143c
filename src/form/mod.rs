//! Form validation engine. Pure field validators, an orchestrator that
//! runs them over a whole snapshot, and the per-screen form state
//! machines that own values, errors and the transient error banner.

pub mod banner;
pub mod login;
pub mod orchestrator;
pub mod register;
pub mod validators;

pub use banner::BannerState;
pub use login::{LoginField, LoginForm};
pub use orchestrator::{all_fields_empty, can_commit, validate_all, validate_field, ErrorMap, Field, Snapshot};
pub use register::{Phase, RegisterForm, Registration, SubmitOutcome};
