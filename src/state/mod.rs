pub mod auth;
pub mod ui;

pub use auth::{AuthState, InputMode};
pub use ui::{AppMode, UiState};

/// Milliseconds between ticks of the main event loop. Timed state (the
/// error banner) is expressed as tick-count deadlines derived from this.
pub const TICK_RATE_MS: u64 = 100;

/// How long the general error banner stays visible after a failed submit.
pub const BANNER_TIMEOUT_MS: u64 = 5000;
