//! Transient error banner with a tick-count deadline. Showing a new
//! banner overwrites the previous deadline, so a stale dismiss can
//! never clear a newer message; dropping the owning form drops the
//! deadline with it.

use crate::state::TICK_RATE_MS;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannerState {
    current: Option<(String, u64)>, // message, close_tick
}

impl BannerState {
    pub fn show(&mut self, message: impl Into<String>, ms: u64, tick_count: u64) {
        let close_tick = tick_count + ms / TICK_RATE_MS;
        self.current = Some((message.into(), close_tick));
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|(msg, _)| msg.as_str())
    }

    pub fn on_tick(&mut self, tick_count: u64) {
        if let Some((_, close_tick)) = &self.current {
            if tick_count >= *close_tick {
                self.current = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_expires_at_deadline() {
        let mut banner = BannerState::default();
        banner.show("All fields are required", 5000, 10);
        banner.on_tick(10 + 5000 / TICK_RATE_MS - 1);
        assert_eq!(banner.message(), Some("All fields are required"));
        banner.on_tick(10 + 5000 / TICK_RATE_MS);
        assert_eq!(banner.message(), None);
    }

    #[test]
    fn test_replacing_banner_replaces_deadline() {
        let mut banner = BannerState::default();
        banner.show("first", 5000, 0);
        banner.show("second", 5000, 40);
        // The first banner's deadline has passed; the second survives.
        banner.on_tick(50);
        assert_eq!(banner.message(), Some("second"));
        banner.on_tick(40 + 5000 / TICK_RATE_MS);
        assert_eq!(banner.message(), None);
    }

    #[test]
    fn test_clear_cancels_pending_dismiss() {
        let mut banner = BannerState::default();
        banner.show("msg", 5000, 0);
        banner.clear();
        assert_eq!(banner.message(), None);
        banner.on_tick(1000);
        assert_eq!(banner.message(), None);
    }
}
