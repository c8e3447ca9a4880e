//! Coalescing guard for reloads triggered from multiple sources.

/// What caused a reload to be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// A user action or screen mount. Always allowed through.
    Direct,
    /// A change-notification event, which may be the echo of this client's
    /// own write. Skipped while a load is in flight or shortly after one
    /// completed.
    Notification,
}

/// Tracks in-flight and recently-completed loads so that a write followed by
/// its own notification echo results in one fetch, not two.
#[derive(Clone, Debug)]
pub struct ReloadGate {
    window_ms: u64,
    in_flight: bool,
    last_finished_ms: Option<u64>,
}

impl Default for ReloadGate {
    fn default() -> Self {
        Self::new()
    }
}

impl ReloadGate {
    /// Notification-triggered reloads within this window of a completed load
    /// are treated as redundant.
    pub const DEFAULT_WINDOW_MS: u64 = 1500;

    pub fn new() -> Self {
        Self::with_window(Self::DEFAULT_WINDOW_MS)
    }

    pub fn with_window(window_ms: u64) -> Self {
        Self {
            window_ms,
            in_flight: false,
            last_finished_ms: None,
        }
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Ask to start a load at `now_ms`. Returns `false` if the reload should
    /// be skipped as redundant; on `true` the caller owns the load and must
    /// call [`finish`](Self::finish) when it resolves (success or error).
    pub fn begin(&mut self, now_ms: u64, trigger: Trigger) -> bool {
        if trigger == Trigger::Notification {
            if self.in_flight {
                return false;
            }
            if let Some(finished) = self.last_finished_ms {
                if now_ms.saturating_sub(finished) < self.window_ms {
                    return false;
                }
            }
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self, now_ms: u64) {
        self.in_flight = false;
        self.last_finished_ms = Some(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_loads_always_pass() {
        let mut gate = ReloadGate::new();
        assert!(gate.begin(0, Trigger::Direct));
        // Even while one is in flight.
        assert!(gate.begin(10, Trigger::Direct));
    }

    #[test]
    fn notification_skipped_while_in_flight() {
        let mut gate = ReloadGate::new();
        assert!(gate.begin(0, Trigger::Direct));
        assert!(!gate.begin(100, Trigger::Notification));
        gate.finish(200);
    }

    #[test]
    fn notification_skipped_inside_window() {
        let mut gate = ReloadGate::with_window(1500);
        assert!(gate.begin(0, Trigger::Direct));
        gate.finish(100);

        // The echo of our own write arrives shortly after.
        assert!(!gate.begin(600, Trigger::Notification));
        // A genuinely later remote change gets through.
        assert!(gate.begin(2000, Trigger::Notification));
    }

    #[test]
    fn first_notification_passes() {
        let mut gate = ReloadGate::new();
        assert!(gate.begin(0, Trigger::Notification));
    }
}
