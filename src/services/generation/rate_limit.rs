//! Cooldown Gate
//!
//! Tracks when the last accepted generation attempt started and rejects new
//! attempts that arrive inside the cooldown window.

/// Last accepted attempt, in Unix milliseconds. `None` until the first one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimitState {
    pub last_request_at_ms: Option<u64>,
}

impl RateLimitState {
    /// Admit an attempt at `now_ms` or report the whole seconds still to wait.
    ///
    /// A rejected attempt leaves the state untouched.
    pub fn try_acquire(&mut self, now_ms: u64, cooldown_ms: u64) -> Result<(), u64> {
        if let Some(last) = self.last_request_at_ms {
            let elapsed = now_ms.saturating_sub(last);
            if elapsed < cooldown_ms {
                return Err(seconds_remaining(cooldown_ms - elapsed));
            }
        }
        self.last_request_at_ms = Some(now_ms);
        Ok(())
    }
}

/// Remaining wait rounded up to whole seconds.
pub fn seconds_remaining(remaining_ms: u64) -> u64 {
    remaining_ms.div_ceil(1000)
}
