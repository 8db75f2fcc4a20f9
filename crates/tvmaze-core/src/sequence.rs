//! Request sequencing
//!
//! Each logical action owns a sequencer. Starting the action issues a token;
//! a response may only be applied while its token is still the latest one.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one issued request of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Sequence number of this token (starts at 1)
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic token source for one logical action.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    /// Create a sequencer with no issued tokens
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token, invalidating all earlier ones
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `token` is still the most recently issued one
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_increase() {
        let seq = RequestSequencer::new();
        let a = seq.issue();
        let b = seq.issue();
        assert_eq!(a.value(), 1);
        assert_eq!(b.value(), 2);
        assert!(a < b);
    }

    #[test]
    fn test_only_latest_is_current() {
        let seq = RequestSequencer::new();
        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
