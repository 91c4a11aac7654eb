//! Deduplicated warnings.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Emits each distinct warning message at most once for its lifetime.
#[derive(Debug, Default)]
pub struct WarnOnce {
    seen: Mutex<HashSet<String>>,
}

impl WarnOnce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs `message` at WARN unless it was already logged. Returns whether
    /// it was emitted.
    pub fn warn(&self, message: &str) -> bool {
        let mut seen = self.seen.lock().unwrap_or_else(PoisonError::into_inner);
        if !seen.insert(message.to_string()) {
            return false;
        }
        drop(seen);
        tracing::warn!("{message}");
        true
    }

    /// Number of distinct messages emitted so far.
    pub fn len(&self) -> usize {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn reset(&self) {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_each_message_once() {
        let warnings = WarnOnce::new();
        assert!(warnings.warn("a"));
        assert!(!warnings.warn("a"));
        assert!(warnings.warn("b"));
        assert_eq!(warnings.len(), 2);
        warnings.reset();
        assert!(warnings.is_empty());
        assert!(warnings.warn("a"));
    }
}
