//! Classifier for hosted account-portal development/staging domains.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Suffixes of the legacy portal layout, `accounts.<instance>.<suffix>`.
const LEGACY_DEV_SUFFIXES: &[&str] = &[".lcl.dev", ".lclstage.dev", ".lclclerk.com"];

/// Suffixes of the current portal layout, `<instance>.<suffix>`.
const CURRENT_DEV_SUFFIXES: &[&str] = &[".accounts.dev", ".accountsstage.dev", ".accounts.lclclerk.com"];

/// Matches e.g. `accounts.foo.bar-13.lcl.dev`.
pub fn is_legacy_dev_account_portal_origin(host: &str) -> bool {
    host.starts_with("accounts.") && LEGACY_DEV_SUFFIXES.iter().any(|s| host.ends_with(s))
}

/// Matches e.g. `foo-bar-13.accounts.dev`, but not the frontend API host
/// `foo-bar-13.clerk.accounts.dev`.
pub fn is_current_dev_account_portal_origin(host: &str) -> bool {
    CURRENT_DEV_SUFFIXES
        .iter()
        .any(|s| host.ends_with(s) && !host.ends_with(&format!(".clerk{s}")))
}

/// Memoized hostname classification.
///
/// Entries are never evicted: the set of hostnames seen by one context is
/// bounded by user navigation.
#[derive(Debug, Default)]
pub struct DevPortalCache {
    entries: Mutex<HashMap<String, bool>>,
}

impl DevPortalCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// True for legacy or current dev account-portal hosts; false for empty input.
    pub fn is_dev_account_portal_origin(&self, hostname: &str) -> bool {
        if hostname.is_empty() {
            return false;
        }
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        *entries.entry(hostname.to_string()).or_insert_with(|| {
            is_legacy_dev_account_portal_origin(hostname)
                || is_current_dev_account_portal_origin(hostname)
        })
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
