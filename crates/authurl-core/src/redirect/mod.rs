//! Redirect origin validation.
//!
//! [`check_redirect`] makes the decision without side effects;
//! [`RedirectGuard`] wraps it and logs one warning per rejected URL.

mod check;
mod flow;
mod glob;
mod origins;

pub use check::{check_redirect, is_problematic_url, RedirectCheck, RejectReason};
pub use flow::{is_redirect_for_frontend_api_flow, requires_user_input};
pub use glob::{glob_to_regex, AllowedOrigin};
pub use origins::{create_allowed_redirect_origins, etld_plus_one_from_product_domain, Environment};

use crate::warn_once::WarnOnce;

/// Allow-list bound to the page's own origin and a warning sink.
#[derive(Debug, Clone, Copy)]
pub struct RedirectGuard<'a> {
    allowed_origins: Option<&'a [AllowedOrigin]>,
    own_origin: &'a str,
    warnings: &'a WarnOnce,
}

impl<'a> RedirectGuard<'a> {
    pub fn new(
        allowed_origins: Option<&'a [AllowedOrigin]>,
        own_origin: &'a str,
        warnings: &'a WarnOnce,
    ) -> Self {
        Self {
            allowed_origins,
            own_origin,
            warnings,
        }
    }

    /// The decision alone, without logging.
    pub fn check(&self, candidate: &str) -> RedirectCheck {
        check_redirect(self.allowed_origins, self.own_origin, candidate)
    }

    /// The decision, with a warning naming the URL when it is refused.
    pub fn evaluate(&self, candidate: &str) -> RedirectCheck {
        let check = self.check(candidate);
        if !check.allowed {
            let url = check.url.as_deref().unwrap_or(candidate);
            let reason = check.reason.unwrap_or(RejectReason::NotAllowed);
            self.warnings.warn(&format!(
                "Redirect URL {url} is not allowed ({reason}), falling back to the default redirect URL."
            ));
        }
        check
    }

    pub fn is_allowed(&self, candidate: &str) -> bool {
        self.evaluate(candidate).allowed
    }
}

/// Predicate form of [`RedirectGuard::is_allowed`].
pub fn is_allowed_redirect<'a>(
    allowed_origins: Option<&'a [AllowedOrigin]>,
    own_origin: &'a str,
    warnings: &'a WarnOnce,
) -> impl Fn(&str) -> bool + 'a {
    let guard = RedirectGuard::new(allowed_origins, own_origin, warnings);
    move |candidate| guard.is_allowed(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    struct CountWarnings(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for CountWarnings {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn count_warnings(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(CountWarnings(count.clone()));
        tracing::subscriber::with_default(subscriber, f);
        count.load(Ordering::SeqCst)
    }

    #[test]
    fn rejected_redirect_warns_exactly_once() {
        let warnings = WarnOnce::new();
        let allowed = vec![AllowedOrigin::from("https://*.clerk.com")];
        let is_allowed = is_allowed_redirect(Some(&allowed), "https://app.test", &warnings);

        let emitted = count_warnings(|| {
            assert!(is_allowed("https://www.clerk.com"));
            assert!(!is_allowed("https://clerk.com"));
        });
        assert_eq!(emitted, 1);
    }

    #[test]
    fn repeated_rejection_is_deduplicated() {
        let warnings = WarnOnce::new();
        let allowed: Vec<AllowedOrigin> = Vec::new();
        let guard = RedirectGuard::new(Some(&allowed), "https://app.test", &warnings);

        let emitted = count_warnings(|| {
            assert!(!guard.is_allowed("https://evil.com"));
            assert!(!guard.is_allowed("https://evil.com"));
            assert!(guard.is_allowed("/relative"));
        });
        assert_eq!(emitted, 1);
    }

    #[test]
    fn check_does_not_log() {
        let warnings = WarnOnce::new();
        let allowed: Vec<AllowedOrigin> = Vec::new();
        let guard = RedirectGuard::new(Some(&allowed), "https://app.test", &warnings);
        let emitted = count_warnings(|| {
            let check = guard.check("https://evil.com");
            assert!(!check.allowed);
        });
        assert_eq!(emitted, 0);
    }

    #[test]
    fn unconfigured_guard_allows_all() {
        let warnings = WarnOnce::new();
        let is_allowed = is_allowed_redirect(None, "https://app.test", &warnings);
        assert!(is_allowed("https://anything.example"));
    }
}
