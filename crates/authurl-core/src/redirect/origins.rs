//! Default allow-list synthesis for redirect origins.

use serde::{Deserialize, Serialize};

use super::glob::AllowedOrigin;
use crate::url_model::Location;

/// Label that marks the product's own frontend host (e.g. `clerk.example.com`).
const INTERNAL_SUBDOMAIN: &str = "clerk";

/// Deployment environment of the product instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Development,
}

impl Environment {
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Apex domain of the product: the frontend hostname with its first
/// `clerk` label removed (`clerk.example.com` -> `example.com`,
/// `foo-bar-13.clerk.accounts.dev` -> `foo-bar-13.accounts.dev`).
pub fn etld_plus_one_from_product_domain(product_domain: &str) -> String {
    let mut removed = false;
    product_domain
        .split('.')
        .filter(|label| {
            if !removed && *label == INTERNAL_SUBDOMAIN {
                removed = true;
                return false;
            }
            true
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Returns `configured` verbatim when it is a non-empty list; otherwise
/// synthesizes defaults from the current location and the product domain.
///
/// An explicitly empty list is treated the same as no list at all.
pub fn create_allowed_redirect_origins(
    configured: Option<&[AllowedOrigin]>,
    product_domain: &str,
    environment: Environment,
    location: Option<&Location>,
) -> Vec<AllowedOrigin> {
    if let Some(configured) = configured.filter(|c| !c.is_empty()) {
        return configured.to_vec();
    }
    if configured.is_some() {
        tracing::debug!("allowed redirect origins configured as empty list, using defaults");
    }

    let apex = etld_plus_one_from_product_domain(product_domain);
    let mut origins = Vec::with_capacity(4);
    if let Some(location) = location {
        origins.push(AllowedOrigin::pattern(location.origin()));
    }
    origins.push(AllowedOrigin::pattern(format!("https://{apex}")));
    origins.push(AllowedOrigin::pattern(format!("https://*.{apex}")));

    // Development frontend hosts sit beside the apex, not under it.
    if !environment.is_production() && apex != product_domain {
        origins.push(AllowedOrigin::pattern(format!("https://{product_domain}")));
    }
    origins
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(origins: &[AllowedOrigin]) -> Vec<String> {
        origins.iter().map(|o| o.to_string()).collect()
    }

    #[test]
    fn apex_strips_internal_label() {
        assert_eq!(etld_plus_one_from_product_domain("clerk.example.com"), "example.com");
        assert_eq!(
            etld_plus_one_from_product_domain("foo-bar-13.clerk.accounts.dev"),
            "foo-bar-13.accounts.dev"
        );
        assert_eq!(etld_plus_one_from_product_domain("myclerk.com"), "myclerk.com");
        assert_eq!(
            etld_plus_one_from_product_domain("clerk.clerk.example.com"),
            "clerk.example.com"
        );
    }

    #[test]
    fn configured_list_wins() {
        let configured = vec![AllowedOrigin::from("https://only.this")];
        let origins = create_allowed_redirect_origins(
            Some(&configured),
            "clerk.example.com",
            Environment::Production,
            None,
        );
        assert_eq!(origins, configured);
    }

    #[test]
    fn production_defaults() {
        let location = Location::parse("https://app.example.com/sign-in").unwrap();
        let origins = create_allowed_redirect_origins(
            None,
            "clerk.example.com",
            Environment::Production,
            Some(&location),
        );
        assert_eq!(
            patterns(&origins),
            vec![
                "https://app.example.com",
                "https://example.com",
                "https://*.example.com"
            ]
        );
    }

    #[test]
    fn empty_list_same_as_unconfigured() {
        let empty: Vec<AllowedOrigin> = Vec::new();
        let a = create_allowed_redirect_origins(
            Some(&empty),
            "clerk.example.com",
            Environment::Production,
            None,
        );
        let b = create_allowed_redirect_origins(
            None,
            "clerk.example.com",
            Environment::Production,
            None,
        );
        assert_eq!(a, b);
        assert_eq!(patterns(&a), vec!["https://example.com", "https://*.example.com"]);
    }

    #[test]
    fn development_adds_frontend_host() {
        let origins = create_allowed_redirect_origins(
            None,
            "foo-bar-13.clerk.accounts.dev",
            Environment::Development,
            None,
        );
        assert_eq!(
            patterns(&origins),
            vec![
                "https://foo-bar-13.accounts.dev",
                "https://*.foo-bar-13.accounts.dev",
                "https://foo-bar-13.clerk.accounts.dev"
            ]
        );
    }

    #[test]
    fn environment_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            env: Environment,
        }
        let w: Wrapper = toml::from_str("env = \"development\"").unwrap();
        assert_eq!(w.env, Environment::Development);
        assert!(Environment::default().is_production());
    }
}
