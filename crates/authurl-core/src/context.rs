//! Per-client state: the current location, the dev-portal memo cache and the
//! warn-once registry.

use crate::config::AuthUrlConfig;
use crate::dev_portal::DevPortalCache;
use crate::error::Result;
use crate::redirect::{
    create_allowed_redirect_origins, AllowedOrigin, Environment, RedirectGuard,
};
use crate::url_model::{self, BuildOptions, BuildParams, BuiltUrl, Location};
use crate::warn_once::WarnOnce;

/// Owns everything the URL helpers would otherwise read from globals.
///
/// Two contexts never share cache entries or warning history.
#[derive(Debug, Default)]
pub struct UrlContext {
    location: Option<Location>,
    dev_portals: DevPortalCache,
    warnings: WarnOnce,
}

impl UrlContext {
    pub fn new(location: Option<Location>) -> Self {
        Self {
            location,
            ..Default::default()
        }
    }

    /// Context whose location comes from `cfg.location`, if set.
    pub fn from_config(cfg: &AuthUrlConfig) -> Result<Self> {
        let location = cfg.location.as_deref().map(Location::parse).transpose()?;
        Ok(Self::new(location))
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn warnings(&self) -> &WarnOnce {
        &self.warnings
    }

    pub fn dev_portal_cache(&self) -> &DevPortalCache {
        &self.dev_portals
    }

    /// [`url_model::build_url`] with this context's location as the default base.
    pub fn build_url(&self, params: &BuildParams, options: BuildOptions) -> Result<BuiltUrl> {
        url_model::build_url(params, options, self.location())
    }

    /// Redirect guard that reports rejections through this context.
    pub fn redirect_guard<'a>(
        &'a self,
        allowed_origins: Option<&'a [AllowedOrigin]>,
        own_origin: &'a str,
    ) -> RedirectGuard<'a> {
        RedirectGuard::new(allowed_origins, own_origin, &self.warnings)
    }

    pub fn create_allowed_redirect_origins(
        &self,
        configured: Option<&[AllowedOrigin]>,
        product_domain: &str,
        environment: Environment,
    ) -> Vec<AllowedOrigin> {
        create_allowed_redirect_origins(configured, product_domain, environment, self.location())
    }

    /// Classifies `hostname`, or the current location's hostname when `None`.
    pub fn is_dev_account_portal_origin(&self, hostname: Option<&str>) -> bool {
        let hostname = hostname
            .or_else(|| self.location().map(Location::hostname))
            .unwrap_or("");
        self.dev_portals.is_dev_account_portal_origin(hostname)
    }

    /// Forgets memoized hostnames and the warning history, e.g. after the
    /// hosting page navigates to another document.
    pub fn reset(&self) {
        self.dev_portals.clear();
        self.warnings.reset();
    }

    pub fn proxy_url_to_absolute_url(&self, proxy_url: &str) -> String {
        url_model::proxy_url_to_absolute_url(proxy_url, self.location())
    }
}
