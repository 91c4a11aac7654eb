//! Composes navigation URLs from a base plus path/search/hash and an optional
//! hash sub-route.

use std::fmt;

use url::Url;

use super::normalize::{self, Location, PLACEHOLDER_BASE, SYNTHETIC_BASE};
use super::path::join_paths;
use super::query::{camel_to_snake, HashSearchParams, QueryParams};
use crate::error::{Result, UrlError};

/// Inputs for [`build_url`]. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct BuildParams {
    /// Resolved against the current location (or a placeholder base).
    pub base: Option<String>,
    pub pathname: Option<String>,
    pub search: Option<String>,
    pub hash: Option<String>,
    /// Joined onto the path already living in the fragment.
    pub hash_path: Option<String>,
    /// Appended literally to the fragment's query.
    pub hash_search: Option<String>,
    /// Merged into the fragment's query with camelCase keys snake_cased.
    pub hash_search_params: Option<HashSearchParams>,
    /// Set (not appended) on the main query; empty values are skipped.
    pub search_params: Option<QueryParams>,
}

impl BuildParams {
    fn has_hash_route(&self) -> bool {
        self.hash_path.as_deref().is_some_and(|s| !s.is_empty())
            || self.hash_search.as_deref().is_some_and(|s| !s.is_empty())
            || self.hash_search_params.is_some()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Drop `scheme://authority` from the string form. Ignored unless `stringify`.
    pub skip_origin: bool,
    pub stringify: bool,
}

/// Result of [`build_url`]: a structured URL or its serialized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuiltUrl {
    Url(Url),
    Href(String),
}

impl BuiltUrl {
    pub fn into_string(self) -> String {
        match self {
            BuiltUrl::Url(url) => url.into(),
            BuiltUrl::Href(href) => href,
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            BuiltUrl::Url(url) => Some(url),
            BuiltUrl::Href(_) => None,
        }
    }
}

impl fmt::Display for BuiltUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuiltUrl::Url(url) => write!(f, "{url}"),
            BuiltUrl::Href(href) => f.write_str(href),
        }
    }
}

/// Builds a URL from `params`.
///
/// `location` stands in for the current document; without one the
/// placeholder base is used. With no fields set the result is the base itself.
pub fn build_url(
    params: &BuildParams,
    options: BuildOptions,
    location: Option<&Location>,
) -> Result<BuiltUrl> {
    let fallback = match location {
        Some(location) => location.url().clone(),
        None => normalize::parse(PLACEHOLDER_BASE, None)?,
    };
    let mut url = match params.base.as_deref().filter(|b| !b.is_empty()) {
        Some(base) => fallback.join(base).map_err(|e| UrlError::parse(base, e))?,
        None => fallback,
    };

    if let Some(pathname) = &params.pathname {
        if url.cannot_be_a_base() {
            return Err(UrlError::CannotBeABase(url.into()));
        }
        url.set_path(pathname);
    }
    if let Some(search) = &params.search {
        let search = search.strip_prefix('?').unwrap_or(search);
        url.set_query(Some(search).filter(|s| !s.is_empty()));
    }
    if let Some(hash) = &params.hash {
        let hash = hash.strip_prefix('#').unwrap_or(hash);
        url.set_fragment(Some(hash).filter(|s| !s.is_empty()));
    }
    if let Some(search_params) = params.search_params.as_ref().filter(|p| !p.is_empty()) {
        let mut query = QueryParams::from_url(&url);
        for (key, value) in search_params.iter().filter(|(_, v)| !v.is_empty()) {
            query.set(key, value);
        }
        query.apply_to(&mut url);
    }

    if params.has_hash_route() {
        if url.cannot_be_a_base() {
            return Err(UrlError::CannotBeABase(url.into()));
        }
        let route = hash_route(url.fragment().unwrap_or(""), params)?;
        if route != "/" {
            url.set_fragment(Some(&route));
        }
    }

    if !options.stringify {
        return Ok(BuiltUrl::Url(url));
    }
    let href = if options.skip_origin {
        strip_origin(&url)
    } else {
        url.into()
    };
    Ok(BuiltUrl::Href(href))
}

/// Folds `hash_path`, `hash_search` and `hash_search_params` into the route
/// currently held by `fragment`, returning `<path>[?<query>]`. A fragment that
/// does not resolve as a sub-route is treated as opaque and the route is
/// rebuilt from the hash fields alone.
fn hash_route(fragment: &str, params: &BuildParams) -> Result<String> {
    let mut nested = match normalize::parse(fragment, Some(SYNTHETIC_BASE)) {
        Ok(nested) => nested,
        Err(error) => {
            tracing::debug!(%error, fragment, "hash is not a sub-route, replacing it");
            normalize::parse("/", Some(SYNTHETIC_BASE))?
        }
    };

    let joined = join_paths(nested.path(), params.hash_path.as_deref().unwrap_or(""));
    nested.set_path(&joined);

    let mut query = QueryParams::from_url(&nested);
    if let Some(hash_search) = &params.hash_search {
        for (key, value) in QueryParams::parse(hash_search).iter() {
            query.append(key, value);
        }
    }
    if let Some(sources) = &params.hash_search_params {
        for input in sources.inputs() {
            for (key, value) in input.iter() {
                query.set(&camel_to_snake(key), value);
            }
        }
    }

    let mut route = nested.path().to_string();
    if !query.is_empty() {
        route.push('?');
        route.push_str(&query.serialize());
    }
    Ok(route)
}

/// Serialized `url` without its `scheme://authority` prefix. URLs with an
/// opaque origin are returned whole.
pub fn strip_origin(url: &Url) -> String {
    let origin = url.origin().ascii_serialization();
    url.as_str()
        .strip_prefix(origin.as_str())
        .unwrap_or(url.as_str())
        .to_string()
}
