//! Hash sub-routes: reading them and folding them into the main URL.

use url::Url;

use super::normalize;
use super::query::QueryParams;
use crate::error::{Result, UrlError};

/// Path and query carried by a `#/path?query` fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRoute {
    pub pathname: String,
    pub search: String,
}

impl ParsedRoute {
    /// Resolves `fragment` against `url`, keeping only the path and query so
    /// a fragment naming another authority cannot leak into the result.
    pub fn parse(fragment: &str, url: &Url) -> Result<Self> {
        let resolved = url.join(fragment).map_err(|e| UrlError::parse(fragment, e))?;
        Ok(Self {
            pathname: resolved.path().to_string(),
            search: resolved.query().unwrap_or("").to_string(),
        })
    }
}

/// Moves a `#/path?query` sub-route into the main path and query.
///
/// Paths are joined segment-wise with empty segments dropped; fragment query
/// values win over main-query values. The result has no fragment. URLs whose
/// fragment is absent or does not start with `/` come back unchanged, so the
/// operation is idempotent.
pub fn merge_fragment_into_url(input: impl AsRef<str>) -> Result<Url> {
    let url = normalize::parse(input.as_ref(), None)?;
    let Some(fragment) = url.fragment().filter(|f| f.starts_with('/')) else {
        return Ok(url);
    };
    if url.cannot_be_a_base() {
        return Ok(url);
    }
    let route = ParsedRoute::parse(fragment, &url)?;

    let pathname = url
        .path()
        .split('/')
        .chain(route.pathname.split('/'))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    let mut query = QueryParams::from_url(&url);
    for (key, value) in QueryParams::parse(&route.search).iter() {
        query.set(key, value);
    }

    let mut merged = url.clone();
    merged.set_fragment(None);
    merged.set_path(&format!("/{pathname}"));
    query.apply_to(&mut merged);
    tracing::trace!(from = %url, to = %merged, "merged hash sub-route");
    Ok(merged)
}

/// Reads `name` from the query of a hash sub-route (`#/path?name=value`).
pub fn get_search_parameter_from_hash(hash: &str, name: &str) -> Option<String> {
    let hash = hash.strip_prefix('#').unwrap_or(hash);
    let nested = normalize::resolve_synthetic(hash)?;
    QueryParams::from_url(&nested).get(name).map(str::to_string)
}
