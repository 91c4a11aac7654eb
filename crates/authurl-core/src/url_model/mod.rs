//! URL modeling: parsing, composition and sanitizing.
//!
//! Everything here is a pure function of its inputs. Operations that must
//! produce a URL from caller input return [`crate::error::Result`]; predicates
//! answer `false`/`None` for malformed input instead of failing.

mod build;
mod fragment;
mod normalize;
mod path;
mod proxy;
mod query;
mod sanitize;

pub use build::{build_url, strip_origin, BuildOptions, BuildParams, BuiltUrl};
pub use fragment::{get_search_parameter_from_hash, merge_fragment_into_url, ParsedRoute};
pub use normalize::{
    has_synthetic_origin, is_relative, parse, resolve_synthetic, Location, PLACEHOLDER_BASE,
    SYNTHETIC_BASE,
};
pub use path::{join_paths, trim_leading_slash, trim_trailing_slash};
pub use proxy::{
    is_http_or_https, is_proxy_url_relative, is_valid_proxy_url, proxy_url_to_absolute_url,
    relative_to_absolute_url,
};
pub use query::{camel_to_snake, HashSearchParams, QueryInput, QueryParams};
pub use sanitize::{
    has_banned_href_protocol, has_banned_protocol, is_data_uri, is_valid_url, sanitize_href,
    ProtocolPolicy,
};
