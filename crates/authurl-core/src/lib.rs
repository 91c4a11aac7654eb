pub mod config;
pub mod logging;

pub mod context;
pub mod dev_portal;
pub mod error;
pub mod redirect;
pub mod url_model;
pub mod warn_once;

pub use context::UrlContext;
pub use error::{Result, UrlError};
