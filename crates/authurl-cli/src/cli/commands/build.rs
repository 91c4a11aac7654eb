//! `authurl build` – compose a URL.

use anyhow::Result;
use authurl_core::url_model::{BuildOptions, BuildParams, QueryInput, QueryParams};
use authurl_core::UrlContext;
use clap::Args;

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Base URL; defaults to the configured location.
    #[arg(long)]
    pub base: Option<String>,
    #[arg(long)]
    pub pathname: Option<String>,
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub hash: Option<String>,
    /// Path joined onto the hash sub-route.
    #[arg(long)]
    pub hash_path: Option<String>,
    /// Query appended to the hash sub-route as-is.
    #[arg(long)]
    pub hash_search: Option<String>,
    /// KEY=VALUE for the hash sub-route; camelCase keys become snake_case. Repeatable.
    #[arg(long = "hash-param", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub hash_params: Vec<(String, String)>,
    /// KEY=VALUE set on the main query. Repeatable.
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,
    /// Print only the path, query and fragment.
    #[arg(long)]
    pub skip_origin: bool,
}

pub(crate) fn parse_key_val(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    Ok((key.to_string(), value.to_string()))
}

impl BuildArgs {
    fn into_params(self) -> BuildParams {
        BuildParams {
            base: self.base,
            pathname: self.pathname,
            search: self.search,
            hash: self.hash,
            hash_path: self.hash_path,
            hash_search: self.hash_search,
            hash_search_params: (!self.hash_params.is_empty())
                .then(|| QueryInput::Pairs(self.hash_params).into()),
            search_params: (!self.params.is_empty())
                .then(|| self.params.into_iter().collect::<QueryParams>()),
        }
    }
}

pub fn run_build(ctx: &UrlContext, args: BuildArgs) -> Result<()> {
    let options = BuildOptions {
        skip_origin: args.skip_origin,
        stringify: true,
    };
    let built = ctx.build_url(&args.into_params(), options)?;
    println!("{built}");
    Ok(())
}
