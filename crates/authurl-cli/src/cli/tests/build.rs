//! Tests for `build`.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_build_minimal() {
    match parse(&["authurl", "build"]) {
        CliCommand::Build(args) => {
            assert!(args.base.is_none());
            assert!(args.hash_params.is_empty());
            assert!(!args.skip_origin);
        }
        _ => panic!("expected Build"),
    }
}

#[test]
fn cli_parse_build_full() {
    match parse(&[
        "authurl",
        "build",
        "--base",
        "http://test.host/",
        "--pathname",
        "/foo",
        "--hash-path",
        "/qux",
        "--hash-search",
        "a=1",
        "--hash-param",
        "redirectUrl=/x",
        "--hash-param",
        "signUpUrl=/y",
        "--param",
        "k=v",
        "--skip-origin",
    ]) {
        CliCommand::Build(args) => {
            assert_eq!(args.base.as_deref(), Some("http://test.host/"));
            assert_eq!(args.pathname.as_deref(), Some("/foo"));
            assert_eq!(args.hash_path.as_deref(), Some("/qux"));
            assert_eq!(args.hash_search.as_deref(), Some("a=1"));
            assert_eq!(
                args.hash_params,
                vec![
                    ("redirectUrl".to_string(), "/x".to_string()),
                    ("signUpUrl".to_string(), "/y".to_string())
                ]
            );
            assert_eq!(args.params, vec![("k".to_string(), "v".to_string())]);
            assert!(args.skip_origin);
        }
        _ => panic!("expected Build"),
    }
}

#[test]
fn cli_parse_build_rejects_bad_param() {
    let result = Cli::try_parse_from(["authurl", "build", "--param", "novalue"]);
    assert!(result.is_err());
}
