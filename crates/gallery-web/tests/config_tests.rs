// Host-side tests for reading the viewer configuration.
// The web crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod config {
    include!("../src/config.rs");
}

use config::*;
use gallery_core::SessionContext;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k: &str| map.get(k).cloned()
}

#[test]
fn minimal_config_uses_defaults() {
    let cfg = ViewerConfig::from_lookup(lookup(&[("apiBase", "/api/"), ("portfolioId", "3")])).unwrap();
    assert_eq!(cfg.api_base, "/api");
    assert_eq!(cfg.portfolio_id, 3);
    assert_eq!(cfg.portfolio_title, DEFAULT_PORTFOLIO_TITLE);
    assert_eq!(cfg.session, None);
    assert!(cfg.fly_to_on_select);
}

#[test]
fn full_config_reads_session_and_flags() {
    let cfg = ViewerConfig::from_lookup(lookup(&[
        ("apiBase", "https://example.org/trpc"),
        ("portfolioId", " 12 "),
        ("portfolioTitle", "Studio"),
        ("sessionId", "8"),
        ("userId", "21"),
        ("flyToOnSelect", "false"),
    ]))
    .unwrap();
    assert_eq!(cfg.portfolio_id, 12);
    assert_eq!(cfg.portfolio_title, "Studio");
    assert_eq!(
        cfg.session,
        Some(SessionContext {
            session_id: 8,
            user_id: 21
        })
    );
    assert!(!cfg.fly_to_on_select);
}

#[test]
fn missing_or_bad_required_values_fail() {
    assert!(ViewerConfig::from_lookup(lookup(&[("portfolioId", "3")])).is_err());
    assert!(ViewerConfig::from_lookup(lookup(&[("apiBase", "/api")])).is_err());
    let err = ViewerConfig::from_lookup(lookup(&[("apiBase", "/api"), ("portfolioId", "three")])).unwrap_err();
    assert!(err.to_string().contains("data-portfolio-id"));
}

#[test]
fn half_a_session_is_rejected() {
    let err = ViewerConfig::from_lookup(lookup(&[("apiBase", "/api"), ("portfolioId", "1"), ("sessionId", "4")]))
        .unwrap_err();
    assert!(err.to_string().contains("together"));
    assert!(ViewerConfig::from_lookup(lookup(&[
        ("apiBase", "/api"),
        ("portfolioId", "1"),
        ("flyToOnSelect", "maybe"),
    ]))
    .is_err());
}
