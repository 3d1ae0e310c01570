//! Environment-driven startup configuration.
//!
//! Discovery options are validated eagerly here so a misconfigured service
//! fails at startup, not on the first request. The exception is
//! `ROBOTS_CONTENT`, which the robots handler reads per request and never
//! validates.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

use core_seo::{DiscoveryOptions, DiscoveryProvider, InMemoryContentSource, MemoryTagCache};

/// Environment variable naming the robots.txt content. Read at render time.
pub const ROBOTS_CONTENT_VAR: &str = "ROBOTS_CONTENT";

fn required(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("{} must be set", name))
}

/// Builds and validates discovery options from the environment.
pub fn discovery_options_from_env() -> Result<DiscoveryOptions> {
    let mut builder = DiscoveryOptions::builder()
        .schema_name(required("DISCOVERY_SCHEMA")?)
        .default_language(required("DISCOVERY_LANGUAGE")?)
        .title_field(required("DISCOVERY_TITLE_FIELD")?)
        .description_field(required("DISCOVERY_DESCRIPTION_FIELD")?)
        .content_types(
            required("DISCOVERY_CONTENT_TYPES")?
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>(),
        );
    if let Ok(field) = std::env::var("DISCOVERY_VISIBILITY_FIELD") {
        builder = builder.visibility_field(field);
    }
    builder.build().context("invalid discovery configuration")
}

/// Wires a provider from the environment: options, channel, the JSON-backed
/// content source named by CONTENT_FILE, and a process-local tag cache.
pub fn provider_from_env() -> Result<DiscoveryProvider> {
    let options = Arc::new(discovery_options_from_env()?);
    let channel = required("CHANNEL_NAME")?;

    let content_path = required("CONTENT_FILE")?;
    let content_json = std::fs::read_to_string(&content_path)
        .with_context(|| format!("cannot read CONTENT_FILE {}", content_path))?;
    let source = Arc::new(InMemoryContentSource::from_json(&content_json)?);

    let ttl_minutes: u64 = std::env::var("CACHE_TTL_MINUTES")
        .unwrap_or_else(|_| "3".to_string())
        .parse()
        .context("CACHE_TTL_MINUTES must be an integer")?;

    let provider = DiscoveryProvider::new(
        options,
        channel,
        source,
        Arc::new(MemoryTagCache::new()),
        Duration::from_secs(ttl_minutes * 60),
    )?;
    Ok(provider)
}

/// Bind address from HOST/PORT, defaulting to 127.0.0.1:8080.
pub fn bind_addr_from_env() -> String {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    format!("{}:{}", host, port)
}
