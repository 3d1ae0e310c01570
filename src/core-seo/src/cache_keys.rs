//! Cache namespaces and invalidation-tag derivation.

use std::collections::BTreeSet;

use crate::options::DiscoveryOptions;

/// Namespace for the sitemap-only projection (cheap payload).
pub const NODE_LIST_KEY: &str = "discovery:node-list";

/// Namespace for the detailed page list (title/description included).
pub const DETAILED_LIST_KEY: &str = "discovery:detailed-list";

/// Derives the invalidation tag set for cached discovery results: one tag per
/// configured content type, scoped to the active channel.
///
/// Content mutations in the store publish invalidation signals scoped to
/// content type; tagging entries this way lets the cache evict precisely
/// without the provider polling for changes. Pure function, no I/O.
///
/// # Examples
///
/// ```
/// # use core_seo::{DiscoveryOptions, cache_keys::derive_tags};
/// let options = DiscoveryOptions::builder()
///     .schema_name("SeoFields")
///     .default_language("en")
///     .description_field("SeoDescription")
///     .title_field("SeoTitle")
///     .content_types(["Article", "Page"])
///     .build()
///     .unwrap();
/// let tags = derive_tags(&options, "main");
/// assert!(tags.contains("channel:main|contentType:Article"));
/// assert!(tags.contains("channel:main|contentType:Page"));
/// ```
pub fn derive_tags(options: &DiscoveryOptions, channel: &str) -> BTreeSet<String> {
    options
        .content_type_names
        .iter()
        .map(|t| format!("channel:{}|contentType:{}", channel, t))
        .collect()
}
