//! # Site Discovery Library
//!
//! Queries structured content records, filters them by configurable visibility
//! fields, and renders three machine-readable discovery artifacts: an XML
//! sitemap, a plain-text llms.txt page digest, and a robots.txt passthrough.
//!
//! The pipeline is cache-coherent: query results are held in a get-or-compute
//! cache whose entries carry invalidation tags derived from the configured
//! content types, so a content mutation scoped to one type evicts exactly the
//! entries that depend on it.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use core_seo::{
//!     DiscoveryOptions, DiscoveryProvider, InMemoryContentSource, MemoryTagCache, RequestContext,
//! };
//!
//! # async fn example() -> core_seo::Result<()> {
//! let options = Arc::new(
//!     DiscoveryOptions::builder()
//!         .schema_name("SeoFields")
//!         .default_language("en")
//!         .title_field("SeoTitle")
//!         .description_field("SeoDescription")
//!         .content_type("Article")
//!         .build()?,
//! );
//!
//! let source = Arc::new(InMemoryContentSource::new(Vec::new()));
//! let cache = Arc::new(MemoryTagCache::new());
//! let provider =
//!     DiscoveryProvider::new(options, "main", source, cache, core_seo::provider::DEFAULT_TTL)?;
//!
//! let request = RequestContext::new("https", "example.com", "");
//! let xml = provider.render_sitemap(&request).await?;
//! println!("{}", xml);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod cache_keys;
pub mod content;
pub mod errors;
pub mod llms_txt;
pub mod models;
pub mod options;
pub mod provider;
pub mod robots;
pub mod sitemap_xml;
pub mod text_utils;

// Public API re-exports
pub use cache::{CacheSettings, MemoryTagCache, TagCache};
pub use content::{ContentRecord, ContentSource, FieldValue, InMemoryContentSource, StoredRecord, SystemFields};
pub use errors::{DiscoveryError, Result};
pub use llms_txt::RequestContext;
pub use models::{ChangeFrequency, PageRecord, SitemapNode};
pub use options::{DiscoveryOptions, DiscoveryOptionsBuilder};
pub use provider::DiscoveryProvider;
