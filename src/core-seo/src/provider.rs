//! Discovery provider: query, filter, cache, render orchestration.

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheSettings, TagCache};
use crate::cache_keys::{DETAILED_LIST_KEY, NODE_LIST_KEY, derive_tags};
use crate::content::{ContentRecord, ContentSource};
use crate::errors::Result;
use crate::llms_txt::{RequestContext, render_llms_txt};
use crate::models::{ChangeFrequency, PageRecord, SitemapNode};
use crate::options::DiscoveryOptions;
use crate::sitemap_xml::render_sitemap_xml;

/// Default cache lifetime for discovery queries.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3 * 60);

/// Orchestrates the discovery pipeline for one content channel.
///
/// Every public operation is a stateless read-through-cache call: on a miss
/// the content query runs, records are projected and filtered, and the result
/// is stored under a dependency-tagged key. The provider holds no locks and no
/// background tasks.
pub struct DiscoveryProvider {
    options: Arc<DiscoveryOptions>,
    channel: String,
    source: Arc<dyn ContentSource>,
    cache: Arc<dyn TagCache>,
    ttl: Duration,
}

impl DiscoveryProvider {
    /// Creates a provider for `channel`, re-validating `options` as a guard
    /// against values assembled outside the builder path.
    pub fn new(
        options: Arc<DiscoveryOptions>,
        channel: impl Into<String>,
        source: Arc<dyn ContentSource>,
        cache: Arc<dyn TagCache>,
        ttl: Duration,
    ) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            channel: channel.into(),
            source,
            cache,
            ttl,
        })
    }

    /// The content channel this provider serves.
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Sitemap-only projection of every discoverable page, cached under the
    /// node-list namespace. No explicit sort is applied: output order is the
    /// content query's natural order, stable only when the query itself is.
    pub async fn sitemap_nodes(&self) -> Result<Vec<SitemapNode>> {
        self.cached(NODE_LIST_KEY, async {
            // lastmod is the generation time, not a true content modification
            // timestamp; the store does not expose one here.
            let now = Utc::now();
            let nodes = self
                .discoverable_pages()
                .await?
                .into_iter()
                .map(|page| SitemapNode {
                    path: page.url_path,
                    last_modified: now,
                    change_frequency: ChangeFrequency::Weekly,
                })
                .collect();
            Ok(nodes)
        })
        .await
    }

    /// Full page records with title and description retained, cached under
    /// the detailed-list namespace. Same query and filter as
    /// [`sitemap_nodes`](Self::sitemap_nodes); independent invalidation.
    pub async fn detailed_pages(&self) -> Result<Vec<PageRecord>> {
        self.cached(DETAILED_LIST_KEY, self.discoverable_pages()).await
    }

    /// Serializes the node list to sitemap XML. Errors from the query or
    /// cache layer propagate whole; no partial document is emitted.
    pub async fn render_sitemap(&self, request: &RequestContext) -> Result<String> {
        let nodes = self.sitemap_nodes().await?;
        render_sitemap_xml(&nodes, request)
    }

    /// Renders the llms.txt Markdown digest for the active channel, in
    /// [`detailed_pages`](Self::detailed_pages) order.
    pub async fn render_llms_txt(&self, request: &RequestContext) -> Result<String> {
        let pages = self.detailed_pages().await?;
        Ok(render_llms_txt(&self.channel, &pages, request))
    }

    /// Queries, projects, and drops records excluded from discovery.
    async fn discoverable_pages(&self) -> Result<Vec<PageRecord>> {
        let records = self
            .source
            .query(&self.options.schema_name, &self.channel, &self.options.default_language)
            .await?;
        Ok(records
            .iter()
            .map(|record| self.project(record))
            .filter(|page| page.include_in_sitemap)
            .collect())
    }

    /// Projects one content record to the canonical [`PageRecord`].
    fn project(&self, record: &ContentRecord) -> PageRecord {
        let include_in_sitemap = match self.options.visibility_field_name() {
            Some(field) => record.try_get_bool(field).unwrap_or(false),
            None => true,
        };
        let title = record.try_get_str(&self.options.title_field).unwrap_or_default();
        let description = record.try_get_str(&self.options.description_field).unwrap_or_default();

        let system = &record.system;
        PageRecord {
            id: system.id,
            global_id: system.global_id,
            name: system.name.clone(),
            order: system.order,
            tree_path: system.tree_path.clone(),
            url_path: system.url_path.to_lowercase(),
            language_id: system.language_id,
            version_status: system.version_status.clone(),
            content_type_id: system.content_type_id,
            is_secured: system.is_secured,
            include_in_sitemap,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// Read-through cache wrapper: payloads are serialized for the cache
    /// layer, keyed by operation namespace, and tagged with the channel's
    /// content-type dependencies.
    async fn cached<'a, T>(
        &'a self,
        key: &str,
        compute: impl Future<Output = Result<Vec<T>>> + Send + 'a,
    ) -> Result<Vec<T>>
    where
        T: Serialize + DeserializeOwned,
    {
        let settings = CacheSettings {
            key: key.to_string(),
            ttl: self.ttl,
            tags: derive_tags(&self.options, &self.channel),
        };
        let value = self
            .cache
            .load_or_compute(
                settings,
                Box::pin(async move {
                    let items = compute.await?;
                    Ok(serde_json::to_value(items)?)
                }),
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
