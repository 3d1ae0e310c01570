//! Discovery configuration options.

use std::collections::BTreeSet;

use crate::errors::{DiscoveryError, Result};

/// Names which schema, fields, and content types participate in discovery.
///
/// Built once at startup through [`DiscoveryOptionsBuilder`] and passed by
/// reference into the provider; there is no ambient or static configuration
/// access anywhere in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// The reusable schema name used to scope the content query.
    pub schema_name: String,
    /// The content language queried for discovery output.
    pub default_language: String,
    /// Field carrying the sitemap visibility flag. When unset (or blank),
    /// every queried record is discoverable.
    pub visibility_field: Option<String>,
    /// Field carrying the page description.
    pub description_field: String,
    /// Field carrying the page title.
    pub title_field: String,
    /// Content types whose mutations invalidate cached discovery results.
    pub content_type_names: BTreeSet<String>,
}

impl DiscoveryOptions {
    /// Creates a new builder for DiscoveryOptions.
    pub fn builder() -> DiscoveryOptionsBuilder {
        DiscoveryOptionsBuilder::default()
    }

    /// The visibility field name, treating a blank configured value as unset.
    pub fn visibility_field_name(&self) -> Option<&str> {
        self.visibility_field.as_deref().filter(|f| !f.trim().is_empty())
    }

    /// Checks every required option, reporting the first unmet requirement.
    ///
    /// Runs once at startup when the builder constructs the value, and again
    /// whenever a provider is constructed, guarding against options assembled
    /// outside the builder path.
    pub fn validate(&self) -> Result<()> {
        if self.schema_name.trim().is_empty() {
            return Err(DiscoveryError::InvalidOptions(
                "schema_name must be configured".to_string(),
            ));
        }
        if self.default_language.trim().is_empty() {
            return Err(DiscoveryError::InvalidOptions(
                "default_language must be configured".to_string(),
            ));
        }
        if self.description_field.trim().is_empty() {
            return Err(DiscoveryError::InvalidOptions(
                "description_field must be configured".to_string(),
            ));
        }
        if self.title_field.trim().is_empty() {
            return Err(DiscoveryError::InvalidOptions(
                "title_field must be configured".to_string(),
            ));
        }
        if self.content_type_names.is_empty() {
            return Err(DiscoveryError::InvalidOptions(
                "content_type_names must contain at least one content type".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for DiscoveryOptions. `build()` validates eagerly so a
/// misconfigured service fails at startup, not on the first request.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOptionsBuilder {
    schema_name: String,
    default_language: String,
    visibility_field: Option<String>,
    description_field: String,
    title_field: String,
    content_type_names: BTreeSet<String>,
}

impl DiscoveryOptionsBuilder {
    /// Sets the reusable schema name used to scope the content query.
    pub fn schema_name(mut self, name: impl Into<String>) -> Self {
        self.schema_name = name.into();
        self
    }

    /// Sets the content language queried for discovery output.
    pub fn default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    /// Sets the optional visibility-flag field name.
    pub fn visibility_field(mut self, field: impl Into<String>) -> Self {
        self.visibility_field = Some(field.into());
        self
    }

    /// Sets the description field name.
    pub fn description_field(mut self, field: impl Into<String>) -> Self {
        self.description_field = field.into();
        self
    }

    /// Sets the title field name.
    pub fn title_field(mut self, field: impl Into<String>) -> Self {
        self.title_field = field.into();
        self
    }

    /// Adds one content type to the invalidation set.
    pub fn content_type(mut self, name: impl Into<String>) -> Self {
        self.content_type_names.insert(name.into());
        self
    }

    /// Adds multiple content types to the invalidation set.
    pub fn content_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content_type_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Builds and validates the DiscoveryOptions.
    pub fn build(self) -> Result<DiscoveryOptions> {
        let options = DiscoveryOptions {
            schema_name: self.schema_name,
            default_language: self.default_language,
            visibility_field: self.visibility_field,
            description_field: self.description_field,
            title_field: self.title_field,
            content_type_names: self.content_type_names,
        };
        options.validate()?;
        Ok(options)
    }
}
