//! Shared data model for discovery output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One discovered content item: the canonical unit cached and rendered.
///
/// Every renderer shares this single definition; the sitemap projection
/// ([`SitemapNode`]) is derived from it, never stored alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub id: i32,
    pub global_id: Uuid,
    pub name: String,
    pub order: i32,
    pub tree_path: String,
    /// Normalized to lowercase at projection time.
    pub url_path: String,
    pub language_id: i32,
    pub version_status: String,
    pub content_type_id: i32,
    pub is_secured: bool,
    /// True when no visibility field is configured, else the boolean value of
    /// that field (false when the field is missing).
    pub include_in_sitemap: bool,
    pub title: String,
    pub description: String,
}

impl PageRecord {
    /// The title shown to readers: the configured title field when non-empty,
    /// else the record name.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.name
        } else {
            &self.title
        }
    }
}

/// Rendering-ready projection of a [`PageRecord`], used only for XML output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapNode {
    pub path: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
}

/// Change frequency hint per the sitemap protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    /// The lowercase token the sitemap schema expects in `<changefreq>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_falls_back_to_name() {
        let mut page = PageRecord {
            id: 1,
            global_id: Uuid::nil(),
            name: "about-us".to_string(),
            order: 0,
            tree_path: "/about-us".to_string(),
            url_path: "/about-us".to_string(),
            language_id: 1,
            version_status: "Published".to_string(),
            content_type_id: 10,
            is_secured: false,
            include_in_sitemap: true,
            title: String::new(),
            description: String::new(),
        };
        assert_eq!(page.display_title(), "about-us");

        page.title = "About Us".to_string();
        assert_eq!(page.display_title(), "About Us");

        // Whitespace-only titles are treated as empty.
        page.title = "   ".to_string();
        assert_eq!(page.display_title(), "about-us");
    }

    #[test]
    fn test_change_frequency_tokens() {
        assert_eq!(ChangeFrequency::Weekly.as_str(), "weekly");
        assert_eq!(
            serde_json::to_string(&ChangeFrequency::Weekly).unwrap(),
            "\"weekly\""
        );
    }
}
