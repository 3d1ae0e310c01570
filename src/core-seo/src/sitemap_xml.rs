//! Sitemap XML assembly.
//!
//! Emits the standard sitemap schema only: `<urlset>` of `<url>` entries with
//! `<loc>`, `<lastmod>`, and `<changefreq>`. No sitemap index, no image or
//! video extensions.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::errors::{DiscoveryError, Result};
use crate::llms_txt::RequestContext;
use crate::models::SitemapNode;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Serializes sitemap nodes to XML, resolving each node path to an absolute
/// URL against the current request. Any write error aborts the whole render;
/// no partial document is produced.
pub fn render_sitemap_xml(nodes: &[SitemapNode], request: &RequestContext) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    emit(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    emit(&mut writer, Event::Start(urlset))?;

    for node in nodes {
        emit(&mut writer, Event::Start(BytesStart::new("url")))?;
        emit_text_element(&mut writer, "loc", &request.absolute_url(&node.path))?;
        emit_text_element(
            &mut writer,
            "lastmod",
            &node.last_modified.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
        )?;
        emit_text_element(&mut writer, "changefreq", node.change_frequency.as_str())?;
        emit(&mut writer, Event::End(BytesEnd::new("url")))?;
    }

    emit(&mut writer, Event::End(BytesEnd::new("urlset")))?;

    String::from_utf8(writer.into_inner()).map_err(|e| DiscoveryError::Xml(e.to_string()))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| DiscoveryError::Xml(e.to_string()))
}

fn emit_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new(name)))?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    emit(writer, Event::End(BytesEnd::new(name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChangeFrequency;
    use chrono::{TimeZone, Utc};

    fn node(path: &str) -> SitemapNode {
        SitemapNode {
            path: path.to_string(),
            last_modified: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
            change_frequency: ChangeFrequency::Weekly,
        }
    }

    fn request() -> RequestContext {
        RequestContext::new("https", "example.com", "")
    }

    #[test]
    fn test_render_two_urls() {
        let xml = render_sitemap_xml(&[node("/home"), node("/about")], &request()).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.contains("<loc>https://example.com/home</loc>"));
        assert!(xml.contains("<loc>https://example.com/about</loc>"));
        assert!(xml.contains("<lastmod>2026-08-01T12:00:00+00:00</lastmod>"));
        assert_eq!(xml.matches("<changefreq>weekly</changefreq>").count(), 2);
        assert!(xml.ends_with("</urlset>"));
    }

    #[test]
    fn test_render_empty_node_list() {
        let xml = render_sitemap_xml(&[], &request()).unwrap();
        assert!(xml.contains("urlset"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let xml = render_sitemap_xml(&[node("/search?q=a&b=<c>")], &request()).unwrap();
        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=&lt;c&gt;</loc>"));
    }
}
