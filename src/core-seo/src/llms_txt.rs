//! llms.txt rendering: a Markdown digest of discoverable pages.

use crate::models::PageRecord;
use crate::text_utils::sanitize;

/// Scheme, host, and base path of the request being served, used to resolve
/// absolute page URLs in rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub scheme: String,
    pub host: String,
    pub path_base: String,
}

impl RequestContext {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>, path_base: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            path_base: path_base.into(),
        }
    }

    /// Absolute URL for a record path: `scheme://host{path_base}/{path}` with
    /// exactly one joining slash. A legacy `~` prefix on the path is trimmed.
    pub fn absolute_url(&self, path: &str) -> String {
        let base = self.path_base.trim_end_matches('/');
        let relative = path.trim_start_matches(['~', '/']);
        format!("{}://{}{}/{}", self.scheme, self.host, base, relative)
    }
}

/// Renders the llms.txt document for `channel` from an ordered page list.
///
/// One Markdown bullet per page: `- [title](url)` or `- [title](url): description`
/// when a description exists. Titles fall back to the record name, and both
/// title and description pass through the sanitization pipeline exactly once.
/// Output order is the input order.
pub fn render_llms_txt(channel: &str, pages: &[PageRecord], request: &RequestContext) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n## Pages\n\n", channel));

    for page in pages {
        let title = sanitize(page.display_title());
        let description = sanitize(&page.description);
        let url = request.absolute_url(&page.url_path);

        if description.is_empty() {
            out.push_str(&format!("- [{}]({})\n", title, url));
        } else {
            out.push_str(&format!("- [{}]({}): {}\n", title, url, description));
        }
    }

    out
}
