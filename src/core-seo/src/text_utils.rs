//! Text cleanup utilities applied to user-authored fields before they are
//! embedded in generated Markdown.
//!
//! The sanitization order is fixed: strip markup, escape Markdown
//! metacharacters, then patch the mojibake apostrophe. Stripping runs first so
//! escaping never targets markup characters that are about to be deleted.

use regex::Regex;
use std::sync::LazyLock;

static MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new("<.*?>").expect("valid markup pattern"));
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static MARKDOWN_META: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\\`*_{}\[\]()#+\-.!])").expect("valid metacharacter pattern"));

/// The three-character sequence a Windows-1252/UTF-8 mismatch leaves where an
/// apostrophe (U+2019) was intended.
const MISENCODED_APOSTROPHE: &str = "\u{00e2}\u{20ac}\u{2122}";

/// Removes markup tags (`<` ... `>`, non-greedy) and collapses whitespace runs
/// to a single space, trimming the ends.
///
/// # Examples
///
/// ```
/// # use core_seo::text_utils::clean_markup;
/// assert_eq!(clean_markup("<p>Hello   <b>world</b></p>"), "Hello world");
/// assert_eq!(clean_markup("   "), "");
/// ```
pub fn clean_markup(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }
    let no_markup = MARKUP.replace_all(input, "");
    let collapsed = WHITESPACE_RUN.replace_all(&no_markup, " ");
    collapsed.trim().to_string()
}

/// Prefixes each Markdown metacharacter with a backslash.
///
/// # Examples
///
/// ```
/// # use core_seo::text_utils::escape_markdown;
/// assert_eq!(escape_markdown("a*b_c"), "a\\*b\\_c");
/// ```
pub fn escape_markdown(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    MARKDOWN_META.replace_all(text, r"\$1").to_string()
}

/// Replaces the mis-encoded apostrophe sequence left by an upstream encoding
/// mismatch. A narrow compatibility patch, not general encoding normalization.
pub fn fix_apostrophe_artifact(text: &str) -> String {
    text.replace(MISENCODED_APOSTROPHE, "'")
}

/// Full sanitization pipeline: strip markup, escape Markdown metacharacters,
/// patch the apostrophe artifact, in that order.
///
/// Sanitize each raw field exactly once. A second pass doubles the backslashes
/// the first pass introduced, since `\` is itself an escaped metacharacter.
pub fn sanitize(text: &str) -> String {
    fix_apostrophe_artifact(&escape_markdown(&clean_markup(text)))
}

/// Returns `input` unchanged when within `max_length` characters, else the
/// first `max_length` characters followed by a single ellipsis.
/// Empty or whitespace-only input yields an empty string.
///
/// # Examples
///
/// ```
/// # use core_seo::text_utils::truncate;
/// assert_eq!(truncate("hello world", 5), "hello…");
/// assert_eq!(truncate("hi", 5), "hi");
/// ```
pub fn truncate(input: &str, max_length: usize) -> String {
    if input.trim().is_empty() {
        return String::new();
    }
    if input.chars().count() <= max_length {
        return input.to_string();
    }
    let mut out: String = input.chars().take(max_length).collect();
    out.push('…');
    out
}

/// Replaces every character that is not an ASCII letter or digit with one
/// hyphen. One hyphen per character; runs are not collapsed.
///
/// # Examples
///
/// ```
/// # use core_seo::text_utils::slug;
/// assert_eq!(slug("Hello, World!"), "Hello--World-");
/// ```
pub fn slug(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}
