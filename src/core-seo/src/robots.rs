//! robots.txt passthrough.
//!
//! The robots content is a single configured string the core only normalizes;
//! it is never parsed, validated, or cached.

/// Normalizes configured robots.txt content: splits on any CR/LF sequence,
/// drops blank lines, strips leading whitespace from each retained line, and
/// rejoins with `\n`. An absent value renders as the empty string.
///
/// # Examples
///
/// ```
/// # use core_seo::robots::normalize_robots;
/// assert_eq!(
///     normalize_robots("  User-agent: *\n  Disallow:\n\n"),
///     "User-agent: *\nDisallow:"
/// );
/// ```
pub fn normalize_robots(content: &str) -> String {
    content
        .split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim_start())
        .collect::<Vec<_>>()
        .join("\n")
}
