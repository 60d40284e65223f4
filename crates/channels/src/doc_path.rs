// ABOUTME: Derives the documentation sub-path appended to version menu links.
// ABOUTME: Keeps readers on the same page when switching to another release channel.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sub-path used when the current page is not inside the documentation tree.
pub const DEFAULT_SUB_PATH: &str = "/documentation/";

static DOCUMENTATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.*/documentation(/.*)$").unwrap());

/// Returns `/documentation/<rest>` for paths under a `/documentation/` segment
/// (the last such segment wins), otherwise [`DEFAULT_SUB_PATH`].
pub fn documentation_sub_path(path: &str) -> String {
    match DOCUMENTATION_RE.captures(path).and_then(|c| c.get(1)) {
        Some(rest) if !rest.as_str().is_empty() => format!("/documentation{}", rest.as_str()),
        _ => DEFAULT_SUB_PATH.to_string(),
    }
}
