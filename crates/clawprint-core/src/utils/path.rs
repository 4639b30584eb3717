//! URL path utilities.

use std::borrow::Cow;

/// Percent-encode a single path segment such as an agent handle.
///
/// Every byte outside the unreserved set (`A-Z a-z 0-9 - . _ ~`) is escaped,
/// including `/`, `@` and spaces, so the result can never introduce a new
/// path segment.
pub fn encode_path_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::encode(segment)
}

/// Join a path template prefix with an encoded segment
pub fn join_segment(prefix: &str, segment: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), encode_path_segment(segment))
}
