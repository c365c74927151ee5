//! Percent-encoding for values interpolated into URL paths.
//!
//! Index names come from the service and resource-group names come from the
//! user; both are encoded before they become path segments so that a `/`,
//! `?` or `#` can never change which resource a request addresses.
//!
//! ```
//! use azsearch_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("hotels"), "hotels");
//! assert_eq!(encode_path_segment("rg/other"), "rg%2Fother");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments (RFC 3986 §3.3 plus
/// the separators and delimiters that would change request routing).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
