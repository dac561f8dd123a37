//! HTTP transport layer shared by all service clients.

mod http;

pub(crate) use http::HttpTransport;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Bytes that must not appear raw inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Percent-encode a caller-supplied id so it stays within its path segment.
pub(crate) fn path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}
