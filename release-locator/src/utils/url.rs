use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except unreserved characters and the `/` separator.
const KEY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Builds the public download URL for an object key.
///
/// `base` must end with `/`. Keys following the release naming convention
/// come out unchanged; anything unsafe in a URL path is percent-encoded.
pub fn download_url(base: &str, key: &str) -> String {
    format!("{base}{}", utf8_percent_encode(key, KEY_ENCODE_SET))
}
