//! Conversion of raw `"key: value"` strings into an HTTP header map.
//!
//! Entries are split on the first `:` only, so colons in the value survive
//! (`"Referer: http://host"`). Malformed entries are skipped with a warning and
//! never abort the remaining conversion. Names are case-insensitive and
//! `insert` overwrites, so the last occurrence of a key wins.

use http::header::{HeaderMap, HeaderName, HeaderValue};

/// Populate `header` from raw `"key: value"` strings, in input order.
pub fn convert_headers<S: AsRef<str>>(headers: &[S], header: &mut HeaderMap) {
    for raw in headers {
        let raw = raw.as_ref();
        let Some((key, value)) = raw.split_once(':') else {
            tracing::warn!(
                arg = raw,
                error = "cannot split: missing colon",
                "Could not parse header, ignoring"
            );
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        let name = match HeaderName::from_bytes(key.as_bytes()) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(arg = raw, error = %e, "Could not parse header, ignoring");
                continue;
            }
        };
        let header_value = match HeaderValue::from_str(value) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(arg = raw, error = %e, "Could not parse header, ignoring");
                continue;
            }
        };

        tracing::debug!(key, value, "Using header");
        header.insert(name, header_value);
    }
}

/// Convenience wrapper returning a fresh map; empty when no entry is valid.
pub fn header_map<S: AsRef<str>>(headers: &[S]) -> HeaderMap {
    let mut header = HeaderMap::new();
    convert_headers(headers, &mut header);
    header
}
