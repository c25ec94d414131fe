//! Helpers around the page location and the console base path.

use url::Url;

/// Parses an absolute URL, returning `None` when it is not parseable.
///
/// Callers treat an unparseable URL as a regular branch (for example by
/// displaying the raw text), so the error itself is only logged.
pub fn parse_url(input: &str) -> Option<Url> {
    match Url::parse(input) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::debug!(input, error = %e, "not a parseable URL");
            None
        }
    }
}

/// Returns whether the page was served over HTTPS.
pub fn is_connection_encrypted(page_url: &Url) -> bool {
    page_url.scheme() == "https"
}

/// Console API base path without its leading slash.
///
/// Consumers join it to their own prefix, which already ends in `/`.
pub fn console_api_base(base_path: &str) -> &str {
    base_path.strip_prefix('/').unwrap_or(base_path)
}
