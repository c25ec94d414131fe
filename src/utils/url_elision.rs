//! Display-time shortening of URLs.
//!
//! Long hostnames and paths are cut from the left and the dropped part is
//! replaced with an ellipsis, so the most specific labels (the registered
//! domain) and the last path segments stay visible.

use url::Url;

/// Marker replacing the dropped part of a hostname or path.
pub const ELLIPSIS: &str = "\u{2026}";

/// Origin serialization of URLs without a tuple origin (`file:`, `data:`, ...).
const OPAQUE_ORIGIN: &str = "null";

fn ellipsize_left(word: &str) -> String {
    format!("{ELLIPSIS}{word}")
}

/// Shortens the origin part of a URL to at most `max_hostname_parts` labels.
///
/// Returns `origin` unchanged when the hostname already fits the budget.
/// Otherwise the leftmost labels are dropped and the scheme is omitted; the
/// port is kept.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     resolve_origin("a.b.c.example.com", "https://a.b.c.example.com", None, 2),
///     "…example.com"
/// );
/// ```
pub fn resolve_origin(
    hostname: &str,
    origin: &str,
    port: Option<u16>,
    max_hostname_parts: usize,
) -> String {
    let hostname_parts: Vec<&str> = hostname.split('.').collect();
    if hostname_parts.len() <= max_hostname_parts {
        return origin.to_string();
    }

    let resolved_hostname = hostname_parts[hostname_parts.len() - max_hostname_parts..].join(".");
    let resolved_port = port.map(|p| format!(":{p}")).unwrap_or_default();

    format!("{}{resolved_port}", ellipsize_left(&resolved_hostname))
}

/// Shortens a pathname to its last `max_pathname_parts` non-empty segments.
///
/// Returns `pathname` unchanged when it already fits the budget. A shortened
/// path has the form `/…/<segments>`.
pub fn resolve_pathname(pathname: &str, max_pathname_parts: usize) -> String {
    let pathname_parts: Vec<&str> = pathname.split('/').filter(|part| !part.is_empty()).collect();
    if pathname_parts.len() <= max_pathname_parts {
        return pathname.to_string();
    }

    let resolved_pathname = pathname_parts[pathname_parts.len() - max_pathname_parts..].join("/");

    format!("/{}", ellipsize_left(&format!("/{resolved_pathname}")))
}

/// Shortens a whole URL for display.
///
/// URLs with an opaque origin are returned verbatim. Query and fragment are
/// never part of the result.
pub fn resolve_url(url: &Url, max_hostname_parts: usize, max_pathname_parts: usize) -> String {
    let origin = url.origin().ascii_serialization();
    if origin == OPAQUE_ORIGIN {
        return url.as_str().to_string();
    }

    let hostname = url.host_str().unwrap_or_default();

    format!(
        "{}{}",
        resolve_origin(hostname, &origin, url.port(), max_hostname_parts),
        resolve_pathname(url.path(), max_pathname_parts)
    )
}

/// A URL together with its display budgets.
#[derive(Debug, Clone)]
pub struct UrlShorteningRequest<'a> {
    pub url: &'a Url,
    pub max_hostname_parts: usize,
    pub max_pathname_parts: usize,
}

impl<'a> UrlShorteningRequest<'a> {
    pub fn new(url: &'a Url, max_hostname_parts: usize, max_pathname_parts: usize) -> Self {
        Self {
            url,
            max_hostname_parts,
            max_pathname_parts,
        }
    }

    /// Produces the shortened display string, see [`resolve_url`].
    pub fn resolve(&self) -> String {
        resolve_url(self.url, self.max_hostname_parts, self.max_pathname_parts)
    }
}
