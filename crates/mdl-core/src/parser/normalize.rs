//! URL normalization primitives shared by every provider parser.
//!
//! These work on raw strings on purpose: pasted links often lack a scheme or
//! carry junk that a strict URL parser would reject before we can classify it.

const HTTP: &str = "http://";
const HTTPS: &str = "https://";

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
}

/// Trims whitespace and prepends `https://` when no http(s) scheme is present.
///
/// `soundcloud.com/a/b` and `https://soundcloud.com/a/b` normalize to the same string.
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();
    if starts_with_ignore_case(trimmed, HTTP) || starts_with_ignore_case(trimmed, HTTPS) {
        trimmed.to_string()
    } else {
        format!("{HTTPS}{trimmed}")
    }
}

/// Everything before the first `?`.
pub fn strip_query(url: &str) -> &str {
    match url.split_once('?') {
        Some((head, _)) => head,
        None => url,
    }
}

/// Rewrites a normalized URL's scheme to lowercase `https://`.
fn force_https(normalized: &str) -> String {
    let rest = if starts_with_ignore_case(normalized, HTTPS) {
        &normalized[HTTPS.len()..]
    } else if starts_with_ignore_case(normalized, HTTP) {
        &normalized[HTTP.len()..]
    } else {
        normalized
    };
    format!("{HTTPS}{rest}")
}

/// Canonical form: `https://` scheme, no query string, no trailing whitespace.
///
/// Idempotent: `sanitize_url(&sanitize_url(u)) == sanitize_url(u)`.
pub fn sanitize_url(url: &str) -> String {
    let normalized = normalize_url(url);
    force_https(strip_query(&normalized).trim_end())
}

/// Scheme-less remainder of a normalized URL, split at the first `?`.
pub(crate) fn authority_and_path(normalized: &str) -> &str {
    let without_query = strip_query(normalized);
    if starts_with_ignore_case(without_query, HTTPS) {
        &without_query[HTTPS.len()..]
    } else if starts_with_ignore_case(without_query, HTTP) {
        &without_query[HTTP.len()..]
    } else {
        without_query
    }
}

/// Lowercased host of a URL after normalization, or `None` if it has no parseable host.
pub fn host_of(url: &str) -> Option<String> {
    let normalized = normalize_url(url);
    let parsed = url::Url::parse(&normalized).ok()?;
    parsed.host_str().map(|h| h.to_ascii_lowercase())
}

/// True when `host` is `domain` itself or one of its subdomains.
pub fn host_matches_domain(host: &str, domain: &str) -> bool {
    host.eq_ignore_ascii_case(domain)
        || host
            .len()
            .checked_sub(domain.len() + 1)
            .map_or(false, |split| {
                host.as_bytes()[split] == b'.' && host[split + 1..].eq_ignore_ascii_case(domain)
            })
}
