//! HTTP client plumbing shared by the gateway's downstream clients.

use std::time::Duration;

use reqwest::{Client, Url};

/// Builds a client whose every request is bounded by `timeout`.
pub(crate) fn build_client(timeout: Duration) -> Result<Client, String> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {}", e))
}

/// Parses a service base URL such as `http://cache:8002`.
pub(crate) fn parse_base_url(base: &str) -> Result<Url, String> {
    let url = Url::parse(base).map_err(|e| format!("Invalid service URL '{}': {}", base, e))?;
    if url.cannot_be_a_base() {
        return Err(format!("Invalid service URL '{}': not a base URL", base));
    }
    Ok(url)
}

/// Appends path segments to `base`, percent-encoding each one, so a name
/// containing `/` stays a single segment.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_segments() {
        let base = parse_base_url("http://127.0.0.1:8002").unwrap();
        let url = endpoint(&base, &["cache", "user:7"]);
        assert_eq!(url.as_str(), "http://127.0.0.1:8002/cache/user:7");
    }

    #[test]
    fn test_endpoint_encodes_slash_and_space() {
        let base = parse_base_url("http://127.0.0.1:8001/").unwrap();
        let url = endpoint(&base, &["users", "name", "a b/c"]);
        assert_eq!(url.as_str(), "http://127.0.0.1:8001/users/name/a%20b%2Fc");
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(parse_base_url("not a url").is_err());
        assert!(parse_base_url("mailto:ops@example.com").is_err());
    }
}
