//! HTTP client for the cache server.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde_json::Value;

use crate::cache::{CacheBackend, MemoryInfo};
use crate::error::{CacheError, Result};
use crate::models::MemoryInfoResponse;
use crate::transport::{build_client, endpoint, parse_base_url};

/// Talks to `cache-server` over its `/cache/...` routes.
///
/// Connection failures, timeouts, and unexpected statuses all surface as
/// [`CacheError::Unavailable`]; a 404 is [`CacheError::NotFound`].
#[derive(Debug, Clone)]
pub struct HttpCacheClient {
    client: Client,
    base_url: Url,
}

impl HttpCacheClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout).map_err(CacheError::Internal)?,
            base_url: parse_base_url(base_url).map_err(CacheError::InvalidRequest)?,
        })
    }

    fn key_url(&self, key: &str) -> Url {
        endpoint(&self.base_url, &["cache", key])
    }
}

#[async_trait]
impl CacheBackend for HttpCacheClient {
    async fn get(&self, key: &str) -> Result<Value> {
        let response = self
            .client
            .get(self.key_url(key))
            .send()
            .await
            .map_err(unavailable)?;

        let response = check_status(response, key)?;
        response.json::<Value>().await.map_err(unavailable)
    }

    async fn set(&self, key: &str, value: &Value) -> Result<()> {
        let response = self
            .client
            .post(self.key_url(key))
            .json(value)
            .send()
            .await
            .map_err(unavailable)?;

        check_status(response, key).map(|_| ())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.key_url(key))
            .send()
            .await
            .map_err(unavailable)?;

        check_status(response, key).map(|_| ())
    }

    async fn memory_info(&self) -> Result<MemoryInfo> {
        let response = self
            .client
            .get(endpoint(&self.base_url, &["cache", "memory"]))
            .send()
            .await
            .map_err(unavailable)?;

        let body: MemoryInfoResponse = check_status(response, "memory")?
            .json()
            .await
            .map_err(unavailable)?;

        Ok(MemoryInfo {
            used_bytes: body.used_memory_bytes,
            threshold_bytes: body.flush_threshold_bytes,
            total_entries: body.total_entries,
            flushes: body.flushes,
        })
    }
}

fn check_status(response: Response, key: &str) -> Result<Response> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => Err(CacheError::NotFound(key.to_string())),
        status => Err(CacheError::Unavailable(format!(
            "cache service returned {} for '{}'",
            status, key
        ))),
    }
}

fn unavailable(err: reqwest::Error) -> CacheError {
    CacheError::Unavailable(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_url_encodes_key_as_one_segment() {
        let client = HttpCacheClient::new("http://cache:8002", Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.key_url("name:x/y").as_str(),
            "http://cache:8002/cache/name:x%2Fy"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let result = HttpCacheClient::new("::nope::", Duration::from_secs(5));
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_unavailable() {
        // Bind then drop to get a port with nothing listening
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            HttpCacheClient::new(&format!("http://{}", addr), Duration::from_secs(2)).unwrap();
        let result = client.get("user:1").await;
        assert!(matches!(result, Err(CacheError::Unavailable(_))));
    }
}
