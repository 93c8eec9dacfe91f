//! HTTP client for the record server.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};

use super::RecordStore;
use crate::error::{RecordError, RecordResult};
use crate::models::{CreateUserRequest, Record};
use crate::transport::{build_client, endpoint, parse_base_url};

/// Talks to `record-server` over its `/users` routes.
///
/// A 404 becomes [`RecordError::NotFound`]. Connection errors, timeouts,
/// other failure statuses, and undecodable bodies become
/// [`RecordError::Unavailable`].
#[derive(Debug, Clone)]
pub struct HttpRecordStore {
    client: Client,
    base_url: Url,
}

impl HttpRecordStore {
    pub fn new(base_url: &str, timeout: Duration) -> RecordResult<Self> {
        Ok(Self {
            client: build_client(timeout).map_err(RecordError::Unavailable)?,
            base_url: parse_base_url(base_url).map_err(RecordError::InvalidRequest)?,
        })
    }

    async fn fetch(&self, request: RequestBuilder, what: String) -> RecordResult<Record> {
        let response = request.send().await.map_err(unavailable)?;

        match response.status() {
            status if status.is_success() => response.json::<Record>().await.map_err(unavailable),
            StatusCode::NOT_FOUND => Err(RecordError::NotFound(what)),
            status => Err(RecordError::Unavailable(format!(
                "record service returned {} for {}",
                status, what
            ))),
        }
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn create(&self, name: &str) -> RecordResult<Record> {
        let request = self
            .client
            .post(endpoint(&self.base_url, &["users"]))
            .json(&CreateUserRequest::new(name));
        self.fetch(request, format!("create '{}'", name)).await
    }

    async fn get_by_id(&self, id: i64) -> RecordResult<Record> {
        let id_segment = id.to_string();
        let request = self
            .client
            .get(endpoint(&self.base_url, &["users", "id", id_segment.as_str()]));
        self.fetch(request, format!("id {}", id)).await
    }

    async fn get_by_name(&self, name: &str) -> RecordResult<Record> {
        let request = self
            .client
            .get(endpoint(&self.base_url, &["users", "name", name]));
        self.fetch(request, format!("name '{}'", name)).await
    }
}

fn unavailable(err: reqwest::Error) -> RecordError {
    RecordError::Unavailable(err.to_string())
}
