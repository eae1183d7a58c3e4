//! Appwrite document store backend over its REST API.

use std::time::Duration;

use async_trait::async_trait;
use marquee_search::Movie;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;

use super::{AnalyticsError, NewTrendingRecord, SearchAnalytics, TrendingRecord};
use crate::config::AppwriteConfig;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// List response for a collection query.
#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<TrendingRecord>,
}

/// Search tallies stored in an Appwrite collection.
///
/// Each document holds `searchTerm`, `count`, `movie_id`, `title` and
/// `poster_url`. Increments are read-modify-write; concurrent increments of
/// the same term resolve as last writer wins.
#[derive(Debug, Clone)]
pub struct AppwriteAnalytics {
    client: Client,
    documents_url: String,
    project_id: String,
    api_key: Option<String>,
}

impl AppwriteAnalytics {
    /// Creates a backend for the configured collection.
    ///
    /// # Errors
    /// - `AnalyticsError::Unavailable` - If the HTTP client cannot be built
    pub fn new(config: &AppwriteConfig) -> Result<Self, AnalyticsError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AnalyticsError::Unavailable {
                reason: format!("Failed to build HTTP client: {e}"),
            })?;

        let documents_url = format!(
            "{}/databases/{}/collections/{}/documents",
            config.endpoint.trim_end_matches('/'),
            urlencoding::encode(&config.database_id),
            urlencoding::encode(&config.collection_id)
        );

        Ok(Self {
            client,
            documents_url,
            project_id: config.project_id.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Collection documents endpoint.
    pub fn documents_url(&self) -> &str {
        &self.documents_url
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header("X-Appwrite-Project", &self.project_id);
        match &self.api_key {
            Some(key) => request.header("X-Appwrite-Key", key),
            None => request,
        }
    }

    async fn list_documents(
        &self,
        queries: &[String],
    ) -> Result<Vec<TrendingRecord>, AnalyticsError> {
        let params: Vec<(&str, &str)> = queries
            .iter()
            .map(|query| ("queries[]", query.as_str()))
            .collect();

        let response = self
            .authorize(self.client.get(&self.documents_url))
            .query(&params)
            .send()
            .await
            .map_err(request_error)?;

        let list: DocumentList = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| AnalyticsError::Parse {
                reason: e.to_string(),
            })?;

        Ok(list.documents)
    }

    async fn find_by_term(
        &self,
        search_term: &str,
    ) -> Result<Option<TrendingRecord>, AnalyticsError> {
        let queries = [
            json!({"method": "equal", "attribute": "searchTerm", "values": [search_term]})
                .to_string(),
        ];
        Ok(self.list_documents(&queries).await?.into_iter().next())
    }

    async fn update_count(&self, document_id: &str, count: u64) -> Result<(), AnalyticsError> {
        let url = format!("{}/{}", self.documents_url, urlencoding::encode(document_id));
        let response = self
            .authorize(self.client.patch(&url))
            .json(&json!({ "data": { "count": count } }))
            .send()
            .await
            .map_err(request_error)?;

        ensure_success(response).await?;
        Ok(())
    }

    async fn create_document(&self, record: &NewTrendingRecord) -> Result<(), AnalyticsError> {
        let response = self
            .authorize(self.client.post(&self.documents_url))
            .json(&json!({ "documentId": "unique()", "data": record }))
            .send()
            .await
            .map_err(request_error)?;

        ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl SearchAnalytics for AppwriteAnalytics {
    async fn record_search(&self, search_term: &str, movie: &Movie) -> Result<(), AnalyticsError> {
        match self.find_by_term(search_term).await? {
            Some(record) => {
                tracing::debug!(search_term, count = record.count + 1, "Incrementing search count");
                self.update_count(&record.id, record.count + 1).await
            }
            None => {
                tracing::debug!(search_term, movie_id = movie.id, "Creating search record");
                self.create_document(&NewTrendingRecord::from_search(search_term, movie))
                    .await
            }
        }
    }

    async fn top_searches(&self, limit: usize) -> Result<Vec<TrendingRecord>, AnalyticsError> {
        let queries = [
            json!({"method": "orderDesc", "attribute": "count"}).to_string(),
            json!({"method": "limit", "values": [limit]}).to_string(),
        ];
        self.list_documents(&queries).await
    }

    fn name(&self) -> &'static str {
        "appwrite"
    }
}

fn request_error(e: reqwest::Error) -> AnalyticsError {
    AnalyticsError::Request {
        reason: e.to_string(),
    }
}

async fn ensure_success(response: Response) -> Result<Response, AnalyticsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(AnalyticsError::UnexpectedStatus {
        status: status.as_u16(),
        body,
    })
}
