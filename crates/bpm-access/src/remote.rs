//! Remote record store client
//!
//! [`RecordSource`] is the seam the repositories depend on;
//! [`AirtableClient`] is the HTTP implementation.

use crate::config::RemoteConfig;
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::instrument;

/// One raw record as returned by the remote store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteRecord {
    /// Remote record id
    pub id: String,
    /// Column values keyed by column name
    #[serde(default)]
    pub fields: Map<String, Value>,
    /// Creation timestamp as reported by the store
    #[serde(
        default,
        rename = "createdTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_time: Option<String>,
}

/// One page of a list response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordPage {
    /// Records on this page, required so a bare object fails to decode
    pub records: Vec<RemoteRecord>,
    /// Cursor for the next page, absent on the last one
    #[serde(default)]
    pub offset: Option<String>,
}

/// Optional list parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Server-side filter formula
    pub filter_by_formula: Option<String>,
    /// Upper bound on returned records
    pub max_records: Option<usize>,
}

impl ListQuery {
    /// With a filter formula
    #[inline]
    #[must_use]
    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.filter_by_formula = Some(formula.into());
        self
    }

    /// With a record limit
    #[inline]
    #[must_use]
    pub fn with_max_records(mut self, max: usize) -> Self {
        self.max_records = Some(max);
        self
    }
}

/// Read access to a remote table store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// All records of `table` matching `query`, across every page
    async fn list_records(
        &self,
        table: &str,
        query: &ListQuery,
    ) -> Result<Vec<RemoteRecord>, FetchError>;

    /// One record by id; `Ok(None)` when the store reports it missing
    async fn get_record(&self, table: &str, id: &str) -> Result<Option<RemoteRecord>, FetchError>;
}

/// Formula selecting records in `category`, excluding `exclude_id`
#[must_use]
pub fn related_formula(category: &str, exclude_id: &str) -> String {
    format!(
        "AND({{Category}} = '{}', RECORD_ID() != '{}')",
        escape_formula(category),
        escape_formula(exclude_id)
    )
}

fn escape_formula(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Airtable REST client
#[derive(Debug, Clone)]
pub struct AirtableClient {
    http: reqwest::Client,
    base_url: Url,
    dataset_id: String,
    api_token: String,
}

impl AirtableClient {
    /// Build a client for `config` with a per-request `timeout`
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidConfig`] when the base URL cannot be
    /// parsed or the dataset id / token is missing.
    pub fn new(config: &RemoteConfig, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::InvalidConfig(format!("base url: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidConfig(format!(
                "base url cannot carry a path: {base_url}"
            )));
        }
        if config.dataset_id.trim().is_empty() {
            return Err(FetchError::InvalidConfig("dataset id is empty".to_string()));
        }
        if config.api_token.trim().is_empty() {
            return Err(FetchError::InvalidConfig("api token is empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::InvalidConfig(format!("http client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            dataset_id: config.dataset_id.clone(),
            api_token: config.api_token.clone(),
        })
    }

    fn table_url(&self, table: &str, id: Option<&str>) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| FetchError::InvalidConfig("base url cannot be a base".to_string()))?;
            segments.pop_if_empty().push(&self.dataset_id).push(table);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl RecordSource for AirtableClient {
    #[instrument(name = "remote_list_records", skip(self, query), fields(dataset = %self.dataset_id))]
    async fn list_records(
        &self,
        table: &str,
        query: &ListQuery,
    ) -> Result<Vec<RemoteRecord>, FetchError> {
        let url = self.table_url(table, None)?;
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let mut request = self.http.get(url.clone()).bearer_auth(&self.api_token);
            if let Some(formula) = &query.filter_by_formula {
                request = request.query(&[("filterByFormula", formula)]);
            }
            if let Some(max) = query.max_records {
                request = request.query(&[("maxRecords", max.to_string())]);
            }
            if let Some(cursor) = &offset {
                request = request.query(&[("offset", cursor)]);
            }

            let page: RecordPage = request.send().await?.error_for_status()?.json().await?;
            tracing::debug!(table, page_len = page.records.len(), "received page");
            records.extend(page.records);

            match page.offset {
                Some(next) if !next.is_empty() => offset = Some(next),
                _ => break,
            }
        }

        Ok(records)
    }

    #[instrument(name = "remote_get_record", skip(self), fields(dataset = %self.dataset_id))]
    async fn get_record(&self, table: &str, id: &str) -> Result<Option<RemoteRecord>, FetchError> {
        let url = self.table_url(table, Some(id))?;
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.api_token)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let record = response.error_for_status()?.json::<RemoteRecord>().await?;
        Ok(Some(record))
    }
}
