//! Question sources supplying raw records.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::config::SourceLocation;
use crate::error::SourceError;
use crate::models::RawRecord;

/// An idempotent read of raw question records, in source order.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<RawRecord>, SourceError>;
}

/// Build the source described by `location`.
pub fn source_for(
    location: &SourceLocation,
    timeout: Duration,
) -> Result<Box<dyn QuestionSource>, SourceError> {
    let source: Box<dyn QuestionSource> = match location {
        SourceLocation::Url(url) => Box::new(HttpSource::new(url.clone(), timeout)?),
        SourceLocation::File(path) => Box::new(JsonFileSource::new(path.clone())),
    };
    Ok(source)
}

/// Fetches a JSON array of records over HTTP.
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpSource {
    /// A source whose requests fail once `timeout` passes, connecting included.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }
}

#[async_trait]
impl QuestionSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<RawRecord>, SourceError> {
        debug!(url = %self.url, "fetching question records");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| self.request_error(err))?;

        if !response.status().is_success() {
            return Err(SourceError::HttpStatus(response.status()));
        }

        let records: Vec<RawRecord> = response.json().await.map_err(|err| self.request_error(err))?;
        info!(count = records.len(), url = %self.url, "fetched question records");
        Ok(records)
    }
}

impl HttpSource {
    fn request_error(&self, err: reqwest::Error) -> SourceError {
        if err.is_timeout() {
            SourceError::TimedOut(self.timeout)
        } else {
            SourceError::Http(err)
        }
    }
}

/// Reads the same JSON array from a local file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl QuestionSource for JsonFileSource {
    async fn fetch(&self) -> Result<Vec<RawRecord>, SourceError> {
        let json_content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;

        let records: Vec<RawRecord> = serde_json::from_str(&json_content)?;
        info!(count = records.len(), path = %self.path.display(), "loaded question records");
        Ok(records)
    }
}
