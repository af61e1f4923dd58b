use super::WorklistEntry;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

const GENERIC_FAILURE: &str = "Terjadi kesalahan";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{}", non_empty_or_generic(.0))]
    Transport(String),
    #[error("Gagal mengambil worklist")]
    Status(u16),
    #[error("{}", non_empty_or_generic(.0))]
    Decode(String),
}

fn non_empty_or_generic(message: &str) -> &str {
    if message.trim().is_empty() {
        GENERIC_FAILURE
    } else {
        message
    }
}

#[derive(Debug, Clone)]
pub struct WorklistClient {
    http: Client,
    url: String,
}

impl WorklistClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch(&self) -> Result<Vec<WorklistEntry>, FetchError> {
        log::info!("Fetching worklist from {}", self.url);

        let response = self.http.get(&self.url).send().await.map_err(|err| {
            log::error!("Worklist request to {} failed: {err}", self.url);
            FetchError::Transport(err.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Worklist request to {} returned {status}", self.url);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|err| {
            log::error!("Reading worklist body failed: {err}");
            FetchError::Transport(err.to_string())
        })?;

        let value: Value = serde_json::from_str(&body).map_err(|err| {
            log::error!("Worklist body is not JSON: {err}");
            FetchError::Decode(err.to_string())
        })?;

        let entries = entries_from_json(value);
        log::info!("Received {} worklist entries", entries.len());
        Ok(entries)
    }
}

/// Anything other than a JSON array is treated as an empty worklist.
pub fn entries_from_json(value: Value) -> Vec<WorklistEntry> {
    match value {
        Value::Array(items) => items.iter().map(WorklistEntry::from_json_lenient).collect(),
        other => {
            log::warn!(
                "Worklist response is not an array ({}), showing no rows",
                json_kind(&other)
            );
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
