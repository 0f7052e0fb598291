//! File service types, configuration and errors

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default address of the file service (the reference server's dev address)
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

pub type FileResult<T> = Result<T, FileServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum FileServiceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid server url: {0}")]
    Url(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
    /// Percent-encode filenames in download URLs. Off keeps names verbatim.
    #[serde(default)]
    pub encode_download_names: bool,
    /// Delay before a filter-triggered reload; 0 disables debouncing.
    #[serde(default)]
    pub debounce_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
            encode_download_names: false,
            debounce_ms: 0,
        }
    }
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Metadata for one stored file, as reported by `GET /files`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawFileRecord")]
pub struct FileRecord {
    pub filename: String,
    #[serde(rename = "contentType")]
    pub content_type: String,
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

// The reference server stores `content_type`; clients historically read
// `contentType`. Either may be missing or null, and both may be present.
#[derive(Deserialize)]
struct RawFileRecord {
    filename: String,
    #[serde(rename = "contentType", default)]
    content_type_camel: Option<String>,
    #[serde(default)]
    content_type: Option<String>,
    #[serde(rename = "_id", default)]
    id: Option<String>,
}

impl From<RawFileRecord> for FileRecord {
    fn from(raw: RawFileRecord) -> Self {
        Self {
            filename: raw.filename,
            content_type: raw
                .content_type_camel
                .or(raw.content_type)
                .unwrap_or_default(),
            id: raw.id,
        }
    }
}

impl FileRecord {
    pub fn new(filename: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            id: None,
        }
    }
}

/// Live filter state taken from the name field and the type selector
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub name_query: String,
    pub type_query: String,
}

impl FilterCriteria {
    pub fn new(name_query: impl Into<String>, type_query: impl Into<String>) -> Self {
        Self {
            name_query: name_query.into(),
            type_query: type_query.into(),
        }
    }
}

/// Body of a `POST /upload` response. Fields are kept as raw JSON so an
/// unexpected value type never turns a readable answer into a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub file_name: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl UploadResponse {
    /// Success is decided by the truthiness of `message`.
    pub fn is_success(&self) -> bool {
        self.message.as_ref().is_some_and(is_truthy)
    }

    pub fn file_name(&self) -> Option<String> {
        self.file_name.as_ref().map(value_text)
    }

    pub fn error(&self) -> Option<String> {
        self.error.as_ref().map(value_text)
    }
}

/// JavaScript truthiness of a JSON value
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
