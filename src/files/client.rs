//! HTTP operations against the file service (upload, list, download)

use super::types::{FileRecord, FileResult, FileServiceError, ServiceConfig, UploadResponse};
use futures_util::StreamExt;
use log::{debug, info, warn};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::path::Path;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";
const MAX_PREALLOC_BYTES: u64 = 8 * 1024 * 1024;

/// A local file packaged for `POST /upload`
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Read a file from disk. Without an explicit content type one is derived
    /// from the extension.
    pub async fn from_path(path: &Path, content_type: Option<&str>) -> FileResult<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content_type = content_type
            .map(str::to_string)
            .unwrap_or_else(|| content_type_for_path(path).to_string());

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }
}

/// Raw bytes returned by `GET /download/{filename}`
#[derive(Debug, Clone)]
pub struct DownloadedFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Guess a content type from the extension, covering the kinds the type
/// selector knows about.
pub fn content_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "csv" => "text/csv",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "txt" => "text/plain",
        "json" => "application/json",
        _ => FALLBACK_CONTENT_TYPE,
    }
}

#[derive(Debug, Clone)]
pub struct FileServiceClient {
    client: Client,
    config: ServiceConfig,
}

impl FileServiceClient {
    pub fn new(config: ServiceConfig) -> FileResult<Self> {
        if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
            return Err(FileServiceError::Url(config.base_url));
        }
        Ok(Self {
            client: Client::new(),
            config,
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// URL for a download. The filename goes in verbatim unless
    /// `encode_download_names` is set.
    pub fn download_url(&self, filename: &str) -> String {
        if self.config.encode_download_names {
            self.endpoint(&format!("download/{}", urlencoding::encode(filename)))
        } else {
            self.endpoint(&format!("download/{}", filename))
        }
    }

    /// Submit one file as multipart field `file`. The response body decides
    /// success, not the status code.
    pub async fn upload(&self, file: UploadFile) -> FileResult<UploadResponse> {
        let size = file.bytes.len();
        let content_type = if file.content_type.is_empty() {
            FALLBACK_CONTENT_TYPE.to_string()
        } else {
            file.content_type
        };
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name.clone())
            .mime_str(&content_type)?;
        let form = Form::new().part("file", part);

        info!("upload: {} ({} bytes, {})", file.file_name, size, content_type);
        let response = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let parsed: UploadResponse = serde_json::from_slice(&body)?;
        if let Some(err) = parsed.error() {
            warn!("upload: server rejected {} ({}): {}", file.file_name, status, err);
        } else {
            debug!("upload: {} -> {}", file.file_name, status);
        }
        Ok(parsed)
    }

    /// Fetch the whole file collection.
    pub async fn list_files(&self) -> FileResult<Vec<FileRecord>> {
        self.fetch_list(self.client.get(self.endpoint("files"))).await
    }

    /// Fetch files whose content type equals `content_type` exactly
    /// (filtered server-side).
    pub async fn list_files_of_type(&self, content_type: &str) -> FileResult<Vec<FileRecord>> {
        let url = self.endpoint(&format!("files?type={}", urlencoding::encode(content_type)));
        self.fetch_list(self.client.get(url)).await
    }

    async fn fetch_list(&self, request: reqwest::RequestBuilder) -> FileResult<Vec<FileRecord>> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FileServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        let files: Vec<FileRecord> = serde_json::from_slice(&body)?;
        debug!("list: {} files", files.len());
        Ok(files)
    }

    /// Fetch the raw bytes of one stored file.
    pub async fn download(&self, filename: &str) -> FileResult<DownloadedFile> {
        let url = self.download_url(filename);
        info!("download: {}", filename);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FileServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        // Content-Length is only a hint; a hostile header must not size the buffer.
        let capacity = response
            .content_length()
            .map_or(0, |len| len.min(MAX_PREALLOC_BYTES) as usize);
        let mut bytes = Vec::with_capacity(capacity);

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            bytes.extend_from_slice(&chunk?);
        }

        debug!("download: {} ({} bytes)", filename, bytes.len());
        Ok(DownloadedFile {
            filename: filename.to_string(),
            content_type,
            bytes,
        })
    }
}
