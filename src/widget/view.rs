//! Pure rendering of the file list and status line

use crate::files::{filter_files, FileIcon, FileRecord, FilterCriteria};
use serde::Serialize;
use std::collections::HashMap;

pub const MSG_SELECT_FILE: &str = "Please select a file to upload.";
pub const MSG_UPLOADING: &str = "Uploading file...";
pub const MSG_UPLOAD_OK: &str = "Upload successful!";
pub const MSG_UPLOAD_FAILED: &str = "Error uploading file.";
pub const MSG_CONNECTION_FAILED: &str = "Error connecting to the server.";
pub const MSG_LOADING: &str = "Loading files...";
pub const MSG_NO_FILES: &str = "No files available.";
pub const MSG_NO_MATCHES: &str = "No files match the filters.";
pub const MSG_LIST_FAILED: &str = "Error loading file list.";
pub const MSG_DOWNLOAD_FAILED: &str = "Error downloading file.";
pub const DOWNLOAD_LABEL: &str = "Download";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Failure,
}

/// Inline status line shown under the upload form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Failure,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.kind == StatusKind::Failure
    }
}

/// Identifier of a rendered row, 1-based in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RowId(pub usize);

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRow {
    pub row_id: RowId,
    pub icon: FileIcon,
    pub filename: String,
    pub content_type: String,
    pub action_label: &'static str,
}

/// Everything the list container can show. Each render replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewTree {
    Loading { text: String },
    NoFiles { text: String },
    NoMatches { text: String },
    Rows { rows: Vec<FileRow> },
    Error { message: String, detail: String },
}

impl ViewTree {
    pub fn loading() -> Self {
        ViewTree::Loading {
            text: MSG_LOADING.to_string(),
        }
    }

    pub fn error(detail: impl Into<String>) -> Self {
        ViewTree::Error {
            message: MSG_LIST_FAILED.to_string(),
            detail: detail.into(),
        }
    }

    pub fn rows(&self) -> &[FileRow] {
        match self {
            ViewTree::Rows { rows } => rows,
            _ => &[],
        }
    }

    /// Filenames in display order
    pub fn filenames(&self) -> Vec<&str> {
        self.rows().iter().map(|r| r.filename.as_str()).collect()
    }

    /// Row to filename association for download clicks
    pub fn row_index(&self) -> HashMap<RowId, String> {
        self.rows()
            .iter()
            .map(|r| (r.row_id, r.filename.clone()))
            .collect()
    }

    /// The single message line shown instead of rows, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            ViewTree::Loading { text } | ViewTree::NoFiles { text } | ViewTree::NoMatches { text } => {
                Some(text.as_str())
            }
            ViewTree::Error { message, .. } => Some(message.as_str()),
            ViewTree::Rows { .. } => None,
        }
    }
}

/// Build the list view for a fetched collection under the current filters.
pub fn render_list(files: &[FileRecord], criteria: &FilterCriteria) -> ViewTree {
    if files.is_empty() {
        return ViewTree::NoFiles {
            text: MSG_NO_FILES.to_string(),
        };
    }

    let filtered = filter_files(files, criteria);
    if filtered.is_empty() {
        return ViewTree::NoMatches {
            text: MSG_NO_MATCHES.to_string(),
        };
    }

    let rows = filtered
        .into_iter()
        .enumerate()
        .map(|(i, file)| FileRow {
            row_id: RowId(i + 1),
            icon: FileIcon::classify(&file.content_type),
            filename: file.filename.clone(),
            content_type: file.content_type.clone(),
            action_label: DOWNLOAD_LABEL,
        })
        .collect();

    ViewTree::Rows { rows }
}
