//! Files module - client side of the file service
//!
//! This module is organized into submodules:
//! - `types`: Core types, service config and errors
//! - `client`: HTTP operations (upload, list, download)
//! - `filter`: Name/type filtering of listed files
//! - `icon`: Content type to display glyph mapping

mod client;
mod filter;
mod icon;
mod types;

// Re-export types
pub use types::{
    FileRecord, FileResult, FileServiceError, FilterCriteria, ServiceConfig, UploadResponse,
    DEFAULT_SERVER_URL,
};

// Re-export client operations
pub use client::{content_type_for_path, DownloadedFile, FileServiceClient, UploadFile};

// Re-export filtering
pub use filter::{filter_files, TypeOption, TYPE_OPTIONS};

// Re-export icon classification
pub use icon::FileIcon;
