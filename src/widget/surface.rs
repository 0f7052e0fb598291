//! The rendering seam between the widget and whatever displays it

use super::blob::{BlobStore, ObjectUrl};
use super::view::{StatusMessage, ViewTree};

/// Hidden save-as link pointing at an object handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: ObjectUrl,
    pub download: String,
    pub hidden: bool,
}

impl Anchor {
    pub fn hidden(href: ObjectUrl, download: impl Into<String>) -> Self {
        Self {
            href,
            download: download.into(),
            hidden: true,
        }
    }
}

pub trait Surface: Send + Sync {
    /// Replace the status line under the upload form.
    fn set_status(&self, status: &StatusMessage);

    /// Replace the list container wholesale.
    fn render(&self, view: &ViewTree);

    /// Reset the file picker after a successful upload.
    fn clear_selection(&self) {}

    /// Synthetically click a save-as anchor. The handle is only valid for
    /// the duration of this call. Runs on a blocking thread, so it may do
    /// synchronous I/O.
    fn click(&self, anchor: &Anchor, blobs: &BlobStore) -> Result<(), String>;
}
