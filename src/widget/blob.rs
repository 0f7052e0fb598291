//! Transient object handles for downloaded bytes
//!
//! A download is materialised as a `blob:` URL that a surface can resolve
//! while saving it. The handle must be revoked afterwards; `live_count`
//! exposes how many are still held.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

const BLOB_SCHEME: &str = "blob:filedrop/";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Blob {
    pub bytes: Arc<[u8]>,
    pub content_type: Option<String>,
}

#[derive(Debug, Default)]
pub struct BlobStore {
    handles: Mutex<HashMap<ObjectUrl, Blob>>,
}

impl BlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn handles(&self) -> MutexGuard<'_, HashMap<ObjectUrl, Blob>> {
        // A poisoned map is still structurally valid
        self.handles.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn create_object_url(&self, bytes: Vec<u8>, content_type: Option<String>) -> ObjectUrl {
        let url = ObjectUrl(format!("{}{}", BLOB_SCHEME, uuid::Uuid::new_v4()));
        self.handles().insert(
            url.clone(),
            Blob {
                bytes: bytes.into(),
                content_type,
            },
        );
        url
    }

    pub fn resolve(&self, url: &ObjectUrl) -> Option<Blob> {
        self.handles().get(url).cloned()
    }

    /// Release a handle. Returns false if it was already gone.
    pub fn revoke_object_url(&self, url: &ObjectUrl) -> bool {
        self.handles().remove(url).is_some()
    }

    pub fn live_count(&self) -> usize {
        self.handles().len()
    }
}
