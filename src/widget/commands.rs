//! File browser event handlers
//!
//! Each handler reports its outcome through the surface. The returned
//! `Result` carries the same failure text for callers that need an exit code.

use crate::files::{FileResult, FileServiceClient, FilterCriteria, ServiceConfig, UploadFile};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use super::blob::BlobStore;
use super::state::{Selection, WidgetState};
use super::surface::{Anchor, Surface};
use super::view::{
    render_list, RowId, StatusMessage, ViewTree, MSG_CONNECTION_FAILED, MSG_DOWNLOAD_FAILED,
    MSG_LIST_FAILED, MSG_SELECT_FILE, MSG_UPLOADING, MSG_UPLOAD_FAILED, MSG_UPLOAD_OK,
};

#[derive(Clone)]
pub struct FileBrowser {
    client: FileServiceClient,
    surface: Arc<dyn Surface>,
    blobs: Arc<BlobStore>,
    state: Arc<Mutex<WidgetState>>,
}

impl FileBrowser {
    pub fn new(config: ServiceConfig, surface: Arc<dyn Surface>) -> FileResult<Self> {
        Ok(Self {
            client: FileServiceClient::new(config)?,
            surface,
            blobs: Arc::new(BlobStore::new()),
            state: Arc::new(Mutex::new(WidgetState::default())),
        })
    }

    pub fn client(&self) -> &FileServiceClient {
        &self.client
    }

    pub fn blobs(&self) -> &BlobStore {
        &self.blobs
    }

    pub async fn criteria(&self) -> FilterCriteria {
        self.state.lock().await.criteria.clone()
    }

    /// Set both filter fields without reloading.
    pub async fn set_criteria(&self, criteria: FilterCriteria) {
        self.state.lock().await.criteria = criteria;
    }

    pub async fn selection(&self) -> Option<Selection> {
        self.state.lock().await.selection.clone()
    }

    /// Filename behind a row of the current render
    pub async fn row_filename(&self, row: RowId) -> Option<String> {
        self.state.lock().await.rows.get(&row).cloned()
    }

    fn report_failure(&self, text: &str) -> Result<(), String> {
        self.surface.set_status(&StatusMessage::failure(text));
        Err(text.to_string())
    }

    // ============ Upload ============

    /// Pick (or clear, with `None`) the file for the next upload.
    pub async fn select_file(&self, path: Option<PathBuf>, content_type: Option<String>) {
        let mut state = self.state.lock().await;
        state.selection = path.map(|path| Selection { path, content_type });
    }

    pub async fn submit_upload(&self) -> Result<(), String> {
        let selection = self.state.lock().await.selection.clone();
        let Some(selection) = selection else {
            return self.report_failure(MSG_SELECT_FILE);
        };

        self.surface.set_status(&StatusMessage::success(MSG_UPLOADING));

        let file = match UploadFile::from_path(&selection.path, selection.content_type.as_deref())
            .await
        {
            Ok(file) => file,
            Err(e) => {
                warn!("upload: cannot read {}: {}", selection.path.display(), e);
                return self.report_failure(MSG_UPLOAD_FAILED);
            }
        };

        match self.client.upload(file).await {
            Ok(response) if response.is_success() => {
                let stored = response.file_name().unwrap_or_else(|| "file".to_string());
                info!("upload: stored {}", stored);
                self.surface.set_status(&StatusMessage::success(MSG_UPLOAD_OK));
                self.state.lock().await.selection = None;
                self.surface.clear_selection();
                // The upload itself succeeded; a failed refresh shows in the list view.
                let _ = self.load_files().await;
                Ok(())
            }
            Ok(_) => self.report_failure(MSG_UPLOAD_FAILED),
            Err(e) => {
                warn!("upload: {}", e);
                self.report_failure(MSG_CONNECTION_FAILED)
            }
        }
    }

    // ============ Listing ============

    /// Fetch the collection and render it under the filters current at
    /// completion time. A load superseded by a newer one renders nothing.
    ///
    /// A failed fetch renders the error view and is also returned.
    pub async fn load_files(&self) -> Result<(), String> {
        let generation = self.state.lock().await.next_load();
        self.surface.render(&ViewTree::loading());

        let result = self.client.list_files().await;

        let mut state = self.state.lock().await;
        if !state.is_current_load(generation) {
            debug!("list: load {} superseded by {}", generation, state.load_generation);
            return Ok(());
        }

        let (view, outcome) = match result {
            Ok(files) => (render_list(&files, &state.criteria), Ok(())),
            Err(e) => {
                warn!("list: {}", e);
                (ViewTree::error(e.to_string()), Err(MSG_LIST_FAILED.to_string()))
            }
        };
        state.rows = view.row_index();
        self.surface.render(&view);
        outcome
    }

    pub async fn on_name_input(&self, value: &str) -> Result<(), String> {
        let input = {
            let mut state = self.state.lock().await;
            state.criteria.name_query = value.to_string();
            state.next_input()
        };
        self.reload_after_input(input).await
    }

    pub async fn on_type_change(&self, value: &str) -> Result<(), String> {
        let input = {
            let mut state = self.state.lock().await;
            state.criteria.type_query = value.to_string();
            state.next_input()
        };
        self.reload_after_input(input).await
    }

    async fn reload_after_input(&self, input: u64) -> Result<(), String> {
        let debounce_ms = self.client.config().debounce_ms;
        if debounce_ms > 0 {
            tokio::time::sleep(Duration::from_millis(debounce_ms)).await;
            if self.state.lock().await.input_generation != input {
                debug!("list: input {} superseded during debounce", input);
                return Ok(());
            }
        }
        self.load_files().await
    }

    // ============ Download ============

    /// Handle a click on a row's download control.
    pub async fn download_row(&self, row: RowId) -> Result<(), String> {
        match self.row_filename(row).await {
            Some(filename) => self.download_file(&filename).await,
            None => {
                warn!("download: no row {}", row);
                self.report_failure(MSG_DOWNLOAD_FAILED)
            }
        }
    }

    /// Fetch one file, expose it as an object handle, click a hidden anchor
    /// for it and release the handle.
    pub async fn download_file(&self, filename: &str) -> Result<(), String> {
        let downloaded = match self.client.download(filename).await {
            Ok(downloaded) => downloaded,
            Err(e) => {
                warn!("download: {}: {}", filename, e);
                return self.report_failure(MSG_DOWNLOAD_FAILED);
            }
        };

        let url = self
            .blobs
            .create_object_url(downloaded.bytes, downloaded.content_type);
        let anchor = Anchor::hidden(url.clone(), filename);

        // Surfaces may block on disk while saving.
        let surface = Arc::clone(&self.surface);
        let blobs = Arc::clone(&self.blobs);
        let clicked = tokio::task::spawn_blocking(move || surface.click(&anchor, &blobs))
            .await
            .unwrap_or_else(|e| Err(format!("click task failed: {}", e)));
        self.blobs.revoke_object_url(&url);

        clicked.or_else(|e| {
            warn!("download: save of {} failed: {}", filename, e);
            self.report_failure(MSG_DOWNLOAD_FAILED)
        })
    }
}
