//! File browser widget
//!
//! Ties the file service client to a rendering surface:
//! - `commands`: Event handlers (upload, list, filter, download)
//! - `view`: Pure list rendering and status messages
//! - `blob`: Object handles for downloaded bytes
//! - `surface`: The display seam
//! - `state`: Selection, filters and row association

mod blob;
mod commands;
mod state;
mod surface;
mod view;

pub use blob::{Blob, BlobStore, ObjectUrl};
pub use commands::FileBrowser;
pub use state::Selection;
pub use surface::{Anchor, Surface};
pub use view::{
    render_list, FileRow, RowId, StatusKind, StatusMessage, ViewTree, DOWNLOAD_LABEL,
    MSG_CONNECTION_FAILED, MSG_DOWNLOAD_FAILED, MSG_LIST_FAILED, MSG_LOADING, MSG_NO_FILES,
    MSG_NO_MATCHES, MSG_SELECT_FILE, MSG_UPLOADING, MSG_UPLOAD_FAILED, MSG_UPLOAD_OK,
};
