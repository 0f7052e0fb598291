//! Line-oriented terminal surface
//!
//! Prints the status line and list views to stdout and saves clicked
//! downloads into a directory.

use crate::widget::{Anchor, BlobStore, StatusKind, StatusMessage, Surface, ViewTree};
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

pub struct TerminalSurface {
    download_dir: PathBuf,
    color: bool,
}

impl TerminalSurface {
    pub fn new(download_dir: impl Into<PathBuf>, color: bool) -> Self {
        Self {
            download_dir: download_dir.into(),
            color,
        }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Where a download named `name` lands. Only the final path component
    /// is kept so a server-supplied name cannot escape the directory.
    pub fn target_path(&self, name: &str) -> Option<PathBuf> {
        let file_name = Path::new(name).file_name()?;
        Some(self.download_dir.join(file_name))
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }

    pub fn format_status(&self, status: &StatusMessage) -> String {
        match status.kind {
            StatusKind::Success => self.paint(GREEN, &status.text),
            StatusKind::Failure => self.paint(RED, &status.text),
        }
    }

    pub fn format_view(&self, view: &ViewTree) -> String {
        match view {
            ViewTree::Rows { rows } => rows
                .iter()
                .map(|row| {
                    format!(
                        "{:>3}  {}  {}  {}",
                        row.row_id,
                        row.icon,
                        row.filename,
                        self.paint(DIM, &format!("[{}]", row.action_label))
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
            ViewTree::Error { message, detail } => {
                format!("{} {}", self.paint(RED, message), detail)
            }
            other => other.message().unwrap_or_default().to_string(),
        }
    }
}

impl Surface for TerminalSurface {
    fn set_status(&self, status: &StatusMessage) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{}", self.format_status(status));
    }

    fn render(&self, view: &ViewTree) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{}", self.format_view(view));
    }

    fn click(&self, anchor: &Anchor, blobs: &BlobStore) -> Result<(), String> {
        let blob = blobs
            .resolve(&anchor.href)
            .ok_or_else(|| format!("Object handle {} is not live", anchor.href))?;
        let target = self
            .target_path(&anchor.download)
            .ok_or_else(|| format!("Invalid download name: {}", anchor.download))?;

        std::fs::create_dir_all(&self.download_dir)
            .map_err(|e| format!("Failed to create directory: {}", e))?;
        std::fs::write(&target, &blob.bytes)
            .map_err(|e| format!("Failed to write file: {}", e))?;

        info!("download: saved {} ({} bytes)", target.display(), blob.bytes.len());
        let _ = writeln!(std::io::stdout().lock(), "Saved {}", target.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::{FileRecord, FilterCriteria};
    use crate::widget::render_list;

    #[test]
    fn rows_show_id_icon_name_and_action() {
        let surface = TerminalSurface::new(".", false);
        let view = render_list(
            &[FileRecord::new("a.pdf", "application/pdf")],
            &FilterCriteria::default(),
        );

        assert_eq!(surface.format_view(&view), "  1  📄  a.pdf  [Download]");
    }

    #[test]
    fn error_view_appends_detail() {
        let surface = TerminalSurface::new(".", false);
        let text = surface.format_view(&ViewTree::error("connection refused"));
        assert_eq!(text, "Error loading file list. connection refused");
    }

    #[test]
    fn status_is_colored_by_kind() {
        let surface = TerminalSurface::new(".", true);
        assert!(surface
            .format_status(&StatusMessage::failure("nope"))
            .starts_with(RED));
        assert!(surface
            .format_status(&StatusMessage::success("ok"))
            .starts_with(GREEN));
    }

    #[test]
    fn target_path_strips_directories() {
        let surface = TerminalSurface::new("/tmp/out", false);
        assert_eq!(
            surface.target_path("../../etc/passwd"),
            Some(PathBuf::from("/tmp/out/passwd"))
        );
        assert_eq!(surface.target_path(".."), None);
    }

    #[test]
    fn click_writes_blob_to_download_dir() {
        let dir = tempfile::tempdir().unwrap();
        let surface = TerminalSurface::new(dir.path(), false);
        let blobs = BlobStore::new();
        let url = blobs.create_object_url(b"%PDF-1.4".to_vec(), None);

        surface
            .click(&Anchor::hidden(url, "a.pdf"), &blobs)
            .unwrap();

        assert_eq!(std::fs::read(dir.path().join("a.pdf")).unwrap(), b"%PDF-1.4");
    }

    #[test]
    fn click_on_revoked_handle_fails() {
        let dir = tempfile::tempdir().unwrap();
        let surface = TerminalSurface::new(dir.path(), false);
        let blobs = BlobStore::new();
        let url = blobs.create_object_url(vec![1, 2, 3], None);
        blobs.revoke_object_url(&url);

        assert!(surface.click(&Anchor::hidden(url, "x.bin"), &blobs).is_err());
    }
}
