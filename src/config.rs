//! Command line and environment configuration

use crate::files::{ServiceConfig, DEFAULT_SERVER_URL};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "filedrop", about = "Upload, browse and download files on a file service")]
pub struct Cli {
    /// Base URL of the file service.
    #[arg(long, env = "FILEDROP_SERVER", default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Directory downloads are saved into.
    #[arg(long, env = "FILEDROP_DOWNLOAD_DIR", default_value = ".")]
    pub download_dir: PathBuf,

    /// Delay filter-triggered reloads by this many milliseconds (0 = off).
    #[arg(long, env = "FILEDROP_DEBOUNCE_MS", default_value_t = 0)]
    pub debounce_ms: u64,

    /// Percent-encode filenames in download URLs.
    #[arg(long = "encode-names", env = "FILEDROP_ENCODE_NAMES")]
    pub encode_names: bool,

    /// Disable colored status output.
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Upload one file.
    Upload {
        path: PathBuf,
        /// Content type to send instead of the one derived from the extension.
        #[arg(long)]
        content_type: Option<String>,
    },
    /// List stored files, optionally filtered.
    List {
        /// Case-insensitive filename substring.
        #[arg(long, default_value = "")]
        name: String,
        /// Case-insensitive content type substring (e.g. "pdf", "image").
        #[arg(long = "type", default_value = "")]
        type_query: String,
    },
    /// Download one file by name.
    Download { filename: String },
    /// Interactive browser reading commands from stdin.
    Browse,
}

impl Cli {
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            base_url: self.server.clone(),
            encode_download_names: self.encode_names,
            debounce_ms: self.debounce_ms,
        }
    }
}
