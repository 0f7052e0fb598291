pub mod browse;
pub mod config;
pub mod files;
pub mod logging;
pub mod terminal;
pub mod widget;

use anyhow::Context;
use config::{Cli, Command};
use files::FilterCriteria;
use std::sync::Arc;
use terminal::TerminalSurface;
use widget::FileBrowser;

/// Run one CLI invocation against the configured file service.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let surface = Arc::new(TerminalSurface::new(&cli.download_dir, !cli.no_color));
    let browser = FileBrowser::new(cli.service_config(), surface)
        .with_context(|| format!("Failed to set up client for {}", cli.server))?;
    log::debug!("run: server={} command={:?}", cli.server, cli.command);

    match cli.command {
        Command::Upload { path, content_type } => {
            browser.select_file(Some(path), content_type).await;
            browser.submit_upload().await.map_err(anyhow::Error::msg)
        }
        Command::List { name, type_query } => {
            browser
                .set_criteria(FilterCriteria::new(name, type_query))
                .await;
            browser.load_files().await.map_err(anyhow::Error::msg)
        }
        Command::Download { filename } => browser
            .download_file(&filename)
            .await
            .map_err(anyhow::Error::msg),
        Command::Browse => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            browse::run_browse(&browser, stdin)
                .await
                .context("Failed to read input")
        }
    }
}
