//! Interactive browse loop
//!
//! Each input line is one user action: typing in the name field, picking a
//! type, choosing a file, submitting the form or clicking a row.

use crate::files::TYPE_OPTIONS;
use crate::widget::{FileBrowser, RowId};
use log::debug;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const HELP: &str = "commands: name <text> | type <text> | types | select <path> [as <content-type>] | upload | get <row> | refresh | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Name(String),
    Type(String),
    Types,
    Select {
        path: PathBuf,
        content_type: Option<String>,
    },
    Upload,
    Get(RowId),
    Refresh,
    Help,
    Quit,
}

impl BrowseCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            // Clearing a field is `name` / `type` with nothing after it
            "name" => Ok(BrowseCommand::Name(rest.to_string())),
            "type" => Ok(BrowseCommand::Type(resolve_type_option(rest))),
            "types" => Ok(BrowseCommand::Types),
            "select" => {
                if rest.is_empty() {
                    return Err("select needs a path".to_string());
                }
                match rest.rsplit_once(" as ") {
                    Some((path, content_type)) => Ok(BrowseCommand::Select {
                        path: PathBuf::from(path.trim()),
                        content_type: Some(content_type.trim().to_string()),
                    }),
                    None => Ok(BrowseCommand::Select {
                        path: PathBuf::from(rest),
                        content_type: None,
                    }),
                }
            }
            "upload" => Ok(BrowseCommand::Upload),
            "get" => rest
                .parse::<usize>()
                .map(|n| BrowseCommand::Get(RowId(n)))
                .map_err(|_| format!("get needs a row number, got '{}'", rest)),
            "refresh" => Ok(BrowseCommand::Refresh),
            "help" | "?" => Ok(BrowseCommand::Help),
            "quit" | "exit" => Ok(BrowseCommand::Quit),
            other => Err(format!("unknown command '{}'", other)),
        }
    }
}

/// Map a selector label ("Images") to its query ("image"); anything else is
/// used as typed.
fn resolve_type_option(input: &str) -> String {
    TYPE_OPTIONS
        .iter()
        .find(|o| o.label.eq_ignore_ascii_case(input))
        .map(|o| o.query.to_string())
        .unwrap_or_else(|| input.to_string())
}

/// Run the browse loop until `quit` or end of input.
pub async fn run_browse<R>(browser: &FileBrowser, input: R) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    println!("{}", HELP);
    // Failures are already on screen; the loop keeps going.
    let _ = browser.load_files().await;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match BrowseCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        debug!("browse: {:?}", command);

        match command {
            BrowseCommand::Name(value) => {
                let _ = browser.on_name_input(&value).await;
            }
            BrowseCommand::Type(value) => {
                let _ = browser.on_type_change(&value).await;
            }
            BrowseCommand::Types => {
                for option in TYPE_OPTIONS {
                    println!("{:<8} {}", option.label, option.query);
                }
            }
            BrowseCommand::Select { path, content_type } => {
                println!("Selected {}", path.display());
                browser.select_file(Some(path), content_type).await;
            }
            BrowseCommand::Upload => {
                let _ = browser.submit_upload().await;
            }
            BrowseCommand::Get(row) => {
                let _ = browser.download_row(row).await;
            }
            BrowseCommand::Refresh => {
                let _ = browser.load_files().await;
            }
            BrowseCommand::Help => println!("{}", HELP),
            BrowseCommand::Quit => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_filter_commands() {
        assert_eq!(
            BrowseCommand::parse("name  report "),
            Ok(BrowseCommand::Name("report".into()))
        );
        assert_eq!(BrowseCommand::parse("name"), Ok(BrowseCommand::Name(String::new())));
        assert_eq!(
            BrowseCommand::parse("type Images"),
            Ok(BrowseCommand::Type("image".into()))
        );
        assert_eq!(
            BrowseCommand::parse("type application/pdf"),
            Ok(BrowseCommand::Type("application/pdf".into()))
        );
        assert_eq!(BrowseCommand::parse("type All"), Ok(BrowseCommand::Type(String::new())));
    }

    #[test]
    fn parse_select_with_and_without_content_type() {
        assert_eq!(
            BrowseCommand::parse("select my scans/a.bin as application/pdf"),
            Ok(BrowseCommand::Select {
                path: PathBuf::from("my scans/a.bin"),
                content_type: Some("application/pdf".into()),
            })
        );
        assert_eq!(
            BrowseCommand::parse("select notes.txt"),
            Ok(BrowseCommand::Select {
                path: PathBuf::from("notes.txt"),
                content_type: None,
            })
        );
        assert!(BrowseCommand::parse("select").is_err());
    }

    #[test]
    fn parse_row_clicks() {
        assert_eq!(BrowseCommand::parse("get 3"), Ok(BrowseCommand::Get(RowId(3))));
        assert!(BrowseCommand::parse("get three").is_err());
    }

    #[test]
    fn parse_misc() {
        assert_eq!(BrowseCommand::parse("upload"), Ok(BrowseCommand::Upload));
        assert_eq!(BrowseCommand::parse("refresh"), Ok(BrowseCommand::Refresh));
        assert_eq!(BrowseCommand::parse("?"), Ok(BrowseCommand::Help));
        assert_eq!(BrowseCommand::parse("exit"), Ok(BrowseCommand::Quit));
        assert!(BrowseCommand::parse("dance").is_err());
    }
}
