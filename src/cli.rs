use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "wilx-nano")]
#[command(version = "0.1.0")]
#[command(about = "A small full-screen terminal text editor")]
pub struct CliArgs {
    /// File to edit (created on first save if it does not exist)
    pub file: Option<PathBuf>,

    /// Show line numbers in a gutter
    #[arg(long, short = 'n')]
    pub line_numbers: bool,

    /// File that records every save (default ~/.wilx_history)
    #[arg(long, value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Do not record saves
    #[arg(long, conflicts_with = "history_file")]
    pub no_history: bool,

    /// Number of edits that can be undone
    #[arg(long, value_name = "N")]
    pub undo_limit: Option<usize>,

    /// Config file (default <config dir>/wilx/nano.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write log output to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let args = CliArgs::parse_from(["wilx-nano"]);
        assert!(args.file.is_none());
        assert!(!args.line_numbers);
        assert!(!args.no_history);
        assert!(args.undo_limit.is_none());
    }

    #[test]
    fn test_parse_all_flags() {
        let args = CliArgs::parse_from([
            "wilx-nano",
            "notes.txt",
            "--line-numbers",
            "--history-file",
            "/tmp/h",
            "--undo-limit",
            "12",
            "--config",
            "/tmp/c.toml",
            "--log-file",
            "/tmp/l.log",
        ]);
        assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
        assert!(args.line_numbers);
        assert_eq!(args.history_file, Some(PathBuf::from("/tmp/h")));
        assert_eq!(args.undo_limit, Some(12));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/l.log")));
    }

    #[test]
    fn test_short_line_numbers_flag() {
        let args = CliArgs::parse_from(["wilx-nano", "-n"]);
        assert!(args.line_numbers);
    }

    #[test]
    fn test_no_history_conflicts_with_history_file() {
        let result =
            CliArgs::try_parse_from(["wilx-nano", "--no-history", "--history-file", "/tmp/h"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_undo_limit_is_rejected() {
        assert!(CliArgs::try_parse_from(["wilx-nano", "--undo-limit", "lots"]).is_err());
    }
}
