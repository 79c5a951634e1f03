//! Command-line interface definition using clap
//!
//! Without a subcommand the interactive console starts. Subcommands run one
//! operation headless against the same history.

use crate::history::FilterMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// =============================================================================
// CLI Definition
// =============================================================================

/// API call inspector with shape-aware views and persistent history
#[derive(Parser, Debug, Default)]
#[command(name = "call-inspector")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file (default: config.toml next to the executable)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the persisted history (overrides config)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Base URL for this session (overrides the saved one, not persisted)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Origin stripped from URLs when no base URL is set (overrides config)
    #[arg(long, value_name = "URL")]
    pub origin: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Headless operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Perform one API call, record it, and print its rendered view
    Call {
        /// HTTP verb (GET, POST, ...)
        method: String,

        /// Path relative to the base URL, or an absolute URL
        url: String,

        /// JSON request body
        #[arg(long, value_name = "JSON")]
        body: Option<String>,

        /// Print the highlighted raw payload instead of the dedicated view
        #[arg(long)]
        raw: bool,
    },

    /// List persisted entries, newest first
    History {
        /// Outcome filter: all, success or error
        #[arg(long, default_value = "all")]
        filter: FilterMode,
    },

    /// Print one entry as JSON
    Show { id: String },

    /// Delete one entry
    Delete { id: String },

    /// Wipe the persisted history
    Reset {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },

    /// Show or set the saved base URL
    BaseUrl { url: Option<String> },
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["call-inspector"]);
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["call-inspector", "-v"]);
        assert!(cli.verbose);

        let cli = Cli::parse_from(["call-inspector", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_overrides() {
        let cli = Cli::parse_from([
            "call-inspector",
            "--data-dir",
            "/tmp/h",
            "--base-url",
            "http://api.test",
        ]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/h")));
        assert_eq!(cli.base_url.as_deref(), Some("http://api.test"));
    }

    #[test]
    fn test_cli_parse_call() {
        let cli = Cli::parse_from([
            "call-inspector",
            "call",
            "POST",
            "/boards",
            "--body",
            "{\"name\":\"x\"}",
        ]);
        match cli.command {
            Some(Command::Call {
                method, url, body, raw,
            }) => {
                assert_eq!(method, "POST");
                assert_eq!(url, "/boards");
                assert_eq!(body.as_deref(), Some("{\"name\":\"x\"}"));
                assert!(!raw);
            }
            _ => panic!("Expected Call command"),
        }
    }

    #[test]
    fn test_cli_parse_history_filter() {
        let cli = Cli::parse_from(["call-inspector", "history", "--filter", "error"]);
        assert!(matches!(
            cli.command,
            Some(Command::History {
                filter: FilterMode::Error
            })
        ));
        assert!(Cli::try_parse_from(["call-inspector", "history", "--filter", "nope"]).is_err());
    }

    #[test]
    fn test_cli_parse_reset() {
        let cli = Cli::parse_from(["call-inspector", "reset"]);
        assert!(matches!(cli.command, Some(Command::Reset { yes: false })));
    }
}
