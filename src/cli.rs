//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cat static site generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Site source directory (contains site.json and page sources)
    #[arg(short, long, default_value = "site")]
    pub site: PathBuf,

    /// Build output directory
    #[arg(short, long, default_value = "build")]
    pub output: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize the site source directory with starter files
    #[command(visible_alias = "e")]
    Init,

    /// Delete the output directory and rebuild the site from scratch
    #[command(visible_alias = "b")]
    Build {
        /// Name of the bundled theme style sheet to use
        #[arg(short, long, default_value = "default")]
        theme: String,
    },

    /// Delete the output directory
    #[command(visible_alias = "c")]
    Clean,

    /// Rebuild the site, then serve it over local HTTP until interrupted
    #[command(visible_alias = "s")]
    Serve {
        /// Name of the bundled theme style sheet to use
        #[arg(short, long, default_value = "default")]
        theme: String,

        /// Interface to bind on
        #[arg(short, long, default_value = "127.0.0.1")]
        interface: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_theme_default() {
        let cli = Cli::parse_from(["cat", "build"]);
        match cli.command {
            Some(Commands::Build { theme }) => assert_eq!(theme, "default"),
            other => panic!("expected build command, got {other:?}"),
        }
    }

    #[test]
    fn test_single_letter_aliases() {
        assert!(matches!(
            Cli::parse_from(["cat", "b"]).command,
            Some(Commands::Build { .. })
        ));
        assert!(matches!(
            Cli::parse_from(["cat", "c"]).command,
            Some(Commands::Clean)
        ));
        assert!(matches!(
            Cli::parse_from(["cat", "s"]).command,
            Some(Commands::Serve { .. })
        ));
        assert!(matches!(
            Cli::parse_from(["cat", "e"]).command,
            Some(Commands::Init)
        ));
    }

    #[test]
    fn test_custom_dirs() {
        let cli = Cli::parse_from(["cat", "--site", "docs", "--output", "out", "build"]);
        assert_eq!(cli.site, PathBuf::from("docs"));
        assert_eq!(cli.output, PathBuf::from("out"));
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["cat"]);
        assert!(cli.command.is_none());
    }
}
