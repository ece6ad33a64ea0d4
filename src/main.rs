//! cat - A tiny static site generator for Markdown sites.

mod build;
mod cli;
mod config;
mod init;
mod links;
pub mod logger;
mod render;
mod serve;

use anyhow::Result;
use build::{build_site, clean_site};
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use config::Site;
use init::init_site;
use serve::serve_site;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Init => init_site(&cli.site),
        Commands::Build { theme } => {
            let site = Site::load_default(&cli.site)?;
            build_site(&site, &cli.site, &cli.output, theme)?;
            log!("build"; "site built at {}", cli.output.display());
            Ok(())
        }
        Commands::Clean => {
            clean_site(&cli.output)?;
            log!("clean"; "site cleaned");
            Ok(())
        }
        Commands::Serve {
            theme,
            interface,
            port,
        } => {
            let site = Site::load_default(&cli.site)?;
            build_site(&site, &cli.site, &cli.output, theme)?;
            serve_site(&cli.output, interface, *port)
        }
    }
}
