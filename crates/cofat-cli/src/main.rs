//! cofat CLI - Edit or delete a SharePoint news item from the terminal
//!
//! Stands in for the page's Edit/Delete buttons: the page URL supplies the
//! item id and list name, the site comes from configuration.

mod cli;
mod commands;
mod error;


use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::common::load_site_config;
use crate::commands::completions::run_completions;
use crate::commands::delete::run_delete;
use crate::commands::edit::{run_edit, EditArgs};
use crate::commands::params::run_params;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cofat=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Params { page_url, json } => run_params(&page_url, json)?,
        Commands::Edit {
            page_url,
            title,
            content,
            attachment,
            text_color,
        } => {
            let config = load_site_config(cli.web_url, cli.access_token, text_color)?;
            run_edit(
                &config,
                EditArgs {
                    page_url,
                    title,
                    content,
                    attachment,
                },
            )
            .await?;
        }
        Commands::Delete { page_url, yes } => {
            let config = load_site_config(cli.web_url, cli.access_token, None)?;
            run_delete(&config, &page_url, yes).await?;
        }
        Commands::Completions { shell, output } => {
            run_completions(shell, output.as_deref())?;
        }
    }

    Ok(())
}
