use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cofat")]
#[command(about = "Edit or delete a SharePoint news item from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Absolute SharePoint site URL (overrides SHAREPOINT_WEB_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub web_url: Option<String>,

    /// Bearer access token (overrides SHAREPOINT_ACCESS_TOKEN)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub access_token: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the item id and list name read from a page URL
    Params {
        /// Page URL carrying ActualiteId and CofatList
        page_url: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update the item's title and content, optionally replacing its attachment
    Edit {
        /// Page URL carrying ActualiteId and CofatList
        page_url: String,
        /// New title
        #[arg(long)]
        title: String,
        /// New content (`-` reads piped stdin)
        #[arg(long)]
        content: String,
        /// File to upload in place of the current attachments
        #[arg(long, value_name = "PATH")]
        attachment: Option<PathBuf>,
        /// Value written to CouleurTexte (overrides SHAREPOINT_TEXT_COLOR)
        #[arg(long, value_name = "VALUE")]
        text_color: Option<String>,
    },
    /// Delete the item
    Delete {
        /// Page URL carrying ActualiteId and CofatList
        page_url: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
