use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// `vector` - turn campaign inputs into an AI-drafted marketing strategy.
#[derive(Parser, Debug)]
#[command(name = "vector")]
#[command(version)]
#[command(about = "Lead-generation strategy wizard backed by a remote strategy agent.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive four-step campaign wizard (default)
    Run,

    /// Submit a saved campaign draft without prompting
    Submit {
        /// JSON file holding the campaign draft
        #[arg(long)]
        draft: PathBuf,

        /// Also write the printable report to this Markdown file
        #[arg(long)]
        markdown: Option<PathBuf>,

        /// Also write the agent's raw response to this JSON file
        #[arg(long)]
        raw: Option<PathBuf>,
    },

    /// Render a saved agent response (JSON or plain text) offline
    Render {
        /// File holding the raw response
        #[arg(long)]
        input: PathBuf,

        /// Campaign draft the response was generated for (used by the plain-text view)
        #[arg(long)]
        draft: Option<PathBuf>,

        /// Write the printable report to this Markdown file
        #[arg(long)]
        markdown: Option<PathBuf>,
    },

    /// Show the config file location and effective settings
    Config,
}

impl Cli {
    pub fn command_or_default(self) -> Commands {
        self.command.unwrap_or(Commands::Run)
    }
}
