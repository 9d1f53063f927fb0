use crate::config::DEFAULT_ARTIFACT_URL;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "respira")]
#[command(author, version, about = "Asthma risk prediction form and API")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the prediction server with the web form
    Serve {
        /// Listen port
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Listen address
        #[arg(short, long, default_value = "127.0.0.1")]
        address: String,

        /// Remote URL the model artifact is fetched from on first run
        #[arg(long, default_value = DEFAULT_ARTIFACT_URL)]
        model_url: String,

        /// Local artifact file; skips the download entirely
        #[arg(long)]
        model_path: Option<PathBuf>,

        /// Cache directory for downloaded artifacts
        #[arg(long)]
        cache_dir: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Download the model artifact into the cache without starting the server
    FetchModel {
        /// Remote URL the model artifact is fetched from
        #[arg(long, default_value = DEFAULT_ARTIFACT_URL)]
        model_url: String,

        /// Cache directory for downloaded artifacts
        #[arg(long)]
        cache_dir: Option<PathBuf>,

        /// Re-download even if a cached artifact exists
        #[arg(short, long)]
        force: bool,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}
