use crate::config::{DEFAULT_COLLECTION_PATH, DEFAULT_OUTPUT_DIR};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "postwright")]
#[command(version)]
#[command(about = "Generate Playwright API tests from a Postman collection", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Generation arguments used when no subcommand is given
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one Playwright test file per request
    Generate(GenerateArgs),

    /// Print the folder and request tree of a collection
    List {
        /// Path to the Postman collection
        #[arg(default_value = DEFAULT_COLLECTION_PATH)]
        collection: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the Postman collection
    #[arg(default_value = DEFAULT_COLLECTION_PATH)]
    pub collection: PathBuf,

    /// Flat JSON variables file (defaults to ENDPOINT / ACCESS_TOKEN from the environment)
    pub variables: Option<PathBuf>,

    /// Directory the generated tests are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Render everything but write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Number of worker threads used to render and write files
    #[arg(short, long)]
    pub jobs: Option<usize>,
}
