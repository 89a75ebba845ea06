// Desktop tooling crate: unwrap/expect/panic acceptable in tests and setup.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod build;
mod detect;
mod input;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stackfit")]
#[command(about = "Infer stack layouts from design exports", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the layout tree of a design document
    Build {
        /// Design JSON file (node, file export or node-query response)
        file: PathBuf,
        /// Lay out only the subtree rooted at this node id
        #[arg(long)]
        node: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = build::Format::Outline)]
        format: build::Format,
        #[command(flatten)]
        config: input::ConfigArgs,
    },
    /// Report whether a node reads as a header/body/footer screen
    Detect {
        /// Design JSON file
        file: PathBuf,
        /// Node to test; defaults to the document root
        #[arg(long)]
        node: Option<String>,
        #[command(flatten)]
        config: input::ConfigArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Build {
            file,
            node,
            format,
            config,
        } => build::run(&file, node.as_deref(), format, &config),
        Commands::Detect { file, node, config } => detect::run(&file, node.as_deref(), &config),
    }
}
