//! Trellis command line interface.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "trellis", about = "Trellis component markup toolchain", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the server-side class for a component markup file
    Generate {
        /// Component markup file; the file stem becomes the component name
        input: PathBuf,
        /// Namespace the component is defined under
        #[arg(long)]
        namespace: String,
        /// Directory the generated class is written to
        #[arg(long, default_value = "generated")]
        out: PathBuf,
    },
    /// Parse a component markup file and print its descriptor as JSON
    Describe {
        /// Component markup file; the file stem becomes the component name
        input: PathBuf,
        /// Namespace the component is defined under
        #[arg(long)]
        namespace: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Command::Generate {
            input,
            namespace,
            out,
        } => {
            let path = trellis_codegen::generate_class_from_markup(&input, &namespace, &out)?;
            println!("{}", path.display());
        }
        Command::Describe { input, namespace } => {
            let descriptor = trellis_codegen::parse_markup_file(&input, &namespace)?;
            println!("{}", serde_json::to_string_pretty(&descriptor)?);
        }
    }
    Ok(())
}
