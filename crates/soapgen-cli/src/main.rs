//! Soapgen CLI
//!
//! Generates SOAP client classes from service contract documents.

use clap::{Parser, Subcommand};
use soapgen_cli::commands::{generate, inspect};
use soapgen_cli::output::{resolve_color_choice, StyledOutput};
use soapgen_cli::{load_config, logging, ConfigOverrides};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "soapgen")]
#[command(about = "SOAP client class generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Color output: auto, always, never
    #[arg(long, global = true)]
    color: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the PHP client class for a contract
    Generate {
        /// Contract file (.toml or .json)
        contract: PathBuf,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        overrides: ConfigOverrides,
    },

    /// Summarize the generated class without rendering it
    Inspect {
        /// Contract file (.toml or .json)
        contract: PathBuf,
        #[command(flatten)]
        overrides: ConfigOverrides,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut out = StyledOutput::new(resolve_color_choice(cli.color.as_deref()));

    if let Err(e) = run(cli.command, &mut out) {
        out.status_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(command: Commands, out: &mut StyledOutput) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    match command {
        Commands::Generate {
            contract,
            output,
            overrides,
        } => {
            let config = load_config(&overrides, &cwd)?;
            generate::execute(&contract, &config, output.as_deref(), out)
        }

        Commands::Inspect {
            contract,
            overrides,
        } => {
            let config = load_config(&overrides, &cwd)?;
            inspect::execute(&contract, &config, out)
        }
    }
}
