//! chainconf: resolve deployment network configuration from the environment

mod commands;
mod logging;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use commands::{EnvSource, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chainconf")]
#[command(about = "Resolve deployment network configuration from the environment")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Manifest file (TOML or JSON); built-in networks when omitted
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Dotenv file to merge instead of ./.env
    #[arg(long, conflicts_with = "no_dotenv")]
    env_file: Option<PathBuf>,

    /// Do not read ./.env
    #[arg(long)]
    no_dotenv: bool,
}

impl SourceArgs {
    fn env_source(&self) -> EnvSource {
        EnvSource {
            env_file: self.env_file.clone(),
            no_dotenv: self.no_dotenv,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved framework configuration
    Resolve {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List networks and whether they are configured
    Networks {
        #[command(flatten)]
        source: SourceArgs,

        /// Only show these networks (repeatable; preset aliases accepted)
        #[arg(short, long = "network")]
        networks: Vec<String>,
    },
    /// Write the built-in manifest to a file
    Init {
        #[arg(short, long, default_value = chainconf_config::utils::MANIFEST_FILE)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Resolve {
            source,
            format,
            output,
        } => {
            let project =
                commands::load_project(source.manifest.as_deref(), &source.env_source()).await?;
            let rendered = commands::render(&project, format)?;
            match output {
                Some(path) => tokio::fs::write(&path, rendered)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => println!("{}", rendered),
            }
        }
        Commands::Networks { source, networks } => {
            let project =
                commands::load_project(source.manifest.as_deref(), &source.env_source()).await?;
            let profiles = commands::select_networks(&project, &networks)?;
            print!("{}", commands::network_table(&profiles));
        }
        Commands::Init { path, force } => {
            commands::init(&path, force).await?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}
