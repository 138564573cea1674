#![forbid(unsafe_code)]
//! Carve Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use carve::commands::{
    execute_audit, execute_classify, execute_extract, execute_init, execute_quality,
    execute_scan, AuditOptions, ClassifyOptions, ExtractOptions, InitOptions, QualityOptions,
    ScanOptions,
};
use carve::config::CONFIG_FILE;
use carve::Config;

#[derive(Parser)]
#[command(name = "carve")]
#[command(about = "Carve reusable components out of generated UI templates")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Default template style for extraction
        #[arg(long)]
        style: Option<String>,

        /// Minimum quality score (0-100)
        #[arg(long)]
        min_score: Option<u32>,
    },

    /// List component declarations in a template
    Scan {
        /// Template file
        file: PathBuf,

        /// Also list declarations not judged reusable
        #[arg(short, long)]
        all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract one component as a standalone unit
    Extract {
        /// Template file
        file: PathBuf,

        /// Component name
        #[arg(short, long)]
        name: String,

        /// First line of a manual selection (1-indexed)
        #[arg(long, requires = "end")]
        start: Option<usize>,

        /// Last line of a manual selection (inclusive)
        #[arg(long, requires = "start")]
        end: Option<usize>,

        /// Template style
        #[arg(long)]
        style: Option<String>,

        /// Marketplace category
        #[arg(long)]
        category: Option<String>,

        /// Write the unit as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify a template or one component in it
    Classify {
        /// Template file
        file: PathBuf,

        /// Component name; classifies the whole file when omitted
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Score a template for production readiness
    Quality {
        /// Template file
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Report title
        #[arg(long)]
        title: Option<String>,
    },

    /// Score and scan every template in a directory
    Audit {
        /// Root directory
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Write the report as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "carve=debug" } else { "carve=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Load config
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Init { force, style, min_score } => {
            let options = InitOptions {
                path: cli.config,
                force,
                style,
                min_score,
            };
            execute_init(options)?;
        }

        Commands::Scan { file, all, json } => {
            execute_scan(ScanOptions { file, all, json })?;
        }

        Commands::Extract { file, name, start, end, style, category, output } => {
            let options = ExtractOptions {
                file,
                name,
                start,
                end,
                style,
                category,
                output,
            };
            execute_extract(options, &config)?;
        }

        Commands::Classify { file, name } => {
            execute_classify(ClassifyOptions { file, name })?;
        }

        Commands::Quality { file, json, title } => {
            let options = QualityOptions { file, json, title };
            if !execute_quality(options, &config)? {
                std::process::exit(1);
            }
        }

        Commands::Audit { root, output } => {
            execute_audit(AuditOptions { root, output }, config)?;
        }
    }

    Ok(())
}
