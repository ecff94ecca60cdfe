//! shipzone CLI - Command-line interface
//!
//! Commands:
//!   quote     - Price delivery for a destination and order
//!   resolve   - Show which zone a destination falls in
//!   regions   - List destination regions
//!   zones     - Print the zone table
//!   validate  - Check a catalog for inconsistencies
//!   catalog   - Export the active catalog
//!   schema    - Print JSON schemas
//!   init      - Create a .shipzone.yaml

mod cli;

use clap::{ArgAction, Parser, Subcommand};
use cli::util::{Context, ExportFormat, SchemaName};
use cli::*;
use shipzone::Result;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "shipzone", version, about = "Delivery fee and shipping zone resolution")]
#[command(
    after_help = "Examples:\n  shipzone quote --state Oyo --city Bodija --subtotal 25000 --items 2\n  shipzone resolve --state \"Lagos State\"\n  shipzone validate pricing/catalog.yaml --strict"
)]
struct Cli {
    /// Catalog file to use instead of the configured or built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// JSON output
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price delivery for a destination and order
    Quote {
        #[arg(long)]
        state: String,
        #[arg(long)]
        city: Option<String>,
        #[arg(long, default_value_t = 0.0)]
        subtotal: f64,
        #[arg(long, default_value_t = 0)]
        items: u32,
    },
    /// Show which zone a destination falls in
    Resolve {
        #[arg(long)]
        state: String,
        #[arg(long)]
        city: Option<String>,
    },
    /// List destination regions
    Regions,
    /// Print the zone table
    Zones,
    /// Check a catalog file (default: the active catalog)
    Validate {
        file: Option<PathBuf>,
        /// Treat warnings as errors
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Catalog operations
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Print the JSON schema of a file or output type
    Schema {
        #[arg(value_enum)]
        name: SchemaName,
    },
    /// Create a .shipzone.yaml in the current directory
    Init,
}

#[derive(Subcommand)]
enum CatalogCommand {
    /// Write the active catalog as YAML or JSON
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Yaml)]
        format: ExportFormat,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let (global_level, my_code_level) = match verbose {
        0 => (log::LevelFilter::Error, log::LevelFilter::Warn),
        1 => (log::LevelFilter::Warn, log::LevelFilter::Info),
        _ => (log::LevelFilter::Warn, log::LevelFilter::Debug),
    };

    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("shipzone"), my_code_level)
        .parse_default_env()
        .init();
}

fn run(args: Cli) -> Result<()> {
    let load = || Context::load(args.catalog.as_deref(), args.json);

    match &args.command {
        Commands::Quote {
            state,
            city,
            subtotal,
            items,
        } => cmd_quote(&load()?, state, city.as_deref(), *subtotal, *items),
        Commands::Resolve { state, city } => cmd_resolve(&load()?, state, city.as_deref()),
        Commands::Regions => cmd_regions(&load()?),
        Commands::Zones => cmd_zones(&load()?),
        Commands::Validate { file, strict } => {
            cmd_validate(file.as_deref(), args.catalog.as_deref(), args.json, *strict)
        }
        Commands::Catalog {
            command: CatalogCommand::Export { format, output },
        } => cmd_export(&load()?, *format, output),
        Commands::Schema { name } => cmd_schema(*name),
        Commands::Init => cmd_init(),
    }
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
