//! paramdoc CLI - Parameter documentation and example payloads from a type schema
//!
//! Commands:
//! - `paramdoc params` - Print the documentation tree of a class
//! - `paramdoc example` - Print an example JSON payload for a class
//! - `paramdoc response` - Document a method return type
//! - `paramdoc check` - Validate a schema file

use clap::{Parser, Subcommand};
use paramdoc_core::LogLevel;
use paramdoc_logging::{DiagnosticCounts, init_logging};
use render::Format;
use std::path::PathBuf;

mod example;
mod params;
mod render;
mod response;
mod schema;
mod settings;
mod target;

#[derive(Parser)]
#[command(name = "paramdoc")]
#[command(author, version, about = "Parameter documentation and example payloads from a type schema", long_about = None)]
struct Cli {
    /// Path to paramdoc.toml (default: ./paramdoc.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off); overrides the config
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the documentation tree of a class
    Params {
        /// Schema file (.json or .toml)
        #[arg(short, long)]
        schema: PathBuf,

        /// Class name (qualified or simple)
        #[arg(short, long, conflicts_with = "ty", required_unless_present = "ty")]
        class: Option<String>,

        /// Generic class type, e.g. "Result<User>"
        #[arg(short = 't', long = "type", value_name = "EXPR")]
        ty: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Print an example JSON payload for a class
    Example {
        /// Schema file (.json or .toml)
        #[arg(short, long)]
        schema: PathBuf,

        /// Class name (qualified or simple)
        #[arg(short, long, conflicts_with = "ty", required_unless_present = "ty")]
        class: Option<String>,

        /// Generic class type, e.g. "Result<User>"
        #[arg(short = 't', long = "type", value_name = "EXPR")]
        ty: Option<String>,
    },

    /// Document a method return type
    Response {
        /// Schema file (.json or .toml)
        #[arg(short, long)]
        schema: PathBuf,

        /// Return type expression, e.g. "List<User>"
        #[arg(short = 't', long = "type", value_name = "EXPR")]
        ty: String,

        /// Print documentation rows instead of the example body
        #[arg(short, long)]
        params: bool,

        /// Output format for --params
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Validate a schema file
    Check {
        /// Schema file (.json or .toml)
        #[arg(short, long)]
        schema: PathBuf,

        /// Fail when class references do not resolve
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = settings::load(cli.config.as_deref())?;
    let level: LogLevel = cli
        .log_level
        .as_deref()
        .unwrap_or(&settings.log_level)
        .parse()?;
    init_logging(level);

    match cli.command {
        Commands::Params {
            schema,
            class,
            ty,
            format,
        } => {
            params::run(&schema, &settings, class.as_deref(), ty.as_deref(), format)?;
        }
        Commands::Example { schema, class, ty } => {
            example::run(&schema, &settings, class.as_deref(), ty.as_deref())?;
        }
        Commands::Response {
            schema,
            ty,
            params,
            format,
        } => {
            response::run(&schema, &settings, &ty, params.then_some(format))?;
        }
        Commands::Check { schema, strict } => {
            schema::check(&schema, &settings, strict)?;
        }
    }

    let diagnostics = DiagnosticCounts::global();
    if diagnostics.any() {
        eprintln!(
            "{} warning(s), {} error(s)",
            diagnostics.warnings(),
            diagnostics.errors()
        );
    }

    Ok(())
}
