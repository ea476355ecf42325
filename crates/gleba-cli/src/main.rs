mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "gleba",
    version,
    about = "Farm eligibility analysis for regenerative-carbon programs"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short = 'd', long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret a stored analysis response (GeoJSON FeatureCollection)
    Interpret {
        /// Path to the analysis response
        response_file: PathBuf,

        #[command(flatten)]
        area: AreaArgs,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show per-feature data-quality diagnostics
        #[arg(long)]
        verbose: bool,
    },
    /// Sum the area of a single category in an analysis response
    Resolve {
        /// Path to the analysis response
        response_file: PathBuf,

        /// Category key: deforestedareas, forestunion, wetlandsunion, eligibleareafeature
        #[arg(short, long)]
        category: String,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Measure a farm boundary and check it against the analysis size limit
    Area {
        /// Path to the boundary GeoJSON
        boundary_file: PathBuf,

        /// Custom JSON configuration file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Run a full eligibility check against a recorded analysis response
    Check {
        /// Path to the boundary GeoJSON
        boundary_file: PathBuf,

        /// Farm name sent with the analysis request
        #[arg(long)]
        farm_name: String,

        /// Country code to use instead of reverse geocoding
        #[arg(long)]
        country: String,

        /// Recorded analysis response to replay
        #[arg(long, value_name = "FILE")]
        response: PathBuf,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Render the eligibility report for a stored analysis response
    Report {
        /// Path to the analysis response
        response_file: PathBuf,

        /// Farm name printed in the report header
        #[arg(long)]
        farm_name: String,

        #[command(flatten)]
        area: AreaArgs,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Write the report to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Inspect and validate configurations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args)]
struct AreaArgs {
    /// Total uploaded boundary area in hectares
    #[arg(short, long = "total-area", value_name = "HA", conflicts_with = "boundary")]
    total_area: Option<f64>,

    /// Boundary GeoJSON to measure the total area from
    #[arg(short, long, value_name = "FILE")]
    boundary: Option<PathBuf>,
}

#[derive(clap::Args)]
struct SettingsArgs {
    /// Custom JSON configuration file (default: built-in preset)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Message language: en, pt-BR, es (default: from configuration)
    #[arg(short, long)]
    locale: Option<String>,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// List predefined configurations
    List,
    /// Print a predefined configuration as JSON
    Show {
        /// Preset name (e.g., "default")
        preset: String,
    },
    /// Print the configuration fields with descriptions
    Schema,
    /// Validate a custom configuration file
    Validate {
        /// Path to JSON configuration file
        file: PathBuf,
    },
}

fn init_logging(debug: bool) {
    let default_filter = if debug {
        "gleba_core=debug,gleba=debug,warn"
    } else {
        "gleba_core=warn,gleba=info,warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let result = match cli.command {
        Commands::Interpret {
            response_file,
            area,
            settings,
            output,
            verbose,
        } => commands::interpret::run(
            response_file,
            area.total_area,
            area.boundary,
            settings.config,
            settings.locale,
            &output,
            verbose,
        ),
        Commands::Resolve {
            response_file,
            category,
            settings,
            output,
        } => commands::resolve::run(
            response_file,
            &category,
            settings.config,
            settings.locale,
            &output,
        ),
        Commands::Area {
            boundary_file,
            config,
        } => commands::area::run(boundary_file, config),
        Commands::Check {
            boundary_file,
            farm_name,
            country,
            response,
            settings,
            output,
        } => commands::check::run(
            boundary_file,
            &farm_name,
            country,
            response,
            settings.config,
            settings.locale,
            &output,
        ),
        Commands::Report {
            response_file,
            farm_name,
            area,
            settings,
            out,
        } => commands::report::run(
            response_file,
            &farm_name,
            area.total_area,
            area.boundary,
            settings.config,
            settings.locale,
            out,
        ),
        Commands::Config { action } => match action {
            ConfigAction::List => commands::config::list(),
            ConfigAction::Show { preset } => commands::config::show(&preset),
            ConfigAction::Schema => commands::config::schema(),
            ConfigAction::Validate { file } => commands::config::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
