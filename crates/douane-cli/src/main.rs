mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "douane",
    version,
    about = "Classification douanière de descriptions de produits",
    long_about = "Douane parses a tariff-schedule reference document and classifies\n\
        free-text product descriptions into duty-rated tariff codes, ranking\n\
        candidates under the General Interpretive Rules (RGI).\n\n\
        Quick start:\n  \
        douane inspect --data-file tec.txt\n  \
        douane classify \"Ballon de football en cuir Adidas\"\n  \
        douane quality \"voiture electrique recente\""
)]
struct Cli {
    /// Enable verbose logging (set log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (default: ./douane.toml)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a product description into a tariff code
    ///
    /// Runs the full pipeline: ambiguity gate, feature extraction,
    /// candidate generation over the knowledge base and the reference
    /// document, multi-signal scoring with RGI adjustments, ranking.
    ///
    /// Examples:
    ///   douane classify "Voiture automobile Toyota"
    ///   douane classify "Ballon de football en cuir Adidas" --limit 5
    ///   douane classify "ordinateur portable Dell" --json
    Classify {
        /// Product description to classify
        query: String,

        /// Reference document path (overrides config)
        #[arg(long)]
        data_file: Option<String>,

        /// Maximum number of alternatives to display
        #[arg(long, default_value = "5")]
        limit: usize,

        /// Emit the full structured result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse the reference document and report what was extracted
    ///
    /// Shows section/chapter/subheading counts and any load fault. A
    /// missing or unreadable document is reported, not fatal.
    ///
    /// Example: douane inspect --data-file tec.txt
    Inspect {
        /// Reference document path (overrides config)
        #[arg(long)]
        data_file: Option<String>,
    },
    /// Report language quality for a text (advisory)
    ///
    /// Prints the recognized-vocabulary ratio and, for each unrecognized
    /// token, the closest vocabulary words.
    ///
    /// Example: douane quality "voitur electrique"
    Quality {
        /// Text to analyze
        text: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config_file = cli.config.as_deref().map(std::path::Path::new);

    match cli.command {
        Commands::Classify {
            query,
            data_file,
            limit,
            json,
        } => {
            commands::classify::run(&query, data_file.as_deref(), limit, json, config_file)?;
        }
        Commands::Inspect { data_file } => {
            commands::inspect::run(data_file.as_deref(), config_file)?;
        }
        Commands::Quality { text } => {
            commands::quality::run(&text);
        }
    }

    Ok(())
}
