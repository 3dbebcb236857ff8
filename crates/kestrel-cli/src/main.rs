use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "kestrel")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "A CLI tool for enriching a people roster with public profile data",
    long_about = "Kestrel reads a CSV roster of people, locates each person's public \
                  profile through a browser-driven web search, scrapes their current \
                  title, employer, and headline, and writes the enriched roster back \
                  out as CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Enrich a CSV roster with public profile data
    Enrich {
        /// Path to the input roster CSV
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output CSV path (defaults to enriched_<timestamp>.csv)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Number of concurrent browser workers
        #[arg(long, default_value_t = 1)]
        workers: usize,

        /// Records per batch when sharding across workers
        #[arg(long, default_value_t = 100)]
        batch_size: usize,

        /// Only process the first N records
        #[arg(long, value_name = "N")]
        limit: Option<usize>,

        /// Politeness delay between records, in milliseconds
        #[arg(long, default_value_t = 2000)]
        delay_ms: u64,

        /// Path to the Chrome binary
        #[arg(long)]
        chrome_path: Option<PathBuf>,

        /// Base CDP port; worker i listens on base + i
        #[arg(long, default_value_t = 9222)]
        port_base: u16,

        /// Skip the interactive login check
        #[arg(long)]
        skip_login_check: bool,
    },

    /// Extract a single profile URL and print the result
    Profile {
        /// Public profile URL
        #[arg(value_name = "URL")]
        url: String,

        /// Output format (pretty, json)
        #[arg(short, long, default_value = "pretty")]
        format: String,

        /// Path to the Chrome binary
        #[arg(long)]
        chrome_path: Option<PathBuf>,

        /// CDP port for the launched Chrome
        #[arg(long, default_value_t = 9222)]
        port: u16,

        /// Use a throwaway browser profile
        #[arg(long)]
        temp_profile: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Execute the command
    match cli.command {
        Commands::Enrich {
            input,
            output,
            workers,
            batch_size,
            limit,
            delay_ms,
            chrome_path,
            port_base,
            skip_login_check,
        } => commands::enrich::execute(commands::enrich::EnrichOptions {
            input,
            output,
            workers,
            batch_size,
            limit,
            delay_ms,
            chrome_path,
            port_base,
            skip_login_check,
        }),
        Commands::Profile {
            url,
            format,
            chrome_path,
            port,
            temp_profile,
        } => commands::profile::execute(&url, &format, chrome_path, port, temp_profile),
        Commands::Completion { shell } => {
            commands::completion::execute(shell, &mut Cli::command())
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new(
            "kestrel_cli=debug,kestrel_core=debug,kestrel_extract=debug,kestrel_browser=debug",
        )
    } else {
        EnvFilter::new("kestrel_cli=info,kestrel_core=info,kestrel_extract=info,kestrel_browser=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
