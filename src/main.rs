use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "souschef")]
#[command(about = "Recipe service with generated cooking instructions", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Config file (replaces ./souschef.toml)")]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Verbose output")]
    verbose: bool,

    #[arg(short, long, global = true, help = "Only show errors")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(long, help = "Bind host (overrides server.host)")]
        host: Option<String>,
        #[arg(short, long, help = "Bind port (overrides server.port)")]
        port: Option<u16>,
    },

    /// List loaded recipes
    Recipes {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Print one recipe as JSON
    Show {
        #[arg(help = "Recipe title (case-insensitive)")]
        name: String,
    },

    /// Generate instructions for a recipe and print them
    Instructions {
        #[arg(help = "Recipe title (case-insensitive)")]
        name: String,
        #[arg(long, help = "LLM provider: gemini, fake")]
        provider: Option<String>,
        #[arg(long, help = "Model name")]
        model: Option<String>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "toml",
            help = "Output format: toml, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mSousChef encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Serve { host, port } => {
            souschef::cli::commands::serve::run(config_path, host, port)?;
        }
        Commands::Recipes { format } => {
            souschef::cli::commands::recipes::run(config_path, &format)?;
        }
        Commands::Show { name } => {
            souschef::cli::commands::show::run(config_path, &name)?;
        }
        Commands::Instructions {
            name,
            provider,
            model,
        } => {
            souschef::cli::commands::instructions::run(config_path, &name, provider, model)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                souschef::cli::commands::config::show(config_path, &format)?;
            }
            ConfigAction::Path => {
                souschef::cli::commands::config::path(config_path)?;
            }
        },
    }

    Ok(())
}
