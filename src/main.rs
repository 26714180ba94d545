use clap::Parser;
use journo::application::JournalService;
use journo::cli::{format_outcome, Cli, Commands};
use journo::error::Result;
use journo::infrastructure::{Config, EntryStore};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Logs go to stderr so stdout only carries command output.
/// JOURNO_LOG takes an EnvFilter directive and overrides --verbose.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("JOURNO_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    // Dates are validated before the store is opened
    let command = match cli.command {
        Some(Commands::Config) => return show_config(),
        Some(command) => command.into_journal_command()?,
        None => None,
    };

    let root = Config::resolve_root()?;
    let config = Config::load_from_dir(&root)?;
    let store = EntryStore::open(&root, &config)?;
    let mut service = JournalService::new(store);

    match command {
        Some(command) => {
            let outcome = service.run(command)?;
            print!("{}", format_outcome(&outcome));
        }
        None => {
            println!("journo - Journaling app");
            println!("Use --help for usage information");
        }
    }

    // Saved on every invocation, including reads
    service.finish()
}

fn show_config() -> Result<()> {
    let root = Config::resolve_root()?;
    let config = Config::load_from_dir(&root)?;
    println!("root = {}", root.display());
    println!("snapshot = {}", config.snapshot_path(&root).display());
    println!("log = {}", config.log_path(&root).display());
    Ok(())
}

