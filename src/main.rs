use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use groupsplit::cli::{
    handle_balance_command, handle_expense_command, handle_group_command, handle_reset_command,
    handle_user_command,
};
use groupsplit::config::{paths::SplitPaths, settings::Settings};
use groupsplit::state::{AppState, Store};
use groupsplit::storage::{JsonFileStore, Persistence};

#[derive(Parser)]
#[command(
    name = "groupsplit",
    version,
    about = "Split shared expenses with groups of friends",
    long_about = "groupsplit keeps track of who paid for what in a group and \
                  works out who owes whom, from the command line."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Group management commands
    #[command(subcommand)]
    Group(groupsplit::cli::GroupCommands),

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(groupsplit::cli::ExpenseCommands),

    /// Show balances for a group, or your total across all groups
    Balance {
        /// Group name or ID
        group: Option<String>,
    },

    /// Current user commands
    #[command(subcommand)]
    User(groupsplit::cli::UserCommands),

    /// Delete all groups and expenses
    Reset {
        /// Confirm the reset
        #[arg(long)]
        force: bool,
        /// Also remove the saved state file
        #[arg(long)]
        purge: bool,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SplitPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(cli.verbose, &settings);
    debug!(base_dir = %paths.base_dir().display(), "paths resolved");

    // Load the saved state
    let mut file_store = JsonFileStore::from_paths(&paths);
    let state = file_store.load_or_default()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing groupsplit at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            if !paths.is_initialized() {
                settings.save(&paths)?;
            }
            if !file_store.exists() {
                file_store.save(&state)?;
            }
            println!("Initialization complete!");
            println!();
            println!("Signed in as: {}", state.current_user().name);
            println!("Run 'groupsplit group create <name>' to start a group.");
        }
        Some(Commands::Config) => print_config(&paths, &settings, &state),
        Some(command) => {
            let mut store = Store::new(state, file_store);
            match command {
                Commands::Group(cmd) => handle_group_command(&mut store, &settings, cmd)?,
                Commands::Expense(cmd) => handle_expense_command(&mut store, &settings, cmd)?,
                Commands::Balance { group } => handle_balance_command(&store, &settings, group)?,
                Commands::User(cmd) => handle_user_command(&mut store, cmd)?,
                Commands::Reset { force, purge } => {
                    handle_reset_command(&mut store, force, purge)?
                }
                Commands::Init | Commands::Config => {}
            }
        }
        None => {
            println!("groupsplit - Split shared expenses with your groups");
            println!();
            println!("Run 'groupsplit --help' for usage information.");
        }
    }

    Ok(())
}

/// RUST_LOG wins, then -v flags, then the configured level
fn init_logging(verbose: u8, settings: &Settings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match verbose {
            0 => settings.log_level.as_str(),
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::new(level)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_config(paths: &SplitPaths, settings: &Settings, state: &AppState) {
    println!("groupsplit Configuration");
    println!("========================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("State file:     {}", paths.state_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:  {}", settings.currency_symbol);
    println!("  Date format:      {}", settings.date_format);
    println!("  Default category: {}", settings.default_category);
    println!("  Log level:        {}", settings.log_level);
    println!();
    println!("Current user: {} ({})", state.current_user().name, state.current_user().id);
    println!("Groups:       {}", state.groups().len());
}
