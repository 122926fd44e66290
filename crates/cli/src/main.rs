//! justica - Command-line interface for the hero repository
//!
//! Usage:
//!   justica                          - Start interactive mode
//!   justica init [dir] [--memory]    - Write a config (and data file) into a directory
//!   justica register -a .. -d ..     - Register a hero
//!   justica list [-p n] [-r n]       - Show one page of heroes
//!   justica get <id>                 - Show one hero
//!   justica update <id> -a .. -d ..  - Replace a hero's fields
//!   justica delete <id>              - Delete a hero

use clap::{Parser, Subcommand};
use cli::commands::{
    DeleteCommand, GetCommand, InitCommand, ListCommand, RegisterCommand, UpdateCommand,
};
use cli::interactive::InteractiveCli;
use cli::store::StoreArgs;

#[derive(Parser)]
#[command(name = "justica")]
#[command(about = "CRUD da Justica - hero registry with paged listing")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    store: StoreArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a hero repository
    Init(InitCommand),
    /// Register a new hero
    Register(RegisterCommand),
    /// List one page of heroes
    List(ListCommand),
    /// Show a hero by id
    Get(GetCommand),
    /// Replace a hero's fields
    Update(UpdateCommand),
    /// Delete a hero by id
    Delete(DeleteCommand),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `list --json` stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut out = std::io::stdout();

    match cli.command {
        Some(Commands::Init(cmd)) => cmd.run(&mut out),
        Some(Commands::Register(cmd)) => cmd.run(&mut cli.store.open()?, &mut out),
        Some(Commands::List(cmd)) => cmd.run(&mut cli.store.open()?, &mut out),
        Some(Commands::Get(cmd)) => cmd.run(&mut cli.store.open()?, &mut out),
        Some(Commands::Update(cmd)) => cmd.run(&mut cli.store.open()?, &mut out),
        Some(Commands::Delete(cmd)) => cmd.run(&mut cli.store.open()?, &mut out),
        None => {
            // No subcommand - start interactive mode
            let mut interactive = InteractiveCli::new(cli.store.open()?);
            interactive.run()
        }
    }
}
