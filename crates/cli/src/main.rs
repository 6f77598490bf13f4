//! LUMINA CLI - basket inspection and maintenance.
//!
//! Works on the same origin-scoped data directory as the storefront, so the
//! `LUMINA_*` environment variables (or `.env`) select which basket is used.
//!
//! # Usage
//!
//! ```bash
//! # List basket rows
//! lumina basket show
//!
//! # Add two Dusty Rose speakers
//! lumina basket add dusty-rose -q 2
//!
//! # Adjust or remove the first row
//! lumina basket increment 0
//! lumina basket decrement 0
//! lumina basket remove 0
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lumina")]
#[command(author, version, about = "LUMINA CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and edit the stored basket
    Basket {
        #[command(subcommand)]
        action: BasketAction,
    },
}

#[derive(Subcommand)]
enum BasketAction {
    /// Print every basket row
    Show,
    /// Add a colour, merging into an existing row
    Add {
        /// Colour id or label (`sage-green`, "Dusty Rose", ...)
        color: String,

        /// Number of speakers to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Add one to a row
    Increment {
        /// Row index as printed by `show`
        index: usize,
    },
    /// Take one from a row, removing it at quantity 1
    Decrement {
        /// Row index as printed by `show`
        index: usize,
    },
    /// Remove a row
    Remove {
        /// Row index as printed by `show`
        index: usize,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::basket::CommandError> {
    match cli.command {
        Commands::Basket { action } => {
            let mut basket = commands::basket::open()?;
            match action {
                BasketAction::Show => {}
                BasketAction::Add { color, quantity } => {
                    commands::basket::add(&mut basket, &color, quantity)?;
                }
                BasketAction::Increment { index } => {
                    basket.increment(index)?;
                }
                BasketAction::Decrement { index } => {
                    basket.decrement(index)?;
                }
                BasketAction::Remove { index } => {
                    basket.remove_at(index)?;
                }
            }
            commands::basket::show(&basket);
        }
    }
    Ok(())
}
