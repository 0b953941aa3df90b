//! Command-line interface.

pub mod add;
pub mod completions;
pub mod get;
pub mod output;
pub mod session;
pub mod update;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::domain::{CreditCard, VaultToken};
use crate::error::Result;

/// Cardvault - store and retrieve cards in a remote credit-card vault.
#[derive(Parser)]
#[command(
    name = "cardvault",
    about = "Store and retrieve cards in a remote credit-card vault",
    version
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, env = "CARDVAULT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the outbound message instead of sending it
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Retrieve a stored card by token
    Get {
        /// Vault token returned when the card was added
        token: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Show the full card number
        #[arg(long)]
        reveal: bool,
    },

    /// Store a new card and print its token
    Add {
        #[command(flatten)]
        card: CardArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Overwrite the card stored under a token
    Update {
        /// Vault token of the stored card
        token: String,
        #[command(flatten)]
        card: CardArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Card fields shared by add and update.
#[derive(Args, Debug, Clone)]
pub struct CardArgs {
    /// Card account number
    #[arg(long)]
    pub number: String,
    /// Expiration month (1-12)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub month: u8,
    /// Expiration year (e.g. 2030)
    #[arg(long, value_parser = clap::value_parser!(u16).range(2000..=2099))]
    pub year: u16,
    /// Name as printed on the card
    #[arg(long)]
    pub name: String,
    /// Billing postal code
    #[arg(long)]
    pub postal_code: String,
}

impl CardArgs {
    pub fn to_card(&self) -> CreditCard {
        CreditCard::new(
            self.number.trim(),
            self.month,
            self.year,
            self.name.trim(),
            self.postal_code.trim(),
        )
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Parse a token argument.
fn parse_token(token: &str) -> Result<VaultToken> {
    Ok(VaultToken::new(token.trim())?)
}

/// Execute a CLI command.
///
/// Returns `Ok(false)` when the vault refused the request; the refusal has
/// already been reported to the user.
pub fn execute(cli: Cli) -> Result<bool> {
    use Command::*;

    let config = cli.config.as_deref();
    match cli.command {
        Get {
            token,
            json,
            reveal,
        } => get::execute(config, &parse_token(&token)?, cli.dry_run, json, reveal),
        Add { card, json } => add::execute(config, &card.to_card(), cli.dry_run, json),
        Update { token, card, json } => {
            let card = card.to_card().with_token(parse_token(&token)?);
            update::execute(config, &card, cli.dry_run, json)
        }
        Completions { shell } => completions::execute(shell).map(|()| true),
    }
}
