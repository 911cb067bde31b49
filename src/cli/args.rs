use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::settings::ProviderId;

#[derive(Parser, Debug)]
#[command(name = "ultima")]
#[command(about = "Multi-key AI translation CLI for Gemini and OpenRouter")]
#[command(version)]
pub struct Args {
    /// File to translate (reads from stdin if neither a file nor --text is given)
    pub file: Option<PathBuf>,

    /// Text to translate
    #[arg(short = 'x', long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Source language code, or `auto` to detect it
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language code (ISO 639-1, e.g., fa, en, de)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Translation tone (e.g., neutral, formal, casual)
    #[arg(long)]
    pub tone: Option<String>,

    /// Provider to translate with (gemini, openrouter)
    #[arg(short = 'p', long)]
    pub provider: Option<ProviderId>,

    /// Suppress notices and progress output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Show debug logs on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactively edit provider, model, languages and tone
    Configure,
    /// Set the active provider
    Use {
        /// Provider to activate (gemini, openrouter)
        provider: ProviderId,
    },
    /// Manage API keys (order is failover priority)
    Keys {
        #[command(subcommand)]
        command: KeysCommand,
    },
    /// Manage the model catalog and selection
    Models {
        #[command(subcommand)]
        command: ModelsCommand,
    },
    /// Show or manage translation history
    History {
        #[command(subcommand)]
        command: Option<HistoryCommand>,
    },
    /// List supported language codes
    Languages,
    /// Swap source and target languages
    Swap,
    /// Show current settings and the last translation
    Show,
    /// Clear the last source text and hide its result
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum KeysCommand {
    /// List key slots (masked)
    List {
        /// Provider (defaults to the active one)
        provider: Option<ProviderId>,
    },
    /// Append a key with the lowest priority
    Add {
        provider: ProviderId,
        key: String,
    },
    /// Remove a key slot by its number as shown in `keys list`
    Remove {
        provider: ProviderId,
        index: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum ModelsCommand {
    /// List the cached model catalog
    List {
        /// Provider (defaults to the active one)
        provider: Option<ProviderId>,
    },
    /// Fetch the model catalog from the provider
    Refresh {
        /// Provider (defaults to the active one)
        provider: Option<ProviderId>,
    },
    /// Select the model used for translation
    Select {
        provider: ProviderId,
        /// Model id (e.g., gemini-2.0-flash)
        model: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// List entries, newest first
    List,
    /// Delete one entry by id
    Remove { id: i64 },
    /// Delete all entries
    Clear,
    /// Bring an entry back as the current translation
    Restore { id: i64 },
}
