use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cardz", bin_name = "cardz", version)]
#[command(about = "Enter, preview and keep payment-card details", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding saved cards and config
    #[arg(long, global = true, env = "CARDZ_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a new card. Each field is filtered as if typed into the form.
    #[command(alias = "new")]
    Add {
        /// Card number (non-digits are dropped, capped at 16 digits)
        #[arg(long, default_value = "")]
        number: String,

        /// Card holder name (letters and spaces, uppercased)
        #[arg(long, default_value = "")]
        name: String,

        /// Expiry as MMYY or MM/YY
        #[arg(long, default_value = "")]
        expiry: String,

        /// CVV (up to 3 digits)
        #[arg(long, default_value = "")]
        cvv: String,

        /// Show the card preview without saving
        #[arg(long)]
        dry_run: bool,
    },

    /// List saved cards
    #[command(alias = "ls")]
    List,

    /// Show one card focused in the carousel
    #[command(alias = "v")]
    View {
        /// Index of the card (e.g. 1)
        index: usize,
    },

    /// Delete a saved card
    #[command(alias = "rm")]
    Remove {
        /// Index of the card (e.g. 1)
        index: usize,
    },

    /// Detect the brand of a card number
    Brand { number: String },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., mask-char)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print the path of the saved-cards file
    Path,
}
