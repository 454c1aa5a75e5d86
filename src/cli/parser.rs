use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for taxiledger
#[derive(Parser)]
#[command(
    name = "taxiledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Daily taxi ledger: each driver's output, one shared daily expense, per-day totals",
    long_about = None
)]
pub struct Cli {
    /// Override the store path (.csv sheet, or .sqlite/.db database)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty store
    Init,

    /// Show, check or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report fields missing from the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Record or update one day
    Add {
        /// Date of the day (YYYY-MM-DD); today if omitted
        date: Option<String>,

        /// Driver output as DRIVER=AMOUNT (repeatable); missing drivers count 0
        #[arg(long = "amount", short = 'a', value_name = "DRIVER=AMOUNT")]
        amounts: Vec<String>,

        /// The day's single shared expense
        #[arg(long = "expense", short = 'e', value_name = "AMOUNT")]
        expense: Option<String>,

        /// Note for the day
        #[arg(long = "note", short = 'n')]
        note: Option<String>,
    },

    /// Show the daily summary (most recent first) or the stored records
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (START:END)"
        )]
        range: Option<String>,

        #[arg(long = "asc", help = "Oldest day first")]
        asc: bool,

        #[arg(long = "records", help = "Show the raw stored rows instead of the summary")]
        records: bool,
    },

    /// Export the daily summary
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
