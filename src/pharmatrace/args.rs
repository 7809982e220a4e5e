use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pharmatrace")]
#[command(about = "Pharmaceutical supply-chain tracing over a remote ledger", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory for config and the local fallback store
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Override the ledger service URL from the config
    #[arg(long, global = true)]
    pub ledger_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the product catalog with trace info
    #[command(alias = "ls")]
    Products,

    /// Register a new product
    AddProduct {
        /// Product name
        name: String,
        /// Unit price
        price: String,
        /// Quantity in the batch
        qty: String,
        /// Description
        desc: String,
        /// Image filename
        #[arg(default_value = "generic_placeholder.svg")]
        image: String,
    },

    /// Record a tracing event against a product
    Trace {
        /// Product name
        name: String,
        /// Event type (e.g. Manufactured, Shipped, Received)
        event_type: String,
        /// Event status (e.g. Completed, In Progress)
        status: String,

        /// Location or facility
        #[arg(long)]
        location: Option<String>,

        /// Responsible person
        #[arg(long)]
        person: Option<String>,

        /// Additional notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Store a signup record
    Register {
        username: String,
        password: String,
        /// Contact number
        #[arg(long, default_value = "")]
        contact: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        address: String,
        /// Full display name (defaults to the username)
        #[arg(long)]
        full_name: Option<String>,
    },

    /// Populate the local fallback store with the sample catalog
    Seed,

    /// Show or set configuration values
    Config {
        /// Configuration key (ledger-url, timeout-secs, data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
