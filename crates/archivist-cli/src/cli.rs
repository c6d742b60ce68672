use std::path::PathBuf;

use archivist_types::{Identity, StorageIntegrity};
use clap::{ArgGroup, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "archivist",
    about = "Archivist ledger client: subjects, assets, events and locations",
    version
)]
#[command(group(
    ArgGroup::new("security")
        .required(true)
        .args(["auth_token", "clientcert"])
))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print verbose debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Location of Archivist service [default: https://rkvst.poc.jitsuin.io]
    #[arg(short, long)]
    pub url: Option<String>,

    /// Assets will be created on the ledger or on tenant storage
    /// (LEDGER or TENANT_STORAGE)
    #[arg(short = 'i', long, default_value = "TENANT_STORAGE")]
    pub storage_integrity: StorageIntegrity,

    /// FILE containing API authentication token (e.g. .auth_token)
    #[arg(short = 't', long = "auth-token", value_name = "FILE")]
    pub auth_token: Option<PathBuf>,

    /// Name of TLS client cert (.key and .pem with matching name must be in
    /// current directory)
    #[arg(short = 'c', long = "clientcert", value_name = "NAME")]
    pub clientcert: Option<String>,

    /// TOML file with client settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage subjects (other parties sharing assets)
    #[command(subcommand)]
    Subjects(SubjectsCommand),
    /// Create and inspect assets
    #[command(subcommand)]
    Assets(AssetsCommand),
    /// Inspect events recorded against assets
    #[command(subcommand)]
    Events(EventsCommand),
    /// Create and inspect locations
    #[command(subcommand)]
    Locations(LocationsCommand),
}

#[derive(Subcommand)]
pub enum SubjectsCommand {
    Create(SubjectCreateArgs),
    Read { identity: Identity },
    Update(SubjectUpdateArgs),
    Delete { identity: Identity },
    List(DisplayNameArgs),
    Count(DisplayNameArgs),
}

#[derive(Args)]
pub struct SubjectCreateArgs {
    pub display_name: String,
    #[arg(long = "wallet-pub-key")]
    pub wallet_pub_keys: Vec<String>,
    #[arg(long = "tessera-pub-key")]
    pub tessera_pub_keys: Vec<String>,
}

#[derive(Args)]
pub struct SubjectUpdateArgs {
    pub identity: Identity,
    #[arg(long)]
    pub display_name: Option<String>,
    #[arg(long = "wallet-pub-key")]
    pub wallet_pub_keys: Vec<String>,
    #[arg(long = "tessera-pub-key")]
    pub tessera_pub_keys: Vec<String>,
}

#[derive(Args)]
pub struct DisplayNameArgs {
    #[arg(long)]
    pub display_name: Option<String>,
}

#[derive(Subcommand)]
pub enum AssetsCommand {
    Create(AssetCreateArgs),
    Read { identity: Identity },
    List(AttributeArgs),
    Count(AttributeArgs),
}

#[derive(Args)]
pub struct AssetCreateArgs {
    #[arg(long = "behaviour", default_values = ["RecordEvidence", "Attachments"])]
    pub behaviours: Vec<String>,
    #[arg(long = "attr", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub attributes: Vec<(String, String)>,
    /// Wait until the asset is confirmed
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Args)]
pub struct AttributeArgs {
    #[arg(long = "attr", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub attributes: Vec<(String, String)>,
}

#[derive(Subcommand)]
pub enum EventsCommand {
    List(EventFilterArgs),
    Count(EventFilterArgs),
}

#[derive(Args)]
pub struct EventFilterArgs {
    /// Restrict to one asset; all assets otherwise
    #[arg(long)]
    pub asset: Option<Identity>,
    #[arg(long = "attr", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub event_attributes: Vec<(String, String)>,
}

#[derive(Subcommand)]
pub enum LocationsCommand {
    Create(LocationCreateArgs),
    Read { identity: Identity },
    List(DisplayNameArgs),
    Count(DisplayNameArgs),
}

#[derive(Args)]
pub struct LocationCreateArgs {
    pub display_name: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, requires = "longitude", allow_negative_numbers = true)]
    pub latitude: Option<f64>,
    #[arg(long, requires = "latitude", allow_negative_numbers = true)]
    pub longitude: Option<f64>,
    #[arg(long = "attr", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub attributes: Vec<(String, String)>,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got {s:?}")),
    }
}
