//! Stow CLI - entrypoint for the upload services
//!
//! Loads configuration from the environment, initializes the shared store
//! and storage client once, and exposes one subcommand per core operation.

mod context;

use clap::{Parser, Subcommand};
use context::AppContext;
use serde_json::Value;
use stow_blob::Blob;
use stow_core::{DatabaseSettings, StorageSettings};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "STOW_LOG_LEVEL", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue a read link for a user's resume
    DownloadLink {
        /// User identifier
        id: String,
    },
    /// Issue a write link for a user's resume
    UploadLink {
        /// User identifier
        id: String,
    },
    /// Blob store operations
    #[command(subcommand)]
    Blob(BlobCommands),
}

#[derive(Subcommand)]
enum BlobCommands {
    /// Fetch the blob with the given id
    Get { id: String },
    /// Create a blob; fails if the id already exists
    Create { id: String, data: String },
    /// Fully overwrite an existing blob
    Replace { id: String, data: String },
    /// Shallow-merge partial data into an existing blob
    Patch { id: String, data: String },
}

fn init_tracing(log_level: &str) {
    // If RUST_LOG is set, use it as-is; otherwise default to the workspace
    // crates at the requested level with noisy dependencies at warn
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .expect("Invalid RUST_LOG environment variable")
    } else {
        tracing_subscriber::EnvFilter::new(format!(
            "stow_cli={level},\
             stow_core={level},\
             stow_database={level},\
             stow_blob={level},\
             stow_resume={level},\
             aws_config=warn,\
             aws_sdk_s3=warn,\
             mongodb=warn,\
             hyper=warn,\
             rustls=warn",
            level = log_level
        ))
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn parse_data(data: &str) -> anyhow::Result<Value> {
    serde_json::from_str(data).map_err(|e| anyhow::anyhow!("invalid JSON data: {}", e))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level);

    let context =
        AppContext::initialize(StorageSettings::from_env(), DatabaseSettings::from_env()).await?;

    match cli.command {
        Commands::DownloadLink { id } => {
            let link = context.resumes.download_link(&id).await?;
            print_json(&link)?;
        }
        Commands::UploadLink { id } => {
            let link = context.resumes.upload_link(&id).await?;
            print_json(&link)?;
        }
        Commands::Blob(command) => match command {
            BlobCommands::Get { id } => {
                let blob = context.blobs.get(&id).await?;
                print_json(&blob)?;
            }
            BlobCommands::Create { id, data } => {
                context.blobs.create(Blob::new(id, parse_data(&data)?)).await?;
            }
            BlobCommands::Replace { id, data } => {
                context
                    .blobs
                    .replace(Blob::new(id, parse_data(&data)?))
                    .await?;
            }
            BlobCommands::Patch { id, data } => {
                context
                    .blobs
                    .update_partial(Blob::new(id, parse_data(&data)?))
                    .await?;
            }
        },
    }

    Ok(())
}
