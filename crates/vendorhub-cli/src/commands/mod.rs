//! CLI command definitions and dispatch.

pub mod session;
pub mod vendor;

use clap::{Parser, Subcommand};

use vendorhub_client::{ClientConfig, SessionStore, VendorApiClient};
use vendorhub_core::error::{AppError, ErrorKind};

use crate::output::OutputFormat;

/// VendorHub: manage the shared vendor registry from the terminal
#[derive(Debug, Parser)]
#[command(name = "vendorhub", version, about, long_about = None)]
pub struct Cli {
    /// Path to the client configuration file (without extension)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Store a Google ID token as the current session
    Login(session::LoginArgs),
    /// Forget the current session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// List vendors, one page at a time
    List(vendor::ListArgs),
    /// Show a single vendor (requires login)
    Show(vendor::IdArgs),
    /// Add a vendor (requires login)
    Add(vendor::FieldArgs),
    /// Edit a vendor you created
    Edit(vendor::EditArgs),
    /// Delete a vendor you created
    Delete(vendor::DeleteArgs),
}

/// Everything a command needs to talk to the server.
pub struct Context {
    pub config: ClientConfig,
    pub sessions: SessionStore,
    pub api: VendorApiClient,
    pub format: OutputFormat,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = ClientConfig::load(self.config.as_deref())?;
        let ctx = Context {
            sessions: SessionStore::new(config.session_dir.clone()),
            api: VendorApiClient::new(&config)?,
            config,
            format: self.format,
        };

        match &self.command {
            Commands::Login(args) => session::login(&ctx, args),
            Commands::Logout => session::logout(&ctx),
            Commands::Whoami => session::whoami(&ctx),
            Commands::List(args) => vendor::list(&ctx, args).await,
            Commands::Show(args) => vendor::show(&ctx, args).await,
            Commands::Add(args) => vendor::add(&ctx, args).await,
            Commands::Edit(args) => vendor::edit(&ctx, args).await,
            Commands::Delete(args) => vendor::delete(&ctx, args).await,
        }
    }
}

/// Render an error for the terminal.
///
/// Both credential failures point the user at `vendorhub login`.
pub fn describe_error(err: &AppError) -> String {
    if err.is_auth_failure() {
        return format!("{} Run `vendorhub login` first.", err.message);
    }
    match (&err.kind, &err.details) {
        (ErrorKind::Validation, Some(details)) => {
            let fields = details
                .as_object()
                .map(|map| {
                    map.iter()
                        .map(|(field, msg)| format!("\n  {field}: {}", msg.as_str().unwrap_or_default()))
                        .collect::<String>()
                })
                .unwrap_or_default();
            format!("{}{fields}", err.message)
        }
        _ => err.message.clone(),
    }
}
