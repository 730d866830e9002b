//! Session commands: login, logout, whoami.

use clap::Args;

use vendorhub_core::error::AppError;

use super::Context;
use crate::output::{self, OutputFormat};

/// Arguments for `login`
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Google ID token; prompted for when omitted
    #[arg(short, long)]
    pub token: Option<String>,
}

/// Decode and store the token.
pub fn login(ctx: &Context, args: &LoginArgs) -> Result<(), AppError> {
    let token = match &args.token {
        Some(token) => token.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Google ID token")
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
    };

    let session = ctx.sessions.login(&token)?;
    output::print_success(&format!("Logged in as {}", session.user.display_name()));
    output::print_kv("Email", session.email());
    Ok(())
}

/// Remove the stored session.
pub fn logout(ctx: &Context) -> Result<(), AppError> {
    ctx.sessions.logout()?;
    output::print_success("Logged out");
    Ok(())
}

/// Print the stored user.
pub fn whoami(ctx: &Context) -> Result<(), AppError> {
    let Some(session) = ctx.sessions.restore()? else {
        output::print_warning("Not logged in");
        return Ok(());
    };

    match ctx.format {
        OutputFormat::Json => output::print_json(&session.user),
        OutputFormat::Table => {
            output::print_kv("Name", session.user.display_name());
            output::print_kv("Email", session.email());
            output::print_kv(
                "Verified",
                if session.user.email_verified.unwrap_or(false) { "yes" } else { "no" },
            );
            output::print_kv("Session dir", &ctx.sessions.dir().display().to_string());
        }
    }
    Ok(())
}
