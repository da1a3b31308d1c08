//! Login, logout, and identity commands.

use secrecy::SecretString;
use tracing::info;

use cafenet_client::{ApiError, landing};

use super::{CommandError, Context};

/// Log in and persist the session record.
///
/// The password may come from `--password` or, failing that, the
/// `CAFENET_PASSWORD` environment variable. Auth failures collapse to
/// one generic message regardless of what the server said.
///
/// # Errors
///
/// Returns an error on missing password, failed login, or a session
/// store write failure.
pub async fn login(
    context: &Context,
    username: &str,
    password: Option<String>,
) -> Result<(), CommandError> {
    let password = password
        .or_else(|| std::env::var("CAFENET_PASSWORD").ok())
        .ok_or(CommandError::MissingPassword)?;
    let password = SecretString::from(password);

    let session = match context.client.login(username, &password).await {
        Ok(session) => session,
        Err(ApiError::InvalidCredentials) => return Err(CommandError::LoginFailed),
        Err(e) => return Err(e.into()),
    };

    context.store.save(&session)?;
    info!(role = %session.role, "session saved");

    println!("Logged in as {} ({})", session.name, session.role);
    println!("Landing dashboard: {}", landing(session.role).path());
    Ok(())
}

/// Clear the persisted session. Idempotent.
///
/// # Errors
///
/// Returns an error only if an existing record cannot be removed.
pub fn logout(context: &Context) -> Result<(), CommandError> {
    context.store.clear()?;
    println!("Logged out");
    Ok(())
}

/// Print the stored identity, if any.
pub fn whoami(context: &Context) {
    match context.store.load() {
        Some(session) => println!(
            "{} ({}, id {})",
            session.name, session.role, session.id
        ),
        None => println!("Not logged in"),
    }
}
