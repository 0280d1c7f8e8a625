//! CLI command handlers for login, status, logout, and start.

use std::io::Write;

use futures::StreamExt;

use crate::auth::{AuthRepository, Credentials, Resource};
use crate::config::ClientConfig;
use crate::navigation::{start_destination, StartDestination};
use crate::session::{FileSessionStore, SessionStore};

/// Handle `secondhand auth login`.
pub async fn handle_login(
    config: &ClientConfig,
    email: &str,
    password: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let password = match password {
        Some(password) => password,
        None => prompt_password()?,
    };
    let repo = AuthRepository::from_config(config)?;

    let mut states = repo.login_stream(Credentials::new(email, password));
    while let Some(state) = states.next().await {
        match state {
            Resource::Loading => println!("⏳ Logging in to {}...", config.base_url()),
            Resource::Success(payload) => {
                let session = repo.set_user_logged_in(&payload)?;
                let who = session.name().or(session.email()).unwrap_or(email);
                println!("✅ Logged in as {who}");
            }
            Resource::Error { message, .. } => {
                return Err(format!("Login failed: {message}").into());
            }
        }
    }
    Ok(())
}

/// Handle `secondhand auth status`.
pub fn handle_status(config: &ClientConfig) -> Result<(), Box<dyn std::error::Error>> {
    let repo = AuthRepository::from_config(config)?;
    match repo.session_store().session()? {
        Some(session) if session.is_logged_in() => {
            let who = session.name().or(session.email()).unwrap_or("unknown user");
            println!("🔐 Logged in as {who}");
        }
        _ => println!("🔐 Not logged in"),
    }
    println!(
        "   Session file: {}",
        FileSessionStore::new(config.session_dir()).path().display()
    );
    Ok(())
}

/// Handle `secondhand auth logout`.
pub fn handle_logout(config: &ClientConfig) -> Result<(), Box<dyn std::error::Error>> {
    AuthRepository::from_config(config)?.logout()?;
    println!("✅ Logged out");
    Ok(())
}

/// Handle `secondhand start`.
pub fn handle_start(config: &ClientConfig) -> Result<(), Box<dyn std::error::Error>> {
    let repo = AuthRepository::from_config(config)?;
    let destination = start_destination(repo.session_store().as_ref()).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "unreadable session, starting at login");
        StartDestination::Login
    });
    println!("{}", destination.as_str());
    Ok(())
}

fn prompt_password() -> std::io::Result<String> {
    print!("Password: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
