//! CLI entry point for the secondhand client.

pub mod auth;

use clap::{Parser, Subcommand};

/// Secondhand marketplace client
#[derive(Parser, Debug)]
#[command(name = "secondhand", version, about = "Secondhand marketplace client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authentication management
    Auth(AuthArgs),
    /// Print the screen the app opens on (home or login)
    Start,
}

/// Arguments for the `auth` subcommand group.
#[derive(Parser, Debug)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommands,
}

/// Auth subcommands for login, status, and logout.
#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Log in and persist the session
    Login(LoginArgs),
    /// Show the stored session
    Status,
    /// Clear the stored session
    Logout,
}

/// Arguments for `secondhand auth login`.
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(short, long)]
    pub email: String,

    /// Account password (read from stdin when omitted)
    #[arg(short, long)]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_auth_login_with_password() {
        let cli = Cli::try_parse_from([
            "secondhand",
            "auth",
            "login",
            "--email",
            "user1",
            "--password",
            "bad",
        ])
        .unwrap();
        match cli.command {
            Commands::Auth(auth) => match auth.command {
                AuthCommands::Login(args) => {
                    assert_eq!(args.email, "user1");
                    assert_eq!(args.password.as_deref(), Some("bad"));
                }
                other => panic!("expected Login, got {other:?}"),
            },
            other => panic!("expected Auth, got {other:?}"),
        }
    }

    #[test]
    fn parse_auth_login_password_is_optional() {
        let cli = Cli::try_parse_from(["secondhand", "auth", "login", "-e", "user1"]).unwrap();
        match cli.command {
            Commands::Auth(auth) => match auth.command {
                AuthCommands::Login(args) => assert!(args.password.is_none()),
                other => panic!("expected Login, got {other:?}"),
            },
            other => panic!("expected Auth, got {other:?}"),
        }
    }

    #[test]
    fn parse_auth_status_and_logout() {
        let cli = Cli::try_parse_from(["secondhand", "auth", "status"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Auth(AuthArgs {
                command: AuthCommands::Status
            })
        ));

        let cli = Cli::try_parse_from(["secondhand", "auth", "logout"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Auth(AuthArgs {
                command: AuthCommands::Logout
            })
        ));
    }

    #[test]
    fn parse_start() {
        let cli = Cli::try_parse_from(["secondhand", "start"]).unwrap();
        assert!(matches!(cli.command, Commands::Start));
    }

    #[test]
    fn parse_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["secondhand"]).is_err());
    }

    #[test]
    fn parse_auth_login_missing_email_is_error() {
        assert!(Cli::try_parse_from(["secondhand", "auth", "login"]).is_err());
    }
}
