//! Secondhand: marketplace client core
//!
//! Logs users in against the marketplace HTTP API and keeps the resulting
//! session on disk so the next start can skip the login screen.
//!
//! # Quick Start
//!
//! ```no_run
//! use futures::StreamExt;
//! use secondhand::prelude::*;
//!
//! # async fn example() -> secondhand::error::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let repo = AuthRepository::from_config(&config)?;
//!
//! let mut states = repo.login_stream(Credentials::new("user1", "secret"));
//! while let Some(state) = states.next().await {
//!     if let Resource::Success(payload) = state {
//!         repo.set_user_logged_in(&payload)?;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod navigation;
pub mod prelude;
pub mod session;

#[cfg(feature = "cli")]
pub mod cli;
