//! Thin client for the FBR football statistics API (<https://fbrapi.com>).
//!
//! Every endpoint method issues exactly one authenticated GET and returns the
//! response JSON untouched. A fixed delay runs before each request to stay
//! under the upstream rate limit.
//!
//! ```no_run
//! use fbrapi::{Client, FbrClient};
//!
//! # async fn run() -> Result<(), fbrapi::Error> {
//! let api_key = fbrapi::config::api_key()?;
//! let client = FbrClient::new(api_key);
//! let standings = client.get_league_standings(9, None).await?;
//! println!("{standings:#}");
//! # Ok(())
//! # }
//! ```

pub mod api_client;
pub mod client;
pub mod cmd;
pub mod config;
pub mod error;
pub mod keygen;

pub use api_client::FbrClient;
pub use client::Client;
pub use error::Error;
