//! Nginx Autoindex Client
//!
//! Client for a plain nginx `autoindex` file server. The server address and
//! basic-auth credentials are per-client state handed in by the caller for
//! each account; there is no global override anywhere in this crate.
//!
//! # Example
//!
//! ```no_run
//! use arcstream_providers::nginx::NginxClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = NginxClient::with_credentials("https://media.example.com", "user", "pass")?;
//! let entries = client.list("/shows/").await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod types;

pub use client::NginxClient;
pub use types::{DirEntry, EntryKind};
