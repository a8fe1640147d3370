//! Internet Archive Provider Client
//!
//! Pure HTTP client for the archive.org search and metadata JSON APIs plus
//! the HTML details pages, independent of the host-facing provider traits.
//!
//! # Example
//!
//! ```no_run
//! use arcstream_providers::archive::ArchiveClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ArchiveClient::new("https://archive.org")?;
//! let results = client.advanced_search("apollo mediatype:(movies OR audio)", 26, 1).await?;
//! let item = client.metadata("some-identifier").await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod classify;
pub mod details;
pub mod types;

pub use client::ArchiveClient;
pub use types::*;
