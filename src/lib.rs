//! # SWAPI Client
//!
//! An async client for the Star Wars API.
//!
//! ## Features
//!
//! - **Single-item lookup**: fetch a person or film by identifier
//! - **Lazy collections**: iterate every item of a kind, one page request at a time
//! - **On-demand counting**: resolve a collection's size without consuming it
//! - **Pluggable transport**: inject any [`Transport`]; HTTP is the default
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use swapi_client::{ClientConfig, ResourceKind, Result, SwapiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = SwapiClient::from_config(&ClientConfig::from_env()?)?;
//!
//!     let luke = client.get(ResourceKind::Person, 1).await?;
//!     println!("{}", luke.display_label()?);
//!
//!     let mut films = client.films();
//!     println!("{} films", films.count().await?);
//!
//!     let mut pass = Box::pin(films.stream());
//!     while let Some(film) = pass.try_next().await? {
//!         println!("{}", film.display_label()?);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ SwapiClient   get()   all()   count()        │
//! └──────────────┬───────────────────────────────┘
//!                │
//! ┌──────────────┴──────────┬───────────────────┐
//! │ PagedCollection         │ Record            │
//! │ count / start / advance │ Person / Film     │
//! └──────────────┬──────────┴───────────────────┘
//!                │
//! ┌──────────────┴───────────────────────────────┐
//! │ Transport   fetch_list()   fetch_item()      │
//! │ HttpTransport → HttpClient (reqwest)         │
//! └──────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and the resource kind registry
pub mod types;

/// HTTP client
pub mod http;

/// Transport seam and the default HTTP transport
pub mod transport;

/// Records and typed views
pub mod record;

/// Lazy paginated collections
pub mod pagination;

/// Client configuration
pub mod config;

/// Client facade
pub mod client;

#[cfg(test)]
mod testing;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::SwapiClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pagination::{PagedCollection, PassState};
pub use record::{Film, Person, Record};
pub use transport::{HttpTransport, ListPage, Transport};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
