/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! # PDD Client
//!
//! Client library for the Yandex Connect (PDD) domain-administration API.
//! It authenticates with a static `PddToken` header, issues GET/POST
//! requests against `https://pddimp.yandex.ru`, paginates list endpoints
//! and returns the decoded JSON bodies as [`serde_json::Value`].
//!
//! The API signals logical failures inside the response body (commonly a
//! `success` field), so wrapper methods return the decoded body unmodified
//! and leave the interpretation to the caller.
//!
//! ## Example
//!
//! ```no_run
//! use pdd_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = PddClient::new(Config::with_token("your-pdd-token"))?;
//!
//!     for domain in client.domains().list_domains().await? {
//!         println!("{domain}");
//!     }
//!
//!     let status = client
//!         .domains()
//!         .registration_status("example.com")
//!         .await?;
//!     println!("{status}");
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`client`] — high-level facade over the services
//! - [`transport`] — the generic request primitive and its reqwest backend
//! - [`application`] — service interfaces and implementations per resource group
//! - [`model`] — request builders and response envelope helpers
//! - [`config`] — environment-driven configuration
//! - [`utils`] — env parsing, logging setup, password generation

/// Service interfaces and implementations
pub mod application;
/// High-level client facade
pub mod client;
/// Client configuration
pub mod config;
/// Fixed values of the PDD API surface
pub mod constants;
/// Error types
pub mod error;
/// Request and response models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// HTTP transport
pub mod transport;
/// Supporting utilities
pub mod utils;

/// Version of the crate, as published
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the version of the crate
pub fn version() -> &'static str {
    VERSION
}
