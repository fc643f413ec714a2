/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 22/10/25
******************************************************************************/

//! Simplified client for the Yandex Connect (PDD) API
//!
//! This module provides a clean, easy-to-use client that handles:
//! - Token authentication on every request
//! - Access to the domain, mailbox and mailing-list services
//! - A raw passthrough for endpoints without a typed wrapper
//!
//! # Example
//! ```ignore
//! use pdd_client::client::PddClient;
//! use pdd_client::config::Config;
//!
//! let client = PddClient::new(Config::new())?;
//!
//! // One service value per resource group; all of them share the transport
//! let domains = client.domains().list_domains().await?;
//! ```

use crate::application::services::{DomainServiceImpl, MailboxServiceImpl, MaillistServiceImpl};
use crate::config::Config;
use crate::error::AppError;
use crate::transport::{PddHttpClient, PddRestClient};
use serde_json::Value;
use std::sync::Arc;

/// Client for the PDD API
///
/// Owns the configuration and the HTTP transport; the service accessors
/// hand out cheap views that share both. The token lives in the immutable
/// configuration, so one client can be used from multiple tasks.
pub struct PddClient {
    config: Arc<Config>,
    transport: Arc<PddRestClient>,
}

impl PddClient {
    /// Creates a new client from the given configuration
    ///
    /// # Arguments
    /// * `config` - Configuration containing the token and API settings
    ///
    /// # Returns
    /// * `Ok(PddClient)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP transport cannot be built
    ///
    /// # Example
    /// ```ignore
    /// let config = Config::new();
    /// let client = PddClient::new(config)?;
    /// ```
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let transport = Arc::new(PddRestClient::new(config.clone())?);

        Ok(Self { config, transport })
    }

    /// Gets the domain service
    pub fn domains(&self) -> DomainServiceImpl<PddRestClient> {
        DomainServiceImpl::new(self.config.clone(), self.transport.clone())
    }

    /// Gets the mailbox service
    pub fn mailboxes(&self) -> MailboxServiceImpl<PddRestClient> {
        MailboxServiceImpl::new(self.config.clone(), self.transport.clone())
    }

    /// Gets the mailing-list service
    pub fn maillists(&self) -> MaillistServiceImpl<PddRestClient> {
        MaillistServiceImpl::new(self.config.clone(), self.transport.clone())
    }

    /// Performs a raw API call through the request primitive
    ///
    /// Useful for endpoints this crate has no typed wrapper for. The method
    /// is POST when `post` is non-empty and GET otherwise; see
    /// [`PddHttpClient::get_data`].
    pub async fn get_data(
        &self,
        path: &str,
        query: &[(&str, String)],
        post: &[(&str, String)],
    ) -> Result<Value, AppError> {
        self.transport.get_data(path, query, post).await
    }

    /// Gets the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for PddClient {
    fn default() -> Self {
        let config = Config::default();
        Self::new(config).expect("Failed to create HTTP client")
    }
}
