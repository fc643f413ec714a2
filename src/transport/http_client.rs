/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! HTTP transport for the PDD API
//!
//! This module provides the generic request primitive every wrapper method
//! delegates to:
//! - GET or POST is chosen by the presence of post parameters
//! - the `PddToken` header is attached to every request
//! - the JSON body is decoded and returned even on non-2xx responses,
//!   because the API reports logical failures inside the body
//!
//! # Example
//! ```ignore
//! use pdd_client::config::Config;
//! use pdd_client::transport::{PddHttpClient, PddRestClient};
//! use std::sync::Arc;
//!
//! let client = PddRestClient::new(Arc::new(Config::new()))?;
//! let body = client
//!     .get_data("/api2/admin/domain/registration_status", &[("domain", "example.com".into())], &[])
//!     .await?;
//! ```

use crate::config::Config;
use crate::constants::{PDD_TOKEN_HEADER, USER_AGENT};
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client as HttpInternalClient, Method};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Interface for the generic PDD request primitive
///
/// Services are generic over this trait so they can be exercised against a
/// mock transport in tests.
#[async_trait]
pub trait PddHttpClient: Send + Sync {
    /// Performs one API call and returns the decoded JSON body
    ///
    /// The method is POST when `post` is non-empty (sent form-encoded) and
    /// GET otherwise; `query` is appended to the URL either way. Exactly one
    /// outbound HTTP call is made per invocation.
    ///
    /// # Arguments
    /// * `path` - API endpoint path, e.g. `/api2/admin/domain/domains`
    /// * `query` - URL query parameters
    /// * `post` - Form-encoded body parameters
    ///
    /// # Returns
    /// * `Ok(Value)` - Decoded response body, regardless of HTTP status
    /// * `Err(AppError)` - Transport failure or undecodable body
    async fn get_data(
        &self,
        path: &str,
        query: &[(&str, String)],
        post: &[(&str, String)],
    ) -> Result<Value, AppError>;
}

/// Reqwest-backed transport for the PDD API
pub struct PddRestClient {
    config: Arc<Config>,
    http_client: HttpInternalClient,
}

impl PddRestClient {
    /// Creates a new transport from the given configuration
    ///
    /// # Arguments
    /// * `config` - Configuration containing the token and API settings
    ///
    /// # Returns
    /// * `Ok(PddRestClient)` - Transport ready to use
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Gets the configuration this transport was built with
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl PddHttpClient for PddRestClient {
    async fn get_data(
        &self,
        path: &str,
        query: &[(&str, String)],
        post: &[(&str, String)],
    ) -> Result<Value, AppError> {
        let url = format!(
            "{}{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path
        );
        let method = if post.is_empty() {
            Method::GET
        } else {
            Method::POST
        };

        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .header(PDD_TOKEN_HEADER, self.config.credentials.pdd_token.as_str());

        if !query.is_empty() {
            request = request.query(query);
        }
        if !post.is_empty() {
            request = request.form(post);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        let body = response.text().await?;
        match serde_json::from_str::<Value>(&body) {
            Ok(value) => {
                if !status.is_success() {
                    // The API encodes failure details in the body, so a
                    // decodable body is returned to the caller as-is.
                    warn!("Request failed with status {} but body decoded", status);
                }
                Ok(value)
            }
            Err(_) if !status.is_success() => {
                error!("Request failed with status {}: {}", status, body);
                Err(AppError::Http { status, body })
            }
            Err(e) => {
                error!("Failed to decode response body: {}", e);
                Err(AppError::Decode(e))
            }
        }
    }
}
