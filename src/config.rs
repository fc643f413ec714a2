/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_TIMEOUT};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the PDD API
pub struct Credentials {
    /// Admin token sent as the `PddToken` header on every request
    ///
    /// The token is an opaque string; it is read once at construction and
    /// never mutated afterwards, so a client can be shared across tasks.
    pub pdd_token: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the PDD REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the PDD API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Number of items to retrieve per page on list endpoints
    pub page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from environment variables
    ///
    /// Reads `PDD_TOKEN`, `PDD_BASE_URL`, `PDD_REST_TIMEOUT` and
    /// `PDD_PAGE_SIZE`, falling back to defaults where unset. A `.env` file
    /// in the working directory is loaded first if present.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let pdd_token = get_env_or_default("PDD_TOKEN", String::from("default_pdd_token"));

        // Check if we are using default values
        if pdd_token == "default_pdd_token" {
            error!("PDD_TOKEN not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { pdd_token },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("PDD_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("PDD_REST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT),
            },
            page_size: get_env_or_default("PDD_PAGE_SIZE", DEFAULT_PAGE_SIZE),
        }
    }

    /// Creates a configuration with the given token and defaults elsewhere
    ///
    /// Convenience constructor for callers that obtain the token from
    /// somewhere other than the environment.
    ///
    /// # Arguments
    ///
    /// * `pdd_token` - Admin token for the PDD API
    ///
    /// # Returns
    ///
    /// A new `Config` instance pointing at the production base URL
    pub fn with_token(pdd_token: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                pdd_token: pdd_token.into(),
            },
            rest_api: RestApiConfig {
                base_url: String::from(DEFAULT_BASE_URL),
                timeout: DEFAULT_REQUEST_TIMEOUT,
            },
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
