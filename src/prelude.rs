/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 22/10/25
******************************************************************************/

//! # PDD Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! from the PDD Client library. By importing this prelude, you get access to all the essential
//! components needed for most Yandex Connect (PDD) API interactions.
//!
//! ## Usage
//!
//! ```rust
//! use pdd_client::prelude::*;
//!
//! // Now you have access to all the commonly used types and traits
//! let config = Config::with_token("token");
//! let client = PddClient::new(config);
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the PDD API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND TRANSPORT
// ============================================================================

/// High-level client facade
pub use crate::client::PddClient;

/// Request primitive trait and its reqwest implementation
pub use crate::transport::{PddHttpClient, PddRestClient};

// ============================================================================
// SERVICES
// ============================================================================

/// Domain service interface
pub use crate::application::interfaces::domain::DomainService;

/// Mailbox service interface
pub use crate::application::interfaces::mailbox::MailboxService;

/// Mailing-list service interface
pub use crate::application::interfaces::maillist::MaillistService;

/// Service implementations
pub use crate::application::services::{
    DomainServiceImpl, MailboxServiceImpl, MaillistServiceImpl,
};

// ============================================================================
// MODELS
// ============================================================================

/// Mailbox edit request builder
pub use crate::model::requests::MailboxEditRequest;

/// List-page envelope helpers
pub use crate::model::responses::{ListPage, parse_list_page};

// ============================================================================
// UTILITIES
// ============================================================================

/// Password generation for mailbox secrets
pub use crate::utils::password::generate_password;

/// Logger initialization
pub use crate::utils::logger::setup_logger;

// ============================================================================
// COMMON EXTERNAL TYPES
// ============================================================================

/// Serde traits for (de)serialization
pub use serde::{Deserialize, Serialize};

/// Generic JSON value returned by the API
pub use serde_json::Value;
