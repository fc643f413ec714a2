use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the domain service
#[async_trait]
pub trait DomainService: Send + Sync {
    /// Lists every domain registered under the account
    ///
    /// Walks all pages of `/api2/admin/domain/domains` and returns the
    /// accumulated `domains` entries in server order. A logically
    /// unsuccessful page ends the walk and whatever was accumulated so
    /// far is returned.
    async fn list_domains(&self) -> Result<Vec<Value>, AppError>;

    /// Registers a new domain under the account
    ///
    /// # Arguments
    /// * `domain` - Domain name, e.g. `example.com`
    async fn register(&self, domain: &str) -> Result<Value, AppError>;

    /// Gets the registration status of a domain
    async fn registration_status(&self, domain: &str) -> Result<Value, AppError>;

    /// Sets the user-interface country of a domain
    ///
    /// # Arguments
    /// * `domain` - Domain name
    /// * `country` - Two-letter country code, e.g. `tr`
    async fn set_country(&self, domain: &str, country: &str) -> Result<Value, AppError>;
}
