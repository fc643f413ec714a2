use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the mailing-list service
///
/// A mailing list is an address inside a domain that fans out to a set of
/// subscriber addresses.
#[async_trait]
pub trait MaillistService: Send + Sync {
    /// Lists the mailing lists of a domain
    async fn list(&self, domain: &str) -> Result<Value, AppError>;

    /// Creates a mailing list in a domain
    ///
    /// # Arguments
    /// * `domain` - Domain that will own the list
    /// * `maillist` - Address of the new list, e.g. `team`
    async fn create(&self, domain: &str, maillist: &str) -> Result<Value, AppError>;

    /// Removes a mailing list from a domain
    async fn delete(&self, domain: &str, maillist: &str) -> Result<Value, AppError>;

    /// Lists the subscribers of a mailing list
    async fn subscribers(&self, domain: &str, maillist: &str) -> Result<Value, AppError>;

    /// Subscribes an address to a mailing list
    ///
    /// # Arguments
    /// * `domain` - Domain that owns the list
    /// * `maillist` - Address of the list
    /// * `subscriber` - Address to subscribe
    /// * `can_send_on_behalf` - Whether the subscriber may send mail as the list
    async fn subscribe(
        &self,
        domain: &str,
        maillist: &str,
        subscriber: &str,
        can_send_on_behalf: bool,
    ) -> Result<Value, AppError>;

    /// Unsubscribes an address from a mailing list
    async fn unsubscribe(
        &self,
        domain: &str,
        maillist: &str,
        subscriber: &str,
    ) -> Result<Value, AppError>;
}
