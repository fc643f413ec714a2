use crate::error::AppError;
use crate::model::requests::MailboxEditRequest;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the mailbox service
#[async_trait]
pub trait MailboxService: Send + Sync {
    /// Lists every mailbox in a domain
    ///
    /// Walks all pages of `/api2/admin/email/list` and returns the
    /// accumulated `accounts` entries in server order.
    async fn list_mailboxes(&self, domain: &str) -> Result<Vec<Value>, AppError>;

    /// Creates a mailbox in a domain
    ///
    /// # Arguments
    /// * `domain` - Domain that will own the mailbox
    /// * `login` - Mailbox login, e.g. `info`
    /// * `password` - Mailbox password; 6 to 20 characters of Latin letters,
    ///   digits and punctuation, different from the login
    async fn add(&self, domain: &str, login: &str, password: &str) -> Result<Value, AppError>;

    /// Edits the profile of an existing mailbox
    ///
    /// # Arguments
    /// * `domain` - Domain that owns the mailbox
    /// * `login` - Mailbox login
    /// * `request` - Profile fields to change
    /// * `autofill` - Substitute placeholder defaults for unset profile fields
    async fn edit(
        &self,
        domain: &str,
        login: &str,
        request: MailboxEditRequest,
        autofill: bool,
    ) -> Result<Value, AppError>;

    /// Removes a mailbox from a domain
    async fn delete(&self, domain: &str, login: &str) -> Result<Value, AppError>;
}
