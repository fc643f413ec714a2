/// Module containing domain service for managing account domains
pub mod domain_service;
/// Module containing mailbox service for managing mailboxes in a domain
pub mod mailbox_service;
/// Module containing mailing-list service for managing lists and subscribers
pub mod maillist_service;
/// Shared pagination loop for list endpoints
mod pagination;

pub use crate::application::interfaces::domain::*;
pub use crate::application::interfaces::mailbox::*;
pub use crate::application::interfaces::maillist::*;
pub use domain_service::*;
pub use mailbox_service::*;
pub use maillist_service::*;
