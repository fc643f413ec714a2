/// Domain service interface
pub mod domain;
/// Mailbox service interface
pub mod mailbox;
/// Mailing-list service interface
pub mod maillist;
