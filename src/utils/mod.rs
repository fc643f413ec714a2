/// Environment variable parsing helpers
pub mod config;
/// Logger initialization helpers
pub mod logger;
/// Password generation for mailbox secrets
pub mod password;

pub use logger::setup_logger;
pub use password::generate_password;
