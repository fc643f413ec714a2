/// Service interfaces for the PDD resource groups
pub mod interfaces;
/// Service implementations over the HTTP transport
pub mod services;
