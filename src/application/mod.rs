/// Service traits for the backend API surface
pub mod interfaces;
/// Service implementations over the HTTP transport
pub mod services;
