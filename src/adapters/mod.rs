/// Adapters - service-specific implementations
///
/// These modules implement the port traits for external services.

pub mod services;
