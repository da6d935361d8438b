//! Typed clients for the actors of this crate.

pub mod registry_client;

pub use registry_client::RegistryClient;
