use crate::clients::RegistryClient;
use crate::config::RegistryConfig;
use crate::registry::Registry;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Runs a [`Registry`] actor and hands out the client that talks to it.
///
/// # Example
///
/// ```rust
/// use review_registry::config::RegistryConfig;
/// use review_registry::lifecycle::RegistrySystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), String> {
///     let system = RegistrySystem::new(RegistryConfig::default());
///     let summary = system.client.summary().await.map_err(|e| e.to_string())?;
///     assert_eq!(summary.members, 0);
///
///     let registry = system.shutdown().await?;
///     assert_eq!(registry.member_count(), 0);
///     Ok(())
/// }
/// ```
pub struct RegistrySystem {
    /// Client for interacting with the Registry actor
    pub client: RegistryClient,

    handle: JoinHandle<Registry>,
}

impl RegistrySystem {
    /// Spawns an actor around an empty registry.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_registry(Registry::new(), config)
    }

    /// Spawns an actor around an existing registry.
    pub fn with_registry(registry: Registry, config: RegistryConfig) -> Self {
        info!(capacity = config.channel_capacity.get(), "Starting registry system");
        let (actor, inner) = crate::registry_actor::new(registry, config.channel_capacity.get());
        let handle = tokio::spawn(actor.run());
        Self {
            client: RegistryClient::new(inner),
            handle,
        }
    }

    /// Gracefully shuts down the actor and returns the final registry.
    ///
    /// Dropping the system's client closes the channel once every clone of it
    /// handed out earlier is gone too; the actor drains what is queued and exits.
    ///
    /// # Returns
    ///
    /// - `Ok(Registry)` when the actor stopped cleanly
    /// - `Err(String)` if the actor task panicked or was cancelled
    pub async fn shutdown(self) -> Result<Registry, String> {
        info!("Shutting down registry system...");
        drop(self.client);

        match self.handle.await {
            Ok(registry) => {
                info!(summary = ?registry.summary(), "Registry system shutdown complete.");
                Ok(registry)
            }
            Err(e) => {
                error!("Actor task failed: {:?}", e);
                Err(format!("Actor task failed: {:?}", e))
            }
        }
    }
}
