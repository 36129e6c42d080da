use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;
use tracing::info;

use crate::castor::{CastorConfig, CastorError, CastorService, HeartbeatCastorService};

pub type Services = Arc<ServiceRegistry>;

static GLOBAL: Lazy<Services> = Lazy::new(|| Arc::new(ServiceRegistry::new()));

/// Slot holding the process' analytics service handle, if any.
///
/// Operators receive a `Services` explicitly; the lifecycle of the handle
/// belongs to whoever installs it, the operator layer only reads it.
#[derive(Default)]
pub struct ServiceRegistry {
    castor: RwLock<Option<Arc<dyn CastorService>>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self { castor: RwLock::new(None) }
    }

    pub fn into_shared(self) -> Services {
        Arc::new(self)
    }

    /// Process-wide default registry.
    pub fn global() -> Services {
        Arc::clone(&GLOBAL)
    }

    pub fn castor(&self) -> Option<Arc<dyn CastorService>> {
        self.castor.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn set_castor(&self, service: Arc<dyn CastorService>) {
        *self.castor.write().unwrap_or_else(PoisonError::into_inner) = Some(service);
        info!("castor service installed");
    }

    pub fn clear_castor(&self) -> Option<Arc<dyn CastorService>> {
        let previous = self.castor.write().unwrap_or_else(PoisonError::into_inner).take();
        if previous.is_some() {
            info!("castor service removed");
        }
        previous
    }

    /// Installs a heartbeat-backed service for `config`. A disabled
    /// configuration clears the slot and returns `None`.
    pub fn open_castor(&self, config: CastorConfig) -> Result<Option<Arc<HeartbeatCastorService>>, CastorError> {
        config.validate()?;
        if !config.enabled {
            self.clear_castor();
            return Ok(None);
        }
        let service = Arc::new(HeartbeatCastorService::new(config));
        self.set_castor(service.clone());
        Ok(Some(service))
    }
}
