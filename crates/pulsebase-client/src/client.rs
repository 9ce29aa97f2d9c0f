use std::sync::Arc;

use pulsebase_net::prelude::{HttpExec, NetConfig, ReqwestExec};

use crate::errors::ClientError;
use crate::service::{AlertsService, MessageService, MetaService, PropertiesService, SeriesService};

/// Facade over the per-resource services. Holds only the injected transport
/// handle; every service call is stateless and issues one round trip.
#[derive(Clone)]
pub struct TsdClient {
    exec: Arc<dyn HttpExec>,
}

impl TsdClient {
    pub fn new(exec: Arc<dyn HttpExec>) -> Self {
        Self { exec }
    }

    pub fn connect(config: NetConfig) -> Result<Self, ClientError> {
        Ok(Self::new(Arc::new(ReqwestExec::new(config)?)))
    }

    pub fn series(&self) -> SeriesService {
        SeriesService::new(self.exec.clone())
    }

    pub fn properties(&self) -> PropertiesService {
        PropertiesService::new(self.exec.clone())
    }

    pub fn alerts(&self) -> AlertsService {
        AlertsService::new(self.exec.clone())
    }

    pub fn messages(&self) -> MessageService {
        MessageService::new(self.exec.clone())
    }

    pub fn meta(&self) -> MetaService {
        MetaService::new(self.exec.clone())
    }
}
