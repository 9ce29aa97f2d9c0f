use std::sync::Arc;

use pulsebase_net::prelude::{ApiRequest, HttpExec};

use crate::errors::ClientError;
use crate::model::{Entity, EntityGroup, Metric};
use crate::service::{decode_array, decode_one, paths};
use crate::wire;

/// Metadata API: entities, metrics, and entity groups.
pub struct MetaService {
    exec: Arc<dyn HttpExec>,
}

impl MetaService {
    pub fn new(exec: Arc<dyn HttpExec>) -> Self {
        Self { exec }
    }

    pub async fn entities(&self) -> Result<Vec<Entity>, ClientError> {
        let content = self.exec.request(ApiRequest::get(paths::ENTITIES)).await?;
        decode_array(content, "Entity")
    }

    /// Entities whose name or tags match a server-side expression.
    pub async fn entities_matching(&self, expression: &str) -> Result<Vec<Entity>, ClientError> {
        let request = ApiRequest::get(paths::ENTITIES).with_query("expression", expression);
        let content = self.exec.request(request).await?;
        decode_array(content, "Entity")
    }

    pub async fn entity(&self, name: &str) -> Result<Entity, ClientError> {
        let content = self
            .exec
            .request(ApiRequest::get(paths::entity(name)))
            .await?;
        decode_one(content, "Entity")
    }

    pub async fn create_or_replace_entity(&self, entity: &Entity) -> Result<(), ClientError> {
        let body = wire::to_wire(entity)?;
        self.exec
            .request(ApiRequest::put(paths::entity(&entity.name), body))
            .await?;
        Ok(())
    }

    pub async fn update_entity(&self, entity: &Entity) -> Result<(), ClientError> {
        let body = wire::to_wire(entity)?;
        self.exec
            .request(ApiRequest::patch(paths::entity(&entity.name), body))
            .await?;
        Ok(())
    }

    pub async fn delete_entity(&self, name: &str) -> Result<(), ClientError> {
        self.exec
            .request(ApiRequest::delete(paths::entity(name)))
            .await?;
        Ok(())
    }

    pub async fn metrics(&self) -> Result<Vec<Metric>, ClientError> {
        let content = self.exec.request(ApiRequest::get(paths::METRICS)).await?;
        decode_array(content, "Metric")
    }

    pub async fn metric(&self, name: &str) -> Result<Metric, ClientError> {
        let content = self
            .exec
            .request(ApiRequest::get(paths::metric(name)))
            .await?;
        decode_one(content, "Metric")
    }

    pub async fn create_or_replace_metric(&self, metric: &Metric) -> Result<(), ClientError> {
        let body = wire::to_wire(metric)?;
        self.exec
            .request(ApiRequest::put(paths::metric(&metric.name), body))
            .await?;
        Ok(())
    }

    pub async fn update_metric(&self, metric: &Metric) -> Result<(), ClientError> {
        let body = wire::to_wire(metric)?;
        self.exec
            .request(ApiRequest::patch(paths::metric(&metric.name), body))
            .await?;
        Ok(())
    }

    pub async fn delete_metric(&self, name: &str) -> Result<(), ClientError> {
        self.exec
            .request(ApiRequest::delete(paths::metric(name)))
            .await?;
        Ok(())
    }

    pub async fn entity_groups(&self) -> Result<Vec<EntityGroup>, ClientError> {
        let content = self
            .exec
            .request(ApiRequest::get(paths::ENTITY_GROUPS))
            .await?;
        decode_array(content, "EntityGroup")
    }

    pub async fn entity_group(&self, name: &str) -> Result<EntityGroup, ClientError> {
        let content = self
            .exec
            .request(ApiRequest::get(paths::entity_group(name)))
            .await?;
        decode_one(content, "EntityGroup")
    }
}
