use std::sync::Arc;

use pulsebase_net::prelude::{ApiRequest, HttpExec};

use crate::errors::ClientError;
use crate::model::Property;
use crate::query::PropertiesQuery;
use crate::service::{decode_array, expect_json, paths};
use crate::wire;

pub struct PropertiesService {
    exec: Arc<dyn HttpExec>,
}

impl PropertiesService {
    pub fn new(exec: Arc<dyn HttpExec>) -> Self {
        Self { exec }
    }

    pub async fn query(&self, queries: &[PropertiesQuery]) -> Result<Vec<Property>, ClientError> {
        let body = wire::to_wire_array(queries)?;
        let content = self
            .exec
            .request(ApiRequest::post(paths::PROPERTIES_QUERY, body))
            .await?;
        decode_array(content, "Property")
    }

    pub async fn insert(&self, properties: &[Property]) -> Result<(), ClientError> {
        let body = wire::to_wire_array(properties)?;
        tracing::debug!(
            target: "pulsebase::properties",
            properties = properties.len(),
            "properties insert"
        );
        self.exec
            .request(ApiRequest::post(paths::PROPERTIES_INSERT, body))
            .await?;
        Ok(())
    }

    /// Deletion addresses properties by identity (entity, type, key).
    pub async fn delete(&self, properties: &[Property]) -> Result<(), ClientError> {
        let body = wire::to_wire_array(properties)?;
        self.exec
            .request(ApiRequest::post(paths::PROPERTIES_DELETE, body))
            .await?;
        Ok(())
    }

    /// Raw list of property-type names for an entity; no model decoding.
    pub async fn type_query(&self, entity: &str) -> Result<Vec<String>, ClientError> {
        let content = self
            .exec
            .request(ApiRequest::get(paths::properties_types(entity)))
            .await?;
        wire::from_wire(expect_json(content, "property types")?)
    }
}
