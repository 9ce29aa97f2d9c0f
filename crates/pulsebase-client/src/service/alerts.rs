use std::sync::Arc;

use pulsebase_net::prelude::{ApiRequest, HttpExec};

use crate::errors::ClientError;
use crate::model::{Alert, AlertHistory};
use crate::query::{AlertDelete, AlertHistoryQuery, AlertUpdate, AlertsQuery};
use crate::service::{decode_array, paths};
use crate::wire;

pub struct AlertsService {
    exec: Arc<dyn HttpExec>,
}

impl AlertsService {
    pub fn new(exec: Arc<dyn HttpExec>) -> Self {
        Self { exec }
    }

    pub async fn query(&self, queries: &[AlertsQuery]) -> Result<Vec<Alert>, ClientError> {
        let body = wire::to_wire_array(queries)?;
        let content = self
            .exec
            .request(ApiRequest::post(paths::ALERTS_QUERY, body))
            .await?;
        decode_array(content, "Alert")
    }

    pub async fn update(&self, updates: &[AlertUpdate]) -> Result<(), ClientError> {
        let body = wire::to_wire_array(updates)?;
        self.exec
            .request(ApiRequest::post(paths::ALERTS_UPDATE, body))
            .await?;
        Ok(())
    }

    pub async fn history_query(
        &self,
        queries: &[AlertHistoryQuery],
    ) -> Result<Vec<AlertHistory>, ClientError> {
        let body = wire::to_wire_array(queries)?;
        let content = self
            .exec
            .request(ApiRequest::post(paths::ALERTS_HISTORY_QUERY, body))
            .await?;
        decode_array(content, "AlertHistory")
    }

    pub async fn delete(&self, deletes: &[AlertDelete]) -> Result<(), ClientError> {
        let body = wire::to_wire_array(deletes)?;
        self.exec
            .request(ApiRequest::post(paths::ALERTS_DELETE, body))
            .await?;
        Ok(())
    }
}
