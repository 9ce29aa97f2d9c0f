use std::sync::Arc;

use pulsebase_net::prelude::{ApiRequest, HttpExec};

use crate::errors::ClientError;
use crate::model::Series;
use crate::query::SeriesQuery;
use crate::service::{decode_array, paths};
use crate::wire;

pub struct SeriesService {
    exec: Arc<dyn HttpExec>,
}

impl SeriesService {
    pub fn new(exec: Arc<dyn HttpExec>) -> Self {
        Self { exec }
    }

    /// One batched POST; the array response decodes to one `Series` per
    /// element in server order.
    pub async fn query(&self, queries: &[SeriesQuery]) -> Result<Vec<Series>, ClientError> {
        let body = wire::to_wire_array(queries)?;
        tracing::debug!(
            target: "pulsebase::series",
            queries = queries.len(),
            "series query"
        );
        let content = self
            .exec
            .request(ApiRequest::post(paths::SERIES_QUERY, body))
            .await?;
        decode_array(content, "Series")
    }

    /// Fail-fast: every series must carry data before the transport is
    /// touched; the whole batch is submitted in one POST or not at all.
    pub async fn insert(&self, series: &[Series]) -> Result<(), ClientError> {
        for s in series {
            if s.data.is_empty() {
                return Err(ClientError::data_parse(
                    "data",
                    &format!("series {}:{} has no samples", s.entity, s.metric),
                ));
            }
        }
        let body = wire::to_wire_array(series)?;
        tracing::debug!(
            target: "pulsebase::series",
            series = series.len(),
            "series insert"
        );
        self.exec
            .request(ApiRequest::post(paths::SERIES_INSERT, body))
            .await?;
        Ok(())
    }
}
