use std::sync::Arc;

use pulsebase_net::prelude::{ApiRequest, HttpExec};

use crate::errors::ClientError;
use crate::model::{Message, Series};
use crate::query::MessagesQuery;
use crate::service::{decode_array, paths};
use crate::wire;

pub struct MessageService {
    exec: Arc<dyn HttpExec>,
}

impl MessageService {
    pub fn new(exec: Arc<dyn HttpExec>) -> Self {
        Self { exec }
    }

    pub async fn insert(&self, messages: &[Message]) -> Result<(), ClientError> {
        let body = wire::to_wire_array(messages)?;
        tracing::debug!(
            target: "pulsebase::messages",
            messages = messages.len(),
            "messages insert"
        );
        self.exec
            .request(ApiRequest::post(paths::MESSAGES_INSERT, body))
            .await?;
        Ok(())
    }

    pub async fn query(&self, queries: &[MessagesQuery]) -> Result<Vec<Message>, ClientError> {
        let body = wire::to_wire_array(queries)?;
        let content = self
            .exec
            .request(ApiRequest::post(paths::MESSAGES_QUERY, body))
            .await?;
        decode_array(content, "Message")
    }

    /// Message counts come back as series data.
    pub async fn stats_query(&self, queries: &[MessagesQuery]) -> Result<Vec<Series>, ClientError> {
        let body = wire::to_wire_array(queries)?;
        let content = self
            .exec
            .request(ApiRequest::post(paths::MESSAGES_STATS_QUERY, body))
            .await?;
        decode_array(content, "Series")
    }
}
