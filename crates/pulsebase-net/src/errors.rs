use pulsebase_errors::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0:?}")]
pub struct NetError(pub Box<ErrorObj>);

impl NetError {
    pub fn into_inner(self) -> ErrorObj {
        *self.0
    }

    pub fn schema(msg: &str) -> Self {
        NetError(Box::new(
            ErrorBuilder::new(codes::SCHEMA_VALIDATION)
                .user_msg("Request could not be constructed.")
                .dev_msg(msg)
                .build(),
        ))
    }

    pub fn transport(msg: &str) -> Self {
        NetError(Box::new(
            ErrorBuilder::new(codes::NET_TRANSPORT)
                .user_msg("Server is unreachable.")
                .dev_msg(msg)
                .retry(RetryClass::Transient)
                .build(),
        ))
    }

    /// Non-2xx status from the server; status and raw body are preserved.
    pub fn server_status(status: u16, content: impl Into<String>) -> Self {
        let content = content.into();
        NetError(Box::new(
            ErrorBuilder::new(codes::NET_SERVER_STATUS)
                .user_msg("Server rejected the request.")
                .dev_msg(format!("status {status}"))
                .retry(classify_status(status))
                .meta(serde_json::json!({ "status": status, "content": content }))
                .build(),
        ))
    }

    pub fn status_code(&self) -> Option<u16> {
        self.0.meta_u64("status").map(|s| s as u16)
    }

    pub fn content(&self) -> Option<&str> {
        self.0.meta_str("content")
    }
}
