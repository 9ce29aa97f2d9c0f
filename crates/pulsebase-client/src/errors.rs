use pulsebase_errors::prelude::*;
use pulsebase_net::prelude::NetError;
use pulsebase_types::prelude::TypesError;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0:?}")]
pub struct ClientError(pub Box<ErrorObj>);

impl ClientError {
    pub fn into_inner(self) -> ErrorObj {
        *self.0
    }

    pub fn code(&self) -> ErrorCode {
        self.0.code
    }

    pub fn validation(msg: &str) -> Self {
        ClientError(Box::new(
            ErrorBuilder::new(codes::SCHEMA_VALIDATION)
                .user_msg("Query input failed validation.")
                .dev_msg(msg)
                .build(),
        ))
    }

    pub fn encode(target: &str, msg: &str) -> Self {
        ClientError(Box::new(
            ErrorBuilder::new(codes::WIRE_ENCODE)
                .user_msg("Request body could not be encoded.")
                .dev_msg(format!("{target}: {msg}"))
                .meta(serde_json::json!({ "target": target }))
                .build(),
        ))
    }

    pub fn decode(target: &str, msg: &str) -> Self {
        ClientError(Box::new(
            ErrorBuilder::new(codes::WIRE_DECODE)
                .user_msg("Server response could not be decoded.")
                .dev_msg(format!("{target}: {msg}"))
                .meta(serde_json::json!({ "target": target }))
                .build(),
        ))
    }

    /// Pre-flight payload rejection; raised before the transport is touched.
    pub fn data_parse(field: &str, msg: &str) -> Self {
        ClientError(Box::new(
            ErrorBuilder::new(codes::DATA_PARSE)
                .user_msg("Payload is not insertable.")
                .dev_msg(msg)
                .meta(serde_json::json!({ "field": field }))
                .build(),
        ))
    }

    pub fn unknown(msg: &str) -> Self {
        ClientError(Box::new(
            ErrorBuilder::new(codes::UNKNOWN_INTERNAL)
                .user_msg("Client operation failed.")
                .dev_msg(msg)
                .build(),
        ))
    }

    /// Status of the server rejection, when this error came from the wire.
    pub fn status_code(&self) -> Option<u16> {
        self.0.meta_u64("status").map(|s| s as u16)
    }

    /// Raw response body of the server rejection.
    pub fn content(&self) -> Option<&str> {
        self.0.meta_str("content")
    }

    pub fn field(&self) -> Option<&str> {
        self.0.meta_str("field")
    }
}

impl From<NetError> for ClientError {
    fn from(err: NetError) -> Self {
        ClientError(Box::new(err.into_inner()))
    }
}

impl From<TypesError> for ClientError {
    fn from(err: TypesError) -> Self {
        ClientError(Box::new(err.into_inner()))
    }
}
