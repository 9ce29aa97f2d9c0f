use serde::Serialize;

/// Stable machine-readable error code. The string form is part of the
/// public contract; match on it, not on messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(pub &'static str);

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

pub const SCHEMA_VALIDATION: ErrorCode = ErrorCode("schema.validation");
pub const TIME_INVALID: ErrorCode = ErrorCode("time.invalid_input");
pub const WIRE_ENCODE: ErrorCode = ErrorCode("wire.encode");
pub const WIRE_DECODE: ErrorCode = ErrorCode("wire.decode");
pub const DATA_PARSE: ErrorCode = ErrorCode("data.parse");
pub const NET_SERVER_STATUS: ErrorCode = ErrorCode("net.server_status");
pub const NET_TRANSPORT: ErrorCode = ErrorCode("net.transport");
pub const UNKNOWN_INTERNAL: ErrorCode = ErrorCode("unknown.internal");
