pub use crate::client::{HttpExec, NetConfig, ReqwestExec};
pub use crate::errors::NetError;
pub use crate::types::{ApiContent, ApiRequest};
