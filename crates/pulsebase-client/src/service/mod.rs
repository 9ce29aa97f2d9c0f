pub mod alerts;
pub mod messages;
pub mod meta;
pub mod paths;
pub mod properties;
pub mod series;

pub use alerts::AlertsService;
pub use messages::MessageService;
pub use meta::MetaService;
pub use properties::PropertiesService;
pub use series::SeriesService;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::ClientError;
use crate::wire;
use pulsebase_net::prelude::ApiContent;

pub(crate) fn expect_json(content: ApiContent, target: &str) -> Result<Value, ClientError> {
    match content {
        ApiContent::Json(value) => Ok(value),
        ApiContent::Text(text) => {
            let preview: String = text.chars().take(120).collect();
            Err(ClientError::decode(
                target,
                &format!("expected a JSON body, got text: {preview:?}"),
            ))
        }
    }
}

pub(crate) fn decode_array<T: DeserializeOwned>(
    content: ApiContent,
    target: &str,
) -> Result<Vec<T>, ClientError> {
    wire::from_wire_array(expect_json(content, target)?)
}

pub(crate) fn decode_one<T: DeserializeOwned>(
    content: ApiContent,
    target: &str,
) -> Result<T, ClientError> {
    wire::from_wire(expect_json(content, target)?)
}
