use pulsebase_errors::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0:?}")]
pub struct TypesError(pub Box<ErrorObj>);

impl TypesError {
    pub fn into_inner(self) -> ErrorObj {
        *self.0
    }

    pub fn time_invalid(msg: &str) -> Self {
        TypesError(Box::new(
            ErrorBuilder::new(codes::TIME_INVALID)
                .user_msg("Unsupported time input.")
                .dev_msg(msg)
                .build(),
        ))
    }

    pub fn validation(msg: &str) -> Self {
        TypesError(Box::new(
            ErrorBuilder::new(codes::SCHEMA_VALIDATION)
                .user_msg("Value failed validation.")
                .dev_msg(msg)
                .build(),
        ))
    }
}
