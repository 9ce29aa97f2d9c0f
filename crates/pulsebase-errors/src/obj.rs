use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::codes::ErrorCode;
use crate::retry::RetryClass;

#[derive(Clone, Debug, Serialize)]
pub struct ErrorObj {
    pub code: ErrorCode,
    pub message_user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_dev: Option<String>,
    pub retry: RetryClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl ErrorObj {
    pub fn meta_str(&self, key: &str) -> Option<&str> {
        self.meta.as_ref()?.get(key)?.as_str()
    }

    pub fn meta_u64(&self, key: &str) -> Option<u64> {
        self.meta.as_ref()?.get(key)?.as_u64()
    }
}

impl fmt::Display for ErrorObj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.0, self.message_user)?;
        if let Some(dev) = &self.message_dev {
            write!(f, " ({dev})")?;
        }
        Ok(())
    }
}

pub struct ErrorBuilder {
    code: ErrorCode,
    message_user: String,
    message_dev: Option<String>,
    retry: RetryClass,
    meta: Option<Value>,
}

impl ErrorBuilder {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message_user: String::new(),
            message_dev: None,
            retry: RetryClass::Permanent,
            meta: None,
        }
    }

    pub fn user_msg(mut self, msg: impl Into<String>) -> Self {
        self.message_user = msg.into();
        self
    }

    pub fn dev_msg(mut self, msg: impl Into<String>) -> Self {
        self.message_dev = Some(msg.into());
        self
    }

    pub fn retry(mut self, retry: RetryClass) -> Self {
        self.retry = retry;
        self
    }

    pub fn meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn build(self) -> ErrorObj {
        ErrorObj {
            code: self.code,
            message_user: self.message_user,
            message_dev: self.message_dev,
            retry: self.retry,
            meta: self.meta,
        }
    }
}
