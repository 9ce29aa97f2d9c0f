#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RetryClass {
    None,
    Transient,
    Permanent,
}

impl RetryClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            RetryClass::None => "none",
            RetryClass::Transient => "transient",
            RetryClass::Permanent => "permanent",
        }
    }
}

/// Advisory classification of an HTTP status. The client never retries on
/// its own; callers wanting a retry loop key off this.
pub fn classify_status(status: u16) -> RetryClass {
    match status {
        429 | 500..=599 => RetryClass::Transient,
        _ => RetryClass::Permanent,
    }
}
