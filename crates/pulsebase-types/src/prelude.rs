pub use crate::errors::TypesError;
pub use crate::severity::Severity;
pub use crate::time::{TimeSpec, Timestamp};
