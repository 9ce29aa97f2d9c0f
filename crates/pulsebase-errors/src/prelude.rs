pub use crate::codes::{self, ErrorCode};
pub use crate::obj::{ErrorBuilder, ErrorObj};
pub use crate::retry::{classify_status, RetryClass};
