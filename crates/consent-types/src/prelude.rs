pub use crate::error::{CcResult, Error, FieldErrors};
pub use crate::types::{ApiResponse, StoreId};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
