pub use crate::app::App;
pub use consent_types::error::{CcResult, Error, FieldErrors};
pub use consent_types::types::{ApiResponse, StoreId};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
