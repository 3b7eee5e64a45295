pub use strata_types::error::{Error, StResult};
pub use strata_types::property_adapter::{PropertyAdapter, StoredProperty};

pub use tracing::{debug, error, info, info_span, warn};

// vim: ts=4
