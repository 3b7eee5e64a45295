pub use crate::app::App;
pub use strata_types::error::{Error, StResult};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
