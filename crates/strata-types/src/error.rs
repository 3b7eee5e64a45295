//! Error type shared by the settings core, the adapters and the server.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub type StResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// A settings scope was opened for a context that already had one open.
	/// Carries the label of the offending context.
	ScopeAlreadyOpen(Box<str>),
	/// The persisted property store could not serve the call.
	StoreUnavailable(String),
	NotFound,
	PermissionDenied,
	ValidationError(String),
	ConfigError(String),
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl Error {
	fn code(&self) -> &'static str {
		match self {
			Error::ScopeAlreadyOpen(_) => "E-SCOPE-OPEN",
			Error::StoreUnavailable(_) => "E-STORE-UNAVAILABLE",
			Error::NotFound => "E-NOT-FOUND",
			Error::PermissionDenied => "E-PERMISSION-DENIED",
			Error::ValidationError(_) => "E-VALIDATION",
			Error::ConfigError(_) => "E-CONFIG",
			Error::Internal(_) | Error::Io(_) => "E-INTERNAL",
		}
	}

	fn status(&self) -> StatusCode {
		match self {
			Error::NotFound => StatusCode::NOT_FOUND,
			Error::PermissionDenied => StatusCode::FORBIDDEN,
			Error::ValidationError(_) => StatusCode::BAD_REQUEST,
			Error::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
			Error::ScopeAlreadyOpen(_)
			| Error::ConfigError(_)
			| Error::Internal(_)
			| Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::ScopeAlreadyOpen(context) => write!(
				f,
				"scope opened twice for context '{}' or state wasn't cleared last time it was used",
				context
			),
			Error::StoreUnavailable(msg) => write!(f, "property store unavailable: {}", msg),
			Error::NotFound => write!(f, "not found"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let status = self.status();
		// Internal details stay in the log
		let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
			"Internal server error".to_string()
		} else {
			self.to_string()
		};
		let body = serde_json::json!({
			"error": {
				"code": self.code(),
				"message": message,
			}
		});
		(status, Json(body)).into_response()
	}
}


// vim: ts=4
