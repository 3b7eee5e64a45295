//! Request and response bodies of the settings API

use serde::{Deserialize, Serialize};

/// Envelope of every successful response
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
	pub data: T,
	#[serde(rename = "reqId", skip_serializing_if = "Option::is_none")]
	pub req_id: Option<String>,
}

impl<T> ApiResponse<T> {
	pub fn new(data: T) -> Self {
		Self { data, req_id: None }
	}

	pub fn with_req_id(mut self, req_id: impl Into<String>) -> Self {
		self.req_id = Some(req_id.into());
		self
	}
}

#[derive(Debug, Serialize)]
pub struct SettingResponse {
	pub key: String,
	pub value: String,
}

/// Body of `PUT /api/settings/{key}`. A null value deletes the property.
#[derive(Debug, Deserialize)]
pub struct UpdateSettingRequest {
	pub value: Option<String>,
}

// vim: ts=4
