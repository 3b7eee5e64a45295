//! Settings management handlers

use axum::{
	Json,
	extract::{Path, State},
	http::{HeaderMap, StatusCode, header::AUTHORIZATION},
};
use std::collections::{BTreeMap, HashMap};

use crate::{
	app::{ADMIN_TOKEN, AppState},
	prelude::*,
	scope::{RequestId, RequestSettings},
	types::{ApiResponse, SettingResponse, UpdateSettingRequest},
};

const MAX_KEY_LEN: usize = 512;

fn validate_key(key: &str) -> StResult<()> {
	if key.is_empty() || key.len() > MAX_KEY_LEN {
		return Err(Error::ValidationError(format!(
			"Setting key must be 1..={} bytes long",
			MAX_KEY_LEN
		)));
	}
	if key.chars().any(|c| c.is_whitespace() || c.is_control()) {
		return Err(Error::ValidationError(format!("Invalid setting key: '{}'", key)));
	}
	Ok(())
}

/// Writes are allowed only with `Authorization: Bearer <server.admin_token>`
fn require_admin(app: &AppState, headers: &HeaderMap) -> StResult<()> {
	let Some(expected) = app.settings.static_settings().get(ADMIN_TOKEN).filter(|t| !t.is_empty())
	else {
		warn!("Rejecting settings update: {} is not configured", ADMIN_TOKEN);
		return Err(Error::PermissionDenied);
	};
	let provided = headers
		.get(AUTHORIZATION)
		.and_then(|v| v.to_str().ok())
		.and_then(|v| v.strip_prefix("Bearer "));
	if provided == Some(expected) {
		Ok(())
	} else {
		warn!("Rejecting settings update: bad or missing admin token");
		Err(Error::PermissionDenied)
	}
}

/// Stores the new value (or deletes it) and mirrors the change into the
/// request scope, so later reads in the same request see it.
async fn save(
	app: &AppState,
	settings: &RequestSettings,
	key: &str,
	value: Option<&str>,
) -> StResult<()> {
	let adapter = app.settings.adapter();
	if let Some(value) = value {
		adapter.upsert_property(key, Some(value)).await?;
		settings.set(&app.settings, key, value).await;
	} else {
		adapter.delete_property(key).await?;
		settings.remove(&app.settings, key).await;
	}
	Ok(())
}

/// GET /api/settings - all stored settings with static settings on top
pub async fn list_settings(
	State(app): State<App>,
	RequestId(req_id): RequestId,
) -> StResult<(StatusCode, Json<ApiResponse<BTreeMap<String, String>>>)> {
	let entries: BTreeMap<String, String> = app.settings.all_entries().await?.into_iter().collect();
	let response = ApiResponse::new(entries).with_req_id(req_id);

	Ok((StatusCode::OK, Json(response)))
}

/// GET /api/settings/{key} - a single resolved setting
pub async fn get_setting(
	State(app): State<App>,
	settings: RequestSettings,
	RequestId(req_id): RequestId,
	Path(key): Path<String>,
) -> StResult<(StatusCode, Json<ApiResponse<SettingResponse>>)> {
	validate_key(&key)?;
	let value = settings.get(&app.settings, &key).await?.ok_or(Error::NotFound)?;

	let response = ApiResponse::new(SettingResponse { key, value }).with_req_id(req_id);
	Ok((StatusCode::OK, Json(response)))
}

/// PUT /api/settings/{key} - store or delete a setting
pub async fn put_setting(
	State(app): State<App>,
	settings: RequestSettings,
	RequestId(req_id): RequestId,
	Path(key): Path<String>,
	headers: HeaderMap,
	Json(req): Json<UpdateSettingRequest>,
) -> StResult<StatusCode> {
	require_admin(&app, &headers)?;
	validate_key(&key)?;

	save(&app, &settings, &key, req.value.as_deref()).await?;
	info!("[{}] setting '{}' {}", req_id, key, if req.value.is_some() { "updated" } else { "deleted" });

	Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/settings - store or delete several settings at once
pub async fn patch_settings(
	State(app): State<App>,
	settings: RequestSettings,
	RequestId(req_id): RequestId,
	headers: HeaderMap,
	Json(req): Json<HashMap<String, Option<String>>>,
) -> StResult<StatusCode> {
	require_admin(&app, &headers)?;
	for key in req.keys() {
		validate_key(key)?;
	}

	for (key, value) in &req {
		save(&app, &settings, key, value.as_deref()).await?;
	}
	info!("[{}] {} settings updated", req_id, req.len());

	Ok(StatusCode::NO_CONTENT)
}


// vim: ts=4
