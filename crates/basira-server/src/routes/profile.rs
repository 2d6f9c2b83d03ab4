// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User profile: a read of the row the webhook provisioned.

use axum::extract::State;
use axum::Json;
use basira_server_db::UserRecord;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::auth_middleware::RequireAuth;
use crate::error::ServerError;

/// The stored profile for the authenticated user.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
	pub user_id: String,
	pub email: String,
	pub first_name: Option<String>,
	pub last_name: Option<String>,
	pub created_at: Option<String>,
}

impl From<UserRecord> for ProfileResponse {
	fn from(record: UserRecord) -> Self {
		Self {
			user_id: record.clerk_id,
			email: record.email,
			first_name: record.first_name,
			last_name: record.last_name,
			created_at: record.created_at,
		}
	}
}

#[utoipa::path(
    get,
    path = "/api/user/profile",
    responses(
        (status = 200, description = "Stored profile", body = ProfileResponse),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Profile not provisioned yet")
    ),
    tag = "user"
)]
/// GET /api/user/profile - the authenticated user's stored profile.
pub async fn get_profile(
	State(state): State<AppState>,
	RequireAuth(session): RequireAuth,
) -> Result<Json<ProfileResponse>, ServerError> {
	let users = state
		.users
		.as_ref()
		.ok_or(ServerError::NotConfigured("Data store"))?;

	let record = users
		.get_by_clerk_id(&session.user_id)
		.await?
		.ok_or_else(|| {
			ServerError::NotFound("User profile has not been provisioned yet".to_string())
		})?;

	Ok(Json(ProfileResponse::from(record)))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn profile_response_keys_are_camel_case() {
		let record = UserRecord {
			id: None,
			clerk_id: "user_1".to_string(),
			email: "amina@example.com".to_string(),
			first_name: Some("Amina".to_string()),
			last_name: None,
			created_at: Some("2025-05-01T10:00:00Z".to_string()),
		};
		let json = serde_json::to_value(ProfileResponse::from(record)).unwrap();
		assert_eq!(json["userId"], "user_1");
		assert_eq!(json["firstName"], "Amina");
		assert!(json.get("clerk_id").is_none());
	}
}
