// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session extraction for authenticated routes.
//!
//! Requests carry the identity provider's session token as a bearer
//! value; verification is delegated to the provider via [`ClerkClient`].
//! Token values are never logged.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use basira_server_auth_clerk::{ClerkClient, VerifiedSession};
use tracing::debug;

use crate::api::AppState;
use crate::error::ServerError;

/// Dev-mode sessions resolve to this fixed user id.
pub const DEV_USER_ID: &str = "user_dev";

/// Extractor that rejects the request unless a valid session is present.
pub struct RequireAuth(pub VerifiedSession);

/// The bearer token from an `Authorization` header, if any.
pub fn bearer_token(parts: &Parts) -> Option<&str> {
	parts
		.headers
		.get(AUTHORIZATION)?
		.to_str()
		.ok()?
		.strip_prefix("Bearer ")
}

impl FromRequestParts<AppState> for RequireAuth {
	type Rejection = ServerError;

	async fn from_request_parts(
		parts: &mut Parts,
		state: &AppState,
	) -> Result<Self, Self::Rejection> {
		if state.config.auth.dev_mode {
			debug!("dev mode: bypassing session verification");
			return Ok(RequireAuth(VerifiedSession {
				user_id: DEV_USER_ID.to_string(),
				session_id: None,
			}));
		}

		let token = bearer_token(parts).ok_or(ServerError::Unauthorized)?;
		let clerk = state.clerk.as_ref().ok_or(ServerError::Unauthorized)?;
		let session = verify(clerk, token).await?;
		Ok(RequireAuth(session))
	}
}

async fn verify(clerk: &ClerkClient, token: &str) -> Result<VerifiedSession, ServerError> {
	let session = clerk.verify_session(token).await?;
	debug!(user_id = %session.user_id, "session verified");
	Ok(session)
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::http::Request;

	fn parts_with_auth(value: Option<&str>) -> Parts {
		let mut builder = Request::builder().uri("/");
		if let Some(value) = value {
			builder = builder.header(AUTHORIZATION, value);
		}
		let (parts, ()) = builder.body(()).unwrap().into_parts();
		parts
	}

	#[test]
	fn bearer_token_is_extracted() {
		let parts = parts_with_auth(Some("Bearer sess_token_abc"));
		assert_eq!(bearer_token(&parts), Some("sess_token_abc"));
	}

	#[test]
	fn missing_header_yields_none() {
		let parts = parts_with_auth(None);
		assert!(bearer_token(&parts).is_none());
	}

	#[test]
	fn non_bearer_scheme_yields_none() {
		let parts = parts_with_auth(Some("Basic dXNlcjpwYXNz"));
		assert!(bearer_token(&parts).is_none());
	}
}
