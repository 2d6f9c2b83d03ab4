// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use basira_server_auth_clerk::{ClerkError, WebhookError};
use basira_server_db::DbError;
use basira_server_llm_openai::OpenAIError;
use serde::Serialize;
use thiserror::Error;

/// Top-level error type for HTTP handlers.
#[derive(Debug, Error)]
pub enum ServerError {
	/// No valid session accompanied the request.
	#[error("Authentication required")]
	Unauthorized,

	#[error("{0}")]
	NotFound(String),

	#[error("{0}")]
	BadRequest(String),

	/// A vendor integration is missing its configuration.
	#[error("{0} is not configured")]
	NotConfigured(&'static str),

	#[error(transparent)]
	Auth(ClerkError),

	#[error(transparent)]
	Llm(#[from] OpenAIError),

	#[error(transparent)]
	Db(#[from] DbError),
}

impl From<ClerkError> for ServerError {
	fn from(error: ClerkError) -> Self {
		match error {
			// The provider saying no is the caller's 401, not our fault.
			ClerkError::Unauthorized => ServerError::Unauthorized,
			other => ServerError::Auth(other),
		}
	}
}

impl From<WebhookError> for ServerError {
	fn from(error: WebhookError) -> Self {
		ServerError::BadRequest(error.to_string())
	}
}

/// Error body shape shared by every failing response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
}

impl ServerError {
	fn status(&self) -> StatusCode {
		match self {
			ServerError::Unauthorized => StatusCode::UNAUTHORIZED,
			ServerError::NotFound(_) => StatusCode::NOT_FOUND,
			ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
			ServerError::NotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
			ServerError::Auth(_) | ServerError::Llm(_) | ServerError::Db(_) => {
				StatusCode::BAD_GATEWAY
			}
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let status = self.status();
		if status.is_server_error() {
			tracing::error!(error = %self, status = %status, "request failed");
		} else {
			tracing::debug!(error = %self, status = %status, "request rejected");
		}
		let body = ErrorResponse {
			error: self.to_string(),
		};
		(status, Json(body)).into_response()
	}
}
