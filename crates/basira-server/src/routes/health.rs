// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Health and configuration-summary handler.
//!
//! Mirrors what the deployment actually has: secrets are reported as
//! present/absent booleans, never echoed.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use basira_server_config::validate_config;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;

/// Successful health payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
	pub message: String,
	pub timestamp: String,
	pub configuration: ConfigurationSummary,
	pub status: String,
}

/// Redacted configuration summary.
#[derive(Debug, Serialize, ToSchema)]
pub struct ConfigurationSummary {
	pub openai: OpenAISummary,
	pub supabase: SupabaseSummary,
	pub clerk: ClerkSummary,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpenAISummary {
	pub model: String,
	pub embedding_model: String,
	pub max_tokens: u32,
	pub temperature: f32,
	pub has_api_key: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupabaseSummary {
	pub url: String,
	pub has_anon_key: bool,
	pub has_service_role_key: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClerkSummary {
	pub has_publishable_key: bool,
	pub has_secret_key: bool,
	pub has_webhook_secret: bool,
}

/// Failing health payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthErrorResponse {
	pub message: String,
	pub error: String,
	pub timestamp: String,
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Configuration is complete", body = HealthResponse),
        (status = 500, description = "Configuration is incomplete", body = HealthErrorResponse)
    ),
    tag = "health"
)]
/// GET /api/health - configuration validation and summary.
pub async fn health_check(State(state): State<AppState>) -> Response {
	let timestamp = chrono::Utc::now().to_rfc3339();

	if let Err(error) = validate_config(&state.config) {
		return (
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(HealthErrorResponse {
				message: "Configuration validation failed".to_string(),
				error: error.to_string(),
				timestamp,
			}),
		)
			.into_response();
	}

	let config = &state.config;
	let response = HealthResponse {
		message: "Backend API is working!".to_string(),
		timestamp,
		configuration: ConfigurationSummary {
			openai: OpenAISummary {
				model: config.llm.model.clone(),
				embedding_model: config.llm.embedding_model.clone(),
				max_tokens: config.llm.max_tokens,
				temperature: config.llm.temperature,
				has_api_key: config.llm.openai_api_key.is_some(),
			},
			supabase: SupabaseSummary {
				url: config.database.url.clone(),
				has_anon_key: config.database.anon_key.is_some(),
				has_service_role_key: config.database.service_role_key.is_some(),
			},
			clerk: ClerkSummary {
				has_publishable_key: !config.auth.publishable_key.is_empty(),
				has_secret_key: config.auth.secret_key.is_some(),
				has_webhook_secret: config.auth.webhook_secret.is_some(),
			},
		},
		status: "All configurations validated successfully".to_string(),
	};

	(StatusCode::OK, Json(response)).into_response()
}
