// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Insight generation: one pass-through call to the text-generation API.

use axum::extract::State;
use axum::Json;
use basira_server_llm_openai::GenerateOptions;
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::auth_middleware::RequireAuth;
use crate::error::ServerError;

/// Response to a generation request. The caller's request body is echoed
/// back under `data`, as the original API did.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsightResponse {
	pub message: String,
	pub user_id: String,
	pub insight: String,
	pub model: String,
	#[schema(value_type = Object)]
	pub data: serde_json::Value,
}

#[utoipa::path(
    post,
    path = "/api/insights/generate",
    request_body = Object,
    responses(
        (status = 200, description = "Insight generated", body = InsightResponse),
        (status = 401, description = "Authentication required"),
        (status = 502, description = "Text-generation API failure")
    ),
    tag = "insights"
)]
/// POST /api/insights/generate - generate one insight for the caller.
pub async fn generate_insight(
	State(state): State<AppState>,
	RequireAuth(session): RequireAuth,
	Json(body): Json<serde_json::Value>,
) -> Result<Json<InsightResponse>, ServerError> {
	let openai = state
		.openai
		.as_ref()
		.ok_or(ServerError::NotConfigured("Text generation"))?;

	// The body is the onboarding/profile context collected by the client;
	// it is embedded verbatim, there is no prompt engineering here.
	let prompt = format!("Generate a meaningful insight from the Quran based on: {body}");

	let insight = openai.generate_text(&prompt, &GenerateOptions::default()).await?;

	info!(user_id = %session.user_id, model = %openai.model(), "insight generated");

	Ok(Json(InsightResponse {
		message: "Insight generated successfully".to_string(),
		user_id: session.user_id,
		insight,
		model: openai.model().to_string(),
		data: body,
	}))
}
