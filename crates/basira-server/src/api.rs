// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application state and HTTP router assembly.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use basira_server_auth_clerk::{ClerkClient, WebhookVerifier};
use basira_server_config::ServerConfig;
use basira_server_db::UserRepository;
use basira_server_llm_openai::{OpenAIClient, OpenAIConfig};
use utoipa::OpenApi;

use crate::routes;

/// Application state shared across handlers.
///
/// Vendor clients are `Option`s: a deployment missing a key still boots,
/// reports the gap on `/api/health`, and fails only the routes that need
/// the missing integration.
#[derive(Clone)]
pub struct AppState {
	pub config: Arc<ServerConfig>,
	pub clerk: Option<Arc<ClerkClient>>,
	pub openai: Option<Arc<OpenAIClient>>,
	pub users: Option<Arc<UserRepository>>,
	pub webhook_verifier: Option<Arc<WebhookVerifier>>,
}

/// Build application state from resolved configuration, constructing
/// each vendor client that has the configuration it needs.
pub fn create_app_state(config: ServerConfig) -> AppState {
	let clerk = config
		.auth
		.secret_key
		.as_ref()
		.map(|key| {
			Arc::new(ClerkClient::new(key.expose().as_str()).with_base_url(config.auth.api_url.clone()))
		});

	let openai = config.llm.openai_api_key.as_ref().map(|key| {
		Arc::new(OpenAIClient::new(
			OpenAIConfig::new(key.expose().as_str())
				.with_model(config.llm.model.clone())
				.with_max_tokens(config.llm.max_tokens)
				.with_temperature(config.llm.temperature),
		))
	});

	let users = match (&config.database.url, &config.database.service_role_key) {
		(url, Some(key)) if !url.is_empty() => Some(Arc::new(UserRepository::new(
			url.clone(),
			key.expose().as_str(),
		))),
		_ => None,
	};

	let webhook_verifier = config
		.auth
		.webhook_secret
		.as_ref()
		.map(|secret| Arc::new(WebhookVerifier::new(secret.expose().as_str())));

	AppState {
		config: Arc::new(config),
		clerk,
		openai,
		users,
		webhook_verifier,
	}
}

#[derive(OpenApi)]
#[openapi(
	paths(
		routes::health::health_check,
		routes::insights::generate_insight,
		routes::profile::get_profile,
		routes::webhooks::clerk_webhook,
	),
	tags(
		(name = "health", description = "Configuration and liveness"),
		(name = "insights", description = "Insight generation"),
		(name = "user", description = "User profile"),
		(name = "webhooks", description = "Identity-provider webhooks"),
	)
)]
struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
	Json(ApiDoc::openapi())
}

/// Assemble the router.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		// Localized landing/status page (public)
		.route("/", get(routes::home::landing_page))
		// Health and configuration summary (public)
		.route("/api/health", get(routes::health::health_check))
		// Identity-provider webhook (public, signature-verified)
		.route("/api/auth/webhook", post(routes::webhooks::clerk_webhook))
		// Authenticated product routes
		.route(
			"/api/insights/generate",
			post(routes::insights::generate_insight),
		)
		.route("/api/user/profile", get(routes::profile::get_profile))
		// API documentation
		.route("/api/openapi.json", get(openapi_json))
		.with_state(state)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_config_builds_no_clients() {
		let state = create_app_state(ServerConfig::default());
		assert!(state.clerk.is_none());
		assert!(state.openai.is_none());
		assert!(state.users.is_none());
		assert!(state.webhook_verifier.is_none());
	}

	#[test]
	fn openapi_document_includes_routes() {
		let doc = ApiDoc::openapi();
		let json = serde_json::to_string(&doc).unwrap();
		assert!(json.contains("/api/insights/generate"));
		assert!(json.contains("/api/user/profile"));
	}
}
