// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Router-level tests for the public surface and the rejection paths
//! that need no vendor network access.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use basira_common_config::Secret;
use basira_common_webhook::sign_timestamped;
use basira_server::{create_app_state, create_router};
use basira_server_config::{AuthConfig, DatabaseConfig, LlmConfig, ServerConfig};
use tower::ServiceExt;

const WEBHOOK_SECRET: &str = "whsec_MfKQ9r8GKYqrTwjUPD8ILPZIo2LaLaSw";

fn complete_config() -> ServerConfig {
	ServerConfig {
		auth: AuthConfig {
			publishable_key: "pk_test_abc".to_string(),
			secret_key: Some(Secret::new("sk_test_abc".to_string())),
			webhook_secret: Some(Secret::new(WEBHOOK_SECRET.to_string())),
			..Default::default()
		},
		llm: LlmConfig {
			openai_api_key: Some(Secret::new("sk-openai-test".to_string())),
			model: "gpt-5-mini".to_string(),
			embedding_model: "text-embedding-3-small".to_string(),
			max_tokens: 1000,
			temperature: 0.7,
		},
		database: DatabaseConfig {
			url: "https://project.supabase.co".to_string(),
			anon_key: Some(Secret::new("anon-key".to_string())),
			service_role_key: Some(Secret::new("service-key".to_string())),
		},
		..Default::default()
	}
}

fn app(config: ServerConfig) -> Router {
	create_router(create_app_state(config))
}

async fn body_json(response: Response) -> serde_json::Value {
	let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
	serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: Response) -> String {
	let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
	String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_reports_missing_configuration() {
	let response = app(ServerConfig::default())
		.oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	let json = body_json(response).await;
	assert_eq!(json["message"], "Configuration validation failed");
	assert!(json["error"]
		.as_str()
		.unwrap()
		.contains("BASIRA_SERVER_OPENAI_API_KEY"));
}

#[tokio::test]
async fn health_summarizes_complete_configuration() {
	let response = app(complete_config())
		.oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let json = body_json(response).await;
	assert_eq!(json["message"], "Backend API is working!");
	assert_eq!(json["configuration"]["openai"]["model"], "gpt-5-mini");
	assert_eq!(json["configuration"]["openai"]["hasApiKey"], true);
	assert_eq!(json["configuration"]["clerk"]["hasWebhookSecret"], true);
	// Secrets never appear in the summary.
	let rendered = json.to_string();
	assert!(!rendered.contains("sk-openai-test"));
	assert!(!rendered.contains("service-key"));
}

#[tokio::test]
async fn landing_page_defaults_to_english_ltr() {
	let response = app(ServerConfig::default())
		.oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let set_cookie = response
		.headers()
		.get(header::SET_COOKIE)
		.and_then(|value| value.to_str().ok())
		.unwrap()
		.to_string();
	assert!(set_cookie.starts_with("basira_locale=en"));

	let html = body_text(response).await;
	assert!(html.contains("lang=\"en\""));
	assert!(html.contains("dir=\"ltr\""));
	assert!(html.contains("Quranic Insight"));
}

#[tokio::test]
async fn landing_page_language_selection_sets_cookie() {
	let response = app(ServerConfig::default())
		.oneshot(Request::builder().uri("/?lang=ar").body(Body::empty()).unwrap())
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let set_cookie = response
		.headers()
		.get(header::SET_COOKIE)
		.and_then(|value| value.to_str().ok())
		.unwrap()
		.to_string();
	assert!(set_cookie.starts_with("basira_locale=ar"));

	let html = body_text(response).await;
	assert!(html.contains("lang=\"ar\""));
	assert!(html.contains("dir=\"rtl\""));
	assert!(html.contains("بصيرة قرآنية"));
}

#[tokio::test]
async fn landing_page_honors_stored_preference() {
	let response = app(ServerConfig::default())
		.oneshot(
			Request::builder()
				.uri("/")
				.header(header::COOKIE, "basira_locale=ur")
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();

	let html = body_text(response).await;
	assert!(html.contains("lang=\"ur\""));
	assert!(html.contains("dir=\"rtl\""));
	assert!(html.contains("قرآنی بصیرت"));
}

#[tokio::test]
async fn landing_page_ignores_unsupported_preference() {
	let response = app(ServerConfig::default())
		.oneshot(
			Request::builder()
				.uri("/")
				.header(header::COOKIE, "basira_locale=fr")
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();

	let html = body_text(response).await;
	assert!(html.contains("lang=\"en\""));
	assert!(html.contains("dir=\"ltr\""));
}

#[tokio::test]
async fn landing_page_ignores_unsupported_selection() {
	let response = app(ServerConfig::default())
		.oneshot(
			Request::builder()
				.uri("/?lang=fr")
				.header(header::COOKIE, "basira_locale=ar")
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();

	// The stored preference stands; the bad selection changed nothing.
	let html = body_text(response).await;
	assert!(html.contains("lang=\"ar\""));
	assert!(html.contains("dir=\"rtl\""));
}

#[tokio::test]
async fn insights_requires_a_session() {
	let response = app(complete_config())
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/api/insights/generate")
				.header(header::CONTENT_TYPE, "application/json")
				.body(Body::from(r#"{"values":["patience"]}"#))
				.unwrap(),
		)
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
	let json = body_json(response).await;
	assert_eq!(json["error"], "Authentication required");
}

#[tokio::test]
async fn profile_requires_a_session() {
	let response = app(complete_config())
		.oneshot(
			Request::builder()
				.uri("/api/user/profile")
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
	let json = body_json(response).await;
	assert_eq!(json["error"], "Authentication required");
}

#[tokio::test]
async fn webhook_rejects_missing_headers() {
	let response = app(complete_config())
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/api/auth/webhook")
				.body(Body::from("{}"))
				.unwrap(),
		)
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	let json = body_json(response).await;
	assert!(json["error"].as_str().unwrap().contains("svix-id"));
}

#[tokio::test]
async fn webhook_rejects_bad_signature() {
	let response = app(complete_config())
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/api/auth/webhook")
				.header("svix-id", "msg_1")
				.header("svix-timestamp", chrono::Utc::now().timestamp().to_string())
				.header("svix-signature", "v1,AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=")
				.body(Body::from(r#"{"type":"user.created","data":{"id":"user_1"}}"#))
				.unwrap(),
		)
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn webhook_acknowledges_ignored_event_types() {
	let payload = br#"{"type":"session.created","data":{"id":"sess_1"}}"#;
	let timestamp = chrono::Utc::now().timestamp();
	let signature = sign_timestamped(WEBHOOK_SECRET, "msg_1", timestamp, payload).unwrap();

	let response = app(complete_config())
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/api/auth/webhook")
				.header("svix-id", "msg_1")
				.header("svix-timestamp", timestamp.to_string())
				.header("svix-signature", signature)
				.body(Body::from(payload.as_slice()))
				.unwrap(),
		)
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let json = body_json(response).await;
	assert_eq!(json["message"], "Webhook received");
}

#[tokio::test]
async fn webhook_acknowledges_user_events_without_a_store() {
	// Data store unconfigured: the event is dropped with a warning, not
	// bounced back to the provider for retry.
	let mut config = complete_config();
	config.database = DatabaseConfig::default();

	let payload = br#"{"type":"user.deleted","data":{"id":"user_1"}}"#;
	let timestamp = chrono::Utc::now().timestamp();
	let signature = sign_timestamped(WEBHOOK_SECRET, "msg_2", timestamp, payload).unwrap();

	let response = app(config)
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/api/auth/webhook")
				.header("svix-id", "msg_2")
				.header("svix-timestamp", timestamp.to_string())
				.header("svix-signature", signature)
				.body(Body::from(payload.as_slice()))
				.unwrap(),
		)
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn openapi_document_is_served() {
	let response = app(ServerConfig::default())
		.oneshot(
			Request::builder()
				.uri("/api/openapi.json")
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let json = body_json(response).await;
	assert!(json["paths"].get("/api/insights/generate").is_some());
}
