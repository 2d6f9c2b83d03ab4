// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Identity-provider webhook: verify the delivery, then provision.
//!
//! `user.created`, `user.updated`, and `user.deleted` map onto the user
//! table; every other event type is acknowledged and ignored so the
//! provider does not retry deliveries Basira has no interest in.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use basira_server_auth_clerk::{
	UserEventData, WebhookEventKind, SVIX_ID_HEADER, SVIX_SIGNATURE_HEADER, SVIX_TIMESTAMP_HEADER,
};
use basira_server_db::{NewUser, UserRepository, UserUpdate};
use serde::Serialize;
use tracing::{debug, info, warn};
use utoipa::ToSchema;

use crate::api::AppState;
use crate::error::ServerError;

/// Acknowledgement body, sent for every accepted delivery.
#[derive(Debug, Serialize, ToSchema)]
pub struct WebhookAck {
	pub message: String,
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
	headers.get(name).and_then(|value| value.to_str().ok())
}

#[utoipa::path(
    post,
    path = "/api/auth/webhook",
    request_body = String,
    responses(
        (status = 200, description = "Delivery accepted", body = WebhookAck),
        (status = 400, description = "Missing headers or bad signature")
    ),
    tag = "webhooks"
)]
/// POST /api/auth/webhook - signature-verified user lifecycle events.
pub async fn clerk_webhook(
	State(state): State<AppState>,
	headers: HeaderMap,
	body: Bytes,
) -> Result<Json<WebhookAck>, ServerError> {
	let verifier = state
		.webhook_verifier
		.as_ref()
		.ok_or(ServerError::NotConfigured("Webhook verification"))?;

	let event = verifier.verify_and_parse(
		header(&headers, SVIX_ID_HEADER),
		header(&headers, SVIX_TIMESTAMP_HEADER),
		header(&headers, SVIX_SIGNATURE_HEADER),
		&body,
		chrono::Utc::now(),
	)?;

	match (&state.users, event.kind()) {
		(Some(users), WebhookEventKind::UserCreated) => {
			provision_user(users, &event.data).await?;
		}
		(Some(users), WebhookEventKind::UserUpdated) => {
			update_user(users, &event.data).await?;
		}
		(Some(users), WebhookEventKind::UserDeleted) => {
			users.delete(&event.data.id).await?;
			info!(clerk_id = %event.data.id, "user removed");
		}
		(None, kind @ (WebhookEventKind::UserCreated
		| WebhookEventKind::UserUpdated
		| WebhookEventKind::UserDeleted)) => {
			warn!(?kind, "data store not configured, dropping user event");
		}
		(_, WebhookEventKind::Other(event_type)) => {
			debug!(event_type = %event_type, "ignoring webhook event type");
		}
	}

	Ok(Json(WebhookAck {
		message: "Webhook received".to_string(),
	}))
}

async fn provision_user(users: &UserRepository, data: &UserEventData) -> Result<(), ServerError> {
	// Deliveries can repeat; an already-provisioned user is not an error.
	if users.get_by_clerk_id(&data.id).await?.is_some() {
		info!(clerk_id = %data.id, "user already provisioned");
		return Ok(());
	}

	users
		.create(&NewUser {
			clerk_id: data.id.clone(),
			email: data.primary_email().unwrap_or_default().to_string(),
			first_name: data.first_name.clone(),
			last_name: data.last_name.clone(),
		})
		.await?;
	info!(clerk_id = %data.id, "user provisioned");
	Ok(())
}

async fn update_user(users: &UserRepository, data: &UserEventData) -> Result<(), ServerError> {
	let updated = users
		.update(
			&data.id,
			&UserUpdate {
				email: data.primary_email().map(str::to_string),
				first_name: data.first_name.clone(),
				last_name: data.last_name.clone(),
			},
		)
		.await?;

	match updated {
		Some(_) => info!(clerk_id = %data.id, "user updated"),
		None => warn!(clerk_id = %data.id, "update for a user that was never provisioned"),
	}
	Ok(())
}
