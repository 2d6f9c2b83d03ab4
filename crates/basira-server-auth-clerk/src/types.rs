// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Clerk API payload types.

use serde::Deserialize;

/// A session the provider has vouched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedSession {
	/// The provider's user id (`user_*`).
	pub user_id: String,
	/// The provider's session id (`sess_*`), when reported.
	pub session_id: Option<String>,
}

/// The user-lifecycle webhook events Basira provisions from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookEventKind {
	UserCreated,
	UserUpdated,
	UserDeleted,
	/// Any event type Basira does not act on; acknowledged and ignored.
	Other(String),
}

/// One webhook delivery, signature already verified.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
	#[serde(rename = "type")]
	pub event_type: String,
	pub data: UserEventData,
}

impl WebhookEvent {
	pub fn kind(&self) -> WebhookEventKind {
		match self.event_type.as_str() {
			"user.created" => WebhookEventKind::UserCreated,
			"user.updated" => WebhookEventKind::UserUpdated,
			"user.deleted" => WebhookEventKind::UserDeleted,
			other => WebhookEventKind::Other(other.to_string()),
		}
	}
}

/// The user fields Basira provisions from. Deletion events carry only the
/// id, so everything else defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserEventData {
	pub id: String,
	#[serde(default)]
	pub email_addresses: Vec<EmailAddress>,
	#[serde(default)]
	pub first_name: Option<String>,
	#[serde(default)]
	pub last_name: Option<String>,
}

impl UserEventData {
	/// The primary (first-listed) email address, when present.
	pub fn primary_email(&self) -> Option<&str> {
		self.email_addresses
			.first()
			.map(|entry| entry.email_address.as_str())
	}
}

/// One entry of the provider's `email_addresses` array.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailAddress {
	pub email_address: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn event_kind_maps_known_types() {
		let event: WebhookEvent = serde_json::from_value(serde_json::json!({
			"type": "user.created",
			"data": {"id": "user_1"}
		}))
		.unwrap();
		assert_eq!(event.kind(), WebhookEventKind::UserCreated);
	}

	#[test]
	fn unknown_event_types_are_preserved() {
		let event: WebhookEvent = serde_json::from_value(serde_json::json!({
			"type": "session.created",
			"data": {"id": "sess_1"}
		}))
		.unwrap();
		assert_eq!(
			event.kind(),
			WebhookEventKind::Other("session.created".to_string())
		);
	}

	#[test]
	fn user_payload_parses_clerk_shape() {
		let event: WebhookEvent = serde_json::from_value(serde_json::json!({
			"type": "user.created",
			"data": {
				"id": "user_2abc",
				"email_addresses": [{"email_address": "amina@example.com"}],
				"first_name": "Amina",
				"last_name": "Khan"
			}
		}))
		.unwrap();
		assert_eq!(event.data.id, "user_2abc");
		assert_eq!(event.data.primary_email(), Some("amina@example.com"));
		assert_eq!(event.data.first_name.as_deref(), Some("Amina"));
	}

	#[test]
	fn deletion_payload_needs_only_the_id() {
		let event: WebhookEvent = serde_json::from_value(serde_json::json!({
			"type": "user.deleted",
			"data": {"id": "user_2abc"}
		}))
		.unwrap();
		assert_eq!(event.kind(), WebhookEventKind::UserDeleted);
		assert!(event.data.primary_email().is_none());
	}
}
