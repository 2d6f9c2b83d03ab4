// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Webhook signature verification for Clerk deliveries.
//!
//! Deliveries carry three headers (`svix-id`, `svix-timestamp`,
//! `svix-signature`); the signature covers `{id}.{timestamp}.{payload}`
//! under the endpoint's `whsec_` secret. A missing header, a stale
//! timestamp, or a signature mismatch all reject the delivery before the
//! payload is parsed.

use basira_common_config::SecretString;
use basira_common_webhook::{verify_timestamped, TimestampedSignatureError};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use crate::types::WebhookEvent;

/// Header carrying the delivery id.
pub const SVIX_ID_HEADER: &str = "svix-id";
/// Header carrying the delivery timestamp (unix seconds).
pub const SVIX_TIMESTAMP_HEADER: &str = "svix-timestamp";
/// Header carrying the space-separated signature candidates.
pub const SVIX_SIGNATURE_HEADER: &str = "svix-signature";

/// The provider documents a five-minute tolerance window.
pub const DEFAULT_TOLERANCE_SECS: u64 = 300;

/// Reasons a delivery is rejected.
#[derive(Debug, Error)]
pub enum WebhookError {
	/// A required `svix-*` header is absent.
	#[error("missing webhook header: {0}")]
	MissingHeader(&'static str),

	/// The timestamp header is not unix seconds.
	#[error("invalid webhook timestamp: {0:?}")]
	InvalidTimestamp(String),

	/// Signature verification failed.
	#[error(transparent)]
	Signature(#[from] TimestampedSignatureError),

	/// The payload is not a webhook event Basira can parse.
	#[error("invalid webhook payload: {0}")]
	InvalidPayload(String),
}

/// Verifies and parses Clerk webhook deliveries.
pub struct WebhookVerifier {
	secret: SecretString,
	tolerance_secs: u64,
}

impl WebhookVerifier {
	/// Creates a verifier for an endpoint's `whsec_` secret.
	pub fn new(secret: impl Into<SecretString>) -> Self {
		Self {
			secret: secret.into(),
			tolerance_secs: DEFAULT_TOLERANCE_SECS,
		}
	}

	/// Overrides the timestamp tolerance window.
	pub fn with_tolerance_secs(mut self, tolerance_secs: u64) -> Self {
		self.tolerance_secs = tolerance_secs;
		self
	}

	/// Verifies a delivery's signature and parses its payload.
	///
	/// Header values arrive as `Option`s straight from the request so the
	/// missing-header rejection lives here with the rest of the policy.
	/// `now` is a parameter (not a clock read) so the tolerance window is
	/// testable.
	pub fn verify_and_parse(
		&self,
		id: Option<&str>,
		timestamp: Option<&str>,
		signature: Option<&str>,
		payload: &[u8],
		now: DateTime<Utc>,
	) -> Result<WebhookEvent, WebhookError> {
		let id = id.ok_or(WebhookError::MissingHeader(SVIX_ID_HEADER))?;
		let timestamp = timestamp.ok_or(WebhookError::MissingHeader(SVIX_TIMESTAMP_HEADER))?;
		let signature = signature.ok_or(WebhookError::MissingHeader(SVIX_SIGNATURE_HEADER))?;

		let timestamp: i64 = timestamp
			.parse()
			.map_err(|_| WebhookError::InvalidTimestamp(timestamp.to_string()))?;

		verify_timestamped(
			self.secret.expose(),
			id,
			timestamp,
			payload,
			signature,
			now.timestamp(),
			self.tolerance_secs,
		)?;

		let event: WebhookEvent = serde_json::from_slice(payload)
			.map_err(|e| WebhookError::InvalidPayload(e.to_string()))?;
		debug!(delivery = id, event_type = %event.event_type, "webhook delivery verified");
		Ok(event)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use basira_common_webhook::sign_timestamped;
	use chrono::TimeZone;

	const SECRET: &str = "whsec_MfKQ9r8GKYqrTwjUPD8ILPZIo2LaLaSw";

	fn now_at(timestamp: i64) -> DateTime<Utc> {
		Utc.timestamp_opt(timestamp, 0).unwrap()
	}

	fn signed(payload: &[u8], timestamp: i64) -> String {
		sign_timestamped(SECRET, "msg_1", timestamp, payload).unwrap()
	}

	#[test]
	fn valid_delivery_parses() {
		let payload = br#"{"type":"user.created","data":{"id":"user_1"}}"#;
		let signature = signed(payload, 1_700_000_000);
		let event = WebhookVerifier::new(SECRET)
			.verify_and_parse(
				Some("msg_1"),
				Some("1700000000"),
				Some(&signature),
				payload,
				now_at(1_700_000_030),
			)
			.unwrap();
		assert_eq!(event.data.id, "user_1");
	}

	#[test]
	fn missing_headers_are_rejected() {
		let verifier = WebhookVerifier::new(SECRET);
		let result = verifier.verify_and_parse(
			None,
			Some("1700000000"),
			Some("v1,AAAA"),
			b"{}",
			now_at(1_700_000_000),
		);
		assert!(matches!(result, Err(WebhookError::MissingHeader(SVIX_ID_HEADER))));

		let result = verifier.verify_and_parse(
			Some("msg_1"),
			None,
			Some("v1,AAAA"),
			b"{}",
			now_at(1_700_000_000),
		);
		assert!(matches!(
			result,
			Err(WebhookError::MissingHeader(SVIX_TIMESTAMP_HEADER))
		));

		let result = verifier.verify_and_parse(
			Some("msg_1"),
			Some("1700000000"),
			None,
			b"{}",
			now_at(1_700_000_000),
		);
		assert!(matches!(
			result,
			Err(WebhookError::MissingHeader(SVIX_SIGNATURE_HEADER))
		));
	}

	#[test]
	fn garbage_timestamp_is_rejected() {
		let result = WebhookVerifier::new(SECRET).verify_and_parse(
			Some("msg_1"),
			Some("not-a-number"),
			Some("v1,AAAA"),
			b"{}",
			now_at(1_700_000_000),
		);
		assert!(matches!(result, Err(WebhookError::InvalidTimestamp(_))));
	}

	#[test]
	fn stale_delivery_is_rejected() {
		let payload = br#"{"type":"user.created","data":{"id":"user_1"}}"#;
		let signature = signed(payload, 1_700_000_000);
		let result = WebhookVerifier::new(SECRET).verify_and_parse(
			Some("msg_1"),
			Some("1700000000"),
			Some(&signature),
			payload,
			now_at(1_700_000_000 + 301),
		);
		assert!(matches!(
			result,
			Err(WebhookError::Signature(
				TimestampedSignatureError::TimestampOutOfTolerance
			))
		));
	}

	#[test]
	fn tampered_payload_is_rejected() {
		let signature = signed(br#"{"type":"user.created","data":{"id":"user_1"}}"#, 1_700_000_000);
		let result = WebhookVerifier::new(SECRET).verify_and_parse(
			Some("msg_1"),
			Some("1700000000"),
			Some(&signature),
			br#"{"type":"user.deleted","data":{"id":"user_1"}}"#,
			now_at(1_700_000_000),
		);
		assert!(matches!(
			result,
			Err(WebhookError::Signature(TimestampedSignatureError::SignatureMismatch))
		));
	}

	#[test]
	fn verified_but_malformed_payload_is_rejected() {
		let payload = br#"{"no_type_field": true}"#;
		let signature = signed(payload, 1_700_000_000);
		let result = WebhookVerifier::new(SECRET).verify_and_parse(
			Some("msg_1"),
			Some("1700000000"),
			Some(&signature),
			payload,
			now_at(1_700_000_000),
		);
		assert!(matches!(result, Err(WebhookError::InvalidPayload(_))));
	}
}
