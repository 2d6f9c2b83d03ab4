// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared HMAC-SHA256 webhook signature utilities.
//!
//! Two schemes live here:
//!
//! - Plain hex-encoded HMAC-SHA256 over a payload
//!   ([`compute_hmac_sha256`] / [`verify_hmac_sha256`])
//! - The timestamped scheme used by the identity provider's webhooks
//!   ([`sign_timestamped`] / [`verify_timestamped`]): the signature covers
//!   `{id}.{timestamp}.{payload}`, secrets carry a `whsec_` prefix around
//!   base64 key material, and the signature header may list several
//!   space-separated `v1,<base64>` candidates (key rotation).

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Prefix the identity provider puts on webhook signing secrets.
pub const SECRET_PREFIX: &str = "whsec_";

/// Version tag on each signature candidate in the header.
pub const SIGNATURE_VERSION: &str = "v1";

/// Compute an HMAC-SHA256 signature for a payload.
///
/// Returns the hex-encoded signature without any prefix.
pub fn compute_hmac_sha256(secret: &[u8], payload: &[u8]) -> String {
	let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
	mac.update(payload);
	let result = mac.finalize();
	hex::encode(result.into_bytes())
}

/// Verify an HMAC-SHA256 signature for a payload.
///
/// The `signature` should be the raw hex-encoded signature (no prefix).
pub fn verify_hmac_sha256(secret: &[u8], payload: &[u8], signature: &str) -> bool {
	let expected_bytes = match hex::decode(signature) {
		Ok(bytes) => bytes,
		Err(_) => return false,
	};

	let mut mac = match HmacSha256::new_from_slice(secret) {
		Ok(m) => m,
		Err(_) => return false,
	};

	mac.update(payload);
	mac.verify_slice(&expected_bytes).is_ok()
}

/// Reasons a timestamped signature fails verification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampedSignatureError {
	/// The signing secret is not `whsec_` + valid base64.
	#[error("invalid webhook signing secret")]
	InvalidSecret,

	/// The message timestamp is outside the tolerance window.
	#[error("webhook timestamp outside tolerance window")]
	TimestampOutOfTolerance,

	/// No signature candidate matched.
	#[error("webhook signature mismatch")]
	SignatureMismatch,
}

fn decode_secret(secret: &str) -> Result<Vec<u8>, TimestampedSignatureError> {
	let material = secret.strip_prefix(SECRET_PREFIX).unwrap_or(secret);
	BASE64
		.decode(material)
		.map_err(|_| TimestampedSignatureError::InvalidSecret)
}

/// Sign `{id}.{timestamp}.{payload}` with a `whsec_` secret.
///
/// Returns a single `v1,<base64>` candidate suitable for the signature
/// header. Used by tests and by any future outbound webhook sender.
pub fn sign_timestamped(
	secret: &str,
	message_id: &str,
	timestamp: i64,
	payload: &[u8],
) -> Result<String, TimestampedSignatureError> {
	let key = decode_secret(secret)?;
	let mut mac = HmacSha256::new_from_slice(&key)
		.map_err(|_| TimestampedSignatureError::InvalidSecret)?;
	mac.update(message_id.as_bytes());
	mac.update(b".");
	mac.update(timestamp.to_string().as_bytes());
	mac.update(b".");
	mac.update(payload);
	let signature = BASE64.encode(mac.finalize().into_bytes());
	Ok(format!("{SIGNATURE_VERSION},{signature}"))
}

/// Verify a timestamped webhook signature header.
///
/// `signature_header` may contain several space-separated candidates;
/// verification succeeds when any `v1` candidate matches. `now` is passed
/// in rather than read from a clock so the tolerance window is testable.
pub fn verify_timestamped(
	secret: &str,
	message_id: &str,
	timestamp: i64,
	payload: &[u8],
	signature_header: &str,
	now: i64,
	tolerance_secs: u64,
) -> Result<(), TimestampedSignatureError> {
	if (now - timestamp).unsigned_abs() > tolerance_secs {
		return Err(TimestampedSignatureError::TimestampOutOfTolerance);
	}

	let key = decode_secret(secret)?;

	for candidate in signature_header.split_ascii_whitespace() {
		let Some(encoded) = candidate.strip_prefix(SIGNATURE_VERSION).and_then(|rest| rest.strip_prefix(',')) else {
			continue;
		};
		let Ok(candidate_bytes) = BASE64.decode(encoded) else {
			continue;
		};

		let mut mac = HmacSha256::new_from_slice(&key)
			.map_err(|_| TimestampedSignatureError::InvalidSecret)?;
		mac.update(message_id.as_bytes());
		mac.update(b".");
		mac.update(timestamp.to_string().as_bytes());
		mac.update(b".");
		mac.update(payload);
		if mac.verify_slice(&candidate_bytes).is_ok() {
			return Ok(());
		}
	}

	Err(TimestampedSignatureError::SignatureMismatch)
}
