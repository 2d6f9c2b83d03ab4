// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Row types for the `auth_users` table.

use serde::{Deserialize, Serialize};

/// One stored user, keyed by the identity provider's id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
	/// The store's own row id.
	#[serde(default)]
	pub id: Option<String>,
	pub clerk_id: String,
	pub email: String,
	#[serde(default)]
	pub first_name: Option<String>,
	#[serde(default)]
	pub last_name: Option<String>,
	#[serde(default)]
	pub created_at: Option<String>,
}

/// Fields for inserting a user row.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
	pub clerk_id: String,
	pub email: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub first_name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_name: Option<String>,
}

/// Fields for updating a user row; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub first_name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_name: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_user_omits_absent_names() {
		let row = NewUser {
			clerk_id: "user_1".to_string(),
			email: "amina@example.com".to_string(),
			first_name: None,
			last_name: None,
		};
		let json = serde_json::to_value(&row).unwrap();
		assert!(json.get("first_name").is_none());
		assert_eq!(json["clerk_id"], "user_1");
	}

	#[test]
	fn record_parses_store_row() {
		let record: UserRecord = serde_json::from_value(serde_json::json!({
			"id": "7e9b2f6e-0000-0000-0000-000000000000",
			"clerk_id": "user_1",
			"email": "amina@example.com",
			"first_name": "Amina",
			"last_name": null,
			"created_at": "2025-05-01T10:00:00Z"
		}))
		.unwrap();
		assert_eq!(record.clerk_id, "user_1");
		assert_eq!(record.first_name.as_deref(), Some("Amina"));
		assert!(record.last_name.is_none());
	}

	#[test]
	fn empty_update_serializes_to_empty_object() {
		let json = serde_json::to_value(UserUpdate::default()).unwrap();
		assert_eq!(json, serde_json::json!({}));
	}
}
