// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Hosted data-store access for Basira.
//!
//! The store is a hosted Postgres exposed over its REST surface; this
//! crate is a thin typed client for the handful of user-row operations
//! the platform performs (provisioning from identity-provider webhooks,
//! profile reads). There is no pool, no SQL, and no migration machinery
//! here — the store is operated by the vendor.

pub mod error;
pub mod types;
pub mod users;

pub use error::DbError;
pub use types::{NewUser, UserRecord, UserUpdate};
pub use users::UserRepository;
