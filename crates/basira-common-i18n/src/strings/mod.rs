// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Embedded translation tables, one module per locale.
//!
//! These are build-time data, never loaded over the network. The English
//! table is the authoritative key set; the other tables aim to cover the
//! same keys and `Catalog::coverage_gaps` reports where they do not.

mod ar;
mod en;
mod ur;

pub(crate) use ar::AR;
pub(crate) use en::EN;
pub(crate) use ur::UR;
