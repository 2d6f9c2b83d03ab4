// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The translation catalog: a closed mapping from locale to key→string
//! tables, immutable after construction.
//!
//! # Invariants
//!
//! 1. Lookup never fails outward: a key absent from the active locale's
//!    table resolves to the key itself, never to a panic or an empty
//!    string.
//!
//! 2. No cross-locale fallback: a key missing from `ar` resolves to the
//!    raw key, not to the `en` translation. Untranslated keys rendering
//!    literally is the product's coverage signal.
//!
//! 3. The catalog is `Send + Sync`: all data is immutable after
//!    construction.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::locale::{Locale, DEFAULT_LOCALE};
use crate::strings;

/// Per-locale key→string tables.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	en: HashMap<String, String>,
	ar: HashMap<String, String>,
	ur: HashMap<String, String>,
}

static EMBEDDED: Lazy<Catalog> = Lazy::new(|| {
	let mut catalog = Catalog::new();
	for &(key, value) in strings::EN {
		catalog.insert(Locale::En, key, value);
	}
	for &(key, value) in strings::AR {
		catalog.insert(Locale::Ar, key, value);
	}
	for &(key, value) in strings::UR {
		catalog.insert(Locale::Ur, key, value);
	}
	catalog
});

/// The build-time-embedded catalog.
pub fn embedded() -> &'static Catalog {
	&EMBEDDED
}

/// Resolve `key` under `locale` against the embedded catalog.
///
/// Missing keys resolve to themselves (see the module invariants).
pub fn t<'a>(locale: Locale, key: &'a str) -> &'a str {
	embedded().resolve(locale, key)
}

impl Catalog {
	/// An empty catalog. Production code uses [`embedded`]; tests build
	/// small catalogs of their own.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert one translation.
	pub fn insert(&mut self, locale: Locale, key: impl Into<String>, value: impl Into<String>) {
		self.table_mut(locale).insert(key.into(), value.into());
	}

	fn table(&self, locale: Locale) -> &HashMap<String, String> {
		match locale {
			Locale::En => &self.en,
			Locale::Ar => &self.ar,
			Locale::Ur => &self.ur,
		}
	}

	fn table_mut(&mut self, locale: Locale) -> &mut HashMap<String, String> {
		match locale {
			Locale::En => &mut self.en,
			Locale::Ar => &mut self.ar,
			Locale::Ur => &mut self.ur,
		}
	}

	/// Resolve `key` under `locale`.
	///
	/// Returns the locale's translation when present, otherwise `key`
	/// verbatim. Deliberately NOT an error and deliberately without a
	/// cross-locale fallback chain; logged at debug level only, since
	/// partially translated locales hit this path routinely.
	pub fn resolve<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
		match self.table(locale).get(key) {
			Some(value) => value.as_str(),
			None => {
				debug!(locale = %locale, key, "missing translation key, rendering key verbatim");
				key
			}
		}
	}

	/// Number of entries in a locale's table.
	pub fn len(&self, locale: Locale) -> usize {
		self.table(locale).len()
	}

	/// Whether a locale's table is empty.
	pub fn is_empty(&self, locale: Locale) -> bool {
		self.table(locale).is_empty()
	}

	/// Keys of the default locale's table that `locale` does not cover.
	///
	/// The default locale's key set is authoritative; gaps elsewhere are
	/// tolerated at runtime (the raw-key fallback) but surfaced here so
	/// coverage holes are a visible, tested property rather than a
	/// surprise in production.
	pub fn coverage_gaps(&self, locale: Locale) -> Vec<&str> {
		let table = self.table(locale);
		let mut gaps: Vec<&str> = self
			.table(DEFAULT_LOCALE)
			.keys()
			.filter(|key| !table.contains_key(*key))
			.map(String::as_str)
			.collect();
		gaps.sort_unstable();
		gaps
	}
}
