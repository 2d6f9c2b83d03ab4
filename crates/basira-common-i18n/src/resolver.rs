// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The locale resolver: active-locale state with explicit lifecycle.
//!
//! A [`LocaleResolver`] is a constructed instance, not an ambient
//! singleton; tests build independent resolvers in parallel. It owns one
//! state variable (the active locale) whose only transitions are
//! self-loops via [`LocaleResolver::set_locale`].
//!
//! Every mutation (and initialization) fires the same effects, in this
//! order: state update, preference persistence, attribute application.
//! Applying attributes last means an observer of the sink never sees a
//! direction that lags the persisted locale.

use std::sync::{Arc, Mutex};

use crate::catalog::{self, Catalog};
use crate::locale::{Direction, Locale, DEFAULT_LOCALE};

/// Persisted locale preference, keyed by a fixed name owned by the host.
///
/// `save` is fire-and-forget: implementations log failures, callers never
/// await or observe them.
pub trait PreferenceStore {
	/// The stored preference, if any. Unrecognized values are tolerated
	/// here and filtered by the resolver.
	fn load(&self) -> Option<String>;

	/// Persist the locale for the next session. Best-effort.
	fn save(&self, locale: Locale);
}

/// Receives the document-level language and direction attributes.
pub trait AttributeSink {
	fn apply(&self, locale: Locale, direction: Direction);
}

/// Resolves dotted keys against the active locale.
pub struct LocaleResolver<'c> {
	catalog: &'c Catalog,
	active: Locale,
	store: Arc<dyn PreferenceStore + Send + Sync>,
	sink: Arc<dyn AttributeSink + Send + Sync>,
}

impl LocaleResolver<'static> {
	/// Build a resolver over the embedded catalog.
	///
	/// Initialization reads the persisted preference and adopts it iff it
	/// names a supported locale; otherwise the default locale. The same
	/// side effects fire as on [`set_locale`](Self::set_locale).
	pub fn new(
		store: Arc<dyn PreferenceStore + Send + Sync>,
		sink: Arc<dyn AttributeSink + Send + Sync>,
	) -> Self {
		Self::with_catalog(catalog::embedded(), store, sink)
	}
}

impl<'c> LocaleResolver<'c> {
	/// Build a resolver over a caller-supplied catalog.
	pub fn with_catalog(
		catalog: &'c Catalog,
		store: Arc<dyn PreferenceStore + Send + Sync>,
		sink: Arc<dyn AttributeSink + Send + Sync>,
	) -> Self {
		let active = store
			.load()
			.and_then(|code| code.parse::<Locale>().ok())
			.unwrap_or(DEFAULT_LOCALE);

		let resolver = Self {
			catalog,
			active,
			store,
			sink,
		};
		resolver.store.save(resolver.active);
		resolver
			.sink
			.apply(resolver.active, resolver.active.direction());
		resolver
	}

	/// The active locale. No side effects.
	pub fn active_locale(&self) -> Locale {
		self.active
	}

	/// Switch the active locale.
	///
	/// The closed [`Locale`] type makes out-of-range input
	/// unrepresentable; open-string callers go through
	/// [`Locale::from_str`](std::str::FromStr), whose rejection leaves
	/// this resolver untouched.
	pub fn set_locale(&mut self, locale: Locale) {
		self.active = locale;
		self.store.save(locale);
		self.sink.apply(locale, locale.direction());
	}

	/// Resolve a dotted key under the active locale.
	///
	/// Missing keys resolve to themselves; see [`Catalog::resolve`].
	pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
		self.catalog.resolve(self.active, key)
	}

	/// Text direction of the active locale.
	pub fn direction(&self) -> Direction {
		self.active.direction()
	}
}

/// In-memory preference store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
	value: Mutex<Option<String>>,
	saves: Mutex<u32>,
}

impl MemoryPreferenceStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// A store pre-seeded with a raw (possibly unsupported) value.
	pub fn with_value(code: impl Into<String>) -> Self {
		Self {
			value: Mutex::new(Some(code.into())),
			saves: Mutex::new(0),
		}
	}

	/// The currently stored value.
	pub fn stored(&self) -> Option<String> {
		self.value.lock().expect("preference store poisoned").clone()
	}

	/// Number of `save` calls observed.
	pub fn save_count(&self) -> u32 {
		*self.saves.lock().expect("preference store poisoned")
	}
}

impl PreferenceStore for MemoryPreferenceStore {
	fn load(&self) -> Option<String> {
		self.value.lock().expect("preference store poisoned").clone()
	}

	fn save(&self, locale: Locale) {
		*self.value.lock().expect("preference store poisoned") = Some(locale.code().to_string());
		*self.saves.lock().expect("preference store poisoned") += 1;
	}
}

/// Sink that discards attribute updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAttributeSink;

impl AttributeSink for NoopAttributeSink {
	fn apply(&self, _locale: Locale, _direction: Direction) {}
}

/// Sink that records every attribute application, for tests.
#[derive(Debug, Default)]
pub struct RecordingAttributeSink {
	events: Mutex<Vec<(Locale, Direction)>>,
}

impl RecordingAttributeSink {
	pub fn new() -> Self {
		Self::default()
	}

	/// All `(locale, direction)` pairs applied so far, in order.
	pub fn events(&self) -> Vec<(Locale, Direction)> {
		self.events.lock().expect("attribute sink poisoned").clone()
	}

	/// The most recent application.
	pub fn last(&self) -> Option<(Locale, Direction)> {
		self.events
			.lock()
			.expect("attribute sink poisoned")
			.last()
			.copied()
	}
}

impl AttributeSink for RecordingAttributeSink {
	fn apply(&self, locale: Locale, direction: Direction) {
		self.events
			.lock()
			.expect("attribute sink poisoned")
			.push((locale, direction));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::locale::LOCALES;

	fn resolver_with(
		store: Arc<MemoryPreferenceStore>,
	) -> (LocaleResolver<'static>, Arc<RecordingAttributeSink>) {
		let sink = Arc::new(RecordingAttributeSink::new());
		let resolver = LocaleResolver::new(store, sink.clone());
		(resolver, sink)
	}

	#[test]
	fn initializes_to_default_without_preference() {
		let store = Arc::new(MemoryPreferenceStore::new());
		let (resolver, sink) = resolver_with(store);
		assert_eq!(resolver.active_locale(), DEFAULT_LOCALE);
		assert_eq!(resolver.direction(), Direction::Ltr);
		assert_eq!(sink.last(), Some((Locale::En, Direction::Ltr)));
	}

	#[test]
	fn initializes_from_stored_preference() {
		let store = Arc::new(MemoryPreferenceStore::with_value("ur"));
		let (resolver, sink) = resolver_with(store);
		assert_eq!(resolver.active_locale(), Locale::Ur);
		assert_eq!(sink.last(), Some((Locale::Ur, Direction::Rtl)));
	}

	#[test]
	fn unrecognized_stored_preference_falls_back_to_default() {
		let store = Arc::new(MemoryPreferenceStore::with_value("fr"));
		let (resolver, _sink) = resolver_with(store.clone());
		assert_eq!(resolver.active_locale(), DEFAULT_LOCALE);
		// Initialization normalized the stored value.
		assert_eq!(store.stored().as_deref(), Some("en"));
	}

	#[test]
	fn set_locale_updates_state_store_and_sink() {
		let store = Arc::new(MemoryPreferenceStore::new());
		let (mut resolver, sink) = resolver_with(store.clone());

		resolver.set_locale(Locale::Ar);

		assert_eq!(resolver.active_locale(), Locale::Ar);
		assert_eq!(resolver.direction(), Direction::Rtl);
		assert_eq!(store.stored().as_deref(), Some("ar"));
		assert_eq!(sink.last(), Some((Locale::Ar, Direction::Rtl)));
	}

	#[test]
	fn set_locale_is_idempotent() {
		let store = Arc::new(MemoryPreferenceStore::new());
		let (mut resolver, sink) = resolver_with(store.clone());

		resolver.set_locale(Locale::Ar);
		let state_once = (
			resolver.active_locale(),
			resolver.direction(),
			store.stored(),
			sink.last(),
		);

		resolver.set_locale(Locale::Ar);
		let state_twice = (
			resolver.active_locale(),
			resolver.direction(),
			store.stored(),
			sink.last(),
		);

		assert_eq!(state_once, state_twice);
	}

	#[test]
	fn round_trip_through_persistence() {
		let store = Arc::new(MemoryPreferenceStore::new());
		{
			let (mut resolver, _sink) = resolver_with(store.clone());
			resolver.set_locale(Locale::Ar);
		}

		// Fresh initialization simulating a reload with the store intact.
		let (resolver, _sink) = resolver_with(store);
		assert_eq!(resolver.active_locale(), Locale::Ar);
		assert_eq!(resolver.direction(), Direction::Rtl);
	}

	#[test]
	fn rejected_code_leaves_state_and_store_untouched() {
		let store = Arc::new(MemoryPreferenceStore::new());
		let (mut resolver, _sink) = resolver_with(store.clone());
		resolver.set_locale(Locale::Ur);
		let saves_before = store.save_count();

		// "fr" is outside {en, ar, ur}: rejected at the string boundary,
		// so no transition and no persistence write can occur.
		match "fr".parse::<Locale>() {
			Ok(locale) => resolver.set_locale(locale),
			Err(_) => {}
		}

		assert_eq!(resolver.active_locale(), Locale::Ur);
		assert_eq!(store.stored().as_deref(), Some("ur"));
		assert_eq!(store.save_count(), saves_before);
	}

	#[test]
	fn persistence_precedes_attribute_application() {
		// A sink that reads the store when applied observes the persisted
		// value already matching the locale being applied.
		struct OrderProbe {
			store: Arc<MemoryPreferenceStore>,
		}

		impl AttributeSink for OrderProbe {
			fn apply(&self, locale: Locale, _direction: Direction) {
				assert_eq!(self.store.stored().as_deref(), Some(locale.code()));
			}
		}

		let store = Arc::new(MemoryPreferenceStore::new());
		let sink = Arc::new(OrderProbe {
			store: store.clone(),
		});
		let mut resolver = LocaleResolver::new(store, sink);
		resolver.set_locale(Locale::Ar);
		resolver.set_locale(Locale::En);
	}

	#[test]
	fn resolve_uses_active_locale() {
		let mut catalog = Catalog::new();
		catalog.insert(Locale::En, "a.b", "Hello");

		let store = Arc::new(MemoryPreferenceStore::new());
		let sink = Arc::new(NoopAttributeSink);
		let mut resolver = LocaleResolver::with_catalog(&catalog, store, sink);

		resolver.set_locale(Locale::Ar);
		assert_eq!(resolver.resolve("a.b"), "a.b");

		resolver.set_locale(Locale::En);
		assert_eq!(resolver.resolve("a.b"), "Hello");
	}

	#[test]
	fn resolve_missing_key_returns_key_under_every_locale() {
		let store = Arc::new(MemoryPreferenceStore::new());
		let sink = Arc::new(NoopAttributeSink);
		let mut resolver = LocaleResolver::new(store, sink);
		for locale in LOCALES {
			resolver.set_locale(locale);
			assert_eq!(resolver.resolve("nonexistent.key"), "nonexistent.key");
		}
	}

	#[test]
	fn independent_resolvers_do_not_interfere() {
		let store_a = Arc::new(MemoryPreferenceStore::new());
		let store_b = Arc::new(MemoryPreferenceStore::new());
		let (mut a, _) = resolver_with(store_a);
		let (b, _) = resolver_with(store_b);

		a.set_locale(Locale::Ar);
		assert_eq!(a.active_locale(), Locale::Ar);
		assert_eq!(b.active_locale(), Locale::En);
	}
}
