// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server-side implementations of the i18n collaborator seams.
//!
//! The landing surface carries one locale resolver per request: the
//! preference store is the `basira_locale` cookie, and the attribute sink
//! collects the `lang`/`dir` pair the HTML shell is rendered with.

use std::sync::Mutex;

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use basira_common_i18n::{AttributeSink, Direction, Locale, PreferenceStore, DEFAULT_LOCALE};

/// Name of the locale preference cookie.
pub const LOCALE_COOKIE: &str = "basira_locale";

/// The `basira_locale` value from a request's cookies, raw and
/// unvalidated (the resolver filters unsupported values).
pub fn locale_cookie(headers: &HeaderMap) -> Option<String> {
	let cookies = headers.get(COOKIE)?.to_str().ok()?;
	cookies.split(';').find_map(|pair| {
		let (name, value) = pair.trim().split_once('=')?;
		(name == LOCALE_COOKIE).then(|| value.to_string())
	})
}

/// Preference store backed by the request/response cookie pair.
///
/// Reads come from the incoming `Cookie` header; writes are collected
/// here and flushed as a `Set-Cookie` by the handler after rendering.
/// The write is best-effort by construction: a client that drops the
/// cookie simply falls back to the default locale next request.
#[derive(Debug, Default)]
pub struct CookiePreferenceStore {
	incoming: Option<String>,
	saved: Mutex<Option<Locale>>,
}

impl CookiePreferenceStore {
	pub fn from_headers(headers: &HeaderMap) -> Self {
		Self {
			incoming: locale_cookie(headers),
			saved: Mutex::new(None),
		}
	}

	/// The value to flush as `Set-Cookie`, when one was saved.
	pub fn pending_cookie(&self) -> Option<String> {
		self.saved
			.lock()
			.expect("cookie store poisoned")
			.map(|locale| {
				format!(
					"{LOCALE_COOKIE}={}; Path=/; Max-Age=31536000; SameSite=Lax",
					locale.code()
				)
			})
	}
}

impl PreferenceStore for CookiePreferenceStore {
	fn load(&self) -> Option<String> {
		self.incoming.clone()
	}

	fn save(&self, locale: Locale) {
		*self.saved.lock().expect("cookie store poisoned") = Some(locale);
	}
}

/// Attribute sink feeding the rendered HTML shell's `lang` and `dir`.
#[derive(Debug)]
pub struct PageAttributes {
	applied: Mutex<(Locale, Direction)>,
}

impl Default for PageAttributes {
	fn default() -> Self {
		Self {
			applied: Mutex::new((DEFAULT_LOCALE, DEFAULT_LOCALE.direction())),
		}
	}
}

impl PageAttributes {
	pub fn new() -> Self {
		Self::default()
	}

	/// The most recently applied `(locale, direction)` pair.
	pub fn current(&self) -> (Locale, Direction) {
		*self.applied.lock().expect("page attributes poisoned")
	}
}

impl AttributeSink for PageAttributes {
	fn apply(&self, locale: Locale, direction: Direction) {
		*self.applied.lock().expect("page attributes poisoned") = (locale, direction);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::http::HeaderValue;

	fn headers_with_cookie(value: &str) -> HeaderMap {
		let mut headers = HeaderMap::new();
		headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
		headers
	}

	#[test]
	fn cookie_is_extracted_among_others() {
		let headers = headers_with_cookie("theme=dark; basira_locale=ar; session=xyz");
		assert_eq!(locale_cookie(&headers).as_deref(), Some("ar"));
	}

	#[test]
	fn absent_cookie_is_none() {
		assert!(locale_cookie(&HeaderMap::new()).is_none());
		let headers = headers_with_cookie("theme=dark");
		assert!(locale_cookie(&headers).is_none());
	}

	#[test]
	fn unvalidated_value_passes_through() {
		// Filtering unsupported values is the resolver's job.
		let headers = headers_with_cookie("basira_locale=fr");
		assert_eq!(locale_cookie(&headers).as_deref(), Some("fr"));
	}

	#[test]
	fn save_produces_a_set_cookie_value() {
		let store = CookiePreferenceStore::default();
		assert!(store.pending_cookie().is_none());
		store.save(Locale::Ur);
		assert_eq!(
			store.pending_cookie().as_deref(),
			Some("basira_locale=ur; Path=/; Max-Age=31536000; SameSite=Lax")
		);
	}

	#[test]
	fn page_attributes_track_last_application() {
		let attrs = PageAttributes::new();
		attrs.apply(Locale::Ar, Locale::Ar.direction());
		assert_eq!(attrs.current(), (Locale::Ar, Direction::Rtl));
	}
}
