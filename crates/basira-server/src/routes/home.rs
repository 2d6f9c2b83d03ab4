// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The localized landing/status page.
//!
//! One locale resolver lives per request: the preference comes from the
//! `basira_locale` cookie, `?lang=` is the language selector, and the
//! resolver's attribute sink supplies the HTML shell's `lang`/`dir`.

use std::sync::Arc;

use axum::extract::Query;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderValue;
use axum::response::{Html, IntoResponse, Response};
use basira_common_i18n::{available_locales, Locale, LocaleResolver};
use serde::Deserialize;
use tracing::debug;

use crate::i18n::{CookiePreferenceStore, PageAttributes};

#[derive(Debug, Deserialize)]
pub struct LandingQuery {
	/// Language selector value; unsupported codes are ignored.
	pub lang: Option<String>,
}

/// GET / - the landing page, rendered in the caller's locale.
pub async fn landing_page(
	Query(query): Query<LandingQuery>,
	headers: axum::http::HeaderMap,
) -> Response {
	let store = Arc::new(CookiePreferenceStore::from_headers(&headers));
	let attrs = Arc::new(PageAttributes::new());
	let mut resolver = LocaleResolver::new(store.clone(), attrs.clone());

	if let Some(lang) = query.lang.as_deref() {
		match lang.parse::<Locale>() {
			Ok(locale) => resolver.set_locale(locale),
			Err(error) => debug!(%error, "ignoring unsupported language selection"),
		}
	}

	let html = render_landing(&resolver, &attrs);

	let mut response = Html(html).into_response();
	if let Some(cookie) = store.pending_cookie() {
		if let Ok(value) = HeaderValue::from_str(&cookie) {
			response.headers_mut().insert(SET_COOKIE, value);
		}
	}
	response
}

fn render_landing(resolver: &LocaleResolver<'_>, attrs: &PageAttributes) -> String {
	let (locale, direction) = attrs.current();

	let selector = available_locales()
		.iter()
		.map(|info| {
			let class = if info.code == locale.code() {
				" class=\"active\""
			} else {
				""
			};
			format!(
				"<a href=\"/?lang={}\"{class}>{}</a>",
				info.code, info.native_name
			)
		})
		.collect::<Vec<_>>()
		.join("\n\t\t\t");

	format!(
		r#"<!DOCTYPE html>
<html lang="{lang}" dir="{dir}">
<head>
	<meta charset="utf-8">
	<title>{title}</title>
</head>
<body>
	<header>
		<h1>{title}</h1>
		<nav>
			{selector}
		</nav>
	</header>
	<main>
		<h2>{hero_title}</h2>
		<p>{hero_subtitle}</p>
		<p><a href="/api/health">API status</a> &middot; basira-server {version}</p>
	</main>
	<footer>
		<p>{tagline}</p>
	</footer>
</body>
</html>
"#,
		lang = locale.code(),
		dir = direction.as_attr(),
		title = resolver.resolve("header.title"),
		hero_title = resolver.resolve("hero.title"),
		hero_subtitle = resolver.resolve("hero.subtitle"),
		tagline = resolver.resolve("footer.tagline"),
		version = env!("CARGO_PKG_VERSION"),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use basira_common_i18n::{MemoryPreferenceStore, PreferenceStore};

	fn rendered(locale: Option<&str>) -> String {
		let store = Arc::new(MemoryPreferenceStore::new());
		if let Some(code) = locale {
			store.save(code.parse().unwrap());
		}
		let attrs = Arc::new(PageAttributes::new());
		let resolver = LocaleResolver::new(store, attrs.clone());
		render_landing(&resolver, &attrs)
	}

	#[test]
	fn default_render_is_english_ltr() {
		let html = rendered(None);
		assert!(html.contains("lang=\"en\""));
		assert!(html.contains("dir=\"ltr\""));
		assert!(html.contains("Quranic Insight"));
	}

	#[test]
	fn arabic_render_is_rtl() {
		let html = rendered(Some("ar"));
		assert!(html.contains("lang=\"ar\""));
		assert!(html.contains("dir=\"rtl\""));
		assert!(html.contains("بصيرة قرآنية"));
	}

	#[test]
	fn selector_lists_every_locale_natively() {
		let html = rendered(None);
		assert!(html.contains("?lang=en"));
		assert!(html.contains("العربية"));
		assert!(html.contains("اردو"));
	}
}
