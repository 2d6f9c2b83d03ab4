// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for Basira.
//!
//! This crate owns the supported-locale set, the embedded translation
//! catalog, and the [`LocaleResolver`] that turns a dotted key plus the
//! active locale into a displayable string. It supports both
//! left-to-right (LTR) and right-to-left (RTL) languages.
//!
//! # String Naming Convention
//!
//! All translatable strings use a hierarchical dot-notation key format,
//! prefixed by the surface they belong to:
//!
//! - `header.`, `hero.`, `features.`, `cta.`, `footer.` for the landing
//!   surface
//! - `explore.`, `library.`, `surah.`, `onboarding.`, `auth.` for the
//!   product surfaces
//!
//! Keys are opaque to the lookup: the dots are a naming convention, not a
//! tree walk.
//!
//! # Lookup Policy
//!
//! A key missing from the active locale's table resolves to the key
//! itself, verbatim. There is no cross-locale fallback: a string that is
//! untranslated in `ar` does NOT fall back to the `en` text. Untranslated
//! keys therefore render literally, which is the product's only visible
//! signal of translation coverage gaps.
//!
//! # Example
//!
//! ```
//! use basira_common_i18n::{t, Locale, Direction};
//!
//! // Simple translation
//! assert_eq!(t(Locale::En, "header.library"), "Library");
//!
//! // Missing keys resolve to themselves
//! assert_eq!(t(Locale::Ar, "no.such.key"), "no.such.key");
//!
//! // Direction derives from the locale
//! assert_eq!(Locale::Ar.direction(), Direction::Rtl);
//! ```

pub mod catalog;
pub mod locale;
pub mod resolver;
mod strings;

pub use catalog::{t, Catalog};
pub use locale::{
	available_locales, is_supported, Direction, Locale, LocaleInfo, UnsupportedLocaleError,
	DEFAULT_LOCALE, LOCALES,
};
pub use resolver::{
	AttributeSink, LocaleResolver, MemoryPreferenceStore, NoopAttributeSink, PreferenceStore,
	RecordingAttributeSink,
};
