// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The supported-locale set and its derived properties.
//!
//! [`Locale`] is a closed enum: there is no way to hold an unsupported
//! locale, so operations downstream of the string boundary
//! ([`Locale::from_str`]) need no runtime validation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One member of the fixed set of supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
	/// English, the default locale.
	En,
	/// Arabic.
	Ar,
	/// Urdu.
	Ur,
}

/// The locale adopted when no valid preference is stored.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// Every supported locale, default first.
pub const LOCALES: [Locale; 3] = [Locale::En, Locale::Ar, Locale::Ur];

/// Text flow direction, derived from the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Ltr,
	Rtl,
}

impl Direction {
	/// The value used in an HTML `dir` attribute.
	pub const fn as_attr(&self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_attr())
	}
}

/// Display metadata for a locale (used by language selectors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleInfo {
	pub code: &'static str,
	pub english_name: &'static str,
	pub native_name: &'static str,
}

impl Locale {
	/// The locale's BCP 47 code, as stored and as set on `lang`.
	pub const fn code(&self) -> &'static str {
		match self {
			Locale::En => "en",
			Locale::Ar => "ar",
			Locale::Ur => "ur",
		}
	}

	/// Direction is a pure function of the locale: the default locale is
	/// left-to-right, every other supported locale is right-to-left.
	pub const fn direction(&self) -> Direction {
		match self {
			Locale::En => Direction::Ltr,
			_ => Direction::Rtl,
		}
	}

	/// Selector metadata for this locale.
	pub const fn info(&self) -> LocaleInfo {
		match self {
			Locale::En => LocaleInfo {
				code: "en",
				english_name: "English",
				native_name: "English",
			},
			Locale::Ar => LocaleInfo {
				code: "ar",
				english_name: "Arabic",
				native_name: "العربية",
			},
			Locale::Ur => LocaleInfo {
				code: "ur",
				english_name: "Urdu",
				native_name: "اردو",
			},
		}
	}
}

impl Default for Locale {
	fn default() -> Self {
		DEFAULT_LOCALE
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

/// Rejection at the string boundary: the value is not a supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale: {0:?}")]
pub struct UnsupportedLocaleError(pub String);

impl FromStr for Locale {
	type Err = UnsupportedLocaleError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"en" => Ok(Locale::En),
			"ar" => Ok(Locale::Ar),
			"ur" => Ok(Locale::Ur),
			_ => Err(UnsupportedLocaleError(s.to_string())),
		}
	}
}

/// Whether a raw code names a supported locale.
pub fn is_supported(code: &str) -> bool {
	Locale::from_str(code).is_ok()
}

/// Selector metadata for every supported locale, default first.
pub fn available_locales() -> [LocaleInfo; 3] {
	[
		Locale::En.info(),
		Locale::Ar.info(),
		Locale::Ur.info(),
	]
}
