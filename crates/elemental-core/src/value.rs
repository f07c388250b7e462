//! Attribute values and the string coercion rule.
//!
//! Every place that turns a scalar into text (content flattening, attribute
//! application, markup rendering) goes through [`coerce`] so the textual
//! form of numbers, booleans, dates and absent values is one tested contract.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A primitive value that can be attached to an element as an attribute or
/// passed as element content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
	/// A string value.
	Str(Cow<'static, str>),
	/// An integer value.
	Int(i64),
	/// A floating point value.
	Float(f64),
	/// A boolean value.
	Bool(bool),
	/// A point in time.
	Date(DateTime<Utc>),
}

impl AttributeValue {
	/// Returns the canonical string form of this value.
	///
	/// - strings are returned unchanged
	/// - integers use their decimal form
	/// - floats drop a zero fraction (`1.0` becomes `"1"`), `-0.0` becomes
	///   `"0"`, and non-finite values become `"NaN"`, `"Infinity"` or
	///   `"-Infinity"`; magnitudes of at least `1e21` or below `1e-6` use
	///   exponent notation (`"1e+21"`, `"1.5e-7"`)
	/// - booleans become `"true"` / `"false"`
	/// - dates become ISO-8601 with millisecond precision and a `Z` suffix
	pub fn coerce(&self) -> Cow<'_, str> {
		match self {
			Self::Str(s) => Cow::Borrowed(&**s),
			Self::Int(n) => Cow::Owned(n.to_string()),
			Self::Float(f) => Cow::Owned(format_float(*f)),
			Self::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
			Self::Date(d) => Cow::Owned(d.to_rfc3339_opts(SecondsFormat::Millis, true)),
		}
	}

	/// Returns whether the value counts as set when used as a flag.
	///
	/// Empty strings, zero, `NaN` and `false` are falsy; everything else,
	/// including every date, is truthy.
	pub fn is_truthy(&self) -> bool {
		match self {
			Self::Str(s) => !s.is_empty(),
			Self::Int(n) => *n != 0,
			Self::Float(f) => *f != 0.0 && !f.is_nan(),
			Self::Bool(b) => *b,
			Self::Date(_) => true,
		}
	}
}

fn format_float(value: f64) -> String {
	if value.is_nan() {
		"NaN".to_string()
	} else if value == f64::INFINITY {
		"Infinity".to_string()
	} else if value == f64::NEG_INFINITY {
		"-Infinity".to_string()
	} else if value == 0.0 {
		"0".to_string()
	} else if value.abs() >= 1e21 || value.abs() < 1e-6 {
		format_exponent(value)
	} else {
		value.to_string()
	}
}

/// Formats `value` as a shortest mantissa with an explicitly signed exponent
/// (`1e+21`, `1.5e-7`).
fn format_exponent(value: f64) -> String {
	let formatted = format!("{value:e}");
	match formatted.split_once('e') {
		Some((mantissa, exponent)) if !exponent.starts_with('-') => {
			format!("{mantissa}e+{exponent}")
		}
		_ => formatted,
	}
}

impl fmt::Display for AttributeValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.coerce())
	}
}

/// Coerces an optional scalar to text.
///
/// Absent values coerce to the empty string.
pub fn coerce(value: Option<&AttributeValue>) -> Cow<'_, str> {
	match value {
		Some(value) => value.coerce(),
		None => Cow::Borrowed(""),
	}
}

impl From<&'static str> for AttributeValue {
	fn from(value: &'static str) -> Self {
		Self::Str(Cow::Borrowed(value))
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> Self {
		Self::Str(Cow::Owned(value))
	}
}

impl From<&String> for AttributeValue {
	fn from(value: &String) -> Self {
		Self::Str(Cow::Owned(value.clone()))
	}
}

impl From<Cow<'static, str>> for AttributeValue {
	fn from(value: Cow<'static, str>) -> Self {
		Self::Str(value)
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<f64> for AttributeValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<f32> for AttributeValue {
	fn from(value: f32) -> Self {
		Self::Float(f64::from(value))
	}
}

impl From<DateTime<Utc>> for AttributeValue {
	fn from(value: DateTime<Utc>) -> Self {
		Self::Date(value)
	}
}

macro_rules! impl_from_int {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for AttributeValue {
				fn from(value: $ty) -> Self {
					Self::Int(i64::from(value))
				}
			}
		)*
	};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;
	use rstest::rstest;

	#[rstest]
	#[case(AttributeValue::from("hello"), "hello")]
	#[case(AttributeValue::from(42), "42")]
	#[case(AttributeValue::from(-7i64), "-7")]
	#[case(AttributeValue::from(1.0), "1")]
	#[case(AttributeValue::from(1.5), "1.5")]
	#[case(AttributeValue::from(-0.0), "0")]
	#[case(AttributeValue::from(f64::NAN), "NaN")]
	#[case(AttributeValue::from(f64::INFINITY), "Infinity")]
	#[case(AttributeValue::from(f64::NEG_INFINITY), "-Infinity")]
	#[case(AttributeValue::from(1e21), "1e+21")]
	#[case(AttributeValue::from(-1e21), "-1e+21")]
	#[case(AttributeValue::from(1.5e-7), "1.5e-7")]
	#[case(AttributeValue::from(2.5e300), "2.5e+300")]
	#[case(AttributeValue::from(1e20), "100000000000000000000")]
	#[case(AttributeValue::from(0.000001), "0.000001")]
	#[case(AttributeValue::from(true), "true")]
	#[case(AttributeValue::from(false), "false")]
	fn test_coerce(#[case] value: AttributeValue, #[case] expected: &str) {
		assert_eq!(value.coerce(), expected);
		assert_eq!(value.to_string(), expected);
	}

	#[rstest]
	fn test_coerce_date_is_iso_8601() {
		let date = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
		assert_eq!(
			AttributeValue::from(date).coerce(),
			"2024-01-02T03:04:05.000Z"
		);
	}

	#[rstest]
	fn test_coerce_absent_is_empty() {
		assert_eq!(coerce(None), "");
		assert_eq!(coerce(Some(&AttributeValue::from(3))), "3");
	}

	#[rstest]
	#[case(AttributeValue::from("x"), true)]
	#[case(AttributeValue::from(""), false)]
	#[case(AttributeValue::from(1), true)]
	#[case(AttributeValue::from(0), false)]
	#[case(AttributeValue::from(0.0), false)]
	#[case(AttributeValue::from(f64::NAN), false)]
	#[case(AttributeValue::from(true), true)]
	#[case(AttributeValue::from(false), false)]
	fn test_is_truthy(#[case] value: AttributeValue, #[case] expected: bool) {
		assert_eq!(value.is_truthy(), expected);
	}

	#[rstest]
	fn test_date_is_truthy() {
		let epoch = Utc.timestamp_opt(0, 0).unwrap();
		assert!(AttributeValue::from(epoch).is_truthy());
	}
}
