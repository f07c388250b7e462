//! Insertion-ordered attribute maps.

use crate::value::AttributeValue;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Attribute key that replaces an element's content with raw text.
///
/// When present with a truthy value, the factory discards every content
/// argument, uses the value's string form as the only child, and removes the
/// key from the map before it is attached to a node.
pub const DANGEROUS_INNER_HTML: &str = "dangerousInnerHtml";

/// DOM property names whose markup attribute is spelled differently.
const PROPERTY_ALIASES: &[(&str, &str)] = &[("className", "class"), ("htmlFor", "for")];

/// Maps a property-style attribute name to the attribute name used in markup.
///
/// Only `className` and `htmlFor` are rewritten; every other name is returned
/// unchanged.
pub fn attribute_name(name: &str) -> &str {
	PROPERTY_ALIASES
		.iter()
		.find(|(property, _)| *property == name)
		.map_or(name, |(_, attribute)| *attribute)
}

/// An attribute map that remembers insertion order.
///
/// Inserting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
	entries: Vec<(Cow<'static, str>, AttributeValue)>,
}

impl Attributes {
	/// Creates an empty attribute map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an attribute (builder style).
	pub fn with(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<AttributeValue>,
	) -> Self {
		self.insert(name, value);
		self
	}

	/// Inserts an attribute, returning the previous value for that name.
	pub fn insert(
		&mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<AttributeValue>,
	) -> Option<AttributeValue> {
		let name = name.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(key, _)| *key == name) {
			Some((_, existing)) => Some(std::mem::replace(existing, value)),
			None => {
				self.entries.push((name, value));
				None
			}
		}
	}

	/// Returns the value for `name`.
	pub fn get(&self, name: &str) -> Option<&AttributeValue> {
		self.entries
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value)
	}

	/// Removes `name`, keeping the order of the remaining entries.
	pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
		let index = self.entries.iter().position(|(key, _)| key == name)?;
		Some(self.entries.remove(index).1)
	}

	/// Returns whether `name` is present.
	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// Returns the number of attributes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns whether the map is empty.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over the attributes in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
		self.entries
			.iter()
			.map(|(name, value)| (name.as_ref(), value))
	}

	/// Removes the raw content key if its value is truthy.
	///
	/// A falsy value leaves the map untouched.
	pub(crate) fn take_raw_content(&mut self) -> Option<String> {
		if !self.get(DANGEROUS_INNER_HTML)?.is_truthy() {
			return None;
		}
		self.remove(DANGEROUS_INNER_HTML)
			.map(|value| value.coerce().into_owned())
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<Cow<'static, str>>,
	V: Into<AttributeValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attributes = Self::new();
		for (name, value) in iter {
			attributes.insert(name, value);
		}
		attributes
	}
}

impl IntoIterator for Attributes {
	type Item = (Cow<'static, str>, AttributeValue);
	type IntoIter = std::vec::IntoIter<Self::Item>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

/// Builds an [`Attributes`] map from `name => value` pairs.
///
/// ```
/// use elemental_core::attrs;
///
/// let attributes = attrs! { "id" => "main", "tabIndex" => 3, "hidden" => false };
/// assert_eq!(attributes.len(), 3);
/// ```
#[macro_export]
macro_rules! attrs {
	() => {
		$crate::Attributes::new()
	};
	($($name:expr => $value:expr),+ $(,)?) => {{
		let mut attributes = $crate::Attributes::new();
		$(attributes.insert($name, $value);)+
		attributes
	}};
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_insertion_order_preserved() {
		let attributes = Attributes::new()
			.with("id", "main")
			.with("class", "container")
			.with("tabIndex", 1);
		let names: Vec<&str> = attributes.iter().map(|(name, _)| name).collect();
		assert_eq!(names, vec!["id", "class", "tabIndex"]);
	}

	#[rstest]
	fn test_insert_replaces_in_place() {
		let mut attributes = Attributes::new().with("a", 1).with("b", 2);
		let previous = attributes.insert("a", 3);
		assert_eq!(previous, Some(AttributeValue::Int(1)));
		let entries: Vec<(&str, &AttributeValue)> = attributes.iter().collect();
		assert_eq!(
			entries,
			vec![("a", &AttributeValue::Int(3)), ("b", &AttributeValue::Int(2))]
		);
	}

	#[rstest]
	fn test_remove_keeps_order() {
		let mut attributes = Attributes::new().with("a", 1).with("b", 2).with("c", 3);
		assert_eq!(attributes.remove("b"), Some(AttributeValue::Int(2)));
		assert_eq!(attributes.remove("b"), None);
		let names: Vec<&str> = attributes.iter().map(|(name, _)| name).collect();
		assert_eq!(names, vec!["a", "c"]);
	}

	#[rstest]
	#[case("className", "class")]
	#[case("htmlFor", "for")]
	#[case("id", "id")]
	#[case("data-value", "data-value")]
	fn test_attribute_name(#[case] name: &str, #[case] expected: &str) {
		assert_eq!(attribute_name(name), expected);
	}

	#[rstest]
	fn test_take_raw_content_truthy() {
		let mut attributes = Attributes::new()
			.with("id", "x")
			.with(DANGEROUS_INNER_HTML, "<b>x</b>");
		assert_eq!(attributes.take_raw_content(), Some("<b>x</b>".to_string()));
		assert!(!attributes.contains(DANGEROUS_INNER_HTML));
		assert!(attributes.contains("id"));
	}

	#[rstest]
	#[case(AttributeValue::from(""))]
	#[case(AttributeValue::from(0))]
	#[case(AttributeValue::from(false))]
	fn test_take_raw_content_falsy_leaves_key(#[case] value: AttributeValue) {
		let mut attributes = Attributes::new().with(DANGEROUS_INNER_HTML, value);
		assert_eq!(attributes.take_raw_content(), None);
		assert!(attributes.contains(DANGEROUS_INNER_HTML));
	}

	#[rstest]
	fn test_attrs_macro() {
		let attributes = crate::attrs! { "id" => "main", "count" => 2 };
		assert_eq!(attributes.get("id"), Some(&AttributeValue::from("main")));
		assert_eq!(attributes.get("count"), Some(&AttributeValue::Int(2)));
		assert!(crate::attrs! {}.is_empty());
	}
}
