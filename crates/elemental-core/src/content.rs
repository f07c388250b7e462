//! Content arguments and flattening.
//!
//! Element content is passed as a list of [`Content`] values that may nest
//! arbitrarily. [`flatten`] collapses them into the ordered [`Child`] list an
//! element stores.

use crate::node::{Child, Node, RenderNode, TextNode};
use crate::value::{AttributeValue, coerce};
use chrono::{DateTime, Utc};
use std::borrow::Cow;

/// A single content argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
	/// An already-built node.
	Node(Node),
	/// A scalar value, coerced to text when flattened.
	Value(AttributeValue),
	/// An absent value, coerced to the empty string when flattened.
	Absent,
	/// A nested sequence of content.
	List(Vec<Content>),
}

impl Content {
	/// Creates a nested list from anything convertible to content.
	pub fn list<I>(items: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Content>,
	{
		Self::List(items.into_iter().map(Into::into).collect())
	}
}

/// Flattens nested content into an ordered child list.
///
/// Traversal is depth-first and left to right. Nodes are moved through
/// unchanged, scalars are coerced to strings, absent values become empty
/// strings, and empty lists contribute nothing. The result never contains
/// nested sequences.
pub fn flatten(contents: Vec<Content>) -> Vec<Child> {
	let mut results = Vec::with_capacity(contents.len());
	flatten_into(contents, &mut results);
	results
}

fn flatten_into(contents: Vec<Content>, results: &mut Vec<Child>) {
	for content in contents {
		match content {
			Content::Node(node) => results.push(Child::Node(node)),
			Content::List(nested) => flatten_into(nested, results),
			Content::Value(AttributeValue::Str(text)) => results.push(Child::Text(text.into_owned())),
			Content::Value(value) => results.push(Child::Text(value.coerce().into_owned())),
			Content::Absent => results.push(Child::Text(coerce(None).into_owned())),
		}
	}
}

impl From<Node> for Content {
	fn from(node: Node) -> Self {
		Self::Node(node)
	}
}

impl From<RenderNode> for Content {
	fn from(node: RenderNode) -> Self {
		Self::Node(Node::Element(node))
	}
}

impl From<TextNode> for Content {
	fn from(node: TextNode) -> Self {
		Self::Node(Node::Text(node))
	}
}

impl From<Child> for Content {
	fn from(child: Child) -> Self {
		match child {
			Child::Node(node) => Self::Node(node),
			Child::Text(text) => Self::Value(AttributeValue::from(text)),
		}
	}
}

impl From<AttributeValue> for Content {
	fn from(value: AttributeValue) -> Self {
		Self::Value(value)
	}
}

impl<T: Into<Content>> From<Option<T>> for Content {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Absent, Into::into)
	}
}

impl<T: Into<Content>> From<Vec<T>> for Content {
	fn from(items: Vec<T>) -> Self {
		Self::list(items)
	}
}

impl<T: Into<Content>, const N: usize> From<[T; N]> for Content {
	fn from(items: [T; N]) -> Self {
		Self::list(items)
	}
}

macro_rules! impl_from_scalar {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Content {
				fn from(value: $ty) -> Self {
					Self::Value(AttributeValue::from(value))
				}
			}
		)*
	};
}

impl_from_scalar!(
	&'static str,
	String,
	&String,
	Cow<'static, str>,
	bool,
	f32,
	f64,
	i8,
	i16,
	i32,
	i64,
	u8,
	u16,
	u32,
	DateTime<Utc>
);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn texts(children: &[Child]) -> Vec<&str> {
		children.iter().filter_map(Child::as_str).collect()
	}

	#[rstest]
	fn test_flatten_scalars() {
		let children = flatten(vec!["a".into(), 1.into(), 2.5.into(), true.into()]);
		assert_eq!(texts(&children), vec!["a", "1", "2.5", "true"]);
	}

	#[rstest]
	fn test_flatten_large_and_small_floats_use_exponents() {
		let children = flatten(vec![1e21.into(), 1.5e-7.into()]);
		assert_eq!(texts(&children), vec!["1e+21", "1.5e-7"]);
	}

	#[rstest]
	fn test_flatten_nested_preserves_order() {
		let children = flatten(vec![
			"a".into(),
			Content::list(vec![
				Content::from("b"),
				Content::list(vec![Content::from("c"), Content::from("d")]),
			]),
			"e".into(),
		]);
		assert_eq!(texts(&children), vec!["a", "b", "c", "d", "e"]);
	}

	#[rstest]
	fn test_flatten_empty_lists_contribute_nothing() {
		let nested_empty = Content::list(vec![Content::List(vec![]), Content::List(vec![])]);
		assert!(flatten(vec![nested_empty]).is_empty());
		assert!(flatten(vec![]).is_empty());
	}

	#[rstest]
	fn test_flatten_absent_is_empty_string() {
		let children = flatten(vec![None::<&'static str>.into(), Some("x").into()]);
		assert_eq!(texts(&children), vec!["", "x"]);
	}

	#[rstest]
	fn test_flatten_passes_nodes_through() {
		let raw = TextNode::new("<b>x</b>");
		let children = flatten(vec![Content::list([raw.clone()]), "after".into()]);
		assert_eq!(children[0], Child::Node(Node::Text(raw)));
		assert_eq!(children[1], Child::Text("after".to_string()));
	}

	#[rstest]
	fn test_child_round_trips_through_content() {
		let children = flatten(vec![Child::from("s").into(), Child::from(Node::text("t")).into()]);
		assert_eq!(children, vec![Child::from("s"), Child::from(Node::text("t"))]);
	}
}
