//! Node model.
//!
//! A constructed tree is made of two node kinds: [`TextNode`] for literal
//! text and [`RenderNode`] for tagged elements. Element children are already
//! flattened; a child is either a node or a plain string.
//!
//! ## Example
//!
//! ```ignore
//! use elemental_core::{attrs, element};
//!
//! let node = element!("customCard", Some(attrs! { "id" => "card" }), "Hello, ", 3);
//!
//! let html = node.render_to_string();
//! let handle = node.serialize(&mut document)?;
//! ```

mod markup;

pub use markup::{MarkupOptions, VOID_ELEMENTS, VoidStyle, html_escape, is_void_element};

use crate::attributes::{Attributes, attribute_name};
use crate::target::{RenderTarget, Result};
use crate::value::AttributeValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node holding literal, unescaped text.
///
/// Serialization always produces a text handle: the contents are inserted as
/// text and never parsed as markup, even when the node was created from the
/// raw content attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
	contents: String,
}

impl TextNode {
	/// Creates a text node.
	pub fn new(contents: impl Into<String>) -> Self {
		Self {
			contents: contents.into(),
		}
	}

	/// Returns the raw contents.
	pub fn contents(&self) -> &str {
		&self.contents
	}

	/// Materializes this node as a text handle in `target`.
	pub fn serialize<T: RenderTarget + ?Sized>(&self, target: &mut T) -> Result<T::Handle> {
		target.create_text_node(&self.contents)
	}
}

impl fmt::Display for TextNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.contents)
	}
}

/// A tagged element with attributes and flattened children.
///
/// Render nodes are built by [`create_element`](crate::create_element) and
/// are not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderNode {
	tag_name: String,
	attributes: Option<Attributes>,
	children: Vec<Child>,
}

impl RenderNode {
	pub(crate) fn new(tag_name: String, attributes: Option<Attributes>, children: Vec<Child>) -> Self {
		Self {
			tag_name,
			attributes,
			children,
		}
	}

	/// Returns the normalized tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag_name
	}

	/// Returns the attribute map, if one was supplied.
	pub fn attributes(&self) -> Option<&Attributes> {
		self.attributes.as_ref()
	}

	/// Returns the children in order.
	pub fn children(&self) -> &[Child] {
		&self.children
	}

	/// Returns whether this is a void element (no closing tag in markup).
	pub fn is_void(&self) -> bool {
		is_void_element(&self.tag_name)
	}

	/// Consumes the node and returns (tag_name, attributes, children).
	pub fn into_parts(self) -> (String, Option<Attributes>, Vec<Child>) {
		(self.tag_name, self.attributes, self.children)
	}

	/// Iterates over the attributes; an absent map yields nothing.
	pub(crate) fn attribute_iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
		self.attributes.iter().flat_map(|attributes| attributes.iter())
	}

	/// Materializes this element and its subtree in `target`.
	///
	/// Attributes are applied in insertion order through
	/// [`RenderTarget::set_attribute`]: `false` booleans are skipped, `true`
	/// booleans are set to the empty string, and `className` / `htmlFor` are
	/// written as `class` / `for`. String children become text handles.
	///
	/// Every call creates fresh handles; the node itself is left untouched.
	pub fn serialize<T: RenderTarget + ?Sized>(&self, target: &mut T) -> Result<T::Handle> {
		tracing::trace!(
			tag = %self.tag_name,
			children = self.children.len(),
			"serializing element"
		);

		let element = target.create_element(&self.tag_name)?;

		for (name, value) in self.attribute_iter() {
			let name = attribute_name(name);
			match value {
				AttributeValue::Bool(false) => {}
				AttributeValue::Bool(true) => target.set_attribute(&element, name, "")?,
				other => target.set_attribute(&element, name, &other.coerce())?,
			}
		}

		for child in &self.children {
			let handle = child.serialize(target)?;
			target.append_child(&element, &handle)?;
		}

		Ok(element)
	}

	/// Renders the element to an HTML string with default options.
	pub fn render_to_string(&self) -> String {
		self.render_to_string_with(&MarkupOptions::default())
	}

	/// Renders the element to an HTML string.
	pub fn render_to_string_with(&self, options: &MarkupOptions) -> String {
		let mut output = String::new();
		markup::write_element(self, options, &mut output);
		output
	}
}

impl fmt::Display for RenderNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render_to_string())
	}
}

/// Any node the factory or a custom element handler can produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
	/// A tagged element.
	Element(RenderNode),
	/// Literal text.
	Text(TextNode),
}

impl Node {
	/// Creates a text node.
	pub fn text(contents: impl Into<String>) -> Self {
		Self::Text(TextNode::new(contents))
	}

	/// Returns the element if this is an element node.
	pub fn as_element(&self) -> Option<&RenderNode> {
		match self {
			Self::Element(element) => Some(element),
			Self::Text(_) => None,
		}
	}

	/// Returns the text node if this is a text node.
	pub fn as_text(&self) -> Option<&TextNode> {
		match self {
			Self::Text(text) => Some(text),
			Self::Element(_) => None,
		}
	}

	/// Materializes this node in `target`.
	pub fn serialize<T: RenderTarget + ?Sized>(&self, target: &mut T) -> Result<T::Handle> {
		match self {
			Self::Element(element) => element.serialize(target),
			Self::Text(text) => text.serialize(target),
		}
	}

	/// Renders the node to an HTML string with default options.
	pub fn render_to_string(&self) -> String {
		self.render_to_string_with(&MarkupOptions::default())
	}

	/// Renders the node to an HTML string.
	///
	/// Text contents are escaped, matching how [`serialize`](Self::serialize)
	/// inserts them as literal text.
	pub fn render_to_string_with(&self, options: &MarkupOptions) -> String {
		let mut output = String::new();
		markup::write_node(self, options, &mut output);
		output
	}
}

impl fmt::Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Element(element) => fmt::Display::fmt(element, f),
			Self::Text(text) => fmt::Display::fmt(text, f),
		}
	}
}

impl From<RenderNode> for Node {
	fn from(element: RenderNode) -> Self {
		Self::Element(element)
	}
}

impl From<TextNode> for Node {
	fn from(text: TextNode) -> Self {
		Self::Text(text)
	}
}

/// A flattened element child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Child {
	/// An already-built node, passed through unchanged.
	Node(Node),
	/// Coerced scalar content.
	Text(String),
}

impl Child {
	/// Returns the node if this child is a node.
	pub fn as_node(&self) -> Option<&Node> {
		match self {
			Self::Node(node) => Some(node),
			Self::Text(_) => None,
		}
	}

	/// Returns the string if this child is plain text.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			Self::Node(_) => None,
		}
	}

	/// Materializes this child in `target`; strings become text handles.
	pub fn serialize<T: RenderTarget + ?Sized>(&self, target: &mut T) -> Result<T::Handle> {
		match self {
			Self::Node(node) => node.serialize(target),
			Self::Text(text) => target.create_text_node(text),
		}
	}
}

impl From<Node> for Child {
	fn from(node: Node) -> Self {
		Self::Node(node)
	}
}

impl From<String> for Child {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<&str> for Child {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}
