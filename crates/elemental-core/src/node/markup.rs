//! HTML string rendering for node trees.

use super::{Child, Node, RenderNode};
use crate::attributes::attribute_name;
use crate::naming::is_valid_name;
use crate::value::AttributeValue;
use std::borrow::Cow;

/// Elements that never have a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// Returns whether `tag_name` is a void element.
pub fn is_void_element(tag_name: &str) -> bool {
	VOID_ELEMENTS.contains(&tag_name)
}

/// How childless void elements are closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VoidStyle {
	/// `<br />`
	#[default]
	SelfClosing,
	/// `<br>`
	Html5,
}

/// Options for markup rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupOptions {
	/// How void elements are closed.
	pub void_style: VoidStyle,
}

impl MarkupOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Closes void elements HTML5 style (`<br>`).
	pub fn html5(mut self) -> Self {
		self.void_style = VoidStyle::Html5;
		self
	}
}

/// Escapes `&`, `<`, `>`, `"` and `'` for use in text or a quoted
/// attribute value.
///
/// Input without any of those characters is returned borrowed.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	let Some(first) = s.find(['&', '<', '>', '"', '\'']) else {
		return Cow::Borrowed(s);
	};
	let (clean, rest) = s.split_at(first);
	let mut escaped = String::with_capacity(s.len() + 8);
	escaped.push_str(clean);
	for c in rest.chars() {
		let entity = match c {
			'&' => "&amp;",
			'<' => "&lt;",
			'>' => "&gt;",
			'"' => "&quot;",
			'\'' => "&#x27;",
			_ => {
				escaped.push(c);
				continue;
			}
		};
		escaped.push_str(entity);
	}
	Cow::Owned(escaped)
}

pub(super) fn write_node(node: &Node, options: &MarkupOptions, output: &mut String) {
	match node {
		Node::Element(element) => write_element(element, options, output),
		Node::Text(text) => output.push_str(&html_escape(text.contents())),
	}
}

/// Writes `element` and its subtree.
///
/// An element whose tag name fails [`is_valid_name`] is left out entirely,
/// along with its subtree. Attributes with invalid names are skipped.
pub(super) fn write_element(element: &RenderNode, options: &MarkupOptions, output: &mut String) {
	if !is_valid_name(element.tag_name()) {
		tracing::warn!(tag = element.tag_name(), "skipping element with invalid tag name");
		return;
	}
	output.push('<');
	output.push_str(element.tag_name());

	for (name, value) in element.attribute_iter() {
		let name = attribute_name(name);
		if !is_valid_name(name) {
			tracing::warn!(
				tag = element.tag_name(),
				name,
				"skipping attribute with invalid name"
			);
			continue;
		}
		let value = match value {
			AttributeValue::Bool(false) => continue,
			AttributeValue::Bool(true) => Cow::Borrowed(""),
			other => other.coerce(),
		};
		output.push(' ');
		output.push_str(name);
		output.push_str("=\"");
		output.push_str(&html_escape(&value));
		output.push('"');
	}

	// Void elements that were given children still get a closing tag
	if element.is_void() && element.children().is_empty() {
		match options.void_style {
			VoidStyle::SelfClosing => output.push_str(" />"),
			VoidStyle::Html5 => output.push('>'),
		}
		return;
	}

	output.push('>');
	for child in element.children() {
		match child {
			Child::Node(node) => write_node(node, options, output),
			Child::Text(text) => output.push_str(&html_escape(text)),
		}
	}
	output.push_str("</");
	output.push_str(element.tag_name());
	output.push('>');
}
