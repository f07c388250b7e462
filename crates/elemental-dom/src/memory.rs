//! In-memory render target.
//!
//! [`MemoryDocument`] keeps created nodes in an arena and hands out arena ids
//! as handles. It works on every platform, which makes it the target of
//! choice for tests and for inspecting what a tree would produce in a
//! browser.

use elemental_core::naming::is_valid_name;
use elemental_core::node::{html_escape, is_void_element};
use elemental_core::target::{RenderError, RenderTarget, Result};
use indextree::{Arena, NodeId};

/// A node stored in a [`MemoryDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryNode {
	/// An element with its attributes in the order they were set.
	Element {
		/// The tag name.
		tag_name: String,
		/// Attribute name/value pairs.
		attributes: Vec<(String, String)>,
	},
	/// A text node.
	Text(String),
}

/// An owned copy of a subtree, comparable for structural equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
	/// The node itself.
	pub node: MemoryNode,
	/// Snapshots of the children in order.
	pub children: Vec<Snapshot>,
}

/// An arena-backed document.
#[derive(Debug, Default)]
pub struct MemoryDocument {
	arena: Arena<MemoryNode>,
}

impl MemoryDocument {
	/// Creates an empty document.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the number of nodes created so far.
	pub fn len(&self) -> usize {
		self.arena.count()
	}

	/// Returns whether no node has been created yet.
	pub fn is_empty(&self) -> bool {
		self.arena.is_empty()
	}

	/// Returns the node behind a handle.
	pub fn node(&self, handle: NodeId) -> Option<&MemoryNode> {
		self.arena.get(handle).map(|node| node.get())
	}

	/// Returns the children of a handle in order.
	pub fn children(&self, handle: NodeId) -> Vec<NodeId> {
		if self.arena.get(handle).is_none() {
			return Vec::new();
		}
		handle.children(&self.arena).collect()
	}

	/// Returns the parent of a handle.
	pub fn parent(&self, handle: NodeId) -> Option<NodeId> {
		self.arena.get(handle)?.parent()
	}

	/// Returns the tag name if the handle is an element.
	pub fn tag_name(&self, handle: NodeId) -> Option<&str> {
		match self.node(handle)? {
			MemoryNode::Element { tag_name, .. } => Some(tag_name),
			MemoryNode::Text(_) => None,
		}
	}

	/// Returns an attribute value if the handle is an element carrying it.
	pub fn attribute(&self, handle: NodeId, name: &str) -> Option<&str> {
		match self.node(handle)? {
			MemoryNode::Element { attributes, .. } => attributes
				.iter()
				.find(|(key, _)| key == name)
				.map(|(_, value)| value.as_str()),
			MemoryNode::Text(_) => None,
		}
	}

	/// Returns the concatenated text of a handle and its descendants.
	pub fn text_content(&self, handle: NodeId) -> String {
		let mut output = String::new();
		self.collect_text(handle, &mut output);
		output
	}

	fn collect_text(&self, handle: NodeId, output: &mut String) {
		match self.node(handle) {
			Some(MemoryNode::Text(text)) => output.push_str(text),
			Some(MemoryNode::Element { .. }) => {
				for child in self.children(handle) {
					self.collect_text(child, output);
				}
			}
			None => {}
		}
	}

	/// Serializes a handle and its descendants to HTML.
	pub fn outer_html(&self, handle: NodeId) -> String {
		let mut output = String::new();
		self.write_html(handle, &mut output);
		output
	}

	fn write_html(&self, handle: NodeId, output: &mut String) {
		let Some(node) = self.node(handle) else {
			return;
		};
		match node {
			MemoryNode::Text(text) => output.push_str(&html_escape(text)),
			MemoryNode::Element {
				tag_name,
				attributes,
			} => {
				output.push('<');
				output.push_str(tag_name);
				for (name, value) in attributes {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				let children = self.children(handle);
				if children.is_empty() && is_void_element(tag_name) {
					output.push_str(" />");
					return;
				}
				output.push('>');
				for child in children {
					self.write_html(child, output);
				}
				output.push_str("</");
				output.push_str(tag_name);
				output.push('>');
			}
		}
	}

	/// Takes an owned snapshot of a handle's subtree.
	pub fn snapshot(&self, handle: NodeId) -> Option<Snapshot> {
		let node = self.node(handle)?.clone();
		let children = self
			.children(handle)
			.into_iter()
			.filter_map(|child| self.snapshot(child))
			.collect();
		Some(Snapshot { node, children })
	}
}

impl RenderTarget for MemoryDocument {
	type Handle = NodeId;

	fn create_element(&mut self, tag_name: &str) -> Result<NodeId> {
		if !is_valid_name(tag_name) {
			tracing::warn!(tag = tag_name, "invalid tag name rejected by memory document");
			return Err(RenderError::CreateElementFailed(tag_name.to_string()));
		}
		Ok(self.arena.new_node(MemoryNode::Element {
			tag_name: tag_name.to_string(),
			attributes: Vec::new(),
		}))
	}

	fn create_text_node(&mut self, contents: &str) -> Result<NodeId> {
		Ok(self.arena.new_node(MemoryNode::Text(contents.to_string())))
	}

	fn set_attribute(&mut self, element: &NodeId, name: &str, value: &str) -> Result<()> {
		if !is_valid_name(name) {
			tracing::warn!(name, "invalid attribute name rejected by memory document");
			return Err(RenderError::SetAttributeFailed {
				name: name.to_string(),
			});
		}
		let node = self
			.arena
			.get_mut(*element)
			.ok_or(RenderError::NotAnElement)?;
		let MemoryNode::Element { attributes, .. } = node.get_mut() else {
			return Err(RenderError::NotAnElement);
		};

		match attributes.iter_mut().find(|(key, _)| key == name) {
			Some((_, existing)) => *existing = value.to_string(),
			None => attributes.push((name.to_string(), value.to_string())),
		}
		Ok(())
	}

	fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<()> {
		if !matches!(self.node(*parent), Some(MemoryNode::Element { .. })) {
			return Err(RenderError::AppendChildFailed);
		}
		if self.arena.get(*child).is_none() {
			return Err(RenderError::AppendChildFailed);
		}
		parent
			.checked_append(*child, &mut self.arena)
			.map_err(|err| {
				tracing::warn!(error = ?err, "append rejected by memory document");
				RenderError::AppendChildFailed
			})
	}
}
