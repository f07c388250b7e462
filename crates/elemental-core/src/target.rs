//! Render target abstraction.
//!
//! A render target is the environment a node tree is materialized into: a
//! browser document, an in-memory document, or anything else that can create
//! element and text handles and link them together. Node construction never
//! touches a target; only serialization does.

/// Error type for materializing nodes into a render target.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
	/// Window object not available.
	#[error("Window object not available")]
	NoWindow,
	/// Document object not available.
	#[error("Document object not available")]
	NoDocument,
	/// Failed to create an element.
	#[error("Failed to create element <{0}>")]
	CreateElementFailed(String),
	/// Failed to create a text node.
	#[error("Failed to create text node")]
	CreateTextNodeFailed,
	/// Failed to set an attribute.
	#[error("Failed to set attribute '{name}'")]
	SetAttributeFailed {
		/// The attribute name.
		name: String,
	},
	/// The handle does not refer to an element.
	#[error("Handle does not refer to an element")]
	NotAnElement,
	/// Failed to append a child node.
	#[error("Failed to append child")]
	AppendChildFailed,
}

/// Result alias for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// An environment that node trees can be materialized into.
///
/// Handles are owned by the caller of serialization; the node tree never
/// retains them.
pub trait RenderTarget {
	/// A handle to a node created by this target.
	type Handle: Clone;

	/// Creates a detached element with the given tag name.
	fn create_element(&mut self, tag_name: &str) -> Result<Self::Handle>;

	/// Creates a detached text node holding `contents` as literal text.
	fn create_text_node(&mut self, contents: &str) -> Result<Self::Handle>;

	/// Sets a markup attribute on an element handle.
	fn set_attribute(&mut self, element: &Self::Handle, name: &str, value: &str) -> Result<()>;

	/// Appends `child` as the last child of `parent`.
	fn append_child(&mut self, parent: &Self::Handle, child: &Self::Handle) -> Result<()>;
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
	type Handle = T::Handle;

	fn create_element(&mut self, tag_name: &str) -> Result<Self::Handle> {
		(**self).create_element(tag_name)
	}

	fn create_text_node(&mut self, contents: &str) -> Result<Self::Handle> {
		(**self).create_text_node(contents)
	}

	fn set_attribute(&mut self, element: &Self::Handle, name: &str, value: &str) -> Result<()> {
		(**self).set_attribute(element, name, value)
	}

	fn append_child(&mut self, parent: &Self::Handle, child: &Self::Handle) -> Result<()> {
		(**self).append_child(parent, child)
	}
}
