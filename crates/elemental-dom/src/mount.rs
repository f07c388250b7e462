//! Mounting built trees into a target.

use crate::browser::BrowserDocument;
use elemental_core::Node;
use elemental_core::target::{RenderTarget, Result};

/// Serializes `node` into `target` and appends the result to `parent`.
///
/// Returns the handle of the newly created root. The node itself is left
/// unchanged and can be mounted again.
pub fn mount<T: RenderTarget + ?Sized>(
	node: &Node,
	target: &mut T,
	parent: &T::Handle,
) -> Result<T::Handle> {
	let handle = node.serialize(target)?;
	target.append_child(parent, &handle)?;
	tracing::debug!("node mounted");
	Ok(handle)
}

/// Mounts `node` into the `<body>` of the current browser document.
///
/// Fails with [`RenderError::NoWindow`](elemental_core::RenderError::NoWindow)
/// when there is no browser environment.
pub fn mount_to_body(node: &Node) -> Result<<BrowserDocument as RenderTarget>::Handle> {
	let mut document = BrowserDocument::current()?;
	let body = document.body()?;
	mount(node, &mut document, &body)
}
