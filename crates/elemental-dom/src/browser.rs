//! Browser render target.
//!
//! On `wasm32-unknown-unknown`, [`BrowserDocument`] wraps the live
//! `web_sys::Document` and hands out `web_sys::Node` handles. Everywhere
//! else there is no rendering environment: [`BrowserDocument::current`]
//! always fails with [`RenderError::NoWindow`] and the type cannot be
//! constructed.

use elemental_core::target::{RenderError, RenderTarget, Result};

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub use wasm::BrowserDocument;

#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
pub use native::BrowserDocument;

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
mod wasm {
	use super::*;
	use wasm_bindgen::JsCast;

	/// The document of the current browser window.
	#[derive(Debug, Clone)]
	pub struct BrowserDocument {
		document: web_sys::Document,
	}

	impl BrowserDocument {
		/// Resolves the document of the current window.
		pub fn current() -> Result<Self> {
			let window = web_sys::window().ok_or(RenderError::NoWindow)?;
			let document = window.document().ok_or(RenderError::NoDocument)?;
			Ok(Self { document })
		}

		/// Wraps an existing document.
		pub fn from_document(document: web_sys::Document) -> Self {
			Self { document }
		}

		/// Returns the `<body>` element as a mount point.
		pub fn body(&self) -> Result<web_sys::Node> {
			self.document
				.body()
				.map(web_sys::Node::from)
				.ok_or(RenderError::NoDocument)
		}
	}

	impl RenderTarget for BrowserDocument {
		type Handle = web_sys::Node;

		fn create_element(&mut self, tag_name: &str) -> Result<web_sys::Node> {
			self.document
				.create_element(tag_name)
				.map(web_sys::Node::from)
				.map_err(|err| {
					tracing::warn!(tag = tag_name, error = ?err, "createElement failed");
					RenderError::CreateElementFailed(tag_name.to_string())
				})
		}

		fn create_text_node(&mut self, contents: &str) -> Result<web_sys::Node> {
			Ok(web_sys::Node::from(self.document.create_text_node(contents)))
		}

		fn set_attribute(&mut self, element: &web_sys::Node, name: &str, value: &str) -> Result<()> {
			let element = element
				.dyn_ref::<web_sys::Element>()
				.ok_or(RenderError::NotAnElement)?;
			element.set_attribute(name, value).map_err(|err| {
				tracing::warn!(name, error = ?err, "setAttribute failed");
				RenderError::SetAttributeFailed {
					name: name.to_string(),
				}
			})
		}

		fn append_child(&mut self, parent: &web_sys::Node, child: &web_sys::Node) -> Result<()> {
			parent.append_child(child).map(|_| ()).map_err(|err| {
				tracing::warn!(error = ?err, "appendChild failed");
				RenderError::AppendChildFailed
			})
		}
	}
}

#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
mod native {
	use super::*;
	use std::convert::Infallible;

	/// The document of the current browser window.
	///
	/// There is no browser outside `wasm32-unknown-unknown`, so this type is
	/// uninhabited and [`current`](Self::current) always fails.
	#[derive(Debug, Clone)]
	pub struct BrowserDocument {
		never: Infallible,
	}

	impl BrowserDocument {
		/// Resolves the document of the current window.
		pub fn current() -> Result<Self> {
			Err(RenderError::NoWindow)
		}

		/// Returns the `<body>` element as a mount point.
		pub fn body(&self) -> Result<Infallible> {
			match self.never {}
		}
	}

	impl RenderTarget for BrowserDocument {
		type Handle = Infallible;

		fn create_element(&mut self, _tag_name: &str) -> Result<Infallible> {
			match self.never {}
		}

		fn create_text_node(&mut self, _contents: &str) -> Result<Infallible> {
			match self.never {}
		}

		fn set_attribute(&mut self, _: &Infallible, _: &str, _: &str) -> Result<()> {
			match self.never {}
		}

		fn append_child(&mut self, _: &Infallible, _: &Infallible) -> Result<()> {
			match self.never {}
		}
	}
}

#[cfg(all(test, not(all(target_family = "wasm", target_os = "unknown"))))]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_no_window_off_wasm() {
		assert_eq!(
			BrowserDocument::current().err(),
			Some(RenderError::NoWindow)
		);
	}
}
