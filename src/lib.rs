//! # Elemental
//!
//! A minimal declarative element builder.
//!
//! Elements are described with plain function calls (a tag name or custom
//! element handler, an optional attribute map and any amount of nested
//! content) and materialize into an HTML string or any render target.
//!
//! ## Feature Flags
//!
//! - `dom` (default) - Render targets: the in-memory [`MemoryDocument`] on
//!   every platform and [`BrowserDocument`] on `wasm32-unknown-unknown`
//!
//! ## Quick Example
//!
//! ```rust
//! use elemental::prelude::*;
//!
//! let greeting = Tag::component(|attributes, children| {
//!     let mut contents: Vec<Content> = vec!["Hello, ".into()];
//!     contents.extend(children.into_iter().map(Into::into));
//!     create_element("strong", attributes, contents)
//! });
//!
//! let page = element!(
//!     "mainPanel",
//!     Some(attrs! { "className" => "panel", "hidden" => false }),
//!     element!(greeting, None, "world"),
//!     vec![element!("br"), element!("small", None, 2024)],
//! );
//!
//! assert_eq!(
//!     page.render_to_string(),
//!     "<main-panel class=\"panel\"><strong>Hello, world</strong><br /><small>2024</small></main-panel>"
//! );
//! ```

#![warn(missing_docs)]

pub mod core;
pub mod dom;

pub use elemental_core::{
	AttributeValue, Attributes, Child, Content, CustomElementHandler, DANGEROUS_INNER_HTML,
	MarkupOptions, Node, RenderError, RenderNode, RenderTarget, Tag, TextNode, VoidStyle,
	attribute_name, attrs, coerce, create_element, create_element_with_raw_content, element,
	flatten, to_kebab_case,
};

#[cfg(feature = "dom")]
pub use elemental_dom::{BrowserDocument, MemoryDocument, MemoryNode, Snapshot, mount, mount_to_body};

/// Re-exports of the common types and macros.
pub mod prelude {
	pub use crate::{
		AttributeValue, Attributes, Child, Content, Node, RenderError, RenderNode, RenderTarget,
		Tag, TextNode, attrs, create_element, element,
	};

	#[cfg(feature = "dom")]
	pub use crate::{MemoryDocument, mount};
}
