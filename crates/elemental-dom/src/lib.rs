//! Elemental DOM - render targets for elemental node trees
//!
//! Provides the [`RenderTarget`](elemental_core::RenderTarget)
//! implementations that node trees are serialized into.
//!
//! ## Architecture
//!
//! - [`memory`]: an arena-backed document usable on every platform
//! - [`browser`]: the live browser document (`wasm32-unknown-unknown` only)
//! - [`mount`](mod@mount): serialize-and-append helpers
//!
//! ## Example
//!
//! ```
//! use elemental_core::{RenderTarget, attrs, element};
//! use elemental_dom::{MemoryDocument, mount};
//!
//! let mut document = MemoryDocument::new();
//! let root = document.create_element("main").unwrap();
//!
//! let node = element!("todoItem", Some(attrs! { "checked" => true }), "Write docs");
//! mount(&node, &mut document, &root).unwrap();
//!
//! assert_eq!(
//!     document.outer_html(root),
//!     "<main><todo-item checked=\"\">Write docs</todo-item></main>"
//! );
//! ```

#![warn(missing_docs)]

pub mod browser;
pub mod memory;
pub mod mount;

pub use browser::BrowserDocument;
pub use memory::{MemoryDocument, MemoryNode, Snapshot};
pub use mount::{mount, mount_to_body};
