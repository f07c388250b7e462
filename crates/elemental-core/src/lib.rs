//! Elemental Core - declarative element construction
//!
//! Converts function-call-style element descriptions (tag name, attribute
//! map, nested content) into a node tree that can be rendered to an HTML
//! string or materialized into any [`RenderTarget`].
//!
//! ## Architecture
//!
//! - [`naming`]: camel-case to kebab-case tag name normalization
//! - [`value`]: attribute values and the string coercion rule
//! - [`attributes`]: insertion-ordered attribute maps
//! - [`content`]: nested content arguments and flattening
//! - [`node`]: the node model, target serialization and markup rendering
//! - [`target`]: the render target trait and its error type
//! - [`factory`]: `create_element` and custom element dispatch
//!
//! ## Example
//!
//! ```
//! use elemental_core::{Content, Tag, attrs, create_element, element};
//!
//! let badge = Tag::component(|attributes, children| {
//!     let mut contents: Vec<Content> = vec!["#".into()];
//!     contents.extend(children.into_iter().map(Into::into));
//!     create_element("span", attributes, contents)
//! });
//!
//! let node = element!(
//!     "userCard",
//!     Some(attrs! { "className" => "card" }),
//!     element!(badge, None, 7),
//!     " Ada",
//! );
//!
//! assert_eq!(
//!     node.render_to_string(),
//!     "<user-card class=\"card\"><span>#7</span> Ada</user-card>"
//! );
//! ```

#![warn(missing_docs)]

pub mod attributes;
pub mod content;
pub mod factory;
pub mod naming;
pub mod node;
pub mod target;
pub mod value;

pub use attributes::{Attributes, DANGEROUS_INNER_HTML, attribute_name};
pub use content::{Content, flatten};
pub use factory::{CustomElementHandler, Tag, create_element, create_element_with_raw_content};
pub use naming::{is_valid_name, to_kebab_case};
pub use node::{Child, MarkupOptions, Node, RenderNode, TextNode, VoidStyle};
pub use target::{RenderError, RenderTarget};
pub use value::{AttributeValue, coerce};
