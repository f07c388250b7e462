//! Node model and element factory.
//!
//! # Examples
//!
//! ```rust
//! use elemental::core::create_element;
//!
//! let node = create_element("toolTip", None, vec!["hi".into()]);
//! assert_eq!(node.render_to_string(), "<tool-tip>hi</tool-tip>");
//! ```

pub use elemental_core::*;
