//! Render targets.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "dom")]
//! # {
//! use elemental::dom::MemoryDocument;
//!
//! let document = MemoryDocument::new();
//! assert!(document.is_empty());
//! # }
//! ```

#[cfg(feature = "dom")]
pub use elemental_dom::*;
