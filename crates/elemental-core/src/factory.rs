//! Element factory.
//!
//! [`create_element`] is the single construction entry point. Its first
//! argument is a [`Tag`]: either a static tag name, which produces a
//! [`RenderNode`], or a custom element handler, which receives the
//! attributes and flattened content and produces the node itself.

use crate::attributes::Attributes;
use crate::content::{Content, flatten};
use crate::naming::to_kebab_case;
use crate::node::{Child, Node, RenderNode, TextNode};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A custom element: receives the attribute map and the flattened content
/// and returns the node to use in its place.
pub type CustomElementHandler = Arc<dyn Fn(Option<Attributes>, Vec<Child>) -> Node + Send + Sync>;

/// What to build: a tag name or a custom element handler.
#[derive(Clone)]
pub enum Tag {
	/// A camel-cased tag name, normalized to kebab case on construction.
	Static(Cow<'static, str>),
	/// A custom element handler.
	Component(CustomElementHandler),
}

impl Tag {
	/// Wraps a closure as a custom element.
	///
	/// # Example
	///
	/// ```
	/// use elemental_core::{Tag, create_element, Node};
	///
	/// let card = Tag::component(|attributes, children| {
	///     create_element("section", attributes, children.into_iter().map(Into::into).collect())
	/// });
	/// let node = create_element(card, None, vec!["body".into()]);
	/// assert_eq!(node.render_to_string(), "<section>body</section>");
	/// ```
	pub fn component<F>(handler: F) -> Self
	where
		F: Fn(Option<Attributes>, Vec<Child>) -> Node + Send + Sync + 'static,
	{
		Self::Component(Arc::new(handler))
	}
}

impl fmt::Debug for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Static(name) => f.debug_tuple("Static").field(name).finish(),
			Self::Component(_) => f.debug_tuple("Component").field(&"<handler>").finish(),
		}
	}
}

impl From<&'static str> for Tag {
	fn from(name: &'static str) -> Self {
		Self::Static(Cow::Borrowed(name))
	}
}

impl From<String> for Tag {
	fn from(name: String) -> Self {
		Self::Static(Cow::Owned(name))
	}
}

impl From<CustomElementHandler> for Tag {
	fn from(handler: CustomElementHandler) -> Self {
		Self::Component(handler)
	}
}

/// Builds an element.
///
/// If `attributes` holds a truthy
/// [`DANGEROUS_INNER_HTML`](crate::DANGEROUS_INNER_HTML) entry, that entry is
/// removed and its string form replaces all of `contents` as a single
/// [`TextNode`]. Everything else behaves like
/// [`create_element_with_raw_content`] with no raw content.
pub fn create_element(
	tag: impl Into<Tag>,
	mut attributes: Option<Attributes>,
	contents: Vec<Content>,
) -> Node {
	let raw_content = attributes.as_mut().and_then(Attributes::take_raw_content);
	create_element_with_raw_content(tag, attributes, raw_content, contents)
}

/// Builds an element, with raw content passed explicitly.
///
/// 1. `Some(raw)` discards `contents` and uses a single [`TextNode`] holding
///    `raw` instead.
/// 2. The content is flattened.
/// 3. A [`Tag::Component`] handler is called with the attributes and the
///    flattened content, and its result is returned as is.
/// 4. A [`Tag::Static`] name is normalized to kebab case and a
///    [`RenderNode`] is returned.
pub fn create_element_with_raw_content(
	tag: impl Into<Tag>,
	attributes: Option<Attributes>,
	raw_content: Option<String>,
	contents: Vec<Content>,
) -> Node {
	let contents = match raw_content {
		Some(raw) => {
			if !contents.is_empty() {
				tracing::debug!(
					discarded = contents.len(),
					"raw content replaces element content"
				);
			}
			vec![Content::from(TextNode::new(raw))]
		}
		None => contents,
	};
	let children = flatten(contents);

	match tag.into() {
		Tag::Component(handler) => {
			tracing::trace!(children = children.len(), "delegating to custom element");
			handler(attributes, children)
		}
		Tag::Static(name) => {
			let tag_name = to_kebab_case(&name);
			tracing::trace!(tag = %tag_name, children = children.len(), "creating element");
			Node::Element(RenderNode::new(tag_name, attributes, children))
		}
	}
}

/// Builds an element from a variadic content list.
///
/// `element!(tag)`, `element!(tag, attributes)` and
/// `element!(tag, attributes, content...)` call
/// [`create_element`](crate::create_element), converting each content
/// argument with [`Content::from`](crate::Content).
///
/// ```
/// use elemental_core::{attrs, element};
///
/// let node = element!("listItem", Some(attrs! { "id" => "first" }), "Item ", 1);
/// assert_eq!(node.render_to_string(), "<list-item id=\"first\">Item 1</list-item>");
/// ```
#[macro_export]
macro_rules! element {
	($tag:expr) => {
		$crate::create_element($tag, ::core::option::Option::None, ::std::vec::Vec::new())
	};
	($tag:expr, $attributes:expr $(, $content:expr)* $(,)?) => {
		$crate::create_element(
			$tag,
			$attributes,
			::std::vec![$($crate::Content::from($content)),*],
		)
	};
}
