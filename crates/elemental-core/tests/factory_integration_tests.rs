//! Element factory integration tests
//!
//! Success Criteria:
//! 1. Static tags build normalized render nodes with flattened children
//! 2. The raw content attribute replaces content and never leaks into attributes
//! 3. Custom element handlers fully own the result
//! 4. Serialization into a target never mutates the source tree
//! 5. Constructed trees survive a JSON round trip

use elemental_core::{
	AttributeValue, Attributes, Child, Content, DANGEROUS_INNER_HTML, Node, RenderError,
	RenderTarget, Tag, attrs, create_element, element,
};
use rstest::*;

// ============================================================================
// Test Target
// ============================================================================

/// Records every target call; handles are sequential ids.
#[derive(Default)]
struct RecordingTarget {
	next_id: usize,
	calls: Vec<String>,
}

impl RenderTarget for RecordingTarget {
	type Handle = usize;

	fn create_element(&mut self, tag_name: &str) -> Result<usize, RenderError> {
		self.next_id += 1;
		self.calls.push(format!("element {} {}", self.next_id, tag_name));
		Ok(self.next_id)
	}

	fn create_text_node(&mut self, contents: &str) -> Result<usize, RenderError> {
		self.next_id += 1;
		self.calls.push(format!("text {} {}", self.next_id, contents));
		Ok(self.next_id)
	}

	fn set_attribute(&mut self, element: &usize, name: &str, value: &str) -> Result<(), RenderError> {
		self.calls.push(format!("attr {} {}={}", element, name, value));
		Ok(())
	}

	fn append_child(&mut self, parent: &usize, child: &usize) -> Result<(), RenderError> {
		self.calls.push(format!("append {} {}", parent, child));
		Ok(())
	}
}

/// A target with no live environment behind it.
struct UnavailableTarget;

impl RenderTarget for UnavailableTarget {
	type Handle = ();

	fn create_element(&mut self, _tag_name: &str) -> Result<(), RenderError> {
		Err(RenderError::NoDocument)
	}

	fn create_text_node(&mut self, _contents: &str) -> Result<(), RenderError> {
		Err(RenderError::NoDocument)
	}

	fn set_attribute(&mut self, _: &(), _: &str, _: &str) -> Result<(), RenderError> {
		Err(RenderError::NoDocument)
	}

	fn append_child(&mut self, _: &(), _: &()) -> Result<(), RenderError> {
		Err(RenderError::NoDocument)
	}
}

#[fixture]
fn card() -> Node {
	element!(
		"infoCard",
		Some(attrs! { "className" => "card", "hidden" => false, "open" => true }),
		element!("h2", None, "Title"),
		vec![Content::from("count: "), Content::from(3)],
	)
}

// ============================================================================
// Happy Path
// ============================================================================

#[rstest]
fn test_div_with_text() {
	let node = create_element("div", None, vec!["hello".into()]);
	let element = node.as_element().unwrap();

	assert_eq!(element.tag_name(), "div");
	assert!(element.attributes().is_none());
	assert_eq!(element.children(), &[Child::Text("hello".to_string())]);
}

#[rstest]
fn test_raw_content_attribute() {
	let attributes = Attributes::new().with(DANGEROUS_INNER_HTML, "<b>x</b>");
	let node = create_element("div", Some(attributes), vec!["ignored".into()]);
	let element = node.as_element().unwrap();

	assert_eq!(element.children(), &[Child::Node(Node::text("<b>x</b>"))]);
	assert!(!element.attributes().unwrap().contains(DANGEROUS_INNER_HTML));
}

#[rstest]
fn test_handler_sentinel_is_returned_unchanged() {
	let handler = Tag::component(|attributes, children| {
		let id = attributes
			.and_then(|a| a.get("id").cloned())
			.unwrap_or(AttributeValue::from("none"));
		let joined: Vec<&str> = children.iter().filter_map(Child::as_str).collect();
		Node::text(format!("sentinel:{}:{}", id, joined.join(",")))
	});

	let node = element!(handler, Some(attrs! { "id" => "h" }), "a", "b");

	assert_eq!(node, Node::text("sentinel:h:a,b"));
	assert!(node.as_element().is_none());
}

#[rstest]
fn test_nested_components_compose() {
	let item = Tag::component(|attributes, children| {
		create_element("li", attributes, children.into_iter().map(Content::from).collect())
	});
	let list = Tag::component(move |_, children| {
		let items = children
			.into_iter()
			.map(|child| Content::from(create_element(item.clone(), None, vec![child.into()])))
			.collect();
		create_element("ul", None, items)
	});

	let node = element!(list, None, vec!["one", "two"]);
	assert_eq!(
		node.render_to_string(),
		"<ul><li>one</li><li>two</li></ul>"
	);
}

// ============================================================================
// Serialization
// ============================================================================

#[rstest]
fn test_serialize_call_order(card: Node) {
	let mut target = RecordingTarget::default();
	let handle = card.serialize(&mut target).unwrap();

	assert_eq!(handle, 1);
	assert_eq!(
		target.calls,
		vec![
			"element 1 info-card",
			"attr 1 class=card",
			"attr 1 open=",
			"element 2 h2",
			"text 3 Title",
			"append 2 3",
			"append 1 2",
			"text 4 count: ",
			"append 1 4",
			"text 5 3",
			"append 1 5",
		]
	);
}

#[rstest]
fn test_serialize_twice_gives_distinct_handles(card: Node) {
	let before = card.clone();
	let mut target = RecordingTarget::default();

	let first = card.serialize(&mut target).unwrap();
	let second = card.serialize(&mut target).unwrap();

	assert_ne!(first, second);
	assert_eq!(card, before);
}

#[rstest]
fn test_construction_does_not_need_a_target(card: Node) {
	assert_eq!(card.serialize(&mut UnavailableTarget), Err(RenderError::NoDocument));
	assert_eq!(card.as_element().unwrap().tag_name(), "info-card");
}

#[rstest]
fn test_render_to_string(card: Node) {
	assert_eq!(
		card.render_to_string(),
		"<info-card class=\"card\" open=\"\"><h2>Title</h2>count: 3</info-card>"
	);
}

// ============================================================================
// Tree Serialization
// ============================================================================

#[rstest]
fn test_json_round_trip(card: Node) {
	let json = serde_json::to_string(&card).unwrap();
	let restored: Node = serde_json::from_str(&json).unwrap();
	assert_eq!(restored, card);
}

#[rstest]
fn test_render_error_messages() {
	assert_eq!(RenderError::NoWindow.to_string(), "Window object not available");
	assert_eq!(
		RenderError::CreateElementFailed("my tag".to_string()).to_string(),
		"Failed to create element <my tag>"
	);
	assert_eq!(
		RenderError::SetAttributeFailed {
			name: "id".to_string()
		}
		.to_string(),
		"Failed to set attribute 'id'"
	);
}
