//! Integration tests for project-file round trips

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use unreal_nodes::nodes::{FGuidNode, Node, NodeKind, TSharedPtrNode, UnrealKind, WrapperNode};
use unreal_nodes::serialization::{
    load_node, parse_node_tree, save_node, serialize_node_tree, Element, XML_COMMENT_ATTRIBUTE,
    XML_NAME_ATTRIBUTE, XML_TYPE_ATTRIBUTE,
};
use unreal_nodes::{CollectingLogger, LogLevel};

#[test]
fn test_every_kind_round_trips_with_name_and_comment() {
    let logger = CollectingLogger::new();

    for kind in UnrealKind::ALL {
        let mut node = kind.create_node();
        node.base_mut().set_name("field");
        node.base_mut().set_comment("some note");

        let element = serialize_node_tree(node.as_ref(), &logger);
        let restored = parse_node_tree(&element, &logger)
            .unwrap_or_else(|| panic!("kind {kind:?} did not round trip"));

        assert_eq!(restored.kind(), NodeKind::Unreal(kind));
        assert_eq!(restored.name(), "field");
        assert_eq!(restored.comment(), "some note");
    }

    assert!(logger.entries().is_empty());
}

#[test]
fn test_two_levels_of_wrapper_nesting_round_trip() {
    let mut guid = Box::new(FGuidNode::new());
    guid.base_mut().set_name("payload");

    let mut inner_ptr = Box::new(TSharedPtrNode::new());
    inner_ptr.base_mut().set_name("indirect");
    inner_ptr.replace_inner(guid).unwrap();

    let mut outer_ptr = TSharedPtrNode::new();
    outer_ptr.base_mut().set_name("root");
    outer_ptr.replace_inner(inner_ptr).unwrap();

    let logger = CollectingLogger::new();
    let xml = save_node(&outer_ptr, &logger).unwrap();
    let restored = load_node(&xml, &logger).unwrap().unwrap();

    assert_eq!(restored.name(), "root");
    let level1 = restored.as_wrapper().unwrap().inner_node().unwrap();
    assert_eq!(level1.kind(), NodeKind::Unreal(UnrealKind::SharedPtr));
    assert_eq!(level1.name(), "indirect");
    let level2 = level1.as_wrapper().unwrap().inner_node().unwrap();
    assert_eq!(level2.kind(), NodeKind::Unreal(UnrealKind::Guid));
    assert_eq!(level2.name(), "payload");
}

#[test]
fn test_serialize_then_parse_never_changes_kind() {
    let logger = CollectingLogger::new();
    for kind in UnrealKind::ALL {
        let node = kind.create_node();
        let element = serialize_node_tree(node.as_ref(), &logger);
        assert_eq!(
            element.attribute(XML_TYPE_ATTRIBUTE),
            Some(kind.descriptor().type_name)
        );
        let restored = parse_node_tree(&element, &logger).unwrap();
        assert_eq!(restored.kind(), node.kind());
    }
}

#[test]
fn test_unknown_type_is_dropped_without_affecting_siblings() {
    let logger = CollectingLogger::new();

    let mut unknown = Element::node();
    unknown.set_attribute(XML_NAME_ATTRIBUTE, "mystery");
    unknown.set_attribute(XML_TYPE_ATTRIBUTE, "UnrealEngineClasses.FRotator");

    let mut known = Element::node();
    known.set_attribute(XML_NAME_ATTRIBUTE, "id");
    known.set_attribute(XML_TYPE_ATTRIBUTE, "UnrealEngineClasses.FGuid");

    // The host walks siblings in order and keeps going after a drop
    let nodes: Vec<_> = [&unknown, &known]
        .into_iter()
        .map(|element| parse_node_tree(element, &logger))
        .collect();

    assert!(nodes[0].is_none());
    let survivor = nodes[1].as_ref().expect("sibling must still parse");
    assert_eq!(survivor.name(), "id");

    assert_eq!(logger.count(LogLevel::Error), 1);
    assert_eq!(logger.count(LogLevel::Warning), 1);
    assert!(logger.entries()[0].1.contains("UnrealEngineClasses.FRotator"));
}

#[test]
fn test_wrapper_with_unknown_inner_survives_as_empty_wrapper() {
    let logger = CollectingLogger::new();

    let mut inner = Element::node();
    inner.set_attribute(XML_TYPE_ATTRIBUTE, "UnrealEngineClasses.FRotator");
    let mut outer = Element::node();
    outer.set_attribute(XML_NAME_ATTRIBUTE, "p");
    outer.set_attribute(XML_TYPE_ATTRIBUTE, "UnrealEngineClasses.TSharedPtr");
    outer.push_child(inner);

    let node = parse_node_tree(&outer, &logger).unwrap();
    assert!(node.as_wrapper().unwrap().inner_node().is_none());
    assert_eq!(logger.count(LogLevel::Error), 1);
}

#[test]
fn test_project_scenario_shared_ptr_of_guid() {
    let xml = r#"<node name="p" comment="" type="UnrealEngineClasses.TSharedPtr"><node name="id" comment="" type="UnrealEngineClasses.FGuid"/></node>"#;
    let logger = CollectingLogger::new();

    let node = load_node(xml, &logger).unwrap().unwrap();
    assert_eq!(node.kind(), NodeKind::Unreal(UnrealKind::SharedPtr));
    assert_eq!(node.name(), "p");
    let inner = node.as_wrapper().unwrap().inner_node().unwrap();
    assert_eq!(inner.kind(), NodeKind::Unreal(UnrealKind::Guid));
    assert_eq!(inner.name(), "id");

    // Re-serializing yields a structurally equivalent element
    let reserialized = serialize_node_tree(node.as_ref(), &logger);
    let original = Element::from_xml(xml).unwrap();
    assert_eq!(reserialized, original);
}

proptest! {
    #[test]
    fn prop_name_and_comment_round_trip(
        name in "[ -~]{0,32}",
        comment in "[ -~]{0,32}",
    ) {
        let logger = CollectingLogger::new();
        let mut node = TSharedPtrNode::new();
        node.base_mut().set_name(name.clone());
        node.base_mut().set_comment(comment.clone());
        node.replace_inner(Box::new(FGuidNode::new())).unwrap();

        let xml = save_node(&node, &logger).unwrap();
        let restored = load_node(&xml, &logger).unwrap().unwrap();

        prop_assert_eq!(restored.name(), name.as_str());
        prop_assert_eq!(restored.comment(), comment.as_str());
        prop_assert_eq!(restored.kind(), NodeKind::Unreal(UnrealKind::SharedPtr));
    }
}

#[test]
fn test_reserved_xml_characters_survive_persistence() {
    let logger = CollectingLogger::new();
    let mut node = FGuidNode::new();
    node.base_mut().set_name("a<b>&\"quoted\"");
    node.base_mut().set_comment("x & y < z");

    let xml = save_node(&node, &logger).unwrap();
    let restored = load_node(&xml, &logger).unwrap().unwrap();

    assert_eq!(restored.name(), "a<b>&\"quoted\"");
    assert_eq!(restored.comment(), "x & y < z");
}

#[test]
fn test_saved_element_always_has_name_and_comment_attributes() {
    let logger = CollectingLogger::new();
    let node = FGuidNode::new();

    let element = serialize_node_tree(&node, &logger);
    assert_eq!(element.attribute(XML_NAME_ATTRIBUTE), Some(""));
    assert_eq!(element.attribute(XML_COMMENT_ATTRIBUTE), Some(""));
}
