//! Tree-level driving of the converter
//!
//! The real inspector owns the outer project container and walks it
//! element by element. These helpers replay its per-element protocol —
//! instantiate, populate attributes, recurse into the wrapper child — so
//! whole trees of contributed kinds round-trip in tests and in headless
//! tools.

use super::converter::NodeConverter;
use super::element::{
    Element, ProjectError, XML_COMMENT_ATTRIBUTE, XML_NAME_ATTRIBUTE,
};
use super::{CreateNodeHandler, CustomNodeSerializer, SerializeNodeHandler};
use crate::core::logging::{LogLevel, LogSink};
use crate::nodes::Node;

/// Serializes a node and its inner subtree to a persisted element
pub fn serialize_node_tree(node: &dyn Node, logger: &dyn LogSink) -> Element {
    let converter = NodeConverter;
    let serialize_child: SerializeNodeHandler<'_> =
        &|child, logger| serialize_node_tree(child, logger);
    converter.create_element_from_node(node, logger, serialize_child)
}

/// Rebuilds a node tree from a persisted element
///
/// Returns `None` when the element is not ours or its type identifier is
/// unknown; either way the caller continues with sibling elements.
pub fn parse_node_tree(element: &Element, logger: &dyn LogSink) -> Option<Box<dyn Node>> {
    let converter = NodeConverter;
    if !converter.can_handle_element(element) {
        return None;
    }

    let create_child: CreateNodeHandler<'_> = &|child, logger| parse_node_tree(child, logger);
    let mut node = converter.create_node_from_element(element, None, &[], logger, create_child)?;

    node.base_mut()
        .set_name(element.attribute(XML_NAME_ATTRIBUTE).unwrap_or_default());
    node.base_mut()
        .set_comment(element.attribute(XML_COMMENT_ATTRIBUTE).unwrap_or_default());

    if let Some(wrapper) = node.as_wrapper_mut() {
        if let Some(child_element) = element.children().first() {
            if let Some(inner) = parse_node_tree(child_element, logger) {
                if let Err(rejected) = wrapper.replace_inner(inner) {
                    logger.log(
                        LogLevel::Warning,
                        &format!(
                            "Dropping illegal inner node of kind {:?}",
                            rejected.kind()
                        ),
                    );
                }
            }
        }
    }

    Some(node)
}

/// Serializes a node tree straight to an XML string
pub fn save_node(node: &dyn Node, logger: &dyn LogSink) -> Result<String, ProjectError> {
    serialize_node_tree(node, logger).to_xml()
}

/// Parses an XML string into a node tree
pub fn load_node(xml: &str, logger: &dyn LogSink) -> Result<Option<Box<dyn Node>>, ProjectError> {
    let element = Element::from_xml(xml)?;
    Ok(parse_node_tree(&element, logger))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::logging::CollectingLogger;
    use crate::nodes::{FQWordNode, NodeKind, TSharedPtrNode, UnrealKind, WrapperNode};

    #[test]
    fn test_save_and_load_a_wrapper_tree() {
        let mut node = TSharedPtrNode::new();
        node.base_mut().set_name("target");
        node.replace_inner(Box::new(FQWordNode::new())).unwrap();

        let logger = CollectingLogger::new();
        let xml = save_node(&node, &logger).unwrap();
        let loaded = load_node(&xml, &logger).unwrap().unwrap();

        assert_eq!(loaded.kind(), NodeKind::Unreal(UnrealKind::SharedPtr));
        assert_eq!(loaded.name(), "target");
        let inner = loaded.as_wrapper().unwrap().inner_node().unwrap();
        assert_eq!(inner.kind(), NodeKind::Unreal(UnrealKind::QWord));
        assert!(logger.entries().is_empty());
    }

    #[test]
    fn test_foreign_element_is_ignored_silently() {
        let logger = CollectingLogger::new();
        let mut element = Element::node();
        element.set_attribute("type", "SomeOtherPlugin.Thing");

        assert!(parse_node_tree(&element, &logger).is_none());
        assert!(logger.entries().is_empty());
    }
}
