//! Type registry and converter between nodes and project elements

use super::element::{
    Element, XML_COMMENT_ATTRIBUTE, XML_NAME_ATTRIBUTE, XML_TYPE_ATTRIBUTE,
};
use super::{CreateNodeHandler, CustomNodeSerializer, SerializeNodeHandler};
use crate::core::logging::{LogLevel, LogSink};
use crate::nodes::{Node, NodeKind, UnrealKind};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Namespace every type identifier this extension persists lives under
pub const XML_TYPE_PREFIX: &str = "UnrealEngineClasses.";

lazy_static! {
    /// Type identifier lookup, the inverse of [`UnrealKind::descriptor`]
    ///
    /// Built once from the kind descriptors; the asserts keep the mapping a
    /// bijection so a duplicated or unprefixed identifier fails at startup
    /// instead of corrupting round trips.
    static ref TYPE_REGISTRY: HashMap<&'static str, UnrealKind> = {
        let mut map = HashMap::with_capacity(UnrealKind::ALL.len());
        for kind in UnrealKind::ALL {
            let descriptor = kind.descriptor();
            assert!(
                descriptor.type_name.starts_with(XML_TYPE_PREFIX),
                "type identifier {} is outside the reserved namespace",
                descriptor.type_name
            );
            let previous = map.insert(descriptor.type_name, kind);
            assert!(
                previous.is_none(),
                "duplicate type identifier {}",
                descriptor.type_name
            );
        }
        map
    };
}

/// Resolves a persisted type identifier to a kind
pub fn lookup_type(type_name: &str) -> Option<UnrealKind> {
    TYPE_REGISTRY.get(type_name).copied()
}

/// Serializer hooked into the host's project loader for the Unreal kinds
///
/// Stateless per call; all knowledge lives in the kind descriptors.
#[derive(Debug, Default, Clone, Copy)]
pub struct NodeConverter;

impl CustomNodeSerializer for NodeConverter {
    fn can_handle_node(&self, node: &dyn Node) -> bool {
        matches!(node.kind(), NodeKind::Unreal(_))
    }

    fn can_handle_element(&self, element: &Element) -> bool {
        element
            .attribute(XML_TYPE_ATTRIBUTE)
            .is_some_and(|value| value.starts_with(XML_TYPE_PREFIX))
    }

    fn create_node_from_element(
        &self,
        element: &Element,
        _parent: Option<&dyn Node>,
        _classes: &[&dyn Node],
        logger: &dyn LogSink,
        _create_child: CreateNodeHandler<'_>,
    ) -> Option<Box<dyn Node>> {
        let type_name = element.attribute(XML_TYPE_ATTRIBUTE).unwrap_or_default();
        let Some(kind) = lookup_type(type_name) else {
            logger.log(
                LogLevel::Error,
                &format!("Skipping node with unknown type: {type_name}"),
            );
            logger.log(LogLevel::Warning, &element.to_string());
            return None;
        };

        // Name, comment and children are populated by the host afterwards;
        // this call only produces the right empty shell.
        Some(kind.create_node())
    }

    fn create_element_from_node(
        &self,
        node: &dyn Node,
        logger: &dyn LogSink,
        serialize_child: SerializeNodeHandler<'_>,
    ) -> Element {
        let mut element = Element::node();
        element.set_attribute(XML_NAME_ATTRIBUTE, node.name());
        element.set_attribute(XML_COMMENT_ATTRIBUTE, node.comment());

        let kind = match node.kind() {
            NodeKind::Unreal(kind) => kind,
            foreign => unreachable!("converter asked to serialize foreign node kind {foreign:?}"),
        };
        element.set_attribute(XML_TYPE_ATTRIBUTE, kind.descriptor().type_name);

        if let Some(wrapper) = node.as_wrapper() {
            if let Some(inner) = wrapper.inner_node() {
                element.push_child(serialize_child(inner, logger));
            }
        }

        element
    }
}
