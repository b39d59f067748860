//! Project-file serialization for the contributed node kinds
//!
//! This module provides:
//! - The structured [`Element`] form exchanged with the host serializer
//! - The [`CustomNodeSerializer`] protocol the host probes per node/element
//! - The [`NodeConverter`] implementation backed by the kind registry
//! - Tree-level helpers replaying the host's load/save recursion

mod converter;
mod element;
mod project;

pub use converter::{lookup_type, NodeConverter, XML_TYPE_PREFIX};
pub use element::{
    Element, ProjectError, XML_COMMENT_ATTRIBUTE, XML_NAME_ATTRIBUTE, XML_NODE_ELEMENT,
    XML_TYPE_ATTRIBUTE,
};
pub use project::{load_node, parse_node_tree, save_node, serialize_node_tree};

use crate::core::logging::LogSink;
use crate::nodes::Node;

/// Recurses into a child element with the host's default rules
pub type CreateNodeHandler<'a> = &'a dyn Fn(&Element, &dyn LogSink) -> Option<Box<dyn Node>>;

/// Serializes an arbitrary node with the host's default rules
pub type SerializeNodeHandler<'a> = &'a dyn Fn(&dyn Node, &dyn LogSink) -> Element;

/// Hook the host serializer probes for every foreign node and element
///
/// `can_handle_element` must stay a cheap, side-effect-free check: the host
/// may probe many converters per element. Failure to resolve a type inside
/// `create_node_from_element` is non-fatal and localized to that element;
/// the host skips it and continues with its siblings.
pub trait CustomNodeSerializer {
    /// True iff this converter owns the node's runtime kind
    fn can_handle_node(&self, node: &dyn Node) -> bool;

    /// True iff the element's type identifier belongs to this converter's
    /// reserved namespace
    fn can_handle_element(&self, element: &Element) -> bool;

    /// Instantiates the empty node matching the element's type identifier,
    /// or `None` (with diagnostics) when the identifier is unknown
    ///
    /// `classes` carries the class definitions the host has already loaded;
    /// converters for class-reference kinds resolve against it, the Unreal
    /// kinds ignore it. Attribute population and child construction happen
    /// on the host side after this returns.
    fn create_node_from_element(
        &self,
        element: &Element,
        parent: Option<&dyn Node>,
        classes: &[&dyn Node],
        logger: &dyn LogSink,
        create_child: CreateNodeHandler<'_>,
    ) -> Option<Box<dyn Node>>;

    /// Builds the persisted element for a node this converter owns
    fn create_element_from_node(
        &self,
        node: &dyn Node,
        logger: &dyn LogSink,
        serialize_child: SerializeNodeHandler<'_>,
    ) -> Element;
}
