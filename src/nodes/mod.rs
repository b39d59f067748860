//! Node kinds contributed to the host's class tree
//!
//! Each kind interprets a fixed slice of its parent's memory as an Unreal
//! Engine value. The wrapper kinds (`TSharedPtr`, `TArray`) additionally
//! own an inner node and a private snapshot buffer so the inner node can
//! be rendered as if it lived at the pointed-to address.

mod array;
mod datetime;
mod fstring;
mod guid;
mod qword;
mod shared_ptr;

pub use array::TArrayNode;
pub use datetime::FDateTimeNode;
pub use fstring::FStringNode;
pub use guid::FGuidNode;
pub use qword::FQWordNode;
pub use shared_ptr::TSharedPtrNode;

use crate::render::{Size, ViewInfo};

/// Runtime classification reported by every node in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Host class-definition aggregate; its layout depends on the enclosing class
    Class,
    /// Host virtual method table entry
    VirtualMethod,
    /// Any other host built-in kind, opaque to this extension
    Builtin,
    /// A kind contributed by this extension
    Unreal(UnrealKind),
}

/// The closed set of node kinds this extension contributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnrealKind {
    DateTime,
    Guid,
    QWord,
    FString,
    Array,
    SharedPtr,
}

/// Whether the generic tree walker must run its containment cycle check
/// before recursing into a node of this kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePolicy {
    /// The node aliases live parent memory; recursing into itself would
    /// never terminate
    Checked,
    /// The node snapshots target memory before recursing, so a pointer
    /// back into an enclosing structure is legal and rendering still
    /// terminates level by level
    CopyBeforeRecurse,
}

/// Static per-kind facts consulted by the registry and the tree walker
#[derive(Debug)]
pub struct KindDescriptor {
    /// Stable identifier persisted in project files
    pub type_name: &'static str,
    /// Label shown in the host's type picker
    pub display_name: &'static str,
    /// True when instances own an inner node and persist it as a child element
    pub wrapper: bool,
    pub cycle_policy: CyclePolicy,
}

impl UnrealKind {
    pub const ALL: [UnrealKind; 6] = [
        UnrealKind::DateTime,
        UnrealKind::Guid,
        UnrealKind::QWord,
        UnrealKind::FString,
        UnrealKind::Array,
        UnrealKind::SharedPtr,
    ];

    /// The kind's static descriptor
    ///
    /// Exhaustive: adding a kind without describing it fails to compile,
    /// and the serializer derives both mapping directions from here.
    pub fn descriptor(self) -> &'static KindDescriptor {
        match self {
            UnrealKind::DateTime => &KindDescriptor {
                type_name: "UnrealEngineClasses.FDateTime",
                display_name: "FDateTime",
                wrapper: false,
                cycle_policy: CyclePolicy::Checked,
            },
            UnrealKind::Guid => &KindDescriptor {
                type_name: "UnrealEngineClasses.FGuid",
                display_name: "FGuid",
                wrapper: false,
                cycle_policy: CyclePolicy::Checked,
            },
            UnrealKind::QWord => &KindDescriptor {
                type_name: "UnrealEngineClasses.FQWord",
                display_name: "FQWord",
                wrapper: false,
                cycle_policy: CyclePolicy::Checked,
            },
            UnrealKind::FString => &KindDescriptor {
                type_name: "UnrealEngineClasses.FString",
                display_name: "FString",
                wrapper: false,
                cycle_policy: CyclePolicy::Checked,
            },
            UnrealKind::Array => &KindDescriptor {
                type_name: "UnrealEngineClasses.TArray",
                display_name: "TArray",
                wrapper: true,
                cycle_policy: CyclePolicy::CopyBeforeRecurse,
            },
            UnrealKind::SharedPtr => &KindDescriptor {
                type_name: "UnrealEngineClasses.TSharedPtr",
                display_name: "TSharedPtr",
                wrapper: true,
                cycle_policy: CyclePolicy::CopyBeforeRecurse,
            },
        }
    }

    /// Instantiates a fresh, empty node of this kind
    pub fn create_node(self) -> Box<dyn Node> {
        match self {
            UnrealKind::DateTime => Box::new(FDateTimeNode::new()),
            UnrealKind::Guid => Box::new(FGuidNode::new()),
            UnrealKind::QWord => Box::new(FQWordNode::new()),
            UnrealKind::FString => Box::new(FStringNode::new()),
            UnrealKind::Array => Box::new(TArrayNode::new()),
            UnrealKind::SharedPtr => Box::new(TSharedPtrNode::new()),
        }
    }
}

/// State every node carries regardless of kind
#[derive(Debug, Default)]
pub struct NodeBase {
    name: String,
    comment: String,
    offset: usize,
    hidden: bool,
    wrapped: bool,
    levels_open: Vec<bool>,
}

impl NodeBase {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    /// Offset of this node inside its parent's memory region
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// True when this node is the inner node of a wrapper
    pub fn is_wrapped(&self) -> bool {
        self.wrapped
    }

    pub fn set_wrapped(&mut self, wrapped: bool) {
        self.wrapped = wrapped;
    }

    /// Expanded flag for the given nesting level
    pub fn is_open(&self, level: usize) -> bool {
        self.levels_open.get(level).copied().unwrap_or(false)
    }

    pub fn set_open(&mut self, level: usize, open: bool) {
        if self.levels_open.len() <= level {
            self.levels_open.resize(level + 1, false);
        }
        self.levels_open[level] = open;
    }
}

/// Capabilities the host tree walker requires from every node
pub trait Node: std::fmt::Debug {
    fn kind(&self) -> NodeKind;

    fn base(&self) -> &NodeBase;

    fn base_mut(&mut self) -> &mut NodeBase;

    /// Bytes this node occupies inside its parent's memory region
    fn memory_size(&self) -> usize;

    /// Draws one render pass at `(x, y)` and returns the occupied extent
    fn draw(&mut self, view: &mut ViewInfo<'_>, x: i32, y: i32) -> Size;

    /// Height the next draw would occupy, without touching the surface
    fn drawn_height(&self, view: &ViewInfo<'_>) -> i32;

    fn as_wrapper(&self) -> Option<&dyn WrapperNode> {
        None
    }

    fn as_wrapper_mut(&mut self) -> Option<&mut dyn WrapperNode> {
        None
    }

    fn name(&self) -> &str {
        self.base().name()
    }

    fn comment(&self) -> &str {
        self.base().comment()
    }
}

/// A node owning at most one inner node it interprets through indirection
pub trait WrapperNode: Node {
    /// The wrapped inner node, if one has been assigned
    fn inner_node(&self) -> Option<&dyn Node>;

    /// Gate applied before [`WrapperNode::replace_inner`] mutates anything
    ///
    /// Class aggregates and virtual method tables need to know their
    /// position inside an enclosing class, which a raw pointer slot cannot
    /// provide; every other kind is accepted, including nested wrappers.
    fn can_change_inner_node_to(&self, candidate: &dyn Node) -> bool {
        !matches!(
            candidate.kind(),
            NodeKind::Class | NodeKind::VirtualMethod
        )
    }

    /// Installs `node` as the inner node, dropping the previous one
    ///
    /// A candidate rejected by the gate is handed back unchanged and the
    /// tree is left untouched.
    fn replace_inner(&mut self, node: Box<dyn Node>) -> Result<(), Box<dyn Node>>;
}
