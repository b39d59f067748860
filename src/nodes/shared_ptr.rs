//! Shared-pointer wrapper node

use super::{Node, NodeBase, NodeKind, UnrealKind, WrapperNode};
use crate::core::types::POINTER_SIZE;
use crate::memory::MemoryBuffer;
use crate::render::{ColorRole, Icon, Size, ViewInfo, HIDDEN_HEIGHT, TEXT_PADDING};

/// Interprets its slot as a `TSharedPtr`: a pointer to the wrapped value
/// plus the reference-controller pointer
///
/// The wrapped value is snapshotted into a private buffer every render
/// while expanded, and the inner node renders against a derived view based
/// at the pointee. Copying before recursing is what keeps self-referential
/// pointer chains terminating: each level works on its own bounded copy,
/// never on an alias of live memory.
#[derive(Default)]
pub struct TSharedPtrNode {
    base: NodeBase,
    inner: Option<Box<dyn Node>>,
    memory: MemoryBuffer,
}

impl std::fmt::Debug for TSharedPtrNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TSharedPtrNode")
            .field("base", &self.base)
            .field("inner", &self.inner.as_ref().map(|node| node.kind()))
            .field("memory", &self.memory)
            .finish()
    }
}

impl TSharedPtrNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// The private snapshot of the pointee, for inspection in tests
    pub fn snapshot(&self) -> &MemoryBuffer {
        &self.memory
    }
}

impl Node for TSharedPtrNode {
    fn kind(&self) -> NodeKind {
        NodeKind::Unreal(UnrealKind::SharedPtr)
    }

    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn memory_size(&self) -> usize {
        // Object pointer plus the reference-controller slot; the inner
        // node's footprint only sizes the snapshot, never this slot.
        POINTER_SIZE * 2
    }

    fn draw(&mut self, view: &mut ViewInfo<'_>, x: i32, y: i32) -> Size {
        if self.base.is_hidden() && !self.base.is_wrapped() {
            return Size::new(0, HIDDEN_HEIGHT);
        }

        let origin_x = x;
        let mut x = if self.inner.is_some() {
            view.icon(x, y, Icon::OpenClose)
        } else {
            x + TEXT_PADDING
        };
        x = view.icon(x, y, Icon::Pointer);

        let inner_x = x;
        x = view.offset_text(x, y, self.base.offset());
        x = view.text(x, y, ColorRole::Type, "TSharedPtr") + view.font.width;
        if !self.base.is_wrapped() {
            x = view.text(x, y, ColorRole::Name, self.base.name()) + view.font.width;
        }
        if self.inner.is_none() {
            x = view.text(x, y, ColorRole::Value, "<void>") + view.font.width;
        }
        x = view.icon(x, y, Icon::Change) + view.font.width;

        let ptr = view.read_ptr(self.base.offset());

        x = view.text(x, y, ColorRole::Offset, "->") + view.font.width;
        x = view.text(x, y, ColorRole::Value, &ptr.to_string()) + view.font.width;
        x = view.comment_text(x, y, self.base.comment());

        let mut size = Size::new(x - origin_x, view.font.height);

        if self.base.is_open(view.level) {
            if let Some(inner) = self.inner.as_deref_mut() {
                self.memory
                    .update_from(view.process, ptr, inner.memory_size());

                let mut derived = ViewInfo {
                    surface: &mut *view.surface,
                    process: view.process,
                    memory: self.memory.bytes(),
                    address: ptr,
                    level: view.level,
                    font: view.font,
                    settings: view.settings,
                };
                let inner_size = inner.draw(&mut derived, inner_x, y + view.font.height);

                size.width = size.width.max(inner_size.width + inner_x - origin_x);
                size.height += inner_size.height;
            }
        }

        size
    }

    fn drawn_height(&self, view: &ViewInfo<'_>) -> i32 {
        if self.base.is_hidden() && !self.base.is_wrapped() {
            return HIDDEN_HEIGHT;
        }

        let mut height = view.font.height;
        if self.base.is_open(view.level) {
            if let Some(inner) = self.inner.as_deref() {
                height += inner.drawn_height(view);
            }
        }
        height
    }

    fn as_wrapper(&self) -> Option<&dyn WrapperNode> {
        Some(self)
    }

    fn as_wrapper_mut(&mut self) -> Option<&mut dyn WrapperNode> {
        Some(self)
    }
}

impl WrapperNode for TSharedPtrNode {
    fn inner_node(&self) -> Option<&dyn Node> {
        self.inner.as_deref()
    }

    fn replace_inner(&mut self, mut node: Box<dyn Node>) -> Result<(), Box<dyn Node>> {
        if !self.can_change_inner_node_to(node.as_ref()) {
            return Err(node);
        }
        node.base_mut().set_wrapped(true);
        node.base_mut().set_offset(0);
        self.inner = Some(node);
        Ok(())
    }
}
