//! Length-prefixed dynamic array wrapper node

use super::{Node, NodeBase, NodeKind, UnrealKind, WrapperNode};
use crate::core::types::POINTER_SIZE;
use crate::memory::MemoryBuffer;
use crate::render::{ColorRole, Icon, Size, ViewInfo, HIDDEN_HEIGHT, TEXT_PADDING};

/// Interprets its slot as a `TArray`: a data pointer followed by the
/// current length and the allocated capacity
///
/// The inner node describes one element. While expanded the visible range
/// of the data block is snapshotted in one read and the inner node is
/// rendered once per element against per-element derived views.
#[derive(Default)]
pub struct TArrayNode {
    base: NodeBase,
    inner: Option<Box<dyn Node>>,
    memory: MemoryBuffer,
}

impl std::fmt::Debug for TArrayNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TArrayNode")
            .field("base", &self.base)
            .field("inner", &self.inner.as_ref().map(|node| node.kind()))
            .field("memory", &self.memory)
            .finish()
    }
}

impl TArrayNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// The private snapshot of the visible elements, for inspection in tests
    pub fn snapshot(&self) -> &MemoryBuffer {
        &self.memory
    }
}

impl Node for TArrayNode {
    fn kind(&self) -> NodeKind {
        NodeKind::Unreal(UnrealKind::Array)
    }

    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn memory_size(&self) -> usize {
        // Data pointer, then int32 length and int32 capacity
        POINTER_SIZE + 8
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
        x = view.icon(x, y, Icon::Array);

        let inner_x = x;
        x = view.offset_text(x, y, self.base.offset());
        x = view.text(x, y, ColorRole::Type, "TArray") + view.font.width;
        if !self.base.is_wrapped() {
            x = view.text(x, y, ColorRole::Name, self.base.name()) + view.font.width;
        }
        if self.inner.is_none() {
            x = view.text(x, y, ColorRole::Value, "<void>") + view.font.width;
        }
        x = view.icon(x, y, Icon::Change) + view.font.width;

        let offset = self.base.offset();
        let data = view.read_ptr(offset);
        let length = view.read_i32(offset + POINTER_SIZE).max(0) as usize;
        let capacity = view.read_i32(offset + POINTER_SIZE + 4).max(0) as usize;

        x = view.text(
            x,
            y,
            ColorRole::Value,
            &format!("({length} / {capacity})"),
        ) + view.font.width;
        x = view.text(x, y, ColorRole::Offset, "->") + view.font.width;
        x = view.text(x, y, ColorRole::Value, &data.to_string()) + view.font.width;
        x = view.comment_text(x, y, self.base.comment());

        let mut size = Size::new(x - origin_x, view.font.height);

        if self.base.is_open(view.level) && !data.is_null() {
            if let Some(inner) = self.inner.as_deref_mut() {
                let element_size = inner.memory_size();
                let visible = length.min(view.settings.max_array_elements);
                if element_size > 0 && visible > 0 {
                    self.memory
                        .update_from(view.process, data, element_size * visible);

                    let mut element_y = y + view.font.height;
                    for index in 0..visible {
                        let start = index * element_size;
                        let slice = &self.memory.bytes()[start..start + element_size];
                        let mut derived = ViewInfo {
                            surface: &mut *view.surface,
                            process: view.process,
                            memory: slice,
                            address: data.offset(start as isize),
                            level: view.level,
                            font: view.font,
                            settings: view.settings,
                        };
                        let element_size_drawn = inner.draw(&mut derived, inner_x, element_y);
                        element_y += element_size_drawn.height;
                        size.width = size
                            .width
                            .max(element_size_drawn.width + inner_x - origin_x);
                        size.height += element_size_drawn.height;
                    }
                }
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
                let data = view.read_ptr(self.base.offset());
                let length = view.read_i32(self.base.offset() + POINTER_SIZE).max(0) as usize;
                if !data.is_null() {
                    let visible = length.min(view.settings.max_array_elements);
                    height += inner.drawn_height(view) * visible as i32;
                }
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

impl WrapperNode for TArrayNode {
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
