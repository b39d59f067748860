//! Dynamic wide-string view node

use super::{Node, NodeBase, NodeKind, UnrealKind};
use crate::core::types::POINTER_SIZE;
use crate::memory::ProcessMemory;
use crate::render::{ColorRole, Icon, Size, ViewInfo, HIDDEN_HEIGHT, TEXT_PADDING};

/// Interprets its slot as an `FString`: a pointer to UTF-16 data followed
/// by the current length and the allocated capacity
///
/// The preview is read live from the inspected process and degrades to an
/// empty string when the data pointer is unreadable.
#[derive(Debug, Default)]
pub struct FStringNode {
    base: NodeBase,
}

impl FStringNode {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_preview(
        process: &dyn ProcessMemory,
        data: crate::core::types::Address,
        length: usize,
    ) -> String {
        let mut buffer = vec![0u8; length * 2];
        if process.read_memory(data, &mut buffer).is_err() {
            return String::new();
        }

        let mut units = Vec::with_capacity(length);
        for pair in buffer.chunks_exact(2) {
            let unit = u16::from_le_bytes([pair[0], pair[1]]);
            if unit == 0 {
                break;
            }
            units.push(unit);
        }
        String::from_utf16_lossy(&units)
    }
}

impl Node for FStringNode {
    fn kind(&self) -> NodeKind {
        NodeKind::Unreal(UnrealKind::FString)
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
        let mut x = view.icon(x + TEXT_PADDING, y, Icon::Text);
        x = view.offset_text(x, y, self.base.offset());
        x = view.text(x, y, ColorRole::Type, "FString") + view.font.width;
        if !self.base.is_wrapped() {
            x = view.text(x, y, ColorRole::Name, self.base.name()) + view.font.width;
        }

        let offset = self.base.offset();
        let data = view.read_ptr(offset);
        let length = view.read_i32(offset + POINTER_SIZE);

        let preview = if data.is_null() || length <= 0 {
            String::new()
        } else {
            let capped = (length as usize).min(view.settings.max_string_preview);
            Self::read_preview(view.process, data, capped)
        };
        x = view.text(x, y, ColorRole::Value, &format!("= \"{preview}\"")) + view.font.width;
        x = view.comment_text(x, y, self.base.comment());

        Size::new(x - origin_x, view.font.height)
    }

    fn drawn_height(&self, view: &ViewInfo<'_>) -> i32 {
        if self.base.is_hidden() && !self.base.is_wrapped() {
            HIDDEN_HEIGHT
        } else {
            view.font.height
        }
    }
}
