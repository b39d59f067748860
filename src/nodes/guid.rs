//! 128-bit unique identifier node

use super::{Node, NodeBase, NodeKind, UnrealKind};
use crate::render::{ColorRole, Icon, Size, ViewInfo, HIDDEN_HEIGHT, TEXT_PADDING};

/// Interprets sixteen bytes as an `FGuid` (four little-endian u32 blocks)
#[derive(Debug, Default)]
pub struct FGuidNode {
    base: NodeBase,
}

impl FGuidNode {
    pub fn new() -> Self {
        Self::default()
    }

    fn format_guid(view: &ViewInfo<'_>, offset: usize) -> String {
        let a = view.read_u32(offset);
        let b = view.read_u32(offset + 4);
        let c = view.read_u32(offset + 8);
        let d = view.read_u32(offset + 12);
        format!("{a:08X}-{b:08X}-{c:08X}-{d:08X}")
    }
}

impl Node for FGuidNode {
    fn kind(&self) -> NodeKind {
        NodeKind::Unreal(UnrealKind::Guid)
    }

    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn memory_size(&self) -> usize {
        16
    }

    fn draw(&mut self, view: &mut ViewInfo<'_>, x: i32, y: i32) -> Size {
        if self.base.is_hidden() && !self.base.is_wrapped() {
            return Size::new(0, HIDDEN_HEIGHT);
        }

        let origin_x = x;
        let mut x = view.icon(x + TEXT_PADDING, y, Icon::Unsigned);
        x = view.offset_text(x, y, self.base.offset());
        x = view.text(x, y, ColorRole::Type, "FGuid") + view.font.width;
        if !self.base.is_wrapped() {
            x = view.text(x, y, ColorRole::Name, self.base.name()) + view.font.width;
        }

        let value = Self::format_guid(view, self.base.offset());
        x = view.text(x, y, ColorRole::Value, &format!("= {value}")) + view.font.width;
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
