//! 64-bit integer node

use super::{Node, NodeBase, NodeKind, UnrealKind};
use crate::render::{ColorRole, Icon, Size, ViewInfo, HIDDEN_HEIGHT, TEXT_PADDING};

/// Interprets eight bytes as a signed 64-bit integer
#[derive(Debug, Default)]
pub struct FQWordNode {
    base: NodeBase,
}

impl FQWordNode {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for FQWordNode {
    fn kind(&self) -> NodeKind {
        NodeKind::Unreal(UnrealKind::QWord)
    }

    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn memory_size(&self) -> usize {
        8
    }

    fn draw(&mut self, view: &mut ViewInfo<'_>, x: i32, y: i32) -> Size {
        if self.base.is_hidden() && !self.base.is_wrapped() {
            return Size::new(0, HIDDEN_HEIGHT);
        }

        let origin_x = x;
        let mut x = view.icon(x + TEXT_PADDING, y, Icon::Unsigned);
        x = view.offset_text(x, y, self.base.offset());
        x = view.text(x, y, ColorRole::Type, "FQWord") + view.font.width;
        if !self.base.is_wrapped() {
            x = view.text(x, y, ColorRole::Name, self.base.name()) + view.font.width;
        }

        let value = view.read_i64(self.base.offset());
        let text = format!("= {value} (0x{value:X})");
        x = view.text(x, y, ColorRole::Value, &text) + view.font.width;
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
