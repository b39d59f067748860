//! Render-pass context shared between the host tree walker and nodes
//!
//! A [`ViewInfo`] bundles everything one node needs for a draw: the output
//! surface, the live read primitive, a snapshot of the memory region the
//! node family lives in, its base address and the display settings.
//! Wrapper nodes derive child views that redirect the snapshot and base
//! address at their private buffer.

mod surface;

pub use surface::{DrawSurface, NullSurface, TextSpan, TextSurface};

use crate::config::Settings;
use crate::core::types::Address;
use crate::memory::ProcessMemory;

/// Height of a hidden, unwrapped node
pub const HIDDEN_HEIGHT: i32 = 0;

/// Horizontal padding before a node without an open/close toggle
pub const TEXT_PADDING: i32 = 6;

/// Horizontal advance of a drawn icon
pub const ICON_WIDTH: i32 = 16;

/// Extent a draw occupied, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }
}

/// Metrics of the host's monospaced inspector font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    pub width: i32,
    pub height: i32,
}

impl Default for FontMetrics {
    fn default() -> Self {
        FontMetrics {
            width: 8,
            height: 16,
        }
    }
}

/// Semantic color slot resolved through the active [`Settings`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Type,
    Name,
    Value,
    Offset,
    Comment,
    AddressInfo,
}

/// Icons the host toolkit renders next to nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    OpenClose,
    Pointer,
    Array,
    Text,
    Unsigned,
    Change,
}

/// Context for one node's render pass
pub struct ViewInfo<'a> {
    pub surface: &'a mut dyn DrawSurface,
    pub process: &'a dyn ProcessMemory,
    /// Snapshot of the region the current node family lives in
    pub memory: &'a [u8],
    /// Target-process address of `memory[0]`
    pub address: Address,
    /// Nesting level keying each node's expanded flags
    pub level: usize,
    pub font: FontMetrics,
    pub settings: &'a Settings,
}

impl<'a> ViewInfo<'a> {
    /// Copies up to `N` bytes at `offset` out of the region snapshot
    ///
    /// Bytes past the snapshot end read as zero, so a short or unreadable
    /// region yields null pointers and zero values instead of an error.
    pub fn read_array<const N: usize>(&self, offset: usize) -> [u8; N] {
        let mut out = [0u8; N];
        if offset < self.memory.len() {
            let available = (self.memory.len() - offset).min(N);
            out[..available].copy_from_slice(&self.memory[offset..offset + available]);
        }
        out
    }

    /// Reads a pointer-sized value at `offset` in the region snapshot
    pub fn read_ptr(&self, offset: usize) -> Address {
        Address::new(u64::from_le_bytes(self.read_array::<8>(offset)) as usize)
    }

    pub fn read_u32(&self, offset: usize) -> u32 {
        u32::from_le_bytes(self.read_array::<4>(offset))
    }

    pub fn read_i32(&self, offset: usize) -> i32 {
        i32::from_le_bytes(self.read_array::<4>(offset))
    }

    pub fn read_u64(&self, offset: usize) -> u64 {
        u64::from_le_bytes(self.read_array::<8>(offset))
    }

    pub fn read_i64(&self, offset: usize) -> i64 {
        i64::from_le_bytes(self.read_array::<8>(offset))
    }

    fn color(&self, role: ColorRole) -> u32 {
        let colors = &self.settings.colors;
        match role {
            ColorRole::Type => colors.type_color,
            ColorRole::Name => colors.name_color,
            ColorRole::Value => colors.value_color,
            ColorRole::Offset => colors.offset_color,
            ColorRole::Comment => colors.comment_color,
            ColorRole::AddressInfo => colors.address_color,
        }
    }

    /// Draws `text` and returns the advanced x coordinate
    pub fn text(&mut self, x: i32, y: i32, role: ColorRole, text: &str) -> i32 {
        let color = self.color(role);
        self.surface.draw_text(x, y, color, text);
        x + text.chars().count() as i32 * self.font.width
    }

    /// Draws `icon` and returns the advanced x coordinate
    pub fn icon(&mut self, x: i32, y: i32, icon: Icon) -> i32 {
        self.surface.draw_icon(x, y, icon);
        x + ICON_WIDTH
    }

    /// Draws the node's offset within its parent, `%04X` as the host does
    pub fn offset_text(&mut self, x: i32, y: i32, offset: usize) -> i32 {
        let text = format!("{offset:04X}");
        self.text(x, y, ColorRole::Offset, &text) + self.font.width
    }

    /// Draws a trailing comment when one is set
    pub fn comment_text(&mut self, x: i32, y: i32, comment: &str) -> i32 {
        if comment.is_empty() {
            return x;
        }
        let text = format!("// {comment}");
        self.text(x, y, ColorRole::Comment, &text) + self.font.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MappedMemory;

    fn fixture<'a>(
        surface: &'a mut TextSurface,
        process: &'a MappedMemory,
        memory: &'a [u8],
        settings: &'a Settings,
    ) -> ViewInfo<'a> {
        ViewInfo {
            surface,
            process,
            memory,
            address: Address::new(0x1000),
            level: 0,
            font: FontMetrics::default(),
            settings,
        }
    }

    #[test]
    fn test_read_helpers_decode_little_endian() {
        let mut surface = TextSurface::new();
        let process = MappedMemory::new();
        let memory = [0x78, 0x56, 0x34, 0x12, 0, 0, 0, 0, 0xFF];
        let settings = Settings::default();
        let view = fixture(&mut surface, &process, &memory, &settings);

        assert_eq!(view.read_u32(0), 0x12345678);
        assert_eq!(view.read_u64(0), 0x12345678);
        assert_eq!(view.read_ptr(0), Address::new(0x12345678));
    }

    #[test]
    fn test_out_of_range_reads_are_zero() {
        let mut surface = TextSurface::new();
        let process = MappedMemory::new();
        let memory = [0xFFu8; 4];
        let settings = Settings::default();
        let view = fixture(&mut surface, &process, &memory, &settings);

        // Fully outside
        assert_eq!(view.read_u32(8), 0);
        // Straddling the end: missing bytes read as zero
        assert_eq!(view.read_u64(0), 0x0000_0000_FFFF_FFFF);
        assert!(view.read_ptr(100).is_null());
    }

    #[test]
    fn test_text_advances_by_char_count() {
        let mut surface = TextSurface::new();
        let process = MappedMemory::new();
        let settings = Settings::default();
        let mut view = fixture(&mut surface, &process, &[], &settings);

        let x = view.text(0, 0, ColorRole::Type, "FGuid");
        assert_eq!(x, 5 * 8);

        let x = view.comment_text(x, 0, "");
        assert_eq!(x, 5 * 8);
    }

    #[test]
    fn test_offset_text_uses_offset_color() {
        let mut surface = TextSurface::new();
        let process = MappedMemory::new();
        let settings = Settings::default();
        let mut view = fixture(&mut surface, &process, &[], &settings);
        view.offset_text(0, 0, 0x10);

        assert_eq!(surface.spans()[0].text, "0010");
        assert_eq!(surface.spans()[0].color, Settings::default().colors.offset_color);
    }
}
