//! Output surfaces nodes draw onto

use super::Icon;

/// Drawing capability supplied by the host toolkit
///
/// Coordinates are pixels; colors are packed 0xRRGGBB values from the
/// active [`crate::config::ColorScheme`].
pub trait DrawSurface {
    fn draw_text(&mut self, x: i32, y: i32, color: u32, text: &str);
    fn draw_icon(&mut self, x: i32, y: i32, icon: Icon);
}

/// Discards all drawing; used for pure measurement passes
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl DrawSurface for NullSurface {
    fn draw_text(&mut self, _x: i32, _y: i32, _color: u32, _text: &str) {}
    fn draw_icon(&mut self, _x: i32, _y: i32, _icon: Icon) {}
}

/// A single piece of text recorded by [`TextSurface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub x: i32,
    pub y: i32,
    pub color: u32,
    pub text: String,
}

/// Records drawn text; used by headless hosts and tests
#[derive(Debug, Default)]
pub struct TextSurface {
    spans: Vec<TextSpan>,
    icons: Vec<(i32, i32, Icon)>,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }

    pub fn icons(&self) -> &[(i32, i32, Icon)] {
        &self.icons
    }

    /// Concatenates all text drawn at row `y`, left to right
    pub fn line(&self, y: i32) -> String {
        let mut row: Vec<&TextSpan> = self.spans.iter().filter(|s| s.y == y).collect();
        row.sort_by_key(|s| s.x);
        row.iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// True when any recorded span contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.spans.iter().any(|s| s.text.contains(needle))
    }

    pub fn clear(&mut self) {
        self.spans.clear();
        self.icons.clear();
    }
}

impl DrawSurface for TextSurface {
    fn draw_text(&mut self, x: i32, y: i32, color: u32, text: &str) {
        self.spans.push(TextSpan {
            x,
            y,
            color,
            text: text.to_string(),
        });
    }

    fn draw_icon(&mut self, x: i32, y: i32, icon: Icon) {
        self.icons.push((x, y, icon));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_surface_records_spans() {
        let mut surface = TextSurface::new();
        surface.draw_text(16, 0, 0x000000, "TSharedPtr");
        surface.draw_text(0, 0, 0xFF0000, "0000");
        surface.draw_icon(0, 0, Icon::Pointer);

        assert_eq!(surface.spans().len(), 2);
        assert_eq!(surface.icons().len(), 1);
        assert_eq!(surface.line(0), "0000 TSharedPtr");
        assert!(surface.contains("Shared"));
    }

    #[test]
    fn test_null_surface_ignores_everything() {
        let mut surface = NullSurface;
        surface.draw_text(0, 0, 0, "ignored");
        surface.draw_icon(0, 0, Icon::Change);
    }
}
