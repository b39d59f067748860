//! Fixed-width date/time node

use super::{Node, NodeBase, NodeKind, UnrealKind};
use crate::render::{ColorRole, Icon, Size, ViewInfo, HIDDEN_HEIGHT, TEXT_PADDING};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Ticks per second of an `FDateTime` (one tick is 100 ns)
const TICKS_PER_SECOND: i64 = 10_000_000;

/// Interprets eight bytes as an `FDateTime` tick count
///
/// Ticks count 100 ns intervals since 0001-01-01 00:00:00.
#[derive(Debug, Default)]
pub struct FDateTimeNode {
    base: NodeBase,
}

impl FDateTimeNode {
    pub fn new() -> Self {
        Self::default()
    }

    fn decode_ticks(ticks: i64) -> Option<NaiveDateTime> {
        if ticks < 0 {
            return None;
        }
        let epoch = NaiveDate::from_ymd_opt(1, 1, 1)?.and_hms_opt(0, 0, 0)?;
        let seconds = Duration::try_seconds(ticks / TICKS_PER_SECOND)?;
        let timestamp = epoch.checked_add_signed(seconds)?;
        // FDateTime covers years 1 through 9999; anything else is garbage bytes
        (timestamp.year() <= 9999).then_some(timestamp)
    }

    fn format_ticks(ticks: i64) -> String {
        match Self::decode_ticks(ticks) {
            Some(timestamp) => timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => format!("{ticks} ticks"),
        }
    }
}

impl Node for FDateTimeNode {
    fn kind(&self) -> NodeKind {
        NodeKind::Unreal(UnrealKind::DateTime)
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
        x = view.text(x, y, ColorRole::Type, "FDateTime") + view.font.width;
        if !self.base.is_wrapped() {
            x = view.text(x, y, ColorRole::Name, self.base.name()) + view.font.width;
        }

        let ticks = view.read_i64(self.base.offset());
        let text = format!("= {}", Self::format_ticks(ticks));
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_ticks_is_year_one() {
        assert_eq!(FDateTimeNode::format_ticks(0), "0001-01-01 00:00:00");
    }

    #[test]
    fn test_known_timestamp() {
        // 2020-01-01 00:00:00 expressed in .NET/Unreal ticks
        let ticks = 637_134_336_000_000_000i64;
        assert_eq!(FDateTimeNode::format_ticks(ticks), "2020-01-01 00:00:00");
    }

    #[test]
    fn test_out_of_range_ticks_render_raw() {
        let text = FDateTimeNode::format_ticks(i64::MAX);
        assert!(text.ends_with("ticks"));
        assert_eq!(FDateTimeNode::format_ticks(-5), "-5 ticks");
    }
}
