//! List rendering.
//!
//! The renderer turns the visible subsequence into the full text block that
//! replaces the previous one on screen — there is no incremental redraw.
//! Layout is Unicode-aware; styling goes through `colored`, which drops the
//! escape codes when output is not a terminal.

use crate::index::{ItemIndex, VisibleItem};
use chrono::{DateTime, Utc};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const TIME_WIDTH: usize = 14;
pub const CHECK_MARKER: &str = "✓";

/// Renders the visible items into a list block.
///
/// Every line is tagged with the item's index in the *full* sequence — the
/// number the check/delete/rename commands accept — never its rank in the
/// filtered view. The clock is passed in, so output is a pure function of
/// its arguments.
pub fn render_list(items: &[VisibleItem], now: DateTime<Utc>, width: usize) -> String {
    if items.is_empty() {
        return "No items found.\n".to_string();
    }

    let mut out = String::new();

    for vi in items {
        let idx_str = format!("{}. ", ItemIndex::from_position(vi.index));
        let marker = if vi.item.checked {
            format!("{} ", CHECK_MARKER)
        } else {
            "  ".to_string()
        };

        let left_pad = "  ";
        let fixed_width = left_pad.width() + idx_str.width() + marker.width() + TIME_WIDTH;
        let available = width.saturating_sub(fixed_width);

        let name_display = truncate_to_width(&vi.item.name, available);
        let padding = " ".repeat(available.saturating_sub(name_display.width()));
        let time_ago = format_time_ago(vi.item.added_at, now);

        let marker = if vi.item.checked {
            marker.green().to_string()
        } else {
            marker
        };
        let name_display = if vi.item.checked {
            name_display.strikethrough().dimmed().to_string()
        } else {
            name_display
        };

        out.push_str(&format!(
            "{}{}{}{}{}{}\n",
            left_pad,
            idx_str,
            marker,
            name_display,
            padding,
            time_ago.dimmed()
        ));
    }

    // The per-item actions, addressed by the printed index
    out.push('\n');
    out.push_str(&format!("{}\n", "  check <n> | delete <n>".dimmed()));

    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
