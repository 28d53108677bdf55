//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::model::{Channel, MetricVariant, Priority};
use chrono::{DateTime, Local};
use ratatui::layout::Rect;
use ratatui::prelude::Color;

/// Get a ratatui color for a queue priority
pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Urgent => Color::Red,
        Priority::High => Color::Yellow,
        Priority::Medium => Color::Cyan,
        Priority::Low => Color::DarkGray,
    }
}

/// Border color of a metrics card
pub fn variant_color(variant: MetricVariant) -> Color {
    match variant {
        MetricVariant::Default => Color::Cyan,
        MetricVariant::Success => Color::Green,
        MetricVariant::Warning => Color::Yellow,
        MetricVariant::Danger => Color::Red,
    }
}

/// Short tag for a channel, fixed width so queue rows line up
pub fn channel_tag(channel: Channel) -> &'static str {
    match channel {
        Channel::WhatsApp => "WA",
        Channel::Messenger => "FB",
        Channel::Instagram => "IG",
        Channel::Email => "EM",
        Channel::Phone => "PH",
    }
}

/// Format a wait time: minutes below an hour, hours and minutes above.
pub fn format_wait_time(minutes: u32) -> String {
    if minutes < 60 {
        format!("{}m", minutes)
    } else {
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}

/// Wall-clock time of a message or last-seen timestamp
pub fn format_time(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%H:%M:%S").to_string()
}

/// Whether the terminal cell at (`column`, `row`) lies inside `area`.
pub fn hit(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Truncate `text` to at most `width` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let kept: String = text.chars().take(width - 1).collect();
    format!("{}…", kept)
}
