//! Presence indicator
//!
//! Renders a presence dot for one of the four presence values

use crate::model::PresenceStatus;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Widget;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum IndicatorSize {
    Small,
    #[default]
    Medium,
    /// Dot followed by the status name.
    Large,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct StatusIndicator {
    status: PresenceStatus,
    size: IndicatorSize,
}

impl StatusIndicator {
    pub fn new(status: PresenceStatus) -> Self {
        Self {
            status,
            size: IndicatorSize::default(),
        }
    }

    pub fn size(mut self, size: IndicatorSize) -> Self {
        self.size = size;
        self
    }

    pub fn symbol(&self) -> &'static str {
        match (self.size, self.status) {
            (IndicatorSize::Small, PresenceStatus::Online) => "•",
            (IndicatorSize::Small, PresenceStatus::Offline) => "∘",
            (_, PresenceStatus::Online) => "●",
            (_, PresenceStatus::Away) => "◐",
            (_, PresenceStatus::Busy) => "◉",
            (_, PresenceStatus::Offline) => "○",
        }
    }

    pub fn color(&self) -> Color {
        match self.status {
            PresenceStatus::Online => Color::Green,
            PresenceStatus::Away => Color::Yellow,
            PresenceStatus::Busy => Color::Red,
            PresenceStatus::Offline => Color::DarkGray,
        }
    }

    pub fn style(&self) -> Style {
        let style = Style::default().fg(self.color());
        // Online pulses.
        if self.status == PresenceStatus::Online {
            style.add_modifier(Modifier::SLOW_BLINK)
        } else {
            style
        }
    }

    pub fn span(&self) -> Span<'static> {
        let text = match self.size {
            IndicatorSize::Large => format!("{} {}", self.symbol(), self.status),
            _ => self.symbol().to_string(),
        };
        Span::styled(text, self.style())
    }
}

impl Widget for StatusIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_span(area.x, area.y, &self.span(), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use strum::IntoEnumIterator;

    fn rendered(indicator: StatusIndicator) -> (String, Style) {
        let mut terminal = Terminal::new(TestBackend::new(12, 1)).unwrap();
        terminal
            .draw(|f| f.render_widget(indicator, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let cell = &buffer[(0, 0)];
        (cell.symbol().to_string(), cell.style())
    }

    #[test]
    fn four_presence_values_render_four_distinct_outputs() {
        for size in [
            IndicatorSize::Small,
            IndicatorSize::Medium,
            IndicatorSize::Large,
        ] {
            let outputs: Vec<(String, Style)> = PresenceStatus::iter()
                .map(|status| rendered(StatusIndicator::new(status).size(size)))
                .collect();
            for (i, a) in outputs.iter().enumerate() {
                assert!(
                    outputs[i + 1..].iter().all(|b| b != a),
                    "duplicate output {:?} at size {:?}",
                    a,
                    size
                );
            }
        }
    }

    #[test]
    fn online_differs_from_offline_even_without_color() {
        let online = StatusIndicator::new(PresenceStatus::Online);
        let offline = StatusIndicator::new(PresenceStatus::Offline);
        assert_ne!(online.symbol(), offline.symbol());
    }

    #[test]
    fn large_indicator_includes_label() {
        let span = StatusIndicator::new(PresenceStatus::Busy)
            .size(IndicatorSize::Large)
            .span();
        assert_eq!(span.content, "◉ busy");
    }

    #[test]
    fn only_online_pulses() {
        for status in PresenceStatus::iter() {
            let blinking = StatusIndicator::new(status)
                .style()
                .add_modifier
                .contains(Modifier::SLOW_BLINK);
            assert_eq!(blinking, status == PresenceStatus::Online);
        }
    }
}
