//! Metrics card component
//!
//! Renders a labeled value with an optional trend badge

use super::super::utils::variant_color;
use crate::model::{Metric, Trend, TrendDirection};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget, Wrap};

/// Text of a trend badge, e.g. `▲ 8.2%`.
pub fn trend_badge(trend: &Trend) -> String {
    let arrow = match trend.direction {
        TrendDirection::Up => "▲",
        TrendDirection::Down => "▼",
    };
    format!("{} {}%", arrow, trend.value)
}

fn trend_color(direction: TrendDirection) -> Color {
    match direction {
        TrendDirection::Up => Color::Green,
        TrendDirection::Down => Color::Red,
    }
}

pub struct MetricsCard<'a> {
    metric: &'a Metric,
}

impl<'a> MetricsCard<'a> {
    pub fn new(metric: &'a Metric) -> Self {
        Self { metric }
    }
}

impl Widget for MetricsCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let metric = self.metric;
        let border_color = variant_color(metric.variant);

        let mut block = Block::default()
            .title(Span::styled(
                metric.title.as_str(),
                Style::default().fg(Color::Gray),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .padding(Padding::horizontal(1));
        if let Some(icon) = metric.icon {
            block = block.title_top(Line::from(format!(" {} ", icon)).right_aligned());
        }

        let mut lines = vec![Line::from(Span::styled(
            metric.value.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))];

        if let Some(subtitle) = &metric.subtitle {
            lines.push(Line::from(Span::styled(
                subtitle.as_str(),
                Style::default().fg(Color::DarkGray),
            )));
        }

        if let Some(trend) = &metric.trend {
            lines.push(Line::from(vec![
                Span::styled(
                    trend_badge(trend),
                    Style::default()
                        .fg(trend_color(trend.direction))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" vs {}", trend.period),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MetricVariant;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn metric(trend: Option<Trend>) -> Metric {
        Metric {
            title: "Conversations today".to_string(),
            value: "142".to_string(),
            subtitle: Some("+12 since yesterday".to_string()),
            trend,
            icon: None,
            variant: MetricVariant::Success,
        }
    }

    fn render_text(metric: &Metric) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        terminal
            .draw(|f| f.render_widget(MetricsCard::new(metric), f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn trend_badge_shows_direction_and_value() {
        let up = Trend {
            value: 8.2,
            direction: TrendDirection::Up,
            period: "last week".to_string(),
        };
        let down = Trend {
            value: 15.3,
            direction: TrendDirection::Down,
            ..up.clone()
        };
        assert_eq!(trend_badge(&up), "▲ 8.2%");
        assert_eq!(trend_badge(&down), "▼ 15.3%");
    }

    #[test]
    fn card_renders_value_subtitle_and_trend() {
        let text = render_text(&metric(Some(Trend {
            value: 8.2,
            direction: TrendDirection::Up,
            period: "last week".to_string(),
        })));
        assert!(text.contains("Conversations today"));
        assert!(text.contains("142"));
        assert!(text.contains("+12 since yesterday"));
        assert!(text.contains("▲ 8.2% vs last week"));
    }

    #[test]
    fn card_without_trend_has_no_badge() {
        let text = render_text(&metric(None));
        assert!(text.contains("142"));
        assert!(!text.contains('▲'));
        assert!(!text.contains('▼'));
    }
}
