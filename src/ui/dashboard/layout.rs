//! Dashboard geometry
//!
//! Rendering and mouse hit-testing both read the same [`DashboardLayout`],
//! so a click always lands on what was drawn there.

use crate::consts::cli_consts::layout::{
    FOOTER_HEIGHT, HEADER_HEIGHT, METRICS_CARD_HEIGHT, SIDEBAR_WIDTH,
};
use crate::model::TabId;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardLayout {
    pub sidebar: Rect,
    pub header: Rect,
    pub footer: Rect,
    /// One area per metrics card, dashboard tab only.
    pub metrics: Vec<Rect>,
    pub queue: Option<Rect>,
    pub insights: Option<Rect>,
    pub chat: Option<Rect>,
    /// Placeholder page for tabs without their own view.
    pub section: Option<Rect>,
}

impl DashboardLayout {
    pub fn compute(area: Rect, active_tab: TabId, metric_count: usize) -> Self {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(FOOTER_HEIGHT)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)])
            .split(outer[0]);

        let mut layout = DashboardLayout {
            sidebar: columns[0],
            footer: outer[1],
            ..Default::default()
        };
        let main = columns[1];

        match active_tab {
            TabId::Dashboard => {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(HEADER_HEIGHT),
                        Constraint::Length(METRICS_CARD_HEIGHT),
                        Constraint::Fill(1),
                    ])
                    .split(main);
                layout.header = rows[0];

                if metric_count > 0 {
                    let cards = Layout::default()
                        .direction(Direction::Horizontal)
                        .constraints(vec![
                            Constraint::Ratio(1, metric_count as u32);
                            metric_count
                        ])
                        .split(rows[1]);
                    layout.metrics = cards.to_vec();
                }

                let body = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
                    .split(rows[2]);
                layout.queue = Some(body[0]);
                layout.insights = Some(body[1]);
            }
            TabId::Chat => {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Fill(1)])
                    .split(main);
                layout.header = rows[0];

                let body = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                    .split(rows[1]);
                layout.queue = Some(body[0]);
                layout.chat = Some(body[1]);
            }
            _ => {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Fill(1)])
                    .split(main);
                layout.header = rows[0];
                layout.section = Some(rows[1]);
            }
        }

        layout
    }
}
