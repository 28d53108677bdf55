//! Dashboard main renderer

use super::components::chat::{ChatInterface, NoConversation};
use super::components::metrics_card::MetricsCard;
use super::components::patient_queue::PatientQueue;
use super::components::sidebar::Sidebar;
use super::components::{footer, header, insights, section};
use super::layout::DashboardLayout;
use super::state::{DashboardData, DashboardState, Focus, ViewState};
use crate::mock_data::{channel_activity, top_attendants};
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(
    f: &mut Frame,
    data: &DashboardData,
    state: &DashboardState,
    view: &ViewState,
    with_background_color: bool,
) {
    if with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let tab = state.active_tab();
    let layout = DashboardLayout::compute(f.area(), tab, data.metrics.len());

    let sidebar_cursor = (view.focus == Focus::Sidebar).then_some(view.sidebar_cursor);
    f.render_widget(
        Sidebar::new(data.role, &data.user_name)
            .unread_notifications(data.unread_notifications)
            .active_tab(tab)
            .cursor(sidebar_cursor),
        layout.sidebar,
    );

    header::render_header(f, layout.header, data.role, tab);

    for (metric, area) in data.metrics.iter().zip(layout.metrics.iter()) {
        f.render_widget(MetricsCard::new(metric), *area);
    }

    if let Some(area) = layout.queue {
        let focused = view.focus == Focus::Queue;
        f.render_widget(
            PatientQueue::new(&data.queue)
                .presence(|id| data.presence_of(id))
                .cursor(Some(view.queue_cursor))
                .focused(focused),
            area,
        );
    }

    if let Some(area) = layout.insights {
        insights::render_insights(f, area, data.role, &channel_activity(), &top_attendants());
    }

    if let Some(area) = layout.chat {
        match state.selected_patient_id().and_then(|id| data.patient(id)) {
            Some(patient) => f.render_widget(
                ChatInterface::new(patient, &data.messages, view.chat.draft())
                    .focused(view.focus == Focus::ChatInput),
                area,
            ),
            None => f.render_widget(NoConversation, area),
        }
    }

    if let Some(area) = layout.section {
        section::render_section(f, area, tab);
    }

    footer::render_footer(f, layout.footer, view.focus);
}
