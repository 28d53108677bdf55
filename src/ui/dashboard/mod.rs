//! Clinic dashboard
//!
//! [`Dashboard`] owns the data, the tab/selection state and the view state.
//! Input is routed to components, whose events come back through
//! [`actions::DashboardActions`] on the owned [`DashboardState`].

pub mod actions;
pub mod components;
pub mod input;
pub mod layout;
pub mod renderer;
pub mod state;
pub mod utils;

pub use actions::DashboardEvent;
pub use input::Flow;

use crate::model::TabId;
use crate::ui::UIConfig;
use actions::dispatch;
use input::{InputContext, route_key, route_mouse};
use layout::DashboardLayout;
use renderer::render_dashboard;
use state::{DashboardData, DashboardState, ViewState};

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;

#[derive(Debug, Clone)]
pub struct Dashboard {
    data: DashboardData,
    state: DashboardState,
    view: ViewState,
    with_background_color: bool,
}

impl Dashboard {
    pub fn new(ui_config: &UIConfig) -> Self {
        Self {
            data: DashboardData::mock(ui_config),
            state: DashboardState::new(),
            view: ViewState::default(),
            with_background_color: ui_config.with_background_color,
        }
    }

    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    #[cfg(test)]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    #[cfg(test)]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Apply a component event to the owned state.
    pub fn apply(&mut self, event: DashboardEvent) {
        dispatch(&mut self.state, event);
        self.view.normalize(&self.data, &self.state);
    }

    pub fn handle_key(&mut self, key: KeyEvent, area: Rect) -> Flow {
        let layout = self.layout(area);
        let ctx = InputContext {
            data: &self.data,
            active_tab: self.state.active_tab(),
            has_selection: self.state.selected_patient_id().is_some(),
            layout: &layout,
        };
        let flow = route_key(&mut self.view, &ctx, key, &mut self.state);
        self.view.normalize(&self.data, &self.state);
        flow
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        let layout = self.layout(area);
        let ctx = InputContext {
            data: &self.data,
            active_tab: self.state.active_tab(),
            has_selection: self.state.selected_patient_id().is_some(),
            layout: &layout,
        };
        route_mouse(&mut self.view, &ctx, mouse, &mut self.state);
        self.view.normalize(&self.data, &self.state);
    }

    fn layout(&self, area: Rect) -> DashboardLayout {
        DashboardLayout::compute(area, self.state.active_tab(), self.data.metrics.len())
    }

    pub fn render(&self, f: &mut Frame) {
        render_dashboard(
            f,
            &self.data,
            &self.state,
            &self.view,
            self.with_background_color,
        );
    }

    pub fn active_tab(&self) -> TabId {
        self.state.active_tab()
    }
}
