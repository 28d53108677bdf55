//! Dashboard state management
//!
//! Contains the props handed down to components, the owner's state, and the
//! component-local view state.

use super::actions::DashboardActions;
use super::components::chat::ChatInput;
use crate::mock_data;
use crate::model::{Message, Metric, Patient, PresenceStatus, QueueEntry, TabId, UserRole};
use crate::navigation::navigation_for;
use crate::ui::UIConfig;

use chrono::Local;
use log::{debug, info};

/// Read-only data the dashboard passes down to its components.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub role: UserRole,
    pub user_name: String,
    pub unread_notifications: u32,
    pub queue: Vec<QueueEntry>,
    pub patients: Vec<Patient>,
    pub messages: Vec<Message>,
    pub metrics: Vec<Metric>,
}

impl DashboardData {
    /// Builds the dashboard props from the in-memory fixtures.
    pub fn mock(ui_config: &UIConfig) -> Self {
        let now = Local::now();
        Self {
            role: ui_config.role,
            user_name: ui_config.user_name.clone(),
            unread_notifications: ui_config.unread_notifications,
            queue: mock_data::queue(),
            patients: mock_data::patients(now),
            messages: mock_data::messages(now),
            metrics: mock_data::metrics(ui_config.role),
        }
    }

    pub fn patient(&self, patient_id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == patient_id)
    }

    /// Presence of a queued patient. Unknown patients show as offline.
    pub fn presence_of(&self, patient_id: &str) -> PresenceStatus {
        self.patient(patient_id)
            .map(|p| p.status)
            .unwrap_or(PresenceStatus::Offline)
    }
}

/// The dashboard's own state. The only mutable state above the components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    active_tab: TabId,
    selected_patient_id: Option<String>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> TabId {
        self.active_tab
    }

    pub fn selected_patient_id(&self) -> Option<&str> {
        self.selected_patient_id.as_deref()
    }
}

impl DashboardActions for DashboardState {
    fn select_tab(&mut self, tab: TabId) {
        if self.active_tab != tab {
            debug!("Switching tab: {} -> {}", self.active_tab, tab);
        }
        self.active_tab = tab;
    }

    fn open_chat(&mut self, patient_id: String) {
        debug!("Opening chat with patient: {}", patient_id);
        self.selected_patient_id = Some(patient_id);
        self.active_tab = TabId::Chat;
    }

    fn assign_patient(&mut self, patient_id: String) {
        info!("Assigning patient: {}", patient_id);
    }

    fn send_message(&mut self, content: String) {
        info!("Sending message: {}", content);
    }
}

/// Which component receives keyboard input.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Focus {
    #[default]
    Sidebar,
    Queue,
    ChatInput,
}

/// Component-local state: cursors, focus and the uncommitted chat draft.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub focus: Focus,
    pub sidebar_cursor: usize,
    pub queue_cursor: usize,
    pub chat: ChatInput,
}

impl ViewState {
    /// Keep focus and cursors pointing at something visible on `active_tab`.
    pub fn normalize(&mut self, data: &DashboardData, state: &DashboardState) {
        let tab = state.active_tab();
        let shows_queue = matches!(tab, TabId::Dashboard | TabId::Chat);
        let shows_chat = tab == TabId::Chat && state.selected_patient_id().is_some();

        self.focus = match self.focus {
            Focus::ChatInput if !shows_chat => {
                if shows_queue {
                    Focus::Queue
                } else {
                    Focus::Sidebar
                }
            }
            Focus::Queue if !shows_queue => Focus::Sidebar,
            focus => focus,
        };

        let nav_len = navigation_for(data.role).len();
        self.sidebar_cursor = self.sidebar_cursor.min(nav_len.saturating_sub(1));
        self.queue_cursor = self.queue_cursor.min(data.queue.len().saturating_sub(1));
    }

    /// Next focus target in Tab order, skipping components not on screen.
    pub fn cycle_focus(&mut self, tab: TabId, has_selection: bool, forward: bool) {
        let mut order = vec![Focus::Sidebar];
        if matches!(tab, TabId::Dashboard | TabId::Chat) {
            order.push(Focus::Queue);
        }
        if tab == TabId::Chat && has_selection {
            order.push(Focus::ChatInput);
        }
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::navigation_for;
    use strum::IntoEnumIterator;

    fn data(role: UserRole) -> DashboardData {
        DashboardData::mock(&UIConfig::new(role, "Test User".to_string(), 0, false))
    }

    #[test]
    fn initial_state_is_dashboard_without_selection() {
        let state = DashboardState::new();
        assert_eq!(state.active_tab(), TabId::Dashboard);
        assert_eq!(state.selected_patient_id(), None);
    }

    #[test]
    fn selecting_any_navigation_item_activates_it() {
        for role in UserRole::iter() {
            for item in navigation_for(role) {
                let mut state = DashboardState::new();
                state.select_tab(item.id);
                assert_eq!(state.active_tab(), item.id);
            }
        }
    }

    #[test]
    fn selecting_active_tab_is_idempotent() {
        let mut state = DashboardState::new();
        state.select_tab(TabId::Schedule);
        let before = state.clone();
        state.select_tab(TabId::Schedule);
        assert_eq!(state, before);
    }

    #[test]
    fn any_tab_is_reachable_from_any_tab() {
        for from in TabId::iter() {
            for to in TabId::iter() {
                let mut state = DashboardState::new();
                state.select_tab(from);
                state.select_tab(to);
                assert_eq!(state.active_tab(), to);
            }
        }
    }

    #[test]
    fn open_chat_selects_patient_and_switches_to_chat() {
        let mut state = DashboardState::new();
        state.open_chat("2".to_string());
        assert_eq!(state.active_tab(), TabId::Chat);
        assert_eq!(state.selected_patient_id(), Some("2"));
    }

    #[test]
    fn assign_and_send_leave_state_unchanged() {
        let mut state = DashboardState::new();
        state.open_chat("1".to_string());
        let before = state.clone();
        state.assign_patient("3".to_string());
        state.send_message("hello".to_string());
        assert_eq!(state, before);
    }

    #[test]
    fn normalize_moves_chat_focus_off_hidden_chat() {
        let data = data(UserRole::Manager);
        let mut state = DashboardState::new();
        let mut view = ViewState {
            focus: Focus::ChatInput,
            ..ViewState::default()
        };
        view.normalize(&data, &state);
        assert_eq!(view.focus, Focus::Queue);

        state.select_tab(TabId::Team);
        view.focus = Focus::Queue;
        view.normalize(&data, &state);
        assert_eq!(view.focus, Focus::Sidebar);
    }

    #[test]
    fn normalize_clamps_cursors() {
        let data = data(UserRole::Attendant);
        let state = DashboardState::new();
        let mut view = ViewState {
            sidebar_cursor: 99,
            queue_cursor: 99,
            ..ViewState::default()
        };
        view.normalize(&data, &state);
        assert_eq!(view.sidebar_cursor, navigation_for(UserRole::Attendant).len() - 1);
        assert_eq!(view.queue_cursor, data.queue.len() - 1);
    }

    #[test]
    fn cycle_focus_includes_chat_only_with_selection() {
        let mut view = ViewState::default();
        view.cycle_focus(TabId::Chat, false, true);
        assert_eq!(view.focus, Focus::Queue);
        view.cycle_focus(TabId::Chat, false, true);
        assert_eq!(view.focus, Focus::Sidebar);

        view.cycle_focus(TabId::Chat, true, false);
        assert_eq!(view.focus, Focus::ChatInput);
    }

    #[test]
    fn presence_of_unknown_patient_is_offline() {
        let data = data(UserRole::Manager);
        assert_eq!(data.presence_of("1"), PresenceStatus::Online);
        assert_eq!(data.presence_of("missing"), PresenceStatus::Offline);
    }
}
