//! Event boundary between the dashboard components and the state owner
//!
//! Components never mutate dashboard state. They return event values,
//! which [`dispatch`] forwards to a [`DashboardActions`] implementation.

use super::components::chat::ChatEvent;
use super::components::patient_queue::QueueEvent;
use super::components::sidebar::SidebarEvent;
use crate::model::TabId;

/// Operations the dashboard owner exposes to its components.
#[cfg_attr(test, mockall::automock)]
pub trait DashboardActions {
    /// Make `tab` the active tab. Always succeeds.
    fn select_tab(&mut self, tab: TabId);
    /// Select `patient_id` and switch to the chat tab.
    fn open_chat(&mut self, patient_id: String);
    /// Assign `patient_id` to the current user.
    fn assign_patient(&mut self, patient_id: String);
    /// Send `content` to the selected patient.
    fn send_message(&mut self, content: String);
}

/// Any event a dashboard component can emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    TabChange(TabId),
    OpenChat(String),
    AssignPatient(String),
    SendMessage(String),
}

impl From<SidebarEvent> for DashboardEvent {
    fn from(event: SidebarEvent) -> Self {
        match event {
            SidebarEvent::TabChange(tab) => DashboardEvent::TabChange(tab),
        }
    }
}

impl From<QueueEvent> for DashboardEvent {
    fn from(event: QueueEvent) -> Self {
        match event {
            QueueEvent::OpenChat(id) => DashboardEvent::OpenChat(id),
            QueueEvent::AssignPatient(id) => DashboardEvent::AssignPatient(id),
        }
    }
}

impl From<ChatEvent> for DashboardEvent {
    fn from(event: ChatEvent) -> Self {
        match event {
            ChatEvent::Send(content) => DashboardEvent::SendMessage(content),
        }
    }
}

/// Forward `event` to exactly one operation of `actions`.
pub fn dispatch<A: DashboardActions + ?Sized>(actions: &mut A, event: DashboardEvent) {
    match event {
        DashboardEvent::TabChange(tab) => actions.select_tab(tab),
        DashboardEvent::OpenChat(id) => actions.open_chat(id),
        DashboardEvent::AssignPatient(id) => actions.assign_patient(id),
        DashboardEvent::SendMessage(content) => actions.send_message(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn dispatch_maps_each_event_to_one_call() {
        let mut actions = MockDashboardActions::new();
        actions
            .expect_select_tab()
            .with(eq(TabId::Team))
            .times(1)
            .return_const(());
        actions
            .expect_open_chat()
            .with(eq("2".to_string()))
            .times(1)
            .return_const(());
        actions
            .expect_assign_patient()
            .with(eq("3".to_string()))
            .times(1)
            .return_const(());
        actions
            .expect_send_message()
            .with(eq("hello".to_string()))
            .times(1)
            .return_const(());

        dispatch(&mut actions, DashboardEvent::TabChange(TabId::Team));
        dispatch(&mut actions, DashboardEvent::OpenChat("2".to_string()));
        dispatch(&mut actions, DashboardEvent::AssignPatient("3".to_string()));
        dispatch(&mut actions, DashboardEvent::SendMessage("hello".to_string()));
    }

    #[test]
    fn component_events_convert_without_changing_payload() {
        assert_eq!(
            DashboardEvent::from(QueueEvent::AssignPatient("1".to_string())),
            DashboardEvent::AssignPatient("1".to_string())
        );
        assert_eq!(
            DashboardEvent::from(ChatEvent::Send("  hi ".to_string())),
            DashboardEvent::SendMessage("  hi ".to_string())
        );
        assert_eq!(
            DashboardEvent::from(SidebarEvent::TabChange(TabId::Chat)),
            DashboardEvent::TabChange(TabId::Chat)
        );
    }
}
