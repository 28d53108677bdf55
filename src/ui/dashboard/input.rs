//! Keyboard and mouse routing
//!
//! Turns terminal input into component events. Component events go through
//! [`dispatch`]; only focus and cursor movement touch the [`ViewState`].

use super::actions::{DashboardActions, DashboardEvent, dispatch};
use super::components::chat::{ChatInterface, ChatTarget};
use super::components::patient_queue::{PatientQueue, QueueEvent};
use super::components::sidebar::{Sidebar, SidebarEvent};
use super::layout::DashboardLayout;
use super::state::{DashboardData, Focus, ViewState};
use super::utils::hit;
use crate::model::TabId;
use crate::navigation::{navigation_for, position};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Whether the UI loop keeps running after an input event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Read-only snapshot of what is on screen when the event arrived.
pub struct InputContext<'a> {
    pub data: &'a DashboardData,
    pub active_tab: TabId,
    pub has_selection: bool,
    pub layout: &'a DashboardLayout,
}

impl InputContext<'_> {
    fn sidebar(&self) -> Sidebar<'_> {
        Sidebar::new(self.data.role, &self.data.user_name)
    }

    /// The queue as rendered with `cursor`, so clicks hit the scrolled rows.
    fn queue(&self, cursor: usize) -> PatientQueue<'_> {
        PatientQueue::new(&self.data.queue).cursor(Some(cursor))
    }

    fn chat_visible(&self) -> bool {
        self.active_tab == TabId::Chat && self.has_selection
    }
}

fn emit<A, E>(actions: &mut A, event: Option<E>)
where
    A: DashboardActions + ?Sized,
    E: Into<DashboardEvent>,
{
    if let Some(event) = event {
        dispatch(actions, event.into());
    }
}

/// Route a key press.
pub fn route_key<A: DashboardActions + ?Sized>(
    view: &mut ViewState,
    ctx: &InputContext<'_>,
    key: KeyEvent,
    actions: &mut A,
) -> Flow {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Flow::Quit;
    }

    if view.focus == Focus::ChatInput {
        if key.code == KeyCode::Esc {
            view.focus = Focus::Queue;
        } else {
            let event = view.chat.handle_key(key);
            emit(actions, event);
        }
        return Flow::Continue;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
        KeyCode::Tab => view.cycle_focus(ctx.active_tab, ctx.has_selection, true),
        KeyCode::BackTab => view.cycle_focus(ctx.active_tab, ctx.has_selection, false),
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            let event = ctx.sidebar().activate(index);
            if event.is_some() {
                view.sidebar_cursor = index;
            }
            emit(actions, event);
        }
        KeyCode::Up | KeyCode::Char('k') => match view.focus {
            Focus::Sidebar => view.sidebar_cursor = view.sidebar_cursor.saturating_sub(1),
            Focus::Queue => view.queue_cursor = view.queue_cursor.saturating_sub(1),
            Focus::ChatInput => {}
        },
        KeyCode::Down | KeyCode::Char('j') => match view.focus {
            Focus::Sidebar => {
                let last = navigation_for(ctx.data.role).len().saturating_sub(1);
                view.sidebar_cursor = (view.sidebar_cursor + 1).min(last);
            }
            Focus::Queue => {
                let last = ctx.data.queue.len().saturating_sub(1);
                view.queue_cursor = (view.queue_cursor + 1).min(last);
            }
            Focus::ChatInput => {}
        },
        KeyCode::Enter => match view.focus {
            Focus::Sidebar => emit(actions, ctx.sidebar().activate(view.sidebar_cursor)),
            Focus::Queue => {
                let event = ctx.queue(view.queue_cursor).open(view.queue_cursor);
                if event.is_some() {
                    view.focus = Focus::ChatInput;
                }
                emit(actions, event);
            }
            Focus::ChatInput => {}
        },
        KeyCode::Char('a') if view.focus == Focus::Queue => {
            emit(actions, ctx.queue(view.queue_cursor).assign(view.queue_cursor));
        }
        KeyCode::Char('i') if ctx.chat_visible() => view.focus = Focus::ChatInput,
        _ => {}
    }
    Flow::Continue
}

/// Route a mouse event. Only left clicks do anything.
pub fn route_mouse<A: DashboardActions + ?Sized>(
    view: &mut ViewState,
    ctx: &InputContext<'_>,
    mouse: MouseEvent,
    actions: &mut A,
) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let (column, row) = (mouse.column, mouse.row);
    let layout = ctx.layout;

    if hit(layout.sidebar, column, row) {
        view.focus = Focus::Sidebar;
        let event = ctx.sidebar().item_at(layout.sidebar, column, row);
        if let Some(SidebarEvent::TabChange(tab)) = event {
            view.sidebar_cursor = position(ctx.data.role, tab).unwrap_or(view.sidebar_cursor);
        }
        emit(actions, event);
        return;
    }

    if let Some(area) = layout.queue.filter(|area| hit(*area, column, row)) {
        view.focus = Focus::Queue;
        let event = ctx.queue(view.queue_cursor).handle_click(area, column, row);
        match &event {
            Some(QueueEvent::OpenChat(id)) | Some(QueueEvent::AssignPatient(id)) => {
                if let Some(index) = ctx.data.queue.iter().position(|e| &e.id == id) {
                    view.queue_cursor = index;
                }
            }
            None => {}
        }
        if matches!(event, Some(QueueEvent::OpenChat(_))) {
            view.focus = Focus::ChatInput;
        }
        emit(actions, event);
        return;
    }

    if !ctx.chat_visible() {
        return;
    }
    if let Some(area) = layout.chat {
        match ChatInterface::click_target(area, column, row) {
            Some(ChatTarget::Input) => view.focus = Focus::ChatInput,
            Some(ChatTarget::Send) => {
                view.focus = Focus::ChatInput;
                let event = view.chat.submit();
                emit(actions, event);
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserRole;
    use crate::ui::UIConfig;
    use crate::ui::dashboard::actions::MockDashboardActions;
    use mockall::predicate::eq;
    use ratatui::layout::Rect;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 140,
        height: 40,
    };

    fn data() -> DashboardData {
        DashboardData::mock(&UIConfig::new(
            UserRole::Manager,
            "Dr. João Silva".to_string(),
            3,
            false,
        ))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn ctrl_c_quits_even_while_typing() {
        let data = data();
        let layout = DashboardLayout::compute(AREA, TabId::Chat, data.metrics.len());
        let ctx = InputContext {
            data: &data,
            active_tab: TabId::Chat,
            has_selection: true,
            layout: &layout,
        };
        let mut view = ViewState {
            focus: Focus::ChatInput,
            ..ViewState::default()
        };
        let mut actions = MockDashboardActions::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(route_key(&mut view, &ctx, ctrl_c, &mut actions), Flow::Quit);

        // Plain `q` is text while the input has focus.
        assert_eq!(
            route_key(&mut view, &ctx, press(KeyCode::Char('q')), &mut actions),
            Flow::Continue
        );
        assert_eq!(view.chat.draft(), "q");

        route_key(&mut view, &ctx, press(KeyCode::Esc), &mut actions);
        assert_eq!(view.focus, Focus::Queue);
        assert_eq!(
            route_key(&mut view, &ctx, press(KeyCode::Char('q')), &mut actions),
            Flow::Quit
        );
    }

    #[test]
    fn digit_selects_navigation_item() {
        let data = data();
        let layout = DashboardLayout::compute(AREA, TabId::Dashboard, data.metrics.len());
        let ctx = InputContext {
            data: &data,
            active_tab: TabId::Dashboard,
            has_selection: false,
            layout: &layout,
        };
        let mut view = ViewState::default();
        let mut actions = MockDashboardActions::new();
        actions
            .expect_select_tab()
            .with(eq(TabId::Analytics))
            .times(1)
            .return_const(());

        route_key(&mut view, &ctx, press(KeyCode::Char('3')), &mut actions);
        assert_eq!(view.sidebar_cursor, 2);

        // Past the end of the list: nothing happens.
        route_key(&mut view, &ctx, press(KeyCode::Char('9')), &mut actions);
    }

    #[test]
    fn queue_keys_open_and_assign_the_cursor_row() {
        let data = data();
        let layout = DashboardLayout::compute(AREA, TabId::Dashboard, data.metrics.len());
        let ctx = InputContext {
            data: &data,
            active_tab: TabId::Dashboard,
            has_selection: false,
            layout: &layout,
        };
        let mut view = ViewState {
            focus: Focus::Queue,
            ..ViewState::default()
        };
        let mut actions = MockDashboardActions::new();
        actions
            .expect_assign_patient()
            .with(eq("2".to_string()))
            .times(1)
            .return_const(());
        actions
            .expect_open_chat()
            .with(eq("2".to_string()))
            .times(1)
            .return_const(());

        route_key(&mut view, &ctx, press(KeyCode::Down), &mut actions);
        route_key(&mut view, &ctx, press(KeyCode::Char('a')), &mut actions);
        assert_eq!(view.focus, Focus::Queue);

        route_key(&mut view, &ctx, press(KeyCode::Enter), &mut actions);
        assert_eq!(view.focus, Focus::ChatInput);
    }

    #[test]
    fn typing_and_enter_sends_once() {
        let data = data();
        let layout = DashboardLayout::compute(AREA, TabId::Chat, data.metrics.len());
        let ctx = InputContext {
            data: &data,
            active_tab: TabId::Chat,
            has_selection: true,
            layout: &layout,
        };
        let mut view = ViewState {
            focus: Focus::ChatInput,
            ..ViewState::default()
        };
        let mut actions = MockDashboardActions::new();
        actions
            .expect_send_message()
            .with(eq("ok".to_string()))
            .times(1)
            .return_const(());

        for code in [KeyCode::Char('o'), KeyCode::Char('k'), KeyCode::Enter, KeyCode::Enter] {
            route_key(&mut view, &ctx, press(code), &mut actions);
        }
        assert_eq!(view.chat.draft(), "");
    }

    #[test]
    fn sidebar_click_selects_tab() {
        let data = data();
        let layout = DashboardLayout::compute(AREA, TabId::Dashboard, data.metrics.len());
        let ctx = InputContext {
            data: &data,
            active_tab: TabId::Dashboard,
            has_selection: false,
            layout: &layout,
        };
        let row = (0..layout.sidebar.height)
            .find(|row| {
                ctx.sidebar().item_at(layout.sidebar, 5, *row)
                    == Some(SidebarEvent::TabChange(TabId::Team))
            })
            .unwrap();

        let mut view = ViewState {
            focus: Focus::Queue,
            ..ViewState::default()
        };
        let mut actions = MockDashboardActions::new();
        actions
            .expect_select_tab()
            .with(eq(TabId::Team))
            .times(1)
            .return_const(());

        route_mouse(&mut view, &ctx, click(5, row), &mut actions);
        assert_eq!(view.focus, Focus::Sidebar);
        assert_eq!(view.sidebar_cursor, 3);
    }

    #[test]
    fn queue_row_click_opens_chat_and_focuses_input() {
        let data = data();
        let layout = DashboardLayout::compute(AREA, TabId::Dashboard, data.metrics.len());
        let ctx = InputContext {
            data: &data,
            active_tab: TabId::Dashboard,
            has_selection: false,
            layout: &layout,
        };
        let queue_area = layout.queue.unwrap();
        let column = queue_area.x + 3;
        let row = (queue_area.y..queue_area.bottom())
            .find(|row| {
                ctx.queue(0).handle_click(queue_area, column, *row)
                    == Some(QueueEvent::OpenChat("3".to_string()))
            })
            .unwrap();

        let mut view = ViewState::default();
        let mut actions = MockDashboardActions::new();
        actions
            .expect_open_chat()
            .with(eq("3".to_string()))
            .times(1)
            .return_const(());
        actions.expect_assign_patient().never();

        route_mouse(&mut view, &ctx, click(column, row), &mut actions);
        assert_eq!(view.focus, Focus::ChatInput);
        assert_eq!(view.queue_cursor, 2);
    }

    #[test]
    fn send_click_submits_draft() {
        let data = data();
        let layout = DashboardLayout::compute(AREA, TabId::Chat, data.metrics.len());
        let ctx = InputContext {
            data: &data,
            active_tab: TabId::Chat,
            has_selection: true,
            layout: &layout,
        };
        let send = ChatInterface::send_area(layout.chat.unwrap());

        let mut view = ViewState::default();
        let mut actions = MockDashboardActions::new();
        actions
            .expect_send_message()
            .with(eq("hello".to_string()))
            .times(1)
            .return_const(());

        // Blank draft: the click only focuses the input.
        route_mouse(&mut view, &ctx, click(send.x, send.y), &mut actions);
        assert_eq!(view.focus, Focus::ChatInput);

        view.chat.set_draft("hello");
        route_mouse(&mut view, &ctx, click(send.x, send.y), &mut actions);
        assert_eq!(view.chat.draft(), "");
    }

    #[test]
    fn chat_clicks_ignored_without_selection() {
        let data = data();
        let layout = DashboardLayout::compute(AREA, TabId::Chat, data.metrics.len());
        let ctx = InputContext {
            data: &data,
            active_tab: TabId::Chat,
            has_selection: false,
            layout: &layout,
        };
        let send = ChatInterface::send_area(layout.chat.unwrap());
        let mut view = ViewState::default();
        view.chat.set_draft("hello");
        let mut actions = MockDashboardActions::new();
        actions.expect_send_message().never();

        route_mouse(&mut view, &ctx, click(send.x, send.y), &mut actions);
        assert_eq!(view.chat.draft(), "hello");
        assert_eq!(view.focus, Focus::Sidebar);
    }
}
