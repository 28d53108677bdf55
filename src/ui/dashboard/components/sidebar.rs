//! Sidebar component
//!
//! Renders the brand header, user profile, role-based navigation and
//! footer entries. Emits a tab change when a navigation item is activated.

use super::super::utils::{hit, truncate};
use super::status_indicator::{IndicatorSize, StatusIndicator};
use crate::mock_data::quick_stats;
use crate::model::{NavigationTab, PresenceStatus, TabId, UserRole};
use crate::navigation::navigation_for;

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

/// Line of the first navigation item, relative to the sidebar's inner area.
const NAV_FIRST_LINE: u16 = 6;
const FOOTER_LINES: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    TabChange(TabId),
}

#[derive(Debug, Clone)]
pub struct Sidebar<'a> {
    role: UserRole,
    user_name: &'a str,
    unread_notifications: u32,
    active_tab: TabId,
    /// Keyboard cursor, shown only while the sidebar has focus.
    cursor: Option<usize>,
}

impl<'a> Sidebar<'a> {
    pub fn new(role: UserRole, user_name: &'a str) -> Self {
        Self {
            role,
            user_name,
            unread_notifications: 0,
            active_tab: TabId::Dashboard,
            cursor: None,
        }
    }

    pub fn unread_notifications(mut self, count: u32) -> Self {
        self.unread_notifications = count;
        self
    }

    pub fn active_tab(mut self, tab: TabId) -> Self {
        self.active_tab = tab;
        self
    }

    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn navigation(&self) -> &'static [NavigationTab] {
        navigation_for(self.role)
    }

    /// Event for activating the navigation item at `index`.
    pub fn activate(&self, index: usize) -> Option<SidebarEvent> {
        self.navigation()
            .get(index)
            .map(|item| SidebarEvent::TabChange(item.id))
    }

    /// Event for a click at (`column`, `row`) when the sidebar is drawn in `area`.
    pub fn item_at(&self, area: Rect, column: u16, row: u16) -> Option<SidebarEvent> {
        let (top, _) = Self::areas(area);
        let nav_area = Rect {
            x: top.x,
            y: top.y.saturating_add(NAV_FIRST_LINE),
            width: top.width,
            height: (self.navigation().len() as u16)
                .min(top.height.saturating_sub(NAV_FIRST_LINE)),
        };
        if !hit(nav_area, column, row) {
            return None;
        }
        self.activate((row - nav_area.y) as usize)
    }

    fn block() -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
    }

    /// Splits the inner area into the scrolling top part and the footer entries.
    fn areas(area: Rect) -> (Rect, Rect) {
        let inner = Self::block().inner(area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(FOOTER_LINES)])
            .split(inner);
        (chunks[0], chunks[1])
    }

    fn badge(count: u32, color: Color) -> Span<'static> {
        Span::styled(
            format!(" {} ", count),
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
    }

    fn nav_line(&self, index: usize, item: &NavigationTab, width: u16) -> Line<'static> {
        let is_active = item.id == self.active_tab;
        let marker = if self.cursor == Some(index) { "›" } else { " " };
        let badge_width = item.badge.map(|b| b.to_string().len() + 2).unwrap_or(0);
        let label_width = (width as usize).saturating_sub(4 + badge_width);
        let label = format!("{:<w$}", truncate(item.label, label_width), w = label_width);

        let style = if is_active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(Color::LightYellow)),
            Span::styled(format!("{} ", item.icon), style),
            Span::styled(format!("{} ", label), style),
        ];
        if let Some(badge) = item.badge {
            spans.push(Self::badge(badge, Color::LightBlue));
        }
        Line::from(spans)
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Self::block().render(area, buf);
        let (top, footer) = Self::areas(area);

        let mut lines = vec![
            Line::from(Span::styled(
                "✚ MediChat",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Omnichannel system",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
        ];

        let mut profile = vec![
            StatusIndicator::new(PresenceStatus::Online)
                .size(IndicatorSize::Small)
                .span(),
            Span::raw(" "),
            Span::styled(
                truncate(self.user_name, top.width.saturating_sub(7) as usize),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if self.unread_notifications > 0 {
            profile.push(Span::raw(" "));
            profile.push(Self::badge(self.unread_notifications, Color::Red));
        }
        lines.push(Line::from(profile));
        lines.push(Line::from(Span::styled(
            format!("  {}", self.role.label()),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));

        for (index, item) in self.navigation().iter().enumerate() {
            lines.push(self.nav_line(index, item, top.width));
        }

        if self.role == UserRole::Manager {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "CURRENT STATUS",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )));
            for (label, value) in quick_stats() {
                let gap = (top.width as usize).saturating_sub(label.len() + value.len());
                lines.push(Line::from(vec![
                    Span::styled(label, Style::default().fg(Color::Gray)),
                    Span::raw(" ".repeat(gap)),
                    Span::styled(
                        value,
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
        }

        Paragraph::new(lines).render(top, buf);

        let mut notifications = vec![Span::styled(
            "◆ Notifications ",
            Style::default().fg(Color::White),
        )];
        if self.unread_notifications > 0 {
            notifications.push(Self::badge(self.unread_notifications, Color::Red));
        }
        let footer_lines = vec![
            Line::from(notifications),
            Line::from(Span::styled("◇ Settings", Style::default().fg(Color::White))),
            Line::from(Span::styled("← Sign out", Style::default().fg(Color::DarkGray))),
        ];
        Paragraph::new(footer_lines).render(footer, buf);
    }
}
