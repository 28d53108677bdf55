//! Role-based navigation table

use crate::model::{NavigationTab, TabId, UserRole};

const fn tab(id: TabId, label: &'static str, icon: &'static str) -> NavigationTab {
    NavigationTab {
        id,
        label,
        icon,
        badge: None,
    }
}

const fn tab_with_badge(
    id: TabId,
    label: &'static str,
    icon: &'static str,
    badge: u32,
) -> NavigationTab {
    NavigationTab {
        id,
        label,
        icon,
        badge: Some(badge),
    }
}

const ATTENDANT_NAVIGATION: &[NavigationTab] = &[
    tab(TabId::Dashboard, "Dashboard", "⌂"),
    tab_with_badge(TabId::Chat, "Chat", "✉", 5),
    tab(TabId::Schedule, "Schedule", "▦"),
    tab(TabId::Patients, "Patients", "☰"),
];

const MANAGER_NAVIGATION: &[NavigationTab] = &[
    tab(TabId::Dashboard, "Dashboard", "⌂"),
    tab_with_badge(TabId::Chat, "Chat", "✉", 5),
    tab(TabId::Analytics, "Reports", "▤"),
    tab(TabId::Team, "Team", "☷"),
    tab(TabId::Patients, "Patients", "☰"),
    tab(TabId::Schedule, "Schedule", "▦"),
    tab(TabId::Performance, "Performance", "↯"),
];

/// Navigation entries shown in the sidebar for `role`, in display order.
pub fn navigation_for(role: UserRole) -> &'static [NavigationTab] {
    match role {
        UserRole::Attendant => ATTENDANT_NAVIGATION,
        UserRole::Manager => MANAGER_NAVIGATION,
    }
}

/// Index of `tab` within the navigation list of `role`.
pub fn position(role: UserRole, tab: TabId) -> Option<usize> {
    navigation_for(role).iter().position(|item| item.id == tab)
}

/// Display label of `tab`, taken from the first role that lists it.
pub fn label_of(tab: TabId) -> &'static str {
    MANAGER_NAVIGATION
        .iter()
        .chain(ATTENDANT_NAVIGATION)
        .find(|item| item.id == tab)
        .map(|item| item.label)
        .unwrap_or("Dashboard")
}
