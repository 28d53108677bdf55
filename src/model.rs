//! Dashboard data model
//!
//! Presentation-only records. Nothing here is persisted: every value is
//! rebuilt from literals when a dashboard is constructed.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Messaging platform a conversation arrived through.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Channel {
    WhatsApp,
    Messenger,
    Instagram,
    Email,
    Phone,
}

impl Channel {
    /// Human-facing platform name.
    pub fn label(&self) -> &'static str {
        match self {
            Channel::WhatsApp => "WhatsApp",
            Channel::Messenger => "Messenger",
            Channel::Instagram => "Instagram",
            Channel::Email => "Email",
            Channel::Phone => "Phone",
        }
    }
}

/// Urgency of a waiting conversation.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Current availability of a person.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PresenceStatus {
    Online,
    Away,
    Busy,
    Offline,
}

/// Author of a chat message.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Sender {
    Patient,
    Agent,
}

/// Role of the signed-in staff member. Selects navigation and metrics.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserRole {
    Attendant,
    #[default]
    Manager,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Attendant => "Attendant",
            UserRole::Manager => "Manager",
        }
    }
}

/// Identifier of a navigation tab. Union of every role's navigation list.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Hash,
    strum::Display,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
pub enum TabId {
    #[default]
    Dashboard,
    Chat,
    Schedule,
    Patients,
    Analytics,
    Team,
    Performance,
}

/// A single chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
    pub channel: Channel,
}

/// A patient as shown in the chat header.
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub status: PresenceStatus,
    pub last_seen: Option<DateTime<Local>>,
    pub channel: Channel,
    pub avatar: Option<String>,
}

/// A waiting patient conversation awaiting assignment to staff.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueEntry {
    pub id: String,
    pub name: String,
    pub channel: Channel,
    pub priority: Priority,
    /// Time spent waiting, in minutes.
    pub wait_minutes: u32,
    pub last_message: String,
    pub unread_count: u32,
    pub assigned_to: Option<String>,
}

/// A statically defined sidebar entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NavigationTab {
    pub id: TabId,
    pub label: &'static str,
    pub icon: &'static str,
    pub badge: Option<u32>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TrendDirection {
    Up,
    Down,
}

/// Change of a metric over a reference period.
#[derive(Debug, Clone, PartialEq)]
pub struct Trend {
    /// Magnitude of the change, in percent.
    pub value: f32,
    pub direction: TrendDirection,
    pub period: String,
}

/// Visual emphasis of a metric card.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum MetricVariant {
    #[default]
    Default,
    Success,
    Warning,
    Danger,
}

/// A labelled value shown on a metrics card.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub title: String,
    pub value: String,
    pub subtitle: Option<String>,
    pub trend: Option<Trend>,
    pub icon: Option<&'static str>,
    pub variant: MetricVariant,
}
