//! In-memory fixtures standing in for a backend.

use crate::model::{
    Channel, Message, Metric, MetricVariant, Patient, PresenceStatus, Priority, QueueEntry,
    Sender, Trend, TrendDirection, UserRole,
};
use chrono::{DateTime, Duration, Local};

/// Default display name for a signed-in user of `role`.
pub fn default_user_name(role: UserRole) -> &'static str {
    match role {
        UserRole::Manager => "Dr. João Silva",
        UserRole::Attendant => "Ana Santos",
    }
}

fn entry(
    id: &str,
    name: &str,
    channel: Channel,
    priority: Priority,
    wait_minutes: u32,
    last_message: &str,
    unread_count: u32,
    assigned_to: Option<&str>,
) -> QueueEntry {
    QueueEntry {
        id: id.to_string(),
        name: name.to_string(),
        channel,
        priority,
        wait_minutes,
        last_message: last_message.to_string(),
        unread_count,
        assigned_to: assigned_to.map(str::to_string),
    }
}

/// Waiting conversations, in the order the queue shows them.
pub fn queue() -> Vec<QueueEntry> {
    vec![
        entry(
            "1",
            "Maria Silva",
            Channel::WhatsApp,
            Priority::Urgent,
            15,
            "I have a lot of chest pain",
            3,
            Some("Dr. João"),
        ),
        entry(
            "2",
            "Pedro Santos",
            Channel::Messenger,
            Priority::High,
            8,
            "I need to reschedule my appointment",
            1,
            None,
        ),
        entry(
            "3",
            "Ana Costa",
            Channel::Instagram,
            Priority::Medium,
            3,
            "I would like information about exams",
            2,
            None,
        ),
        entry(
            "4",
            "Carlos Lima",
            Channel::Email,
            Priority::Low,
            25,
            "Requesting a copy of my prescription",
            0,
            None,
        ),
    ]
}

/// Patient directory matching the queue entries.
pub fn patients(now: DateTime<Local>) -> Vec<Patient> {
    let patient = |id: &str, name: &str, status, seen_minutes_ago: i64, channel| Patient {
        id: id.to_string(),
        name: name.to_string(),
        status,
        last_seen: Some(now - Duration::minutes(seen_minutes_ago)),
        channel,
        avatar: None,
    };
    vec![
        patient("1", "Maria Silva", PresenceStatus::Online, 0, Channel::WhatsApp),
        patient("2", "Pedro Santos", PresenceStatus::Away, 6, Channel::Messenger),
        patient("3", "Ana Costa", PresenceStatus::Busy, 2, Channel::Instagram),
        patient("4", "Carlos Lima", PresenceStatus::Offline, 95, Channel::Email),
    ]
}

/// The conversation thread shown in the chat panel.
pub fn messages(now: DateTime<Local>) -> Vec<Message> {
    let message = |id: &str, content: &str, sender, seconds_ago: i64| Message {
        id: id.to_string(),
        content: content.to_string(),
        sender,
        timestamp: now - Duration::seconds(seconds_ago),
        channel: Channel::WhatsApp,
    };
    vec![
        message(
            "1",
            "Hello! I would like to book an appointment with a cardiologist",
            Sender::Patient,
            300,
        ),
        message(
            "2",
            "Hello! Of course, I can help you with that. Which date would you prefer?",
            Sender::Agent,
            240,
        ),
        message(
            "3",
            "Next week if possible, preferably in the morning",
            Sender::Patient,
            180,
        ),
    ]
}

fn metric(
    title: &str,
    value: &str,
    subtitle: &str,
    trend: Option<(f32, TrendDirection, &str)>,
    icon: &'static str,
    variant: MetricVariant,
) -> Metric {
    Metric {
        title: title.to_string(),
        value: value.to_string(),
        subtitle: Some(subtitle.to_string()),
        trend: trend.map(|(value, direction, period)| Trend {
            value,
            direction,
            period: period.to_string(),
        }),
        icon: Some(icon),
        variant,
    }
}

/// Card tone for a waiting queue: danger while anyone urgent waits.
pub fn backlog_variant(queue: &[QueueEntry]) -> MetricVariant {
    if queue.iter().any(|e| e.priority == Priority::Urgent) {
        MetricVariant::Danger
    } else if queue.is_empty() {
        MetricVariant::Success
    } else {
        MetricVariant::Warning
    }
}

/// Headline metrics for `role`.
pub fn metrics(role: UserRole) -> Vec<Metric> {
    use MetricVariant::{Default, Success, Warning};
    use TrendDirection::{Down, Up};

    match role {
        UserRole::Manager => vec![
            metric(
                "Conversations today",
                "142",
                "+12 since yesterday",
                Some((8.2, Up, "last week")),
                "✉",
                Success,
            ),
            metric(
                "Avg. response time",
                "2m 18s",
                "Target: < 3 minutes",
                Some((15.3, Down, "last month")),
                "◷",
                Default,
            ),
            metric(
                "Conversion rate",
                "68%",
                "Appointments booked",
                Some((5.1, Up, "last week")),
                "↗",
                Success,
            ),
            metric(
                "Active attendants",
                "8/12",
                "67% of capacity",
                None,
                "☷",
                Warning,
            ),
        ],
        UserRole::Attendant => vec![
            metric(
                "Your conversations today",
                "18",
                "+3 since yesterday",
                Some((12.5, Up, "weekly average")),
                "✉",
                Success,
            ),
            metric(
                "Avg. response time",
                "1m 45s",
                "Your target: < 2 minutes",
                Some((8.7, Down, "last week")),
                "◷",
                Default,
            ),
            metric(
                "Resolution rate",
                "94%",
                "Cases closed today",
                Some((2.1, Up, "last week")),
                "↗",
                Success,
            ),
            {
                let waiting = queue();
                metric(
                    "In your queue",
                    &waiting.len().to_string(),
                    "Awaiting reply",
                    None,
                    "☷",
                    backlog_variant(&waiting),
                )
            }
        ],
    }
}

/// Share of conversations per channel, most active first.
pub fn channel_activity() -> Vec<(Channel, u8)> {
    vec![
        (Channel::WhatsApp, 68),
        (Channel::Messenger, 18),
        (Channel::Email, 14),
    ]
}

/// Attendants ranked by conversations handled today.
pub fn top_attendants() -> Vec<(&'static str, u32)> {
    vec![("Ana Santos", 24), ("Carlos Lima", 22), ("Maria Costa", 19)]
}

/// Manager quick stats shown in the sidebar.
pub fn quick_stats() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Attendants online", "8/12"),
        ("Avg. time", "2m 30s"),
        ("In queue", "14"),
    ]
}
