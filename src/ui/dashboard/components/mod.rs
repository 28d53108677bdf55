//! Dashboard component modules
//!
//! Every component renders from the props it is given and reports user
//! intent as an event; none of them mutate dashboard state.

pub mod chat;
pub mod footer;
pub mod header;
pub mod insights;
pub mod metrics_card;
pub mod patient_queue;
pub mod section;
pub mod sidebar;
pub mod status_indicator;
