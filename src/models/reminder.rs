//! Recordatorios inteligentes
//!
//! Derivados en cada petición; nunca se persisten.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    Urgent,
    Proactive,
    Trip,
    Weather,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReminderPriority {
    High,
    Medium,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SmartReminder {
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    pub title: String,
    pub message: String,
    pub icon: &'static str,
    pub priority: ReminderPriority,
    /// Solo presente en el recordatorio `proactive`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_empty: Option<u32>,
}
