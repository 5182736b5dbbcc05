//! Toast notification model

use serde::{Deserialize, Serialize};
use std::time::Instant;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationLevel::Info => "info",
            NotificationLevel::Success => "success",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Error => "error",
        }
    }
}

/// Lifecycle: created -> shown -> hiding -> removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPhase {
    /// Waiting in the queue for a display slot
    Queued,
    Created,
    Shown,
    Hiding,
    Removed,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub level: NotificationLevel,
    pub phase: NotificationPhase,
    /// When the current phase started
    pub since: Instant,
}

impl Notification {
    pub fn new(message: String, level: NotificationLevel, now: Instant) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            level,
            phase: NotificationPhase::Queued,
            since: now,
        }
    }

    /// Same text and level, and not on its way out
    pub fn duplicates(&self, message: &str, level: NotificationLevel) -> bool {
        self.level == level
            && self.message == message
            && matches!(
                self.phase,
                NotificationPhase::Queued | NotificationPhase::Created | NotificationPhase::Shown
            )
    }
}

/// Serializable snapshot of a notification
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationView {
    pub id: Uuid,
    pub message: String,
    pub level: NotificationLevel,
    pub phase: NotificationPhase,
}

impl From<&Notification> for NotificationView {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id,
            message: n.message.clone(),
            level: n.level,
            phase: n.phase,
        }
    }
}

/// Create notification request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNotification {
    pub message: String,
    #[serde(default)]
    pub level: NotificationLevel,
}
