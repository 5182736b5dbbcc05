//! Recent activity feed model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::ActivityKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecentActivityEvent {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub tool: String,
    /// Relative label such as `2 hours ago`
    pub time: String,
}

impl RecentActivityEvent {
    /// One-line description for the dashboard feed
    pub fn summary(&self) -> String {
        match (self.kind, self.user.as_deref()) {
            (ActivityKind::Checkout, Some(user)) => format!("{} checked out {}", user, self.tool),
            (ActivityKind::Checkin, Some(user)) => format!("{} returned {}", user, self.tool),
            (ActivityKind::Maintenance, _) => format!("{} scheduled for maintenance", self.tool),
            (_, None) => self.tool.clone(),
        }
    }
}
