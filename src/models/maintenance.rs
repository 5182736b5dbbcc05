//! Maintenance schedule model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::MaintenancePriority;

/// Upcoming maintenance entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceItem {
    /// Free-text tool label, e.g. `Drill Press #DP-001`
    pub tool: String,
    #[serde(rename = "type")]
    pub maintenance_type: String,
    /// ISO date as entered, not validated
    pub due_date: String,
    pub priority: MaintenancePriority,
}
