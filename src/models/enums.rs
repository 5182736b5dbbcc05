//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// ToolCategory
// ---------------------------------------------------------------------------

/// Tool category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ToolCategory {
    #[serde(rename = "Power Tools")]
    PowerTools,
    #[serde(rename = "Hand Tools")]
    HandTools,
    Measuring,
    Safety,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 4] = [
        ToolCategory::PowerTools,
        ToolCategory::HandTools,
        ToolCategory::Measuring,
        ToolCategory::Safety,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ToolCategory::PowerTools => "Power Tools",
            ToolCategory::HandTools => "Hand Tools",
            ToolCategory::Measuring => "Measuring",
            ToolCategory::Safety => "Safety",
        }
    }
}

impl std::fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// ToolStatus
// ---------------------------------------------------------------------------

/// Availability of a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ToolStatus {
    Available,
    #[serde(rename = "Checked Out")]
    CheckedOut,
    Maintenance,
}

impl ToolStatus {
    pub const ALL: [ToolStatus; 3] = [
        ToolStatus::Available,
        ToolStatus::CheckedOut,
        ToolStatus::Maintenance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ToolStatus::Available => "Available",
            ToolStatus::CheckedOut => "Checked Out",
            ToolStatus::Maintenance => "Maintenance",
        }
    }

    /// Badge class: lowercase label, spaces become dashes
    pub fn css_class(self) -> String {
        self.label().to_lowercase().replace(' ', "-")
    }
}

impl std::fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// MaintenancePriority
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MaintenancePriority {
    High,
    Medium,
    Low,
}

impl MaintenancePriority {
    pub fn as_str(self) -> &'static str {
        match self {
            MaintenancePriority::High => "high",
            MaintenancePriority::Medium => "medium",
            MaintenancePriority::Low => "low",
        }
    }
}

impl std::fmt::Display for MaintenancePriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ActivityKind
// ---------------------------------------------------------------------------

/// Kind of a recent activity event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Checkout,
    Maintenance,
    Checkin,
}

impl ActivityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Checkout => "checkout",
            ActivityKind::Maintenance => "maintenance",
            ActivityKind::Checkin => "checkin",
        }
    }

    /// Font Awesome icon used in the activity feed
    pub fn icon(self) -> &'static str {
        match self {
            ActivityKind::Checkout => "fa-sign-out-alt",
            ActivityKind::Maintenance => "fa-wrench",
            ActivityKind::Checkin => "fa-sign-in-alt",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_css_class() {
        assert_eq!(ToolStatus::Available.css_class(), "available");
        assert_eq!(ToolStatus::CheckedOut.css_class(), "checked-out");
        assert_eq!(ToolStatus::Maintenance.css_class(), "maintenance");
    }

    #[test]
    fn test_serde_labels() {
        assert_eq!(serde_json::to_string(&ToolStatus::CheckedOut).unwrap(), "\"Checked Out\"");
        assert_eq!(serde_json::to_string(&ToolCategory::HandTools).unwrap(), "\"Hand Tools\"");
        assert_eq!(serde_json::to_string(&MaintenancePriority::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&ActivityKind::Checkin).unwrap(), "\"checkin\"");
    }
}
