//! Tool model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::{ToolCategory, ToolStatus};

/// Tool record from the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Tool {
    /// Inventory label, e.g. `DP-001`
    pub id: String,
    pub name: String,
    pub category: ToolCategory,
    pub status: ToolStatus,
    /// Font Awesome icon class
    pub icon: String,
}

impl Tool {
    pub fn new(
        id: &str,
        name: &str,
        category: ToolCategory,
        status: ToolStatus,
        icon: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            status,
            icon: icon.to_string(),
        }
    }

    /// Only available tools can be checked out from the grid
    pub fn can_check_out(&self) -> bool {
        self.status == ToolStatus::Available
    }

    /// Case-insensitive match on id, name or category
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        !needle.is_empty()
            && (self.id.to_lowercase().contains(&needle)
                || self.name.to_lowercase().contains(&needle)
                || self.category.label().to_lowercase().contains(&needle))
    }
}
