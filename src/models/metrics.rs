//! Dashboard metrics and chart series

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Headline numbers on the dashboard (fixed values)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DashboardMetrics {
    pub total_tools: i64,
    pub checked_out: i64,
    pub maintenance_due: i64,
    /// Inventory value in USD
    pub total_value: Decimal,
}

impl DashboardMetrics {
    pub fn fixed() -> Self {
        Self {
            total_tools: 1247,
            checked_out: 89,
            maintenance_due: 23,
            total_value: Decimal::from(124_000),
        }
    }
}

/// Counters shown above the maintenance list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaintenanceStats {
    pub overdue: i64,
    pub due_this_week: i64,
    pub completed_this_month: i64,
}

impl MaintenanceStats {
    pub const FIXED: Self = Self {
        overdue: 5,
        due_this_week: 18,
        completed_this_month: 42,
    };
}

/// Counters shown above the checked-out list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutStats {
    pub checked_out: i64,
    pub available: i64,
    pub overdue_returns: i64,
}

impl CheckoutStats {
    pub const FIXED: Self = Self {
        checked_out: 89,
        available: 1158,
        overdue_returns: 3,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// A labelled series handed to the chart renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartSeries {
    pub label: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn new(label: &str, points: &[(&str, f64)]) -> Self {
        Self {
            label: label.to_string(),
            points: points
                .iter()
                .map(|(label, value)| ChartPoint {
                    label: label.to_string(),
                    value: *value,
                })
                .collect(),
        }
    }

    /// Monthly checkouts for the first half of the year
    pub fn monthly_usage() -> Self {
        Self::new(
            "Tools Checked Out",
            &[
                ("Jan", 65.0),
                ("Feb", 72.0),
                ("Mar", 68.0),
                ("Apr", 85.0),
                ("May", 78.0),
                ("Jun", 92.0),
            ],
        )
    }
}
