//! Data models for Custom TMS

pub mod activity;
pub mod checkout;
pub mod enums;
pub mod maintenance;
pub mod metrics;
pub mod notification;
pub mod page;
pub mod sample_data;
pub mod tool;
pub mod user;

// Re-export commonly used types
pub use activity::RecentActivityEvent;
pub use checkout::CheckedOutItem;
pub use enums::{ActivityKind, MaintenancePriority, ToolCategory, ToolStatus};
pub use maintenance::MaintenanceItem;
pub use metrics::{ChartSeries, DashboardMetrics};
pub use notification::{Notification, NotificationLevel, NotificationPhase};
pub use page::Page;
pub use sample_data::SampleData;
pub use tool::Tool;
pub use user::User;
