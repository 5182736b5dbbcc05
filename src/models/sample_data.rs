//! Hardcoded records backing every rendered page

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    activity::RecentActivityEvent,
    checkout::CheckedOutItem,
    enums::{ActivityKind, MaintenancePriority, ToolCategory, ToolStatus},
    maintenance::MaintenanceItem,
    tool::Tool,
    user::User,
};

/// The full sample data set. Built once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SampleData {
    pub tools: Vec<Tool>,
    pub maintenance: Vec<MaintenanceItem>,
    pub checked_out: Vec<CheckedOutItem>,
    pub users: Vec<User>,
    pub recent_activity: Vec<RecentActivityEvent>,
}

impl SampleData {
    pub fn generate() -> Self {
        use ActivityKind::{Checkin, Checkout};
        use MaintenancePriority::{High, Low, Medium};
        use ToolCategory::*;
        use ToolStatus::*;

        Self {
            tools: vec![
                Tool::new("DP-001", "Industrial Drill Press", PowerTools, Available, "fa-drill"),
                Tool::new("CS-005", "Circular Saw", PowerTools, CheckedOut, "fa-saw-blade"),
                Tool::new("MM-008", "Digital Multimeter", Measuring, Available, "fa-microchip"),
                Tool::new("WG-012", "Welding Gun", PowerTools, Maintenance, "fa-burn"),
                Tool::new("HM-015", "Ball Peen Hammer", HandTools, Available, "fa-hammer"),
                Tool::new("LT-003", "Metal Lathe", PowerTools, Available, "fa-cog"),
            ],
            maintenance: vec![
                maintenance("Drill Press #DP-001", "Routine Maintenance", "2024-11-25", High),
                maintenance("Circular Saw #CS-005", "Blade Replacement", "2024-11-27", Medium),
                maintenance("Welding Gun #WG-012", "Calibration", "2024-11-30", Low),
            ],
            checked_out: vec![
                checked_out("Circular Saw #CS-005", "Mike Johnson", "2024-11-24"),
                checked_out("Torque Wrench #TW-009", "Sarah Wilson", "2024-11-26"),
                checked_out("Oscilloscope #OS-011", "John Smith", "2024-11-28"),
            ],
            users: vec![
                user("John Smith", "Senior Technician", "Manufacturing", 3, "2023-01-15"),
                user("Mike Johnson", "Supervisor", "Quality Control", 1, "2022-08-10"),
                user("Sarah Wilson", "Technician", "R&D", 2, "2023-05-20"),
                user("David Brown", "Manager", "Operations", 0, "2021-03-12"),
            ],
            recent_activity: vec![
                activity(Checkout, Some("Mike Johnson"), "Drill Press #DP-001", "2 hours ago"),
                activity(ActivityKind::Maintenance, None, "Lathe #LT-003", "4 hours ago"),
                activity(Checkin, Some("Sarah Wilson"), "Welding Gun #WG-012", "6 hours ago"),
            ],
        }
    }
}

fn maintenance(
    tool: &str,
    kind: &str,
    due: &str,
    priority: MaintenancePriority,
) -> MaintenanceItem {
    MaintenanceItem {
        tool: tool.to_string(),
        maintenance_type: kind.to_string(),
        due_date: due.to_string(),
        priority,
    }
}

fn checked_out(tool: &str, user: &str, due: &str) -> CheckedOutItem {
    CheckedOutItem {
        tool: tool.to_string(),
        user: user.to_string(),
        due_date: due.to_string(),
    }
}

fn user(name: &str, role: &str, department: &str, tools: u32, since: &str) -> User {
    User {
        name: name.to_string(),
        role: role.to_string(),
        department: department.to_string(),
        tools_checked_out: tools,
        active_date: since.to_string(),
    }
}

fn activity(kind: ActivityKind, user: Option<&str>, tool: &str, time: &str) -> RecentActivityEvent {
    RecentActivityEvent {
        kind,
        user: user.map(str::to_string),
        tool: tool.to_string(),
        time: time.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        let first = SampleData::generate();
        let second = SampleData::generate();
        assert_eq!(first, second);
        assert_eq!(first.tools.len(), 6);
        assert_eq!(first.maintenance.len(), 3);
        assert_eq!(first.checked_out.len(), 3);
        assert_eq!(first.users.len(), 4);
        assert_eq!(first.recent_activity.len(), 3);
    }

    #[test]
    fn test_stable_order() {
        let data = SampleData::generate();
        let ids: Vec<&str> = data.tools.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["DP-001", "CS-005", "MM-008", "WG-012", "HM-015", "LT-003"]);
        assert_eq!(data.users[3].name, "David Brown");
        assert!(data.recent_activity[1].user.is_none());
    }

    #[test]
    fn test_tool_matches() {
        let data = SampleData::generate();
        let drill = &data.tools[0];
        assert!(drill.matches("drill"));
        assert!(drill.matches("dp-0"));
        assert!(drill.matches("power"));
        assert!(!drill.matches("hammer"));
        assert!(!drill.matches(""));
    }
}
