//! Modal form templates
//!
//! Each template is fixed markup. Forms are display-only: nothing reads
//! their values back.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

use super::components::{form_group, select};
use super::html::{el, Element, Node};

pub const DEFAULT_CONFIRM_LABEL: &str = "Confirm";

/// Every data-entry dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ModalKind {
    AddTool,
    FindTool,
    ScheduleMaintenance,
    GenerateReport,
    Checkout,
    AddUser,
}

impl ModalKind {
    pub const ALL: [ModalKind; 6] = [
        ModalKind::AddTool,
        ModalKind::FindTool,
        ModalKind::ScheduleMaintenance,
        ModalKind::GenerateReport,
        ModalKind::Checkout,
        ModalKind::AddUser,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModalKind::AddTool => "add-tool",
            ModalKind::FindTool => "find-tool",
            ModalKind::ScheduleMaintenance => "schedule-maintenance",
            ModalKind::GenerateReport => "generate-report",
            ModalKind::Checkout => "checkout",
            ModalKind::AddUser => "add-user",
        }
    }

    pub fn template(self) -> ModalTemplate {
        match self {
            ModalKind::AddTool => ModalTemplate::new("Add New Tool", add_tool_form(), "Add Tool"),
            ModalKind::FindTool => ModalTemplate::new("Find Tool", find_tool_form(), "Search"),
            ModalKind::ScheduleMaintenance => {
                ModalTemplate::new("Schedule Maintenance", schedule_maintenance_form(), "Schedule")
            }
            ModalKind::GenerateReport => {
                ModalTemplate::new("Generate Report", generate_report_form(), "Generate")
            }
            ModalKind::Checkout => {
                ModalTemplate::new("Check Out Tool", checkout_form(), "Check Out")
            }
            ModalKind::AddUser => ModalTemplate::new("Add New User", add_user_form(), "Add User"),
        }
    }
}

impl FromStr for ModalKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AppError::UnknownModal(s.to_string()))
    }
}

/// Title, body and confirm label handed to the overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalTemplate {
    pub title: String,
    pub body: Node,
    pub confirm_label: String,
}

impl ModalTemplate {
    pub fn new(title: &str, body: Node, confirm_label: &str) -> Self {
        Self {
            title: title.to_string(),
            body,
            confirm_label: confirm_label.to_string(),
        }
    }
}

/// Dashboard shortcut buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    AddNewTool,
    FindTool,
    ScheduleMaintenance,
    GenerateReport,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::AddNewTool,
        QuickAction::FindTool,
        QuickAction::ScheduleMaintenance,
        QuickAction::GenerateReport,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuickAction::AddNewTool => "Add New Tool",
            QuickAction::FindTool => "Find Tool",
            QuickAction::ScheduleMaintenance => "Schedule Maintenance",
            QuickAction::GenerateReport => "Generate Report",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            QuickAction::AddNewTool => "fa-plus",
            QuickAction::FindTool => "fa-search",
            QuickAction::ScheduleMaintenance => "fa-calendar-plus",
            QuickAction::GenerateReport => "fa-file-alt",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.label() == label)
    }

    pub fn modal(self) -> ModalKind {
        match self {
            QuickAction::AddNewTool => ModalKind::AddTool,
            QuickAction::FindTool => ModalKind::FindTool,
            QuickAction::ScheduleMaintenance => ModalKind::ScheduleMaintenance,
            QuickAction::GenerateReport => ModalKind::GenerateReport,
        }
    }
}

fn modal_form(groups: Vec<Node>) -> Node {
    el("form").class("modal-form").children(groups).into()
}

fn input(kind: &str, placeholder: &str) -> Element {
    el("input").attr("type", kind).attr("placeholder", placeholder)
}

fn textarea(rows: u32, placeholder: &str) -> Element {
    el("textarea")
        .attr("rows", rows.to_string())
        .attr("placeholder", placeholder)
}

fn add_tool_form() -> Node {
    modal_form(vec![
        form_group(Some("Tool Name"), input("text", "Enter tool name").flag("required")),
        form_group(Some("Tool ID"), input("text", "Auto-generated").flag("disabled")),
        form_group(
            Some("Category"),
            select(None, ["Power Tools", "Hand Tools", "Measuring", "Safety"]).flag("required"),
        ),
        form_group(
            Some("Purchase Price"),
            input("number", "0.00").attr("step", "0.01"),
        ),
        form_group(Some("Description"), textarea(3, "Tool description...")),
    ])
}

fn radio(value: &str, label: &str, checked: bool) -> Node {
    el("label")
        .child(
            el("input")
                .attr("type", "radio")
                .attr("name", "searchType")
                .attr("value", value)
                .flag_if("checked", checked),
        )
        .text(format!(" {}", label))
        .into()
}

fn find_tool_form() -> Node {
    el("div")
        .class("search-tool-form")
        .child(form_group(
            Some("Search by"),
            el("div").class("search-options").children([
                radio("name", "Tool Name", true),
                radio("id", "Tool ID", false),
                radio("category", "Category", false),
            ]),
        ))
        .child(form_group(None, input("text", "Enter search term...")))
        .child(el("div").class("search-results"))
        .into()
}

fn schedule_maintenance_form() -> Node {
    modal_form(vec![
        form_group(
            Some("Tool"),
            select(
                None,
                [
                    "Select a tool...",
                    "Drill Press #DP-001",
                    "Lathe #LT-003",
                    "Welding Gun #WG-012",
                ],
            )
            .flag("required"),
        ),
        form_group(
            Some("Maintenance Type"),
            select(
                None,
                ["Routine Maintenance", "Calibration", "Repair", "Inspection"],
            )
            .flag("required"),
        ),
        form_group(Some("Scheduled Date"), el("input").attr("type", "date").flag("required")),
        form_group(
            Some("Assigned Technician"),
            select(None, ["John Smith", "Mike Johnson", "Sarah Wilson"]).flag("required"),
        ),
        form_group(Some("Notes"), textarea(3, "Maintenance notes...")),
    ])
}

fn generate_report_form() -> Node {
    modal_form(vec![
        form_group(
            Some("Report Type"),
            select(
                None,
                [
                    "Utilization Report",
                    "Maintenance Report",
                    "Inventory Report",
                    "User Activity Report",
                ],
            )
            .flag("required"),
        ),
        form_group(
            Some("Date Range"),
            el("div")
                .class("date-range")
                .child(input("date", "From"))
                .child(input("date", "To")),
        ),
        form_group(Some("Format"), select(None, ["PDF", "Excel", "CSV"]).flag("required")),
    ])
}

fn checkout_form() -> Node {
    let suggestions = ["Drill Press #DP-001", "Circular Saw #CS-005", "Multimeter #MM-008"];

    modal_form(vec![
        form_group(
            Some("Tool to Check Out"),
            Node::Fragment(vec![
                input("text", "Search for tool...")
                    .attr("list", "available-tools")
                    .into(),
                el("datalist")
                    .id("available-tools")
                    .children(suggestions.map(|value| el("option").attr("value", value)))
                    .into(),
            ]),
        ),
        form_group(
            Some("User"),
            select(
                None,
                ["Select user...", "John Smith", "Mike Johnson", "Sarah Wilson"],
            )
            .flag("required"),
        ),
        form_group(Some("Return Date"), el("input").attr("type", "date").flag("required")),
        form_group(Some("Purpose"), textarea(2, "Purpose of checkout...")),
    ])
}

fn add_user_form() -> Node {
    modal_form(vec![
        form_group(Some("Full Name"), input("text", "Enter full name").flag("required")),
        form_group(Some("Email"), input("email", "user@example.com").flag("required")),
        form_group(
            Some("Role"),
            select(None, ["Technician", "Supervisor", "Manager", "Administrator"]).flag("required"),
        ),
        form_group(Some("Department"), input("text", "Department name")),
        form_group(Some("Phone Number"), input("tel", "(555) 123-4567")),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_kind_parsing() {
        for kind in ModalKind::ALL {
            assert_eq!(kind.as_str().parse::<ModalKind>().unwrap(), kind);
        }
        assert!(matches!("delete-tool".parse::<ModalKind>(), Err(AppError::UnknownModal(_))));
    }

    #[test]
    fn test_confirm_labels() {
        let labels: Vec<String> = ModalKind::ALL
            .into_iter()
            .map(|kind| kind.template().confirm_label)
            .collect();
        assert_eq!(labels, ["Add Tool", "Search", "Schedule", "Generate", "Check Out", "Add User"]);
    }

    #[test]
    fn test_quick_actions_map_to_modals() {
        assert_eq!(
            QuickAction::from_label("Find Tool").map(QuickAction::modal),
            Some(ModalKind::FindTool)
        );
        assert_eq!(
            QuickAction::from_label("Generate Report").map(QuickAction::modal),
            Some(ModalKind::GenerateReport)
        );
        assert_eq!(QuickAction::from_label("Launch Rocket"), None);
    }

    #[test]
    fn test_checkout_form_datalist() {
        let html = ModalKind::Checkout.template().body.render();
        assert!(html.contains(r#"<datalist id="available-tools"><option value="Drill Press #DP-001"></option>"#));
        assert!(html.contains(r#"list="available-tools""#));
    }
}
