//! Reusable building blocks shared by the page views

use crate::models::{CheckedOutItem, MaintenanceItem, RecentActivityEvent, Tool, User};

use super::html::{el, Element, Node};

pub fn icon(name: &str) -> Node {
    el("i").class(format!("fas {}", name)).into()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Secondary,
}

impl ButtonStyle {
    fn class(self) -> &'static str {
        match self {
            ButtonStyle::Primary => "btn-primary",
            ButtonStyle::Secondary => "btn-secondary",
        }
    }
}

/// Header button with a leading icon
pub fn button(style: ButtonStyle, icon_name: &str, label: &str) -> Element {
    el("button")
        .class(format!("btn {}", style.class()))
        .child(icon(icon_name))
        .text(label)
}

pub fn small_button(style: ButtonStyle, label: &str) -> Node {
    el("button")
        .class(format!("btn btn-sm {}", style.class()))
        .text(label)
        .into()
}

pub fn page_header(title: &str, actions: Vec<Element>) -> Node {
    el("div")
        .class("page-header")
        .child(el("h2").text(title))
        .child(el("div").class("page-actions").children(actions))
        .into()
}

/// `modifier` is an extra class such as `urgent` or `warning`
pub fn stat_card(modifier: Option<&str>, value: String, label: &str) -> Node {
    let class = match modifier {
        Some(modifier) => format!("stat-card {}", modifier),
        None => "stat-card".to_string(),
    };
    el("div")
        .class(class)
        .child(el("h3").text(value))
        .child(el("p").text(label))
        .into()
}

pub fn tool_card(tool: &Tool) -> Node {
    let mut actions = vec![small_button(ButtonStyle::Primary, "View Details")];
    if tool.can_check_out() {
        actions.push(small_button(ButtonStyle::Secondary, "Check Out"));
    }

    el("div")
        .class("tool-card")
        .attr("data-tool-id", tool.id.as_str())
        .child(el("div").class("tool-image").child(icon(&tool.icon)))
        .child(
            el("div")
                .class("tool-info")
                .child(el("h4").text(tool.name.as_str()))
                .child(el("p").class("tool-id").text(tool.id.as_str()))
                .child(el("p").class("tool-category").text(tool.category.label()))
                .child(
                    el("div")
                        .class(format!("tool-status {}", tool.status.css_class()))
                        .text(tool.status.label()),
                )
                .child(el("div").class("tool-actions").children(actions)),
        )
        .into()
}

pub fn maintenance_item(item: &MaintenanceItem) -> Node {
    el("div")
        .class(format!("maintenance-item {}", item.priority))
        .child(
            el("div")
                .class("maintenance-info")
                .child(el("h4").text(item.tool.as_str()))
                .child(el("p").text(item.maintenance_type.as_str()))
                .child(el("span").class("due-date").text(format!("Due: {}", item.due_date))),
        )
        .child(
            el("div")
                .class("maintenance-actions")
                .child(small_button(ButtonStyle::Primary, "Complete"))
                .child(small_button(ButtonStyle::Secondary, "Reschedule")),
        )
        .into()
}

pub fn checkout_item(item: &CheckedOutItem) -> Node {
    el("div")
        .class("checkout-item")
        .child(
            el("div")
                .class("checkout-info")
                .child(el("h4").text(item.tool.as_str()))
                .child(el("p").text(format!("Checked out by: {}", item.user)))
                .child(el("span").class("checkout-date").text(format!("Due: {}", item.due_date))),
        )
        .child(
            el("div")
                .class("checkout-actions")
                .child(small_button(ButtonStyle::Primary, "Check In"))
                .child(small_button(ButtonStyle::Secondary, "Extend")),
        )
        .into()
}

pub fn user_card(user: &User) -> Node {
    el("div")
        .class("user-card")
        .child(
            el("div")
                .class("user-avatar")
                .child(el("div").class("avatar-fallback").child(icon("fa-user"))),
        )
        .child(
            el("div")
                .class("user-info")
                .child(el("h4").text(user.name.as_str()))
                .child(el("p").text(user.role.as_str()))
                .child(el("p").text(user.department.as_str()))
                .child(
                    el("div")
                        .class("user-stats")
                        .child(el("span").text(format!("Tools: {}", user.tools_checked_out)))
                        .child(el("span").text(format!("Active since: {}", user.active_date))),
                ),
        )
        .child(
            el("div")
                .class("user-actions")
                .child(small_button(ButtonStyle::Primary, "Edit"))
                .child(small_button(ButtonStyle::Secondary, "View History")),
        )
        .into()
}

pub fn activity_item(event: &RecentActivityEvent) -> Node {
    el("div")
        .class(format!("activity-item {}", event.kind.as_str()))
        .child(el("div").class("activity-icon").child(icon(event.kind.icon())))
        .child(
            el("div")
                .class("activity-content")
                .child(el("p").text(event.summary()))
                .child(el("span").class("activity-time").text(event.time.as_str())),
        )
        .into()
}

/// `<select>` with plain options
pub fn select<'a>(class: Option<&str>, options: impl IntoIterator<Item = &'a str>) -> Element {
    let select = el("select");
    let select = match class {
        Some(class) => select.class(class),
        None => select,
    };
    select.children(options.into_iter().map(|option| el("option").text(option)))
}

/// Labelled form row used by the modal forms
pub fn form_group(label: Option<&str>, control: impl Into<Node>) -> Node {
    let label = label.map(|text| Node::from(el("label").text(text)));
    el("div")
        .class("form-group")
        .children(label)
        .child(control)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SampleData;

    fn has_check_out(node: &Node) -> bool {
        !node
            .find_all(&|e: &Element| e.tag() == "button" && node_text(e) == "Check Out")
            .is_empty()
    }

    fn node_text(element: &Element) -> String {
        Node::from(element.clone()).text_content()
    }

    #[test]
    fn test_check_out_button_only_for_available_tools() {
        let data = SampleData::generate();
        for tool in &data.tools {
            assert_eq!(has_check_out(&tool_card(tool)), tool.can_check_out(), "{}", tool.id);
        }

        let drill = data.tools.iter().find(|t| t.id == "DP-001").unwrap();
        let saw = data.tools.iter().find(|t| t.id == "CS-005").unwrap();
        assert!(has_check_out(&tool_card(drill)));
        assert!(!has_check_out(&tool_card(saw)));
    }

    #[test]
    fn test_status_badge_class() {
        let data = SampleData::generate();
        let saw = tool_card(&data.tools[1]).render();
        assert!(saw.contains(r#"<div class="tool-status checked-out">Checked Out</div>"#));
    }

    #[test]
    fn test_user_card_escapes_department() {
        let data = SampleData::generate();
        let sarah = user_card(&data.users[2]).render();
        assert!(sarah.contains("<p>R&amp;D</p>"));
        assert!(sarah.contains("<span>Tools: 2</span>"));
    }

    #[test]
    fn test_activity_without_user() {
        let data = SampleData::generate();
        let html = activity_item(&data.recent_activity[1]).render();
        assert!(html.contains("Lathe #LT-003 scheduled for maintenance"));
        assert!(html.contains("4 hours ago"));
    }
}
