//! Per-page content loaders
//!
//! Every loader is a pure function of the sample data and UI settings, so
//! loading a page twice yields identical markup.

use crate::{
    config::UiConfig,
    models::{
        metrics::{CheckoutStats, MaintenanceStats},
        ChartSeries, DashboardMetrics, Page, SampleData, ToolCategory, ToolStatus,
    },
};

use super::chart::{chart_target, ChartRenderer};
use super::components::{
    activity_item, button, checkout_item, icon, maintenance_item, page_header, select, stat_card,
    tool_card, user_card, ButtonStyle,
};
use super::format::{format_count, format_currency, format_date_str};
use super::html::{el, Element, Node};
use super::modals::{ModalKind, QuickAction};

/// Inputs every loader reads from
#[derive(Clone, Copy)]
pub struct PageContext<'a> {
    pub data: &'a SampleData,
    pub ui: &'a UiConfig,
}

/// Content for `page`, or `None` when the page is static markup
pub fn load(page: Page, ctx: PageContext<'_>) -> Option<Node> {
    match page {
        Page::Dashboard => None,
        Page::Inventory => Some(inventory(ctx)),
        Page::Maintenance => Some(maintenance(ctx)),
        Page::Checkout => Some(checkout(ctx)),
        Page::Users => Some(users(ctx)),
        Page::Reports => Some(reports()),
        Page::Settings => Some(settings(ctx)),
    }
}

/// Button that opens a modal via its `data-modal` key
fn modal_button(style: ButtonStyle, icon_name: &str, label: &str, modal: ModalKind) -> Element {
    button(style, icon_name, label).attr("data-modal", modal.as_str())
}

fn inventory(ctx: PageContext<'_>) -> Node {
    let categories =
        std::iter::once("All Categories").chain(ToolCategory::ALL.map(ToolCategory::label));
    let statuses = std::iter::once("All Status").chain(ToolStatus::ALL.map(ToolStatus::label));

    el("div")
        .class("page-content")
        .child(page_header(
            "Tool Inventory",
            vec![
                button(ButtonStyle::Secondary, "fa-filter", "Filter"),
                button(ButtonStyle::Secondary, "fa-download", "Export"),
                modal_button(ButtonStyle::Primary, "fa-plus", "Add Tool", ModalKind::AddTool),
            ],
        ))
        .child(
            el("div").class("inventory-filters").child(
                el("div")
                    .class("filter-bar")
                    .child(
                        el("input")
                            .attr("type", "text")
                            .attr("placeholder", "Search tools...")
                            .class("search-input"),
                    )
                    .child(select(Some("filter-select"), categories))
                    .child(select(Some("filter-select"), statuses)),
            ),
        )
        .child(
            el("div")
                .class("tools-grid")
                .children(ctx.data.tools.iter().map(tool_card)),
        )
        .into()
}

fn maintenance(ctx: PageContext<'_>) -> Node {
    let stats = MaintenanceStats::FIXED;

    el("div")
        .class("page-content")
        .child(page_header(
            "Maintenance Management",
            vec![
                button(ButtonStyle::Secondary, "fa-calendar", "View Calendar"),
                modal_button(
                    ButtonStyle::Primary,
                    "fa-plus",
                    "Schedule Maintenance",
                    ModalKind::ScheduleMaintenance,
                ),
            ],
        ))
        .child(
            el("div")
                .class("maintenance-dashboard")
                .child(
                    el("div")
                        .class("maintenance-stats")
                        .child(stat_card(Some("urgent"), stats.overdue.to_string(), "Overdue"))
                        .child(stat_card(
                            Some("warning"),
                            stats.due_this_week.to_string(),
                            "Due This Week",
                        ))
                        .child(stat_card(
                            Some("success"),
                            stats.completed_this_month.to_string(),
                            "Completed This Month",
                        )),
                )
                .child(
                    el("div")
                        .class("maintenance-list")
                        .child(el("h3").text("Upcoming Maintenance"))
                        .children(ctx.data.maintenance.iter().map(maintenance_item)),
                ),
        )
        .into()
}

fn checkout(ctx: PageContext<'_>) -> Node {
    let stats = CheckoutStats::FIXED;

    el("div")
        .class("page-content")
        .child(page_header(
            "Tool Check Out/In",
            vec![
                button(ButtonStyle::Secondary, "fa-history", "View History"),
                modal_button(
                    ButtonStyle::Primary,
                    "fa-sign-out-alt",
                    "Check Out Tool",
                    ModalKind::Checkout,
                ),
            ],
        ))
        .child(
            el("div")
                .class("checkout-dashboard")
                .child(
                    el("div")
                        .class("checkout-stats")
                        .child(stat_card(
                            None,
                            stats.checked_out.to_string(),
                            "Currently Checked Out",
                        ))
                        .child(stat_card(None, stats.available.to_string(), "Available Tools"))
                        .child(stat_card(
                            Some("warning"),
                            stats.overdue_returns.to_string(),
                            "Overdue Returns",
                        )),
                )
                .child(
                    el("div")
                        .class("checked-out-list")
                        .child(el("h3").text("Currently Checked Out Tools"))
                        .children(ctx.data.checked_out.iter().map(checkout_item)),
                ),
        )
        .into()
}

fn users(ctx: PageContext<'_>) -> Node {
    el("div")
        .class("page-content")
        .child(page_header(
            "User Management",
            vec![
                button(ButtonStyle::Secondary, "fa-download", "Export Users"),
                modal_button(ButtonStyle::Primary, "fa-user-plus", "Add User", ModalKind::AddUser),
            ],
        ))
        .child(
            el("div")
                .class("users-grid")
                .children(ctx.data.users.iter().map(user_card)),
        )
        .into()
}

fn report_card(title: &str, description: &str) -> Element {
    el("div")
        .class("report-card")
        .child(el("h3").text(title))
        .child(el("p").text(description))
        .child(el("button").class("btn btn-primary").text("Generate"))
}

fn reports() -> Node {
    el("div")
        .class("page-content")
        .child(page_header(
            "Reports & Analytics",
            vec![
                button(ButtonStyle::Secondary, "fa-calendar", "Date Range"),
                button(ButtonStyle::Primary, "fa-download", "Export Report"),
            ],
        ))
        .child(
            el("div")
                .class("reports-dashboard")
                .child(el("div").class("report-cards").children([
                    report_card("Utilization Report", "Tool usage and efficiency metrics"),
                    report_card("Maintenance Report", "Maintenance costs and schedules"),
                    report_card("Inventory Report", "Current inventory status and value"),
                ]))
                .child(
                    el("div")
                        .class("analytics-charts")
                        .child(
                            el("div")
                                .class("chart-container")
                                .child(chart_target("utilizationChart")),
                        ),
                ),
        )
        .into()
}

fn setting_input(label: &str, kind: &str, value: String) -> Element {
    el("div")
        .class("setting-item")
        .child(el("label").text(label))
        .child(el("input").attr("type", kind).attr("value", value))
}

fn setting_checkbox(label: &str, checked: bool) -> Element {
    el("div").class("setting-item").child(
        el("label")
            .child(el("input").attr("type", "checkbox").flag_if("checked", checked))
            .text(label),
    )
}

fn settings_section(title: &str, items: Vec<Element>) -> Element {
    el("div")
        .class("settings-section")
        .child(el("h3").text(title))
        .children(items)
}

fn settings(ctx: PageContext<'_>) -> Node {
    let ui = ctx.ui;

    el("div")
        .class("page-content")
        .child(page_header(
            "System Settings",
            vec![
                button(ButtonStyle::Secondary, "fa-undo", "Reset to Defaults"),
                button(ButtonStyle::Primary, "fa-save", "Save Changes"),
            ],
        ))
        .child(el("div").class("settings-content").children([
            settings_section(
                "General Settings",
                vec![
                    setting_input("Company Name", "text", ui.company_name.clone()),
                    setting_input(
                        "Default Check-out Duration (days)",
                        "number",
                        ui.default_checkout_days.to_string(),
                    ),
                ],
            ),
            settings_section(
                "Notification Settings",
                vec![
                    setting_checkbox(
                        "Email notifications for overdue returns",
                        ui.overdue_email_notifications,
                    ),
                    setting_checkbox("Maintenance reminders", ui.maintenance_reminders),
                ],
            ),
            settings_section(
                "Security Settings",
                vec![
                    setting_input(
                        "Session timeout (minutes)",
                        "number",
                        ui.session_timeout_minutes.to_string(),
                    ),
                    setting_checkbox("Require two-factor authentication", ui.require_two_factor),
                ],
            ),
        ]))
        .into()
}

fn metric_card(icon_name: &str, value: String, label: &str, detail: Option<String>) -> Element {
    el("div")
        .class("metric-card")
        .child(el("div").class("metric-icon").child(icon(icon_name)))
        .child(
            el("div")
                .class("metric-content")
                .child(el("h3").text(value))
                .child(el("p").text(label))
                .children(detail.map(|detail| el("span").class("metric-detail").text(detail))),
        )
}

/// Static dashboard markup, built once when the shell is created
pub fn dashboard(
    data: &SampleData,
    metrics: &DashboardMetrics,
    usage: &ChartSeries,
    charts: &dyn ChartRenderer,
) -> Node {
    let next_due = data
        .maintenance
        .first()
        .map(|item| format!("Next: {}", format_date_str(&item.due_date)));

    el("div")
        .class("page-content")
        .child(el("div").class("page-header").child(el("h2").text("Dashboard")))
        .child(el("div").class("metrics-grid").children([
            metric_card("fa-toolbox", format_count(metrics.total_tools), "Total Tools", None),
            metric_card("fa-sign-out-alt", format_count(metrics.checked_out), "Checked Out", None),
            metric_card(
                "fa-wrench",
                format_count(metrics.maintenance_due),
                "Maintenance Due",
                next_due,
            ),
            metric_card(
                "fa-dollar-sign",
                format_currency(metrics.total_value),
                "Total Value",
                None,
            ),
        ]))
        .child(
            el("div")
                .class("dashboard-row")
                .child(
                    el("div")
                        .class("chart-card")
                        .child(el("h3").text("Usage Trend"))
                        .child(
                            el("div")
                                .class("chart-container")
                                .child(charts.line_chart("usageChart", usage)),
                        ),
                )
                .child(
                    el("div")
                        .class("quick-actions")
                        .child(el("h3").text("Quick Actions"))
                        .children(QuickAction::ALL.map(|action| {
                            el("button")
                                .class("quick-action-btn")
                                .attr("data-action", action.label())
                                .child(icon(action.icon()))
                                .child(el("span").text(action.label()))
                        })),
                ),
        )
        .child(
            el("div")
                .class("recent-activity")
                .child(el("h3").text("Recent Activity"))
                .children(data.recent_activity.iter().map(activity_item)),
        )
        .into()
}
