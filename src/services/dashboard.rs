//! Dashboard metrics, activity feed and usage chart

use std::sync::Arc;

use crate::{
    models::{ChartSeries, DashboardMetrics, RecentActivityEvent, ToolStatus},
    repository::Repository,
    views::{chart::ChartRenderer, format::format_currency, html::Node, pages},
};

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
    charts: Arc<dyn ChartRenderer>,
    metrics: DashboardMetrics,
    usage: ChartSeries,
}

impl DashboardService {
    pub fn new(repository: Repository, charts: Arc<dyn ChartRenderer>) -> Self {
        Self {
            repository,
            charts,
            metrics: DashboardMetrics::fixed(),
            usage: ChartSeries::monthly_usage(),
        }
    }

    pub fn metrics(&self) -> &DashboardMetrics {
        &self.metrics
    }

    pub fn usage_series(&self) -> &ChartSeries {
        &self.usage
    }

    pub fn recent_activity(&self) -> &[RecentActivityEvent] {
        self.repository.records.recent_activity()
    }

    /// Static dashboard markup
    pub fn render(&self) -> Node {
        pages::dashboard(&self.repository.data, &self.metrics, &self.usage, self.charts.as_ref())
    }

    /// Startup log of the fixed figures
    pub fn log_snapshot(&self) {
        tracing::info!(
            total_tools = self.metrics.total_tools,
            checked_out = self.metrics.checked_out,
            maintenance_due = self.metrics.maintenance_due,
            total_value = %format_currency(self.metrics.total_value),
            "Metrics updated"
        );
        tracing::info!(
            available = self.repository.tools.count_by_status(ToolStatus::Available),
            checked_out = self.repository.tools.count_by_status(ToolStatus::CheckedOut),
            "Inventory loaded"
        );
        tracing::info!(events = self.recent_activity().len(), "Recent activity loaded");
    }
}
