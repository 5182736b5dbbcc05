//! Line chart rendering seam
//!
//! The dashboard only knows how to hand a drawing target and a series to a
//! [`ChartRenderer`]. The default implementation emits a `<canvas>` carrying
//! the series as JSON for the client-side charting library.

#[cfg(test)]
use mockall::automock;

use crate::models::ChartSeries;

use super::html::{el, Node};

#[cfg_attr(test, automock)]
pub trait ChartRenderer: Send + Sync {
    /// Render `series` as a line chart into the element `target`
    fn line_chart(&self, target: &str, series: &ChartSeries) -> Node;
}

/// Canvas element with a `data-chart` JSON payload
#[derive(Debug, Clone, Default)]
pub struct CanvasChart;

impl ChartRenderer for CanvasChart {
    fn line_chart(&self, target: &str, series: &ChartSeries) -> Node {
        let payload = serde_json::json!({
            "type": "line",
            "labels": series.points.iter().map(|p| p.label.as_str()).collect::<Vec<_>>(),
            "datasets": [{
                "label": series.label,
                "data": series.points.iter().map(|p| p.value).collect::<Vec<_>>(),
            }],
        });

        el("canvas")
            .id(target)
            .attr("data-chart", payload.to_string())
            .into()
    }
}

/// Chart target without data, drawn later by the page script
pub fn chart_target(target: &str) -> Node {
    el("canvas").id(target).into()
}
