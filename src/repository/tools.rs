//! Tool inventory queries

use std::sync::Arc;

use crate::models::{SampleData, Tool, ToolStatus};

#[derive(Clone)]
pub struct ToolsRepository {
    data: Arc<SampleData>,
}

impl ToolsRepository {
    pub fn new(data: Arc<SampleData>) -> Self {
        Self { data }
    }

    pub fn list(&self) -> &[Tool] {
        &self.data.tools
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Tool> {
        self.data.tools.iter().find(|tool| tool.id == id)
    }

    /// Tools whose id, name or category contain the query
    pub fn search(&self, query: &str) -> Vec<Tool> {
        self.data
            .tools
            .iter()
            .filter(|tool| tool.matches(query))
            .cloned()
            .collect()
    }

    pub fn count_by_status(&self, status: ToolStatus) -> usize {
        self.data.tools.iter().filter(|tool| tool.status == status).count()
    }
}
