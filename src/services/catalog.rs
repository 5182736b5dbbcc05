//! Read-only access to the sample data

use crate::{
    models::{SampleData, Tool},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn sample_data(&self) -> SampleData {
        self.repository.data.as_ref().clone()
    }

    pub fn tool_count(&self) -> usize {
        self.repository.tools.list().len()
    }

    pub fn get_tool(&self, id: &str) -> Option<Tool> {
        self.repository.tools.get_by_id(id).cloned()
    }

    /// Global search over the tool inventory
    pub fn search(&self, query: &str) -> Vec<Tool> {
        let query = query.trim();
        let tools = self.repository.tools.search(query);
        tracing::info!(query, hits = tools.len(), "Global search");
        tools
    }
}
