//! Repository layer over the in-memory sample data

pub mod records;
pub mod tools;

use std::sync::Arc;

use crate::models::SampleData;

/// Main repository struct holding the immutable sample data
#[derive(Clone)]
pub struct Repository {
    pub data: Arc<SampleData>,
    pub tools: tools::ToolsRepository,
    pub records: records::RecordsRepository,
}

impl Repository {
    /// Create a new repository over the given data set
    pub fn new(data: SampleData) -> Self {
        let data = Arc::new(data);
        Self {
            tools: tools::ToolsRepository::new(data.clone()),
            records: records::RecordsRepository::new(data.clone()),
            data,
        }
    }

    /// Repository over freshly generated sample data
    pub fn sample() -> Self {
        Self::new(SampleData::generate())
    }
}
