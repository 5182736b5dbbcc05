//! Activity feed records

use std::sync::Arc;

use crate::models::{RecentActivityEvent, SampleData};

#[derive(Clone)]
pub struct RecordsRepository {
    data: Arc<SampleData>,
}

impl RecordsRepository {
    pub fn new(data: Arc<SampleData>) -> Self {
        Self { data }
    }

    pub fn recent_activity(&self) -> &[RecentActivityEvent] {
        &self.data.recent_activity
    }
}
