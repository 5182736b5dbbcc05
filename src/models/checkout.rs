//! Checked-out tool model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A tool currently out with a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CheckedOutItem {
    pub tool: String,
    pub user: String,
    pub due_date: String,
}
