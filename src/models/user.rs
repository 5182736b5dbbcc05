//! User model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub name: String,
    pub role: String,
    pub department: String,
    /// Illustrative count, not derived from checkouts
    pub tools_checked_out: u32,
    /// Active since (ISO date)
    pub active_date: String,
}
