//! Top-level dashboard pages

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One of the fixed top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Dashboard,
    Inventory,
    Maintenance,
    Checkout,
    Users,
    Reports,
    Settings,
}

impl Page {
    /// Navigation order
    pub const ALL: [Page; 7] = [
        Page::Dashboard,
        Page::Inventory,
        Page::Maintenance,
        Page::Checkout,
        Page::Users,
        Page::Reports,
        Page::Settings,
    ];

    /// Identifier used in `data-page` attributes and URLs
    pub fn as_str(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Inventory => "inventory",
            Page::Maintenance => "maintenance",
            Page::Checkout => "checkout",
            Page::Users => "users",
            Page::Reports => "reports",
            Page::Settings => "settings",
        }
    }

    /// Unknown identifiers yield `None`
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.as_str() == id)
    }

    /// DOM id of the page's view container
    pub fn container_id(self) -> String {
        format!("{}-page", self.as_str())
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Inventory => "Inventory",
            Page::Maintenance => "Maintenance",
            Page::Checkout => "Check Out/In",
            Page::Users => "Users",
            Page::Reports => "Reports",
            Page::Settings => "Settings",
        }
    }

    pub fn nav_icon(self) -> &'static str {
        match self {
            Page::Dashboard => "fa-tachometer-alt",
            Page::Inventory => "fa-boxes",
            Page::Maintenance => "fa-tools",
            Page::Checkout => "fa-exchange-alt",
            Page::Users => "fa-users",
            Page::Reports => "fa-chart-bar",
            Page::Settings => "fa-cog",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
