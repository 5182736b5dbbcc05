//! Custom TMS - Tooling Management System
//!
//! Server-rendered dashboard for a tool crib: inventory, maintenance,
//! check-out, users, reports and settings pages over a fixed sample data
//! set, plus a small JSON API exposing the same state.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application context shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the context over freshly generated sample data
    pub fn new(config: AppConfig) -> Self {
        let services = services::Services::new(repository::Repository::sample(), &config);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
