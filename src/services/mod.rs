//! Dashboard services

pub mod catalog;
pub mod dashboard;
pub mod modals;
pub mod navigation;
pub mod notifications;

use std::sync::Arc;

use crate::{
    config::AppConfig,
    repository::Repository,
    views::chart::{CanvasChart, ChartRenderer},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub dashboard: dashboard::DashboardService,
    pub navigation: navigation::NavigationService,
    pub modals: modals::ModalService,
    pub notifications: notifications::NotificationService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: &AppConfig) -> Self {
        Self::with_charts(repository, config, Arc::new(CanvasChart))
    }

    pub fn with_charts(
        repository: Repository,
        config: &AppConfig,
        charts: Arc<dyn ChartRenderer>,
    ) -> Self {
        let dashboard = dashboard::DashboardService::new(repository.clone(), charts);
        let shell = navigation::Shell::new(&navigation::ShellLayout::default(), dashboard.render());

        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            navigation: navigation::NavigationService::new(
                repository,
                Arc::new(config.ui.clone()),
                shell,
            ),
            modals: modals::ModalService::default(),
            notifications: notifications::NotificationService::new(&config.notifications),
            dashboard,
        }
    }
}
