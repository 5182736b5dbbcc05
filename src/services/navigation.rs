//! Page routing over the dashboard shell
//!
//! The shell mirrors the document structure the dashboard expects: a list of
//! navigation entries and one view container per page. Either may be absent
//! for a given page, in which case the corresponding step is skipped.

use std::sync::{Arc, Mutex, PoisonError};

use indexmap::IndexMap;

use crate::{
    config::UiConfig,
    models::Page,
    repository::Repository,
    views::{
        html::{empty, Node},
        pages::{self, PageContext},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewContainer {
    pub page: Page,
    pub active: bool,
    pub content: Node,
}

/// Which navigation entries and containers exist in the document
#[derive(Debug, Clone)]
pub struct ShellLayout {
    pub nav: Vec<Page>,
    pub containers: Vec<Page>,
}

impl Default for ShellLayout {
    fn default() -> Self {
        Self {
            nav: Page::ALL.to_vec(),
            containers: Page::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Shell {
    nav: Vec<NavItem>,
    containers: IndexMap<Page, ViewContainer>,
    current_page: Page,
    sidebar_open: bool,
}

impl Shell {
    /// Build the shell with the static dashboard markup in place.
    /// Nothing is active until the first navigation.
    pub fn new(layout: &ShellLayout, dashboard: Node) -> Self {
        let nav = layout
            .nav
            .iter()
            .map(|&page| NavItem { page, active: false })
            .collect();

        let containers = layout
            .containers
            .iter()
            .map(|&page| {
                let content = if page == Page::Dashboard {
                    dashboard.clone()
                } else {
                    empty()
                };
                (
                    page,
                    ViewContainer {
                        page,
                        active: false,
                        content,
                    },
                )
            })
            .collect();

        Self {
            nav,
            containers,
            current_page: Page::Dashboard,
            sidebar_open: false,
        }
    }

    /// Route by raw identifier. Unknown identifiers deactivate everything and
    /// leave the current page untouched.
    pub fn navigate_to(&mut self, page_id: &str, ctx: PageContext<'_>) -> Option<Page> {
        match Page::from_id(page_id) {
            Some(page) => {
                self.navigate(page, ctx);
                Some(page)
            }
            None => {
                tracing::debug!(page_id, "Ignoring unknown page");
                self.deactivate_all();
                None
            }
        }
    }

    /// Activate `page` and run its content loader.
    /// Returns whether a container was shown.
    pub fn navigate(&mut self, page: Page, ctx: PageContext<'_>) -> bool {
        self.deactivate_all();

        if let Some(item) = self.nav.iter_mut().find(|item| item.page == page) {
            item.active = true;
        }

        let shown = match self.containers.get_mut(&page) {
            Some(container) => {
                container.active = true;
                if let Some(content) = pages::load(page, ctx) {
                    container.content = content;
                }
                true
            }
            None => false,
        };

        if shown {
            self.current_page = page;
        }

        tracing::debug!(page = %page, shown, "Page loaded");
        shown
    }

    fn deactivate_all(&mut self) {
        self.nav.iter_mut().for_each(|item| item.active = false);
        self.containers
            .values_mut()
            .for_each(|container| container.active = false);
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn nav(&self) -> &[NavItem] {
        &self.nav
    }

    pub fn containers(&self) -> impl Iterator<Item = &ViewContainer> {
        self.containers.values()
    }

    pub fn container(&self, page: Page) -> Option<&ViewContainer> {
        self.containers.get(&page)
    }

    pub fn active_containers(&self) -> Vec<Page> {
        self.containers().filter(|c| c.active).map(|c| c.page).collect()
    }

    pub fn active_nav(&self) -> Vec<Page> {
        self.nav.iter().filter(|n| n.active).map(|n| n.page).collect()
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}

/// Shared router state plus the inputs the loaders read
#[derive(Clone)]
pub struct NavigationService {
    shell: Arc<Mutex<Shell>>,
    repository: Repository,
    ui: Arc<UiConfig>,
}

impl NavigationService {
    pub fn new(repository: Repository, ui: Arc<UiConfig>, mut shell: Shell) -> Self {
        shell.navigate(
            Page::Dashboard,
            PageContext {
                data: &repository.data,
                ui: &ui,
            },
        );
        Self {
            shell: Arc::new(Mutex::new(shell)),
            repository,
            ui,
        }
    }

    /// Navigate and return the shown container's content
    pub fn load_page(&self, page_id: &str) -> Option<(Page, Node)> {
        let ctx = PageContext {
            data: &self.repository.data,
            ui: &self.ui,
        };
        let mut shell = self.lock();
        let page = shell.navigate_to(page_id, ctx)?;
        shell
            .container(page)
            .filter(|container| container.active)
            .map(|container| (page, container.content.clone()))
    }

    pub fn toggle_sidebar(&self) -> bool {
        self.lock().toggle_sidebar()
    }

    pub fn close_sidebar(&self) {
        self.lock().close_sidebar()
    }

    /// Run `f` against the current shell
    pub fn with_shell<T>(&self, f: impl FnOnce(&Shell) -> T) -> T {
        f(&*self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Shell> {
        self.shell.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SampleData;
    use crate::views::html::text;

    fn fixture() -> (SampleData, UiConfig) {
        (SampleData::generate(), UiConfig::default())
    }

    fn shell() -> Shell {
        Shell::new(&ShellLayout::default(), text("static dashboard"))
    }

    #[test]
    fn test_every_page_activates_exactly_one() {
        let (data, ui) = fixture();
        let ctx = PageContext { data: &data, ui: &ui };
        let mut shell = shell();

        for page in Page::ALL {
            assert_eq!(shell.navigate_to(page.as_str(), ctx), Some(page));
            assert_eq!(shell.active_containers(), vec![page]);
            assert_eq!(shell.active_nav(), vec![page]);
            assert_eq!(shell.current_page(), page);
        }
    }

    #[test]
    fn test_unknown_page_clears_everything() {
        let (data, ui) = fixture();
        let ctx = PageContext { data: &data, ui: &ui };
        let mut shell = shell();

        shell.navigate(Page::Users, ctx);
        assert_eq!(shell.navigate_to("billing", ctx), None);
        assert!(shell.active_containers().is_empty());
        assert!(shell.active_nav().is_empty());
        assert_eq!(shell.current_page(), Page::Users);
    }

    #[test]
    fn test_dashboard_keeps_static_content() {
        let (data, ui) = fixture();
        let ctx = PageContext { data: &data, ui: &ui };
        let mut shell = shell();

        shell.navigate(Page::Inventory, ctx);
        shell.navigate(Page::Dashboard, ctx);
        let dashboard = shell.container(Page::Dashboard).unwrap();
        assert!(dashboard.active);
        assert_eq!(dashboard.content.render(), "static dashboard");
    }

    #[test]
    fn test_reloading_inventory_is_byte_identical() {
        let (data, ui) = fixture();
        let ctx = PageContext { data: &data, ui: &ui };
        let mut shell = shell();

        shell.navigate(Page::Inventory, ctx);
        let first = shell.container(Page::Inventory).unwrap().content.render();
        shell.navigate(Page::Inventory, ctx);
        let second = shell.container(Page::Inventory).unwrap().content.render();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_container_is_skipped() {
        let (data, ui) = fixture();
        let ctx = PageContext { data: &data, ui: &ui };
        let layout = ShellLayout {
            nav: Page::ALL.to_vec(),
            containers: vec![Page::Dashboard, Page::Inventory],
        };
        let mut shell = Shell::new(&layout, empty());

        shell.navigate(Page::Inventory, ctx);
        assert!(!shell.navigate(Page::Reports, ctx));
        assert!(shell.active_containers().is_empty());
        assert_eq!(shell.active_nav(), vec![Page::Reports]);
        assert_eq!(shell.current_page(), Page::Inventory);
    }

    #[test]
    fn test_sidebar_toggle() {
        let mut shell = shell();
        assert!(shell.toggle_sidebar());
        assert!(!shell.toggle_sidebar());
        shell.toggle_sidebar();
        shell.close_sidebar();
        assert!(!shell.sidebar_open());
    }

    #[test]
    fn test_service_load_page() {
        let service = NavigationService::new(
            Repository::sample(),
            Arc::new(UiConfig::default()),
            shell(),
        );
        assert_eq!(service.with_shell(|s| s.active_containers()), vec![Page::Dashboard]);

        let (page, content) = service.load_page("users").unwrap();
        assert_eq!(page, Page::Users);
        assert!(content.render().contains("David Brown"));
        assert!(service.load_page("nowhere").is_none());
        assert_eq!(service.with_shell(|s| s.current_page()), Page::Users);
    }
}
