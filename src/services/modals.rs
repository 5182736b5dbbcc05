//! Shared modal overlay

use std::sync::{Arc, Mutex, PoisonError};

use crate::views::{
    html::{empty, Node},
    modals::{ModalKind, ModalTemplate, QuickAction, DEFAULT_CONFIRM_LABEL},
};

/// The single dialog surface. Opening replaces whatever was shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalOverlay {
    pub active: bool,
    pub kind: Option<ModalKind>,
    pub title: String,
    pub body: Node,
    pub confirm_label: String,
}

impl Default for ModalOverlay {
    fn default() -> Self {
        Self {
            active: false,
            kind: None,
            title: String::new(),
            body: empty(),
            confirm_label: DEFAULT_CONFIRM_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModalManager {
    overlay: Option<ModalOverlay>,
}

impl Default for ModalManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalManager {
    pub fn new() -> Self {
        Self {
            overlay: Some(ModalOverlay::default()),
        }
    }

    /// Manager for a document without an overlay; every call is a no-op
    #[cfg(test)]
    pub fn detached() -> Self {
        Self { overlay: None }
    }

    pub fn open(&mut self, kind: Option<ModalKind>, template: ModalTemplate) -> bool {
        let Some(overlay) = self.overlay.as_mut() else {
            return false;
        };
        overlay.kind = kind;
        overlay.title = template.title;
        overlay.body = template.body;
        overlay.confirm_label = template.confirm_label;
        overlay.active = true;
        true
    }

    pub fn open_kind(&mut self, kind: ModalKind) -> bool {
        self.open(Some(kind), kind.template())
    }

    pub fn close(&mut self) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.active = false;
        }
    }

    pub fn is_open(&self) -> bool {
        self.overlay.as_ref().is_some_and(|overlay| overlay.active)
    }

    pub fn overlay(&self) -> Option<&ModalOverlay> {
        self.overlay.as_ref()
    }
}

#[derive(Clone, Default)]
pub struct ModalService {
    manager: Arc<Mutex<ModalManager>>,
}

impl ModalService {
    /// Open `kind` and return the overlay as now shown
    pub fn open(&self, kind: ModalKind) -> Option<ModalOverlay> {
        let mut manager = self.lock();
        manager.open_kind(kind);
        tracing::debug!(modal = kind.as_str(), "Modal opened");
        manager.overlay().cloned()
    }

    /// Dashboard shortcut by its button label
    pub fn quick_action(&self, label: &str) -> Option<ModalOverlay> {
        tracing::info!(action = label, "Quick action");
        match QuickAction::from_label(label) {
            Some(action) => self.open(action.modal()),
            None => {
                tracing::debug!(action = label, "No modal bound to quick action");
                None
            }
        }
    }

    pub fn close(&self) {
        self.lock().close();
    }

    /// Forms are display-only, confirming only dismisses the dialog
    pub fn confirm(&self) {
        let mut manager = self.lock();
        if let Some(kind) = manager.overlay().and_then(|overlay| overlay.kind) {
            tracing::info!(modal = kind.as_str(), "Modal confirmed");
        }
        manager.close();
    }

    pub fn snapshot(&self) -> Option<ModalOverlay> {
        self.lock().overlay().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ModalManager> {
        self.manager.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_after_any_modal() {
        for kind in ModalKind::ALL {
            let mut manager = ModalManager::new();
            assert!(manager.open_kind(kind));
            assert!(manager.is_open());
            manager.close();
            assert!(!manager.is_open());
        }
    }

    #[test]
    fn test_second_open_replaces_first() {
        let mut manager = ModalManager::new();
        manager.open_kind(ModalKind::AddTool);
        manager.open_kind(ModalKind::AddUser);

        let overlay = manager.overlay().unwrap();
        assert!(overlay.active);
        assert_eq!(overlay.kind, Some(ModalKind::AddUser));
        assert_eq!(overlay.title, "Add New User");
        assert_eq!(overlay.confirm_label, "Add User");
        assert!(!overlay.body.render().contains("Tool Name"));
    }

    #[test]
    fn test_detached_manager_is_noop() {
        let mut manager = ModalManager::detached();
        assert!(!manager.open_kind(ModalKind::FindTool));
        manager.close();
        assert!(!manager.is_open());
        assert!(manager.overlay().is_none());
    }

    #[test]
    fn test_default_confirm_label() {
        let manager = ModalManager::new();
        assert_eq!(manager.overlay().unwrap().confirm_label, "Confirm");
    }

    #[test]
    fn test_service_quick_action_and_confirm() {
        let service = ModalService::default();
        let overlay = service.quick_action("Schedule Maintenance").unwrap();
        assert_eq!(overlay.kind, Some(ModalKind::ScheduleMaintenance));
        assert_eq!(overlay.confirm_label, "Schedule");

        assert!(service.quick_action("Order Pizza").is_none());
        assert!(service.snapshot().unwrap().active);

        service.confirm();
        assert!(!service.snapshot().unwrap().active);
    }
}
