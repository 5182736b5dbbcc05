//! Full document: sidebar, header, page containers, modal and toasts

use crate::{
    models::{Notification, NotificationPhase, Page},
    services::{modals::ModalOverlay, navigation::Shell},
};

use super::components::icon;
use super::html::{el, Element, Node};

pub const DOCTYPE: &str = "<!DOCTYPE html>";
pub const STYLESHEET_PATH: &str = "/assets/css/style.css";
pub const SCRIPT_PATH: &str = "/assets/js/dashboard.js";

/// Everything the document is rendered from
pub struct DocumentParts<'a> {
    pub title: &'a str,
    pub shell: &'a Shell,
    pub modal: Option<&'a ModalOverlay>,
    pub notifications: &'a [Notification],
}

pub fn document(parts: &DocumentParts<'_>) -> String {
    let html: Node = el("html")
        .attr("lang", "en")
        .child(head(parts.title))
        .child(
            el("body")
                .child(sidebar(parts.shell))
                .child(
                    el("div")
                        .class("main-content")
                        .child(header())
                        .child(el("main").class("pages").children(containers(parts.shell))),
                )
                .children(parts.modal.map(modal_overlay))
                .children(parts.notifications.iter().map(notification)),
        )
        .into();
    format!("{}{}", DOCTYPE, html.render())
}

fn head(title: &str) -> Element {
    el("head")
        .child(el("meta").attr("charset", "utf-8"))
        .child(
            el("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(el("title").text(title))
        .child(el("link").attr("rel", "stylesheet").attr("href", STYLESHEET_PATH))
        .child(el("script").attr("src", SCRIPT_PATH).flag("defer"))
}

fn sidebar(shell: &Shell) -> Element {
    let class = if shell.sidebar_open() { "sidebar open" } else { "sidebar" };
    el("nav").id("sidebar").class(class).child(
        el("ul").class("nav-list").children(shell.nav().iter().map(|item| {
            let class = if item.active { "nav-item active" } else { "nav-item" };
            el("li").class(class).child(
                el("a")
                    .class("nav-link")
                    .attr("href", page_href(item.page))
                    .attr("data-page", item.page.as_str())
                    .child(icon(item.page.nav_icon()))
                    .child(el("span").text(item.page.nav_label())),
            )
        })),
    )
}

/// Full-document address of a page; the script swaps in `/pages/{id}` instead
pub fn page_href(page: Page) -> String {
    format!("/?page={}", page)
}

fn header() -> Element {
    el("header")
        .class("top-bar")
        .child(
            el("button")
                .id("menuToggle")
                .class("menu-toggle")
                .child(icon("fa-bars")),
        )
        .child(
            el("input")
                .id("globalSearch")
                .attr("type", "search")
                .attr("placeholder", "Search tools..."),
        )
        .child(el("ul").id("searchResults").class("search-results"))
}

/// View containers; only the active one carries the `active` class
pub fn containers(shell: &Shell) -> Vec<Element> {
    shell
        .containers()
        .map(|container| {
            let class = if container.active { "page active" } else { "page" };
            el("section")
                .id(container.page.container_id())
                .class(class)
                .child(container.content.clone())
        })
        .collect()
}

pub fn modal_overlay(overlay: &ModalOverlay) -> Element {
    let class = if overlay.active {
        "modal-overlay active"
    } else {
        "modal-overlay"
    };
    el("div").id("modal-overlay").class(class).child(
        el("div")
            .class("modal")
            .child(
                el("div")
                    .class("modal-header")
                    .child(el("h3").class("modal-title").text(overlay.title.as_str()))
                    .child(el("button").class("modal-close").child(icon("fa-times"))),
            )
            .child(el("div").class("modal-body").child(overlay.body.clone()))
            .child(
                el("div")
                    .class("modal-footer")
                    .child(el("button").class("btn btn-secondary modal-cancel").text("Cancel"))
                    .child(
                        el("button")
                            .class("btn btn-primary modal-confirm")
                            .text(overlay.confirm_label.as_str()),
                    ),
            ),
    )
}

fn notification(notification: &Notification) -> Element {
    let mut class = format!("notification notification-{}", notification.level.as_str());
    if notification.phase == NotificationPhase::Shown {
        class.push_str(" show");
    }
    el("div")
        .class(class)
        .attr("data-id", notification.id.to_string())
        .text(notification.message.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationLevel;
    use crate::services::modals::ModalManager;
    use crate::services::navigation::ShellLayout;
    use crate::views::html::text;
    use crate::views::modals::ModalKind;
    use std::time::Instant;

    #[test]
    fn test_document_marks_active_page_and_overlay() {
        let shell = Shell::new(&ShellLayout::default(), text("hello dashboard"));
        let mut modals = ModalManager::new();
        modals.open_kind(ModalKind::FindTool);
        let toast = Notification::new(
            "Saved <ok>".to_string(),
            NotificationLevel::Success,
            Instant::now(),
        );

        let html = document(&DocumentParts {
            title: "Custom TMS",
            shell: &shell,
            modal: modals.overlay(),
            notifications: std::slice::from_ref(&toast),
        });

        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
        assert!(html.contains(
            r#"<section id="dashboard-page" class="page">hello dashboard</section>"#
        ));
        assert!(html.contains(r#"<div id="modal-overlay" class="modal-overlay active">"#));
        assert!(html.contains(r#"<h3 class="modal-title">Find Tool</h3>"#));
        assert!(html.contains("Saved &lt;ok&gt;"));
        assert_eq!(html.matches("class=\"nav-item\"").count(), Page::ALL.len());
        assert!(html.contains(
            r#"<a class="nav-link" href="/?page=inventory" data-page="inventory">"#
        ));
        assert!(html.contains(r#"<script src="/assets/js/dashboard.js" defer></script>"#));
    }
}
