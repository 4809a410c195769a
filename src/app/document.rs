//! The page document: current markup, location and preview modal
//!
//! Containers and the router write whole pages into the document; tests and
//! callers query it the way a user would see it (text, `data-testid`
//! elements, classes).

use crate::app::routes::RoutePath;
use crate::config::UiConfig;
use regex::Regex;
use std::sync::{OnceLock, PoisonError, RwLock};

/// The receipt preview modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub file_url: String,
    pub image_width: u32,
}

impl Modal {
    /// Markup shown inside the modal body
    pub fn body(&self) -> String {
        format!(
            r#"<div style="text-align: center;" class="bill-proof-container"><img width="{}" src="{}" alt="Bill" /></div>"#,
            self.image_width,
            escape_attribute(&self.file_url)
        )
    }
}

/// An eye icon of the bills list, carrying its receipt URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EyeIcon {
    pub bill_url: String,
}

#[derive(Debug, Default)]
struct DocumentState {
    body: String,
    location: Option<RoutePath>,
    history: Vec<RoutePath>,
    modal: Option<Modal>,
}

/// Shared page document
#[derive(Debug, Default)]
pub struct Document {
    state: RwLock<DocumentState>,
    ui: UiConfig,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ui(ui: UiConfig) -> Self {
        Self {
            state: RwLock::default(),
            ui,
        }
    }

    /// Document holding `html` as its body
    pub fn with_body(html: impl Into<String>) -> Self {
        let document = Self::new();
        document.set_body(html);
        document
    }

    pub fn ui(&self) -> &UiConfig {
        &self.ui
    }

    pub fn body(&self) -> String {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .body
            .clone()
    }

    /// Replace the page; an open modal belongs to the old page and closes
    pub fn set_body(&self, html: impl Into<String>) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.body = html.into();
        state.modal = None;
    }

    pub fn location(&self) -> Option<RoutePath> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .location
    }

    /// Every location visited, oldest first
    pub fn history(&self) -> Vec<RoutePath> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .history
            .clone()
    }

    pub fn push_location(&self, path: RoutePath) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.location = Some(path);
        state.history.push(path);
    }

    pub fn show_modal(&self, modal: Modal) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .modal = Some(modal);
    }

    pub fn hide_modal(&self) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .modal = None;
    }

    pub fn modal(&self) -> Option<Modal> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .modal
            .clone()
    }

    pub fn is_modal_shown(&self) -> bool {
        self.modal().is_some()
    }

    /// Visible text of the page, tags removed and whitespace collapsed
    pub fn text_content(&self) -> String {
        static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
        static SPACE_REGEX: OnceLock<Regex> = OnceLock::new();
        let tags = TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]+>").unwrap());
        let spaces = SPACE_REGEX.get_or_init(|| Regex::new(r"\s+").unwrap());

        let body = self.body();
        let text = tags.replace_all(&body, " ");
        let text = unescape_html(&text);
        spaces.replace_all(&text, " ").trim().to_string()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.text_content().contains(needle)
    }

    pub fn has_test_id(&self, test_id: &str) -> bool {
        self.body()
            .contains(&format!("data-testid=\"{}\"", test_id))
    }

    /// Text directly inside the first element with `test_id`
    pub fn text_by_test_id(&self, test_id: &str) -> Option<String> {
        static TEXT_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = TEXT_REGEX.get_or_init(|| {
            Regex::new(r#"<[^>]*\bdata-testid="([^"]*)"[^>]*>([^<]*)"#).unwrap()
        });

        let body = self.body();
        regex
            .captures_iter(&body)
            .find(|caps| &caps[1] == test_id)
            .map(|caps| unescape_html(caps[2].trim()))
    }

    /// Classes of the first element with `test_id`
    pub fn classes_by_test_id(&self, test_id: &str) -> Vec<String> {
        static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
        static CLASS_REGEX: OnceLock<Regex> = OnceLock::new();
        let tag_regex =
            TAG_REGEX.get_or_init(|| Regex::new(r#"<[^>]*\bdata-testid="([^"]*)"[^>]*>"#).unwrap());
        let class_regex = CLASS_REGEX.get_or_init(|| Regex::new(r#"\bclass="([^"]*)""#).unwrap());

        let body = self.body();
        tag_regex
            .captures_iter(&body)
            .find(|caps| &caps[1] == test_id)
            .and_then(|caps| class_regex.captures(caps.get(0)?.as_str()))
            .map(|caps| caps[1].split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, test_id: &str, class: &str) -> bool {
        self.classes_by_test_id(test_id).iter().any(|c| c == class)
    }

    /// All eye icons of the page, in page order
    pub fn eye_icons(&self) -> Vec<EyeIcon> {
        static EYE_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EYE_REGEX.get_or_init(|| {
            Regex::new(r#"data-testid="icon-eye"[^>]*\bdata-bill-url="([^"]*)""#).unwrap()
        });

        let body = self.body();
        regex
            .captures_iter(&body)
            .map(|caps| EyeIcon {
                bill_url: unescape_html(&caps[1]),
            })
            .collect()
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Undo the entity escaping applied by the templates
pub fn unescape_html(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&#x2F;", "/")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<div data-testid="icon-window" class="active-icon">W</div>
<div data-testid="icon-mail">M</div>
<span class="file-error" data-testid="file-error">Seuls les fichiers jpg, jpeg et png sont autoris&#x27;s.</span>
<div id="eye" data-testid="icon-eye" data-bill-url="https:&#x2F;&#x2F;host&#x2F;a.jpg?x=1&amp;y=2">E</div>
<div id="eye" data-testid="icon-eye" data-bill-url="https:&#x2F;&#x2F;host&#x2F;b.jpg">E</div>"#;

    #[test]
    fn test_classes_by_test_id() {
        let document = Document::with_body(PAGE);
        assert!(document.has_class("icon-window", "active-icon"));
        assert!(!document.has_class("icon-mail", "active-icon"));
        assert!(document.classes_by_test_id("missing").is_empty());
    }

    #[test]
    fn test_text_by_test_id() {
        let document = Document::with_body(PAGE);
        assert_eq!(
            document.text_by_test_id("file-error").as_deref(),
            Some("Seuls les fichiers jpg, jpeg et png sont autoris's.")
        );
        assert_eq!(document.text_by_test_id("missing"), None);
    }

    #[test]
    fn test_queries_find_nested_test_ids() {
        let document = Document::with_body(
            r#"<form data-testid="outer"><span data-testid="inner" class="a b">x</span></form>"#,
        );

        for _ in 0..2 {
            assert_eq!(document.text_by_test_id("outer").as_deref(), Some(""));
            assert_eq!(document.text_by_test_id("inner").as_deref(), Some("x"));
            assert_eq!(document.classes_by_test_id("inner"), vec!["a", "b"]);
            assert!(document.classes_by_test_id("outer").is_empty());
        }
    }

    #[test]
    fn test_eye_icons_are_unescaped() {
        let document = Document::with_body(PAGE);
        let icons = document.eye_icons();
        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0].bill_url, "https://host/a.jpg?x=1&y=2");
        assert_eq!(icons[1].bill_url, "https://host/b.jpg");
    }

    #[test]
    fn test_text_content() {
        let document = Document::with_body("<div>\n  <b>Mes</b> notes   de frais</div>");
        assert_eq!(document.text_content(), "Mes notes de frais");
        assert!(document.has_text("notes de frais"));
    }

    #[test]
    fn test_new_body_closes_modal() {
        let document = Document::new();
        document.show_modal(Modal {
            file_url: "https://host/a.jpg".into(),
            image_width: 400,
        });
        assert!(document.is_modal_shown());

        document.set_body("<p>other page</p>");
        assert!(!document.is_modal_shown());
    }

    #[test]
    fn test_modal_body_escapes_url() {
        let modal = Modal {
            file_url: "https://host/a.jpg?x=\"1\"".into(),
            image_width: 400,
        };
        assert!(modal.body().contains(r#"src="https://host/a.jpg?x=&quot;1&quot;""#));
        assert!(modal.body().contains(r#"width="400""#));
    }

    #[test]
    fn test_history() {
        let document = Document::new();
        document.push_location(RoutePath::Bills);
        document.push_location(RoutePath::NewBill);
        assert_eq!(document.location(), Some(RoutePath::NewBill));
        assert_eq!(document.history(), vec![RoutePath::Bills, RoutePath::NewBill]);
    }
}
