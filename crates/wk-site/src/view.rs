//! Template context for pages.

use serde::Serialize;

use crate::page::{Account, Page};

/// Sibling page entry (title only).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub title: String,
}

/// Derived views of a page, as seen by templates.
#[derive(Clone, Debug, Serialize)]
pub struct PageView {
    /// Page title.
    pub title: String,
    /// Raw body as text.
    pub body: String,
    /// Body rendered from Markdown.
    pub body_html: String,
    /// True for the reserved site root page.
    pub is_front_page: bool,
    /// All stored pages, in store order.
    pub other_pages: Vec<PageSummary>,
    /// Requester identity, if any.
    pub account: Option<Account>,
}

impl PageView {
    /// Build the view of `page` with its sibling stubs.
    pub fn new(page: &Page, siblings: Vec<Page>) -> Self {
        Self {
            title: page.title.clone(),
            body: page.body_as_text().into_owned(),
            body_html: page.body_as_html(),
            is_front_page: page.is_front_page(),
            other_pages: siblings
                .into_iter()
                .map(|p| PageSummary { title: p.title })
                .collect(),
            account: page.account.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_page_view_fields() {
        let page = Page::new("MyPage", "# Hi").with_account(Some(Account {
            full_name: "Jane Doe".to_owned(),
            ..Default::default()
        }));

        let view = PageView::new(&page, vec![Page::empty("MyPage"), Page::empty("Other")]);

        assert_eq!(view.title, "MyPage");
        assert_eq!(view.body, "# Hi");
        assert_eq!(view.body_html, "<h1>Hi</h1>\n");
        assert!(!view.is_front_page);
        assert_eq!(
            view.other_pages,
            vec![
                PageSummary {
                    title: "MyPage".to_owned()
                },
                PageSummary {
                    title: "Other".to_owned()
                },
            ]
        );
        assert_eq!(view.account.unwrap().full_name, "Jane Doe");
    }

    #[test]
    fn test_page_view_serialization() {
        let page = Page::new("FrontPage", "Welcome");

        let json = serde_json::to_value(PageView::new(&page, Vec::new())).unwrap();

        assert_eq!(json["title"], "FrontPage");
        assert_eq!(json["body"], "Welcome");
        assert_eq!(json["body_html"], "<p>Welcome</p>\n");
        assert_eq!(json["is_front_page"], true);
        assert!(json["other_pages"].as_array().unwrap().is_empty());
        assert!(json["account"].is_null());
    }

    #[test]
    fn test_page_view_account_serializes_camel_case() {
        let page = Page::empty("Admin").with_account(Some(Account {
            full_name: "Jane Doe".to_owned(),
            groups: vec!["admins".to_owned()],
            ..Default::default()
        }));

        let json = serde_json::to_value(PageView::new(&page, Vec::new())).unwrap();

        assert_eq!(json["account"]["fullName"], "Jane Doe");
        assert_eq!(json["account"]["groups"][0], "admins");
    }
}
