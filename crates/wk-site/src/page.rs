//! Page and account types.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use wk_storage::FRONT_PAGE;

/// Requester identity supplied per request.
///
/// Never persisted. Every field is optional in the encoded form; missing
/// fields decode to empty values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Account {
    pub username: String,
    pub email: String,
    pub given_name: String,
    pub middle_name: String,
    pub surname: String,
    pub full_name: String,
    /// Role names.
    pub groups: Vec<String>,
}

/// A named unit of wiki content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// Page title, also its storage key.
    pub title: String,
    /// Raw body bytes (UTF-8 text in practice).
    pub body: Vec<u8>,
    /// Requester identity, attached only for rendering.
    pub account: Option<Account>,
}

impl Page {
    /// Create a page with a body.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            account: None,
        }
    }

    /// Create a page with an empty body.
    ///
    /// Used both for pages that do not exist yet and for title-only stubs in
    /// sibling listings.
    #[must_use]
    pub fn empty(title: impl Into<String>) -> Self {
        Self::new(title, Vec::new())
    }

    /// Attach the requester identity.
    #[must_use]
    pub fn with_account(mut self, account: Option<Account>) -> Self {
        self.account = account;
        self
    }

    /// Body decoded as text (lossy for invalid UTF-8).
    pub fn body_as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Body converted from Markdown to HTML, unsanitized.
    pub fn body_as_html(&self) -> String {
        wk_renderer::markdown(&self.body)
    }

    /// Check whether this is the reserved site root page.
    pub fn is_front_page(&self) -> bool {
        self.title == FRONT_PAGE
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_body_as_text() {
        let page = Page::new("MyPage", "Hello");

        assert_eq!(page.body_as_text(), "Hello");
    }

    #[test]
    fn test_body_as_html() {
        let page = Page::new("MyPage", "Hello *there*");

        assert_eq!(page.body_as_html(), "<p>Hello <em>there</em></p>\n");
    }

    #[test]
    fn test_is_front_page() {
        assert!(Page::empty("FrontPage").is_front_page());
        assert!(!Page::empty("frontpage").is_front_page());
        assert!(!Page::empty("Other").is_front_page());
    }

    #[test]
    fn test_empty_page_has_no_body_or_account() {
        let page = Page::empty("New");

        assert!(page.body.is_empty());
        assert!(page.account.is_none());
    }

    #[test]
    fn test_account_decodes_camel_case() {
        let json = r#"{
            "username": "jdoe",
            "email": "jdoe@example.com",
            "givenName": "Jane",
            "middleName": "Q",
            "surname": "Doe",
            "fullName": "Jane Q Doe",
            "groups": ["editors", "admins"]
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();

        assert_eq!(
            account,
            Account {
                username: "jdoe".to_owned(),
                email: "jdoe@example.com".to_owned(),
                given_name: "Jane".to_owned(),
                middle_name: "Q".to_owned(),
                surname: "Doe".to_owned(),
                full_name: "Jane Q Doe".to_owned(),
                groups: vec!["editors".to_owned(), "admins".to_owned()],
            }
        );
    }

    #[test]
    fn test_account_missing_fields_default() {
        let account: Account = serde_json::from_str(r#"{"username": "jdoe"}"#).unwrap();

        assert_eq!(account.username, "jdoe");
        assert!(account.full_name.is_empty());
        assert!(account.groups.is_empty());
    }
}
