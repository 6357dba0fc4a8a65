//! Request path decoding.
//!
//! Maps a request path to an [`Action`] and page title. Paths that do not
//! decode are answered with 404 and never reach the store.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

/// Named wiki actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `/`: redirect to the front page.
    Root,
    /// `/view/<title>`
    View,
    /// `/edit/<title>`
    Edit,
    /// `/save/<title?>`
    Save,
    /// `/delete/<title>`
    Delete,
    /// `/admin` or `/admin/<title>`
    Admin,
    /// `/create/`
    Create,
}

impl Action {
    /// Actions addressed as `/<name>/<title>`.
    pub const TITLED: [Self; 5] = [Self::View, Self::Edit, Self::Save, Self::Delete, Self::Admin];

    /// Path segment naming this action.
    pub fn name(self) -> &'static str {
        match self {
            Self::Root => "",
            Self::View => "view",
            Self::Edit => "edit",
            Self::Save => "save",
            Self::Delete => "delete",
            Self::Admin => "admin",
            Self::Create => "create",
        }
    }

    fn titled_from_name(name: &str) -> Option<Self> {
        Self::TITLED.into_iter().find(|action| action.name() == name)
    }
}

/// Pattern for `/<titled action>/<title>`, built from [`Action::TITLED`].
static TITLED_PATH: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = Action::TITLED
        .iter()
        .map(|action| action.name())
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("^/({alternation})/([A-Za-z0-9_]*)$"))
        .expect("titled path pattern is valid")
});

/// Pattern a complete page title must match to be addressable by path.
static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z0-9_]+$").expect("title pattern is valid"));

/// Decoded request route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub action: Action,
    /// Page title from the path; may be empty (e.g. `/save/`).
    pub title: String,
}

/// Result of decoding a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    Matched(Route),
    Unmatched,
}

impl Route {
    fn new(action: Action, title: impl Into<String>) -> Self {
        Self {
            action,
            title: title.into(),
        }
    }

    /// Decode a raw (percent-encoded) request path.
    pub fn decode(raw_path: &str) -> RouteMatch {
        let Ok(path) = percent_decode_str(raw_path).decode_utf8() else {
            return RouteMatch::Unmatched;
        };

        match path.as_ref() {
            "/" => return RouteMatch::Matched(Self::new(Action::Root, "")),
            "/admin" => return RouteMatch::Matched(Self::new(Action::Admin, "")),
            "/create/" => return RouteMatch::Matched(Self::new(Action::Create, "")),
            _ => {}
        }

        let Some(caps) = TITLED_PATH.captures(&path) else {
            return RouteMatch::Unmatched;
        };
        match Action::titled_from_name(&caps[1]) {
            Some(action) => RouteMatch::Matched(Self::new(action, &caps[2])),
            None => RouteMatch::Unmatched,
        }
    }
}

/// Check whether a title could be addressed as a path segment.
pub fn is_addressable_title(title: &str) -> bool {
    TITLE.is_match(title)
}
