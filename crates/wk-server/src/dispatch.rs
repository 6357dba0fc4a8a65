//! Request dispatcher.
//!
//! Every non-static request is decoded into a [`Route`] and bound to one
//! action. Actions load or mutate pages through the [`Site`](wk_site::Site)
//! and hand a page view to the templates; the dispatcher never formats
//! output itself.
//!
//! | Path | Action |
//! |---|---|
//! | `/` | redirect to `/view/FrontPage` |
//! | `/view/<title>` | render `view.html`, or redirect to `/edit/<title>` if absent |
//! | `/edit/<title>` | render `edit.html`, with an empty page if absent; `/edit/` goes to `/create/` |
//! | `/save/<title?>` | store form `body`, redirect to `/view/<title>` |
//! | `/delete/<title>` | delete, redirect to `/` (front page refused) |
//! | `/admin` | render `admin.html` |
//! | `/create/` | render `create.html` |

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use wk_site::{Account, FRONT_PAGE, Page, PageView};

use crate::error::ServerError;
use crate::identity::parse_identity;
use crate::route::{Action, Route, RouteMatch, is_addressable_title};
use crate::state::AppState;

/// Handle any request not served as a static asset.
///
/// Store access and rendering are synchronous, so they run on the blocking pool.
pub(crate) async fn dispatch(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ServerError> {
    tokio::task::spawn_blocking(move || handle(&state, &uri, &headers, &body)).await?
}

fn handle(
    state: &AppState,
    uri: &Uri,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<Response, ServerError> {
    let route = match Route::decode(uri.path()) {
        RouteMatch::Matched(route) => route,
        RouteMatch::Unmatched => return Err(ServerError::RouteNotFound(uri.path().to_owned())),
    };
    let account = parse_identity(headers, &state.identity_header);
    tracing::debug!(action = ?route.action, title = %route.title, "Dispatching");

    match route.action {
        Action::Root => Ok(found(&format!("/view/{FRONT_PAGE}"))),
        Action::View => view(state, &route.title, account),
        Action::Edit => edit(state, route.title, account),
        Action::Save => save(state, route.title, SaveForm::parse(uri.query(), headers, body)),
        Action::Delete => delete(state, &route.title),
        Action::Admin => render_synthesized(
            state,
            "admin.html",
            Page::empty("Admin").with_account(account),
        ),
        Action::Create => render_synthesized(
            state,
            "create.html",
            Page::empty("Create New Page").with_account(account),
        ),
    }
}

fn view(state: &AppState, title: &str, account: Option<Account>) -> Result<Response, ServerError> {
    let Some(page) = state.site.load_page(title) else {
        return Ok(found(&format!("/edit/{title}")));
    };
    render_stored(state, "view.html", &page.with_account(account))
}

fn edit(state: &AppState, title: String, account: Option<Account>) -> Result<Response, ServerError> {
    if title.is_empty() {
        return Ok(found("/create/"));
    }
    let page = state
        .site
        .load_page(&title)
        .unwrap_or_else(|| Page::empty(title));
    render_stored(state, "edit.html", &page.with_account(account))
}

fn save(state: &AppState, path_title: String, form: SaveForm) -> Result<Response, ServerError> {
    let title = if path_title.is_empty() {
        // Form titles never passed the route pattern; hold them to it here.
        let title = form.title.unwrap_or_default();
        if !is_addressable_title(&title) {
            return Err(ServerError::InvalidTitle(title));
        }
        title
    } else {
        path_title
    };

    let page = Page::new(title, form.body.unwrap_or_default());
    state.site.save_page(&page)?;
    tracing::info!(title = %page.title, bytes = page.body.len(), "Saved page");

    Ok(found(&format!("/view/{}", page.title)))
}

fn delete(state: &AppState, title: &str) -> Result<Response, ServerError> {
    match state.site.delete_page(title) {
        Ok(()) => tracing::info!(title = %title, "Deleted page"),
        Err(e) if e.is_not_found() => {
            tracing::warn!(title = %title, "Delete of missing page");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(found("/"))
}

/// Render a page that exists (or may exist) in the store, with its siblings.
fn render_stored(state: &AppState, template: &str, page: &Page) -> Result<Response, ServerError> {
    render(state, template, &state.site.present(page))
}

/// Render a page that never touches the store.
fn render_synthesized(
    state: &AppState,
    template: &str,
    page: Page,
) -> Result<Response, ServerError> {
    render(state, template, &PageView::new(&page, Vec::new()))
}

fn render(state: &AppState, template: &str, view: &PageView) -> Result<Response, ServerError> {
    match &view.account {
        Some(account) => {
            tracing::debug!(account = %account.full_name, template = %template, "Rendering");
        }
        None => tracing::debug!(template = %template, "Rendering anonymously"),
    }
    let html = state.templates.render(template, view)?;
    Ok(Html(html).into_response())
}

/// 302 redirect.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_owned())]).into_response()
}

/// Fields submitted to `/save/`.
#[derive(Debug, Default, PartialEq, Eq)]
struct SaveForm {
    title: Option<String>,
    body: Option<String>,
}

impl SaveForm {
    /// Collect form fields from a urlencoded body, then the query string.
    ///
    /// The first occurrence of a field wins, so body values take precedence.
    /// Undecodable input contributes no fields.
    fn parse(query: Option<&str>, headers: &HeaderMap, body: &[u8]) -> Self {
        let mut form = Self::default();
        if is_urlencoded(headers) {
            form.merge(decode_pairs(body));
        }
        if let Some(query) = query {
            form.merge(decode_pairs(query.as_bytes()));
        }
        form
    }

    fn merge(&mut self, pairs: Vec<(String, String)>) {
        for (key, value) in pairs {
            match key.as_str() {
                "title" if self.title.is_none() => self.title = Some(value),
                "body" if self.body.is_none() => self.body = Some(value),
                _ => {}
            }
        }
    }
}

fn decode_pairs(raw: &[u8]) -> Vec<(String, String)> {
    serde_urlencoded::from_bytes(raw).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Ignoring undecodable form data");
        Vec::new()
    })
}

fn is_urlencoded(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|mime| {
            mime.trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}
