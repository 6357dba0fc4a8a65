//! Markdown to HTML conversion.

use pulldown_cmark::{Options, Parser, html};

/// Extensions enabled for page bodies.
fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES
        | Options::ENABLE_DEFINITION_LIST
}

/// Convert a raw page body to HTML.
///
/// Invalid UTF-8 is decoded lossily. The output is not sanitized: raw HTML in
/// the body passes through unchanged.
pub fn markdown(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let parser = Parser::new_ext(&text, options());

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
