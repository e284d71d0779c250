//! Markdown rendering.
//!
//! Thin wrapper around `pulldown-cmark` that pins the extension set and
//! the line break behavior in one place. The output is an HTML fragment;
//! the surrounding document shell comes from the page templates.

use pulldown_cmark::{Event, Options, Parser, html};

/// Renders Markdown source to an HTML fragment.
///
/// Tables, strikethrough, task lists and footnotes are enabled, and a
/// single newline inside a paragraph renders as a line break instead of
/// collapsing into the previous line.
pub fn render(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 2);
    html::push_html(&mut out, parser);
    out
}
