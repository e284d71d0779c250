//! HTML page rendering.
//!
//! Projects the structs from [`model`](crate::model) into markup using
//! [maud](https://maud.lambda.xyz/). Templates are type-safe Rust code
//! with automatic XSS escaping; the only raw HTML that passes through is
//! the already rendered Markdown body of a document page.
//!
//! Two page kinds exist:
//!
//! - **Index page**: site header with aggregate stats, then one section
//!   of document cards per folder group.
//! - **Document page**: breadcrumb back to the index, a sidebar listing
//!   every document (grouped as on the index, current entry marked) and
//!   the document body.
//!
//! All pages land flat in one output directory, so every href is a bare
//! filename and each page links the shared stylesheet by name.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::model::{Card, DocumentPage, SiteModel};

/// Filename of the shared stylesheet, as linked from every page. The
/// emitter writes the file under the same name.
pub const STYLESHEET_HREF: &str = "style.css";

/// Renders the base HTML document structure
fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(STYLESHEET_HREF);
            }
            body {
                (content)
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the index page with the grouped document cards
pub fn render_index(model: &SiteModel) -> Markup {
    let content = html! {
        header.site-header {
            h1.site-title { (model.site_title) }
            p.site-stats {
                (model.stats.document_count) " documents in "
                (model.stats.group_count) " groups"
                @if let Some(updated) = &model.stats.last_updated {
                    " · updated " (updated)
                }
            }
        }
        main.index-page {
            @if model.sections.is_empty() {
                p.empty-note { "No documents found." }
            }
            @for section in &model.sections {
                section.doc-group {
                    h2.group-label { (section.label) }
                    div.card-grid {
                        @for card in &section.cards {
                            (render_card(card))
                        }
                    }
                }
            }
        }
    };

    base_document(&model.site_title, content)
}

/// Renders a single document card on the index page
fn render_card(card: &Card) -> Markup {
    html! {
        a.doc-card href=(card.href) {
            span.card-title { (card.title) }
            @if !card.description.is_empty() {
                span.card-description { (card.description) }
            }
            span.card-meta { (card.modified) " · " (card.size) }
        }
    }
}

/// Renders a document page: breadcrumb, sidebar and body
pub fn render_document(model: &SiteModel, page: &DocumentPage) -> Markup {
    let current_href = format!("{}.html", page.output_id);

    let content = html! {
        header.site-header {
            nav.breadcrumb {
                a href="index.html" { (model.site_title) }
                @if let Some(segments) = &page.breadcrumb {
                    @for segment in segments {
                        " › "
                        span.crumb { (segment) }
                    }
                }
                " › "
                (page.title)
            }
        }
        div.doc-layout {
            (render_sidebar(model, &current_href))
            main.doc-page {
                article.doc-content {
                    (PreEscaped(page.body_html.as_str()))
                }
                footer.doc-footer {
                    "Last modified " (page.modified)
                }
            }
        }
    };

    let window_title = format!("{} - {}", page.title, model.site_title);
    base_document(&window_title, content)
}

/// Renders the sidebar navigation listing every document, grouped the
/// same way as the index. The entry matching `current_href` carries the
/// `current` class.
fn render_sidebar(model: &SiteModel, current_href: &str) -> Markup {
    html! {
        nav.sidebar {
            @for section in &model.sections {
                div.sidebar-group {
                    span.sidebar-label { (section.label) }
                    ul {
                        @for card in &section.cards {
                            @let is_current = card.href == current_href;
                            li class=[is_current.then_some("current")] {
                                a href=(card.href) { (card.title) }
                            }
                        }
                    }
                }
            }
        }
    }
}
