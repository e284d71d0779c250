//! Page models.
//!
//! Everything the templates print is prepared here: dates and sizes are
//! formatted, hrefs derived and group labels resolved before any HTML is
//! involved. The render layer is a plain projection of these structs, so
//! tests can assert on page content without parsing markup.

use chrono::{DateTime, Local};

use crate::config::SiteConfig;
use crate::group::FolderGroup;
use crate::scan::DocumentRecord;

/// Everything the index page (and the sidebar of every document page)
/// is built from.
#[derive(Debug, PartialEq)]
pub struct SiteModel {
    pub site_title: String,
    pub stats: SiteStats,
    /// One section per folder group, in display order.
    pub sections: Vec<Section>,
}

/// Aggregate numbers shown under the index header.
#[derive(Debug, PartialEq)]
pub struct SiteStats {
    pub document_count: usize,
    pub group_count: usize,
    /// Newest modification time across all documents, already formatted.
    /// `None` when the source tree holds no documents.
    pub last_updated: Option<String>,
}

/// A folder group as it appears on the index page.
#[derive(Debug, PartialEq)]
pub struct Section {
    pub label: String,
    pub cards: Vec<Card>,
}

/// One document entry on the index page.
#[derive(Debug, PartialEq)]
pub struct Card {
    pub title: String,
    /// Preview line; empty when the document has no body text.
    pub description: String,
    /// Relative link target, e.g. `notes_sub.html`.
    pub href: String,
    pub modified: String,
    pub size: String,
}

/// Everything a single document page is built from.
#[derive(Debug, PartialEq)]
pub struct DocumentPage {
    pub title: String,
    pub output_id: String,
    /// Source folder segments, root first. `None` for documents sitting
    /// directly in the source root, which render without a breadcrumb.
    pub breadcrumb: Option<Vec<String>>,
    pub modified: String,
    /// Rendered Markdown body, ready to embed.
    pub body_html: String,
}

/// Builds the site model from grouped documents.
pub fn build_site_model(groups: &[FolderGroup<'_>], config: &SiteConfig) -> SiteModel {
    let sections: Vec<Section> = groups
        .iter()
        .map(|group| Section {
            label: group.label.clone(),
            cards: group.documents.iter().map(|record| card_for(record)).collect(),
        })
        .collect();

    let document_count = sections.iter().map(|section| section.cards.len()).sum();
    let last_updated = groups
        .iter()
        .flat_map(|group| group.documents.iter())
        .map(|record| record.modified_at)
        .max()
        .map(|at| format_timestamp(&at));

    SiteModel {
        site_title: config.title.clone(),
        stats: SiteStats {
            document_count,
            group_count: sections.len(),
            last_updated,
        },
        sections,
    }
}

/// Builds the model for one document page. The body arrives already
/// rendered; this layer never touches Markdown.
pub fn build_document_page(record: &DocumentRecord, body_html: String) -> DocumentPage {
    let breadcrumb = if record.relative_folder.is_empty() {
        None
    } else {
        Some(
            record
                .relative_folder
                .split('/')
                .map(ToOwned::to_owned)
                .collect(),
        )
    };

    DocumentPage {
        title: record.title.clone(),
        output_id: record.output_id.clone(),
        breadcrumb,
        modified: format_timestamp(&record.modified_at),
        body_html,
    }
}

fn card_for(record: &DocumentRecord) -> Card {
    Card {
        title: record.title.clone(),
        description: record.description.clone(),
        href: record.page_filename(),
        modified: format_timestamp(&record.modified_at),
        size: format_byte_size(record.byte_size),
    }
}

/// Local wall clock time, minute precision.
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

/// Human readable size: exact bytes below 1 KB, one decimal above.
pub fn format_byte_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    let value = bytes as f64;
    if value >= MB {
        format!("{:.1} MB", value / MB)
    } else if value >= KB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{bytes} B")
    }
}
