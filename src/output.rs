//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (group, document) is its semantic identity — title and
//! positional index — with filesystem paths shown as secondary context via
//! indented `Source:` lines. This makes the output readable as a content
//! inventory while still letting users trace data back to specific files.
//!
//! # Entity Display Contract
//!
//! Every entity follows a consistent two-level pattern across all stages:
//!
//! 1. **Header line**: positional index + title (+ optional document count)
//! 2. **Context lines**: indented `Source:`, `Modified:`, description preview
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Groups
//! 001 根目录 (1 documents)
//!     001 Root Doc
//!         Source: root.md
//!         Modified: 2026-03-14 09:05
//!         Hello world....
//! 002 notes (1 documents)
//!     001 Sub
//!         Source: notes/sub.md
//!         Modified: 2026-03-12 17:40
//!         Detail here....
//!
//! Config
//!     config.toml
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! 001 根目录
//!     001 Root Doc → root.html
//! 002 notes
//!     001 Sub → notes_sub.html
//! Stylesheet → style.css
//! Assets → assets/ (3 files)
//! Generated 2 document pages, 2 groups, 3 assets
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure —
//! no I/O beyond the config.toml existence check in scan output, no side
//! effects.

use std::path::Path;

use crate::emit::EmitSummary;
use crate::group::FolderGroup;
use crate::model::{SiteModel, format_timestamp};
use crate::render::STYLESHEET_HREF;
use crate::scan::DocumentRecord;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a group header: positional index + label, with optional count.
///
/// ```text
/// 001 根目录 (3 documents)
/// 002 notes
/// ```
fn group_header(index: usize, label: &str, count: Option<usize>) -> String {
    match count {
        Some(n) => format!("{} {} ({} documents)", format_index(index), label, n),
        None => format!("{} {}", format_index(index), label),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
/// Counts characters, not bytes, so multibyte titles survive.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    }
}

/// Source path of a record relative to the scanned root.
fn relative_source(record: &DocumentRecord) -> String {
    if record.relative_folder.is_empty() {
        format!("{}.md", record.base_name)
    } else {
        format!("{}/{}.md", record.relative_folder, record.base_name)
    }
}

// ============================================================================
// Scan output
// ============================================================================

/// Format scan output showing the discovered document inventory.
///
/// Information-first: each group leads with its positional index and
/// label, each document with its index and title. Source paths, modified
/// timestamps and description previews are indented context lines.
pub fn format_scan_output(groups: &[FolderGroup<'_>], source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Groups".to_string());
    for (group_idx, group) in groups.iter().enumerate() {
        lines.push(group_header(
            group_idx + 1,
            &group.label,
            Some(group.documents.len()),
        ));

        for (doc_idx, record) in group.documents.iter().enumerate() {
            let base = indent(1);
            lines.push(format!(
                "{}{} {}",
                base,
                format_index(doc_idx + 1),
                record.title
            ));
            lines.push(format!("{}    Source: {}", base, relative_source(record)));
            lines.push(format!(
                "{}    Modified: {}",
                base,
                format_timestamp(&record.modified_at)
            ));

            let preview = truncate_desc(&record.description, 60);
            if !preview.is_empty() {
                lines.push(format!("{}    {}", base, preview));
            }
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push("    config.toml".to_string());
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(groups: &[FolderGroup<'_>], source_root: &Path) {
    for line in format_scan_output(groups, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format build output showing the entity → file mapping.
///
/// Information-first: each group leads with its positional index and
/// label, each document with its index and title, followed by `→` and
/// the page it landed in. The closing aggregate line reports what the
/// emitter actually wrote, not a recount of the model.
pub fn format_build_output(model: &SiteModel, summary: &EmitSummary) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Home \u{2192} index.html".to_string());

    for (group_idx, section) in model.sections.iter().enumerate() {
        lines.push(group_header(group_idx + 1, &section.label, None));

        for (doc_idx, card) in section.cards.iter().enumerate() {
            lines.push(format!(
                "    {} {} \u{2192} {}",
                format_index(doc_idx + 1),
                card.title,
                card.href
            ));
        }
    }

    lines.push(format!("Stylesheet \u{2192} {}", STYLESHEET_HREF));
    lines.push(format!(
        "Assets \u{2192} assets/ ({} files)",
        summary.asset_count
    ));
    lines.push(format!(
        "Generated {} document pages, {} groups, {} assets",
        summary.page_count, model.stats.group_count, summary.asset_count
    ));

    lines
}

/// Print build output to stdout.
pub fn print_build_output(model: &SiteModel, summary: &EmitSummary) {
    for line in format_build_output(model, summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use chrono::{Local, TimeZone};
    use tempfile::TempDir;

    use crate::config::SiteConfig;
    use crate::group::by_folder;
    use crate::metadata::derive_output_id;
    use crate::model::build_site_model;

    fn record(folder: &str, base: &str, title: &str, description: &str) -> DocumentRecord {
        DocumentRecord {
            source_path: PathBuf::from(format!("/docs/{base}.md")),
            relative_folder: folder.to_string(),
            base_name: base.to_string(),
            output_id: derive_output_id(folder, base),
            title: title.to_string(),
            description: description.to_string(),
            raw_content: String::new(),
            modified_at: Local.with_ymd_and_hms(2026, 3, 14, 9, 5, 0).unwrap(),
            byte_size: 128,
        }
    }

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn format_index_single_digit() {
        assert_eq!(format_index(1), "001");
    }

    #[test]
    fn format_index_double_digit() {
        assert_eq!(format_index(42), "042");
    }

    #[test]
    fn format_index_triple_digit() {
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn indent_zero() {
        assert_eq!(indent(0), "");
    }

    #[test]
    fn indent_two() {
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn group_header_with_count() {
        assert_eq!(group_header(1, "notes", Some(3)), "001 notes (3 documents)");
    }

    #[test]
    fn group_header_without_count() {
        assert_eq!(group_header(2, "根目录", None), "002 根目录");
    }

    #[test]
    fn truncate_desc_short() {
        assert_eq!(truncate_desc("Short text", 40), "Short text");
    }

    #[test]
    fn truncate_desc_exact() {
        let text = "a".repeat(40);
        assert_eq!(truncate_desc(&text, 40), text);
    }

    #[test]
    fn truncate_desc_long() {
        let text = "a".repeat(50);
        let expected = format!("{}...", "a".repeat(40));
        assert_eq!(truncate_desc(&text, 40), expected);
    }

    #[test]
    fn truncate_desc_counts_characters_not_bytes() {
        let text = "文".repeat(50);
        let expected = format!("{}...", "文".repeat(40));
        assert_eq!(truncate_desc(&text, 40), expected);
    }

    #[test]
    fn relative_source_for_root_document() {
        let rec = record("", "readme", "Read Me", "");
        assert_eq!(relative_source(&rec), "readme.md");
    }

    #[test]
    fn relative_source_for_nested_document() {
        let rec = record("notes/drafts", "wip", "WIP", "");
        assert_eq!(relative_source(&rec), "notes/drafts/wip.md");
    }

    // =========================================================================
    // Scan output tests
    // =========================================================================

    #[test]
    fn scan_output_lists_groups_and_documents() {
        let records = vec![
            record("", "root", "Root Doc", "Hello world...."),
            record("notes", "sub", "Sub", "Detail here...."),
        ];
        let groups = by_folder(&records, "根目录");
        let tmp = TempDir::new().unwrap();

        let lines = format_scan_output(&groups, tmp.path());

        assert_eq!(lines[0], "Groups");
        assert_eq!(lines[1], "001 根目录 (1 documents)");
        assert_eq!(lines[2], "    001 Root Doc");
        assert_eq!(lines[3], "        Source: root.md");
        assert_eq!(lines[4], "        Modified: 2026-03-14 09:05");
        assert_eq!(lines[5], "        Hello world....");
        assert_eq!(lines[6], "002 notes (1 documents)");
        assert_eq!(lines[8], "        Source: notes/sub.md");
    }

    #[test]
    fn scan_output_skips_empty_descriptions() {
        let records = vec![record("", "bare", "Bare", "")];
        let groups = by_folder(&records, "根目录");
        let tmp = TempDir::new().unwrap();

        let lines = format_scan_output(&groups, tmp.path());

        // Header, group, doc, source, modified, blank, config header.
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[2], "    001 Bare");
        assert_eq!(lines[3], "        Source: bare.md");
        assert_eq!(lines[4], "        Modified: 2026-03-14 09:05");
    }

    #[test]
    fn scan_output_reports_config_when_present() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "title = \"Docs\"\n").unwrap();

        let lines = format_scan_output(&[], tmp.path());

        assert!(lines.contains(&"Config".to_string()));
        assert!(lines.contains(&"    config.toml".to_string()));
    }

    #[test]
    fn scan_output_omits_config_line_when_absent() {
        let tmp = TempDir::new().unwrap();
        let lines = format_scan_output(&[], tmp.path());

        assert!(lines.contains(&"Config".to_string()));
        assert!(!lines.contains(&"    config.toml".to_string()));
    }

    // =========================================================================
    // Build output tests
    // =========================================================================

    #[test]
    fn build_output_maps_entities_to_files() {
        let records = vec![
            record("", "root", "Root Doc", ""),
            record("notes", "sub", "Sub", ""),
        ];
        let groups = by_folder(&records, "根目录");
        let model = build_site_model(&groups, &SiteConfig::default());
        let summary = EmitSummary {
            page_count: 2,
            asset_count: 3,
        };

        let lines = format_build_output(&model, &summary);

        assert_eq!(lines[0], "Home \u{2192} index.html");
        assert_eq!(lines[1], "001 根目录");
        assert_eq!(lines[2], "    001 Root Doc \u{2192} root.html");
        assert_eq!(lines[3], "002 notes");
        assert_eq!(lines[4], "    001 Sub \u{2192} notes_sub.html");
        assert_eq!(lines[5], "Stylesheet \u{2192} style.css");
        assert_eq!(lines[6], "Assets \u{2192} assets/ (3 files)");
        assert_eq!(lines[7], "Generated 2 document pages, 2 groups, 3 assets");
    }

    #[test]
    fn build_output_aggregate_line_uses_the_emitted_counts() {
        let records = vec![record("", "root", "Root Doc", "")];
        let groups = by_folder(&records, "根目录");
        let model = build_site_model(&groups, &SiteConfig::default());

        // Page and asset totals come from the emitter, not from a
        // recount of the model.
        let summary = EmitSummary {
            page_count: 7,
            asset_count: 4,
        };
        let lines = format_build_output(&model, &summary);

        assert_eq!(
            lines.last().map(String::as_str),
            Some("Generated 7 document pages, 1 groups, 4 assets")
        );
    }

    #[test]
    fn build_output_for_empty_tree_still_reports_home_and_assets() {
        let model = build_site_model(&[], &SiteConfig::default());
        let summary = EmitSummary {
            page_count: 0,
            asset_count: 0,
        };
        let lines = format_build_output(&model, &summary);

        assert_eq!(lines[0], "Home \u{2192} index.html");
        assert_eq!(lines[1], "Stylesheet \u{2192} style.css");
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Generated 0 document pages, 0 groups, 0 assets")
        );
    }
}
