//! Document metadata derivation.
//!
//! Every derived field on a document record comes from one of the pure
//! functions in this module, so the rules live in exactly one place:
//!
//! - **Title**: the text of the first top-level heading (`# Title`). Deeper
//!   headings (`##`, `###`) never qualify. Documents without a top-level
//!   heading fall back to the filename stem.
//!
//! - **Description**: the first line that is neither blank nor a heading,
//!   truncated to [`DESCRIPTION_MAX_CHARS`] characters. The `...` suffix is
//!   appended to every non-empty description, truncated or not — consumers
//!   treat the result as a fixed-format preview string. Documents with no
//!   qualifying line get an empty description.
//!
//! - **Output identifier**: the page filename stem. Root-level documents use
//!   the bare filename stem; nested documents flatten their folder path with
//!   underscores (`notes/api/auth.md` → `notes_api_auth`). Generated page
//!   names are therefore predictable from the source layout alone, which
//!   downstream tooling relies on. Identifiers must be unique per build; the
//!   scanner rejects trees where two documents flatten to the same id.
//!
//! ## Folder keys
//!
//! Grouping and identifier derivation both use the document's folder path
//! relative to the content root, always `/`-separated regardless of platform.
//! Root-level documents use the empty string.

use std::path::Path;

/// Maximum description length in characters, before the ellipsis suffix.
pub const DESCRIPTION_MAX_CHARS: usize = 150;

/// Suffix appended to every non-empty description.
pub const DESCRIPTION_ELLIPSIS: &str = "...";

/// Extract the document title from its content.
///
/// Scans for the first line of the form `# <text>` — exactly one marker,
/// one space, non-empty text — and returns the trimmed text. Falls back to
/// `base_name` when no such line exists.
pub fn extract_title(text: &str, base_name: &str) -> String {
    text.lines()
        .find_map(|line| {
            line.strip_prefix("# ")
                .map(str::trim)
                .filter(|t| !t.is_empty())
        })
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| base_name.to_string())
}

/// Extract the document description from its content.
///
/// Takes the first line that is neither blank nor starts with the heading
/// marker, truncated to [`DESCRIPTION_MAX_CHARS`] characters (character
/// count, not bytes) with [`DESCRIPTION_ELLIPSIS`] appended. Returns an
/// empty string when no line qualifies.
pub fn extract_description(text: &str) -> String {
    let Some(line) = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
    else {
        return String::new();
    };
    let preview: String = line.chars().take(DESCRIPTION_MAX_CHARS).collect();
    format!("{preview}{DESCRIPTION_ELLIPSIS}")
}

/// Derive the output identifier for a document.
///
/// - Root-level (`relative_folder` empty): the filename stem as-is.
/// - Nested: folder path with `/` replaced by `_`, then `_`, then the stem.
///
/// ```text
/// ("", "readme")            → "readme"
/// ("notes", "sub")          → "notes_sub"
/// ("notes/api", "auth")     → "notes_api_auth"
/// ```
pub fn derive_output_id(relative_folder: &str, base_name: &str) -> String {
    if relative_folder.is_empty() {
        base_name.to_string()
    } else {
        format!("{}_{}", relative_folder.replace('/', "_"), base_name)
    }
}

/// Folder path of a document relative to the content root, `/`-separated.
///
/// Returns the empty string for root-level documents. Separators are
/// normalized to `/` on every platform so identifiers and group keys are
/// stable across machines.
pub fn folder_key(root: &Path, source_path: &Path) -> String {
    let folder = source_path.parent().unwrap_or(root);
    let relative = folder.strip_prefix(root).unwrap_or_else(|_| Path::new(""));
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // =========================================================================
    // extract_title tests
    // =========================================================================

    #[test]
    fn title_from_first_heading() {
        assert_eq!(
            extract_title("# Getting Started\n\nBody.", "start"),
            "Getting Started"
        );
    }

    #[test]
    fn title_skips_leading_prose() {
        let text = "Some intro paragraph.\n\n# Real Title\n\nBody.";
        assert_eq!(extract_title(text, "file"), "Real Title");
    }

    #[test]
    fn title_ignores_deeper_headings() {
        let text = "## Section\n### Subsection\nBody.";
        assert_eq!(extract_title(text, "plan"), "plan");
    }

    #[test]
    fn title_falls_back_to_base_name() {
        assert_eq!(extract_title("Just text, no headings.", "plan"), "plan");
    }

    #[test]
    fn title_trims_whitespace() {
        assert_eq!(extract_title("#   Padded Title  \n", "file"), "Padded Title");
    }

    #[test]
    fn title_first_of_several_headings_wins() {
        let text = "# First\n\n# Second\n";
        assert_eq!(extract_title(text, "file"), "First");
    }

    #[test]
    fn title_marker_without_text_does_not_match() {
        // "#   " has no text after the marker; the later real heading wins.
        let text = "#   \n# Actual\n";
        assert_eq!(extract_title(text, "file"), "Actual");
    }

    #[test]
    fn title_empty_document_uses_base_name() {
        assert_eq!(extract_title("", "empty"), "empty");
    }

    // =========================================================================
    // extract_description tests
    // =========================================================================

    #[test]
    fn description_first_body_line() {
        let text = "# Title\n\nThe opening line.\nSecond line.";
        assert_eq!(extract_description(text), "The opening line....");
    }

    #[test]
    fn description_skips_blank_and_heading_lines() {
        let text = "# Title\n\n\n## Section\n\nActual prose here.";
        assert_eq!(extract_description(text), "Actual prose here....");
    }

    #[test]
    fn description_ellipsis_even_when_short() {
        assert_eq!(extract_description("Hi."), "Hi....");
    }

    #[test]
    fn description_truncated_to_max_chars() {
        let long = "x".repeat(300);
        let desc = extract_description(&long);
        assert_eq!(
            desc.len(),
            DESCRIPTION_MAX_CHARS + DESCRIPTION_ELLIPSIS.len()
        );
        assert!(desc.ends_with(DESCRIPTION_ELLIPSIS));
    }

    #[test]
    fn description_truncates_by_characters_not_bytes() {
        // Multibyte characters must not be split mid-codepoint.
        let long = "文".repeat(200);
        let desc = extract_description(&long);
        let body: String = desc
            .chars()
            .take(desc.chars().count() - DESCRIPTION_ELLIPSIS.len())
            .collect();
        assert_eq!(body.chars().count(), DESCRIPTION_MAX_CHARS);
        assert!(desc.ends_with(DESCRIPTION_ELLIPSIS));
    }

    #[test]
    fn description_empty_when_only_headings() {
        assert_eq!(extract_description("# Title\n## Section\n"), "");
    }

    #[test]
    fn description_empty_for_blank_document() {
        assert_eq!(extract_description("\n\n   \n"), "");
    }

    #[test]
    fn description_line_is_trimmed() {
        assert_eq!(extract_description("   padded prose   \n"), "padded prose...");
    }

    // =========================================================================
    // derive_output_id tests
    // =========================================================================

    #[test]
    fn output_id_root_level_is_base_name() {
        assert_eq!(derive_output_id("", "readme"), "readme");
    }

    #[test]
    fn output_id_single_folder() {
        assert_eq!(derive_output_id("notes", "sub"), "notes_sub");
    }

    #[test]
    fn output_id_nested_folders_flattened() {
        assert_eq!(derive_output_id("notes/api", "auth"), "notes_api_auth");
    }

    #[test]
    fn output_id_flattening_can_collide() {
        // Distinct sources mapping to one id — the scanner must reject this.
        assert_eq!(derive_output_id("a/b", "c"), derive_output_id("a", "b_c"));
    }

    // =========================================================================
    // folder_key tests
    // =========================================================================

    #[test]
    fn folder_key_root_level_is_empty() {
        let root = PathBuf::from("/content");
        assert_eq!(folder_key(&root, &root.join("readme.md")), "");
    }

    #[test]
    fn folder_key_single_level() {
        let root = PathBuf::from("/content");
        assert_eq!(folder_key(&root, &root.join("notes/sub.md")), "notes");
    }

    #[test]
    fn folder_key_nested_uses_forward_slashes() {
        let root = PathBuf::from("/content");
        assert_eq!(
            folder_key(&root, &root.join("notes").join("api").join("auth.md")),
            "notes/api"
        );
    }
}
