//! Document discovery.
//!
//! First stage of the build pipeline. Recursively walks the document root,
//! producing one [`DocumentRecord`] per Markdown file, with content and stat
//! metadata read eagerly so later stages never touch the filesystem.
//!
//! ## Directory Structure
//!
//! Any tree of Markdown files works; folders become display groups:
//!
//! ```text
//! docs/                            # Document root
//! ├── config.toml                  # Site configuration (optional)
//! ├── readme.md                    # Root-level document → readme.html
//! ├── plan.md                      # → plan.html
//! ├── notes/
//! │   ├── sub.md                   # → notes_sub.html
//! │   └── api/
//! │       └── auth.md              # → notes_api_auth.html
//! ├── dist/                        # In the ignore set — pruned entirely
//! │   └── generated.md             # Never scanned
//! └── .drafts/                     # Hidden — pruned entirely
//!     └── wip.md                   # Never scanned
//! ```
//!
//! ## Pruning Rules
//!
//! - Directories named in the configured ignore set: pruned, no descent.
//! - Any entry whose name starts with a dot: pruned.
//! - Files without the `.md` extension: skipped.
//!
//! The walk root itself is never pruned.
//!
//! ## Ordering
//!
//! Traversal order is filesystem-dependent; the returned list is sorted by
//! modification time, newest first, with the unique output id as tie-breaker
//! so rebuilds of an unchanged tree always see the same order.
//!
//! ## Failure Modes
//!
//! There is no partial success. A missing or unreadable root, an unreadable
//! directory, or an unreadable document aborts the scan — a document silently
//! missing from a documentation index is worse than a failed build. Two
//! documents flattening to the same output id abort the scan as well, since
//! emitting both would silently overwrite one page with the other. The id
//! `index` is reserved for the dashboard itself, so a root-level `index.md`
//! aborts the scan instead of replacing it.

use crate::config::SiteConfig;
use crate::metadata;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("document root is not a directory: {}", .0.display())]
    RootNotFound(PathBuf),
    #[error("failed to read document {}: {source}", .path.display())]
    ReadDocument {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("output id '{output_id}' maps to both {} and {}", .first.display(), .second.display())]
    OutputIdCollision {
        output_id: String,
        first: PathBuf,
        second: PathBuf,
    },
    #[error("output id 'index' is reserved for the dashboard page: {}", .0.display())]
    ReservedOutputId(PathBuf),
}

/// Recognized document file extension.
pub const DOCUMENT_EXTENSION: &str = "md";

/// Output id the dashboard keeps for itself. The index page is written
/// as `index.html`, so no document may flatten to this id.
pub const RESERVED_OUTPUT_ID: &str = "index";

/// One discovered document with all derived metadata.
///
/// Records are build-scoped: constructed here, read-only afterwards, and
/// discarded once the site is emitted.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRecord {
    /// Absolute source location.
    pub source_path: PathBuf,
    /// Folder path relative to the root, `/`-separated; empty for root-level
    /// documents. Grouping key.
    pub relative_folder: String,
    /// Filename without extension.
    pub base_name: String,
    /// Page filename stem, unique per build. See [`metadata::derive_output_id`].
    pub output_id: String,
    /// First `# ` heading text, or `base_name`.
    pub title: String,
    /// Fixed-format preview line. See [`metadata::extract_description`].
    pub description: String,
    /// Full document text, read once at discovery time.
    #[serde(skip)]
    pub raw_content: String,
    /// Filesystem modification time; sort key and display value.
    pub modified_at: DateTime<Local>,
    /// File size in bytes, display only.
    pub byte_size: u64,
}

impl DocumentRecord {
    /// Filename of the page this document generates.
    pub fn page_filename(&self) -> String {
        format!("{}.html", self.output_id)
    }
}

/// Discover every document under `root`.
///
/// Returns records sorted newest-first (output id breaking ties), with
/// content and stat metadata already read. Fails on the first unreadable
/// entry and on any output id conflict, including a document claiming
/// the dashboard's reserved `index` id.
pub fn scan(root: &Path, config: &SiteConfig) -> Result<Vec<DocumentRecord>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    // Canonical root keeps source paths absolute and folder keys consistent.
    let root = root.canonicalize()?;

    let walker = WalkDir::new(&root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_pruned(entry, config));

    let mut records = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_document(entry.path()) {
            records.push(read_record(&root, entry.path())?);
        }
    }

    records.sort_by(|a, b| {
        b.modified_at
            .cmp(&a.modified_at)
            .then_with(|| a.output_id.cmp(&b.output_id))
    });

    check_output_ids(&records)?;
    Ok(records)
}

/// Hidden entries are pruned wherever they appear; ignored names prune
/// directories only (a file that happens to share an ignored name is
/// handled by the extension filter instead).
fn is_pruned(entry: &DirEntry, config: &SiteConfig) -> bool {
    let name = entry.file_name().to_string_lossy();
    if name.starts_with('.') {
        return true;
    }
    entry.file_type().is_dir() && config.is_ignored_dir(&name)
}

fn is_document(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION))
        .unwrap_or(false)
}

fn read_record(root: &Path, path: &Path) -> Result<DocumentRecord, ScanError> {
    let read_err = |source| ScanError::ReadDocument {
        path: path.to_path_buf(),
        source,
    };
    let raw_content = fs::read_to_string(path).map_err(read_err)?;
    let stat = fs::metadata(path).map_err(read_err)?;
    let modified_at: DateTime<Local> = stat.modified().map_err(read_err)?.into();

    let base_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let relative_folder = metadata::folder_key(root, path);
    let output_id = metadata::derive_output_id(&relative_folder, &base_name);
    let title = metadata::extract_title(&raw_content, &base_name);
    let description = metadata::extract_description(&raw_content);

    Ok(DocumentRecord {
        source_path: path.to_path_buf(),
        relative_folder,
        base_name,
        output_id,
        title,
        description,
        raw_content,
        modified_at,
        byte_size: stat.len(),
    })
}

fn check_output_ids(records: &[DocumentRecord]) -> Result<(), ScanError> {
    let mut seen: HashMap<&str, &Path> = HashMap::with_capacity(records.len());
    for record in records {
        if record.output_id == RESERVED_OUTPUT_ID {
            return Err(ScanError::ReservedOutputId(record.source_path.clone()));
        }
        if let Some(first) = seen.insert(record.output_id.as_str(), record.source_path.as_path()) {
            return Err(ScanError::OutputIdCollision {
                output_id: record.output_id.clone(),
                first: first.to_path_buf(),
                second: record.source_path.clone(),
            });
        }
    }
    Ok(())
}
