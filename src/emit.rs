//! Site assembly and emission.
//!
//! Final stage of the build. [`assemble`] turns scanned records into the
//! complete set of page texts without touching the filesystem; [`emit`]
//! writes that set to the output directory and copies the asset tree
//! alongside it.
//!
//! ## Output Structure
//!
//! ```text
//! site/
//! ├── index.html            # Grouped document overview
//! ├── root.html             # One page per document, flat
//! ├── notes_sub.html
//! ├── style.css             # Shared stylesheet (colors from config)
//! └── assets/               # Asset directory, copied verbatim
//!     └── logo.png
//! ```
//!
//! The base stylesheet is embedded at compile time from
//! `static/style.css`; the color variables generated from config.toml
//! are prepended when the file is written.
//!
//! Writes are plain, no temp-and-rename dance: a failed write aborts the
//! whole build rather than leaving a partially current site behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{self, SiteConfig};
use crate::group::by_folder;
use crate::markdown;
use crate::model::{SiteModel, build_document_page, build_site_model};
use crate::render::{self, STYLESHEET_HREF};
use crate::scan::DocumentRecord;

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Name of the asset subdirectory inside the output.
pub const ASSETS_DIR: &str = "assets";

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("asset directory not found: {}", .0.display())]
    AssetsDirNotFound(PathBuf),
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: io::Error,
    },
}

/// A fully assembled site: every file the emitter will write, as text,
/// plus the model it was rendered from (kept for reporting).
#[derive(Debug)]
pub struct Site {
    pub model: SiteModel,
    pub index_html: String,
    /// Per-document pages as `(filename, html)`, in scan order.
    pub pages: Vec<(String, String)>,
    pub stylesheet: String,
}

/// What the emitter wrote, for reporting.
#[derive(Debug)]
pub struct EmitSummary {
    /// Per-document pages written, not counting `index.html`.
    pub page_count: usize,
    /// Asset files copied.
    pub asset_count: usize,
}

/// Assembles the whole site in memory.
///
/// Pure apart from allocation: the same records and config always yield
/// byte-identical page text, which is what makes rebuilds idempotent.
pub fn assemble(records: &[DocumentRecord], config: &SiteConfig) -> Site {
    let groups = by_folder(records, &config.root_group_label);
    let model = build_site_model(&groups, config);

    let mut pages = Vec::with_capacity(records.len());
    for record in records {
        let body_html = markdown::render(&record.raw_content);
        let page = build_document_page(record, body_html);
        let html = render::render_document(&model, &page).into_string();
        pages.push((record.page_filename(), html));
    }

    Site {
        index_html: render::render_index(&model).into_string(),
        pages,
        stylesheet: stylesheet(config),
        model,
    }
}

/// Writes an assembled site to `output_dir` and copies `assets_dir`
/// into it. The output directory is created if absent; existing files
/// are overwritten in place.
pub fn emit(site: &Site, assets_dir: &Path, output_dir: &Path) -> Result<EmitSummary, EmitError> {
    if !assets_dir.is_dir() {
        return Err(EmitError::AssetsDirNotFound(assets_dir.to_path_buf()));
    }

    fs::create_dir_all(output_dir)?;

    write_text(output_dir, "index.html", &site.index_html)?;
    for (filename, html) in &site.pages {
        write_text(output_dir, filename, html)?;
    }
    write_text(output_dir, STYLESHEET_HREF, &site.stylesheet)?;

    let asset_target = output_dir.join(ASSETS_DIR);
    fs::create_dir_all(&asset_target)?;
    let asset_count = copy_dir_recursive(assets_dir, &asset_target)?;

    Ok(EmitSummary {
        page_count: site.pages.len(),
        asset_count,
    })
}

fn stylesheet(config: &SiteConfig) -> String {
    let color_css = config::generate_color_css(&config.colors);
    format!("{}\n\n{}", color_css, CSS_STATIC)
}

fn write_text(dir: &Path, filename: &str, contents: &str) -> Result<(), EmitError> {
    let path = dir.join(filename);
    fs::write(&path, contents).map_err(|source| EmitError::Write { path, source })
}

/// Copies the asset tree verbatim, returning how many files landed.
fn copy_dir_recursive(src: &Path, dst: &Path) -> io::Result<usize> {
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copied += copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
            copied += 1;
        }
    }
    Ok(copied)
}
