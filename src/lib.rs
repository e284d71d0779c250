//! # Docboard
//!
//! A minimal static dashboard generator for Markdown document trees.
//! Your filesystem is the data source: every `.md` file becomes a page,
//! every folder becomes a group on the index, and modification time
//! drives the ordering — newest documents first.
//!
//! # Architecture: Scan → Assemble → Emit
//!
//! Docboard builds a site in three steps, the middle one entirely free
//! of I/O:
//!
//! ```text
//! 1. Scan      docs/    →  Vec<DocumentRecord>   (filesystem → structured data)
//! 2. Assemble  records  →  Site                  (group, model, render to page text)
//! 3. Emit      Site     →  site/                 (write pages + stylesheet, copy assets)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Testability**: scanning yields plain data and assembly is a pure
//!   function over it, so pipeline logic is exercised without a
//!   filesystem in the way.
//! - **Debuggability**: `docboard scan --json` dumps exactly the records
//!   the generator works from.
//! - **Idempotence**: the whole site is assembled in memory before the
//!   first write, and an unchanged tree always produces byte-identical
//!   output — which is what downstream change-detection relies on.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the source tree, reads documents, extracts metadata, sorts newest first |
//! | [`metadata`] | Extraction rules: title, description, output identifier |
//! | [`group`] | Partitions records into folder groups, root group leading |
//! | [`markdown`] | Markdown → HTML fragment via pulldown-cmark |
//! | [`model`] | Typed page models — everything the templates print, preformatted |
//! | [`render`] | Maud templates projecting the models into markup |
//! | [`emit`] | Site assembly, output writing, asset copying |
//! | [`config`] | `config.toml` loading, validation, and color CSS generation |
//! | [`output`] | CLI output formatting — inventory and file-mapping display |
//!
//! # Design Decisions
//!
//! ## Flat Output, Flattened Identifiers
//!
//! `notes/drafts/wip.md` becomes `notes_drafts_wip.html` in a flat
//! output directory. Every cross-link is a bare filename, so the site
//! works from any path prefix and straight off `file://`. The price of
//! flattening is that distinct source paths can collide
//! (`a/b/c.md` vs `a/b_c.md`); the scanner detects this and aborts the
//! build instead of letting one page silently overwrite the other.
//!
//! ## Model → Renderer Separation
//!
//! Pages are described first as plain structs — sections, cards, nav
//! entries, every date and size already formatted — and only then
//! projected into markup. The templates take no decisions, which lets
//! unit tests assert page content against literal model values without
//! rendering, and rendering against literal models without scanning.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a
//! compile-time HTML macro system, rather than Handlebars or Tera:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped; only the
//!   rendered Markdown body is passed through raw, and that is
//!   author-controlled content.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Modification Time Is the Order
//!
//! No front matter, no ordering file: a document's place on the index is
//! its modification time, newest first. Ties break on the output
//! identifier so the order is total and two scans of the same tree never
//! disagree. Group order is plain code point order for the same reason —
//! locale collation would make the build machine's locale part of the
//! output.
//!
//! ## No JavaScript
//!
//! The generated site is HTML and one stylesheet. Navigation is links,
//! theming is CSS custom properties with a `prefers-color-scheme` media
//! query. The output can be dropped on any file server, or no server at
//! all, and will render the same way indefinitely.

pub mod config;
pub mod emit;
pub mod group;
pub mod markdown;
pub mod metadata;
pub mod model;
pub mod output;
pub mod render;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
