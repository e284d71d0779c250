//! Folder grouping.
//!
//! Scanned documents are presented one section per source folder. This
//! module owns that partitioning and the order the sections appear in:
//! the root group (documents sitting directly in the source root) always
//! leads, and every other group follows in code point order of its
//! folder path, so the layout never depends on the process locale.
//! Within a group the scan order is preserved, keeping documents newest
//! first.

use std::collections::BTreeMap;

use crate::scan::DocumentRecord;

/// A set of documents sharing a source folder, in display order.
#[derive(Debug)]
pub struct FolderGroup<'a> {
    /// Heading shown for this group: the folder path relative to the
    /// source root, or the configured root label for documents sitting
    /// directly in the root.
    pub label: String,
    /// Documents in the group, newest first.
    pub documents: Vec<&'a DocumentRecord>,
}

/// Partitions `records` into one group per source folder.
///
/// Groups are keyed by the relative folder path, not the display label,
/// so the root group (empty path) sorts ahead of every named folder
/// regardless of what `root_label` says.
pub fn by_folder<'a>(records: &'a [DocumentRecord], root_label: &str) -> Vec<FolderGroup<'a>> {
    let mut buckets: BTreeMap<&str, Vec<&DocumentRecord>> = BTreeMap::new();
    for record in records {
        buckets
            .entry(record.relative_folder.as_str())
            .or_default()
            .push(record);
    }

    buckets
        .into_iter()
        .map(|(folder, documents)| FolderGroup {
            label: if folder.is_empty() {
                root_label.to_string()
            } else {
                folder.to_string()
            },
            documents,
        })
        .collect()
}
