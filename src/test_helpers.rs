//! Shared test utilities for the docboard test suite.
//!
//! Provides fixture writers for building document trees in temp
//! directories, plus lookup helpers over scan results that panic with a
//! clear message on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_doc(tmp.path(), "notes/sub.md", "# Sub\nDetail here.");
//! set_modified_secs_ago(&tmp.path().join("notes/sub.md"), 300);
//!
//! let records = scan(tmp.path(), &SiteConfig::default()).unwrap();
//! let record = find_record(&records, "notes_sub");
//! assert_eq!(record.title, "Sub");
//! ```

use std::fs::{self, File};
use std::path::Path;
use std::sync::LazyLock;
use std::time::{Duration, SystemTime};

use crate::scan::DocumentRecord;

// =========================================================================
// Fixture writers
// =========================================================================

/// Write a file at `rel` under `root`, creating parent directories.
pub fn write_doc(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
}

/// Backdate a file's modification time by `secs` seconds.
///
/// Scan order is mtime-driven; tests pin an ordering with this instead
/// of sleeping between writes. All offsets are taken from one anchor
/// captured at first use, so equal `secs` yield identical mtimes —
/// calling `SystemTime::now()` per file would leave microsecond gaps
/// that defeat tie-break tests.
pub fn set_modified_secs_ago(path: &Path, secs: u64) {
    static ANCHOR: LazyLock<SystemTime> = LazyLock::new(SystemTime::now);
    let file = File::options().write(true).open(path).unwrap();
    let mtime = *ANCHOR - Duration::from_secs(secs);
    file.set_modified(mtime).unwrap();
}

// =========================================================================
// Record lookups — panic with a clear message on miss
// =========================================================================

/// Find a record by output id. Panics if not found.
pub fn find_record<'a>(records: &'a [DocumentRecord], output_id: &str) -> &'a DocumentRecord {
    records
        .iter()
        .find(|r| r.output_id == output_id)
        .unwrap_or_else(|| {
            let ids = record_ids(records);
            panic!("record '{output_id}' not found. Available: {ids:?}")
        })
}

/// All output ids in scan order.
pub fn record_ids(records: &[DocumentRecord]) -> Vec<&str> {
    records.iter().map(|r| r.output_id.as_str()).collect()
}
