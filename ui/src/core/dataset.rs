//! Dataset loading with a process-wide load-once cache.
//!
//! The base table is read once per process lifetime, keyed by source path,
//! and only re-read when the file's modification time changes. The cache
//! holds an immutable snapshot that has already been through the masking
//! pass, so nothing downstream can observe an unmasked identity field.
//!
//! Load failures degrade to an empty table; the dashboard turns that into a
//! single informational banner instead of an error.

use super::mask;
use super::table::DataTable;

/// Fixed relative path of the survey dataset on native targets.
pub const DATA_PATH: &str = "data/student_survey.csv";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetSnapshot {
    pub table: DataTable,
    /// Human-readable modification stamp of the source file, when known.
    pub updated: Option<String>,
}

fn parse_and_mask(raw: &str) -> DataTable {
    match DataTable::from_csv_str(raw) {
        Ok(mut table) => {
            mask::apply_masking(&mut table);
            table
        }
        Err(err) => {
            eprintln!("[dataset] malformed CSV: {err}");
            DataTable::empty()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use std::time::SystemTime;

    use once_cell::sync::Lazy;
    use time::{macros::format_description, OffsetDateTime};

    use super::{parse_and_mask, DatasetSnapshot, DATA_PATH};

    struct CacheEntry {
        modified: Option<SystemTime>,
        snapshot: DatasetSnapshot,
    }

    /// Load-once snapshot cache keyed by source path and modification time.
    /// One instance lives for the process; `load` hands out clones of the
    /// immutable masked snapshot.
    pub struct DatasetCache {
        entries: Mutex<HashMap<PathBuf, CacheEntry>>,
    }

    impl DatasetCache {
        pub fn new() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
            }
        }

        /// Load a dataset through the cache. The cached snapshot is reused
        /// until the file's mtime changes; if the file becomes unreadable
        /// later, the snapshot taken at load time is kept.
        pub fn load(&self, path: &Path) -> DatasetSnapshot {
            let modified = std::fs::metadata(path).and_then(|m| m.modified()).ok();

            let mut entries = self
                .entries
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(entry) = entries.get(path) {
                if modified.is_none() || entry.modified == modified {
                    return entry.snapshot.clone();
                }
            }

            let snapshot = read_snapshot(path, modified);
            entries.insert(
                path.to_path_buf(),
                CacheEntry {
                    modified,
                    snapshot: snapshot.clone(),
                },
            );
            snapshot
        }
    }

    impl Default for DatasetCache {
        fn default() -> Self {
            Self::new()
        }
    }

    static CACHE: Lazy<DatasetCache> = Lazy::new(DatasetCache::new);

    pub fn load_default() -> DatasetSnapshot {
        load_cached(Path::new(DATA_PATH))
    }

    pub fn load_cached(path: &Path) -> DatasetSnapshot {
        CACHE.load(path)
    }

    fn read_snapshot(path: &Path, modified: Option<SystemTime>) -> DatasetSnapshot {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                eprintln!("[dataset] {} unreadable: {err}", path.display());
                return DatasetSnapshot::default();
            }
        };

        DatasetSnapshot {
            table: parse_and_mask(&raw),
            updated: modified.map(format_stamp),
        }
    }

    fn format_stamp(stamp: SystemTime) -> String {
        OffsetDateTime::from(stamp)
            .format(&format_description!("[year]-[month]-[day] [hour]:[minute] UTC"))
            .unwrap_or_else(|_| "unknown".to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{load_cached, load_default, DatasetCache};

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::{parse_and_mask, DatasetSnapshot};

    // Browsers have no filesystem; the bundled sample dataset is embedded at
    // compile time instead.
    const EMBEDDED_CSV: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../data/student_survey.csv"
    ));

    pub fn load_default() -> DatasetSnapshot {
        DatasetSnapshot {
            table: parse_and_mask(EMBEDDED_CSV),
            updated: None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::load_default;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::core::columns;
    use std::path::PathBuf;

    fn scratch_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "surveydeck-dataset-{tag}-{}.csv",
            std::process::id()
        ))
    }

    #[test]
    fn missing_file_degrades_to_empty_snapshot() {
        let snapshot = load_cached(&scratch_path("missing"));
        assert!(snapshot.table.is_empty());
        assert!(snapshot.updated.is_none());
    }

    #[test]
    fn snapshot_is_masked_before_caching() {
        let path = scratch_path("masked");
        std::fs::write(
            &path,
            "Full Name,Student ID,Faculty\nAda Lovelace,2310150042,Engineering\n",
        )
        .unwrap();

        let snapshot = load_cached(&path);
        let name_idx = snapshot.table.column_index(columns::FULL_NAME).unwrap();
        assert_eq!(snapshot.table.rows()[0][name_idx].display(), "A** L*******");
        assert!(snapshot.updated.is_some());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn cache_survives_source_deletion() {
        let path = scratch_path("sticky");
        std::fs::write(&path, "Faculty\nLaw\n").unwrap();

        let first = load_cached(&path);
        assert_eq!(first.table.len(), 1);

        std::fs::remove_file(&path).unwrap();
        let second = load_cached(&path);
        assert_eq!(second, first);
    }

    #[test]
    fn cache_reloads_when_mtime_changes() {
        let path = scratch_path("mtime");
        std::fs::write(&path, "Faculty\nLaw\n").unwrap();

        let cache = DatasetCache::new();
        assert_eq!(cache.load(&path).table.len(), 1);

        std::fs::write(&path, "Faculty\nLaw\nEconomics\n").unwrap();
        // Push the mtime past filesystem timestamp granularity.
        let later = std::time::SystemTime::now() + std::time::Duration::from_secs(2);
        let file = std::fs::File::open(&path).unwrap();
        file.set_modified(later).unwrap();

        assert_eq!(cache.load(&path).table.len(), 2);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn unreadable_file_degrades_to_empty_table() {
        let path = scratch_path("unreadable");
        // Invalid UTF-8 makes the read itself fail.
        std::fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

        let snapshot = load_cached(&path);
        assert!(snapshot.table.is_empty());

        std::fs::remove_file(&path).ok();
    }
}
