//! Data loader for bucket inventory exports
//!
//! Object listings arrive as JSONL inventory files: one JSON record per
//! line describing a stored object (bucket, key, size, last-modified
//! timestamp and optionally a storage class). The loader walks a directory
//! tree for `.jsonl` files, parses them line by line and materializes the
//! observations whose last-modified date falls inside the requested range.
//!
//! Malformed lines are skipped with a warning so one bad record cannot sink
//! a whole report; failures to open or read a file propagate as fatal.

use crate::error::{Result, S3costError};
use crate::filters::DateRange;
use crate::types::{BucketName, Observation, StorageClass};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// One line of an inventory export
#[derive(Debug, Deserialize)]
struct InventoryRecord {
    /// Bucket the object lives in
    bucket: String,
    /// Object key; carried for diagnostics only
    #[serde(default)]
    #[allow(dead_code)]
    key: Option<String>,
    /// Object size in bytes
    size: u64,
    /// Last-modified timestamp
    last_modified: DateTime<Utc>,
    /// Storage class; absent means STANDARD
    #[serde(default)]
    storage_class: Option<String>,
}

impl InventoryRecord {
    /// Apply the storage-class default at the construction boundary
    fn into_observation(self) -> Observation {
        Observation {
            bucket: BucketName::new(self.bucket),
            timestamp: self.last_modified,
            size_bytes: self.size,
            storage_class: self
                .storage_class
                .map(StorageClass::new)
                .unwrap_or_default(),
        }
    }
}

/// Discovers and parses inventory JSONL files under a root directory
pub struct InventoryLoader {
    root: PathBuf,
}

impl InventoryLoader {
    /// Create a loader over a directory of inventory exports
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the directory does not exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(S3costError::Config(format!(
                "Inventory directory not found: {}",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    /// Find all `.jsonl` files under the root, sorted for determinism
    pub fn find_inventory_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root) {
            let entry = entry.map_err(|e| {
                S3costError::Io(e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::other("walkdir loop detected")
                }))
            })?;
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("jsonl") {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        debug!("Found {} inventory files under {}", files.len(), self.root.display());
        Ok(files)
    }

    /// Load every in-range observation from all discovered files
    ///
    /// The result is fully materialized; aggregation downstream is a pure
    /// function over this sequence.
    pub fn load_observations(&self, range: &DateRange) -> Result<Vec<Observation>> {
        let mut observations = Vec::new();

        for path in self.find_inventory_files()? {
            Self::parse_inventory_file(&path, range, &mut observations)?;
        }

        debug!("Loaded {} observations in range", observations.len());
        Ok(observations)
    }

    /// Parse one JSONL file, pushing in-range observations
    fn parse_inventory_file(
        path: &Path,
        range: &DateRange,
        out: &mut Vec<Observation>,
    ) -> Result<()> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for (line_number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<InventoryRecord>(&line) {
                Ok(record) => {
                    let observation = record.into_observation();
                    if range.matches(&observation) {
                        out.push(observation);
                    }
                }
                Err(e) => {
                    warn!(
                        "Failed to parse line {} in {}: {}",
                        line_number + 1,
                        path.display(),
                        e
                    );
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::TempDir;

    fn full_range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        )
    }

    #[test]
    fn test_jsonl_parsing_with_defaulted_class() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("inventory.jsonl");

        let mut file = File::create(&path).unwrap();
        writeln!(
            file,
            r#"{{"bucket":"media","key":"img/a.png","size":2048,"last_modified":"2024-01-15T10:00:00Z","storage_class":"STANDARD_IA"}}"#
        )
        .unwrap();
        writeln!(
            file,
            r#"{{"bucket":"logs","key":"2024/01/app.log","size":512,"last_modified":"2024-01-16T00:00:00Z"}}"#
        )
        .unwrap();

        let loader = InventoryLoader::new(temp_dir.path()).unwrap();
        let observations = loader.load_observations(&full_range()).unwrap();

        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].bucket.as_str(), "media");
        assert_eq!(observations[0].storage_class.as_str(), "STANDARD_IA");
        // Missing storage class falls back to STANDARD
        assert_eq!(observations[1].storage_class.as_str(), "STANDARD");
        assert_eq!(observations[1].size_bytes, 512);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("inventory.jsonl");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "{{not valid json").unwrap();
        writeln!(
            file,
            r#"{{"bucket":"media","size":100,"last_modified":"2024-03-01T08:00:00Z"}}"#
        )
        .unwrap();

        let loader = InventoryLoader::new(temp_dir.path()).unwrap();
        let observations = loader.load_observations(&full_range()).unwrap();

        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].size_bytes, 100);
    }

    #[test]
    fn test_out_of_range_records_are_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("inventory.jsonl");

        let mut file = File::create(&path).unwrap();
        writeln!(
            file,
            r#"{{"bucket":"media","size":100,"last_modified":"2023-12-31T23:59:59Z"}}"#
        )
        .unwrap();
        writeln!(
            file,
            r#"{{"bucket":"media","size":200,"last_modified":"2024-06-01T00:00:00Z"}}"#
        )
        .unwrap();

        let loader = InventoryLoader::new(temp_dir.path()).unwrap();
        let observations = loader.load_observations(&full_range()).unwrap();

        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].size_bytes, 200);
    }

    #[test]
    fn test_missing_directory_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        assert!(matches!(
            InventoryLoader::new(&missing),
            Err(S3costError::Config(_))
        ));
    }

    #[test]
    fn test_files_discovered_recursively() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("2024").join("01");
        std::fs::create_dir_all(&nested).unwrap();
        File::create(nested.join("part-0.jsonl")).unwrap();
        File::create(temp_dir.path().join("ignored.csv")).unwrap();

        let loader = InventoryLoader::new(temp_dir.path()).unwrap();
        let files = loader.find_inventory_files().unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("part-0.jsonl"));
    }
}
