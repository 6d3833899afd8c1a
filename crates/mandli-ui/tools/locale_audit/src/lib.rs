#![forbid(unsafe_code)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(unused, unreachable_pub, missing_docs)]
#![allow(clippy::multiple_crate_versions)]
//! Audit the Mandli UI translation tables and record their digests.
//!
//! # Design
//! - Resolves the UI root relative to `CARGO_MANIFEST_DIR` so it can be run from any cwd.
//! - Every `*.json` table under `i18n/` must be a flat string map with exactly the
//!   keys of the reference `en` table; a gap would render as a raw key in the UI.
//! - Emits a deterministic `LOCALE_LOCK.txt` with one digest and key count per table.
//!
//! Failure modes include a missing reference table, malformed or nested JSON,
//! key drift between tables, and IO errors while reading or writing.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

const TABLE_DIR: &str = "i18n";
const REFERENCE_LOCALE: &str = "en";
const LOCK_FILE: &str = "LOCALE_LOCK.txt";

/// Errors returned by the locale audit.
#[derive(Debug, Error)]
pub enum AuditError {
    /// A required path is missing on disk.
    #[error("required path is missing: {}", path.display())]
    MissingPath {
        /// Path that could not be found.
        path: PathBuf,
    },
    /// A filesystem operation failed.
    #[error("io error at {}: {source}", path.display())]
    Io {
        /// Path involved in the failing IO operation.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Traversal of the table directory failed.
    #[error("directory walk failed at {}: {message}", path.display())]
    WalkFailed {
        /// Directory being traversed.
        path: PathBuf,
        /// Error message from directory traversal.
        message: String,
    },
    /// A table is not a flat JSON object of strings.
    #[error("table {} is not a flat string map: {source}", path.display())]
    Malformed {
        /// Offending table.
        path: PathBuf,
        /// Decoder error.
        source: serde_json::Error,
    },
    /// A table's keys differ from the reference table.
    #[error("locale {locale} drifted from {REFERENCE_LOCALE}: missing {missing:?}, extra {extra:?}")]
    Drift {
        /// Locale tag of the drifting table.
        locale: String,
        /// Reference keys absent from the table.
        missing: Vec<String>,
        /// Keys absent from the reference table.
        extra: Vec<String>,
    },
}

/// Digest and size of one audited table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    /// Locale tag (file stem).
    pub locale: String,
    /// Number of keys.
    pub keys: usize,
    /// Hex SHA-256 of the file bytes.
    pub sha256: String,
}

/// Audit the UI crate's tables and refresh the lock file.
///
/// # Errors
/// Returns an error if the tables are missing, malformed or out of parity, or
/// the lock file cannot be written.
pub fn run() -> Result<Vec<TableSummary>, AuditError> {
    let ui_root = ui_root_dir()?;
    audit_tables(&ui_root.join(TABLE_DIR))
}

fn ui_root_dir() -> Result<PathBuf, AuditError> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let ui_root = manifest_dir
        .parent()
        .and_then(Path::parent)
        .ok_or_else(|| AuditError::MissingPath {
            path: manifest_dir.to_path_buf(),
        })?;
    Ok(ui_root.to_path_buf())
}

/// Audit every table in `dir` against the reference table and write `LOCALE_LOCK.txt` there.
///
/// # Errors
/// See [`run`].
pub fn audit_tables(dir: &Path) -> Result<Vec<TableSummary>, AuditError> {
    let paths = table_paths(dir)?;
    let mut tables = BTreeMap::new();
    for path in &paths {
        let locale = locale_of(path);
        let (keys, sha256) = load_table(path)?;
        debug!(%locale, keys = keys.len(), "loaded table");
        tables.insert(locale, (keys, sha256));
    }

    let reference = tables
        .get(REFERENCE_LOCALE)
        .map(|(keys, _)| keys.clone())
        .ok_or_else(|| AuditError::MissingPath {
            path: dir.join(format!("{REFERENCE_LOCALE}.json")),
        })?;

    let mut first_drift = None;
    for (locale, (keys, _)) in &tables {
        let missing: Vec<String> = reference.difference(keys).cloned().collect();
        let extra: Vec<String> = keys.difference(&reference).cloned().collect();
        if missing.is_empty() && extra.is_empty() {
            continue;
        }
        warn!(%locale, missing = missing.len(), extra = extra.len(), "table drifted");
        if first_drift.is_none() {
            first_drift = Some(AuditError::Drift {
                locale: locale.clone(),
                missing,
                extra,
            });
        }
    }
    if let Some(err) = first_drift {
        return Err(err);
    }

    let summaries: Vec<TableSummary> = tables
        .into_iter()
        .map(|(locale, (keys, sha256))| TableSummary {
            locale,
            keys: keys.len(),
            sha256,
        })
        .collect();
    write_lock(dir, &summaries)?;
    info!(path = %dir.join(LOCK_FILE).display(), "wrote lock file");
    Ok(summaries)
}

fn table_paths(dir: &Path) -> Result<Vec<PathBuf>, AuditError> {
    if !dir.is_dir() {
        return Err(AuditError::MissingPath {
            path: dir.to_path_buf(),
        });
    }
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|err| AuditError::WalkFailed {
            path: dir.to_path_buf(),
            message: err.to_string(),
        })?;
        let is_json = entry.path().extension().is_some_and(|ext| ext == "json");
        if entry.file_type().is_file() && is_json {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

fn locale_of(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn load_table(path: &Path) -> Result<(BTreeSet<String>, String), AuditError> {
    let bytes = fs::read(path).map_err(|source| AuditError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table: BTreeMap<String, String> =
        serde_json::from_slice(&bytes).map_err(|source| AuditError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok((table.into_keys().collect(), format!("{:x}", hasher.finalize())))
}

fn write_lock(dir: &Path, summaries: &[TableSummary]) -> Result<(), AuditError> {
    let lock_path = dir.join(LOCK_FILE);
    let contents: String = summaries
        .iter()
        .map(|table| {
            format!(
                "{}.json sha256 {} keys {}\n",
                table.locale, table.sha256, table.keys
            )
        })
        .collect();
    fs::write(&lock_path, contents).map_err(|source| AuditError::Io {
        path: lock_path,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use tempfile::TempDir;

    type TestResult = Result<(), Box<dyn Error>>;

    fn write_tables(tables: &[(&str, &str)]) -> Result<TempDir, std::io::Error> {
        let dir = tempfile::tempdir()?;
        for (name, body) in tables {
            fs::write(dir.path().join(name), body)?;
        }
        Ok(dir)
    }

    #[test]
    fn matching_tables_write_a_sorted_lock() -> TestResult {
        let dir = write_tables(&[
            ("gu.json", r#"{"brand":"મંડળી બેંક","home":"હોમ"}"#),
            ("en.json", r#"{"brand":"Mandli Bank","home":"Home"}"#),
            ("notes.txt", "ignored"),
        ])?;

        let summaries = audit_tables(dir.path())?;
        let locales: Vec<&str> = summaries.iter().map(|s| s.locale.as_str()).collect();
        assert_eq!(locales, ["en", "gu"]);
        assert!(summaries.iter().all(|s| s.keys == 2 && s.sha256.len() == 64));

        let lock = fs::read_to_string(dir.path().join(LOCK_FILE))?;
        let lines: Vec<&str> = lock.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("en.json sha256 "));
        assert!(lines[1].ends_with("keys 2"));
        Ok(())
    }

    #[test]
    fn drift_reports_missing_and_extra_keys() -> TestResult {
        let dir = write_tables(&[
            ("en.json", r#"{"brand":"Mandli Bank","home":"Home"}"#),
            ("gu.json", r#"{"brand":"મંડળી બેંક","logout":"લૉગઆઉટ"}"#),
        ])?;

        match audit_tables(dir.path()) {
            Err(AuditError::Drift {
                locale,
                missing,
                extra,
            }) => {
                assert_eq!(locale, "gu");
                assert_eq!(missing, ["home"]);
                assert_eq!(extra, ["logout"]);
            }
            other => panic!("expected drift, got {other:?}"),
        }
        assert!(!dir.path().join(LOCK_FILE).exists());
        Ok(())
    }

    #[test]
    fn nested_values_are_rejected() -> TestResult {
        let dir = write_tables(&[("en.json", r#"{"nav":{"home":"Home"}}"#)])?;
        let result = audit_tables(dir.path());
        assert!(matches!(result, Err(AuditError::Malformed { .. })), "got {result:?}");
        Ok(())
    }

    #[test]
    fn reference_table_is_required() -> TestResult {
        let dir = write_tables(&[("gu.json", r#"{"brand":"મંડળી બેંક"}"#)])?;
        let result = audit_tables(dir.path());
        assert!(matches!(result, Err(AuditError::MissingPath { .. })), "got {result:?}");
        Ok(())
    }

    #[test]
    fn shipped_tables_are_in_parity() -> TestResult {
        let shipped = ui_root_dir()?.join(TABLE_DIR);
        let copy = tempfile::tempdir()?;
        for locale in ["en", "gu"] {
            let name = format!("{locale}.json");
            fs::copy(shipped.join(&name), copy.path().join(&name))?;
        }
        let summaries = audit_tables(copy.path())?;
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].keys, summaries[1].keys);
        Ok(())
    }
}
