// sentinel-core/src/infrastructure/adapters/csv_files.rs

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::error::ScanError;

/// A source path is either one CSV file or a directory scanned recursively.
/// An existing directory without CSV files is an empty batch, not a fault.
pub fn resolve_csv_files(source: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if source.is_file() {
        return Ok(vec![source.to_path_buf()]);
    }
    if !source.is_dir() {
        return Err(ScanError::Engine(format!(
            "Source path not found: {}",
            source.display()
        )));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.map_err(|e| ScanError::Engine(e.to_string()))?;
        let is_csv = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if entry.file_type().is_file() && is_csv {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Single-quoted SQL string literal.
pub fn sql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Double-quoted SQL identifier.
pub fn sql_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_directory_is_scanned_recursively() -> Result<()> {
        let dir = tempdir()?;
        fs::create_dir_all(dir.path().join("2024/06"))?;
        fs::write(dir.path().join("b.csv"), "sensor_id\n")?;
        fs::write(dir.path().join("2024/06/a.CSV"), "sensor_id\n")?;
        fs::write(dir.path().join("notes.txt"), "ignored")?;

        let files = resolve_csv_files(dir.path())?;
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().is_some()));
        Ok(())
    }

    #[test]
    fn test_empty_directory_is_empty_batch() -> Result<()> {
        let dir = tempdir()?;
        assert!(resolve_csv_files(dir.path())?.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_path_is_fault() {
        let res = resolve_csv_files(Path::new("/definitely/not/here"));
        assert!(matches!(res, Err(ScanError::Engine(_))));
    }

    #[test]
    fn test_sql_escaping() {
        assert_eq!(sql_literal("it's.csv"), "'it''s.csv'");
        assert_eq!(sql_identifier("temp\"c"), "\"temp\"\"c\"");
    }
}
