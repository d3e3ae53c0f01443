// src/file.rs

use std::{
    fs,
    path::{ Path, PathBuf },
};

use crate::config::options::ExportOptions;
use crate::csv::report_to_string;
use crate::report::Report;

/// Read an exported document whole. Invalid UTF-8 is replaced, not rejected.
pub fn read_document(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if !path.is_file() {
        return Err(format!("Not a file: {}", path.display()).into());
    }
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Does the path look like an HTML export we can load?
pub fn is_html_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
        .unwrap_or(false)
}

/// Write the report according to ExportOptions (path, headers policy, delimiter).
/// Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    report: &Report,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = report_to_string(report, export.include_headers, export.delim());
    fs::write(&path, contents)?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_extension_check() {
        assert!(is_html_path(Path::new("export.html")));
        assert!(is_html_path(Path::new("EXPORT.HTM")));
        assert!(!is_html_path(Path::new("export.csv")));
        assert!(!is_html_path(Path::new("export")));
    }

    #[test]
    fn missing_document_is_an_error() {
        let p = std::env::temp_dir().join("jira_report_definitely_missing.html");
        assert!(read_document(&p).is_err());
    }
}
