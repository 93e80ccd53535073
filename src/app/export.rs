//! Saving the current explanation as a plain-text file.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use super::error::AppError;
use super::formatter::strip_tags;

/// Suggested export file name for a given date: `explanation-YYYY-MM-DD.txt`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("explanation-{}.txt", date.format("%Y-%m-%d"))
}

/// Strip markup from the rendered output and write it to `path`.
pub fn write_plain_text(path: &Path, html: &str) -> Result<(), AppError> {
    fs::write(path, strip_tags(html))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename_format() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        assert_eq!(export_filename(date), "explanation-2026-08-08.txt");
    }

    #[test]
    fn test_export_filename_pads_components() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
        assert_eq!(export_filename(date), "explanation-2026-01-03.txt");
    }

    #[test]
    fn test_write_plain_text_strips_markup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_plain_text(&path, "<p><strong>bold</strong> and plain</p>").unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "bold and plain");
    }

    #[test]
    fn test_write_plain_text_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let err = write_plain_text(&path, "<p>text</p>").unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
