use std::path::{Path, PathBuf};

use crate::cli::parse_file;
use crate::error::Result;
use crate::export::{write_records, ExportFormat};
use crate::settings::{get_output_dir, load_settings};

/// `--format` wins, then the output file's extension, then the configured default.
fn resolve_format(flag: Option<&str>, output: Option<&Path>, default: &str) -> Result<ExportFormat> {
    if let Some(key) = flag {
        return ExportFormat::from_key(key);
    }
    if let Some(format) = output.and_then(ExportFormat::from_path) {
        return Ok(format);
    }
    ExportFormat::from_key(default)
}

fn default_path(dir: &Path, format: ExportFormat) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    dir.join(format!("hasil_slik-{stamp}.{}", format.key()))
}

pub fn run(files: &[String], output: Option<String>, format: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let output = output.map(PathBuf::from);
    let format = resolve_format(format, output.as_deref(), &settings.default_format)?;

    let mut records = Vec::new();
    for file in files {
        let report = parse_file(file)?;
        println!(
            "{file}: {} facilities for {} ({} of {} skipped by condition)",
            report.records.len(),
            report.debtor_name,
            report.rejected,
            report.blocks,
        );
        records.extend(report.records);
    }

    if records.is_empty() {
        println!("No active or written-off facilities found. Nothing written.");
        return Ok(());
    }

    let path = output.unwrap_or_else(|| default_path(&get_output_dir(), format));
    write_records(&records, &path, format, &settings.sheet_name)?;
    println!("Wrote {} facilities to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_beats_extension() {
        let f = resolve_format(Some("json"), Some(Path::new("out.csv")), "csv").unwrap();
        assert_eq!(f, ExportFormat::Json);
    }

    #[test]
    fn test_extension_beats_default() {
        let f = resolve_format(None, Some(Path::new("out.csv")), "json").unwrap();
        assert_eq!(f, ExportFormat::Csv);
    }

    #[test]
    fn test_falls_back_to_default() {
        let f = resolve_format(None, Some(Path::new("out")), "json").unwrap();
        assert_eq!(f, ExportFormat::Json);
        let f = resolve_format(None, None, "csv").unwrap();
        assert_eq!(f, ExportFormat::Csv);
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        assert!(resolve_format(Some("docx"), None, "csv").is_err());
    }

    #[test]
    fn test_default_path_uses_format_extension() {
        let path = default_path(Path::new("/tmp/slik"), ExportFormat::Csv);
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("hasil_slik-"));
        assert!(name.ends_with(".csv"));
        assert_eq!(path.parent().unwrap(), Path::new("/tmp/slik"));
    }
}
