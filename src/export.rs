use std::io::Write;
use std::path::Path;

use crate::error::{Result, SlikError};
use crate::models::{FacilityRecord, COLUMNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    #[cfg(feature = "xlsx")]
    Xlsx,
    Csv,
    Json,
}

const ALL_FORMATS: &[ExportFormat] = &[
    #[cfg(feature = "xlsx")]
    ExportFormat::Xlsx,
    ExportFormat::Csv,
    ExportFormat::Json,
];

impl ExportFormat {
    pub fn key(&self) -> &'static str {
        match self {
            #[cfg(feature = "xlsx")]
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    pub fn from_key(key: &str) -> Result<Self> {
        let key = key.trim().trim_start_matches('.');
        ALL_FORMATS
            .iter()
            .find(|f| f.key().eq_ignore_ascii_case(key))
            .copied()
            .ok_or_else(|| SlikError::UnknownFormat(key.to_string()))
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_key(ext).ok()
    }
}

/// Write `records` to `path`, creating parent directories as needed.
pub fn write_records(
    records: &[FacilityRecord],
    path: &Path,
    format: ExportFormat,
    sheet_name: &str,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    match format {
        #[cfg(feature = "xlsx")]
        ExportFormat::Xlsx => write_xlsx(records, path, sheet_name)?,
        ExportFormat::Csv => write_csv(records, std::fs::File::create(path)?)?,
        ExportFormat::Json => {
            let file = std::fs::File::create(path)?;
            write_json(records, std::io::BufWriter::new(file))?
        }
    }
    tracing::info!(
        path = %path.display(),
        format = format.key(),
        records = records.len(),
        "wrote export"
    );
    Ok(())
}

#[cfg(feature = "xlsx")]
fn write_xlsx(records: &[FacilityRecord], path: &Path, sheet_name: &str) -> Result<()> {
    use rust_xlsxwriter::{Format, Workbook};

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;

    for (col, header) in COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }
    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        for (col, value) in record.row().iter().enumerate() {
            sheet.write_string(row, col as u16, *value)?;
        }
    }
    sheet.autofit();
    workbook.save(path)?;
    Ok(())
}

pub fn write_csv<W: Write>(records: &[FacilityRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(COLUMNS)?;
    for record in records {
        wtr.write_record(record.row())?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(records: &[FacilityRecord], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
