use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::parse_file;
use crate::error::Result;
use crate::export::write_json;
use crate::fmt::{parse_rupiah, rupiah};
use crate::models::{FacilityRecord, FacilityStatus};

fn total_outstanding(records: &[FacilityRecord]) -> f64 {
    records
        .iter()
        .filter_map(|r| parse_rupiah(&r.outstanding))
        .sum()
}

pub fn run(file: &str, json: bool) -> Result<()> {
    let report = parse_file(file)?;

    if json {
        let stdout = std::io::stdout();
        return write_json(&report.records, stdout.lock());
    }

    if report.records.is_empty() {
        println!("No active or written-off facilities found in {file}.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Pelapor",
        "Baki Debet",
        "Kualitas",
        "Tunggakan",
        "Jenis Kredit",
        "Penggunaan",
        "Suku Bunga",
        "Kondisi",
    ]);
    for r in &report.records {
        let status = match r.status {
            FacilityStatus::Active => r.status.label().green(),
            FacilityStatus::WrittenOff => r.status.label().red(),
        };
        table.add_row(vec![
            Cell::new(&r.institution),
            Cell::new(&r.outstanding),
            Cell::new(&r.quality),
            Cell::new(&r.days_in_arrears),
            Cell::new(&r.credit_type),
            Cell::new(&r.usage_type),
            Cell::new(&r.interest_rate),
            Cell::new(status),
        ]);
    }

    println!("{}\n{table}", report.debtor_name.bold());
    println!(
        "{} facilities, total outstanding {}",
        report.records.len(),
        rupiah(total_outstanding(&report.records))
    );
    Ok(())
}
