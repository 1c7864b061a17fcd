use crate::extractor::{extract_debtor_name, extract_fields};
use crate::models::FacilityRecord;
use crate::splitter::split_blocks;
use crate::status::classify_condition;
use crate::text::normalize_text;

/// Outcome of parsing one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    pub debtor_name: String,
    /// Blocks that carried an institution header.
    pub blocks: usize,
    /// Blocks dropped because their condition is neither active nor written off.
    pub rejected: usize,
    pub records: Vec<FacilityRecord>,
}

pub fn parse_slik_report(raw_text: &str) -> ParseReport {
    let text = normalize_text(raw_text);
    let debtor_name = extract_debtor_name(&text);
    let blocks = split_blocks(&text);
    tracing::debug!(blocks = blocks.len(), debtor = %debtor_name, "split report");

    let mut records = Vec::new();
    let mut rejected = 0usize;
    for block in &blocks {
        let fields = extract_fields(block);
        let Some(status) = classify_condition(&fields.condition) else {
            tracing::debug!(
                institution = block.institution,
                condition = %fields.condition,
                "skipping facility with unreported condition"
            );
            rejected += 1;
            continue;
        };
        records.push(FacilityRecord {
            debtor_name: debtor_name.clone(),
            institution: block.institution.to_string(),
            outstanding: fields.outstanding,
            quality: fields.quality,
            days_in_arrears: fields.days_in_arrears,
            credit_type: fields.credit_type,
            usage_type: fields.usage_type,
            restructure_count: fields.restructure_count,
            last_restructured: fields.last_restructured,
            status,
            interest_rate: fields.interest_rate,
        });
    }

    ParseReport {
        debtor_name,
        blocks: blocks.len(),
        rejected,
        records,
    }
}

/// Facilities in report order. Only active and written-off facilities are kept.
#[allow(dead_code)]
pub fn parse_slik(raw_text: &str) -> Vec<FacilityRecord> {
    parse_slik_report(raw_text).records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FacilityStatus, UNKNOWN_DEBTOR};

    const REPORT: &str = "\
IDEB SLIK\r\n\
DATA POKOK DEBITUR   \r\n\
\r\n\
BUDI SANTOSO LAKI-LAKI\r\n\
\r\n\
002 - PT Bank Rakyat Indonesia (Persero) Tbk\r\n\
Baki Debet Rp 150.000.000,00\r\n\
Kualitas 2 - Dalam Perhatian Khusus\r\n\
Jumlah Hari Tunggakan 45\r\n\
Jenis Kredit/Pembiayaan Kredit Modal Kerja Nilai Proyek Rp 0\r\n\
Jenis Penggunaan Modal Kerja\r\n\
Frekuensi Restrukturisasi 1\r\n\
Tanggal Restrukturisasi Akhir 12 Maret 2022\r\n\
Kondisi Fasilitas Aktif\r\n\
Suku Bunga/Imbalan 11,50%\r\n\
\r\n\
008 - PT Bank Mandiri (Persero) Tbk\r\n\
Baki Debet Rp 0\r\n\
Kondisi Lunas\r\n\
009 - PT Bank Negara Indonesia (Persero) Tbk\r\n\
Baki Debet Rp 7.500.000\r\n\
Kualitas 5 - Macet\r\n\
Kondisi Dihapusbukukan\r\n\
";

    #[test]
    fn test_no_headers_yields_empty() {
        assert!(parse_slik("").is_empty());
        assert!(parse_slik("BUDI SANTOSO LAKI-LAKI\nKondisi Fasilitas Aktif\n").is_empty());
    }

    #[test]
    fn test_full_report() {
        let report = parse_slik_report(REPORT);
        assert_eq!(report.debtor_name, "BUDI SANTOSO");
        assert_eq!(report.blocks, 3);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.records.len(), 2);

        let bri = &report.records[0];
        assert_eq!(bri.debtor_name, "BUDI SANTOSO");
        assert_eq!(bri.institution, "PT Bank Rakyat Indonesia (Persero) Tbk");
        assert_eq!(bri.outstanding, "Rp 150.000.000,00");
        assert_eq!(bri.quality, "2 - Dalam Perhatian Khusus");
        assert_eq!(bri.days_in_arrears, "45");
        assert_eq!(bri.credit_type, "Kredit Modal Kerja");
        assert_eq!(bri.usage_type, "Modal Kerja");
        assert_eq!(bri.restructure_count, "1");
        assert_eq!(bri.last_restructured, "12 Maret 2022");
        assert_eq!(bri.status, FacilityStatus::Active);
        assert_eq!(bri.interest_rate, "11,50%");

        let bni = &report.records[1];
        assert_eq!(bni.institution, "PT Bank Negara Indonesia (Persero) Tbk");
        assert_eq!(bni.status, FacilityStatus::WrittenOff);
        assert_eq!(bni.days_in_arrears, "0");
        assert_eq!(bni.credit_type, "");
    }

    #[test]
    fn test_single_active_block() {
        let text = "\n001 - PT Bank Contoh Tbk\nBaki Debet Rp 10.000.000\nKualitas 1 - Lancar\nKondisi Fasilitas Aktif\n";
        let records = parse_slik(text);
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.status.label(), "Fasilitas Aktif");
        assert_eq!(r.outstanding, "Rp 10.000.000");
        assert_eq!(r.quality, "1 - Lancar");
        assert_eq!(r.debtor_name, UNKNOWN_DEBTOR);
        assert_eq!(r.days_in_arrears, "0");
        assert_eq!(r.credit_type, "");
        assert_eq!(r.usage_type, "");
        assert_eq!(r.restructure_count, "");
        assert_eq!(r.last_restructured, "");
        assert_eq!(r.interest_rate, "");
    }

    #[test]
    fn test_paid_off_is_dropped() {
        let text = "\
001 - PT Bank Satu Tbk
Kondisi Sudah Lunas
002 - PT Bank Dua Tbk
Kondisi Dihapusbukukan
";
        let records = parse_slik(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].institution, "PT Bank Dua Tbk");
        assert_eq!(records[0].status, FacilityStatus::WrittenOff);
    }

    #[test]
    fn test_missing_condition_is_dropped() {
        let report = parse_slik_report("001 - PT Bank Satu Tbk\nBaki Debet Rp 1.000\n");
        assert_eq!(report.blocks, 1);
        assert_eq!(report.rejected, 1);
        assert!(report.records.is_empty());
    }

    #[test]
    fn test_records_keep_report_order() {
        let text = "\
003 - PT Bank C Tbk
Kondisi Fasilitas Aktif
001 - PT Bank A Tbk
Kondisi Fasilitas Aktif
002 - PT Bank B Tbk
Kondisi Dihapusbukukan
";
        let names: Vec<String> = parse_slik(text).into_iter().map(|r| r.institution).collect();
        assert_eq!(names, vec!["PT Bank C Tbk", "PT Bank A Tbk", "PT Bank B Tbk"]);
    }

    #[test]
    fn test_output_never_exceeds_blocks() {
        let report = parse_slik_report(REPORT);
        assert!(report.records.len() <= report.blocks);
        assert!(report
            .records
            .iter()
            .all(|r| matches!(r.status, FacilityStatus::Active | FacilityStatus::WrittenOff)));
    }
}
