use serde::{Deserialize, Serialize};

/// Column headers in spreadsheet order. Serialized field names match.
pub const COLUMNS: [&str; 11] = [
    "Nama Debitur",
    "Pelapor",
    "Baki Debet",
    "Kualitas",
    "Jumlah Hari Tunggakan",
    "Jenis Kredit",
    "Jenis Penggunaan",
    "Frekuensi Restrukturisasi",
    "Tanggal Restrukturisasi Akhir",
    "Kondisi",
    "Suku Bunga",
];

/// Debtor name used when the report carries no recognizable name.
pub const UNKNOWN_DEBTOR: &str = "Tidak Diketahui";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityStatus {
    #[serde(rename = "Fasilitas Aktif")]
    Active,
    #[serde(rename = "Dihapusbukukan")]
    WrittenOff,
}

impl FacilityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Fasilitas Aktif",
            Self::WrittenOff => "Dihapusbukukan",
        }
    }
}

impl std::fmt::Display for FacilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One reported credit facility, flattened for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityRecord {
    #[serde(rename = "Nama Debitur")]
    pub debtor_name: String,
    #[serde(rename = "Pelapor")]
    pub institution: String,
    #[serde(rename = "Baki Debet")]
    pub outstanding: String,
    #[serde(rename = "Kualitas")]
    pub quality: String,
    #[serde(rename = "Jumlah Hari Tunggakan")]
    pub days_in_arrears: String,
    #[serde(rename = "Jenis Kredit")]
    pub credit_type: String,
    #[serde(rename = "Jenis Penggunaan")]
    pub usage_type: String,
    #[serde(rename = "Frekuensi Restrukturisasi")]
    pub restructure_count: String,
    #[serde(rename = "Tanggal Restrukturisasi Akhir")]
    pub last_restructured: String,
    #[serde(rename = "Kondisi")]
    pub status: FacilityStatus,
    #[serde(rename = "Suku Bunga")]
    pub interest_rate: String,
}

impl FacilityRecord {
    /// Cell values in `COLUMNS` order.
    pub fn row(&self) -> [&str; 11] {
        [
            &self.debtor_name,
            &self.institution,
            &self.outstanding,
            &self.quality,
            &self.days_in_arrears,
            &self.credit_type,
            &self.usage_type,
            &self.restructure_count,
            &self.last_restructured,
            self.status.label(),
            &self.interest_rate,
        ]
    }
}
