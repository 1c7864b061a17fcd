use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::UNKNOWN_DEBTOR;
use crate::splitter::Block;

// ---------------------------------------------------------------------------
// Debtor name (document level)
// ---------------------------------------------------------------------------

static NAME_BEFORE_GENDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^([A-Z][A-Z ]{3,})\s+(?:LAKI-LAKI|PEREMPUAN)").expect("valid regex")
});

static NAME_LABELED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Nama Sesuai Identitas\s*:?\s*([^\n]+)").expect("valid regex"));

/// Debtor name for the whole report: an uppercase name line followed by the
/// gender, else the labeled identity name, else `Tidak Diketahui`.
pub fn extract_debtor_name(text: &str) -> String {
    [&*NAME_BEFORE_GENDER, &*NAME_LABELED]
        .iter()
        .find_map(|re| {
            let name = re.captures(text)?.get(1)?.as_str().trim();
            (!name.is_empty()).then(|| name.to_string())
        })
        .unwrap_or_else(|| UNKNOWN_DEBTOR.to_string())
}

// ---------------------------------------------------------------------------
// Field rules (per block)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Outstanding,
    Quality,
    DaysInArrears,
    CreditType,
    UsageType,
    RestructureCount,
    LastRestructured,
    Condition,
    InterestRate,
}

/// Label pattern for one field. Capture group 1 is the value; `default`
/// is used when the pattern does not match.
pub struct FieldRule {
    pub field: Field,
    pub pattern: &'static str,
    pub default: &'static str,
    pub clean: fn(&str) -> String,
}

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

fn strip_project_value(value: &str) -> String {
    let value = value.find("Nilai Proyek").map_or(value, |i| &value[..i]);
    value.trim().to_string()
}

pub static FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::Outstanding,
        pattern: r"(Rp\s[\d.,]+)",
        default: "",
        clean: trimmed,
    },
    FieldRule {
        field: Field::Quality,
        pattern: r"Kualitas\s([1-5]\s-\s.*)",
        default: "",
        clean: trimmed,
    },
    FieldRule {
        field: Field::DaysInArrears,
        pattern: r"Jumlah Hari Tunggakan\s(\d+)",
        default: "0",
        clean: trimmed,
    },
    FieldRule {
        field: Field::CreditType,
        pattern: r"Jenis Kredit/Pembiayaan\s(.+)",
        default: "",
        clean: strip_project_value,
    },
    FieldRule {
        field: Field::UsageType,
        pattern: r"Jenis Penggunaan\s(Konsumsi|Modal Kerja|Investasi)",
        default: "",
        clean: trimmed,
    },
    FieldRule {
        field: Field::RestructureCount,
        pattern: r"Frekuensi Restrukturisasi\s(\d+)",
        default: "",
        clean: trimmed,
    },
    FieldRule {
        field: Field::LastRestructured,
        pattern: r"Tanggal Restrukturisasi Akhir\s(\d{1,2}\s\w+\s\d{4})",
        default: "",
        clean: trimmed,
    },
    FieldRule {
        field: Field::Condition,
        pattern: r"Kondisi\s(.+)",
        default: "",
        clean: trimmed,
    },
    FieldRule {
        field: Field::InterestRate,
        pattern: r"Suku Bunga/Imbalan\s([\d,.]+%)",
        default: "",
        clean: trimmed,
    },
];

static COMPILED_RULES: Lazy<Vec<(&'static FieldRule, Regex)>> = Lazy::new(|| {
    FIELD_RULES
        .iter()
        .map(|rule| (rule, Regex::new(rule.pattern).expect("valid field pattern")))
        .collect()
});

/// Raw field values pulled from one block. `condition` is the unmapped
/// `Kondisi` text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub outstanding: String,
    pub quality: String,
    pub days_in_arrears: String,
    pub credit_type: String,
    pub usage_type: String,
    pub restructure_count: String,
    pub last_restructured: String,
    pub condition: String,
    pub interest_rate: String,
}

impl ExtractedFields {
    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Outstanding => &mut self.outstanding,
            Field::Quality => &mut self.quality,
            Field::DaysInArrears => &mut self.days_in_arrears,
            Field::CreditType => &mut self.credit_type,
            Field::UsageType => &mut self.usage_type,
            Field::RestructureCount => &mut self.restructure_count,
            Field::LastRestructured => &mut self.last_restructured,
            Field::Condition => &mut self.condition,
            Field::InterestRate => &mut self.interest_rate,
        }
    }
}

/// Apply a single rule to `text`, falling back to the rule's default.
pub fn extract_field(rule: &FieldRule, re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| (rule.clean)(m.as_str()))
        .unwrap_or_else(|| rule.default.to_string())
}

pub fn extract_fields(block: &Block<'_>) -> ExtractedFields {
    let mut fields = ExtractedFields::default();
    for (rule, re) in COMPILED_RULES.iter() {
        *fields.slot(rule.field) = extract_field(rule, re, block.text);
    }
    fields
}
