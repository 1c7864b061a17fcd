/// Format a float as Rupiah with Indonesian separators: Rp 1.234.567,89
pub fn rupiah(val: f64) -> String {
    let negative = val < 0.0;
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-Rp {grouped},{dec_part}")
    } else {
        format!("Rp {grouped},{dec_part}")
    }
}

/// Parse a balance as printed in the report (`Rp 10.000.000,00`).
/// `.` groups thousands and `,` marks decimals.
pub fn parse_rupiah(raw: &str) -> Option<f64> {
    let s = raw.trim().trim_start_matches("Rp").trim();
    let s = s.trim_end_matches(['.', ',']);
    if s.is_empty() {
        return None;
    }
    s.replace('.', "").replace(',', ".").parse().ok()
}
