use once_cell::sync::Lazy;
use regex::Regex;

/// Start of a reporting-institution header: a three digit reporter code, a
/// dash and a `PT` company name, at the beginning of a line.
static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d{3}\s-\sPT\s").expect("valid regex"));

/// Institution name on the header line, up to the listed-company marker.
static INSTITUTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A\d{3}\s-\s(PT[^\n]*?Tbk)").expect("valid regex"));

/// Text of one reported facility, from its header up to the next header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub institution: &'a str,
    pub text: &'a str,
}

/// Cut normalized report text into one block per facility. Segments whose
/// header carries no institution name are dropped.
pub fn split_blocks(text: &str) -> Vec<Block<'_>> {
    let starts: Vec<usize> = HEADER.find_iter(text).map(|m| m.start()).collect();
    let mut blocks = Vec::with_capacity(starts.len());

    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(text.len());
        let segment = &text[start..end];
        let Some(caps) = INSTITUTION.captures(segment) else {
            tracing::debug!(offset = start, "skipping segment without institution name");
            continue;
        };
        let institution = caps.get(1).map_or("", |m| m.as_str().trim());
        blocks.push(Block {
            institution,
            text: segment,
        });
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_headers_yields_no_blocks() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("DATA POKOK DEBITUR\nBUDI SANTOSO LAKI-LAKI\n").is_empty());
    }

    #[test]
    fn test_splits_on_each_header() {
        let text = "\
preamble
002 - PT Bank Rakyat Indonesia (Persero) Tbk
Baki Debet Rp 1.000
008 - PT Bank Mandiri (Persero) Tbk
Baki Debet Rp 2.000
";
        let blocks = split_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].institution, "PT Bank Rakyat Indonesia (Persero) Tbk");
        assert!(blocks[0].text.contains("Rp 1.000"));
        assert!(!blocks[0].text.contains("Rp 2.000"));
        assert_eq!(blocks[1].institution, "PT Bank Mandiri (Persero) Tbk");
        assert!(blocks[1].text.ends_with("Rp 2.000\n"));
    }

    #[test]
    fn test_drops_segment_without_marker() {
        let text = "\
013 - PT Bank Perkreditan Rakyat Maju
Kondisi Fasilitas Aktif
009 - PT Bank Negara Indonesia (Persero) Tbk
Kondisi Fasilitas Aktif
";
        let blocks = split_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].institution, "PT Bank Negara Indonesia (Persero) Tbk");
    }

    #[test]
    fn test_header_must_start_a_line() {
        let text = "ref 002 - PT Bank Rakyat Indonesia (Persero) Tbk\n";
        assert!(split_blocks(text).is_empty());
    }

    #[test]
    fn test_marker_trailing_text_is_not_part_of_name() {
        let text = "002 - PT Bank Rakyat Indonesia (Persero) Tbk Kantor Cabang Malang\n";
        let blocks = split_blocks(text);
        assert_eq!(blocks[0].institution, "PT Bank Rakyat Indonesia (Persero) Tbk");
    }
}
