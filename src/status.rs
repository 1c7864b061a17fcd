use crate::models::FacilityStatus;

/// Condition markers checked in order; the first one contained in the
/// lowercased condition text decides the status.
pub const STATUS_RULES: &[(&str, FacilityStatus)] = &[
    ("aktif", FacilityStatus::Active),
    ("hapus", FacilityStatus::WrittenOff),
];

/// Map the free-text `Kondisi` value to a reportable status. Anything that is
/// neither active nor written off (paid off, restructured away, blank)
/// returns `None` and the facility is left out of the extract.
pub fn classify_condition(raw: &str) -> Option<FacilityStatus> {
    let lower = raw.to_lowercase();
    STATUS_RULES
        .iter()
        .find(|(marker, _)| lower.contains(marker))
        .map(|(_, status)| *status)
}
