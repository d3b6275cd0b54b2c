use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::model::SectionKind;

/// Table headings, in the order they appear on the sheet.
const ANCHORS: [(SectionKind, &str); 3] = [
    (SectionKind::Core, r"(?i)CISAT CORE COURSES"),
    (SectionKind::Concentration, r"(?i)CONCENTRATION COURSE"),
    (SectionKind::Elective, r"(?i)ELECTIVE or SECOND CONCENTRATION"),
];

static ANCHOR_RES: LazyLock<Vec<(SectionKind, Regex)>> = LazyLock::new(|| {
    ANCHORS
        .iter()
        .map(|(kind, pat)| (*kind, Regex::new(pat).unwrap()))
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBoundary {
    pub kind: SectionKind,
    pub offset: usize,
}

/// First heading of each kind, ascending by offset. Missing kinds are absent.
pub fn locate_sections(text: &str) -> Vec<SectionBoundary> {
    let mut boundaries: Vec<SectionBoundary> = ANCHOR_RES
        .iter()
        .filter_map(|(kind, re)| {
            re.find(text).map(|m| {
                debug!(section = %kind, offset = m.start(), "found section");
                SectionBoundary {
                    kind: *kind,
                    offset: m.start(),
                }
            })
        })
        .collect();

    boundaries.sort_by_key(|b| b.offset);
    boundaries.dedup_by_key(|b| b.offset);
    boundaries
}

/// Section of the nearest heading strictly before `position`.
/// `boundaries` must be sorted, as returned by [`locate_sections`].
pub fn assign_section(boundaries: &[SectionBoundary], position: usize) -> Option<SectionKind> {
    let idx = boundaries.partition_point(|b| b.offset < position);
    idx.checked_sub(1).map(|i| boundaries[i].kind)
}

// ── Tests ──
