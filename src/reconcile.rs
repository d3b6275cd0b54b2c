use tracing::{info, warn};

use crate::model::{is_taken, ExtractionResult, SectionKind};

/// Backfill a sparse primary result from the local one.
///
/// Only when the primary holds fewer than `threshold` records, and only whole
/// sections: an empty primary section takes the local section as-is, a
/// populated one is never touched.
pub fn reconcile(primary: ExtractionResult, local: ExtractionResult, threshold: usize) -> ExtractionResult {
    let total = primary.total();
    if total >= threshold {
        return primary;
    }

    warn!(total, threshold, "low primary extraction count, using local fallback");
    let mut merged = primary;
    let mut local = local;
    for kind in SectionKind::ALL {
        if merged.section(kind).is_empty() {
            let filled = std::mem::take(local.section_mut(kind));
            if !filled.is_empty() {
                info!(section = %kind, count = filled.len(), "section filled from local");
            }
            *merged.section_mut(kind) = filled;
        }
    }
    merged
}

/// Stamp every record with its list's section, mirror the legacy labels and
/// recompute `completed`.
pub fn normalize_fields(result: &mut ExtractionResult) {
    for kind in SectionKind::ALL {
        for course in result.section_mut(kind) {
            course.section = kind;
            course.name = course.title.clone();
            course.credits = course.units;
            course.completed = is_taken(course.semester_taken.as_deref());
        }
    }
}

// ── Tests ──
