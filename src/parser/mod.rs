pub mod courses;
pub mod dedup;
pub mod normalize;
pub mod notes;
pub mod sections;

use std::collections::HashSet;

use tracing::{debug, info};

use crate::config::Settings;
use crate::error::CandidateSkip;
use crate::model::{CourseCandidate, CourseRecord, ExtractionResult, PatternKind, SectionKind};
use sections::SectionBoundary;

/// Local pipeline: raw text → normalized text → boundaries → candidates →
/// per-section records. Never fails; unreadable text gives an empty result.
pub fn extract_local(raw: &str, settings: &Settings) -> ExtractionResult {
    let text = normalize::normalize(raw);
    let boundaries = sections::locate_sections(&text);
    extract_normalized(&text, &boundaries, settings)
}

fn extract_normalized(text: &str, boundaries: &[SectionBoundary], settings: &Settings) -> ExtractionResult {
    let mut result = ExtractionResult::default();
    let full = courses::match_full(text);
    let departments: HashSet<String> = full
        .iter()
        .filter_map(|c| c.code.split_whitespace().next())
        .map(str::to_string)
        .collect();
    let ctx = RowContext {
        text,
        boundaries,
        departments: &departments,
        settings,
    };

    for candidate in full {
        ctx.accept(&mut result, candidate);
    }

    for candidate in courses::match_partial(text) {
        if dedup::partial_is_covered(&candidate.title, result.all_courses()) {
            skip(&candidate, CandidateSkip::DuplicateTitle);
            continue;
        }
        ctx.accept(&mut result, candidate);
    }

    info!(
        total = result.total(),
        core = result.core_courses.len(),
        concentration = result.concentration_courses.len(),
        elective = result.elective_courses.len(),
        "local extraction done"
    );
    result
}

/// What every candidate is checked against while building one result.
struct RowContext<'a> {
    text: &'a str,
    boundaries: &'a [SectionBoundary],
    departments: &'a HashSet<String>,
    settings: &'a Settings,
}

impl RowContext<'_> {
    fn accept(&self, result: &mut ExtractionResult, candidate: CourseCandidate) {
        let Some(section) = sections::assign_section(self.boundaries, candidate.position) else {
            skip(&candidate, CandidateSkip::NoSection);
            return;
        };
        if dedup::title_taken(&candidate.title, section, result.section(section)) {
            skip(&candidate, CandidateSkip::DuplicateTitle);
            return;
        }

        let notes = notes::extract_notes(
            self.text,
            candidate.end,
            self.settings.notes_window,
            self.departments,
        );
        debug!(
            code = %candidate.code,
            title = %candidate.title,
            %section,
            partial = candidate.pattern == PatternKind::Partial,
            "extracted course"
        );
        result
            .section_mut(section)
            .push(CourseRecord::from_candidate(candidate, section, notes));
    }
}

fn skip(candidate: &CourseCandidate, reason: CandidateSkip) {
    debug!(code = %candidate.code, title = %candidate.title, ?reason, "skipped candidate");
}

/// Boundaries plus per-section counts, for the `sections` debug command.
pub fn section_report(raw: &str, settings: &Settings) -> (Vec<SectionBoundary>, Vec<(SectionKind, usize)>) {
    let text = normalize::normalize(raw);
    let boundaries = sections::locate_sections(&text);
    let result = extract_normalized(&text, &boundaries, settings);
    let counts = SectionKind::ALL
        .iter()
        .map(|k| (*k, result.section(*k).len()))
        .collect();
    (boundaries, counts)
}

// ── Tests ──
