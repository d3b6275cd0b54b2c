use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::error::CandidateSkip;
use crate::model::{CourseCandidate, PatternKind, Season, Semester};

// "IST 302 Databases 4 Fall 2025"
static FULL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z]{2,4})\s+(\d{3})\s+([A-Za-z\s]+?)\s+(\d)\s+((?i:Fall|Spring))\s+(\d{4})").unwrap()
});

// "IST Deep Learning 4 Spring 2026"
static PARTIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z]{2,4})\s+([A-Z][A-Za-z\s]+?)\s+(\d)\s+((?i:Fall|Spring))\s+(\d{4})").unwrap()
});

/// All full-code rows, in document order.
pub fn match_full(text: &str) -> Vec<CourseCandidate> {
    FULL_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let code = format!("{} {}", &caps[1], &caps[2]);
            build(&caps, code, 3, PatternKind::Full)
                .map_err(|reason| debug!(?reason, row = &caps[0], "skipped candidate"))
                .ok()
        })
        .collect()
}

/// All department-only rows, in document order.
pub fn match_partial(text: &str) -> Vec<CourseCandidate> {
    PARTIAL_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let code = caps[1].to_string();
            build(&caps, code, 2, PatternKind::Partial)
                .map_err(|reason| debug!(?reason, row = &caps[0], "skipped candidate"))
                .ok()
        })
        .collect()
}

/// `title_group` is the capture index of the title; units, season and year
/// follow it.
fn build(
    caps: &Captures,
    code: String,
    title_group: usize,
    pattern: PatternKind,
) -> Result<CourseCandidate, CandidateSkip> {
    let whole = caps.get_match();
    let units: u8 = caps[title_group + 1]
        .parse()
        .map_err(|_| CandidateSkip::Unparsable)?;
    let season = Season::parse(&caps[title_group + 2]).ok_or(CandidateSkip::Unparsable)?;
    let year: u16 = caps[title_group + 3]
        .parse()
        .map_err(|_| CandidateSkip::Unparsable)?;

    Ok(CourseCandidate {
        code,
        title: caps[title_group].trim().to_string(),
        units,
        semester: Some(Semester { season, year }),
        position: whole.start(),
        end: whole.end(),
        pattern,
    })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_row() {
        let c = match_full("CISAT CORE COURSES IST 302 Databases 4 Fall 2025");
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].code, "IST 302");
        assert_eq!(c[0].title, "Databases");
        assert_eq!(c[0].units, 4);
        assert_eq!(c[0].semester.map(|s| s.to_string()).as_deref(), Some("Fall 2025"));
        assert_eq!(c[0].position, 19);
        assert_eq!(c[0].pattern, PatternKind::Full);
    }

    #[test]
    fn multi_word_title_and_season_case() {
        let c = match_full("IST 303 Software Development 4 SPRING 2026");
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].title, "Software Development");
        assert_eq!(c[0].semester.map(|s| s.to_string()).as_deref(), Some("Spring 2026"));
    }

    #[test]
    fn rows_in_document_order() {
        let text = "IST 302 Databases 4 Fall 2025 IST 303 Software Development 4 Spring 2026 \
            IST 304 Communication and Leadership 4 Fall 2026";
        let codes: Vec<String> = match_full(text).into_iter().map(|c| c.code).collect();
        assert_eq!(codes, ["IST 302", "IST 303", "IST 304"]);
    }

    #[test]
    fn row_without_semester_is_not_a_candidate() {
        assert!(match_full("IST 302 Databases 4").is_empty());
        assert!(match_full("IST 302 Databases 4 Summer 2025").is_empty());
    }

    #[test]
    fn multi_digit_units_rejected() {
        assert!(match_full("IST 302 Databases 12 Fall 2025").is_empty());
    }

    #[test]
    fn unparsable_fields_skip_the_row() {
        let loose = Regex::new(r"(\w+) (\d+) (\w+) (\d+)").unwrap();
        for row in ["Databases 4 Summer 2025", "Databases 4 Fall 99999", "Databases 300 Fall 2025"] {
            let caps = loose.captures(row).unwrap();
            let built = build(&caps, "IST 302".into(), 1, PatternKind::Full);
            assert_eq!(built.err(), Some(CandidateSkip::Unparsable), "{row}");
        }
    }

    #[test]
    fn partial_row() {
        let c = match_partial("IST Deep Learning 4 Spring 2026");
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].code, "IST");
        assert_eq!(c[0].title, "Deep Learning");
        assert_eq!(c[0].pattern, PatternKind::Partial);
    }

    #[test]
    fn partial_does_not_fire_on_numbered_rows() {
        assert!(match_partial("IST 302 Databases 4 Fall 2025").is_empty());
    }

    #[test]
    fn partial_needs_uppercase_department() {
        assert!(match_partial("ist Deep Learning 4 Spring 2026").is_empty());
    }
}
