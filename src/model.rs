use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three course tables on a planning sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SectionKind {
    #[default]
    Core,
    Concentration,
    Elective,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [
        SectionKind::Core,
        SectionKind::Concentration,
        SectionKind::Elective,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Core => "CORE",
            SectionKind::Concentration => "CONCENTRATION",
            SectionKind::Elective => "ELECTIVE",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Fall,
    Spring,
}

impl Season {
    /// Case-insensitive; anything but fall/spring is rejected.
    pub fn parse(s: &str) -> Option<Season> {
        if s.eq_ignore_ascii_case("fall") {
            Some(Season::Fall)
        } else if s.eq_ignore_ascii_case("spring") {
            Some(Season::Spring)
        } else {
            None
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Fall => f.write_str("Fall"),
            Season::Spring => f.write_str("Spring"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Semester {
    pub season: Season,
    pub year: u16,
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.season, self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Department and number, e.g. `IST 302`.
    Full,
    /// Department only; the number was lost in conversion.
    Partial,
}

/// A raw pattern hit before section assignment and dedup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCandidate {
    pub code: String,
    pub title: String,
    pub units: u8,
    pub semester: Option<Semester>,
    /// Byte offset of the match start in the normalized text.
    pub position: usize,
    /// Byte offset just past the semester year.
    pub end: usize,
    pub pattern: PatternKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    #[serde(rename = "course_code")]
    pub code: String,
    #[serde(rename = "course_title")]
    pub title: String,
    /// Legacy label for `title`.
    #[serde(rename = "course_name", default)]
    pub name: String,
    pub units: u8,
    /// Legacy label for `units`.
    #[serde(default)]
    pub credits: u8,
    #[serde(default)]
    pub semester_taken: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub waived_transferred: Option<String>,
    #[serde(default)]
    pub section: SectionKind,
    #[serde(default)]
    pub completed: bool,
}

impl CourseRecord {
    pub fn from_candidate(candidate: CourseCandidate, section: SectionKind, notes: Option<String>) -> Self {
        let semester_taken = candidate.semester.map(|s| s.to_string());
        let completed = is_taken(semester_taken.as_deref());
        CourseRecord {
            code: candidate.code,
            name: candidate.title.clone(),
            title: candidate.title,
            units: candidate.units,
            credits: candidate.units,
            semester_taken,
            notes,
            waived_transferred: None,
            section,
            completed,
        }
    }
}

/// A course counts as completed once its semester column holds anything.
pub fn is_taken(semester_taken: Option<&str>) -> bool {
    semester_taken.is_some_and(|s| !s.trim().is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExtractionResult {
    #[serde(default)]
    pub core_courses: Vec<CourseRecord>,
    #[serde(default)]
    pub concentration_courses: Vec<CourseRecord>,
    #[serde(default)]
    pub elective_courses: Vec<CourseRecord>,
}

impl ExtractionResult {
    pub fn section(&self, kind: SectionKind) -> &[CourseRecord] {
        match kind {
            SectionKind::Core => &self.core_courses,
            SectionKind::Concentration => &self.concentration_courses,
            SectionKind::Elective => &self.elective_courses,
        }
    }

    pub fn section_mut(&mut self, kind: SectionKind) -> &mut Vec<CourseRecord> {
        match kind {
            SectionKind::Core => &mut self.core_courses,
            SectionKind::Concentration => &mut self.concentration_courses,
            SectionKind::Elective => &mut self.elective_courses,
        }
    }

    /// Flattened view in CORE, CONCENTRATION, ELECTIVE order.
    pub fn all_courses(&self) -> impl Iterator<Item = &CourseRecord> {
        self.core_courses
            .iter()
            .chain(&self.concentration_courses)
            .chain(&self.elective_courses)
    }

    pub fn total(&self) -> usize {
        self.core_courses.len() + self.concentration_courses.len() + self.elective_courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

// `courses` is derived, so it is only ever written, never read back.
impl Serialize for ExtractionResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let courses: Vec<&CourseRecord> = self.all_courses().collect();
        let mut st = serializer.serialize_struct("ExtractionResult", 4)?;
        st.serialize_field("core_courses", &self.core_courses)?;
        st.serialize_field("concentration_courses", &self.concentration_courses)?;
        st.serialize_field("elective_courses", &self.elective_courses)?;
        st.serialize_field("courses", &courses)?;
        st.end()
    }
}

// ── Tests ──
