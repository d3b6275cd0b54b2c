use crate::model::{CourseRecord, SectionKind};

/// A department-only row is taken to be a re-read of an accepted course when
/// its title appears inside that course's title. Substring, not equality:
/// "Learning" is covered by "Deep Learning".
pub fn partial_is_covered<'a>(
    title: &str,
    accepted: impl IntoIterator<Item = &'a CourseRecord>,
) -> bool {
    let needle = title.to_lowercase();
    accepted
        .into_iter()
        .any(|c| c.title.to_lowercase().contains(&needle))
}

/// Exact (case-insensitive) title repeat within one section.
pub fn title_taken(title: &str, section: SectionKind, section_courses: &[CourseRecord]) -> bool {
    section_courses
        .iter()
        .any(|c| c.section == section && c.title.to_lowercase() == title.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(title: &str, section: SectionKind) -> CourseRecord {
        CourseRecord {
            code: "IST 302".into(),
            title: title.into(),
            name: title.into(),
            units: 4,
            credits: 4,
            semester_taken: Some("Fall 2025".into()),
            notes: None,
            waived_transferred: None,
            section,
            completed: true,
        }
    }

    #[test]
    fn substring_suppresses() {
        let accepted = [rec("Deep Learning", SectionKind::Core)];
        assert!(partial_is_covered("Learning", &accepted));
        assert!(partial_is_covered("DEEP LEARNING", &accepted));
        assert!(!partial_is_covered("Machine Learning", &accepted));
    }

    #[test]
    fn covers_across_sections() {
        let accepted = [rec("Databases", SectionKind::Elective)];
        assert!(partial_is_covered("databases", &accepted));
    }

    #[test]
    fn nothing_accepted() {
        let none: [CourseRecord; 0] = [];
        assert!(!partial_is_covered("Databases", &none));
    }

    #[test]
    fn exact_repeat_only_within_section() {
        let core = [rec("Databases", SectionKind::Core)];
        assert!(title_taken("databases", SectionKind::Core, &core));
        assert!(!title_taken("Databases", SectionKind::Elective, &core));
        assert!(!title_taken("Data", SectionKind::Core, &core));
    }
}
