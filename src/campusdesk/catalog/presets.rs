//! Ready-made screens: each console list with its seed data and filter controls.

use super::records::*;
use super::seed;
use crate::error::{DeskError, Result};
use crate::filter::FilterDescriptor;
use crate::screen::ListScreen;
use crate::store::memory::InMemoryStore;
use std::fmt;
use std::str::FromStr;

/// Lists reachable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Colleges,
    Students,
    Faculty,
    Questions,
    Tests,
    Assign,
    Subjects,
    Qualifications,
    Chapters,
    Topics,
    FacultySubjects,
    FacultyColleges,
}

impl Collection {
    pub const ALL: [Collection; 12] = [
        Collection::Colleges,
        Collection::Students,
        Collection::Faculty,
        Collection::Questions,
        Collection::Tests,
        Collection::Assign,
        Collection::Subjects,
        Collection::Qualifications,
        Collection::Chapters,
        Collection::Topics,
        Collection::FacultySubjects,
        Collection::FacultyColleges,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Colleges => "colleges",
            Collection::Students => "students",
            Collection::Faculty => "faculty",
            Collection::Questions => "questions",
            Collection::Tests => "tests",
            Collection::Assign => "assign",
            Collection::Subjects => "subjects",
            Collection::Qualifications => "qualifications",
            Collection::Chapters => "chapters",
            Collection::Topics => "topics",
            Collection::FacultySubjects => "faculty-subjects",
            Collection::FacultyColleges => "faculty-colleges",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Collection {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self> {
        Collection::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| DeskError::UnknownCollection(s.to_string()))
    }
}

pub fn colleges() -> Result<ListScreen<College>> {
    ListScreen::new(
        InMemoryStore::from_records(seed::colleges()),
        vec![FilterDescriptor::substring("search").on_field("name")],
    )
}

pub fn students() -> Result<ListScreen<Student>> {
    ListScreen::new(
        InMemoryStore::from_records(seed::students()),
        vec![
            FilterDescriptor::substring("name"),
            FilterDescriptor::substring("college"),
            FilterDescriptor::exact("class"),
            FilterDescriptor::exact("year"),
        ],
    )
}

pub fn faculty() -> Result<ListScreen<Faculty>> {
    ListScreen::new(
        InMemoryStore::from_records(seed::faculty()),
        vec![
            FilterDescriptor::substring("name"),
            FilterDescriptor::substring("subject").on_field("subjects"),
        ],
    )
}

pub fn questions() -> Result<ListScreen<Question>> {
    ListScreen::new(
        InMemoryStore::from_records(seed::questions()?),
        vec![
            FilterDescriptor::exact("subject"),
            FilterDescriptor::any_of("chapter").child_of("subject"),
            FilterDescriptor::any_of("topic").child_of("chapter"),
            FilterDescriptor::exact("class"),
            FilterDescriptor::exact("academicYear"),
            FilterDescriptor::substring("question"),
        ],
    )
}

pub fn test_list() -> Result<ListScreen<TestAssignment>> {
    ListScreen::new(
        InMemoryStore::from_records(seed::test_assignments()),
        vec![
            FilterDescriptor::exact("college"),
            FilterDescriptor::exact("class"),
            FilterDescriptor::any_of("subject"),
            FilterDescriptor::any_of("chapter"),
        ],
    )
}

pub fn assign() -> Result<ListScreen<TestAssignment>> {
    ListScreen::new(
        InMemoryStore::from_records(seed::test_assignments()),
        vec![
            FilterDescriptor::exact("college"),
            FilterDescriptor::exact("class"),
            FilterDescriptor::exact("subject"),
            FilterDescriptor::all_of("chapter").child_of("subject"),
            FilterDescriptor::all_of("topic").child_of("chapter"),
        ],
    )
}

pub fn subjects() -> Result<ListScreen<Subject>> {
    ListScreen::new(InMemoryStore::new(), Vec::new())
}

pub fn qualifications() -> Result<ListScreen<Qualification>> {
    ListScreen::new(InMemoryStore::new(), Vec::new())
}

pub fn chapters() -> Result<ListScreen<Chapter>> {
    ListScreen::new(InMemoryStore::new(), vec![FilterDescriptor::exact("subject")])
}

pub fn topics() -> Result<ListScreen<Topic>> {
    ListScreen::new(
        InMemoryStore::new(),
        vec![
            FilterDescriptor::exact("subject"),
            FilterDescriptor::exact("chapter").child_of("subject"),
        ],
    )
}

pub fn faculty_subjects() -> Result<ListScreen<FacultySubjectMapping>> {
    ListScreen::new(InMemoryStore::new(), Vec::new())
}

pub fn faculty_colleges() -> Result<ListScreen<FacultyCollegeMapping>> {
    ListScreen::new(
        InMemoryStore::new(),
        vec![FilterDescriptor::substring("search").on_field("facultyName")],
    )
}

pub fn self_study() -> Result<ListScreen<SelfStudyMaterial>> {
    ListScreen::new(InMemoryStore::new(), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterValue;
    use crate::screen::ScreenAction;

    fn set(key: &str, value: FilterValue) -> ScreenAction<Question> {
        ScreenAction::SetFilter {
            key: key.into(),
            value,
        }
    }

    #[test]
    fn collection_names_round_trip() {
        for c in Collection::ALL {
            assert_eq!(c.name().parse::<Collection>().unwrap(), c);
        }
        assert!(matches!(
            "pads".parse::<Collection>(),
            Err(DeskError::UnknownCollection(_))
        ));
    }

    #[test]
    fn stan_finds_only_stanford() {
        let mut screen = colleges().unwrap();
        screen
            .apply(ScreenAction::SetFilter {
                key: "search".into(),
                value: FilterValue::one("stan"),
            })
            .unwrap();
        let view = screen.view();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].record.name, "Stanford University");
    }

    #[test]
    fn third_college_page_holds_five() {
        let mut screen = colleges().unwrap();
        screen.apply(ScreenAction::GoToPage { page: 3 }).unwrap();
        let view = screen.view();
        assert_eq!(view.page.total_pages, 3);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.rows[0].record.number, 21);
    }

    #[test]
    fn subject_change_resets_chapter_and_topic() {
        let mut screen = questions().unwrap();
        screen.apply(set("subject", FilterValue::one("Mathematics"))).unwrap();
        screen.apply(set("chapter", FilterValue::many(["Algebra"]))).unwrap();
        screen
            .apply(set("topic", FilterValue::many(["Linear Equations"])))
            .unwrap();

        screen.apply(set("subject", FilterValue::one("Physics"))).unwrap();

        assert!(screen.filters().get("chapter").is_empty());
        assert!(screen.filters().get("topic").is_empty());
        assert_eq!(screen.options("chapter").unwrap(), vec!["Mechanics", "Optics"]);
    }

    #[test]
    fn assign_chapters_must_all_match() {
        let mut screen = assign().unwrap();
        screen
            .apply(ScreenAction::SetFilter {
                key: "chapter".into(),
                value: FilterValue::many(["Algebra", "Mechanics"]),
            })
            .unwrap();
        assert!(screen.view().rows.is_empty());
    }

    #[test]
    fn faculty_subject_search_looks_inside_lists() {
        let mut screen = faculty().unwrap();
        screen
            .apply(ScreenAction::SetFilter {
                key: "subject".into(),
                value: FilterValue::one("chem"),
            })
            .unwrap();
        let names: Vec<_> = screen.view().rows.iter().map(|r| r.record.name.clone()).collect();
        assert_eq!(names, vec!["Dr. White", "Prof. Red"]);
    }
}
