//! Student-wise marks report.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterMark {
    pub name: String,
    pub marks: u32,
    pub rank: u32,
    pub class_average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectMarks {
    pub subject: String,
    pub chapters: Vec<ChapterMark>,
}

impl SubjectMarks {
    pub fn total(&self) -> u32 {
        self.chapters.iter().map(|c| c.marks).sum()
    }

    pub fn class_average(&self) -> f64 {
        self.chapters.iter().map(|c| c.class_average).sum()
    }
}

/// What the report shows for the current subject selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ReportView<'a> {
    /// Totals per subject.
    Subjects { subjects: &'a [SubjectMarks] },
    /// One subject broken down by chapter.
    Chapters { subject: &'a SubjectMarks },
    Nothing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentReport {
    pub student: String,
    subjects: Vec<SubjectMarks>,
}

impl StudentReport {
    pub fn new(student: impl Into<String>, subjects: Vec<SubjectMarks>) -> Self {
        Self {
            student: student.into(),
            subjects,
        }
    }

    pub fn subjects(&self) -> &[SubjectMarks] {
        &self.subjects
    }

    pub fn subject_names(&self) -> Vec<&str> {
        self.subjects.iter().map(|s| s.subject.as_str()).collect()
    }

    pub fn view(&self, selected: Option<&str>) -> ReportView<'_> {
        match selected.map(str::trim).filter(|s| !s.is_empty()) {
            None => ReportView::Subjects {
                subjects: &self.subjects,
            },
            Some(name) => match self.subjects.iter().find(|s| s.subject == name) {
                Some(subject) => ReportView::Chapters { subject },
                None => ReportView::Nothing,
            },
        }
    }
}

fn chapter(name: &str, marks: u32, rank: u32, class_average: f64) -> ChapterMark {
    ChapterMark {
        name: name.to_string(),
        marks,
        rank,
        class_average,
    }
}

/// Sample marks shown by the report screen.
pub fn sample(student: &str) -> StudentReport {
    StudentReport::new(
        student,
        vec![
            SubjectMarks {
                subject: "Mathematics".into(),
                chapters: vec![
                    chapter("Algebra", 42, 3, 36.5),
                    chapter("Calculus", 38, 5, 33.0),
                ],
            },
            SubjectMarks {
                subject: "Physics".into(),
                chapters: vec![
                    chapter("Mechanics", 45, 1, 34.2),
                    chapter("Optics", 31, 8, 30.8),
                ],
            },
            SubjectMarks {
                subject: "English".into(),
                chapters: vec![
                    chapter("Grammar", 40, 2, 37.1),
                    chapter("Literature", 35, 6, 33.9),
                ],
            },
        ],
    )
}
