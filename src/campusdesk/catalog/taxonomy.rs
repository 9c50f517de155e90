//! Static subject → chapter → topic trees used by editor drafts and dropdowns.

use super::records::{Question, Topic};
use crate::filter::SelectOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterNode {
    pub name: &'static str,
    pub topics: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectNode {
    pub name: &'static str,
    pub chapters: &'static [ChapterNode],
}

const QUESTION_BANK: &[SubjectNode] = &[
    SubjectNode {
        name: "Mathematics",
        chapters: &[
            ChapterNode {
                name: "Algebra",
                topics: &["Linear Equations", "Quadratic Equations"],
            },
            ChapterNode {
                name: "Calculus",
                topics: &["Derivatives", "Integrals"],
            },
        ],
    },
    SubjectNode {
        name: "Physics",
        chapters: &[
            ChapterNode {
                name: "Mechanics",
                topics: &["Newton's Laws", "Kinematics"],
            },
            ChapterNode {
                name: "Optics",
                topics: &["Refraction", "Reflection"],
            },
        ],
    },
];

const SYLLABUS: &[SubjectNode] = &[
    SubjectNode {
        name: "Math",
        chapters: &[
            ChapterNode { name: "Algebra", topics: &[] },
            ChapterNode { name: "Geometry", topics: &[] },
            ChapterNode { name: "Calculus", topics: &[] },
        ],
    },
    SubjectNode {
        name: "Science",
        chapters: &[
            ChapterNode { name: "Physics", topics: &[] },
            ChapterNode { name: "Chemistry", topics: &[] },
            ChapterNode { name: "Biology", topics: &[] },
        ],
    },
    SubjectNode {
        name: "English",
        chapters: &[
            ChapterNode { name: "Literature", topics: &[] },
            ChapterNode { name: "Grammar", topics: &[] },
            ChapterNode { name: "Writing", topics: &[] },
        ],
    },
    SubjectNode {
        name: "History",
        chapters: &[
            ChapterNode { name: "Ancient", topics: &[] },
            ChapterNode { name: "Medieval", topics: &[] },
            ChapterNode { name: "Modern", topics: &[] },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Taxonomy {
    subjects: &'static [SubjectNode],
}

impl Taxonomy {
    /// Mathematics/Physics tree of the question bank.
    pub fn question_bank() -> Self {
        Self {
            subjects: QUESTION_BANK,
        }
    }

    /// Subject/chapter lists of the manage-chapters and manage-topics screens.
    pub fn syllabus() -> Self {
        Self { subjects: SYLLABUS }
    }

    pub fn subjects(&self) -> Vec<&'static str> {
        self.subjects.iter().map(|s| s.name).collect()
    }

    /// Dropdown options numbered from 1 in tree order.
    pub fn subject_options(&self) -> Vec<SelectOption> {
        self.subjects
            .iter()
            .enumerate()
            .map(|(i, s)| SelectOption::new((i + 1).to_string(), s.name))
            .collect()
    }

    fn subject(&self, name: &str) -> Option<&'static SubjectNode> {
        self.subjects.iter().find(|s| s.name == name)
    }

    /// Chapters of `subject`; unknown subjects have none.
    pub fn chapters(&self, subject: &str) -> Vec<&'static str> {
        self.subject(subject)
            .map(|s| s.chapters.iter().map(|c| c.name).collect())
            .unwrap_or_default()
    }

    pub fn first_chapter(&self, subject: &str) -> Option<&'static str> {
        self.subject(subject)
            .and_then(|s| s.chapters.first())
            .map(|c| c.name)
    }

    /// Topics of every named chapter, concatenated in the given order.
    pub fn topics<S: AsRef<str>>(&self, chapters: &[S]) -> Vec<&'static str> {
        chapters
            .iter()
            .flat_map(|wanted| {
                self.subjects
                    .iter()
                    .flat_map(|s| s.chapters.iter())
                    .filter(move |c| c.name == wanted.as_ref())
                    .flat_map(|c| c.topics.iter().copied())
            })
            .collect()
    }

    /// Change a topic draft's subject; its chapter moves to the subject's first chapter.
    pub fn set_topic_subject(&self, draft: &mut Topic, subject: &str) {
        draft.subject = subject.to_string();
        draft.chapter = self.first_chapter(subject).unwrap_or_default().to_string();
    }

    /// Change a question draft's subject; chapter and topic selections are cleared.
    pub fn set_question_subject(&self, draft: &mut Question, subject: &str) {
        draft.subject = subject.to_string();
        draft.chapter.clear();
        draft.topic.clear();
    }

    /// Change a question draft's chapters; the topic selection is cleared.
    pub fn set_question_chapters(&self, draft: &mut Question, chapters: Vec<String>) {
        draft.chapter = chapters;
        draft.topic.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_bank_tree() {
        let tax = Taxonomy::question_bank();
        assert_eq!(tax.subjects(), vec!["Mathematics", "Physics"]);
        assert_eq!(tax.chapters("Physics"), vec!["Mechanics", "Optics"]);
        assert!(tax.chapters("Chemistry").is_empty());
        assert_eq!(
            tax.topics(&["Optics", "Algebra"]),
            vec!["Refraction", "Reflection", "Linear Equations", "Quadratic Equations"]
        );
    }

    #[test]
    fn subject_change_resets_topic_chapter() {
        let tax = Taxonomy::syllabus();
        let mut draft = Topic {
            subject: "Math".into(),
            chapter: "Geometry".into(),
            topic: "Triangles".into(),
        };
        tax.set_topic_subject(&mut draft, "History");
        assert_eq!(draft.chapter, "Ancient");
        assert_eq!(draft.topic, "Triangles");
    }

    #[test]
    fn subject_options_are_numbered() {
        let options = Taxonomy::question_bank().subject_options();
        assert_eq!(options[1], SelectOption::new("2", "Physics"));
    }
}
