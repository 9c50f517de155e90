//! Record shapes of the console's managed lists.
//!
//! Filter keys are the serialized (camelCase) field names, so a `--filter academicYear=...`
//! on the command line reads `Question::academic_year`.

use crate::attachment::AttachmentUrl;
use crate::model::{FieldValue, Record, Tabular};
use crate::validation::{ValidationErrors, Validator};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct College {
    pub number: u32,
    pub name: String,
}

impl Record for College {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "number" => Some(FieldValue::text(self.number.to_string())),
            "name" => Some(FieldValue::text(&self.name)),
            _ => None,
        }
    }

    fn validate(&self) -> ValidationErrors {
        Validator::new()
            .required("name", "College Name", &self.name)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub email: String,
    pub username: String,
    pub college: String,
    pub class: String,
    pub year: String,
}

impl Record for Student {
    fn field(&self, key: &str) -> Option<FieldValue> {
        let value = match key {
            "name" => &self.name,
            "email" => &self.email,
            "username" => &self.username,
            "college" => &self.college,
            "class" => &self.class,
            "year" => &self.year,
            _ => return None,
        };
        Some(FieldValue::text(value))
    }

    fn validate(&self) -> ValidationErrors {
        Validator::new()
            .required("name", "Name", &self.name)
            .required("email", "Email", &self.email)
            .email("email", "Email", &self.email)
            .required("username", "Username", &self.username)
            .required("college", "College", &self.college)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    pub name: String,
    pub subjects: Vec<String>,
}

impl Record for Faculty {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "name" => Some(FieldValue::text(&self.name)),
            "subjects" => Some(FieldValue::list(self.subjects.clone())),
            _ => None,
        }
    }

    fn validate(&self) -> ValidationErrors {
        Validator::new()
            .required("name", "Faculty Name", &self.name)
            .required_list("subjects", "Subject", &self.subjects)
            .finish()
    }
}

/// A named taxonomy entry (subjects, qualifications).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
}

impl Record for Subject {
    fn field(&self, key: &str) -> Option<FieldValue> {
        (key == "name").then(|| FieldValue::text(&self.name))
    }

    fn validate(&self) -> ValidationErrors {
        Validator::new().required("name", "Subject", &self.name).finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualification {
    pub name: String,
}

impl Record for Qualification {
    fn field(&self, key: &str) -> Option<FieldValue> {
        (key == "name").then(|| FieldValue::text(&self.name))
    }

    fn validate(&self) -> ValidationErrors {
        Validator::new()
            .required("name", "Qualification", &self.name)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub subject: String,
    pub chapter: String,
}

impl Record for Chapter {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "subject" => Some(FieldValue::text(&self.subject)),
            "chapter" => Some(FieldValue::text(&self.chapter)),
            _ => None,
        }
    }

    fn validate(&self) -> ValidationErrors {
        Validator::new()
            .required("subject", "Subject", &self.subject)
            .required("chapter", "Chapter", &self.chapter)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub subject: String,
    pub chapter: String,
    pub topic: String,
}

impl Record for Topic {
    fn field(&self, key: &str) -> Option<FieldValue> {
        let value = match key {
            "subject" => &self.subject,
            "chapter" => &self.chapter,
            "topic" => &self.topic,
            _ => return None,
        };
        Some(FieldValue::text(value))
    }

    fn validate(&self) -> ValidationErrors {
        Validator::new()
            .required("subject", "Subject", &self.subject)
            .required("chapter", "Chapter", &self.chapter)
            .required("topic", "Topic", &self.topic)
            .finish()
    }
}

/// A question-bank entry. Bundled in `data/questions.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub subject: String,
    pub chapter: Vec<String>,
    pub topic: Vec<String>,
    pub class: String,
    pub academic_year: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_option: String,
}

impl Record for Question {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(FieldValue::text(&self.id)),
            "subject" => Some(FieldValue::text(&self.subject)),
            "chapter" => Some(FieldValue::list(self.chapter.clone())),
            "topic" => Some(FieldValue::list(self.topic.clone())),
            "class" => Some(FieldValue::text(&self.class)),
            "academicYear" => Some(FieldValue::text(&self.academic_year)),
            "question" => Some(FieldValue::text(&self.question)),
            "options" => Some(FieldValue::list(self.options.clone())),
            "correctOption" => Some(FieldValue::text(&self.correct_option)),
            _ => None,
        }
    }

    fn validate(&self) -> ValidationErrors {
        let options: Vec<&str> = self.options.iter().map(String::as_str).collect();
        Validator::new()
            .required("subject", "Subject", &self.subject)
            .required_list("chapter", "Chapter", &self.chapter)
            .required_list("topic", "Topic", &self.topic)
            .required("question", "Question", &self.question)
            .required_list("options", "Options", &self.options)
            .required("correctOption", "Correct Option", &self.correct_option)
            .one_of("correctOption", "Correct Option", &self.correct_option, &options)
            .finish()
    }
}

/// An assessment as listed and assigned to colleges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestAssignment {
    pub id: String,
    pub college: String,
    pub class: String,
    pub subject: String,
    pub chapter: Vec<String>,
    #[serde(default)]
    pub topic: Vec<String>,
    pub question: String,
}

impl Record for TestAssignment {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(FieldValue::text(&self.id)),
            "college" => Some(FieldValue::text(&self.college)),
            "class" => Some(FieldValue::text(&self.class)),
            "subject" => Some(FieldValue::text(&self.subject)),
            "chapter" => Some(FieldValue::list(self.chapter.clone())),
            "topic" => Some(FieldValue::list(self.topic.clone())),
            "question" => Some(FieldValue::text(&self.question)),
            _ => None,
        }
    }

    fn validate(&self) -> ValidationErrors {
        Validator::new()
            .required("college", "College", &self.college)
            .required("class", "Class", &self.class)
            .required("subject", "Subject", &self.subject)
            .required("question", "Test", &self.question)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultySubjectMapping {
    pub faculty_name: String,
    pub subjects: Vec<String>,
}

impl Record for FacultySubjectMapping {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "facultyName" => Some(FieldValue::text(&self.faculty_name)),
            "subjects" => Some(FieldValue::list(self.subjects.clone())),
            _ => None,
        }
    }

    fn validate(&self) -> ValidationErrors {
        Validator::new()
            .required("facultyName", "Faculty Name", &self.faculty_name)
            .required_list("subjects", "Subject", &self.subjects)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyCollegeMapping {
    pub faculty_name: String,
    pub colleges: Vec<String>,
}

impl Record for FacultyCollegeMapping {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "facultyName" => Some(FieldValue::text(&self.faculty_name)),
            "colleges" => Some(FieldValue::list(self.colleges.clone())),
            _ => None,
        }
    }

    fn validate(&self) -> ValidationErrors {
        Validator::new()
            .required("facultyName", "Faculty", &self.faculty_name)
            .required_list("colleges", "College", &self.colleges)
            .finish()
    }
}

/// An uploaded study PDF. Holding the [`AttachmentUrl`] keeps the upload alive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelfStudyMaterial {
    pub name: String,
    pub chapter: String,
    pub class: String,
    pub college: String,
    pub file: Option<AttachmentUrl>,
}

impl Record for SelfStudyMaterial {
    fn field(&self, key: &str) -> Option<FieldValue> {
        let value = match key {
            "name" => &self.name,
            "chapter" => &self.chapter,
            "class" => &self.class,
            "college" => &self.college,
            _ => return None,
        };
        Some(FieldValue::text(value))
    }

    fn validate(&self) -> ValidationErrors {
        Validator::new()
            .required("name", "Name", &self.name)
            .required("chapter", "Chapter", &self.chapter)
            .required("class", "Class", &self.class)
            .required("college", "College", &self.college)
            .required_flag("file", "File", self.file.is_some())
            .finish()
    }
}

impl Tabular for College {
    const COLUMNS: &'static [(&'static str, &'static str)] =
        &[("S.no", "number"), ("College Name", "name")];
}

impl Tabular for Student {
    const COLUMNS: &'static [(&'static str, &'static str)] = &[
        ("Name", "name"),
        ("Email", "email"),
        ("Username", "username"),
        ("College", "college"),
        ("Class", "class"),
        ("Year", "year"),
    ];
}

impl Tabular for Faculty {
    const COLUMNS: &'static [(&'static str, &'static str)] =
        &[("Faculty Name", "name"), ("Subjects", "subjects")];
}

impl Tabular for Subject {
    const COLUMNS: &'static [(&'static str, &'static str)] = &[("Subject", "name")];
}

impl Tabular for Qualification {
    const COLUMNS: &'static [(&'static str, &'static str)] = &[("Qualification", "name")];
}

impl Tabular for Chapter {
    const COLUMNS: &'static [(&'static str, &'static str)] =
        &[("Subject", "subject"), ("Chapter", "chapter")];
}

impl Tabular for Topic {
    const COLUMNS: &'static [(&'static str, &'static str)] = &[
        ("Subject", "subject"),
        ("Chapter", "chapter"),
        ("Topic", "topic"),
    ];
}

impl Tabular for Question {
    const COLUMNS: &'static [(&'static str, &'static str)] = &[
        ("Subject", "subject"),
        ("Chapter", "chapter"),
        ("Topic", "topic"),
        ("Class", "class"),
        ("Year", "academicYear"),
        ("Question", "question"),
    ];
}

impl Tabular for TestAssignment {
    const COLUMNS: &'static [(&'static str, &'static str)] = &[
        ("College", "college"),
        ("Class", "class"),
        ("Subject", "subject"),
        ("Chapter", "chapter"),
        ("Test", "question"),
    ];
}

impl Tabular for FacultySubjectMapping {
    const COLUMNS: &'static [(&'static str, &'static str)] =
        &[("Faculty Name", "facultyName"), ("Subjects", "subjects")];
}

impl Tabular for FacultyCollegeMapping {
    const COLUMNS: &'static [(&'static str, &'static str)] =
        &[("Faculty", "facultyName"), ("Colleges", "colleges")];
}

impl Tabular for SelfStudyMaterial {
    const COLUMNS: &'static [(&'static str, &'static str)] = &[
        ("Name", "name"),
        ("Chapter", "chapter"),
        ("Class", "class"),
        ("College", "college"),
    ];
}
