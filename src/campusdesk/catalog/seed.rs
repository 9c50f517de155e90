//! Pre-seeded collections.

use super::records::{College, Faculty, Question, Student, TestAssignment};
use crate::error::{DeskError, Result};
use once_cell::sync::Lazy;

const QUESTIONS_JSON: &str = include_str!("../../../data/questions.json");

static QUESTIONS: Lazy<std::result::Result<Vec<Question>, String>> =
    Lazy::new(|| serde_json::from_str(QUESTIONS_JSON).map_err(|e| e.to_string()));

/// The bundled question bank.
pub fn questions() -> Result<Vec<Question>> {
    QUESTIONS
        .as_ref()
        .map(|qs| qs.clone())
        .map_err(|e| DeskError::Fixture(format!("questions.json: {e}")))
}

const COLLEGE_NAMES: [&str; 25] = [
    "Harvard University",
    "Massachusetts Institute of Technology (MIT)",
    "Stanford University",
    "University of Oxford",
    "University of Cambridge",
    "California Institute of Technology (Caltech)",
    "University of Chicago",
    "Imperial College London",
    "ETH Zurich",
    "University College London (UCL)",
    "University of Pennsylvania",
    "University of California, Berkeley",
    "Princeton University",
    "University of California, Los Angeles (UCLA)",
    "Yale University",
    "University of Michigan, Ann Arbor",
    "University of California, San Diego (UCSD)",
    "University of Edinburgh",
    "University of Toronto",
    "University of California, Irvine (UCI)",
    "University of Washington",
    "University of Hong Kong (HKU)",
    "University of Melbourne",
    "University of Sydney",
    "National University of Singapore (NUS)",
];

pub fn colleges() -> Vec<College> {
    COLLEGE_NAMES
        .iter()
        .zip(1..)
        .map(|(name, number)| College {
            number,
            name: name.to_string(),
        })
        .collect()
}

pub fn students() -> Vec<Student> {
    let rows = [
        ("John Doe", "johndoe", "Harvard", "1 PUC", "2024-25"),
        ("Jane Smith", "janesmith", "MIT", "2 PUC", "2023-24"),
        ("Alice Johnson", "alicejohnson", "Stanford", "10th", "2024-25"),
        ("Bob Brown", "bobbrown", "Oxford", "9th", "2023-24"),
        ("Charlie Davis", "charliedavis", "Harvard", "1 PUC", "2024-25"),
        ("Daisy Wilson", "daisywilson", "MIT", "2 PUC", "2023-24"),
        ("Edward Thomas", "edwardthomas", "Stanford", "10th", "2024-25"),
        ("Fiona Lee", "fionalee", "Oxford", "9th", "2023-24"),
        ("George Harris", "georgeharris", "Harvard", "1 PUC", "2024-25"),
    ];
    rows.iter()
        .map(|(name, username, college, class, year)| {
            let first = name.split_whitespace().next().unwrap_or_default().to_lowercase();
            Student {
                name: name.to_string(),
                email: format!("{first}@example.com"),
                username: username.to_string(),
                college: college.to_string(),
                class: class.to_string(),
                year: year.to_string(),
            }
        })
        .collect()
}

pub fn faculty() -> Vec<Faculty> {
    let rows: [(&str, &[&str]); 14] = [
        ("Dr. Smith", &["Math", "Science"]),
        ("Prof. Johnson", &["English"]),
        ("Ms. Davis", &["History", "Geography"]),
        ("Mr. Brown", &["Math"]),
        ("Dr. White", &["Biology", "Chemistry"]),
        ("Prof. Black", &["Physics", "Math"]),
        ("Ms. Green", &["English", "History"]),
        ("Mr. Blue", &["Geography", "Math"]),
        ("Dr. Gray", &["Science", "Biology"]),
        ("Prof. Red", &["Chemistry", "Physics"]),
        ("Prof. Black", &["Physics", "Math"]),
        ("Ms. Green", &["English", "History"]),
        ("Mr. Blue", &["Geography", "Math"]),
        ("Dr. Gray", &["Science", "Biology"]),
    ];
    rows.iter()
        .map(|(name, subjects)| Faculty {
            name: name.to_string(),
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

pub fn test_assignments() -> Vec<TestAssignment> {
    vec![
        TestAssignment {
            id: "1".into(),
            college: "College A".into(),
            class: "Class 10".into(),
            subject: "Mathematics".into(),
            chapter: vec!["Algebra".into()],
            topic: vec!["Linear Equations".into()],
            question: "Assessment 1".into(),
        },
        TestAssignment {
            id: "2".into(),
            college: "College B".into(),
            class: "Class 11".into(),
            subject: "Physics".into(),
            chapter: vec!["Mechanics".into()],
            topic: vec!["Newton's Laws".into()],
            question: "Assessment 2".into(),
        },
    ]
}

/// Colleges offered by the faculty-to-college mapping screen.
pub const MAPPING_COLLEGES: [&str; 4] = ["Harvard", "MIT", "Stanford", "Oxford"];

/// Faculty offered by the faculty-to-college mapping screen.
pub const MAPPING_FACULTY: [&str; 4] = ["Dr. Smith", "Prof. Johnson", "Ms. Davis", "Mr. Brown"];
