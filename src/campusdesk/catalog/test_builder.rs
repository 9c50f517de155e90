//! Assembling a test paper from the question bank.

use super::records::Question;
use crate::error::{DeskError, Result};
use crate::filter::options::toggle;
use crate::validation::{FieldError, RuleViolation, Validator};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestPaper {
    pub title: String,
    pub questions: Vec<Question>,
}

/// Title plus a selection of question ids, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestBuilder {
    title: String,
    selected: Vec<String>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn toggle(&mut self, question_id: &str) {
        toggle(&mut self.selected, question_id);
    }

    pub fn is_selected(&self, question_id: &str) -> bool {
        self.selected.iter().any(|s| s == question_id)
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Resolve the selection against `bank`.
    pub fn build(&self, bank: &[Question]) -> Result<TestPaper> {
        let mut errors = Validator::new()
            .required("title", "Test Title", &self.title)
            .required_list("questions", "Questions", &self.selected)
            .finish();

        let mut questions = Vec::with_capacity(self.selected.len());
        for id in &self.selected {
            match bank.iter().find(|q| &q.id == id) {
                Some(q) => questions.push(q.clone()),
                None => errors.push(FieldError {
                    field: "questions".to_string(),
                    label: "Questions".to_string(),
                    violation: RuleViolation::UnknownValue { value: id.clone() },
                }),
            }
        }

        if !errors.is_empty() {
            return Err(DeskError::Validation(errors));
        }
        Ok(TestPaper {
            title: self.title.trim().to_string(),
            questions,
        })
    }
}
