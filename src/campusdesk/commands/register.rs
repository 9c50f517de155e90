use super::{CmdMessage, CmdResult};
use crate::catalog::forms::{CollegeRegistration, FacultyRegistration, StudentRegistration};
use crate::error::{DeskError, Result};
use crate::validation::ValidationErrors;
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Student,
    Faculty,
    College,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormKind::Student => "student",
            FormKind::Faculty => "faculty",
            FormKind::College => "college",
        })
    }
}

impl FromStr for FormKind {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "student" => Ok(FormKind::Student),
            "faculty" => Ok(FormKind::Faculty),
            "college" => Ok(FormKind::College),
            other => Err(DeskError::Api(format!("Unknown registration form: {}", other))),
        }
    }
}

/// Validate a submitted form. Every failing field becomes one error message.
pub fn run(kind: FormKind, json: &str) -> Result<CmdResult> {
    let (name, errors) = match kind {
        FormKind::Student => {
            let form: StudentRegistration = serde_json::from_str(json)?;
            let errors = form.validate();
            (form.to_student().name, errors)
        }
        FormKind::Faculty => {
            let form: FacultyRegistration = serde_json::from_str(json)?;
            let errors = form.validate();
            (form.to_faculty().name, errors)
        }
        FormKind::College => {
            let form: CollegeRegistration = serde_json::from_str(json)?;
            let errors = form.validate();
            (form.name, errors)
        }
    };
    Ok(report(kind, &name, &errors))
}

fn report(kind: FormKind, name: &str, errors: &ValidationErrors) -> CmdResult {
    let mut result = CmdResult::default();
    if errors.is_empty() {
        info!(form = %kind, name, "registration accepted");
        result.add_message(CmdMessage::success(format!(
            "Registered {} '{}'",
            kind, name
        )));
    } else {
        warn!(form = %kind, fields = errors.len(), "registration rejected");
        for error in errors.iter() {
            result.add_message(CmdMessage::error(format!(
                "{}: {}",
                error.field,
                error.message()
            )));
        }
    }
    result
}
