//! Registration forms.
//!
//! Every field defaults to blank so a partial JSON submission reports each missing field
//! instead of failing to parse. Numeric inputs (phone, pincode, Aadhaar) accept either
//! JSON strings or numbers.

use super::records::{Faculty, Student};
use crate::validation::{ValidationErrors, Validator};
use serde::{Deserialize, Deserializer, Serialize};

pub const STUDENT_CLASSES: [&str; 2] = ["1 PU", "2 PU"];
pub const FACULTY_SUBJECTS: [&str; 3] = ["Math", "Science", "History"];

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        other => other.to_string(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudentRegistration {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub college: String,
    pub class: String,
    #[serde(deserialize_with = "text_or_number")]
    pub academic_year: String,
    #[serde(deserialize_with = "text_or_number")]
    pub contact_number1: String,
    #[serde(deserialize_with = "text_or_number")]
    pub contact_number2: String,
}

impl StudentRegistration {
    pub fn validate(&self) -> ValidationErrors {
        Validator::new()
            .required("name", "Name", &self.name)
            .required("email", "Email", &self.email)
            .email("email", "Email", &self.email)
            .required("username", "Username", &self.username)
            .required("password", "Password", &self.password)
            .required("college", "College", &self.college)
            .required("class", "Class", &self.class)
            .one_of("class", "Class", &self.class, &STUDENT_CLASSES)
            .required("academicYear", "Academic Year", &self.academic_year)
            .digits("academicYear", "Academic Year", &self.academic_year, 4)
            .required("contactNumber1", "Contact Number1", &self.contact_number1)
            .digits("contactNumber1", "Contact Number1", &self.contact_number1, 10)
            .digits("contactNumber2", "Contact Number2", &self.contact_number2, 10)
            .finish()
    }

    /// The list entry a successful registration produces.
    pub fn to_student(&self) -> Student {
        Student {
            name: self.name.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
            college: self.college.clone(),
            class: self.class.clone(),
            year: self.academic_year.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FacultyRegistration {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(deserialize_with = "text_or_number")]
    pub contact_number: String,
    pub subjects: String,
    /// File name of the uploaded CV.
    pub cv: String,
    pub qualification: String,
    #[serde(deserialize_with = "text_or_number")]
    pub aadhar: String,
    pub pan: String,
    #[serde(deserialize_with = "text_or_number")]
    pub bank_account: String,
    pub ifsc: String,
}

impl FacultyRegistration {
    pub fn validate(&self) -> ValidationErrors {
        Validator::new()
            .required("name", "Name", &self.name)
            .required("username", "Username", &self.username)
            .required("email", "Email", &self.email)
            .email("email", "Email", &self.email)
            .required("password", "Password", &self.password)
            .required("contactNumber", "Contact Number", &self.contact_number)
            .digits("contactNumber", "Contact Number", &self.contact_number, 10)
            .required("subjects", "Subject", &self.subjects)
            .one_of("subjects", "Subject", &self.subjects, &FACULTY_SUBJECTS)
            .required("cv", "CV", &self.cv)
            .required("qualification", "Qualification", &self.qualification)
            .required("aadhar", "Aadhar Number", &self.aadhar)
            .digits("aadhar", "Aadhar Number", &self.aadhar, 12)
            .required("pan", "PAN Number", &self.pan)
            .pan("pan", "PAN Number", &self.pan)
            .required("bankAccount", "Bank Account Number", &self.bank_account)
            .required("ifsc", "IFSC", &self.ifsc)
            .ifsc("ifsc", "IFSC", &self.ifsc)
            .finish()
    }

    pub fn to_faculty(&self) -> Faculty {
        Faculty {
            name: self.name.clone(),
            subjects: vec![self.subjects.clone()],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CollegeRegistration {
    pub name: String,
    pub address: String,
    pub city: String,
    #[serde(deserialize_with = "text_or_number")]
    pub pincode: String,
    pub contact_person: String,
    #[serde(deserialize_with = "text_or_number")]
    pub contact_number1: String,
    #[serde(deserialize_with = "text_or_number")]
    pub contact_number2: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

impl CollegeRegistration {
    pub fn validate(&self) -> ValidationErrors {
        Validator::new()
            .required("name", "Name", &self.name)
            .required("address", "Address", &self.address)
            .required("city", "City", &self.city)
            .required("pincode", "Pincode", &self.pincode)
            .digits("pincode", "Pincode", &self.pincode, 6)
            .required("contactPerson", "Contact Person", &self.contact_person)
            .required("contactNumber1", "Contact Number1", &self.contact_number1)
            .digits("contactNumber1", "Contact Number1", &self.contact_number1, 10)
            .digits("contactNumber2", "Contact Number2", &self.contact_number2, 10)
            .required("email", "Email", &self.email)
            .email("email", "Email", &self.email)
            .required("username", "Username", &self.username)
            .required("password", "Password", &self.password)
            .finish()
    }
}
