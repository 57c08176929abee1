//! Common domain type definitions
//!
//! This module contains the enum types shared across the criteria domain
//! models to ensure consistency and facilitate code reuse.

use serde::{Deserialize, Serialize};

/// How a question collects its answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionType {
    /// Exactly one answer per questionnaire entry
    SingleAnswer,
    /// One answer chosen from a fixed set of options
    MultipleChoiceSingleAnswer,
    /// The question may be answered any number of times
    Repeated,
}

impl From<&str> for QuestionType {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "multiplechoicesingleanswer" | "multiple_choice_single_answer" | "choice" => {
                Self::MultipleChoiceSingleAnswer
            }
            "repeated" | "repeat" => Self::Repeated,
            _ => Self::SingleAnswer,
        }
    }
}

/// Boolean combinator applied by a group node to its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchType {
    /// At least one child must match
    #[default]
    Any,
    /// Every child must match
    All,
    /// No child may match
    None,
    /// The conjunction of all children must not match
    NoneAll,
}

impl From<&str> for MatchType {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "all" | "and" => Self::All,
            "none" | "not" => Self::None,
            "noneall" | "none_all" => Self::NoneAll,
            _ => Self::Any,
        }
    }
}

/// Result ordering inherited from a question into its criteria nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    /// Oldest or smallest values first
    #[default]
    Ascending,
    /// Newest or largest values first
    Descending,
}

impl From<&str> for SortDirection {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "descending" | "desc" => Self::Descending,
            _ => Self::Ascending,
        }
    }
}

/// Searchable domain a term criterion evaluates against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchCategory {
    /// Patient demographics (age, gender, postal code)
    Demographic,
    /// Scheduled or past appointments
    Appointment,
    /// Clinical measurements and lab values
    Measurement,
    /// Performed procedures
    Procedure,
    /// Prescribed or administered medication
    Medication,
    /// Free-text report content
    Report,
    /// Collected specimens
    Specimen,
    /// Answers given to other questionnaires
    Questionnaire,
}

impl From<&str> for SearchCategory {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "appointment" | "agenda" => Self::Appointment,
            "measurement" | "lab" => Self::Measurement,
            "procedure" => Self::Procedure,
            "medication" | "drug" => Self::Medication,
            "report" | "document" => Self::Report,
            "specimen" | "sample" => Self::Specimen,
            "questionnaire" | "survey" => Self::Questionnaire,
            _ => Self::Demographic,
        }
    }
}
