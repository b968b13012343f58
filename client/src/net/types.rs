//! Wire types for the grade-lookup endpoint.
//!
//! The endpoint reports both outcomes in-body: `success: true` with the
//! student's fields, or `success: false` with a `message`. Score fields come
//! back as numbers or strings depending on the sheet, so they are kept as
//! [`FieldValue`] and rendered verbatim.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::Deserialize;

/// One score lookup request, already trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreQuery {
    pub student_id: String,
    pub student_name: String,
}

/// A scalar display value from the response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

/// Response body of `api=getScore`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub student_id: Option<FieldValue>,
    #[serde(default)]
    pub name: Option<FieldValue>,
    #[serde(default)]
    pub department: Option<FieldValue>,
    #[serde(default)]
    pub hw1: Option<FieldValue>,
    #[serde(default)]
    pub hw2: Option<FieldValue>,
    #[serde(default)]
    pub hw3: Option<FieldValue>,
    #[serde(default)]
    pub total_score: Option<FieldValue>,
}

/// Rendered result view for a successful lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreCard {
    pub scored_at: String,
    pub student_id: String,
    pub name: String,
    pub department: String,
    pub hw1: String,
    pub hw2: String,
    pub hw3: String,
    pub total_score: String,
}

impl ScoreCard {
    #[must_use]
    pub fn from_response(response: &ScoreResponse, scored_at: String) -> Self {
        Self {
            scored_at,
            student_id: display(response.student_id.as_ref()),
            name: display(response.name.as_ref()),
            department: display(response.department.as_ref()),
            hw1: display(response.hw1.as_ref()),
            hw2: display(response.hw2.as_ref()),
            hw3: display(response.hw3.as_ref()),
            total_score: display(response.total_score.as_ref()),
        }
    }
}

fn display(value: Option<&FieldValue>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}
