use serde::{Deserialize, Serialize};

/// One employee entry. Field names on the wire are kept compatible with
/// roster files written by earlier releases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "fullname")]
    pub name: String,
    pub position: String,
    #[serde(rename = "experience")]
    pub tenure: f64,
}

impl Employee {
    pub fn new(name: impl Into<String>, position: impl Into<String>, tenure: f64) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            tenure,
        }
    }
}

/// Result of removing an employee: where it was and what it held.
#[derive(Debug, Clone, PartialEq)]
pub struct Removal {
    pub index: usize,
    pub employee: Employee,
}

/// The position with the smallest average tenure and its members.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSummary<'a> {
    pub position: &'a str,
    pub average: f64,
    pub members: Vec<&'a Employee>,
}
