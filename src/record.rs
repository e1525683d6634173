//! Student record definition
//!
//! One entry of the collection, serialized as a flat JSON object.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest grade a record may be created with
pub const MAX_GRADE: i64 = 100;

/// A single student's name, subject and grade
///
/// Field constraints are checked at creation time by [`crate::input`];
/// records read back from the backing file are taken as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub subject: String,
    pub grade: i64,
}

impl StudentRecord {
    pub fn new(name: impl Into<String>, subject: impl Into<String>, grade: i64) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            grade,
        }
    }

    /// Three-line listing used by view and search, numbered by `position`
    pub fn listing(&self, position: usize) -> Listing<'_> {
        Listing {
            record: self,
            position,
        }
    }
}

/// Display adapter for a numbered record listing
pub struct Listing<'a> {
    record: &'a StudentRecord,
    position: usize,
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.position;
        writeln!(f, "{n}. Name: {}.", self.record.name)?;
        writeln!(f, "{n}. Subject: {}.", self.record.subject)?;
        write!(f, "{n}. Grade: {}.", self.record.grade)
    }
}
