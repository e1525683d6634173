//! Add a student record

use std::io::{BufRead, Write};

use crate::config::NamePolicy;
use crate::console::Console;
use crate::error::Result;
use crate::input::{parse_grade, parse_name, parse_subject};
use crate::record::StudentRecord;
use crate::store::RecordStore;

use super::{report_save_failure, Outcome};

/// Prompt for name, subject and grade, then append and persist the record
///
/// Prompts stop at the first invalid field.
pub fn add_record<R: BufRead, W: Write>(
    store: &mut RecordStore,
    console: &mut Console<R, W>,
    policy: NamePolicy,
) -> Result<Outcome> {
    let Some(raw) = console.prompt("Input student's name: ")? else {
        return Ok(Outcome::EndOfInput);
    };
    let name = match parse_name(&raw, policy) {
        Ok(name) => name,
        Err(e) => {
            console.say(e)?;
            return Ok(Outcome::Aborted);
        }
    };

    let Some(raw) = console.prompt("Input student's subject of study: ")? else {
        return Ok(Outcome::EndOfInput);
    };
    let subject = match parse_subject(&raw, policy) {
        Ok(subject) => subject,
        Err(e) => {
            console.say(e)?;
            return Ok(Outcome::Aborted);
        }
    };

    let Some(raw) = console.prompt("Input student's final grade: ")? else {
        return Ok(Outcome::EndOfInput);
    };
    let grade = match parse_grade(&raw) {
        Ok(grade) => grade,
        Err(e) => {
            console.say(e)?;
            return Ok(Outcome::Aborted);
        }
    };

    if let Err(e) = store.add(StudentRecord::new(name, subject, grade)) {
        return report_save_failure(console, e);
    }

    console.say("Student record added successfully!")?;
    Ok(Outcome::Completed)
}
