//! Remove a student record, disambiguating same-named students

use std::io::{BufRead, Write};

use crate::config::NamePolicy;
use crate::console::Console;
use crate::error::Result;
use crate::input::{parse_choice, parse_name};
use crate::store::RecordStore;

use super::{report_save_failure, Outcome};

/// Prompt for a name and remove the matching record
///
/// With several matches the user picks one by its 1-based position among
/// the matches.
pub fn remove_record<R: BufRead, W: Write>(
    store: &mut RecordStore,
    console: &mut Console<R, W>,
    policy: NamePolicy,
) -> Result<Outcome> {
    let Some(raw) = console.prompt("Enter the student's name to remove: ")? else {
        return Ok(Outcome::EndOfInput);
    };
    let name = match parse_name(&raw, policy) {
        Ok(name) => name,
        Err(e) => {
            console.say(e)?;
            return Ok(Outcome::Aborted);
        }
    };

    let matches = store.find_by_name(&name);

    let index = match matches.as_slice() {
        [] => {
            console.say("No records found for that student.")?;
            return Ok(Outcome::Completed);
        }
        [only] => *only,
        _ => {
            console.say("More than one student has that name:")?;
            for (num, &index) in matches.iter().enumerate() {
                let record = &store.records()[index];
                console.say(format_args!(
                    "{}. Subject: {} | Grade: {}",
                    num + 1,
                    record.subject,
                    record.grade
                ))?;
            }

            let Some(raw) = console.prompt("Enter the number of the record you wish to remove: ")?
            else {
                return Ok(Outcome::EndOfInput);
            };
            match parse_choice(&raw, matches.len()) {
                Ok(choice) => matches[choice - 1],
                Err(e) => {
                    console.say(e)?;
                    return Ok(Outcome::Aborted);
                }
            }
        }
    };

    if let Err(e) = store.remove_at(index) {
        return report_save_failure(console, e);
    }

    console.say("Record removed successfully!")?;
    Ok(Outcome::Completed)
}
