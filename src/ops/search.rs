//! Search records by name

use std::io::{BufRead, Write};

use crate::config::NamePolicy;
use crate::console::Console;
use crate::error::Result;
use crate::input::parse_name;
use crate::store::RecordStore;

use super::Outcome;

/// Prompt for a name and print every record with that name, ignoring case
///
/// Matches are numbered among themselves, not by collection position.
pub fn search_records<R: BufRead, W: Write>(
    store: &RecordStore,
    console: &mut Console<R, W>,
    policy: NamePolicy,
) -> Result<Outcome> {
    let Some(raw) = console.prompt("Enter the student's name to search: ")? else {
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
    if matches.is_empty() {
        console.say("No records found for that student.")?;
        return Ok(Outcome::Completed);
    }

    console.say(format_args!(
        "\nFound {} existing records for '{}':",
        matches.len(),
        name
    ))?;
    for (num, &index) in matches.iter().enumerate() {
        console.say("====")?;
        console.say(store.records()[index].listing(num + 1))?;
    }

    Ok(Outcome::Completed)
}
