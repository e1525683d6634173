//! List every record

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::Result;
use crate::store::RecordStore;

use super::Outcome;

/// Print the whole collection, numbered from 1 in insertion order
pub fn view_records<R: BufRead, W: Write>(
    store: &RecordStore,
    console: &mut Console<R, W>,
) -> Result<Outcome> {
    if store.is_empty() {
        console.say("No student records found.")?;
        return Ok(Outcome::Completed);
    }

    console.say("\n==== Student Records ====")?;
    for (num, record) in store.records().iter().enumerate() {
        console.say(record.listing(num + 1))?;
    }
    console.say("=====\n")?;

    Ok(Outcome::Completed)
}
