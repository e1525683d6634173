//! Operations Module
//!
//! The four menu actions. Each one reads and validates its input through a
//! [`Console`], then queries or mutates the [`RecordStore`].
//!
//! ## Contract
//! - Validation failures print one line and leave the store untouched
//! - Mutations persist before reporting success
//! - End of input at any prompt abandons the operation without changes

mod add;
mod remove;
mod search;
mod view;

pub use add::add_record;
pub use remove::remove_record;
pub use search::search_records;
pub use view::view_records;

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::{RecordsError, Result};

/// How an operation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation ran to completion (including "nothing found" reports)
    Completed,

    /// Input was rejected or the save failed; nothing changed
    Aborted,

    /// The input stream ended mid-operation; nothing changed
    EndOfInput,
}

/// Report a failed save to the user and the log
fn report_save_failure<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    error: RecordsError,
) -> Result<Outcome> {
    tracing::error!("Failed to save records: {}", error);
    console.say(format_args!("Could not save records: {error}"))?;
    Ok(Outcome::Aborted)
}
