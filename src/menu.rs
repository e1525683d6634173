//! Menu Loop
//!
//! Presents the numbered options and dispatches to an operation until the
//! user exits or input runs out. The loop itself never persists anything.

use std::fmt;
use std::io::{BufRead, Write};

use crate::config::NamePolicy;
use crate::console::Console;
use crate::error::Result;
use crate::input::{parse_choice, InputError};
use crate::ops::{add_record, remove_record, search_records, view_records, Outcome};
use crate::store::RecordStore;

/// Menu selections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuChoice {
    Add = 1,
    Remove = 2,
    View = 3,
    Search = 4,
    Exit = 5,
}

impl MenuChoice {
    /// Every choice, in menu order
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Add,
        MenuChoice::Remove,
        MenuChoice::View,
        MenuChoice::Search,
        MenuChoice::Exit,
    ];

    /// Text shown next to the option number
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Student Record",
            MenuChoice::Remove => "Remove Student Record",
            MenuChoice::View => "View Record List",
            MenuChoice::Search => "Search For Existing Record",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", *self as u8, self.label())
    }
}

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Exiting,
}

/// Run the interactive menu against `store` until exit or end of input
pub fn run<R: BufRead, W: Write>(
    store: &mut RecordStore,
    console: &mut Console<R, W>,
    policy: NamePolicy,
) -> Result<()> {
    let mut state = State::Running;

    while state == State::Running {
        print_menu(console)?;

        let Some(raw) = console.prompt("Select an option (1-5): ")? else {
            tracing::debug!("Input closed at menu prompt");
            break;
        };

        let choice = match parse_choice(&raw, MenuChoice::ALL.len()) {
            // parse_choice bounds n to 1..=ALL.len()
            Ok(n) => MenuChoice::ALL[n - 1],
            Err(InputError::ChoiceOutOfRange { .. }) => {
                console.say("Invalid input. Please select from numbers 1 to 5.")?;
                continue;
            }
            Err(_) => {
                console.say("Invalid input. Please only use numbers between 1 to 5.")?;
                continue;
            }
        };

        let outcome = match choice {
            MenuChoice::Add => add_record(store, console, policy)?,
            MenuChoice::Remove => remove_record(store, console, policy)?,
            MenuChoice::View => view_records(store, console)?,
            MenuChoice::Search => search_records(store, console, policy)?,
            MenuChoice::Exit => {
                console.say("Exiting program..\n")?;
                state = State::Exiting;
                continue;
            }
        };

        if outcome == Outcome::EndOfInput {
            tracing::debug!("Input closed during {:?}", choice);
            state = State::Exiting;
        }
    }

    Ok(())
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.say("====")?;
    console.say("Student Record Safekeeping")?;
    console.say("")?;
    for choice in MenuChoice::ALL {
        console.say(choice)?;
    }
    console.say("=====\n")?;
    Ok(())
}
