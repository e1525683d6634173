//! Store Module
//!
//! The in-memory collection and its backing file.
//!
//! ## Responsibilities
//! - Load the whole collection on startup (missing/blank file = empty)
//! - Rewrite the whole file after every mutation
//! - Linear, case-insensitive name lookup
//!
//! ## File Format
//! ```text
//! [
//!     {
//!         "name": "Ada",
//!         "subject": "Mathematics",
//!         "grade": 91
//!     },
//!     ...
//! ]
//! ```

mod persist;
mod record_store;

pub use persist::{load, save};
pub use record_store::RecordStore;
