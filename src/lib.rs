//! # Student Records
//!
//! An interactive, single-user keeper for student records with:
//! - A numbered text menu (add / remove / view / search)
//! - Alphabetic name validation with title-case normalization
//! - Whole-file JSON persistence after every mutation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Menu Loop                             │
//! │                 (Console: stdin / stdout)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Operations                              │
//! │             (Add / Remove / View / Search)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Input    │          │ RecordStore │
//!   │  (parsing)  │          │ (Vec, owned)│
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │   Persist   │
//!                           │   (JSON)    │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod input;
pub mod store;
pub mod console;
pub mod ops;
pub mod menu;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RecordsError, Result};
pub use config::{Config, NamePolicy};
pub use console::Console;
pub use record::StudentRecord;
pub use store::RecordStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of student-records
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
