//! This crate maintains a collection of arcade game records kept in a delimited text file, and
//! applies a batch of commands to it: add, search, edit, delete and sort.
//!
//! Each record holds a game name, its high score, the initials of the high score holder, the
//! number of plays and the revenue. The database file holds one record per line:
//! ```text
//! Pac-Man, 100000, ABC, 50, $12.50
//! ```
//! The batch file holds one command per line, selected by its leading digit:
//! ```text
//! 1 "Ms. Pac-Man" 90000 XYZ 40 $10.00
//! 2 pac
//! 3 "Pac-Man" 3 60
//! 4 galaga
//! 5 plays
//! ```
//! Every command prints a report. After the last command the updated records are written out in
//! the database format.
//!
//! # Examples
//! ```
//! use arcade_records::batch::process_lines;
//! use arcade_records::record_store::RecordStore;
//!
//! fn apply(database: &[&str], commands: &[&str]) -> Result<Vec<String>, anyhow::Error> {
//!     let mut store = RecordStore::new();
//!     store.load(database)?;
//!     let mut reports = Vec::new();
//!     process_lines(&mut store, commands, &mut reports)?;
//!     Ok(store.serialize())
//! }
//!
//! let lines = apply(&["Pac-Man, 100000, ABC, 50, $12.50"], &[r#"3 "Pac-Man" 3 60"#]).unwrap();
//! assert_eq!(lines, vec!["Pac-Man, 100000, ABC, 60, $15.00".to_string()]);
//! ```
//!

pub(crate) mod config;
pub(crate) mod key;

pub mod batch;
pub mod command;
pub mod error;
pub mod field;
pub mod field_type;
pub mod game_record;
pub mod parser;
pub mod processor;
pub mod record_store;
pub mod report;
pub mod sort_key;
