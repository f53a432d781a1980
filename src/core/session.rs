// Session state and command execution
//
// Owns everything a running session mutates: the book, the set of
// filenames saved this session, and the echo flag. Executing a command
// returns an Outcome value; rendering it (and any prompting) is the
// binary's job, so this layer never touches stdin or stdout.

use crate::core::book::BirthdayBook;
use crate::core::command::Command;
use crate::core::entry::Entry;
use crate::error::{BookError, Result};
use crate::storage;
use chrono::Local;
use log::debug;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

// Matches what the echo command counts as "numeric": an optionally
// signed integer or plain decimal. Numeric arguments take the generic
// rejection path, every other bad argument gets the echo usage message.
const NUMERIC_PATTERN: &str = r"^[+-]?\d+(\.\d+)?$";

/// What a successfully executed command wants shown (or asked) next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Entry appended; holds the display string for the confirmation
    Added(String),
    /// All display strings in store order (may be empty)
    Listing(Vec<String>),
    /// Index is valid; the caller must run the y/n confirmation
    ConfirmDelete { index: usize, name: String },
    /// Matching display strings, in store order
    SearchResults { term: String, matches: Vec<String> },
    SortedAlphabetically,
    SortedByAge,
    /// Unknown sort mode: deliberate silent no-op
    SortIgnored,
    Saved(String),
    Loaded(String),
    Help,
    /// Echo flag changed; `was_on` drives the asymmetric echo-off line
    EchoSet { on: bool, was_on: bool },
    Quit,
}

/// One interactive session: book, trusted filenames, echo flag
pub struct Session {
    book: BirthdayBook,
    saved_files: HashSet<String>,
    echo: bool,
    numeric: Regex,
}

impl Session {
    pub fn new() -> Self {
        Self {
            book: BirthdayBook::new(),
            saved_files: HashSet::new(),
            echo: false,
            numeric: Regex::new(NUMERIC_PATTERN).expect("numeric pattern is valid"),
        }
    }

    pub fn echo_enabled(&self) -> bool {
        self.echo
    }

    pub fn book(&self) -> &BirthdayBook {
        &self.book
    }

    /// Run one parsed command against the session. Every error is
    /// recoverable; state is only touched on the success paths.
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        debug!("executing {:?}", command);
        match command {
            Command::Add {
                first,
                last,
                month,
                day,
                year,
            } => self.add(&first, &last, &month, &day, &year),
            Command::List => Ok(Outcome::Listing(
                self.book
                    .entries()
                    .iter()
                    .map(|e| e.display.clone())
                    .collect(),
            )),
            Command::Delete { index } => self.delete(&index),
            Command::Search { name } => {
                let matches = self.book.search(&name);
                Ok(Outcome::SearchResults { term: name, matches })
            }
            Command::Sort { mode } => self.sort(&mode),
            Command::Save { filename } => self.save(filename),
            Command::Load { filename } => self.load(filename),
            Command::Help => Ok(Outcome::Help),
            Command::Quit => Ok(Outcome::Quit),
            Command::Echo { setting } => self.set_echo(&setting),
        }
    }

    /// Remove the entry the user just confirmed. `index` is the same
    /// 1-based value handed out in `Outcome::ConfirmDelete`.
    pub fn remove_confirmed(&mut self, index: usize) -> Entry {
        self.book.remove(index - 1)
    }

    fn add(&mut self, first: &str, last: &str, month: &str, day: &str, year: &str) -> Result<Outcome> {
        // Integer-ness is the only date validation there is
        if !(is_integer_text(month) && is_integer_text(day) && is_integer_text(year)) {
            return Err(BookError::NonIntegerDate);
        }
        let entry = Entry::new(first, last, month, day, year);
        let display = entry.display.clone();
        self.book.push(entry);
        Ok(Outcome::Added(display))
    }

    fn delete(&mut self, index_token: &str) -> Result<Outcome> {
        // Parse and range-check atomically. A numeric token out of
        // [1, N] gets the range message; a token that is not an
        // integer at all gets the format message. An integer token too
        // big for i64 is just very out of range.
        let index = match index_token.parse::<i64>() {
            Ok(index) => index,
            Err(_) if is_integer_token(index_token) => return Err(BookError::NoSuchEntry),
            Err(_) => return Err(BookError::NonIntegerIndex),
        };
        if index <= 0 || index as usize > self.book.len() {
            return Err(BookError::NoSuchEntry);
        }
        let index = index as usize;
        Ok(Outcome::ConfirmDelete {
            index,
            name: self.book.name_at(index - 1).to_string(),
        })
    }

    fn sort(&mut self, mode: &str) -> Result<Outcome> {
        match mode {
            "alphabetically" => {
                self.book.sort_alphabetically();
                Ok(Outcome::SortedAlphabetically)
            }
            "age" => {
                self.book.sort_by_age(Local::now().date_naive())?;
                Ok(Outcome::SortedByAge)
            }
            // Anything else: no message, no reorder
            _ => Ok(Outcome::SortIgnored),
        }
    }

    fn save(&mut self, filename: String) -> Result<Outcome> {
        storage::save_entries(&filename, self.book.entries())?;
        debug!("saved {} entries to {}", self.book.len(), filename);
        self.saved_files.insert(filename.clone());
        Ok(Outcome::Saved(filename))
    }

    fn load(&mut self, filename: String) -> Result<Outcome> {
        // Existence first, then session trust. Trust is by filename
        // only, never by content.
        if !Path::new(&filename).exists() {
            return Err(BookError::FileNotFound(filename));
        }
        if !self.saved_files.contains(&filename) {
            return Err(BookError::UntrustedFile(filename));
        }
        let entries = storage::load_entries(&filename)?;
        debug!("loaded {} entries from {}", entries.len(), filename);
        for entry in entries {
            self.book.push(entry);
        }
        Ok(Outcome::Loaded(filename))
    }

    fn set_echo(&mut self, setting: &str) -> Result<Outcome> {
        if self.numeric.is_match(setting) {
            return Err(BookError::Unrecognized);
        }
        let was_on = self.echo;
        match setting {
            "on" => {
                self.echo = true;
                Ok(Outcome::EchoSet { on: true, was_on })
            }
            "off" => {
                self.echo = false;
                Ok(Outcome::EchoSet { on: false, was_on })
            }
            _ => Err(BookError::EchoUsage),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn is_integer_text(field: &str) -> bool {
    !field.is_empty() && field.chars().all(|c| c.is_ascii_digit())
}

/// Integer-formatted token, optionally signed, of any magnitude.
fn is_integer_token(token: &str) -> bool {
    let digits = token
        .strip_prefix('+')
        .or_else(|| token.strip_prefix('-'))
        .unwrap_or(token);
    is_integer_text(digits)
}
