// Command parsing
//
// One line of input in, one Command out. Tokenizes on whitespace; the
// first token picks the verb, the rest are positional arguments.
// Argument counts are exact matches, so "list extra" is as unrecognized
// as "frobnicate".

use crate::error::{BookError, Result};

/// A fully tokenized, arity-checked user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        first: String,
        last: String,
        month: String,
        day: String,
        year: String,
    },
    List,
    Delete { index: String },
    Search { name: String },
    Sort { mode: String },
    Save { filename: String },
    Load { filename: String },
    Help,
    Quit,
    Echo { setting: String },
}

impl Command {
    /// Parse one raw input line. An empty line is its own error so the
    /// loop never indexes into zero tokens; anything else that does not
    /// match a verb with its exact arity is `Unrecognized`.
    pub fn parse(line: &str) -> Result<Command> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&verb, args)) = tokens.split_first() else {
            return Err(BookError::EmptyCommand);
        };

        match (verb, args) {
            ("add", [first, last, month, day, year]) => Ok(Command::Add {
                first: first.to_string(),
                last: last.to_string(),
                month: month.to_string(),
                day: day.to_string(),
                year: year.to_string(),
            }),
            ("list", []) => Ok(Command::List),
            ("delete", [index]) => Ok(Command::Delete {
                index: index.to_string(),
            }),
            ("search", [name]) => Ok(Command::Search {
                name: name.to_string(),
            }),
            ("sort", [mode]) => Ok(Command::Sort {
                mode: mode.to_string(),
            }),
            ("save", [filename]) => Ok(Command::Save {
                filename: filename.to_string(),
            }),
            ("load", [filename]) => Ok(Command::Load {
                filename: filename.to_string(),
            }),
            ("help", []) => Ok(Command::Help),
            ("quit", []) => Ok(Command::Quit),
            ("echo", [setting]) => Ok(Command::Echo {
                setting: setting.to_string(),
            }),
            _ => Err(BookError::Unrecognized),
        }
    }
}

/// The static command reference printed by `help`. The listing does
/// not mention `quit`.
pub const HELP_TEXT: &str = "\
Allowed commands:
1. add [firstName] [lastName] [month] [day] [year]
2. list
3. delete [number]
4. search [name]
5. sort alphabetically (by first name)
   sort age
6. save [filename]
7. load [filename]
8. help
9. echo on
   echo off";
