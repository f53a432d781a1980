/// Error types for birthday-book
///
/// Every error here is non-fatal: the command loop prints the Display
/// text and returns to the prompt. Uses thiserror for ergonomic error
/// handling, and the Display strings are the exact user-facing wording.

use thiserror::Error;

/// Main error type for birthday-book operations
#[derive(Error, Debug)]
pub enum BookError {
    /// Unknown verb or wrong argument count
    #[error("I am sorry, but that is not a recognized command, or\nyou have entered an incorrect number of arguments.\nYou may enter 'help' to see a list of commands.")]
    Unrecognized,

    /// Empty input line (zero tokens)
    #[error("Error: Please enter a command.")]
    EmptyCommand,

    /// A date field of `add` was not purely digits
    #[error("Error: Unable to add birthday to book. Please use integers for dates.")]
    NonIntegerDate,

    /// Delete index outside [1, N]
    #[error("I'm sorry, but there is no such entry in the book.")]
    NoSuchEntry,

    /// Delete index token did not parse as an integer
    #[error("Error: Please specify the item to delete using an integer.")]
    NonIntegerIndex,

    /// Echo argument was neither "on" nor "off" (and not numeric)
    #[error("Error: Please enter either \"echo on\" or \"echo off\"\nYou may enter 'help' to see a list of commands.")]
    EchoUsage,

    /// Load target is absent from the filesystem
    #[error("I'm sorry, but \"{0}\" does not exist.")]
    FileNotFound(String),

    /// Load target was never saved by this session
    #[error("I'm sorry, but \"{0}\" is not in the correct format.\nYou can only load files saved by this same program.")]
    UntrustedFile(String),

    /// An entry's display string did not yield a M/D/Y date (sort age)
    #[error("Error: Unable to sort by age. Entry \"{0}\" does not contain a valid date.")]
    MalformedEntry(String),

    /// I/O errors (file operations, etc.)
    #[error("Error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for birthday-book operations
pub type Result<T> = std::result::Result<T, BookError>;
