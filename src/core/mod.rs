/// Core functionality modules
///
/// Contains the main business logic: the entry type, the record store,
/// command parsing, and session execution.

pub mod book;
pub mod command;
pub mod entry;
pub mod session;

pub use book::BirthdayBook;
pub use command::Command;
pub use entry::Entry;
pub use session::{Outcome, Session};
