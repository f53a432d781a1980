// birthday-book - keeps track of birthdays so you don't have to
//
// This is the main entry point: the interactive command loop. All
// terminal I/O happens here; tokenizing, validation, and state changes
// live in the library so they stay testable without a terminal.

use anyhow::Context;
use birthday_book_lib::{core::command::HELP_TEXT, Command, Outcome, Session};
use console::style;
use std::io::{self, BufRead, Write};

enum Flow {
    Continue,
    Quit,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!();
    println!(
        "{}",
        style("Welcome to the Birthday Book Manager").bold().underlined()
    );
    println!();
    println!("Enter \"help\" to see a list of commands.");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut session = Session::new();

    loop {
        print!("> ");
        io::stdout().flush().context("failed to flush prompt")?;

        let Some(line) = read_line(&mut input)? else {
            // EOF on stdin: just stop, no farewell
            break;
        };
        let parsed = Command::parse(&line);

        // While the flag is on every accepted or rejected line gets
        // echoed back first - except lines that parsed as the echo
        // command itself, whose asymmetric echoing happens in render.
        let is_echo_command = matches!(parsed, Ok(Command::Echo { .. }));
        if session.echo_enabled() && !is_echo_command {
            println!("You entered: \"{}\"", line);
        }

        match parsed.and_then(|cmd| session.execute(cmd)) {
            Ok(outcome) => {
                if let Flow::Quit = render(outcome, &mut session, &mut input)? {
                    break;
                }
            }
            // Nothing is fatal: print the message, back to the prompt
            Err(e) => println!("{}", e),
        }
    }

    Ok(())
}

/// Read one line, stripping the terminator. `None` means EOF.
fn read_line(input: &mut impl BufRead) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line).context("failed to read input")?;
    if bytes == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Print what an outcome has to say, running the delete confirmation
/// sub-loop when asked.
fn render(
    outcome: Outcome,
    session: &mut Session,
    input: &mut impl BufRead,
) -> anyhow::Result<Flow> {
    match outcome {
        Outcome::Added(display) => println!("Added \"{}\" to birthday book.", display),
        Outcome::Listing(items) => {
            if items.is_empty() {
                println!("The birthday book is empty.");
            } else {
                for (i, item) in items.iter().enumerate() {
                    println!("{}. {}", i + 1, item);
                }
            }
        }
        Outcome::ConfirmDelete { index, name } => confirm_delete(session, input, index, &name)?,
        Outcome::SearchResults { term, matches } => {
            if matches.is_empty() {
                println!(
                    "I'm sorry, but there are no entries with a name of \"{}\".",
                    term
                );
            } else {
                println!("Entries with a name of \"{}\"", term);
                for entry in &matches {
                    println!("   {}", entry);
                }
            }
        }
        Outcome::SortedAlphabetically => {
            println!("Birthdays successfully sorted alphabetically. \nType \"list\" to view the changes.");
        }
        Outcome::SortedByAge => {
            println!("Birthdays successfully sorted by age (ascending). \nType \"list\" to view the changes.");
        }
        Outcome::SortIgnored => {}
        Outcome::Saved(filename) => println!("Saved birthdays to \"{}\".", filename),
        Outcome::Loaded(filename) => {
            println!("Birthdays in \"{}\" added to birthday book.", filename)
        }
        Outcome::Help => println!("{}", HELP_TEXT),
        Outcome::EchoSet { on: true, .. } => println!("Echo turned on."),
        Outcome::EchoSet { on: false, was_on } => {
            // Turning echo off echoes one last time - but only if it
            // was on. Turning it off twice is silent the second time.
            if was_on {
                println!("You entered: \"echo off\"");
                println!("Echo turned off.");
            }
        }
        Outcome::Quit => {
            println!("Thank you for using the Birthday Book Manager!");
            return Ok(Flow::Quit);
        }
    }
    Ok(Flow::Continue)
}

/// Blocking y/n confirmation. Re-prompts silently until the answer is
/// exactly "y" or "n"; anything else just asks again. "n" (or EOF)
/// leaves the book untouched, and a confirmed removal prints nothing.
fn confirm_delete(
    session: &mut Session,
    input: &mut impl BufRead,
    index: usize,
    name: &str,
) -> anyhow::Result<()> {
    print!("Really delete {} from the birthday book? (y/n) ", name);
    io::stdout().flush().context("failed to flush prompt")?;

    loop {
        let Some(answer) = read_line(input)? else {
            return Ok(());
        };
        match answer.as_str() {
            "y" => {
                session.remove_confirmed(index);
                return Ok(());
            }
            "n" => return Ok(()),
            _ => {
                print!("Please enter \"y\" or \"n\" (y/n) ");
                io::stdout().flush().context("failed to flush prompt")?;
            }
        }
    }
}
