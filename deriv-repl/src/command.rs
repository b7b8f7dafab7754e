//! Commands understood by the fixture shell.

use std::fmt;

/// Text printed when the shell starts.
pub const HELP: &str = "\
'test all' to run all tests
'test n' to show n-th test
'exit' to exit test program";

/// A command typed into the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run every fixture and print whether it passed.
    TestAll,

    /// Show the breakdown of the fixture with the given 1-based index. The index is [`None`] if
    /// it is made of digits but too large to represent.
    Test(Option<usize>),

    /// Leave the shell.
    Exit,
}

/// A line that is not a valid command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// `test` was followed by something other than `all` or a number.
    InvalidIndex,

    /// The line does not start with a known command.
    Unknown,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndex => write!(f, "Invalid test index. Had to be either 'all' or a number."),
            Self::Unknown => write!(f, "Unknown command"),
        }
    }
}

/// Parses a line typed into the shell.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    if line == "exit" {
        return Ok(Command::Exit);
    }

    let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
    if command != "test" {
        return Err(CommandError::Unknown);
    }

    match arg {
        "all" => Ok(Command::TestAll),
        arg if !arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit()) => {
            Ok(Command::Test(arg.parse().ok()))
        },
        _ => Err(CommandError::InvalidIndex),
    }
}
