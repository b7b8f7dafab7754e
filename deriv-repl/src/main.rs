mod command;
mod fixture;

use command::{parse_command, Command, HELP};
use fixture::FIXTURES;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{io::{self, Write}, ops::ControlFlow};
use tracing_subscriber::EnvFilter;

/// Runs every fixture, printing whether each one passed.
fn test_all(out: &mut dyn Write) -> io::Result<()> {
    let mut all_passed = true;
    for fixture in &FIXTURES {
        write!(out, "{}: ", fixture.name)?;
        match fixture.passes() {
            Ok(true) => writeln!(out, "OK")?,
            Ok(false) => {
                all_passed = false;
                writeln!(out, "FAIL")?;
            },
            Err(err) => {
                all_passed = false;
                writeln!(out, "FAIL")?;
                err.report_to_stderr(fixture.name, fixture.expr)?;
            },
        }
    }

    if all_passed {
        writeln!(out, "All tests passed")?;
    }
    Ok(())
}

/// Executes one line typed into the shell.
fn execute(line: &str, out: &mut dyn Write) -> io::Result<ControlFlow<()>> {
    match parse_command(line) {
        Ok(Command::Exit) => return Ok(ControlFlow::Break(())),
        Ok(Command::TestAll) => test_all(out)?,
        Ok(Command::Test(index)) => {
            match index.and_then(|n| n.checked_sub(1)).and_then(|i| FIXTURES.get(i)) {
                Some(fixture) => fixture.show(out)?,
                None => writeln!(out, "No such test found")?,
            }
        },
        Err(err) => writeln!(out, "{}", err)?,
    }
    Ok(ControlFlow::Continue(()))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("{}", HELP);

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return;
        },
    };

    fn process_line(rl: &mut DefaultEditor) -> Result<ControlFlow<()>, ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(ControlFlow::Continue(()));
        }

        rl.add_history_entry(&input)?;

        let mut stdout = io::stdout().lock();
        Ok(execute(input.trim(), &mut stdout)?)
    }

    loop {
        match process_line(&mut rl) {
            Ok(ControlFlow::Continue(())) => (),
            Ok(ControlFlow::Break(())) => break,
            Err(err) => {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            },
        }
    }
}
