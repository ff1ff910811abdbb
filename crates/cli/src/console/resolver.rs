//! Interactive conflict resolution.

use super::console_helper::write_colored;
use crossterm::style::Color;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use taco_registry::{Conflict, ConflictResolver, Decision};

const USE_FIRST: &str = "1";
const USE_SECOND: &str = "2";
const ABORT: &str = "A";

/// Asks the operator which of two conflicting entries to keep.
///
/// Input other than `1`, `2` or `A` re-prompts. End of input aborts.
pub struct ConsoleResolver<R, W> {
    input: R,
    output: W,
}

impl ConsoleResolver<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleResolver<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn present(&mut self, conflict: &Conflict<'_>) -> io::Result<()> {
        writeln!(self.output)?;
        write_colored(
            &mut self.output,
            Color::Yellow,
            &format!(
                "! Conflict detected for {} (chain {}):",
                conflict.first.name, conflict.first.chain_id
            ),
        )?;
        writeln!(
            self.output,
            "[{USE_FIRST}]: {} at {} for {}",
            conflict.first.name, conflict.first.address, conflict.first_origin
        )?;
        writeln!(
            self.output,
            "[{USE_SECOND}]: {} at {} for {}",
            conflict.second.name, conflict.second.address, conflict.second_origin
        )?;
        writeln!(self.output, "[{ABORT}]: Abort merge")
    }
}

impl<R: BufRead, W: Write> ConflictResolver for ConsoleResolver<R, W> {
    fn resolve(&mut self, conflict: &Conflict<'_>) -> io::Result<Decision> {
        self.present(conflict)?;

        loop {
            write!(
                self.output,
                "Merge resolution, [{USE_FIRST}, {USE_SECOND}, {ABORT}]? "
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                write_colored(&mut self.output, Color::Red, "Merge Aborted!")?;
                return Ok(Decision::Abort);
            }

            match line.trim() {
                USE_FIRST => return Ok(Decision::UseFirst),
                USE_SECOND => return Ok(Decision::UseSecond),
                ABORT => {
                    write_colored(&mut self.output, Color::Red, "Merge Aborted!")?;
                    return Ok(Decision::Abort);
                }
                _ => continue,
            }
        }
    }
}
