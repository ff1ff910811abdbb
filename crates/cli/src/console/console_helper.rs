use crossterm::{
    queue,
    style::{Color, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};

/// Coloured operator-facing output on stdout.
pub struct ConsoleHelper;

impl ConsoleHelper {
    /// Prints alternating tag/value parts, tags in cyan.
    pub fn info(parts: impl IntoIterator<Item = impl AsRef<str>>) {
        let mut stdout = io::stdout();
        write_pairs(&mut stdout, parts).ok();
    }

    pub fn warning(message: impl AsRef<str>) {
        let mut stdout = io::stdout();
        write_tagged(&mut stdout, "Warning", Color::Yellow, message.as_ref()).ok();
    }
}

pub(crate) fn write_pairs<W: Write>(
    out: &mut W,
    parts: impl IntoIterator<Item = impl AsRef<str>>,
) -> io::Result<()> {
    for (index, part) in parts.into_iter().enumerate() {
        if index % 2 == 0 {
            queue!(out, SetForegroundColor(Color::Cyan))?;
        } else {
            queue!(out, ResetColor)?;
        }
        write!(out, "{}", part.as_ref())?;
    }
    queue!(out, ResetColor)?;
    writeln!(out)?;
    out.flush()
}

pub(crate) fn write_tagged<W: Write>(
    out: &mut W,
    tag: &str,
    color: Color,
    message: &str,
) -> io::Result<()> {
    queue!(out, SetForegroundColor(color))?;
    write!(out, "{tag}: ")?;
    queue!(out, ResetColor)?;
    writeln!(out, "{message}")?;
    out.flush()
}

pub(crate) fn write_colored<W: Write>(out: &mut W, color: Color, line: &str) -> io::Result<()> {
    queue!(out, SetForegroundColor(color))?;
    write!(out, "{line}")?;
    queue!(out, ResetColor)?;
    writeln!(out)
}
