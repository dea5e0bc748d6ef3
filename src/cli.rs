#![cfg(feature = "std")]

//! Console input: prompting, reading and validating cell references.

use std::io::{self, BufRead, Write};
use std::string::String;

/// Parse a cell reference such as `C7` into (x, y) for a `width × height` ocean.
///
/// The column is a single letter starting at `A`, the row a number starting at 0.
pub fn parse_cell(input: &str, width: usize, height: usize) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter", col_ch));
    }
    let x = (col_ch as u8 - b'A') as usize;
    if x >= width {
        return Err(format!("Column '{}' is outside the ocean", col_ch));
    }
    let row_str = chars.as_str();
    if row_str.is_empty() || !row_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("Invalid row '{}' - must be a number", row_str));
    }
    let y: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number", row_str))?;
    if y >= height {
        return Err(format!("Row {} is outside the ocean", y));
    }
    Ok((x, y))
}

/// Line-oriented prompt reader over any input and output.
pub struct Console<R, W> {
    input: R,
    output: W,
    buf: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one trimmed line. `None` at end of input.
    pub fn take_input(&mut self, prompt: &str) -> io::Result<Option<&str>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.buf.clear();
        if self.input.read_line(&mut self.buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(self.buf.trim()))
    }

    /// Keep prompting until a valid cell is entered. `None` at end of input.
    pub fn get_cell(&mut self, width: usize, height: usize) -> io::Result<Option<(usize, usize)>> {
        loop {
            let parsed = match self.take_input("Select a cell: ")? {
                None => return Ok(None),
                Some(line) => parse_cell(line, width, height),
            };
            match parsed {
                Ok(cell) => return Ok(Some(cell)),
                Err(reason) => {
                    log::debug!("rejected cell input: {}", reason);
                    writeln!(self.output, "Invalid cell")?;
                }
            }
        }
    }

    /// Ask a yes/no question where only `y` counts as yes.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(matches!(self.take_input(prompt)?, Some(answer) if answer.eq_ignore_ascii_case("y")))
    }
}
