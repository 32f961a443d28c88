//! Interactive prompt helpers
//!
//! Format failures re-prompt rather than abort. End of input is reported as
//! an I/O error so a closed stdin cannot spin a prompt loop forever.

use std::io::{self, BufRead, IsTerminal, Write};

use chrono::NaiveDate;

use crate::models::{parse_date, Money};

/// Print a prompt and read one trimmed line from stdin
pub fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
    }
    Ok(line.trim().to_string())
}

/// Read a password without echo when stdin is a terminal; fall back to a
/// plain line read when piped.
pub fn prompt_secret(prompt: &str) -> io::Result<String> {
    if io::stdin().is_terminal() {
        rpassword::prompt_password(prompt)
    } else {
        prompt_line(prompt)
    }
}

/// Read a money amount, re-prompting on invalid input
pub fn prompt_amount(prompt: &str) -> io::Result<Money> {
    loop {
        let line = prompt_line(prompt)?;
        match Money::parse(&line) {
            Ok(amount) => return Ok(amount),
            Err(_) => println!("Invalid amount, try again."),
        }
    }
}

/// Read a `DD-MM-YYYY` date, re-prompting on invalid input
pub fn prompt_date(prompt: &str) -> io::Result<NaiveDate> {
    loop {
        let line = prompt_line(prompt)?;
        match parse_date(&line) {
            Ok(date) => return Ok(date),
            Err(_) => println!("Invalid date, expected DD-MM-YYYY."),
        }
    }
}

/// Read an unsigned number, re-prompting on invalid input
pub fn prompt_u32(prompt: &str) -> io::Result<u32> {
    loop {
        let line = prompt_line(prompt)?;
        match line.parse() {
            Ok(n) => return Ok(n),
            Err(_) => println!("Invalid number, try again."),
        }
    }
}

/// Read a signed number, re-prompting on invalid input
pub fn prompt_i32(prompt: &str) -> io::Result<i32> {
    loop {
        let line = prompt_line(prompt)?;
        match line.parse() {
            Ok(n) => return Ok(n),
            Err(_) => println!("Invalid number, try again."),
        }
    }
}
