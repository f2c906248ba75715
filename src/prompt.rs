use bbl::ids::LegalId;
use bbl::{Money, Result};

use std::io::{self, Write};

use chrono::NaiveDate;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Date parse error: expected dd-mm-yyyy, got: {0}")]
    InvalidDate(String),
}

/// Prints the label and reads one trimmed line from stdin. `None` means the
/// input stream is closed.
pub fn read_line(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut buffer = String::new();
    if io::stdin().read_line(&mut buffer)? == 0 {
        return Ok(None);
    }

    return Ok(Some(buffer.trim().to_string()));
}

pub fn read_legal_id(label: &str) -> Result<Option<LegalId>> {
    return match read_line(label)? {
        None => Ok(None),
        Some(input) => LegalId::parse(input).map(Some),
    };
}

pub fn read_money(label: &str) -> Result<Option<Money>> {
    return match read_line(label)? {
        None => Ok(None),
        Some(input) => Money::parse(input).map(Some),
    };
}

pub fn read_date(label: &str) -> Result<Option<NaiveDate>> {
    return match read_line(label)? {
        None => Ok(None),
        Some(input) => {
            let date = NaiveDate::parse_from_str(&input, "%d-%m-%Y")
                .map_err(|_| PromptError::InvalidDate(input))?;

            Ok(Some(date))
        }
    };
}
