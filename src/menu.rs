use thiserror::Error;

pub const MENU: &str = "\
================ MENU ================
[d]  Deposit
[w]  Withdraw
[s]  Statement
[nc] New customer
[na] New account
[la] List accounts
[q]  Quit
======================================";

#[derive(Error, Debug)]
pub enum MenuParseError {
    #[error("Invalid option: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Deposit,
    Withdraw,
    Statement,
    NewCustomer,
    NewAccount,
    ListAccounts,
    Quit,
}

impl MenuOption {
    pub fn parse(input: &str) -> Result<Self, MenuParseError> {
        return match input.trim().to_lowercase().as_str() {
            "d" => Ok(Self::Deposit),
            "w" => Ok(Self::Withdraw),
            "s" => Ok(Self::Statement),
            "nc" => Ok(Self::NewCustomer),
            "na" => Ok(Self::NewAccount),
            "la" => Ok(Self::ListAccounts),
            "q" => Ok(Self::Quit),
            other => Err(MenuParseError::Invalid(other.to_string())),
        };
    }
}
