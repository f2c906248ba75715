use crate::models::{Account, History, BRANCH_CODE};

use std::fmt;

pub const NO_MOVEMENTS: &str = "No transactions recorded.";

/// Fixed multi-line rendering of one account for the listing screen.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    pub branch: String,
    pub number: String,
    pub holder: String,
}

impl AccountSummary {
    pub fn new(account: &Account, holder: String) -> Self {
        Self {
            branch: BRANCH_CODE.to_string(),
            number: account.number().to_string(),
            holder,
        }
    }
}

impl fmt::Display for AccountSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Branch:\t\t{}", self.branch)?;
        writeln!(f, "Account:\t{}", self.number)?;
        write!(f, "Holder:\t\t{}", self.holder)
    }
}

/// Chronological listing of the account history plus the closing balance.
pub fn render_statement(account: &Account) -> String {
    return format!(
        "{}\nBalance: R$ {}",
        render_history(account.history()),
        account.balance(),
    );
}

fn render_history(history: &History) -> String {
    if history.is_empty() {
        return NO_MOVEMENTS.to_string();
    }

    return history
        .records()
        .iter()
        .map(|record| {
            format!(
                "{}: {} R$ {}",
                record.kind,
                record.timestamp.format("%d/%m/%Y %H:%M:%S"),
                record.amount,
            )
        })
        .collect::<Vec<String>>()
        .join("\n");
}
