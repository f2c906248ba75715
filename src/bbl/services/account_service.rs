use crate::ids::{AccountNumber, LegalId};
use crate::models::{Account, Customer};
use crate::Money;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountServiceError {
    #[error("Account not found: {0}")]
    NotFound(AccountNumber),

    #[error("Customer {0} has no open accounts")]
    NoAccounts(LegalId),
}

/// Owns every account the branch has opened, in open order. Numbers are
/// assigned sequentially from 1.
pub struct AccountService {
    accounts: Vec<Account>,
}

impl AccountService {
    pub fn new() -> Self {
        return Self { accounts: vec![] };
    }

    pub fn open_checking(
        &mut self,
        owner: LegalId,
        withdrawal_limit: Money,
        withdrawal_count_limit: u32,
    ) -> AccountNumber {
        let number = AccountNumber(self.accounts.len() as u32 + 1);

        self.accounts.push(Account::new_checking(
            number,
            owner,
            withdrawal_limit,
            withdrawal_count_limit,
        ));

        return number;
    }

    pub fn find(&self, number: AccountNumber) -> Option<&Account> {
        return self
            .accounts
            .iter()
            .find(|account| account.number() == number);
    }

    pub fn find_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        return self
            .accounts
            .iter_mut()
            .find(|account| account.number() == number);
    }

    /// Always the first account in the customer's list; callers cannot pick
    /// another.
    pub fn first_account_of(&self, customer: &Customer) -> Option<&Account> {
        return customer.first_account().and_then(|number| self.find(number));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        return self.accounts.iter();
    }
}
