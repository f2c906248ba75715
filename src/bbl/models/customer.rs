use super::{Account, Transaction, TransactionError};

use crate::ids::{AccountNumber, LegalId};

use chrono::NaiveDate;

/// A natural person holding accounts at the branch. Accounts are referenced
/// by number; the account structs live in the account repository.
#[derive(Debug, Clone)]
pub struct Customer {
    pub legal_id: LegalId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
    accounts: Vec<AccountNumber>,
}

impl Customer {
    pub fn new(legal_id: LegalId, name: String, birth_date: NaiveDate, address: String) -> Self {
        Self {
            legal_id,
            name,
            birth_date,
            address,
            accounts: vec![],
        }
    }

    /// Appends without checking for duplicates.
    pub fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }

    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    pub fn first_account(&self) -> Option<AccountNumber> {
        self.accounts.first().copied()
    }

    /// Hands the transaction to the account. Whether the account belongs to
    /// this customer is not verified here.
    pub fn execute_transaction(
        &self,
        account: &mut Account,
        transaction: &Transaction,
    ) -> Result<(), TransactionError> {
        transaction.apply(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOME_ACCOUNT_NUMBER: AccountNumber = AccountNumber(1);
    const OTHER_ACCOUNT_NUMBER: AccountNumber = AccountNumber(2);

    fn build_customer() -> Customer {
        Customer::new(
            LegalId::parse("52998224725".to_string()).unwrap(),
            "Jo Silva".to_string(),
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            "Flower St, 52 - Downtown".to_string(),
        )
    }

    #[test]
    fn first_account_follows_insertion_order() {
        let mut customer = build_customer();
        assert_eq!(customer.first_account(), None);

        customer.add_account(OTHER_ACCOUNT_NUMBER);
        customer.add_account(SOME_ACCOUNT_NUMBER);

        assert_eq!(customer.first_account(), Some(OTHER_ACCOUNT_NUMBER));
    }

    #[test]
    fn add_account_permits_duplicates() {
        let mut customer = build_customer();

        customer.add_account(SOME_ACCOUNT_NUMBER);
        customer.add_account(SOME_ACCOUNT_NUMBER);

        assert_eq!(
            customer.accounts(),
            &[SOME_ACCOUNT_NUMBER, SOME_ACCOUNT_NUMBER]
        );
    }
}
