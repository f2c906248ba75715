use super::{AccountService, AccountServiceError, CustomerService, CustomerServiceError};

use crate::ids::{AccountNumber, LegalId};
use crate::models::{
    Customer,
    Transaction,
    DEFAULT_WITHDRAWAL_COUNT_LIMIT,
    DEFAULT_WITHDRAWAL_LIMIT,
};
use crate::report::{self, AccountSummary};
use crate::Money;
use crate::Result;

use chrono::NaiveDate;

/// Front desk of the branch; every menu action goes through here.
pub struct TellerService {
    customers: CustomerService,
    accounts: AccountService,
}

impl TellerService {
    pub fn new(customers: CustomerService, accounts: AccountService) -> Self {
        return Self {
            customers,
            accounts,
        };
    }

    pub fn register_customer(
        &mut self,
        legal_id: LegalId,
        name: String,
        birth_date: NaiveDate,
        address: String,
    ) -> Result {
        let customer = Customer::new(legal_id, name, birth_date, address);

        self.customers.register(customer)?;

        return Ok(());
    }

    /// Opens a checking account with the branch default limits and hands the
    /// number to the customer.
    pub fn open_account(&mut self, legal_id: &LegalId) -> Result<AccountNumber> {
        let customer = self
            .customers
            .find_mut(legal_id)
            .ok_or_else(|| CustomerServiceError::NotFound(legal_id.clone()))?;

        let number = self.accounts.open_checking(
            legal_id.clone(),
            DEFAULT_WITHDRAWAL_LIMIT,
            DEFAULT_WITHDRAWAL_COUNT_LIMIT,
        );

        customer.add_account(number);

        log::debug!("Opened account {number} for customer {legal_id}");

        return Ok(number);
    }

    pub fn deposit(&mut self, legal_id: &LegalId, amount: Money) -> Result {
        return self.execute(legal_id, Transaction::Deposit { amount });
    }

    pub fn withdraw(&mut self, legal_id: &LegalId, amount: Money) -> Result {
        return self.execute(legal_id, Transaction::Withdrawal { amount });
    }

    fn execute(&mut self, legal_id: &LegalId, transaction: Transaction) -> Result {
        let customer = self
            .customers
            .find(legal_id)
            .ok_or_else(|| CustomerServiceError::NotFound(legal_id.clone()))?;

        let number = customer
            .first_account()
            .ok_or_else(|| AccountServiceError::NoAccounts(legal_id.clone()))?;

        let account = self
            .accounts
            .find_mut(number)
            .ok_or_else(|| AccountServiceError::NotFound(number))?;

        log::debug!("Executing {transaction:?} against account {number}");

        customer.execute_transaction(account, &transaction)?;

        return Ok(());
    }

    pub fn statement(&self, legal_id: &LegalId) -> Result<String> {
        let customer = self
            .customers
            .find(legal_id)
            .ok_or_else(|| CustomerServiceError::NotFound(legal_id.clone()))?;

        let account = self
            .accounts
            .first_account_of(customer)
            .ok_or_else(|| AccountServiceError::NoAccounts(legal_id.clone()))?;

        return Ok(report::render_statement(account));
    }

    /// One summary per open account, in open order.
    pub fn account_summaries(&self) -> Vec<AccountSummary> {
        return self
            .accounts
            .iter()
            .map(|account| {
                let holder = self
                    .customers
                    .find(account.owner())
                    .map(|customer| customer.name.clone())
                    .unwrap_or_default();

                AccountSummary::new(account, holder)
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::build_teller_service;
    use crate::models::TransactionError;

    fn some_legal_id() -> LegalId {
        LegalId::parse("52998224725".to_string()).unwrap()
    }

    fn other_legal_id() -> LegalId {
        LegalId::parse("11144477735".to_string()).unwrap()
    }

    fn some_birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
    }

    fn register(teller: &mut TellerService, legal_id: LegalId) {
        teller
            .register_customer(
                legal_id,
                "Jo Silva".to_string(),
                some_birth_date(),
                "Flower St, 52 - Downtown".to_string(),
            )
            .unwrap();
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut teller = build_teller_service();
        register(&mut teller, some_legal_id());

        let err = teller
            .register_customer(
                some_legal_id(),
                "Someone Else".to_string(),
                some_birth_date(),
                "Other St, 1".to_string(),
            )
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CustomerServiceError>(),
            Some(CustomerServiceError::AlreadyRegistered(_))
        ));
    }

    #[test]
    fn lookup_miss_attempts_no_transaction() {
        let mut teller = build_teller_service();

        let err = teller.deposit(&some_legal_id(), Money(100.0)).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CustomerServiceError>(),
            Some(CustomerServiceError::NotFound(_))
        ));
        assert!(teller.account_summaries().is_empty());
    }

    #[test]
    fn customer_without_accounts_cannot_transact() {
        let mut teller = build_teller_service();
        register(&mut teller, some_legal_id());

        let err = teller.deposit(&some_legal_id(), Money(100.0)).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AccountServiceError>(),
            Some(AccountServiceError::NoAccounts(_))
        ));
    }

    #[test]
    fn transactions_land_on_the_first_account() {
        let mut teller = build_teller_service();
        register(&mut teller, some_legal_id());

        let first = teller.open_account(&some_legal_id()).unwrap();
        let second = teller.open_account(&some_legal_id()).unwrap();
        assert_eq!(first, AccountNumber(1));
        assert_eq!(second, AccountNumber(2));

        teller.deposit(&some_legal_id(), Money(250.5)).unwrap();

        let statement = teller.statement(&some_legal_id()).unwrap();
        assert!(statement.contains("Balance: R$ 250.50"));
    }

    #[test]
    fn domain_failures_surface_through_the_teller() {
        let mut teller = build_teller_service();
        register(&mut teller, other_legal_id());
        teller.open_account(&other_legal_id()).unwrap();

        let err = teller
            .withdraw(&other_legal_id(), Money(10.0))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<TransactionError>(),
            Some(TransactionError::InsufficientBalance)
        ));
    }

    #[test]
    fn summaries_resolve_holder_names() {
        let mut teller = build_teller_service();
        register(&mut teller, some_legal_id());
        teller.open_account(&some_legal_id()).unwrap();

        let summaries = teller.account_summaries();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].holder, "Jo Silva");
        assert_eq!(summaries[0].number, "1");
    }
}
