mod account;
mod customer;
mod history;
mod transaction;

pub use account::{
    Account,
    AccountKind,
    TransactionError,
    BRANCH_CODE,
    DEFAULT_WITHDRAWAL_COUNT_LIMIT,
    DEFAULT_WITHDRAWAL_LIMIT,
};
pub use customer::Customer;
pub use history::{History, TransactionRecord};
pub use transaction::{Transaction, TransactionKind};
