pub mod ids;
pub mod models;
mod money;
pub mod report;
mod result;
pub mod services;

pub use money::{Money, MoneyError};
pub use result::Result;

pub fn build_teller_service() -> services::TellerService {
    let customer_service = services::CustomerService::new();
    let account_service = services::AccountService::new();
    let teller_service = services::TellerService::new(customer_service, account_service);

    return teller_service;
}
