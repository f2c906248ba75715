mod account_service;
mod customer_service;
mod teller_service;

pub use account_service::{AccountService, AccountServiceError};
pub use customer_service::{CustomerService, CustomerServiceError};
pub use teller_service::TellerService;
