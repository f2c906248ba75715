mod account_number;
mod legal_id;

pub use account_number::AccountNumber;
pub use legal_id::{LegalId, LegalIdError};
