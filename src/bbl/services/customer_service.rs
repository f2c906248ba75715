use crate::ids::LegalId;
use crate::models::Customer;
use crate::Result;

use std::collections::HashMap;

use thiserror::Error;

pub type CustomerDataStore = HashMap<LegalId, Customer>;

#[derive(Error, Debug)]
pub enum CustomerServiceError {
    #[error("A customer is already registered under legal ID {0}")]
    AlreadyRegistered(LegalId),

    #[error("Customer not found: {0}")]
    NotFound(LegalId),
}

pub struct CustomerService {
    repository: CustomerDataStore,
}

impl CustomerService {
    pub fn new() -> Self {
        return Self {
            repository: CustomerDataStore::new(),
        };
    }

    /// Legal-ID uniqueness lives here, not in the model.
    pub fn register(&mut self, customer: Customer) -> Result {
        if self.repository.contains_key(&customer.legal_id) {
            Err(CustomerServiceError::AlreadyRegistered(
                customer.legal_id.clone(),
            ))?
        }

        log::debug!("Registering customer {}", customer.legal_id);

        self.repository.insert(customer.legal_id.clone(), customer);

        return Ok(());
    }

    pub fn find(&self, legal_id: &LegalId) -> Option<&Customer> {
        return self.repository.get(legal_id);
    }

    pub fn find_mut(&mut self, legal_id: &LegalId) -> Option<&mut Customer> {
        return self.repository.get_mut(legal_id);
    }
}
