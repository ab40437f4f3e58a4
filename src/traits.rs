//! Traits for storage abstraction and extensibility

use crate::types::*;
use crate::utils::validation::{validate_opening_balance, validate_terms};

/// Storage abstraction for the account registry
///
/// The registry is the only owner of a storage instance, so mutation goes
/// through `&mut self` and no interior locking is required.
pub trait AccountStorage {
    /// Save a new account
    fn insert_account(&mut self, account: Account) -> BankResult<()>;

    /// Get an account by ID
    fn get_account(&self, account_id: &str) -> Option<&Account>;

    /// Get an account by ID for mutation
    fn get_account_mut(&mut self, account_id: &str) -> Option<&mut Account>;

    /// List all accounts in the order they were opened
    fn list_accounts(&self) -> Vec<&Account>;

    /// Number of stored accounts
    fn count(&self) -> usize;

    /// Check whether an account with the given ID exists
    fn contains_account(&self, account_id: &str) -> bool {
        self.get_account(account_id).is_some()
    }
}

/// Trait for implementing custom account validation rules
pub trait AccountValidator {
    /// Validate an account before it is stored
    fn validate_account(&self, account: &Account) -> BankResult<()>;
}

/// Default account validator with the rules every account must satisfy
pub struct DefaultAccountValidator;

impl AccountValidator for DefaultAccountValidator {
    fn validate_account(&self, account: &Account) -> BankResult<()> {
        if account.id.trim().is_empty() {
            return Err(BankError::Validation(
                "Account ID cannot be empty".to_string(),
            ));
        }

        if account.holder_name.trim().is_empty() {
            return Err(BankError::Validation(
                "Account holder name cannot be empty".to_string(),
            ));
        }

        validate_opening_balance(&account.balance)?;
        validate_terms(&account.terms)
    }
}
