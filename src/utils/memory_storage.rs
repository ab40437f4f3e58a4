//! In-memory storage implementation

use std::collections::HashMap;

use crate::traits::*;
use crate::types::*;

/// In-memory account storage
///
/// Accounts are kept in opening order. The index maps each ID to the first
/// account stored under it, so when duplicate IDs are let through the earlier
/// account keeps answering lookups.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    accounts: Vec<Account>,
    index: HashMap<String, usize>,
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all data (useful for testing)
    pub fn clear(&mut self) {
        self.accounts.clear();
        self.index.clear();
    }
}

impl AccountStorage for MemoryStorage {
    fn insert_account(&mut self, account: Account) -> BankResult<()> {
        let position = self.accounts.len();
        self.index.entry(account.id.clone()).or_insert(position);
        self.accounts.push(account);
        Ok(())
    }

    fn get_account(&self, account_id: &str) -> Option<&Account> {
        self.index
            .get(account_id)
            .and_then(|&position| self.accounts.get(position))
    }

    fn get_account_mut(&mut self, account_id: &str) -> Option<&mut Account> {
        let position = *self.index.get(account_id)?;
        self.accounts.get_mut(position)
    }

    fn list_accounts(&self) -> Vec<&Account> {
        self.accounts.iter().collect()
    }

    fn count(&self) -> usize {
        self.accounts.len()
    }
}
