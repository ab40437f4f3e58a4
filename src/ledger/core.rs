//! Bank front door: every operation an operator can perform, addressed by account ID

use bigdecimal::BigDecimal;
use log::{debug, info, warn};

use crate::config::RegistryConfig;
use crate::ledger::AccountRegistry;
use crate::traits::*;
use crate::types::*;

/// Main bank system that routes operator requests to accounts
pub struct Bank<S: AccountStorage> {
    registry: AccountRegistry<S>,
}

impl<S: AccountStorage> Bank<S> {
    /// Create a new bank with the given storage backend
    pub fn new(storage: S) -> Self {
        Self {
            registry: AccountRegistry::new(storage),
        }
    }

    /// Create a new bank with explicit registry settings
    pub fn with_config(storage: S, config: RegistryConfig) -> Self {
        Self {
            registry: AccountRegistry::with_config(storage, config),
        }
    }

    /// Create a bank around an already configured registry
    pub fn from_registry(registry: AccountRegistry<S>) -> Self {
        Self { registry }
    }

    /// Read access to the underlying registry
    pub fn registry(&self) -> &AccountRegistry<S> {
        &self.registry
    }

    /// Open a new account
    pub fn create_account(
        &mut self,
        kind: AccountKind,
        id: String,
        holder_name: String,
        initial_balance: BigDecimal,
        params: VariantParams,
    ) -> BankResult<Account> {
        self.registry
            .create(kind, id, holder_name, initial_balance, params)
            .inspect_err(|err| warn!("Account creation failed: {}", err))
    }

    /// Look up an account; `None` when no account has this ID
    pub fn find_account(&self, account_id: &str) -> Option<&Account> {
        self.registry.find(account_id)
    }

    /// Deposit into an account and return its new balance
    pub fn deposit(&mut self, account_id: &str, amount: &BigDecimal) -> BankResult<BigDecimal> {
        let account = self.registry.find_mut(account_id)?;
        match account.deposit(amount) {
            Ok(balance) => {
                info!("Deposited {} into {}", amount, account_id);
                Ok(balance)
            }
            Err(err) => {
                warn!("Deposit into {} rejected: {}", account_id, err);
                Err(err)
            }
        }
    }

    /// Withdraw from an account under its variant's policy
    pub fn withdraw(&mut self, account_id: &str, amount: &BigDecimal) -> BankResult<Withdrawal> {
        let account = self.registry.find_mut(account_id)?;
        match account.withdraw(amount) {
            Ok(withdrawal) => {
                if let Withdrawal::Overdrawn {
                    overdraft_used,
                    remaining_overdraft,
                    ..
                } = &withdrawal
                {
                    info!(
                        "Withdrew {} from {} using {} of overdraft ({} left)",
                        amount, account_id, overdraft_used, remaining_overdraft
                    );
                } else {
                    info!("Withdrew {} from {}", amount, account_id);
                }
                Ok(withdrawal)
            }
            Err(err) => {
                warn!("Withdrawal from {} declined: {}", account_id, err);
                Err(err)
            }
        }
    }

    /// Snapshot of an account
    pub fn show_info(&self, account_id: &str) -> BankResult<AccountInfo> {
        let info = self.registry.find_required(account_id)?.info();
        debug!("Displayed info for {}", account_id);
        Ok(info)
    }

    /// Interest an account would earn on its current balance
    pub fn show_interest(&self, account_id: &str) -> BankResult<InterestQuote> {
        let quote = self.registry.find_required(account_id)?.interest();
        debug!("Quoted interest {} for {}", quote.amount(), account_id);
        Ok(quote)
    }

    /// Snapshots of all accounts in the order they were opened
    pub fn list_accounts(&self) -> Vec<AccountInfo> {
        self.registry
            .accounts()
            .into_iter()
            .map(Account::info)
            .collect()
    }
}
