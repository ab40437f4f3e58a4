//! Account registry: opening accounts and looking them up by ID

use bigdecimal::BigDecimal;
use log::{debug, info};

use crate::config::RegistryConfig;
use crate::traits::*;
use crate::types::*;

/// Owner of every account in the bank
pub struct AccountRegistry<S: AccountStorage> {
    storage: S,
    validator: Box<dyn AccountValidator>,
    config: RegistryConfig,
}

impl<S: AccountStorage> AccountRegistry<S> {
    /// Create a new registry
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, RegistryConfig::default())
    }

    /// Create a new registry with explicit settings
    pub fn with_config(storage: S, config: RegistryConfig) -> Self {
        Self {
            storage,
            validator: Box::new(DefaultAccountValidator),
            config,
        }
    }

    /// Replace the account validator
    pub fn with_validator(mut self, validator: Box<dyn AccountValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Open a new account
    pub fn create(
        &mut self,
        kind: AccountKind,
        id: String,
        holder_name: String,
        initial_balance: BigDecimal,
        params: VariantParams,
    ) -> BankResult<Account> {
        let terms = AccountTerms::from_params(kind, &params)?;
        let account = Account::new(id, holder_name, initial_balance, terms);

        // Validate the account
        self.validator.validate_account(&account)?;

        if self.storage.contains_account(&account.id) {
            if self.config.reject_duplicate_ids {
                return Err(BankError::DuplicateId(account.id));
            }
            debug!(
                "Account ID '{}' already in use; the new account will be shadowed",
                account.id
            );
        }

        self.storage.insert_account(account.clone())?;
        info!(
            "Opened {} account {} for {}",
            account.kind(),
            account.id,
            account.holder_name
        );

        Ok(account)
    }

    /// Open a new account from a textual kind tag such as `"savings"` or `"2"`
    pub fn create_from_tag(
        &mut self,
        tag: &str,
        id: String,
        holder_name: String,
        initial_balance: BigDecimal,
        params: VariantParams,
    ) -> BankResult<Account> {
        let kind: AccountKind = tag.parse()?;
        self.create(kind, id, holder_name, initial_balance, params)
    }

    /// Find an account by ID; a miss is an ordinary outcome
    pub fn find(&self, account_id: &str) -> Option<&Account> {
        self.storage.get_account(account_id)
    }

    /// Find an account by ID, returning an error if not found
    pub fn find_required(&self, account_id: &str) -> BankResult<&Account> {
        self.find(account_id)
            .ok_or_else(|| BankError::AccountNotFound(account_id.to_string()))
    }

    pub(crate) fn find_mut(&mut self, account_id: &str) -> BankResult<&mut Account> {
        self.storage
            .get_account_mut(account_id)
            .ok_or_else(|| BankError::AccountNotFound(account_id.to_string()))
    }

    /// All accounts in the order they were opened
    pub fn accounts(&self) -> Vec<&Account> {
        self.storage.list_accounts()
    }

    /// Number of accounts held
    pub fn len(&self) -> usize {
        self.storage.count()
    }

    /// Whether the registry holds no accounts
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Generate an account number that is not yet in use
    pub fn generate_id(&self) -> String {
        loop {
            let uuid = uuid::Uuid::new_v4().simple().to_string();
            let candidate = format!("ACC-{}", uuid[..8].to_uppercase());
            if !self.storage.contains_account(&candidate) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{EnhancedAccountValidator, MemoryStorage};

    fn registry() -> AccountRegistry<MemoryStorage> {
        AccountRegistry::new(MemoryStorage::new())
    }

    #[test]
    fn test_create_and_find() {
        let mut registry = registry();

        let account = registry
            .create(
                AccountKind::Savings,
                "1001".to_string(),
                "Deepa Nair".to_string(),
                BigDecimal::from(1000),
                VariantParams::savings(BigDecimal::from(5)),
            )
            .unwrap();

        assert_eq!(account.kind(), AccountKind::Savings);
        assert_eq!(registry.find("1001"), Some(&account));
        assert!(registry.find("9999").is_none());
        assert_eq!(
            registry.find_required("9999"),
            Err(BankError::AccountNotFound("9999".to_string()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected_by_default() {
        let mut registry = registry();
        let open = |registry: &mut AccountRegistry<MemoryStorage>, holder: &str| {
            registry.create(
                AccountKind::Checking,
                "2001".to_string(),
                holder.to_string(),
                BigDecimal::from(10),
                VariantParams::checking(BigDecimal::from(5)),
            )
        };

        assert!(open(&mut registry, "First").is_ok());
        assert_eq!(
            open(&mut registry, "Second"),
            Err(BankError::DuplicateId("2001".to_string()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_id_shadowed_when_allowed() {
        let mut registry = AccountRegistry::with_config(
            MemoryStorage::new(),
            RegistryConfig {
                reject_duplicate_ids: false,
            },
        );

        for holder in ["First", "Second"] {
            registry
                .create(
                    AccountKind::Savings,
                    "3001".to_string(),
                    holder.to_string(),
                    BigDecimal::from(10),
                    VariantParams::savings(BigDecimal::from(1)),
                )
                .unwrap();
        }

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find("3001").unwrap().holder_name, "First");
    }

    #[test]
    fn test_create_from_unknown_tag() {
        let mut registry = registry();
        let result = registry.create_from_tag(
            "brokerage",
            "4001".to_string(),
            "Gopal".to_string(),
            BigDecimal::from(10),
            VariantParams::default(),
        );
        assert_eq!(
            result,
            Err(BankError::InvalidVariant("brokerage".to_string()))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_create_validates_fields() {
        let mut registry = registry();

        let negative = registry.create(
            AccountKind::Savings,
            "5001".to_string(),
            "Hema".to_string(),
            BigDecimal::from(-1),
            VariantParams::savings(BigDecimal::from(1)),
        );
        assert!(matches!(negative, Err(BankError::Validation(_))));

        let unnamed = registry.create(
            AccountKind::Savings,
            "5002".to_string(),
            "  ".to_string(),
            BigDecimal::from(1),
            VariantParams::savings(BigDecimal::from(1)),
        );
        assert!(matches!(unnamed, Err(BankError::Validation(_))));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_custom_validator() {
        let mut registry = registry().with_validator(Box::new(EnhancedAccountValidator));
        let result = registry.create(
            AccountKind::Savings,
            "bad id!".to_string(),
            "Indu".to_string(),
            BigDecimal::from(1),
            VariantParams::savings(BigDecimal::from(1)),
        );
        assert!(matches!(result, Err(BankError::Validation(_))));
    }

    #[test]
    fn test_generated_ids_are_unused() {
        let mut registry = registry();
        let id = registry.generate_id();
        assert!(id.starts_with("ACC-"));
        assert_eq!(id.len(), 12);

        registry
            .create(
                AccountKind::Savings,
                id.clone(),
                "Jaya".to_string(),
                BigDecimal::from(1),
                VariantParams::savings(BigDecimal::from(1)),
            )
            .unwrap();
        assert_ne!(registry.generate_id(), id);
    }
}
