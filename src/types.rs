//! Core types and data structures for the banking ledger

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of account the bank offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    /// Interest-bearing account that cannot go below zero
    Savings,
    /// Non-interest account backed by an overdraft buffer
    Checking,
    /// Term deposit that accrues interest and cannot be withdrawn from
    FixedDeposit,
}

impl AccountKind {
    /// Human-readable label used by the console
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Savings => "Savings",
            AccountKind::Checking => "Checking",
            AccountKind::FixedDeposit => "Fixed Deposit",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AccountKind {
    type Err = BankError;

    /// Accepts the console menu numbers as well as the kind names
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "1" | "savings" => Ok(AccountKind::Savings),
            "2" | "checking" => Ok(AccountKind::Checking),
            "3" | "fixed-deposit" | "fixed_deposit" | "fixeddeposit" | "fd" => {
                Ok(AccountKind::FixedDeposit)
            }
            _ => Err(BankError::InvalidVariant(tag.trim().to_string())),
        }
    }
}

/// Variant-specific state of an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccountTerms {
    Savings {
        /// Annual rate in percent
        interest_rate: BigDecimal,
    },
    Checking {
        /// Remaining overdraft buffer, drawn down as it is used
        overdraft_limit: BigDecimal,
    },
    FixedDeposit {
        term_months: u32,
        /// Annual rate in percent
        interest_rate: BigDecimal,
    },
}

impl AccountTerms {
    /// Build the terms for `kind` from loosely supplied creation parameters
    pub fn from_params(kind: AccountKind, params: &VariantParams) -> BankResult<Self> {
        let missing = |field: &str| {
            BankError::Validation(format!("{} accounts require {}", kind.label(), field))
        };

        match kind {
            AccountKind::Savings => Ok(AccountTerms::Savings {
                interest_rate: params
                    .interest_rate
                    .clone()
                    .ok_or_else(|| missing("an interest rate"))?,
            }),
            AccountKind::Checking => Ok(AccountTerms::Checking {
                overdraft_limit: params
                    .overdraft_limit
                    .clone()
                    .ok_or_else(|| missing("an overdraft limit"))?,
            }),
            AccountKind::FixedDeposit => Ok(AccountTerms::FixedDeposit {
                term_months: params.term_months.ok_or_else(|| missing("a term"))?,
                interest_rate: params
                    .interest_rate
                    .clone()
                    .ok_or_else(|| missing("an interest rate"))?,
            }),
        }
    }

    /// The kind these terms belong to
    pub fn kind(&self) -> AccountKind {
        match self {
            AccountTerms::Savings { .. } => AccountKind::Savings,
            AccountTerms::Checking { .. } => AccountKind::Checking,
            AccountTerms::FixedDeposit { .. } => AccountKind::FixedDeposit,
        }
    }
}

/// Extra parameters supplied when opening an account
///
/// Only the fields relevant to the requested [`AccountKind`] are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantParams {
    pub interest_rate: Option<BigDecimal>,
    pub overdraft_limit: Option<BigDecimal>,
    pub term_months: Option<u32>,
}

impl VariantParams {
    /// Parameters for a savings account
    pub fn savings(interest_rate: BigDecimal) -> Self {
        Self {
            interest_rate: Some(interest_rate),
            ..Self::default()
        }
    }

    /// Parameters for a checking account
    pub fn checking(overdraft_limit: BigDecimal) -> Self {
        Self {
            overdraft_limit: Some(overdraft_limit),
            ..Self::default()
        }
    }

    /// Parameters for a fixed deposit
    pub fn fixed_deposit(term_months: u32, interest_rate: BigDecimal) -> Self {
        Self {
            interest_rate: Some(interest_rate),
            term_months: Some(term_months),
            ..Self::default()
        }
    }
}

/// Core account structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account number
    pub id: String,
    /// Name of the account holder
    pub holder_name: String,
    /// Current balance of the account
    pub balance: BigDecimal,
    /// Variant-specific state
    pub terms: AccountTerms,
    /// When the account was opened
    pub created_at: NaiveDateTime,
    /// When the balance last changed
    pub updated_at: NaiveDateTime,
}

impl Account {
    /// Create a new account
    pub fn new(id: String, holder_name: String, balance: BigDecimal, terms: AccountTerms) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id,
            holder_name,
            balance,
            terms,
            created_at: now,
            updated_at: now,
        }
    }

    /// The kind of this account
    pub fn kind(&self) -> AccountKind {
        self.terms.kind()
    }
}

/// Successful outcome of a withdrawal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Withdrawal {
    /// Paid entirely out of the balance
    Debited {
        amount: BigDecimal,
        balance: BigDecimal,
    },
    /// Paid partly out of the checking overdraft; the balance is now zero
    Overdrawn {
        amount: BigDecimal,
        overdraft_used: BigDecimal,
        remaining_overdraft: BigDecimal,
    },
}

/// Interest figure reported for an account; never credited to the balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InterestQuote {
    Savings(BigDecimal),
    FixedDeposit(BigDecimal),
    /// Checking accounts do not earn interest
    NotEarned,
}

impl InterestQuote {
    /// Interest amount, zero when none is earned
    pub fn amount(&self) -> BigDecimal {
        match self {
            InterestQuote::Savings(amount) | InterestQuote::FixedDeposit(amount) => amount.clone(),
            InterestQuote::NotEarned => BigDecimal::from(0),
        }
    }
}

/// Snapshot of an account for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub id: String,
    pub holder_name: String,
    pub kind: AccountKind,
    pub balance: BigDecimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<BigDecimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overdraft_limit: Option<BigDecimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_months: Option<u32>,
    pub opened_at: NaiveDateTime,
}

/// Errors that can occur in the banking ledger
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BankError {
    #[error("Invalid amount: {0} (must be greater than zero)")]
    InvalidAmount(BigDecimal),
    #[error("Insufficient funds: current balance is {balance}")]
    InsufficientFunds { balance: BigDecimal },
    #[error("Overdraft limit exceeded: balance {balance}, overdraft limit {overdraft_limit}")]
    OverdraftExceeded {
        balance: BigDecimal,
        overdraft_limit: BigDecimal,
    },
    #[error("Cannot withdraw before maturity of term")]
    MaturityNotReached,
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Invalid account type: {0}")]
    InvalidVariant(String),
    #[error("Account with ID '{0}' already exists")]
    DuplicateId(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl BankError {
    /// Whether a well-formed request was refused by an account's policy
    pub fn is_declined(&self) -> bool {
        matches!(
            self,
            BankError::InsufficientFunds { .. }
                | BankError::OverdraftExceeded { .. }
                | BankError::MaturityNotReached
        )
    }
}

/// Result type for ledger operations
pub type BankResult<T> = Result<T, BankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("1".parse::<AccountKind>().unwrap(), AccountKind::Savings);
        assert_eq!(" Checking ".parse::<AccountKind>().unwrap(), AccountKind::Checking);
        assert_eq!("fd".parse::<AccountKind>().unwrap(), AccountKind::FixedDeposit);
        assert_eq!(
            "loan".parse::<AccountKind>(),
            Err(BankError::InvalidVariant("loan".to_string()))
        );
    }

    #[test]
    fn test_terms_require_variant_params() {
        let err = AccountTerms::from_params(AccountKind::Checking, &VariantParams::default())
            .unwrap_err();
        assert!(matches!(err, BankError::Validation(_)));

        let terms = AccountTerms::from_params(
            AccountKind::FixedDeposit,
            &VariantParams::fixed_deposit(12, BigDecimal::from(6)),
        )
        .unwrap();
        assert_eq!(terms.kind(), AccountKind::FixedDeposit);
    }

    #[test]
    fn test_not_earned_interest_is_zero() {
        assert_eq!(InterestQuote::NotEarned.amount(), BigDecimal::from(0));
    }

    #[test]
    fn test_declined_errors() {
        assert!(BankError::MaturityNotReached.is_declined());
        assert!(!BankError::InvalidAmount(BigDecimal::from(0)).is_declined());
        assert!(!BankError::AccountNotFound("x".to_string()).is_declined());
    }
}
