//! Validation utilities

use crate::traits::*;
use crate::types::*;
use bigdecimal::BigDecimal;

/// Longest fixed deposit term accepted, in months
pub const MAX_TERM_MONTHS: u32 = 600;

/// Validate that a transaction amount is positive
pub fn validate_positive_amount(amount: &BigDecimal) -> BankResult<()> {
    if *amount <= BigDecimal::from(0) {
        Err(BankError::InvalidAmount(amount.clone()))
    } else {
        Ok(())
    }
}

/// Validate that an opening balance is not negative
pub fn validate_opening_balance(balance: &BigDecimal) -> BankResult<()> {
    if *balance < BigDecimal::from(0) {
        return Err(BankError::Validation(format!(
            "Initial balance cannot be negative: {}",
            balance
        )));
    }

    Ok(())
}

/// Validate that an interest rate percentage is not negative
pub fn validate_interest_rate(rate: &BigDecimal) -> BankResult<()> {
    if *rate < BigDecimal::from(0) {
        return Err(BankError::Validation(format!(
            "Interest rate cannot be negative: {}",
            rate
        )));
    }

    Ok(())
}

/// Validate the variant-specific parameters of an account
pub fn validate_terms(terms: &AccountTerms) -> BankResult<()> {
    match terms {
        AccountTerms::Savings { interest_rate } => validate_interest_rate(interest_rate),
        AccountTerms::Checking { overdraft_limit } => {
            if *overdraft_limit < BigDecimal::from(0) {
                return Err(BankError::Validation(format!(
                    "Overdraft limit cannot be negative: {}",
                    overdraft_limit
                )));
            }
            Ok(())
        }
        AccountTerms::FixedDeposit {
            term_months,
            interest_rate,
        } => {
            if *term_months == 0 {
                return Err(BankError::Validation(
                    "Fixed deposit term must be at least one month".to_string(),
                ));
            }
            validate_interest_rate(interest_rate)
        }
    }
}

/// Validate that an account ID is valid
pub fn validate_account_id(account_id: &str) -> BankResult<()> {
    if account_id.trim().is_empty() {
        return Err(BankError::Validation(
            "Account ID cannot be empty".to_string(),
        ));
    }

    if account_id.len() > 50 {
        return Err(BankError::Validation(
            "Account ID cannot exceed 50 characters".to_string(),
        ));
    }

    // Check for valid characters (alphanumeric, dashes, underscores)
    if !account_id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(BankError::Validation(
            "Account ID can only contain alphanumeric characters, dashes, and underscores"
                .to_string(),
        ));
    }

    Ok(())
}

/// Validate that an account holder name is valid
pub fn validate_holder_name(name: &str) -> BankResult<()> {
    if name.trim().is_empty() {
        return Err(BankError::Validation(
            "Account holder name cannot be empty".to_string(),
        ));
    }

    if name.len() > 100 {
        return Err(BankError::Validation(
            "Account holder name cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Enhanced account validator with detailed checks
pub struct EnhancedAccountValidator;

impl AccountValidator for EnhancedAccountValidator {
    fn validate_account(&self, account: &Account) -> BankResult<()> {
        validate_account_id(&account.id)?;
        validate_holder_name(&account.holder_name)?;
        validate_opening_balance(&account.balance)?;
        validate_terms(&account.terms)?;

        if let AccountTerms::FixedDeposit { term_months, .. } = account.terms {
            if term_months > MAX_TERM_MONTHS {
                return Err(BankError::Validation(format!(
                    "Fixed deposit term cannot exceed {} months",
                    MAX_TERM_MONTHS
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_amount() {
        assert!(validate_positive_amount(&BigDecimal::from(1)).is_ok());
        assert_eq!(
            validate_positive_amount(&BigDecimal::from(0)),
            Err(BankError::InvalidAmount(BigDecimal::from(0)))
        );
        assert!(validate_positive_amount(&BigDecimal::from(-5)).is_err());
    }

    #[test]
    fn test_account_id_rules() {
        assert!(validate_account_id("ACC-001").is_ok());
        assert!(validate_account_id("   ").is_err());
        assert!(validate_account_id("has space").is_err());
        assert!(validate_account_id(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_terms_rules() {
        assert!(validate_terms(&AccountTerms::Checking {
            overdraft_limit: BigDecimal::from(-1)
        })
        .is_err());
        assert!(validate_terms(&AccountTerms::FixedDeposit {
            term_months: 0,
            interest_rate: BigDecimal::from(5)
        })
        .is_err());
        assert!(validate_terms(&AccountTerms::Savings {
            interest_rate: BigDecimal::from(0)
        })
        .is_ok());
    }

    #[test]
    fn test_enhanced_validator_caps_term() {
        let account = Account::new(
            "fd-1".to_string(),
            "Asha".to_string(),
            BigDecimal::from(1000),
            AccountTerms::FixedDeposit {
                term_months: MAX_TERM_MONTHS + 1,
                interest_rate: BigDecimal::from(6),
            },
        );
        assert!(EnhancedAccountValidator.validate_account(&account).is_err());
        assert!(DefaultAccountValidator.validate_account(&account).is_ok());
    }
}
