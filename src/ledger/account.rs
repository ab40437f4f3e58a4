//! Per-variant account rules: deposits, withdrawals and interest

use bigdecimal::BigDecimal;

use crate::types::*;
use crate::utils::validation::validate_positive_amount;

impl Account {
    /// Credit `amount` to the balance and return the new balance
    pub fn deposit(&mut self, amount: &BigDecimal) -> BankResult<BigDecimal> {
        validate_positive_amount(amount)?;

        self.balance += amount;
        self.updated_at = chrono::Utc::now().naive_utc();
        Ok(self.balance.clone())
    }

    /// Withdraw `amount` according to the account's variant policy
    ///
    /// A declined withdrawal leaves the account untouched.
    pub fn withdraw(&mut self, amount: &BigDecimal) -> BankResult<Withdrawal> {
        validate_positive_amount(amount)?;

        let withdrawal = match &mut self.terms {
            AccountTerms::Savings { .. } => {
                if *amount > self.balance {
                    return Err(BankError::InsufficientFunds {
                        balance: self.balance.clone(),
                    });
                }
                self.balance -= amount;
                Withdrawal::Debited {
                    amount: amount.clone(),
                    balance: self.balance.clone(),
                }
            }
            AccountTerms::Checking { overdraft_limit } => {
                // Drawing the buffer down to exactly zero is allowed
                if *amount > &self.balance + &*overdraft_limit {
                    return Err(BankError::OverdraftExceeded {
                        balance: self.balance.clone(),
                        overdraft_limit: overdraft_limit.clone(),
                    });
                }

                if *amount > self.balance {
                    let overdraft_used = amount - &self.balance;
                    self.balance = BigDecimal::from(0);
                    *overdraft_limit -= &overdraft_used;
                    Withdrawal::Overdrawn {
                        amount: amount.clone(),
                        overdraft_used,
                        remaining_overdraft: overdraft_limit.clone(),
                    }
                } else {
                    self.balance -= amount;
                    Withdrawal::Debited {
                        amount: amount.clone(),
                        balance: self.balance.clone(),
                    }
                }
            }
            // No maturity clock exists, so the term never completes
            AccountTerms::FixedDeposit { .. } => return Err(BankError::MaturityNotReached),
        };

        self.updated_at = chrono::Utc::now().naive_utc();
        Ok(withdrawal)
    }

    /// Interest the current balance would earn; the balance is not credited
    pub fn interest(&self) -> InterestQuote {
        match &self.terms {
            AccountTerms::Savings { interest_rate } => {
                InterestQuote::Savings((&self.balance * interest_rate) / BigDecimal::from(100))
            }
            AccountTerms::Checking { .. } => InterestQuote::NotEarned,
            AccountTerms::FixedDeposit {
                term_months,
                interest_rate,
            } => InterestQuote::FixedDeposit(
                (&self.balance * interest_rate * BigDecimal::from(*term_months))
                    / BigDecimal::from(12 * 100),
            ),
        }
    }

    /// Snapshot of the fields relevant to this account's variant
    pub fn info(&self) -> AccountInfo {
        let (interest_rate, overdraft_limit, term_months) = match &self.terms {
            AccountTerms::Savings { interest_rate } => (Some(interest_rate.clone()), None, None),
            AccountTerms::Checking { overdraft_limit } => {
                (None, Some(overdraft_limit.clone()), None)
            }
            AccountTerms::FixedDeposit {
                term_months,
                interest_rate,
            } => (Some(interest_rate.clone()), None, Some(*term_months)),
        };

        AccountInfo {
            id: self.id.clone(),
            holder_name: self.holder_name.clone(),
            kind: self.kind(),
            balance: self.balance.clone(),
            interest_rate,
            overdraft_limit,
            term_months,
            opened_at: self.created_at,
        }
    }

    /// Remaining overdraft buffer, if this is a checking account
    pub fn overdraft_limit(&self) -> Option<&BigDecimal> {
        match &self.terms {
            AccountTerms::Checking { overdraft_limit } => Some(overdraft_limit),
            _ => None,
        }
    }
}
