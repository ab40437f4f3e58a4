//! # Bank Ledger
//!
//! An in-memory banking ledger with savings, checking and fixed deposit
//! accounts, an account registry and an operator console.
//!
//! ## Features
//!
//! - **Account variants**: Savings (no overdraft), Checking (overdraft buffer), Fixed Deposit (locked until maturity)
//! - **Registry**: opening accounts, duplicate ID detection and lookup by account number
//! - **Interest quotes**: simple interest reported without touching the balance
//! - **Exact money**: balances, rates and limits are `BigDecimal`
//! - **Operator console**: the classic numbered menu over any reader and writer
//!
//! ## Quick Start
//!
//! ```rust
//! use bank_ledger::utils::MemoryStorage;
//! use bank_ledger::{AccountKind, Bank, InterestQuote, VariantParams};
//! use bigdecimal::BigDecimal;
//!
//! let mut bank = Bank::new(MemoryStorage::new());
//! bank.create_account(
//!     AccountKind::Savings,
//!     "1001".to_string(),
//!     "Asha Menon".to_string(),
//!     BigDecimal::from(1000),
//!     VariantParams::savings(BigDecimal::from(5)),
//! )
//! .unwrap();
//!
//! bank.deposit("1001", &BigDecimal::from(200)).unwrap();
//! assert_eq!(
//!     bank.show_interest("1001").unwrap(),
//!     InterestQuote::Savings(BigDecimal::from(60))
//! );
//! ```

pub mod config;
pub mod console;
pub mod ledger;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use console::Console;
pub use ledger::*;
pub use traits::*;
pub use types::*;
