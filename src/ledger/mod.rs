//! Ledger module containing account rules, the account registry and the bank front door

pub mod account;
pub mod core;
pub mod registry;

pub use self::core::*;
pub use registry::*;
