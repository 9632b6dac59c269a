//! Accounting module (accounts, ledger, balance reporting).
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod account;
pub mod ledger;
pub mod report;
pub mod shared;

pub use account::{Account, AccountKind, CommercialAccount, ConsumerAccount, Delegation, Funds};
pub use ledger::Ledger;
pub use report::AverageBalanceReport;
pub use shared::SharedLedger;
