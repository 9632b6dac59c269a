//! Account holders (persons and companies).
//!
//! Holders are immutable identities supplied by the caller; this crate holds no
//! registry of them and performs no IO.

pub mod holder;

pub use holder::{AccountHolder, Company, Person};
