//! Strongly-typed identifiers used across the ledger.

use serde::{Deserialize, Serialize};

/// Number of an account, issued sequentially by the ledger.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(u64);

/// Numeric identifier of an account holder (person or company).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolderId(u32);

macro_rules! impl_numeric_newtype {
    ($t:ty, $inner:ty) => {
        impl $t {
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$inner> for $t {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$t> for $inner {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_numeric_newtype!(AccountNumber, u64);
impl_numeric_newtype!(HolderId, u32);

impl AccountNumber {
    /// The number issued to the first account of a fresh ledger.
    pub const FIRST: AccountNumber = AccountNumber(1);

    /// The number that follows this one, or `None` once `u64::MAX` is reached.
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }

    /// The number that follows this one.
    ///
    /// # Panics
    ///
    /// Panics when called on `u64::MAX`; numbers are never wrapped or reused.
    pub const fn next(self) -> Self {
        match self.checked_next() {
            Some(next) => next,
            None => panic!("account number space exhausted"),
        }
    }
}

/// Integer credential attached to an account.
///
/// Compared by exact equality. `Debug` is redacted so a PIN never leaks into
/// logs or panic messages.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Pin(i32);

impl Pin {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }
}

impl From<i32> for Pin {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl core::fmt::Debug for Pin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Pin(****)")
    }
}
