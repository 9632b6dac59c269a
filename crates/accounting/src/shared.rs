//! Thread-safe handle around a [`Ledger`].

use std::sync::{Arc, RwLock};

use bankledger_core::{AccountNumber, LedgerError, LedgerResult, Pin};
use bankledger_holders::{Company, Person};

use crate::ledger::Ledger;
use crate::report::AverageBalanceReport;

/// Cloneable handle to one ledger shared between threads.
///
/// A single lock guards the account map, the number counter and every
/// account, so each call (including the read-modify-write of `debit`) is
/// atomic with respect to the others.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<RwLock<Ledger>>,
}

impl SharedLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ledger(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    /// Runs `f` with shared access to the ledger.
    pub fn read<R>(&self, f: impl FnOnce(&Ledger) -> R) -> LedgerResult<R> {
        let guard = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(f(&*guard))
    }

    /// Runs `f` with exclusive access to the ledger.
    pub fn write<R>(&self, f: impl FnOnce(&mut Ledger) -> R) -> LedgerResult<R> {
        let mut guard = self.inner.write().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(f(&mut *guard))
    }

    pub fn open_commercial_account(
        &self,
        company: Company,
        pin: impl Into<Pin>,
        starting_deposit: f64,
    ) -> LedgerResult<AccountNumber> {
        let pin = pin.into();
        self.write(|ledger| ledger.open_commercial_account(company, pin, starting_deposit))
    }

    pub fn open_consumer_account(
        &self,
        person: Person,
        pin: impl Into<Pin>,
        starting_deposit: f64,
    ) -> LedgerResult<AccountNumber> {
        let pin = pin.into();
        self.write(|ledger| ledger.open_consumer_account(person, pin, starting_deposit))
    }

    pub fn balance(&self, number: AccountNumber) -> LedgerResult<f64> {
        self.read(|ledger| ledger.balance(number))?
    }

    pub fn credit(&self, number: AccountNumber, amount: f64) -> LedgerResult<()> {
        self.write(|ledger| ledger.credit(number, amount))?
    }

    pub fn debit(&self, number: AccountNumber, amount: f64) -> LedgerResult<bool> {
        self.write(|ledger| ledger.debit(number, amount))?
    }

    pub fn authenticate_user(&self, number: AccountNumber, pin: impl Into<Pin>) -> LedgerResult<bool> {
        let pin = pin.into();
        self.read(|ledger| ledger.authenticate_user(number, pin))?
    }

    pub fn add_authorized_user(&self, number: AccountNumber, person: Person) -> LedgerResult<()> {
        self.write(|ledger| ledger.add_authorized_user(number, person))?
    }

    pub fn check_authorized_user(&self, number: AccountNumber, person: &Person) -> LedgerResult<bool> {
        self.read(|ledger| ledger.check_authorized_user(number, person))?
    }

    pub fn average_balance_report(&self) -> LedgerResult<AverageBalanceReport> {
        self.read(|ledger| ledger.average_balance_report())
    }
}
