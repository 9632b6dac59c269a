use std::collections::BTreeMap;

use bankledger_core::{AccountNumber, LedgerError, LedgerResult, Pin};
use bankledger_holders::{AccountHolder, Company, Person};

use crate::account::{Account, CommercialAccount, ConsumerAccount, Delegation, Funds};
use crate::report::AverageBalanceReport;

/// In-memory ledger: owns every account and issues account numbers.
///
/// Numbers come from a single counter shared by both account kinds, starting
/// at 1, never reused. Since numbers only grow, iterating the map by key is
/// also creation order.
///
/// Access is single-threaded; see [`crate::SharedLedger`] to share a ledger
/// between threads.
#[derive(Debug, Clone)]
pub struct Ledger {
    accounts: BTreeMap<AccountNumber, Account>,
    next_number: AccountNumber,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            accounts: BTreeMap::new(),
            next_number: AccountNumber::FIRST,
        }
    }

    pub fn open_commercial_account(
        &mut self,
        company: Company,
        pin: impl Into<Pin>,
        starting_deposit: f64,
    ) -> AccountNumber {
        let number = self.allocate_number();
        tracing::info!(
            account = %number,
            holder = %company.holder_id(),
            company = company.company_name(),
            starting_deposit,
            "opened commercial account"
        );
        let account = CommercialAccount::new(company, number, pin.into(), starting_deposit);
        self.accounts.insert(number, account.into());
        number
    }

    pub fn open_consumer_account(
        &mut self,
        person: Person,
        pin: impl Into<Pin>,
        starting_deposit: f64,
    ) -> AccountNumber {
        let number = self.allocate_number();
        tracing::info!(
            account = %number,
            holder = %person.holder_id(),
            starting_deposit,
            "opened consumer account"
        );
        let account = ConsumerAccount::new(person, number, pin.into(), starting_deposit);
        self.accounts.insert(number, account.into());
        number
    }

    pub fn balance(&self, number: AccountNumber) -> LedgerResult<f64> {
        Ok(self.account(number)?.balance())
    }

    /// Adds `amount` to the account. Any amount is accepted, negative included.
    pub fn credit(&mut self, number: AccountNumber, amount: f64) -> LedgerResult<()> {
        let account = self.account_mut(number)?;
        account.credit(amount);
        tracing::debug!(account = %number, amount, balance = account.balance(), "credited");
        Ok(())
    }

    /// Debits the account if it holds enough funds.
    ///
    /// Insufficient funds yields `Ok(false)`; only an unknown account is an
    /// error.
    pub fn debit(&mut self, number: AccountNumber, amount: f64) -> LedgerResult<bool> {
        let account = self.account_mut(number)?;
        let ok = account.debit(amount);
        if ok {
            tracing::debug!(account = %number, amount, balance = account.balance(), "debited");
        } else {
            tracing::debug!(
                account = %number,
                amount,
                balance = account.balance(),
                "debit rejected: insufficient funds"
            );
        }
        Ok(ok)
    }

    pub fn authenticate_user(
        &self,
        number: AccountNumber,
        pin: impl Into<Pin>,
    ) -> LedgerResult<bool> {
        let ok = self.account(number)?.validate_pin(pin.into());
        tracing::debug!(account = %number, authenticated = ok, "pin check");
        Ok(ok)
    }

    pub fn add_authorized_user(
        &mut self,
        number: AccountNumber,
        person: Person,
    ) -> LedgerResult<()> {
        let holder = person.holder_id();
        self.commercial_mut(number)?.add_authorized_user(person);
        tracing::info!(account = %number, holder = %holder, "authorized user added");
        Ok(())
    }

    pub fn check_authorized_user(
        &self,
        number: AccountNumber,
        person: &Person,
    ) -> LedgerResult<bool> {
        let account = self.account(number)?;
        match account.as_commercial() {
            Some(commercial) => Ok(commercial.is_authorized_user(person)),
            None => Err(Self::not_commercial(number)),
        }
    }

    pub fn average_balance_report(&self) -> AverageBalanceReport {
        AverageBalanceReport::from_accounts(self.accounts.values())
    }

    pub fn account(&self, number: AccountNumber) -> LedgerResult<&Account> {
        self.accounts
            .get(&number)
            .ok_or(LedgerError::not_found(number))
    }

    /// All accounts in creation order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn account_mut(&mut self, number: AccountNumber) -> LedgerResult<&mut Account> {
        self.accounts
            .get_mut(&number)
            .ok_or(LedgerError::not_found(number))
    }

    fn commercial_mut(&mut self, number: AccountNumber) -> LedgerResult<&mut CommercialAccount> {
        self.account_mut(number)?
            .as_commercial_mut()
            .ok_or_else(|| Self::not_commercial(number))
    }

    fn not_commercial(number: AccountNumber) -> LedgerError {
        tracing::warn!(account = %number, "delegation requested on a consumer account");
        LedgerError::invalid_operation(format!("account {number} is not a commercial account"))
    }

    fn allocate_number(&mut self) -> AccountNumber {
        let number = self.next_number;
        self.next_number = number.next();
        number
    }
}
