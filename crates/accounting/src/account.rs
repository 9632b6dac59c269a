use std::collections::HashSet;

use serde::Serialize;

use bankledger_core::{AccountNumber, Entity, HolderId, Pin};
use bankledger_holders::{AccountHolder, Company, Person};

/// Account kind; also the label used by balance reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AccountKind {
    #[serde(rename = "CommercialAccount")]
    Commercial,
    #[serde(rename = "ConsumerAccount")]
    Consumer,
}

impl AccountKind {
    pub const ALL: [AccountKind; 2] = [AccountKind::Commercial, AccountKind::Consumer];

    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Commercial => "CommercialAccount",
            AccountKind::Consumer => "ConsumerAccount",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

impl core::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Balance and credential behaviour shared by every account.
pub trait Funds {
    fn balance(&self) -> f64;

    /// Adds `amount` to the balance. No bounds or sign checks.
    fn credit(&mut self, amount: f64);

    /// Subtracts `amount` if the balance covers it.
    ///
    /// Returns `false` and leaves the balance untouched otherwise.
    fn debit(&mut self, amount: f64) -> bool;

    fn validate_pin(&self, pin: Pin) -> bool;
}

/// Delegation to authorized persons; only commercial accounts support it.
pub trait Delegation {
    /// Grants `person` access. Granting twice is a no-op.
    fn add_authorized_user(&mut self, person: Person);

    fn is_authorized_user(&self, person: &Person) -> bool;
}

#[derive(Debug, Clone, Serialize)]
struct AccountState {
    number: AccountNumber,
    #[serde(skip)]
    pin: Pin,
    balance: f64,
}

impl AccountState {
    fn new(number: AccountNumber, pin: Pin, starting_deposit: f64) -> Self {
        Self {
            number,
            pin,
            balance: starting_deposit,
        }
    }
}

impl Funds for AccountState {
    fn balance(&self) -> f64 {
        self.balance
    }

    fn credit(&mut self, amount: f64) {
        self.balance += amount;
    }

    fn debit(&mut self, amount: f64) -> bool {
        if self.balance >= amount {
            self.balance -= amount;
            true
        } else {
            false
        }
    }

    fn validate_pin(&self, pin: Pin) -> bool {
        self.pin == pin
    }
}

/// Account owned by a company, with a set of authorized delegates.
#[derive(Debug, Clone, Serialize)]
pub struct CommercialAccount {
    company: Company,
    #[serde(flatten)]
    state: AccountState,
    authorized_users: HashSet<Person>,
}

impl CommercialAccount {
    pub fn new(company: Company, number: AccountNumber, pin: Pin, starting_deposit: f64) -> Self {
        Self {
            company,
            state: AccountState::new(number, pin, starting_deposit),
            authorized_users: HashSet::new(),
        }
    }

    pub fn company(&self) -> &Company {
        &self.company
    }

    pub fn number(&self) -> AccountNumber {
        self.state.number
    }

    pub fn authorized_users(&self) -> impl Iterator<Item = &Person> {
        self.authorized_users.iter()
    }
}

impl Funds for CommercialAccount {
    fn balance(&self) -> f64 {
        self.state.balance()
    }

    fn credit(&mut self, amount: f64) {
        self.state.credit(amount);
    }

    fn debit(&mut self, amount: f64) -> bool {
        self.state.debit(amount)
    }

    fn validate_pin(&self, pin: Pin) -> bool {
        self.state.validate_pin(pin)
    }
}

impl Delegation for CommercialAccount {
    fn add_authorized_user(&mut self, person: Person) {
        self.authorized_users.insert(person);
    }

    fn is_authorized_user(&self, person: &Person) -> bool {
        self.authorized_users.contains(person)
    }
}

/// Account owned by a person. No delegation.
#[derive(Debug, Clone, Serialize)]
pub struct ConsumerAccount {
    person: Person,
    #[serde(flatten)]
    state: AccountState,
}

impl ConsumerAccount {
    pub fn new(person: Person, number: AccountNumber, pin: Pin, starting_deposit: f64) -> Self {
        Self {
            person,
            state: AccountState::new(number, pin, starting_deposit),
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn number(&self) -> AccountNumber {
        self.state.number
    }
}

impl Funds for ConsumerAccount {
    fn balance(&self) -> f64 {
        self.state.balance()
    }

    fn credit(&mut self, amount: f64) {
        self.state.credit(amount);
    }

    fn debit(&mut self, amount: f64) -> bool {
        self.state.debit(amount)
    }

    fn validate_pin(&self, pin: Pin) -> bool {
        self.state.validate_pin(pin)
    }
}

/// An account registered in the ledger.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind")]
pub enum Account {
    #[serde(rename = "CommercialAccount")]
    Commercial(CommercialAccount),
    #[serde(rename = "ConsumerAccount")]
    Consumer(ConsumerAccount),
}

impl Account {
    pub fn kind(&self) -> AccountKind {
        match self {
            Account::Commercial(_) => AccountKind::Commercial,
            Account::Consumer(_) => AccountKind::Consumer,
        }
    }

    pub fn number(&self) -> AccountNumber {
        match self {
            Account::Commercial(a) => a.number(),
            Account::Consumer(a) => a.number(),
        }
    }

    /// Id of the owning holder (the company or the person).
    pub fn holder_id(&self) -> HolderId {
        match self {
            Account::Commercial(a) => a.company.holder_id(),
            Account::Consumer(a) => a.person.holder_id(),
        }
    }

    pub fn holder_name(&self) -> String {
        match self {
            Account::Commercial(a) => a.company.display_name(),
            Account::Consumer(a) => a.person.display_name(),
        }
    }

    pub fn as_commercial(&self) -> Option<&CommercialAccount> {
        match self {
            Account::Commercial(a) => Some(a),
            Account::Consumer(_) => None,
        }
    }

    pub fn as_commercial_mut(&mut self) -> Option<&mut CommercialAccount> {
        match self {
            Account::Commercial(a) => Some(a),
            Account::Consumer(_) => None,
        }
    }

    fn funds(&self) -> &dyn Funds {
        match self {
            Account::Commercial(a) => a,
            Account::Consumer(a) => a,
        }
    }

    fn funds_mut(&mut self) -> &mut dyn Funds {
        match self {
            Account::Commercial(a) => a,
            Account::Consumer(a) => a,
        }
    }
}

impl Funds for Account {
    fn balance(&self) -> f64 {
        self.funds().balance()
    }

    fn credit(&mut self, amount: f64) {
        self.funds_mut().credit(amount);
    }

    fn debit(&mut self, amount: f64) -> bool {
        self.funds_mut().debit(amount)
    }

    fn validate_pin(&self, pin: Pin) -> bool {
        self.funds().validate_pin(pin)
    }
}

impl Entity for Account {
    type Id = AccountNumber;

    fn id(&self) -> AccountNumber {
        self.number()
    }
}

impl From<CommercialAccount> for Account {
    fn from(value: CommercialAccount) -> Self {
        Account::Commercial(value)
    }
}

impl From<ConsumerAccount> for Account {
    fn from(value: ConsumerAccount) -> Self {
        Account::Consumer(value)
    }
}
