use serde::Serialize;

use bankledger_core::{Entity, HolderId};

/// Capability shared by every kind of account holder.
pub trait AccountHolder: Entity<Id = HolderId> {
    /// Numeric identifier of the holder.
    fn holder_id(&self) -> HolderId {
        self.id()
    }

    /// Human-readable name, for logs and reports.
    fn display_name(&self) -> String;
}

/// A natural person: owner of consumer accounts and possible delegate on
/// commercial accounts.
///
/// Equality and hashing use the holder id only, so two `Person` values built
/// separately for the same id are the same person.
#[derive(Debug, Clone, Serialize)]
pub struct Person {
    id: HolderId,
    first_name: String,
    last_name: String,
}

impl Person {
    pub fn new(
        id: impl Into<HolderId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, _) => self.last_name.clone(),
        }
    }
}

impl Entity for Person {
    type Id = HolderId;

    fn id(&self) -> HolderId {
        self.id
    }
}

impl AccountHolder for Person {
    fn display_name(&self) -> String {
        self.full_name()
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl core::hash::Hash for Person {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A company: owner of commercial accounts.
#[derive(Debug, Clone, Serialize)]
pub struct Company {
    id: HolderId,
    company_name: String,
}

impl Company {
    pub fn new(id: impl Into<HolderId>, company_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            company_name: company_name.into(),
        }
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }
}

impl Entity for Company {
    type Id = HolderId;

    fn id(&self) -> HolderId {
        self.id
    }
}

impl AccountHolder for Company {
    fn display_name(&self) -> String {
        self.company_name.clone()
    }
}

impl PartialEq for Company {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Company {}

impl core::hash::Hash for Company {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn person_exposes_names() {
        let person = Person::new(1u32, "Ada", "Lovelace");
        assert_eq!(person.holder_id(), HolderId::new(1));
        assert_eq!(person.first_name(), "Ada");
        assert_eq!(person.last_name(), "Lovelace");
        assert_eq!(person.display_name(), "Ada Lovelace");
    }

    #[test]
    fn full_name_skips_missing_parts() {
        assert_eq!(Person::new(1u32, "Cher", "").full_name(), "Cher");
        assert_eq!(Person::new(2u32, "", "Banksy").full_name(), "Banksy");
    }

    #[test]
    fn company_exposes_name() {
        let company = Company::new(10u32, "Acme Corp");
        assert_eq!(company.company_name(), "Acme Corp");
        assert_eq!(company.display_name(), "Acme Corp");
        assert_eq!(company.holder_id(), HolderId::new(10));
    }

    #[test]
    fn reconstructed_person_is_equal() {
        let original = Person::new(5u32, "Grace", "Hopper");
        let rebuilt = Person::new(5u32, "Grace", "Hopper");
        assert_eq!(original, rebuilt);

        let mut set = HashSet::new();
        set.insert(original);
        assert!(set.contains(&rebuilt));
    }

    #[test]
    fn different_ids_are_different_people() {
        let a = Person::new(1u32, "Sam", "Smith");
        let b = Person::new(2u32, "Sam", "Smith");
        assert_ne!(a, b);
    }

    #[test]
    fn person_serializes_with_id() {
        let json = serde_json::to_value(Person::new(3u32, "Alan", "Turing")).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["first_name"], "Alan");
    }

    proptest! {
        /// Property: equality follows the holder id, not the names.
        #[test]
        fn person_equality_follows_id(
            a in 0u32..1_000,
            b in 0u32..1_000,
            first in "[a-z]{1,8}",
            last in "[a-z]{1,8}",
        ) {
            let left = Person::new(a, first.clone(), last.clone());
            let right = Person::new(b, last, first);
            prop_assert_eq!(left == right, a == b);
        }
    }
}
