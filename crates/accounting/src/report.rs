//! Average balance per account kind.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::account::{Account, AccountKind, Funds};

/// Mean balance per account kind.
///
/// A kind appears only when at least one account of that kind exists; empty
/// partitions are omitted rather than reported as zero. Serializes as a map
/// keyed by the kind labels (`"CommercialAccount"`, `"ConsumerAccount"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AverageBalanceReport {
    averages: BTreeMap<AccountKind, f64>,
}

impl AverageBalanceReport {
    pub fn from_accounts<'a>(accounts: impl IntoIterator<Item = &'a Account>) -> Self {
        let mut totals: BTreeMap<AccountKind, (f64, u64)> = BTreeMap::new();
        for account in accounts {
            let (total, count) = totals.entry(account.kind()).or_insert((0.0, 0));
            *total += account.balance();
            *count += 1;
        }

        let averages = totals
            .into_iter()
            .map(|(kind, (total, count))| (kind, total / count as f64))
            .collect();

        Self { averages }
    }

    pub fn get(&self, kind: AccountKind) -> Option<f64> {
        self.averages.get(&kind).copied()
    }

    pub fn get_label(&self, label: &str) -> Option<f64> {
        AccountKind::from_label(label).and_then(|kind| self.get(kind))
    }

    pub fn len(&self) -> usize {
        self.averages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.averages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AccountKind, f64)> + '_ {
        self.averages.iter().map(|(kind, avg)| (*kind, *avg))
    }

    /// Label-keyed copy of the report.
    pub fn to_label_map(&self) -> BTreeMap<String, f64> {
        self.iter()
            .map(|(kind, avg)| (kind.label().to_string(), avg))
            .collect()
    }
}
