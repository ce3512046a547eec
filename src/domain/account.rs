use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Identifier of an account in the host application's store.
pub type AccountId = u64;

/// Accounts a report covers.
///
/// Ids are kept sorted and deduplicated, so two sets built from the same ids
/// in any order compare and serialize identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct AccountSet(BTreeSet<AccountId>);

impl AccountSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: AccountId) -> bool {
        self.0.insert(id)
    }

    pub fn contains(&self, id: AccountId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = AccountId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<AccountId> for AccountSet {
    fn from_iter<I: IntoIterator<Item = AccountId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[AccountId; N]> for AccountSet {
    fn from(ids: [AccountId; N]) -> Self {
        ids.into_iter().collect()
    }
}
