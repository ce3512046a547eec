use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{
    domain::{AccountId, AccountSet},
    errors::Result,
    period::DateRange,
};

/// Source of account balances.
///
/// Amounts are decimal strings. Failures should be reported as
/// [`ReportError::Provider`](crate::errors::ReportError::Provider); the
/// assembler passes them through untouched.
pub trait BalanceProvider: Send + Sync {
    /// Balance of every requested account at the end of `as_of`.
    fn balances_by_id(
        &self,
        accounts: &AccountSet,
        as_of: NaiveDate,
    ) -> Result<BTreeMap<AccountId, String>>;
}

/// Source of per-period earned and spent figures.
///
/// Maps are keyed by `YYYY-MM` (or `YYYY`) label with decimal string amounts.
pub trait QueryProvider: Send + Sync {
    fn spent_per_month(
        &self,
        accounts: &AccountSet,
        range: &DateRange,
    ) -> Result<BTreeMap<String, String>>;

    fn earned_per_month(
        &self,
        accounts: &AccountSet,
        range: &DateRange,
    ) -> Result<BTreeMap<String, String>>;
}
