#![allow(dead_code)]

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use chrono::NaiveDate;
use report_core::{
    cache::MemoryCache,
    config::ReportConfig,
    domain::{AccountId, AccountSet},
    period::DateRange,
    report::{BalanceProvider, QueryProvider},
    ReportAssembler, ReportError, Result,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn raw(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(label, amount)| (label.to_string(), amount.to_string()))
        .collect()
}

/// Returns the same balances for every date, counting calls.
#[derive(Clone, Default)]
pub struct FixedBalances {
    pub balances: BTreeMap<AccountId, String>,
    pub calls: Arc<AtomicUsize>,
}

impl FixedBalances {
    pub fn new(pairs: &[(AccountId, &str)]) -> Self {
        Self {
            balances: pairs
                .iter()
                .map(|(id, amount)| (*id, amount.to_string()))
                .collect(),
            calls: Arc::default(),
        }
    }
}

impl BalanceProvider for FixedBalances {
    fn balances_by_id(
        &self,
        accounts: &AccountSet,
        _as_of: NaiveDate,
    ) -> Result<BTreeMap<AccountId, String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .balances
            .iter()
            .filter(|(id, _)| accounts.contains(**id))
            .map(|(id, amount)| (*id, amount.clone()))
            .collect())
    }
}

/// Serves fixed earned/spent maps, counting calls.
#[derive(Clone, Default)]
pub struct FixedQuery {
    pub earned: BTreeMap<String, String>,
    pub spent: BTreeMap<String, String>,
    pub calls: Arc<AtomicUsize>,
}

impl FixedQuery {
    pub fn new(earned: &[(&str, &str)], spent: &[(&str, &str)]) -> Self {
        Self {
            earned: raw(earned),
            spent: raw(spent),
            calls: Arc::default(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl QueryProvider for FixedQuery {
    fn spent_per_month(
        &self,
        _accounts: &AccountSet,
        _range: &DateRange,
    ) -> Result<BTreeMap<String, String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.spent.clone())
    }

    fn earned_per_month(
        &self,
        _accounts: &AccountSet,
        _range: &DateRange,
    ) -> Result<BTreeMap<String, String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.earned.clone())
    }
}

/// Every call fails with the same provider error.
pub struct FailingProvider(pub &'static str);

impl BalanceProvider for FailingProvider {
    fn balances_by_id(
        &self,
        _accounts: &AccountSet,
        _as_of: NaiveDate,
    ) -> Result<BTreeMap<AccountId, String>> {
        Err(ReportError::Provider(self.0.into()))
    }
}

impl QueryProvider for FailingProvider {
    fn spent_per_month(
        &self,
        _accounts: &AccountSet,
        _range: &DateRange,
    ) -> Result<BTreeMap<String, String>> {
        Err(ReportError::Provider(self.0.into()))
    }

    fn earned_per_month(
        &self,
        _accounts: &AccountSet,
        _range: &DateRange,
    ) -> Result<BTreeMap<String, String>> {
        Err(ReportError::Provider(self.0.into()))
    }
}

pub fn assembler(balances: FixedBalances, query: FixedQuery) -> ReportAssembler {
    ReportAssembler::new(
        Box::new(balances),
        Box::new(query),
        Box::new(MemoryCache::new()),
        ReportConfig::default(),
    )
    .expect("default config is valid")
}
