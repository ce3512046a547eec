//! Report operations: cache lookup, fetch, bucket, shape, store.

pub mod providers;
pub mod series;

use tracing::{debug, info, warn};

use crate::{
    aggregate::PeriodAmounts,
    cache::{CacheKey, CacheProperties, CacheStore},
    config::ReportConfig,
    decimal,
    domain::{AccountSet, NetWorthPoint, ReportEntry, ReportPayload, ReportType, SummarizedReport},
    errors::Result,
    period::{self, DateRange, Granularity},
};

pub use providers::{BalanceProvider, QueryProvider};

pub const NET_WORTH: &str = "netWorth";
pub const YEAR_IN_OUT: &str = "yearInOut";
pub const YEAR_IN_OUT_SUMMARIZED: &str = "yearInOutSummarized";

/// Builds chart data for report pages, memoizing every result.
pub struct ReportAssembler {
    balances: Box<dyn BalanceProvider>,
    query: Box<dyn QueryProvider>,
    cache: Box<dyn CacheStore>,
    config: ReportConfig,
}

impl ReportAssembler {
    pub fn new(
        balances: Box<dyn BalanceProvider>,
        query: Box<dyn QueryProvider>,
        cache: Box<dyn CacheStore>,
        config: ReportConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            balances,
            query,
            cache,
            config,
        })
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn cache(&self) -> &dyn CacheStore {
        self.cache.as_ref()
    }

    /// Granularity an income/expense report over `range` uses.
    pub fn granularity_for(&self, range: &DateRange) -> Granularity {
        period::select_granularity(range, self.config.yearly_threshold_months)
    }

    /// Net worth sampled every `net_worth_step_days` days from `range.start`.
    pub fn net_worth(
        &mut self,
        accounts: &AccountSet,
        range: DateRange,
        report_type: ReportType,
    ) -> Result<Vec<NetWorthPoint>> {
        let key = cache_key(NET_WORTH, accounts, &range, report_type)?;
        if let Some(ReportPayload::NetWorth(points)) = self.cached(&key)? {
            return Ok(points);
        }

        let samples = period::weekly_samples(&range, self.config.net_worth_step_days);
        let mut points = Vec::with_capacity(samples.len());
        for date in samples {
            let balances = self.balances.balances_by_id(accounts, date)?;
            let net_worth = decimal::sum_strings(balances.values().map(String::as_str))?;
            points.push(NetWorthPoint { date, net_worth });
        }
        info!(
            accounts = accounts.len(),
            samples = points.len(),
            "net worth series computed"
        );

        self.cache
            .store(key, ReportPayload::NetWorth(points.clone()))?;
        Ok(points)
    }

    /// Income and expense per month, or per year for ranges over the threshold.
    pub fn year_in_out(
        &mut self,
        accounts: &AccountSet,
        range: DateRange,
        report_type: ReportType,
    ) -> Result<Vec<ReportEntry>> {
        let key = cache_key(YEAR_IN_OUT, accounts, &range, report_type)?;
        if let Some(ReportPayload::InOut(entries)) = self.cached(&key)? {
            return Ok(entries);
        }

        let (earned, spent) = self.fetch_in_out(accounts, &range)?;
        let granularity = self.granularity_for(&range);
        let entries = series::in_out_entries(&earned, &spent, &range, granularity)?;
        info!(
            granularity = granularity.label(),
            buckets = entries.len(),
            "income/expense series computed"
        );

        self.cache.store(key, ReportPayload::InOut(entries.clone()))?;
        Ok(entries)
    }

    /// Totals of [`year_in_out`](Self::year_in_out) plus the bucket count.
    pub fn year_in_out_summarized(
        &mut self,
        accounts: &AccountSet,
        range: DateRange,
        report_type: ReportType,
    ) -> Result<SummarizedReport> {
        let key = cache_key(YEAR_IN_OUT_SUMMARIZED, accounts, &range, report_type)?;
        if let Some(ReportPayload::Summarized(summary)) = self.cached(&key)? {
            return Ok(summary);
        }

        let (earned, spent) = self.fetch_in_out(accounts, &range)?;
        let granularity = self.granularity_for(&range);
        let summary = series::summarize(&earned, &spent, &range, granularity)?;
        info!(
            granularity = granularity.label(),
            periods = summary.period_count,
            "income/expense summary computed"
        );

        self.cache
            .store(key, ReportPayload::Summarized(summary.clone()))?;
        Ok(summary)
    }

    fn cached(&self, key: &CacheKey) -> Result<Option<ReportPayload>> {
        if !self.cache.has(key) {
            debug!(key = %key, "cache miss");
            return Ok(None);
        }
        let payload = match self.cache.get(key) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(key = %key, error = %err, "unreadable cache entry; recomputing");
                return Ok(None);
            }
        };
        match &payload {
            Some(found) if payload_matches(key, found) => debug!(key = %key, "cache hit"),
            Some(_) => {
                warn!(key = %key, "cached payload has the wrong shape; recomputing");
                return Ok(None);
            }
            None => debug!(key = %key, "cache entry vanished"),
        }
        Ok(payload)
    }

    fn fetch_in_out(
        &self,
        accounts: &AccountSet,
        range: &DateRange,
    ) -> Result<(PeriodAmounts, PeriodAmounts)> {
        let spent = PeriodAmounts::from_raw(self.query.spent_per_month(accounts, range)?)?;
        let earned = PeriodAmounts::from_raw(self.query.earned_per_month(accounts, range)?)?;
        debug!(
            earned_periods = earned.len(),
            spent_periods = spent.len(),
            "income/expense figures fetched"
        );
        Ok((earned, spent))
    }
}

/// Signature for `operation` over the given request parameters.
pub fn cache_key(
    operation: &str,
    accounts: &AccountSet,
    range: &DateRange,
    report_type: ReportType,
) -> Result<CacheKey> {
    CacheProperties::new(operation)
        .add("start", &range.start)?
        .add("end", &range.end)?
        .add("reportType", &report_type)?
        .add("accounts", accounts)?
        .key()
}

fn payload_matches(key: &CacheKey, payload: &ReportPayload) -> bool {
    matches!(
        (key.operation(), payload),
        (NET_WORTH, ReportPayload::NetWorth(_))
            | (YEAR_IN_OUT, ReportPayload::InOut(_))
            | (YEAR_IN_OUT_SUMMARIZED, ReportPayload::Summarized(_))
    )
}
