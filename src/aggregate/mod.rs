//! Per-period raw figures and the lookups that resolve them into buckets.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    decimal,
    errors::{ReportError, Result},
    period::Bucket,
};

/// Amounts keyed by `YYYY-MM` or `YYYY` period label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodAmounts {
    amounts: BTreeMap<String, Decimal>,
}

impl PeriodAmounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a collaborator map of label to decimal string.
    ///
    /// Every label must be `YYYY` or `YYYY-MM` so the yearly rollup cannot
    /// silently skip entries it fails to recognise.
    pub fn from_raw<K, V, I>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut amounts = Self::new();
        for (label, amount) in raw {
            amounts.insert(label.as_ref(), decimal::parse_amount(amount.as_ref())?)?;
        }
        Ok(amounts)
    }

    /// Adds `amount` to the label, validating the label first.
    pub fn insert(&mut self, label: &str, amount: Decimal) -> Result<()> {
        validate_label(label)?;
        let slot = self.amounts.entry(label.to_string()).or_insert(Decimal::ZERO);
        *slot = decimal::checked_add(*slot, amount)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Exact-key lookup; a missing month is zero.
    pub fn month(&self, label: &str) -> Decimal {
        self.amounts.get(label).copied().unwrap_or(Decimal::ZERO)
    }

    /// Sum of every entry whose label starts with the year.
    pub fn year(&self, year: i32) -> Result<Decimal> {
        let prefix = format!("{year:04}");
        decimal::sum(
            self.amounts
                .iter()
                .filter(|(label, _)| label.get(..4) == Some(prefix.as_str()))
                .map(|(_, amount)| *amount),
        )
    }

    /// Income for a bucket, as recorded.
    pub fn income_for(&self, bucket: &Bucket) -> Result<Decimal> {
        match bucket {
            Bucket::Month { label, .. } => Ok(self.month(label)),
            Bucket::Year { year, .. } => self.year(*year),
        }
    }

    /// Expense for a bucket, normalized to a non-positive amount.
    ///
    /// A yearly bucket nets its months first, so a refund month reduces the
    /// year's expense.
    pub fn expense_for(&self, bucket: &Bucket) -> Result<Decimal> {
        match bucket {
            Bucket::Month { label, .. } => Ok(decimal::negative(self.month(label))),
            Bucket::Year { year, .. } => Ok(decimal::negative(self.year(*year)?)),
        }
    }
}

fn validate_label(label: &str) -> Result<()> {
    let padded = match label.len() {
        4 => format!("{label}-01-01"),
        7 => format!("{label}-01"),
        _ => return Err(ReportError::MalformedPeriodLabel(label.to_string())),
    };
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| ReportError::MalformedPeriodLabel(label.to_string()))
}
