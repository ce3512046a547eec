use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Report page a chart is requested for.
///
/// Only part of the cache signature; it never changes the computed figures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    #[default]
    Default,
    Audit,
    Budget,
    Category,
    Tag,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Default => "default",
            ReportType::Audit => "audit",
            ReportType::Budget => "budget",
            ReportType::Category => "category",
            ReportType::Tag => "tag",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sum of account balances on one sample date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetWorthPoint {
    pub date: NaiveDate,
    pub net_worth: Decimal,
}

/// Income and expense for one bucket. `expense` is never positive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportEntry {
    pub period: NaiveDate,
    pub income: Decimal,
    pub expense: Decimal,
}

/// Totals over every bucket of a range, with the bucket count for averaging.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummarizedReport {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub period_count: u32,
}

impl SummarizedReport {
    /// Income per bucket, `None` for an empty report.
    pub fn average_income(&self) -> Option<Decimal> {
        self.average(self.total_income)
    }

    /// Expense per bucket, `None` for an empty report.
    pub fn average_expense(&self) -> Option<Decimal> {
        self.average(self.total_expense)
    }

    fn average(&self, total: Decimal) -> Option<Decimal> {
        if self.period_count == 0 {
            return None;
        }
        total.checked_div(Decimal::from(self.period_count))
    }
}

/// Shaped result of a report operation, as kept in the cache.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ReportPayload {
    NetWorth(Vec<NetWorthPoint>),
    InOut(Vec<ReportEntry>),
    Summarized(SummarizedReport),
}
