//! Pure shaping of income/expense figures into buckets.

use rust_decimal::Decimal;

use crate::{
    aggregate::PeriodAmounts,
    decimal,
    domain::{ReportEntry, SummarizedReport},
    errors::{ReportError, Result},
    period::{self, DateRange, Granularity},
};

/// One entry per bucket, in chronological order.
pub fn in_out_entries(
    earned: &PeriodAmounts,
    spent: &PeriodAmounts,
    range: &DateRange,
    granularity: Granularity,
) -> Result<Vec<ReportEntry>> {
    period::buckets(range, granularity)
        .iter()
        .map(|bucket| {
            Ok(ReportEntry {
                period: bucket.start(),
                income: earned.income_for(bucket)?,
                expense: spent.expense_for(bucket)?,
            })
        })
        .collect()
}

/// Running totals over every bucket plus the number of buckets visited.
pub fn summarize(
    earned: &PeriodAmounts,
    spent: &PeriodAmounts,
    range: &DateRange,
    granularity: Granularity,
) -> Result<SummarizedReport> {
    let mut summary = SummarizedReport {
        total_income: Decimal::ZERO,
        total_expense: Decimal::ZERO,
        period_count: 0,
    };
    for bucket in period::buckets(range, granularity) {
        summary.total_income =
            decimal::checked_add(summary.total_income, earned.income_for(&bucket)?)?;
        summary.total_expense =
            decimal::checked_add(summary.total_expense, spent.expense_for(&bucket)?)?;
        summary.period_count = summary
            .period_count
            .checked_add(1)
            .ok_or_else(|| ReportError::Overflow("period count".into()))?;
    }
    Ok(summary)
}
