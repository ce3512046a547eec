#![doc(test(attr(deny(warnings))))]

//! Report Core computes the time-bucketed figures behind finance report
//! charts: net worth over time, income versus expense per month or year, and
//! summarized totals. Money is exact decimal throughout and every result is
//! memoized under a deterministic request signature.

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod decimal;
pub mod domain;
pub mod errors;
pub mod period;
pub mod report;
pub mod utils;

pub use errors::{ReportError, Result};
pub use report::ReportAssembler;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and logs the build this library came from.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!(build = %utils::build_info::current(), "Report Core tracing initialized.");
    });
}
