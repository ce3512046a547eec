pub mod account;
pub mod report;

pub use account::{AccountId, AccountSet};
pub use report::{NetWorthPoint, ReportEntry, ReportPayload, ReportType, SummarizedReport};
