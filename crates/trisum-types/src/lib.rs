pub mod summary;
pub mod usage;

pub use summary::{ErrorBody, SummaryRequest, SummaryResult};
pub use usage::{UsageRecord, UsageStatus};
