pub mod clock;
pub mod error;
pub mod policy;
pub mod store;
pub mod tracker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{QuotaError, Result};
pub use policy::QuotaPolicy;
pub use store::{FileUsageStore, MemoryUsageStore, UsageStore, USAGE_KEY};
pub use tracker::QuotaTracker;
pub use trisum_types::{UsageRecord, UsageStatus};
