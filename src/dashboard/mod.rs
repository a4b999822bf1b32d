pub mod filter;
pub mod grouping;
pub mod summary;

pub use filter::filter_lessons;
pub use grouping::{MonthBucket, group_by_month};
pub use summary::{StatusSummary, summarize};

use serde::{Deserialize, Serialize};

/// Everything the dashboard page renders: per-status counts and the
/// month-by-month listing, both computed over the same filtered set.
#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardView {
    pub summary: StatusSummary,
    pub months: Vec<MonthBucket>,
}
