pub mod activity;
pub mod language;
pub mod metrics;
pub mod report;
pub mod repository;

pub use activity::{DailyCount, StreakResult};
pub use language::LanguageTotal;
pub use metrics::AggregateMetrics;
pub use report::{ContributionReport, ContributionTotals, ProfileCounts};
pub use repository::{LanguageSize, RepositoryPage, RepositorySnapshot};
