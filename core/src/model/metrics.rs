use serde::{Deserialize, Serialize};

use crate::model::activity::DailyCount;
use crate::model::language::LanguageTotal;
use crate::model::report::{ContributionTotals, ProfileCounts};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct AggregateMetrics {
    pub login: String,
    pub totals: ContributionTotals,
    pub profile: ProfileCounts,
    pub stars: u64,
    pub repositories: u64,
    pub languages: Vec<LanguageTotal>,
    pub short_days: Vec<DailyCount>,
    pub long_days: Vec<DailyCount>,
}

impl AggregateMetrics {
    pub fn active_days(&self) -> u64 {
        self.long_days.iter().filter(|d| d.is_active()).count() as u64
    }

    pub fn long_window_contributions(&self) -> u64 {
        self.long_days.iter().map(|d| d.count).sum()
    }
}
