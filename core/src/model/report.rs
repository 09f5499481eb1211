use serde::{Deserialize, Serialize};

use crate::model::activity::DailyCount;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContributionTotals {
    #[serde(default)]
    pub contributions: u64,
    #[serde(default)]
    pub commits: u64,
    #[serde(default)]
    pub pull_requests: u64,
    #[serde(default)]
    pub issues: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileCounts {
    #[serde(default)]
    pub followers: Option<u64>,
    #[serde(default)]
    pub following: Option<u64>,
    #[serde(default)]
    pub repositories: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ContributionReport {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub totals: ContributionTotals,
    #[serde(default)]
    pub profile: ProfileCounts,
    #[serde(default)]
    pub short_days: Vec<DailyCount>,
    #[serde(default)]
    pub long_days: Vec<DailyCount>,
}

impl ContributionReport {
    pub fn empty(login: &str) -> Self {
        Self {
            login: login.to_string(),
            ..Self::default()
        }
    }
}
