use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
}

impl DailyCount {
    pub fn new(date: NaiveDate, count: u64) -> Self {
        Self { date, count }
    }

    pub fn is_active(&self) -> bool {
        self.count > 0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakResult {
    pub current: u32,
    pub longest: u32,
    /// Present iff `longest > 0`, together with `longest_end`.
    pub longest_start: Option<NaiveDate>,
    pub longest_end: Option<NaiveDate>,
}
