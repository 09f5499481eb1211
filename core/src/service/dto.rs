use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::chart::{ChartFrame, ProgressRing, ScaledPoint};
use crate::format::format_count;
use crate::model::activity::StreakResult;
use crate::service::signal_service::Grade;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Kpi {
    pub value: Option<u64>,
    pub display: String,
}

impl Kpi {
    pub fn of(value: Option<u64>) -> Self {
        Self {
            value,
            display: format_count(value),
        }
    }

    pub fn count(value: u64) -> Self {
        Self::of(Some(value))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KpiSet {
    pub contributions: Kpi,
    pub commits: Kpi,
    pub pull_requests: Kpi,
    pub issues: Kpi,
    pub stars: Kpi,
    pub repositories: Kpi,
    pub followers: Kpi,
    pub following: Kpi,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LanguageSegment {
    pub name: String,
    pub bytes: u64,
    pub percent: u32,
    pub offset: i64,
    pub width: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub frame: ChartFrame,
    pub points: Vec<ScaledPoint>,
    pub min: u64,
    pub max: u64,
    pub flat: bool,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

impl ChartSeries {
    pub fn days(&self) -> usize {
        self.points.len()
    }

    pub fn last_point(&self) -> Option<&ScaledPoint> {
        self.points.last()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SignalView {
    pub score: f64,
    pub grade: Grade,
    pub percent: u32,
    pub active_days: Kpi,
    pub contributions: Kpi,
    pub ring: ProgressRing,
    pub policy_version: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RenderedMetrics {
    pub login: String,
    pub updated: NaiveDate,
    pub summary_days: u32,
    pub kpis: KpiSet,
    pub bar_width: i64,
    pub languages: Vec<LanguageSegment>,
    /// Languages found in total, including those left out of the bar.
    pub language_count: usize,
    pub streak: StreakResult,
    pub signal: SignalView,
    pub cadence: ChartSeries,
    pub yearly: ChartSeries,
}
