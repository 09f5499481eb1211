use serde::{Deserialize, Serialize};
use std::fmt;

/// Targets and weights of the signal score. Changing any of them changes what a
/// grade means, so every variant carries its own `version` label.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SignalPolicy {
    pub version: String,
    pub active_days_target: f64,
    pub contributions_target: f64,
    pub breadth_weight: f64,
    pub volume_weight: f64,
}

impl SignalPolicy {
    pub fn v1() -> Self {
        Self {
            version: "v1".to_string(),
            active_days_target: 200.0,
            contributions_target: 2000.0,
            breadth_weight: 0.60,
            volume_weight: 0.40,
        }
    }

    pub fn score(&self, active_days: u64, total_contributions: u64) -> f64 {
        let breadth = ratio(active_days, self.active_days_target);
        let volume = ratio(total_contributions, self.contributions_target);
        breadth * self.breadth_weight + volume * self.volume_weight
    }
}

impl Default for SignalPolicy {
    fn default() -> Self {
        Self::v1()
    }
}

fn ratio(value: u64, target: f64) -> f64 {
    if target <= 0.0 {
        return 1.0;
    }
    (value as f64 / target).min(1.0)
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Grade {
    D,
    C,
    B,
    A,
    #[serde(rename = "A+")]
    APlus,
}

const GRADE_EPSILON: f64 = 1e-9;

// Lower bounds, checked top-down.
const GRADE_THRESHOLDS: [(f64, Grade); 4] = [
    (0.90, Grade::APlus),
    (0.80, Grade::A),
    (0.65, Grade::B),
    (0.50, Grade::C),
];

impl Grade {
    pub fn from_score(score: f64) -> Self {
        GRADE_THRESHOLDS
            .iter()
            // Weighted sums like 0.6 * 95/200 + 0.4 * 1825/2000 land a hair under 0.65.
            .find(|(threshold, _)| score + GRADE_EPSILON >= *threshold)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::D)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SignalScore {
    pub score: f64,
    pub grade: Grade,
}

pub fn grade_activity(policy: &SignalPolicy, active_days: u64, total_contributions: u64) -> SignalScore {
    let score = policy.score(active_days, total_contributions).clamp(0.0, 1.0);
    SignalScore {
        score,
        grade: Grade::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(active_days: u64, contributions: u64) -> Grade {
        grade_activity(&SignalPolicy::v1(), active_days, contributions).grade
    }

    #[test]
    fn test_full_marks() {
        let signal = grade_activity(&SignalPolicy::v1(), 200, 2000);
        assert_eq!(signal.grade, Grade::APlus);
        assert!((signal.score - 1.0).abs() < 1e-12);
        assert_eq!(grade(365, 10_000), Grade::APlus);
    }

    #[test]
    fn test_no_activity() {
        let signal = grade_activity(&SignalPolicy::v1(), 0, 0);
        assert_eq!(signal.score, 0.0);
        assert_eq!(signal.grade, Grade::D);
    }

    #[test]
    fn test_weighted_score() {
        // 100/200 * 0.6 + 500/2000 * 0.4 = 0.3 + 0.1
        let signal = grade_activity(&SignalPolicy::v1(), 100, 500);
        assert!((signal.score - 0.4).abs() < 1e-12);
        assert_eq!(signal.grade, Grade::D);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(Grade::from_score(0.90), Grade::APlus);
        assert_eq!(Grade::from_score(0.8999), Grade::A);
        assert_eq!(Grade::from_score(0.80), Grade::A);
        assert_eq!(Grade::from_score(0.65), Grade::B);
        assert_eq!(Grade::from_score(0.50), Grade::C);
        assert_eq!(Grade::from_score(0.4999), Grade::D);
    }

    #[test]
    fn test_computed_scores_on_a_threshold() {
        assert_eq!(grade(95, 1825), Grade::B);
        assert_eq!(grade(97, 1795), Grade::B);
        assert_eq!(grade(120, 1450), Grade::B);
        assert_eq!(grade(200, 1000), Grade::A);
    }

    #[test]
    fn test_grades_match_exact_arithmetic() {
        // v1 score is (15 * active + contributions) / 5000 once both are capped.
        let exact = |active: u64, contributions: u64| match 15 * active.min(200) + contributions.min(2000) {
            n if n >= 4500 => Grade::APlus,
            n if n >= 4000 => Grade::A,
            n if n >= 3250 => Grade::B,
            n if n >= 2500 => Grade::C,
            _ => Grade::D,
        };
        let policy = SignalPolicy::v1();
        for active_days in 0..=200 {
            for contributions in 0..=2000 {
                assert_eq!(
                    grade_activity(&policy, active_days, contributions).grade,
                    exact(active_days, contributions),
                    "active_days={} contributions={}",
                    active_days,
                    contributions
                );
            }
        }
    }

    #[test]
    fn test_score_is_monotonic() {
        let policy = SignalPolicy::v1();
        for contributions in (0..3000).step_by(150) {
            let mut previous = -1.0;
            for active_days in (0..260).step_by(10) {
                let score = policy.score(active_days, contributions);
                assert!(score >= previous);
                previous = score;
            }
        }
        for active_days in (0..260).step_by(20) {
            let mut previous = -1.0;
            for contributions in (0..3000).step_by(100) {
                let score = policy.score(active_days, contributions);
                assert!(score >= previous);
                previous = score;
            }
        }
    }

    #[test]
    fn test_grade_is_monotonic() {
        let mut previous = Grade::D;
        for step in 0..=100 {
            let grade = Grade::from_score(step as f64 / 100.0);
            assert!(grade >= previous);
            previous = grade;
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Grade::APlus.to_string(), "A+");
        assert_eq!(Grade::D.label(), "D");
    }
}
