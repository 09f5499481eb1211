use chrono::NaiveDate;

use crate::model::activity::{DailyCount, StreakResult};

/// Current and longest runs of consecutive active days in an ascending series.
///
/// The current run counts back from the newest entry. Of several equally long
/// runs the earliest one is reported.
pub fn calculate_streaks(series: &[DailyCount]) -> StreakResult {
    let current = series.iter().rev().take_while(|d| d.is_active()).count() as u32;

    let mut longest = 0;
    let mut longest_span: Option<(NaiveDate, NaiveDate)> = None;
    let mut run = 0;
    let mut run_start: Option<NaiveDate> = None;

    for day in series {
        if !day.is_active() {
            run = 0;
            continue;
        }

        run += 1;
        if run == 1 {
            run_start = Some(day.date);
        }
        if run > longest {
            longest = run;
            longest_span = run_start.map(|start| (start, day.date));
        }
    }

    StreakResult {
        current,
        longest,
        longest_start: longest_span.map(|(start, _)| start),
        longest_end: longest_span.map(|(_, end)| end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::zero_filled;

    fn series(counts: &[u64]) -> Vec<DailyCount> {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        counts
            .iter()
            .enumerate()
            .map(|(i, &count)| DailyCount::new(start + chrono::Duration::days(i as i64), count))
            .collect()
    }

    fn day(n: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2025, 3, n)
    }

    #[test]
    fn test_current_and_longest() {
        let result = calculate_streaks(&series(&[1, 1, 1, 0, 1, 1]));
        assert_eq!(result.current, 2);
        assert_eq!(result.longest, 3);
        assert_eq!(result.longest_start, day(1));
        assert_eq!(result.longest_end, day(3));
    }

    #[test]
    fn test_earliest_run_wins_ties() {
        let result = calculate_streaks(&series(&[0, 4, 2, 0, 0, 9, 9, 0]));
        assert_eq!(result.current, 0);
        assert_eq!(result.longest, 2);
        assert_eq!(result.longest_start, day(2));
        assert_eq!(result.longest_end, day(3));
    }

    #[test]
    fn test_later_longer_run_replaces_earlier() {
        let result = calculate_streaks(&series(&[3, 3, 0, 1, 1, 1, 1]));
        assert_eq!(result.current, 4);
        assert_eq!(result.longest, 4);
        assert_eq!(result.longest_start, day(4));
        assert_eq!(result.longest_end, day(7));
    }

    #[test]
    fn test_all_zero_series() {
        let end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let result = calculate_streaks(&zero_filled(end, 365));
        assert_eq!(result, StreakResult::default());
        assert_eq!(result.longest_start, None);
        assert_eq!(result.longest_end, None);
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(calculate_streaks(&[]), StreakResult::default());
    }

    #[test]
    fn test_fully_active_series() {
        let result = calculate_streaks(&series(&[1; 10]));
        assert_eq!(result.current, 10);
        assert_eq!(result.longest, 10);
        assert_eq!(result.longest_start, day(1));
        assert_eq!(result.longest_end, day(10));
    }

    #[test]
    fn test_longest_is_never_below_current() {
        for counts in [vec![0, 1], vec![1, 0, 1, 1, 1], vec![2, 2, 0, 2, 2], vec![5]] {
            let result = calculate_streaks(&series(&counts));
            assert!(result.longest >= result.current, "{:?}", counts);
            assert_eq!(result.longest_start.is_some(), result.longest > 0);
            assert_eq!(result.longest_end.is_some(), result.longest > 0);
        }
    }
}
