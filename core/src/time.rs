use anyhow::{anyhow, Result};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::model::activity::DailyCount;

/// Half-open window from the start of `from` to the start of `to`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ReportWindow {
    /// The `days` whole days before `to`; `to` itself is excluded.
    pub fn ending(to: NaiveDate, days: u32) -> Self {
        Self {
            from: to - Duration::days(i64::from(days)),
            to,
        }
    }

    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days()
    }

    pub fn from_utc(&self) -> DateTime<Utc> {
        midnight_utc(self.from)
    }

    pub fn to_utc(&self) -> DateTime<Utc> {
        midnight_utc(self.to)
    }
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

pub fn zero_filled(end: NaiveDate, days: u32) -> Vec<DailyCount> {
    (0..i64::from(days))
        .rev()
        .map(|offset| DailyCount::new(end - Duration::days(offset), 0))
        .collect()
}

pub fn parse_report_date(input: &str) -> Result<NaiveDate> {
    let today = Local::now().date_naive();
    match input.trim().to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" | "yes" => return Ok(today - Duration::days(1)),
        _ => {}
    }

    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow!("Could not parse date: {}", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_ending() {
        let window = ReportWindow::ending(date(2025, 1, 31), 30);
        assert_eq!(window.from, date(2025, 1, 1));
        assert_eq!(window.days(), 30);
        assert_eq!(window.from_utc().to_rfc3339(), "2025-01-01T00:00:00+00:00");
        assert_eq!(window.to_utc().to_rfc3339(), "2025-01-31T00:00:00+00:00");
    }

    #[test]
    fn test_zero_filled() {
        let series = zero_filled(date(2024, 3, 1), 3);
        let dates: Vec<_> = series.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]);
        assert!(series.iter().all(|d| d.count == 0));
        assert!(zero_filled(date(2024, 3, 1), 0).is_empty());
    }

    #[test]
    fn test_parse_report_date() {
        assert_eq!(parse_report_date("2025-06-30").unwrap(), date(2025, 6, 30));
        assert_eq!(parse_report_date("today").unwrap(), Local::now().date_naive());
        assert!(parse_report_date("30/06/2025").is_err());
    }
}
