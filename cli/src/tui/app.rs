use ghmetrics_core::{AggregateMetrics, DailyCount, RenderedMetrics};

/// Which daily series the activity panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityWindow {
    Cadence,
    Yearly,
}

impl ActivityWindow {
    pub fn toggle(self) -> Self {
        match self {
            ActivityWindow::Cadence => ActivityWindow::Yearly,
            ActivityWindow::Yearly => ActivityWindow::Cadence,
        }
    }
}

pub struct DashboardApp {
    pub metrics: AggregateMetrics,
    pub rendered: RenderedMetrics,
    pub window: ActivityWindow,
}

impl DashboardApp {
    pub fn new(metrics: AggregateMetrics, rendered: RenderedMetrics) -> Self {
        Self {
            metrics,
            rendered,
            window: ActivityWindow::Cadence,
        }
    }

    pub fn next_window(&mut self) {
        self.window = self.window.toggle();
    }

    pub fn previous_window(&mut self) {
        self.window = self.window.toggle();
    }

    pub fn days(&self) -> &[DailyCount] {
        match self.window {
            ActivityWindow::Cadence => &self.metrics.short_days,
            ActivityWindow::Yearly => &self.metrics.long_days,
        }
    }

    pub fn counts(&self) -> Vec<u64> {
        self.days().iter().map(|d| d.count).collect()
    }

    pub fn window_title(&self) -> String {
        let days = self.days();
        match (days.first(), days.last()) {
            (Some(first), Some(last)) => format!(
                " Last {} days ({} .. {}) ",
                days.len(),
                first.date.format("%b %d"),
                last.date.format("%b %d")
            ),
            _ => " No activity ".to_string(),
        }
    }

    /// Signal score in `0.0..=1.0`, ready for a gauge.
    pub fn signal_ratio(&self) -> f64 {
        self.rendered.signal.score.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use ghmetrics_core::service::aggregator::{MetricsAggregator, RepositoryTotals};
    use ghmetrics_core::{ContributionReport, MetricsConfig};

    fn app() -> DashboardApp {
        let config = MetricsConfig::default();
        let aggregator = MetricsAggregator::new(&config);
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let report = ContributionReport {
            login: "octocat".to_string(),
            long_days: (0..40)
                .rev()
                .map(|offset| DailyCount::new(today - Duration::days(offset), (offset % 3) as u64))
                .collect(),
            ..ContributionReport::default()
        };
        let metrics = aggregator.aggregate(report, &RepositoryTotals::default(), today);
        let rendered = aggregator.render(&metrics, today);
        DashboardApp::new(metrics, rendered)
    }

    #[test]
    fn test_window_toggle() {
        let mut app = app();
        assert_eq!(app.window, ActivityWindow::Cadence);
        assert_eq!(app.counts().len(), 28);

        app.next_window();
        assert_eq!(app.window, ActivityWindow::Yearly);
        assert_eq!(app.counts().len(), 40);
        assert!(app.window_title().starts_with(" Last 40 days (May 22"));

        app.previous_window();
        assert_eq!(app.window, ActivityWindow::Cadence);
    }

    #[test]
    fn test_signal_ratio_in_range() {
        let app = app();
        let ratio = app.signal_ratio();
        assert!((0.0..=1.0).contains(&ratio));
    }
}
