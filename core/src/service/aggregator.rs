use std::collections::HashMap;

use anyhow::Result;
use chrono::NaiveDate;
use log::debug;

use crate::chart::{allocate_widths, percent_of, scale_series, ChartFrame, ProgressRing};
use crate::config::MetricsConfig;
use crate::model::activity::DailyCount;
use crate::model::language::LanguageTotal;
use crate::model::metrics::AggregateMetrics;
use crate::model::report::ContributionReport;
use crate::model::repository::RepositoryPage;
use crate::repository::traits::ActivitySource;
use crate::service::dto::{ChartSeries, Kpi, KpiSet, LanguageSegment, RenderedMetrics, SignalView};
use crate::service::signal_service::grade_activity;
use crate::service::streak_service::calculate_streaks;
use crate::time::zero_filled;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepositoryTotals {
    pub stars: u64,
    pub repositories_seen: u64,
    pub reported_count: Option<u64>,
    pub languages: HashMap<String, u64>,
}

impl RepositoryTotals {
    pub fn absorb(&mut self, page: &RepositoryPage) {
        for repo in &page.repositories {
            self.stars += repo.stars;
            self.repositories_seen += 1;
            for language in &repo.languages {
                *self.languages.entry(language.display_name().to_string()).or_default() += language.bytes;
            }
        }
        if page.total_count.is_some() {
            self.reported_count = page.total_count;
        }
    }

    pub fn sorted_languages(&self) -> Vec<LanguageTotal> {
        let mut languages: Vec<LanguageTotal> = self
            .languages
            .iter()
            .map(|(name, bytes)| LanguageTotal::new(name.clone(), *bytes))
            .collect();
        languages.sort_by(|a, b| b.bytes.cmp(&a.bytes).then_with(|| a.name.cmp(&b.name)));
        languages
    }
}

pub fn collect_repositories<S: ActivitySource + ?Sized>(source: &S) -> Result<RepositoryTotals> {
    fold_pages(source, |_| {})
}

/// Requests pages until the source stops handing out a cursor, passing each to `visit`.
pub fn fold_pages<S, F>(source: &S, mut visit: F) -> Result<RepositoryTotals>
where
    S: ActivitySource + ?Sized,
    F: FnMut(&RepositoryPage),
{
    let mut totals = RepositoryTotals::default();
    let mut cursor: Option<String> = None;
    let mut pages = 0;

    loop {
        let page = source.repository_page(cursor.as_deref())?;
        pages += 1;
        totals.absorb(&page);
        visit(&page);
        debug!(
            "Repository page {}: {} repositories, next cursor {:?}",
            pages,
            page.repositories.len(),
            page.next_cursor
        );

        match page.next_cursor {
            Some(next) if !next.is_empty() => cursor = Some(next),
            _ => break,
        }
    }

    Ok(totals)
}

pub struct MetricsAggregator<'a> {
    config: &'a MetricsConfig,
}

impl<'a> MetricsAggregator<'a> {
    pub fn new(config: &'a MetricsConfig) -> Self {
        Self { config }
    }

    pub fn aggregate(&self, report: ContributionReport, totals: &RepositoryTotals, today: NaiveDate) -> AggregateMetrics {
        let long_len = self.config.long_days.max(1);
        let short_len = self.config.short_days.max(1);

        let long_days = if report.long_days.is_empty() {
            debug!("No long-window series, zero-filling {} days", long_len);
            zero_filled(today, long_len)
        } else {
            tail(&report.long_days, long_len)
        };

        let short_days = if !report.short_days.is_empty() {
            tail(&report.short_days, short_len)
        } else if !report.long_days.is_empty() {
            tail(&long_days, short_len)
        } else {
            zero_filled(today, short_len)
        };

        let repositories = totals
            .reported_count
            .filter(|&n| n > 0)
            .or(report.profile.repositories)
            .unwrap_or(totals.repositories_seen);

        AggregateMetrics {
            login: report.login,
            totals: report.totals,
            profile: report.profile,
            stars: totals.stars,
            repositories,
            languages: totals.sorted_languages(),
            short_days,
            long_days,
        }
    }

    pub fn render(&self, metrics: &AggregateMetrics, updated: NaiveDate) -> RenderedMetrics {
        let config = self.config;
        let active_days = metrics.active_days();
        let yearly_contributions = metrics.long_window_contributions();
        let signal = grade_activity(&config.signal, active_days, yearly_contributions);

        RenderedMetrics {
            login: metrics.login.clone(),
            updated,
            summary_days: config.summary_days,
            kpis: KpiSet {
                contributions: Kpi::count(metrics.totals.contributions),
                commits: Kpi::count(metrics.totals.commits),
                pull_requests: Kpi::count(metrics.totals.pull_requests),
                issues: Kpi::count(metrics.totals.issues),
                stars: Kpi::count(metrics.stars),
                repositories: Kpi::count(metrics.repositories),
                followers: Kpi::of(metrics.profile.followers),
                following: Kpi::of(metrics.profile.following),
            },
            bar_width: config.bar_width,
            languages: self.language_segments(&metrics.languages),
            language_count: metrics.languages.len(),
            streak: calculate_streaks(&metrics.long_days),
            signal: SignalView {
                score: signal.score,
                grade: signal.grade,
                percent: (signal.score * 100.0).round() as u32,
                active_days: Kpi::count(active_days),
                contributions: Kpi::count(yearly_contributions),
                ring: ProgressRing::new(config.ring_radius, signal.score),
                policy_version: config.signal.version.clone(),
            },
            cadence: chart_series(&metrics.short_days, config.cadence_frame),
            yearly: chart_series(&metrics.long_days, config.yearly_frame),
        }
    }

    fn language_segments(&self, languages: &[LanguageTotal]) -> Vec<LanguageSegment> {
        let top: Vec<&LanguageTotal> = languages.iter().take(self.config.top_languages).collect();
        let magnitudes: Vec<u64> = top.iter().map(|l| l.bytes).collect();
        let sum: u64 = magnitudes.iter().sum();
        let widths = allocate_widths(&magnitudes, self.config.bar_width);

        let mut offset = 0;
        top.iter()
            .zip(widths)
            .map(|(language, width)| {
                let segment = LanguageSegment {
                    name: language.name.clone(),
                    bytes: language.bytes,
                    percent: percent_of(language.bytes, sum),
                    offset,
                    width,
                };
                offset += width;
                segment
            })
            .collect()
    }
}

fn tail(series: &[DailyCount], len: u32) -> Vec<DailyCount> {
    let skip = series.len().saturating_sub(len as usize);
    series[skip..].to_vec()
}

fn chart_series(series: &[DailyCount], frame: ChartFrame) -> ChartSeries {
    let samples: Vec<u64> = series.iter().map(|d| d.count).collect();
    let min = samples.iter().copied().min().unwrap_or(0);
    let max = samples.iter().copied().max().unwrap_or(0);

    ChartSeries {
        frame,
        points: scale_series(&samples, &frame),
        min,
        max,
        flat: min == max,
        first_date: series.first().map(|d| d.date),
        last_date: series.last().map(|d| d.date),
    }
}
