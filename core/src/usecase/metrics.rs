use anyhow::Result;
use chrono::NaiveDate;
use log::{debug, info};

use crate::config::MetricsConfig;
use crate::model::metrics::AggregateMetrics;
use crate::repository::file::ActivitySnapshot;
use crate::repository::ActivitySource;
use crate::service::aggregator::{collect_repositories, fold_pages, MetricsAggregator};
use crate::service::dto::RenderedMetrics;
use crate::time::ReportWindow;

pub struct MetricsUseCase<'a, S: ActivitySource> {
    source: &'a S,
    config: &'a MetricsConfig,
}

impl<'a, S: ActivitySource> MetricsUseCase<'a, S> {
    pub fn new(source: &'a S, config: &'a MetricsConfig) -> Self {
        Self { source, config }
    }

    pub fn aggregate(&self, today: NaiveDate) -> Result<AggregateMetrics> {
        let window = ReportWindow::ending(today, self.config.summary_days);
        debug!("Fetching {} days of contributions from {}", window.days(), window.from);
        let report = self.source.contributions(&window, self.config.long_days)?;
        let totals = collect_repositories(self.source)?;

        let metrics = MetricsAggregator::new(self.config).aggregate(report, &totals, today);
        info!(
            "Aggregated {} repositories, {} stars, {} languages",
            metrics.repositories,
            metrics.stars,
            metrics.languages.len()
        );
        Ok(metrics)
    }

    pub fn render(&self, today: NaiveDate) -> Result<RenderedMetrics> {
        let metrics = self.aggregate(today)?;
        Ok(MetricsAggregator::new(self.config).render(&metrics, today))
    }

    pub fn capture(&self, today: NaiveDate) -> Result<ActivitySnapshot> {
        let window = ReportWindow::ending(today, self.config.summary_days);
        let report = self.source.contributions(&window, self.config.long_days)?;

        let mut pages = Vec::new();
        fold_pages(self.source, |page| pages.push(page.clone()))?;
        debug!("Captured {} repository pages", pages.len());

        Ok(ActivitySnapshot { report, pages })
    }
}
