use anyhow::Result;

use crate::model::report::ContributionReport;
use crate::model::repository::RepositoryPage;
use crate::time::ReportWindow;

pub trait ActivitySource {
    fn contributions(&self, summary: &ReportWindow, long_days: u32) -> Result<ContributionReport>;

    /// The page after `cursor`, or the first page when `cursor` is `None`.
    fn repository_page(&self, cursor: Option<&str>) -> Result<RepositoryPage>;
}
