use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use ghmetrics_core::{ActivitySource, ContributionReport, FileActivitySource, RepositoryPage, ReportWindow};
use log::info;

use crate::github::GitHubSource;

const FALLBACK_TOKEN_VAR: &str = "METRICS_TOKEN";

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// GitHub login to fetch metrics for
    #[arg(long, short)]
    pub user: Option<String>,

    /// Read activity from a snapshot file instead of the GitHub API
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Report date: YYYY-MM-DD, today or yesterday
    #[arg(long, default_value = "today")]
    pub date: String,

    /// API token (falls back to METRICS_TOKEN)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

/// The source picked on the command line.
pub enum Source {
    File(FileActivitySource),
    GitHub(GitHubSource),
}

impl Source {
    pub fn open(args: &SourceArgs) -> Result<Self> {
        if let Some(path) = &args.input {
            info!("Reading activity from {}", path.display());
            return Ok(Source::File(FileActivitySource::open(path)?));
        }

        let Some(user) = &args.user else {
            bail!("Either --user or --input is required");
        };
        let token = args
            .token
            .clone()
            .or_else(|| env::var(FALLBACK_TOKEN_VAR).ok())
            .filter(|t| !t.is_empty());
        let Some(token) = token else {
            bail!("Missing GITHUB_TOKEN (or {}) in environment", FALLBACK_TOKEN_VAR);
        };

        info!("Fetching activity for {} from GitHub", user);
        Ok(Source::GitHub(GitHubSource::new(user, &token)?))
    }
}

impl ActivitySource for Source {
    fn contributions(&self, summary: &ReportWindow, long_days: u32) -> Result<ContributionReport> {
        match self {
            Source::File(s) => s.contributions(summary, long_days),
            Source::GitHub(s) => s.contributions(summary, long_days),
        }
    }

    fn repository_page(&self, cursor: Option<&str>) -> Result<RepositoryPage> {
        match self {
            Source::File(s) => s.repository_page(cursor),
            Source::GitHub(s) => s.repository_page(cursor),
        }
    }
}
