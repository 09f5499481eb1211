pub mod chart;
pub mod config;
pub mod format;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use chart::{allocate_widths, scale_series, ChartFrame, ScaledPoint};
pub use config::MetricsConfig;
pub use format::{format_count, PLACEHOLDER};
pub use input::{expand_key, parse_overrides, ParsedOverrides};
pub use model::{AggregateMetrics, ContributionReport, DailyCount, LanguageTotal, RepositoryPage, StreakResult};
pub use repository::{ActivitySnapshot, ActivitySource, FileActivitySource};
pub use service::dto::RenderedMetrics;
pub use service::signal_service::{Grade, SignalPolicy, SignalScore};
pub use time::{parse_report_date, ReportWindow};
pub use usecase::metrics::MetricsUseCase;
