use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::report::ContributionReport;
use crate::model::repository::RepositoryPage;
use crate::repository::traits::ActivitySource;
use crate::time::ReportWindow;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ActivitySnapshot {
    #[serde(default)]
    pub report: ContributionReport,
    /// Repository pages in fetch order. Stored cursors are ignored on read.
    #[serde(default)]
    pub pages: Vec<RepositoryPage>,
}

impl ActivitySnapshot {
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory '{}'", parent.display()))?;
        }
        let file = File::create(path).with_context(|| format!("creating snapshot '{}'", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("writing snapshot '{}'", path.display()))?;
        writer.flush()?;
        Ok(())
    }
}

pub struct FileActivitySource {
    file_path: PathBuf,
    snapshot: ActivitySnapshot,
}

impl FileActivitySource {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening snapshot '{}'", path.display()))?;
        let reader = BufReader::new(file);
        let snapshot: ActivitySnapshot = serde_json::from_reader(reader)
            .with_context(|| format!("parsing snapshot '{}'", path.display()))?;
        debug!(
            "Loaded snapshot {} ({} repository pages)",
            path.display(),
            snapshot.pages.len()
        );

        Ok(Self {
            file_path: path.to_path_buf(),
            snapshot,
        })
    }

    pub fn from_snapshot(snapshot: ActivitySnapshot) -> Self {
        Self {
            file_path: PathBuf::new(),
            snapshot,
        }
    }
}

impl ActivitySource for FileActivitySource {
    fn contributions(&self, _summary: &ReportWindow, _long_days: u32) -> Result<ContributionReport> {
        Ok(self.snapshot.report.clone())
    }

    fn repository_page(&self, cursor: Option<&str>) -> Result<RepositoryPage> {
        let index = match cursor {
            None => 0,
            Some(c) => c
                .parse::<usize>()
                .map_err(|_| anyhow!("Invalid page cursor '{}' for {}", c, self.file_path.display()))?,
        };

        let Some(page) = self.snapshot.pages.get(index) else {
            if index == 0 {
                return Ok(RepositoryPage::default());
            }
            return Err(anyhow!("Page {} not found in {}", index, self.file_path.display()));
        };

        let next = index + 1;
        Ok(RepositoryPage {
            next_cursor: (next < self.snapshot.pages.len()).then(|| next.to_string()),
            ..page.clone()
        })
    }
}
