use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::chart::ChartFrame;
use crate::input::{expand_key, ParsedOverrides};
use crate::service::signal_service::SignalPolicy;

const CONFIG_DIR_NAME: &str = "ghmetrics";
const CONFIG_FILE_NAME: &str = "config.json";

pub const OVERRIDE_KEYS: &[&str] = &[
    "summary_days",
    "short_days",
    "long_days",
    "top_languages",
    "bar_width",
    "skin",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MetricsConfig {
    pub summary_days: u32,
    pub short_days: u32,
    pub long_days: u32,
    pub top_languages: usize,
    pub bar_width: i64,
    pub cadence_frame: ChartFrame,
    pub yearly_frame: ChartFrame,
    pub ring_radius: f64,
    pub signal: SignalPolicy,
    pub skin: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            summary_days: 30,
            short_days: 28,
            long_days: 365,
            top_languages: 4,
            bar_width: 640,
            cadence_frame: ChartFrame::new(18.0, 56.0, 304.0, 174.0),
            yearly_frame: ChartFrame::new(24.0, 196.0, 480.0, 72.0),
            ring_radius: 54.0,
            signal: SignalPolicy::v1(),
            skin: "dashboard".to_string(),
        }
    }
}

impl MetricsConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) if p.exists() => p,
                _ => {
                    debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading config file '{}'", path.display()))?;
        let config: MetricsConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config file '{}'", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn apply_overrides(&mut self, overrides: &ParsedOverrides) -> Result<()> {
        for (key, value) in &overrides.values {
            let key = match expand_key(key, OVERRIDE_KEYS) {
                Ok(k) => k,
                Err(e) => {
                    warn!("Ignoring override: {}", e);
                    continue;
                }
            };

            match key.as_str() {
                "summary_days" => self.summary_days = parse_value(&key, value)?,
                "short_days" => self.short_days = parse_value(&key, value)?,
                "long_days" => self.long_days = parse_value(&key, value)?,
                "top_languages" => self.top_languages = parse_value(&key, value)?,
                "bar_width" => self.bar_width = parse_value(&key, value)?,
                "skin" => self.skin = value.clone(),
                other => return Err(anyhow!("Unsupported override key: {}", other)),
            }
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| anyhow!("Invalid value for {}: '{}'", key, value))
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
