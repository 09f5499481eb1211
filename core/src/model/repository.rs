use serde::{Deserialize, Serialize};

pub const UNNAMED_LANGUAGE: &str = "Other";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LanguageSize {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bytes: u64,
}

impl LanguageSize {
    pub fn new(name: &str, bytes: u64) -> Self {
        Self {
            name: Some(name.to_string()),
            bytes,
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_LANGUAGE)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RepositorySnapshot {
    #[serde(default)]
    pub stars: u64,
    #[serde(default)]
    pub languages: Vec<LanguageSize>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RepositoryPage {
    #[serde(default)]
    pub repositories: Vec<RepositorySnapshot>,
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}
