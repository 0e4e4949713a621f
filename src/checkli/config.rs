use crate::error::Result;
use crate::model::Item;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_LINE_WIDTH: usize = 72;

/// One entry of the configured seed list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedItem {
    pub name: String,
    #[serde(default)]
    pub checked: bool,
}

/// Configuration for checkli, read from `.checkli.json` in the working
/// directory or `config.json` in the platform config dir. Configuration
/// only: list state is never written back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckliConfig {
    /// Items every session starts with.
    #[serde(default = "default_seed")]
    pub seed: Vec<SeedItem>,

    /// Width the rendered list is laid out to.
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

fn default_seed() -> Vec<SeedItem> {
    ["apples", "oranges", "milk", "bread"]
        .iter()
        .map(|name| SeedItem {
            name: (*name).to_string(),
            checked: *name == "milk",
        })
        .collect()
}

impl Default for CheckliConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl CheckliConfig {
    /// Load config from `path`, or return defaults if the file is missing.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: CheckliConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// The items a fresh session starts with, stamped as added now.
    pub fn seed_items(&self) -> Vec<Item> {
        self.seed
            .iter()
            .map(|s| Item::new(s.name.clone()).with_checked(s.checked))
            .collect()
    }
}
