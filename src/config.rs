use anyhow::{bail, Result};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::constants::{ICON_SIZES, LOGO_PATH, OUTPUT_DIR};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconConfig {
    pub source_path: PathBuf,
    pub output_dir: PathBuf,
    pub sizes: Vec<u32>,
}

fn default_source_path() -> PathBuf {
    PathBuf::from(LOGO_PATH)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(OUTPUT_DIR)
}

fn default_sizes() -> Vec<u32> {
    ICON_SIZES.to_vec()
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig {
            source_path: default_source_path(),
            output_dir: default_output_dir(),
            sizes: default_sizes(),
        }
    }
}

/// File name for a square icon of the given size, e.g. `icon-72x72.png`
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{}x{}.png", size, size)
}

impl IconConfig {
    pub fn new(source_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        IconConfig {
            source_path: source_path.into(),
            output_dir: output_dir.into(),
            sizes: default_sizes(),
        }
    }

    pub fn with_sizes(mut self, sizes: Vec<u32>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn icon_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(icon_file_name(size))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            bail!("icon size list cannot be empty");
        }

        let mut seen = HashSet::new();
        for &size in &self.sizes {
            if size == 0 {
                bail!("icon sizes must be greater than 0");
            }
            // A repeated size would overwrite its own output file
            if !seen.insert(size) {
                bail!("icon size {} is listed more than once", size);
            }
        }

        Ok(())
    }
}
