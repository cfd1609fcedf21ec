use anyhow::{Context, Result};
use image::GrayImage;
use log::debug;
use std::path::{Path, PathBuf};

use crate::models::SweepStep;

/// Where sweep masks are dumped while detecting
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Root directory for debug outputs
    pub output_dir: PathBuf,
}

impl DebugConfig {
    /// Prepare an output directory.
    /// The directory must be empty or non-existent
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();

        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)
                .with_context(|| format!("Failed to read debug directory {}", output_dir.display()))?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)
                .with_context(|| format!("Failed to create debug directory {}", output_dir.display()))?;
        }

        Ok(Self { output_dir })
    }

    /// File name of a sweep mask, e.g. `c1_t052.png`.
    pub fn mask_filename(step: SweepStep) -> String {
        format!("c{}_t{:03}.png", step.channel, step.level)
    }

    pub fn mask_path(&self, step: SweepStep) -> PathBuf {
        self.output_dir.join(Self::mask_filename(step))
    }

    /// Save one sweep mask under its pass name
    pub fn save_mask(&self, step: SweepStep, mask: &GrayImage) -> Result<()> {
        let path = self.mask_path(step);
        mask.save(&path)
            .map_err(|e| anyhow::anyhow!("Failed to save debug mask {}: {}", path.display(), e))?;
        debug!("saved {}", display_name(&path));
        Ok(())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
