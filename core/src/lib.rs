use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use error::*;
pub use generator::*;
pub use loader::*;
pub use mask::*;
pub use partition::*;
pub use rescale::*;
pub use sequencer::*;
pub use session::*;
pub use types::*;

mod error;
mod generator;
mod loader;
mod mask;
mod partition;
mod rescale;
mod sequencer;
mod session;
mod types;

fn default_images_dir() -> PathBuf {
    PathBuf::from("images")
}

const fn default_max_dimension() -> u32 {
    DEFAULT_MAX_DIMENSION
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub filename: PathBuf,
    #[serde(default)]
    pub reveal_number: RevealCount,
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
}

impl GameConfig {
    /// Checks the reveal count up front, so a bad count never reaches the filesystem.
    pub fn new(filename: impl Into<PathBuf>, reveal_number: i64) -> Result<Self> {
        let reveal_number = RevealCount::try_from(reveal_number)?;
        Ok(Self::with_count(filename, reveal_number))
    }

    pub fn with_count(filename: impl Into<PathBuf>, reveal_number: RevealCount) -> Self {
        Self {
            filename: filename.into(),
            reveal_number,
            images_dir: default_images_dir(),
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }

    pub fn images_dir(mut self, images_dir: impl AsRef<Path>) -> Self {
        self.images_dir = images_dir.as_ref().to_path_buf();
        self
    }

    /// Location of the image, absolute filenames are used as they are.
    pub fn image_path(&self) -> PathBuf {
        self.images_dir.join(&self.filename)
    }
}

/// Load the configured image and build its frames: mask, partial reveals, then the original.
pub fn catchphrase_frames(config: &GameConfig, generator: impl RevealGenerator) -> Result<FrameSequence> {
    let raster = load(config.image_path())?;
    let regions = partition_raster(&raster);
    reveal_frames(&raster, &regions, config.reveal_number, generator)
}
