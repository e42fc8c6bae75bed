use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Reveal count must be a whole number, got {0:?}")]
    RevealCountNotInteger(String),
    #[error("Reveal count must be between 1 and 8, got {0}")]
    RevealCountOutOfRange(i64),
    #[error("Reveal set must hold 1 to 8 distinct regions from 1 to 8")]
    InvalidRevealSet,
    #[error("Could not read image {}", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not decode image {}", path.display())]
    DecodeFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Could not encode image {}", path.display())]
    EncodeFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Unsupported image type with {0} dimensions or channels")]
    UnsupportedImageKind(usize),
    #[error("Region list does not match the image")]
    RegionMismatch,
    #[error("Frame sequence must hold a mask, one frame per revealed region and the original")]
    InvalidFrameSequence,
    #[error("Not allowed in the current game state")]
    InvalidTransition,
    #[error("Game state shows more pieces than the game has")]
    InvalidSessionState,
}

impl GameError {
    /// Whether this is a bad reveal count, rejected before any image is touched.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::RevealCountNotInteger(_) | Self::RevealCountOutOfRange(_)
        )
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
