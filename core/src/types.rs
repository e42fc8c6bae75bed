use core::fmt;
use core::ops::RangeInclusive;
use core::str::FromStr;

use ndarray::{Array2, Array3, ArrayD, Axis, Ix2, Ix3};
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Cells along each side of the grid.
pub const GRID_SIDE: usize = 3;

/// Total number of regions an image is split into.
pub const REGION_COUNT: usize = GRID_SIDE * GRID_SIDE;

/// Region indices the random draw picks from. Region 0 is never part of the pool.
pub const REVEAL_POOL: RangeInclusive<RegionIndex> = 1..=8;

/// Position of a region in the partition, `3 * col + row`.
pub type RegionIndex = u8;

/// In-memory pixel grid, axes are `(y, x)` or `(y, x, channel)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Raster {
    Greyscale(Array2<u8>),
    Color(Array3<u8>),
}

impl Raster {
    pub fn from_array(array: ArrayD<u8>) -> Result<Self> {
        match array.ndim() {
            2 => array
                .into_dimensionality::<Ix2>()
                .map(Self::Greyscale)
                .map_err(|_| GameError::UnsupportedImageKind(2)),
            3 => array
                .into_dimensionality::<Ix3>()
                .map(Self::Color)
                .map_err(|_| GameError::UnsupportedImageKind(3)),
            rank => Err(GameError::UnsupportedImageKind(rank)),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Self::Greyscale(pixels) => pixels.dim().0,
            Self::Color(pixels) => pixels.dim().0,
        }
    }

    pub fn width(&self) -> usize {
        match self {
            Self::Greyscale(pixels) => pixels.dim().1,
            Self::Color(pixels) => pixels.dim().1,
        }
    }

    /// Channels per pixel, 1 for greyscale.
    pub fn channels(&self) -> usize {
        match self {
            Self::Greyscale(_) => 1,
            Self::Color(pixels) => pixels.dim().2,
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            Self::Greyscale(pixels) => pixels.shape(),
            Self::Color(pixels) => pixels.shape(),
        }
    }

    pub fn is_greyscale(&self) -> bool {
        matches!(self, Self::Greyscale(_))
    }

    /// Number of pixels with at least one non-zero value.
    pub fn count_nonzero(&self) -> usize {
        match self {
            Self::Greyscale(pixels) => pixels.iter().filter(|&&value| value != 0).count(),
            Self::Color(pixels) => pixels
                .lanes(Axis(2))
                .into_iter()
                .filter(|pixel| pixel.iter().any(|&value| value != 0))
                .count(),
        }
    }
}

/// Axis-aligned rectangle, half-open on the max side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x1: usize,
    pub x2: usize,
    pub y1: usize,
    pub y2: usize,
}

impl Region {
    pub const fn new(x1: usize, x2: usize, y1: usize, y2: usize) -> Self {
        Self { x1, x2, y1, y2 }
    }

    pub const fn width(&self) -> usize {
        self.x2.saturating_sub(self.x1)
    }

    pub const fn height(&self) -> usize {
        self.y2.saturating_sub(self.y1)
    }

    pub const fn area(&self) -> usize {
        self.width() * self.height()
    }

    pub const fn is_empty(&self) -> bool {
        self.area() == 0
    }

    pub const fn contains(&self, x: usize, y: usize) -> bool {
        self.x1 <= x && x < self.x2 && self.y1 <= y && y < self.y2
    }

    /// Whether the region lies inside an image of the given size.
    pub const fn fits(&self, height: usize, width: usize) -> bool {
        self.x1 <= self.x2 && self.x2 <= width && self.y1 <= self.y2 && self.y2 <= height
    }
}

/// How many regions get revealed before the answer, always within `1..=8`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RevealCountRepr", into = "i64")]
pub struct RevealCount(u8);

impl RevealCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for RevealCount {
    fn default() -> Self {
        Self(3)
    }
}

impl fmt::Display for RevealCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for RevealCount {
    type Error = GameError;

    fn try_from(value: i64) -> Result<Self> {
        match u8::try_from(value) {
            Ok(count) if (Self::MIN..=Self::MAX).contains(&count) => Ok(Self(count)),
            _ => Err(GameError::RevealCountOutOfRange(value)),
        }
    }
}

impl FromStr for RevealCount {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| GameError::RevealCountNotInteger(s.to_owned()))?;
        Self::try_from(value)
    }
}

impl From<RevealCount> for i64 {
    fn from(count: RevealCount) -> Self {
        count.0.into()
    }
}

/// Config files may carry the count as a number or as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum RevealCountRepr {
    Number(i64),
    Text(String),
}

impl TryFrom<RevealCountRepr> for RevealCount {
    type Error = GameError;

    fn try_from(repr: RevealCountRepr) -> Result<Self> {
        match repr {
            RevealCountRepr::Number(value) => Self::try_from(value),
            RevealCountRepr::Text(text) => text.parse(),
        }
    }
}

/// Distinct region indices in the order they get revealed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RegionIndex>")]
pub struct RevealSet(Vec<RegionIndex>);

impl RevealSet {
    pub fn new(indices: Vec<RegionIndex>) -> Result<Self> {
        if indices.is_empty() || indices.len() > usize::from(RevealCount::MAX) {
            return Err(GameError::InvalidRevealSet);
        }

        let mut seen = [false; REGION_COUNT];
        for &index in &indices {
            if !REVEAL_POOL.contains(&index) || seen[usize::from(index)] {
                return Err(GameError::InvalidRevealSet);
            }
            seen[usize::from(index)] = true;
        }

        Ok(Self(indices))
    }

    pub fn count(&self) -> RevealCount {
        // length was checked to be within 1..=8 on construction
        RevealCount(self.0.len() as u8)
    }

    pub fn as_slice(&self) -> &[RegionIndex] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = RegionIndex> + '_ {
        self.0.iter().copied()
    }
}

impl TryFrom<Vec<RegionIndex>> for RevealSet {
    type Error = GameError;

    fn try_from(indices: Vec<RegionIndex>) -> Result<Self> {
        Self::new(indices)
    }
}
