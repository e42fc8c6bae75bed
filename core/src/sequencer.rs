use ndarray::s;
use serde::{Deserialize, Serialize};

use crate::*;

/// Game progression from fully hidden to fully shown.
///
/// Frame 0 is the mask, frames `1..=n` add one region each, the last frame is the original image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FrameSequenceRepr")]
pub struct FrameSequence {
    frames: Vec<Raster>,
    reveal_set: RevealSet,
}

#[derive(Deserialize)]
struct FrameSequenceRepr {
    frames: Vec<Raster>,
    reveal_set: RevealSet,
}

impl TryFrom<FrameSequenceRepr> for FrameSequence {
    type Error = GameError;

    fn try_from(repr: FrameSequenceRepr) -> Result<Self> {
        let FrameSequenceRepr { frames, reveal_set } = repr;
        if frames.len() != reveal_set.count().get() + 2 {
            return Err(GameError::InvalidFrameSequence);
        }
        let shape = frames[0].shape();
        if frames.iter().any(|frame| frame.shape() != shape) {
            return Err(GameError::InvalidFrameSequence);
        }
        Ok(Self { frames, reveal_set })
    }
}

impl FrameSequence {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn reveal_count(&self) -> RevealCount {
        self.reveal_set.count()
    }

    /// Region indices in the order they were revealed.
    pub fn revealed_indices(&self) -> &RevealSet {
        &self.reveal_set
    }

    pub fn mask(&self) -> &Raster {
        &self.frames[0]
    }

    pub fn original(&self) -> &Raster {
        &self.frames[self.frames.len() - 1]
    }

    /// Frame with the first `pieces` regions shown, `0` being the mask.
    pub fn revealed(&self, pieces: usize) -> Option<&Raster> {
        (pieces <= self.reveal_count().get()).then(|| &self.frames[pieces])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Raster> {
        self.frames.iter()
    }

    pub fn frames(&self) -> &[Raster] {
        &self.frames
    }

    /// Apply `f` to every frame, keeping the reveal order.
    pub(crate) fn try_map(self, f: impl FnMut(Raster) -> Result<Raster>) -> Result<Self> {
        let frames = self.frames.into_iter().map(f).collect::<Result<_>>()?;
        Ok(Self {
            frames,
            reveal_set: self.reveal_set,
        })
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a Raster;
    type IntoIter = core::slice::Iter<'a, Raster>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Copy `region` of `source` onto `target` at the same coordinates.
fn copy_region(target: &mut Raster, source: &Raster, region: &Region) {
    let Region { x1, x2, y1, y2 } = *region;
    match (target, source) {
        (Raster::Greyscale(target), Raster::Greyscale(source)) => target
            .slice_mut(s![y1..y2, x1..x2])
            .assign(&source.slice(s![y1..y2, x1..x2])),
        (Raster::Color(target), Raster::Color(source)) => target
            .slice_mut(s![y1..y2, x1..x2, ..])
            .assign(&source.slice(s![y1..y2, x1..x2, ..])),
        _ => unreachable!("mask is always built from its source raster"),
    }
}

/// Build the frame sequence for a known reveal order.
pub fn sequence(raster: &Raster, regions: &[Region], reveal_set: &RevealSet) -> Result<FrameSequence> {
    check_regions(raster, regions)?;

    let mask = build_mask(raster);
    let mut frames = Vec::with_capacity(reveal_set.count().get() + 2);
    let mut current = mask.clone();
    frames.push(mask);

    for index in reveal_set.iter() {
        let region = &regions[usize::from(index)];
        if region.is_empty() {
            log::warn!("Region {index} is empty, frame will not change");
        }
        copy_region(&mut current, raster, region);
        frames.push(current.clone());
    }

    frames.push(raster.clone());
    log::debug!(
        "Built {} frames revealing regions {:?}",
        frames.len(),
        reveal_set.as_slice()
    );

    Ok(FrameSequence {
        frames,
        reveal_set: reveal_set.clone(),
    })
}

/// Randomly pick `count` regions and build the frame sequence for them.
pub fn reveal_frames(
    raster: &Raster,
    regions: &[Region],
    count: RevealCount,
    generator: impl RevealGenerator,
) -> Result<FrameSequence> {
    let reveal_set = generator.generate(count)?;
    sequence(raster, regions, &reveal_set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3};

    fn grey(value: u8) -> Raster {
        Raster::Greyscale(Array2::from_elem((30, 30), value))
    }

    fn reveal_set(indices: &[RegionIndex]) -> RevealSet {
        RevealSet::new(indices.to_vec()).unwrap()
    }

    #[test]
    fn sequence_has_mask_reveals_and_answer() {
        let raster = grey(128);
        let regions = partition_raster(&raster);

        let frames = sequence(&raster, &regions, &reveal_set(&[3, 1])).unwrap();

        assert_eq!(frames.len(), 4);
        assert_eq!(frames.mask().count_nonzero(), 0);
        assert_eq!(frames.revealed(1).unwrap().count_nonzero(), regions[3].area());
        assert_eq!(
            frames.revealed(2).unwrap().count_nonzero(),
            regions[3].area() + regions[1].area()
        );
        assert_eq!(frames.original(), &raster);
        assert_eq!(frames.revealed(3), None);
    }

    #[test]
    fn each_frame_only_adds_its_region() {
        let pixels = Array2::from_shape_fn((27, 33), |(y, x)| (1 + (x * 7 + y * 3) % 250) as u8);
        let raster = Raster::Greyscale(pixels.clone());
        let regions = partition_raster(&raster);
        let order = reveal_set(&[8, 2, 5, 1]);

        let frames = sequence(&raster, &regions, &order).unwrap();

        for (step, index) in order.iter().enumerate() {
            let (Raster::Greyscale(before), Raster::Greyscale(after)) =
                (&frames.frames()[step], &frames.frames()[step + 1])
            else {
                panic!("greyscale input should give greyscale frames");
            };
            let region = regions[usize::from(index)];
            for ((y, x), &value) in after.indexed_iter() {
                if region.contains(x, y) {
                    assert_eq!(value, pixels[(y, x)]);
                } else {
                    assert_eq!(value, before[(y, x)]);
                }
            }
        }
    }

    #[test]
    fn color_frames_keep_shape() {
        let raster = Raster::Color(Array3::from_elem((12, 9, 3), 50));
        let regions = partition_raster(&raster);

        let frames = sequence(&raster, &regions, &reveal_set(&[1, 2, 3, 4, 5, 6, 7, 8])).unwrap();

        assert_eq!(frames.len(), 10);
        assert!(frames.iter().all(|frame| frame.shape() == [12, 9, 3]));
        assert_eq!(frames.mask().count_nonzero(), 0);
        // region 0 plus the last row and column are never revealed
        let hidden = regions[0].area() + 12 + 9 - 1;
        assert_eq!(frames.revealed(8).unwrap().count_nonzero(), 12 * 9 - hidden);
    }

    #[test]
    fn earlier_frames_keep_their_reveals() {
        let raster = grey(10);
        let regions = partition_raster(&raster);
        let order = reveal_set(&[6, 1, 8, 3]);

        let frames = sequence(&raster, &regions, &order).unwrap();

        let mut expected = 0;
        for (step, index) in order.iter().enumerate() {
            expected += regions[usize::from(index)].area();
            assert_eq!(frames.revealed(step + 1).unwrap().count_nonzero(), expected);
        }
        assert_eq!(frames.mask().count_nonzero(), 0);
    }

    #[test]
    fn deserialization_checks_frame_count_and_shapes() {
        let raster = grey(128);
        let regions = partition_raster(&raster);
        let frames = sequence(&raster, &regions, &reveal_set(&[2, 4])).unwrap();

        let json = serde_json::to_string(&frames).unwrap();
        assert_eq!(serde_json::from_str::<FrameSequence>(&json).unwrap(), frames);

        let empty = r#"{"frames": [], "reveal_set": [1]}"#;
        assert!(serde_json::from_str::<FrameSequence>(empty).is_err());

        let mut value = serde_json::to_value(&frames).unwrap();
        value["frames"].as_array_mut().unwrap().pop();
        assert!(serde_json::from_value::<FrameSequence>(value).is_err());

        let mut value = serde_json::to_value(&frames).unwrap();
        value["frames"][1] = serde_json::to_value(Raster::Greyscale(Array2::zeros((3, 3)))).unwrap();
        assert!(serde_json::from_value::<FrameSequence>(value).is_err());
    }

    #[test]
    fn fixed_order_of_wrong_length_is_rejected() {
        let raster = grey(128);
        let regions = partition_raster(&raster);
        let count = RevealCount::try_from(3_i64).unwrap();

        let err = reveal_frames(&raster, &regions, count, FixedRevealGenerator::new(reveal_set(&[1])))
            .unwrap_err();

        assert!(matches!(err, GameError::InvalidRevealSet));
    }

    #[test]
    fn mismatched_regions_are_rejected() {
        let raster = grey(1);
        let regions = partition(90, 90);

        let err = sequence(&raster, &regions, &reveal_set(&[1])).unwrap_err();

        assert!(matches!(err, GameError::RegionMismatch));
    }

    #[test]
    fn reveal_frames_uses_generator() {
        let raster = grey(128);
        let regions = partition_raster(&raster);
        let count = RevealCount::try_from(3_i64).unwrap();

        let a = reveal_frames(&raster, &regions, count, RandomRevealGenerator::new(7)).unwrap();
        let b = reveal_frames(&raster, &regions, count, RandomRevealGenerator::new(7)).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
        assert!(!a.revealed_indices().as_slice().contains(&0));
    }
}
