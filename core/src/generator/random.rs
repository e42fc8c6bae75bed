use super::*;

/// Draws distinct regions uniformly from the reveal pool, without replacement.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomRevealGenerator {
    seed: u64,
}

impl RandomRevealGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl RevealGenerator for RandomRevealGenerator {
    fn generate(self, count: RevealCount) -> Result<RevealSet> {
        use rand::prelude::*;
        use rand::seq::SliceRandom;

        let mut pool: Vec<RegionIndex> = REVEAL_POOL.collect();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let (picked, _) = pool.partial_shuffle(&mut rng, count.get());

        log::debug!("Reveal order for seed {}: {:?}", self.seed, picked);
        RevealSet::new(picked.to_vec())
    }
}
