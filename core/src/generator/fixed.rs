use super::*;

/// Replays a preset reveal order, which must be as long as the requested count.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedRevealGenerator {
    reveal_set: RevealSet,
}

impl FixedRevealGenerator {
    pub fn new(reveal_set: RevealSet) -> Self {
        Self { reveal_set }
    }
}

impl RevealGenerator for FixedRevealGenerator {
    fn generate(self, count: RevealCount) -> Result<RevealSet> {
        if count != self.reveal_set.count() {
            log::warn!(
                "Fixed reveal order has {} regions, requested {}",
                self.reveal_set.count(),
                count
            );
            return Err(GameError::InvalidRevealSet);
        }
        Ok(self.reveal_set)
    }
}
