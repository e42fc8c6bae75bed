use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

pub trait RevealGenerator {
    fn generate(self, count: RevealCount) -> Result<RevealSet>;
}
