mod finder;
mod stats;

pub use finder::*;
pub use stats::*;
