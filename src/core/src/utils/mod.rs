mod collation;
mod time;

pub use collation::*;
pub use time::*;
