mod fixture;
mod table;

pub use fixture::*;
pub use table::*;
