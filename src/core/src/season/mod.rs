mod collection;
mod season;

pub use collection::*;
pub use season::*;
