mod loader;
mod season;

pub use loader::*;
pub use season::*;
