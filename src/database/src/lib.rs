mod error;
mod generators;
mod loaders;
mod store;

pub use error::*;
pub use generators::*;
pub use loaders::*;
pub use store::*;
