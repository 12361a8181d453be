mod cup;
mod filter;
mod week;

pub use cup::*;
pub use filter::*;
pub use week::*;
