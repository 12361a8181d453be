pub mod head_to_head;
pub mod league;
pub mod schedule;
pub mod season;
pub mod statistics;
pub mod team;
pub mod utils;

pub use head_to_head::*;
pub use league::*;
pub use schedule::*;
pub use season::*;
pub use statistics::*;
pub use team::*;
pub use utils::*;
