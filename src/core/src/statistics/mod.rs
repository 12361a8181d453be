mod leaderboard;
mod player;
mod suspension;

pub use leaderboard::*;
pub use player::*;
pub use suspension::*;
