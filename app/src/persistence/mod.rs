pub mod badges;
pub mod challenges;
pub mod goals;
pub mod leaderboard;
pub mod levels;
pub mod sessions;
pub mod stats;
pub mod streaks;
pub mod users;
