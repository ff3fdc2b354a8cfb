pub mod badges;
pub mod challenges;
pub mod daily_stats;
pub mod entries;
pub mod goals;
pub mod levels;
pub mod sea_orm_active_enums;
pub mod sessions;
pub mod snapshots;
pub mod streaks;
pub mod user_badges;
pub mod user_challenges;
pub mod users;
