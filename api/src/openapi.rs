use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taja API",
        version = "0.1.0",
        description = "Rust backend API for a typing practice web application",
        license(name = "MIT"),
    ),
    paths(
        crate::routers::user::users_post,
        crate::routers::user::users_id_get,
        crate::routers::session::sessions_post,
        crate::routers::session::sessions_get,
        crate::routers::session::sessions_recent_get,
        crate::routers::session::sessions_stats_get,
        crate::routers::session::sessions_finish_patch,
        crate::routers::stats::stats_overview_get,
        crate::routers::stats::stats_calendar_get,
        crate::routers::stats::stats_streak_get,
        crate::routers::goal::goals_post,
        crate::routers::goal::goals_get,
        crate::routers::goal::goals_progress_get,
        crate::routers::goal::goals_delete,
        crate::routers::challenge::challenges_post,
        crate::routers::challenge::challenges_today_get,
        crate::routers::challenge::challenges_join_post,
        crate::routers::challenge::challenges_claim_post,
        crate::routers::challenge::challenges_active_get,
        crate::routers::achievement::badges_get,
        crate::routers::achievement::my_badges_get,
        crate::routers::achievement::award_check_post,
        crate::routers::achievement::feature_badge_post,
        crate::routers::achievement::level_get,
        crate::routers::achievement::profile_get,
        crate::routers::leaderboard::leaderboard_latest_get,
        crate::routers::leaderboard::leaderboard_me_get,
        crate::routers::leaderboard::leaderboard_id_get,
        crate::routers::leaderboard::leaderboard_build_post,
    ),
    components(
        schemas(
            models::schemas::user::UserSchema,
            models::schemas::session::SessionSchema,
            models::schemas::session::SessionListItemSchema,
            models::schemas::session::UserStatsSchema,
            models::schemas::stats::DailyStatSchema,
            models::schemas::stats::StatsOverviewSchema,
            models::schemas::streak::StreakSchema,
            models::schemas::goal::GoalSchema,
            models::schemas::goal::GoalProgressSchema,
            models::schemas::badge::BadgeSchema,
            models::schemas::badge::UserBadgeSchema,
            models::schemas::level::LevelSchema,
            models::schemas::level::ProfileSchema,
            models::schemas::challenge::ChallengeSchema,
            models::schemas::challenge::ChallengeProgressSchema,
            models::schemas::challenge::TodayChallengeSchema,
            models::schemas::challenge::ClaimRewardSchema,
            models::schemas::leaderboard::SnapshotSchema,
            models::schemas::leaderboard::EntrySchema,
            models::schemas::leaderboard::SnapshotDetailSchema,
            models::schemas::leaderboard::MyRankSchema,
            models::params::user::CreateUserParams,
            models::params::session::CreateSessionParams,
            models::params::session::FinishSessionParams,
            models::params::goal::CreateGoalParams,
            models::params::challenge::CreateChallengeParams,
            models::params::challenge::JoinChallengeParams,
            models::params::snapshot::BuildSnapshotParams,
            models::domains::sea_orm_active_enums::Language,
            models::domains::sea_orm_active_enums::LanguageScope,
            models::domains::sea_orm_active_enums::PracticeMode,
            models::domains::sea_orm_active_enums::SnapshotMode,
            models::domains::sea_orm_active_enums::SnapshotPeriod,
            models::domains::sea_orm_active_enums::GoalKind,
            models::domains::sea_orm_active_enums::BadgeCondition,
            models::domains::sea_orm_active_enums::ChallengeStatus,
        )
    ),
    tags(
        (name = "users", description = "User lookup endpoints"),
        (name = "sessions", description = "Typing session submission and history"),
        (name = "stats", description = "Daily statistics and streaks"),
        (name = "goals", description = "Daily goals and progress"),
        (name = "challenges", description = "Daily challenges"),
        (name = "achievements", description = "Badges and levels"),
        (name = "leaderboard", description = "Leaderboard snapshots"),
    )
)]
pub struct ApiDoc;
