use models::domains::{
    badges, challenges, daily_stats, entries, goals, levels, sessions, snapshots, streaks,
    user_badges, user_challenges, users,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(users::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(users::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(users::Column::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(users::Column::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(users::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(users::Column::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(sessions::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(sessions::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(sessions::Column::UserId).integer().null())
                    .col(
                        ColumnDef::new(sessions::Column::GuestSessionId)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(sessions::Column::Mode).string().not_null())
                    .col(
                        ColumnDef::new(sessions::Column::Language)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(sessions::Column::TextContent)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(sessions::Column::StartedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(sessions::Column::EndedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(sessions::Column::DurationMs)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(sessions::Column::InputLength)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(sessions::Column::CorrectLength)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(sessions::Column::ErrorCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(sessions::Column::Accuracy)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(sessions::Column::Wpm)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(sessions::Column::Cpm).double().null())
                    .col(ColumnDef::new(sessions::Column::Metadata).json_binary().null())
                    .col(
                        ColumnDef::new(sessions::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-session-user_id")
                            .from(sessions::Entity, sessions::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_session_user_started")
                    .table(sessions::Entity)
                    .col(sessions::Column::UserId)
                    .col(sessions::Column::StartedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(daily_stats::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(daily_stats::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(daily_stats::Column::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(daily_stats::Column::Date).date().not_null())
                    .col(
                        ColumnDef::new(daily_stats::Column::Language)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(daily_stats::Column::TotalSessions)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(daily_stats::Column::TotalDurationMs)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(daily_stats::Column::TotalChars)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(daily_stats::Column::TotalErrors)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(daily_stats::Column::AvgWpm)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(daily_stats::Column::AvgAccuracy)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(daily_stats::Column::BestWpm).double().null())
                    .col(
                        ColumnDef::new(daily_stats::Column::BestAccuracy)
                            .double()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(daily_stats::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(daily_stats::Column::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-daily_stat-user_id")
                            .from(daily_stats::Entity, daily_stats::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_daily_user_date_lang")
                    .table(daily_stats::Entity)
                    .col(daily_stats::Column::UserId)
                    .col(daily_stats::Column::Date)
                    .col(daily_stats::Column::Language)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(streaks::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(streaks::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(streaks::Column::UserId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(streaks::Column::CurrentStreak)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(streaks::Column::LongestStreak)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(streaks::Column::LastActiveDate).date().null())
                    .col(
                        ColumnDef::new(streaks::Column::StreakStartDate)
                            .date()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(streaks::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(streaks::Column::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-streak-user_id")
                            .from(streaks::Entity, streaks::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(goals::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(goals::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(goals::Column::UserId).integer().not_null())
                    .col(ColumnDef::new(goals::Column::Kind).string().not_null())
                    .col(
                        ColumnDef::new(goals::Column::TargetValue)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(goals::Column::Language).string().not_null())
                    .col(
                        ColumnDef::new(goals::Column::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(goals::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(goals::Column::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-goal-user_id")
                            .from(goals::Entity, goals::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(badges::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(badges::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(badges::Column::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(badges::Column::Name).string().not_null())
                    .col(ColumnDef::new(badges::Column::Description).text().not_null())
                    .col(ColumnDef::new(badges::Column::Icon).string().not_null())
                    .col(ColumnDef::new(badges::Column::Category).string().not_null())
                    .col(
                        ColumnDef::new(badges::Column::Rarity)
                            .small_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(badges::Column::Condition).string().not_null())
                    .col(
                        ColumnDef::new(badges::Column::ConditionValue)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(badges::Column::RewardPoints)
                            .integer()
                            .not_null()
                            .default(50),
                    )
                    .col(
                        ColumnDef::new(badges::Column::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(badges::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(badges::Column::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(user_badges::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(user_badges::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(user_badges::Column::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(user_badges::Column::BadgeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(user_badges::Column::EarnedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(user_badges::Column::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_badge-user_id")
                            .from(user_badges::Entity, user_badges::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_badge-badge_id")
                            .from(user_badges::Entity, user_badges::Column::BadgeId)
                            .to(badges::Entity, badges::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_user_badge")
                    .table(user_badges::Entity)
                    .col(user_badges::Column::UserId)
                    .col(user_badges::Column::BadgeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(levels::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(levels::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(levels::Column::UserId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(levels::Column::Level)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(levels::Column::Experience)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(levels::Column::TotalPoints)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(levels::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(levels::Column::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-level-user_id")
                            .from(levels::Entity, levels::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(challenges::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(challenges::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(challenges::Column::Date)
                            .date()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(challenges::Column::Title).string().not_null())
                    .col(
                        ColumnDef::new(challenges::Column::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(challenges::Column::Difficulty)
                            .small_integer()
                            .not_null()
                            .default(2),
                    )
                    .col(ColumnDef::new(challenges::Column::TargetWpm).integer().null())
                    .col(
                        ColumnDef::new(challenges::Column::TargetAccuracy)
                            .double()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(challenges::Column::TargetSessions)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(challenges::Column::TargetTimeMinutes)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(challenges::Column::RewardPoints)
                            .integer()
                            .not_null()
                            .default(100),
                    )
                    .col(
                        ColumnDef::new(challenges::Column::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(challenges::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(challenges::Column::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(user_challenges::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(user_challenges::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(user_challenges::Column::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(user_challenges::Column::ChallengeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(user_challenges::Column::Status)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(user_challenges::Column::CurrentWpm)
                            .double()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(user_challenges::Column::CurrentAccuracy)
                            .double()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(user_challenges::Column::CurrentSessions)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(user_challenges::Column::CurrentTimeMinutes)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(user_challenges::Column::RewardClaimed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(user_challenges::Column::StartedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(user_challenges::Column::CompletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_challenge-user_id")
                            .from(user_challenges::Entity, user_challenges::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_challenge-challenge_id")
                            .from(user_challenges::Entity, user_challenges::Column::ChallengeId)
                            .to(challenges::Entity, challenges::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_user_challenge")
                    .table(user_challenges::Entity)
                    .col(user_challenges::Column::UserId)
                    .col(user_challenges::Column::ChallengeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(snapshots::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(snapshots::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(snapshots::Column::Period).string().not_null())
                    .col(
                        ColumnDef::new(snapshots::Column::StartDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(snapshots::Column::EndDate).date().not_null())
                    .col(ColumnDef::new(snapshots::Column::Mode).string().not_null())
                    .col(
                        ColumnDef::new(snapshots::Column::Language)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(snapshots::Column::GeneratedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_snapshot_key")
                    .table(snapshots::Entity)
                    .col(snapshots::Column::Period)
                    .col(snapshots::Column::StartDate)
                    .col(snapshots::Column::EndDate)
                    .col(snapshots::Column::Mode)
                    .col(snapshots::Column::Language)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(entries::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(entries::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(entries::Column::SnapshotId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(entries::Column::UserId).integer().not_null())
                    .col(ColumnDef::new(entries::Column::Rank).integer().not_null())
                    .col(ColumnDef::new(entries::Column::ScoreWpm).double().not_null())
                    .col(
                        ColumnDef::new(entries::Column::ScoreAccuracy)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(entries::Column::SessionCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(entries::Column::BestWpm).double().null())
                    .col(
                        ColumnDef::new(entries::Column::TotalDurationMs)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-entry-snapshot_id")
                            .from(entries::Entity, entries::Column::SnapshotId)
                            .to(snapshots::Entity, snapshots::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-entry-user_id")
                            .from(entries::Entity, entries::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_entry_user")
                    .table(entries::Entity)
                    .col(entries::Column::SnapshotId)
                    .col(entries::Column::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_entry_rank")
                    .table(entries::Entity)
                    .col(entries::Column::SnapshotId)
                    .col(entries::Column::Rank)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(entries::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(snapshots::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(user_challenges::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(challenges::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(levels::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(user_badges::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(badges::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(goals::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(streaks::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(daily_stats::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(sessions::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(users::Entity).to_owned())
            .await?;

        Ok(())
    }
}
