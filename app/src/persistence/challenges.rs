use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbConn, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

use models::domains::sea_orm_active_enums::ChallengeStatus;
use models::domains::{challenges, sessions, user_challenges};
use models::params::challenge::CreateChallengeParams;
use models::schemas::challenge::ClaimRewardSchema;

use crate::error::{CoreError, CoreResult};

use super::levels;

const DEFAULT_REWARD_POINTS: i32 = 100;

pub async fn create_challenge(
    db: &DbConn,
    params: CreateChallengeParams,
) -> CoreResult<challenges::Model> {
    let existing = challenges::Entity::find()
        .filter(challenges::Column::Date.eq(params.date))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(CoreError::Conflict(format!(
            "A challenge already exists for {}",
            params.date
        )));
    }

    let challenge = challenges::ActiveModel {
        date: Set(params.date),
        title: Set(params.title),
        description: Set(params.description),
        difficulty: Set(params.difficulty),
        target_wpm: Set(params.target_wpm),
        target_accuracy: Set(params.target_accuracy),
        target_sessions: Set(params.target_sessions),
        target_time_minutes: Set(params.target_time_minutes),
        reward_points: Set(params.reward_points.unwrap_or(DEFAULT_REWARD_POINTS)),
        is_active: Set(true),
        created_at: Set(Utc::now().fixed_offset()),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(challenge)
}

pub async fn today_challenge(
    db: &DbConn,
    date: NaiveDate,
) -> CoreResult<Option<challenges::Model>> {
    Ok(challenges::Entity::find()
        .filter(challenges::Column::Date.eq(date))
        .filter(challenges::Column::IsActive.eq(true))
        .one(db)
        .await?)
}

pub async fn get_participation(
    db: &DbConn,
    user_id: i32,
    challenge_id: i32,
) -> CoreResult<Option<user_challenges::Model>> {
    Ok(user_challenges::Entity::find()
        .filter(user_challenges::Column::UserId.eq(user_id))
        .filter(user_challenges::Column::ChallengeId.eq(challenge_id))
        .one(db)
        .await?)
}

/// Join a challenge. Joining twice returns the existing participation
/// instead of failing on uq_user_challenge.
pub async fn join_challenge(
    db: &DbConn,
    user_id: i32,
    challenge_id: i32,
) -> CoreResult<user_challenges::Model> {
    let challenge = challenges::Entity::find_by_id(challenge_id)
        .filter(challenges::Column::IsActive.eq(true))
        .one(db)
        .await?
        .ok_or_else(|| CoreError::not_found("Challenge"))?;

    if let Some(existing) = get_participation(db, user_id, challenge.id).await? {
        return Ok(existing);
    }

    let participation = user_challenges::ActiveModel {
        user_id: Set(user_id),
        challenge_id: Set(challenge.id),
        status: Set(ChallengeStatus::InProgress),
        current_wpm: Set(None),
        current_accuracy: Set(None),
        current_sessions: Set(0),
        current_time_minutes: Set(0),
        reward_claimed: Set(false),
        started_at: Set(Utc::now().fixed_offset()),
        completed_at: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(participation)
}

pub async fn active_challenges(
    db: &DbConn,
    user_id: i32,
) -> CoreResult<Vec<user_challenges::Model>> {
    Ok(user_challenges::Entity::find()
        .filter(user_challenges::Column::UserId.eq(user_id))
        .filter(user_challenges::Column::Status.eq(ChallengeStatus::InProgress))
        .all(db)
        .await?)
}

/// Fold one challenge-mode session into the day's participation, then check
/// completion. Users who have not joined the day's challenge are unaffected.
pub async fn apply_session<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    session: &sessions::Model,
    local_date: NaiveDate,
) -> CoreResult<()> {
    let Some(challenge) = challenges::Entity::find()
        .filter(challenges::Column::Date.eq(local_date))
        .filter(challenges::Column::IsActive.eq(true))
        .one(db)
        .await?
    else {
        return Ok(());
    };

    let Some(participation) = user_challenges::Entity::find()
        .filter(user_challenges::Column::UserId.eq(user_id))
        .filter(user_challenges::Column::ChallengeId.eq(challenge.id))
        .one(db)
        .await?
    else {
        return Ok(());
    };

    let current_wpm = participation
        .current_wpm
        .map_or(session.wpm, |w| w.max(session.wpm));
    let current_accuracy = participation
        .current_accuracy
        .map_or(session.accuracy, |a| a.max(session.accuracy));
    let current_sessions = participation.current_sessions + 1;
    let current_time_minutes =
        participation.current_time_minutes + (session.duration_ms / 60_000) as i32;

    let completed = targets_met(
        &challenge,
        Some(current_wpm),
        Some(current_accuracy),
        current_sessions,
        current_time_minutes,
    );

    let status = participation.status;
    let mut active: user_challenges::ActiveModel = participation.into();
    active.current_wpm = Set(Some(current_wpm));
    active.current_accuracy = Set(Some(current_accuracy));
    active.current_sessions = Set(current_sessions);
    active.current_time_minutes = Set(current_time_minutes);
    // completed is one-way; never downgrade
    if completed && status == ChallengeStatus::InProgress {
        active.status = Set(ChallengeStatus::Completed);
        active.completed_at = Set(Some(Utc::now().fixed_offset()));
    }
    active.update(db).await?;

    Ok(())
}

/// All configured (non-null) targets must be simultaneously satisfied.
fn targets_met(
    challenge: &challenges::Model,
    current_wpm: Option<f64>,
    current_accuracy: Option<f64>,
    current_sessions: i32,
    current_time_minutes: i32,
) -> bool {
    if let Some(target) = challenge.target_wpm {
        if current_wpm.is_none_or(|w| w < f64::from(target)) {
            return false;
        }
    }
    if let Some(target) = challenge.target_accuracy {
        if current_accuracy.is_none_or(|a| a < target) {
            return false;
        }
    }
    if let Some(target) = challenge.target_sessions {
        if current_sessions < target {
            return false;
        }
    }
    if let Some(target) = challenge.target_time_minutes {
        if current_time_minutes < target {
            return false;
        }
    }
    true
}

/// Claim the reward for a completed participation. reward_claimed moves
/// false -> true exactly once; the points/experience credit rides in the
/// same transaction.
pub async fn claim_reward(
    db: &DbConn,
    user_id: i32,
    user_challenge_id: i32,
) -> CoreResult<ClaimRewardSchema> {
    let txn = db.begin().await?;

    let participation = user_challenges::Entity::find_by_id(user_challenge_id)
        .filter(user_challenges::Column::UserId.eq(user_id))
        .one(&txn)
        .await?
        .ok_or_else(|| CoreError::not_found("Challenge participation"))?;

    if participation.status != ChallengeStatus::Completed {
        return Err(CoreError::Invalid(
            "Challenge must be completed before claiming the reward".to_string(),
        ));
    }
    if participation.reward_claimed {
        return Err(CoreError::Conflict("Reward already claimed".to_string()));
    }

    let challenge = challenges::Entity::find_by_id(participation.challenge_id)
        .one(&txn)
        .await?
        .ok_or_else(|| CoreError::not_found("Challenge"))?;

    let mut active: user_challenges::ActiveModel = participation.into();
    active.reward_claimed = Set(true);
    active.update(&txn).await?;

    levels::add_points(&txn, user_id, challenge.reward_points).await?;
    let level = levels::add_experience(&txn, user_id, challenge.reward_points / 2).await?;

    txn.commit().await?;

    Ok(ClaimRewardSchema {
        reward_points: challenge.reward_points,
        new_level: level.level,
        new_experience: level.experience,
    })
}
