use chrono::{FixedOffset, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

use models::domains::sea_orm_active_enums::{Language, PracticeMode};
use models::domains::sessions;
use models::params::session::{CreateSessionParams, FinishSessionParams};
use models::queries::{PaginationQuery, session::SessionQuery};
use models::schemas::pagination::PaginatedData;
use models::schemas::session::{SessionListItemSchema, UserStatsSchema};

use crate::error::{CoreError, CoreResult};

use super::{challenges, stats, streaks};

const RECENT_LIMIT: u64 = 10;

/// Persist a typing attempt and fold it into the user's derived state.
///
/// For authenticated users the session insert, the daily rollup, the streak
/// update and any challenge progress commit in one transaction, so readers
/// never observe a session without its aggregates. Guest sessions are stored
/// as-is and skip every derived update.
pub async fn submit_session(
    db: &DbConn,
    user_id: Option<i32>,
    params: CreateSessionParams,
    offset: FixedOffset,
) -> CoreResult<sessions::Model> {
    if user_id.is_none() && params.guest_session_id.as_deref().unwrap_or("").is_empty() {
        return Err(CoreError::Invalid(
            "Guest sessions require a guest_session_id".to_string(),
        ));
    }

    let started_at = params
        .started_at
        .unwrap_or_else(|| Utc::now().fixed_offset());
    let guest_session_id = if user_id.is_none() {
        params.guest_session_id
    } else {
        None
    };

    let txn = db.begin().await?;

    let session = sessions::ActiveModel {
        user_id: Set(user_id),
        guest_session_id: Set(guest_session_id),
        mode: Set(params.mode),
        language: Set(params.language),
        text_content: Set(params.text_content),
        started_at: Set(started_at),
        ended_at: Set(params.ended_at),
        duration_ms: Set(params.duration_ms),
        input_length: Set(params.input_length),
        correct_length: Set(params.correct_length),
        error_count: Set(params.error_count),
        accuracy: Set(params.accuracy),
        wpm: Set(params.wpm),
        cpm: Set(params.cpm),
        metadata: Set(params.metadata),
        created_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    if let Some(user_id) = session.user_id {
        let local_date = session.started_at.with_timezone(&offset).date_naive();
        stats::roll_daily_stats(&txn, user_id, local_date, session.language, offset).await?;
        streaks::update_streak(&txn, user_id, local_date).await?;
        if session.mode == PracticeMode::Challenge {
            challenges::apply_session(&txn, user_id, &session, local_date).await?;
        }
    }

    txn.commit().await?;

    Ok(session)
}

/// The only permitted mutation of a stored session.
pub async fn finish_session(
    db: &DbConn,
    id: i32,
    params: FinishSessionParams,
) -> CoreResult<sessions::Model> {
    let session = sessions::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| CoreError::not_found("Session"))?;

    let mut active: sessions::ActiveModel = session.into();
    active.ended_at = Set(Some(params.ended_at));
    active.duration_ms = Set(params.duration_ms);

    Ok(active.update(db).await?)
}

fn owner_filter(
    user_id: Option<i32>,
    guest_session_id: Option<String>,
) -> CoreResult<sea_orm::Condition> {
    let mut condition = sea_orm::Condition::all();
    match (user_id, guest_session_id) {
        (Some(user_id), _) => {
            condition = condition.add(sessions::Column::UserId.eq(user_id));
        }
        (None, Some(guest_session_id)) if !guest_session_id.is_empty() => {
            condition = condition.add(sessions::Column::GuestSessionId.eq(guest_session_id));
        }
        _ => {
            return Err(CoreError::Invalid(
                "Either a user id or a guest_session_id is required".to_string(),
            ));
        }
    }
    Ok(condition)
}

pub async fn list_sessions(
    db: &DbConn,
    user_id: Option<i32>,
    query: SessionQuery,
    pagination: PaginationQuery,
) -> CoreResult<PaginatedData<SessionListItemSchema>> {
    let limit = pagination.limit.unwrap_or(15);
    let page = pagination.page.unwrap_or(1).max(1);

    let mut find = sessions::Entity::find().filter(owner_filter(user_id, query.guest_session_id)?);

    if let Some(language) = query.language {
        find = find.filter(sessions::Column::Language.eq(language));
    }
    if let Some(mode) = query.mode {
        find = find.filter(sessions::Column::Mode.eq(mode));
    }

    let total = find.clone().count(db).await?;
    let data = find
        .order_by_desc(sessions::Column::StartedAt)
        .offset((page - 1) * limit)
        .limit(limit)
        .all(db)
        .await?
        .into_iter()
        .map(SessionListItemSchema::from)
        .collect();

    Ok(PaginatedData::new(data, page, limit, total))
}

pub async fn recent_sessions(
    db: &DbConn,
    user_id: Option<i32>,
    guest_session_id: Option<String>,
) -> CoreResult<Vec<SessionListItemSchema>> {
    let rows = sessions::Entity::find()
        .filter(owner_filter(user_id, guest_session_id)?)
        .order_by_desc(sessions::Column::StartedAt)
        .limit(RECENT_LIMIT)
        .all(db)
        .await?;

    Ok(rows.into_iter().map(SessionListItemSchema::from).collect())
}

/// Lifetime aggregate over the owner's whole session history.
pub async fn user_stats(
    db: &DbConn,
    user_id: Option<i32>,
    guest_session_id: Option<String>,
) -> CoreResult<UserStatsSchema> {
    let rows = sessions::Entity::find()
        .filter(owner_filter(user_id, guest_session_id)?)
        .all(db)
        .await?;

    let total_sessions = rows.len() as u64;
    let (avg_wpm, avg_accuracy) = if rows.is_empty() {
        (0.0, 0.0)
    } else {
        let n = rows.len() as f64;
        (
            rows.iter().map(|s| s.wpm).sum::<f64>() / n,
            rows.iter().map(|s| s.accuracy).sum::<f64>() / n,
        )
    };
    let best_wpm = rows.iter().map(|s| s.wpm).max_by(f64::total_cmp);
    let total_time_ms: i64 = rows.iter().map(|s| s.duration_ms).sum();
    let korean_sessions = rows.iter().filter(|s| s.language == Language::Ko).count() as u64;
    let english_sessions = rows.iter().filter(|s| s.language == Language::En).count() as u64;

    Ok(UserStatsSchema {
        total_sessions,
        avg_wpm,
        avg_accuracy,
        best_wpm,
        total_time_ms,
        korean_sessions,
        english_sessions,
    })
}
