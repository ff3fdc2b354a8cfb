use std::collections::BTreeMap;

use chrono::{Datelike, FixedOffset, NaiveDate, Utc, Weekday};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use models::domains::sea_orm_active_enums::{
    Language, LanguageScope, PracticeMode, SnapshotMode, SnapshotPeriod,
};
use models::domains::{entries, sessions, snapshots, users};
use models::queries::snapshot::SnapshotQuery;
use models::schemas::leaderboard::{EntrySchema, MyRankSchema, SnapshotDetailSchema, SnapshotSchema};

use crate::error::{CoreError, CoreResult};

use super::stats::local_day_bounds;

const NEIGHBOR_SPAN: i32 = 2;

/// Inclusive date range covered by a period around `as_of`. Weeks start on
/// Monday; months are calendar months.
pub fn period_bounds(period: SnapshotPeriod, as_of: NaiveDate) -> (NaiveDate, NaiveDate) {
    match period {
        SnapshotPeriod::Daily => (as_of, as_of),
        SnapshotPeriod::Weekly => {
            let week = as_of.week(Weekday::Mon);
            (week.first_day(), week.last_day())
        }
        SnapshotPeriod::Monthly => {
            let first = as_of.with_day(1).unwrap();
            let last = (first + chrono::Months::new(1)).pred_opt().unwrap();
            (first, last)
        }
    }
}

#[derive(Default)]
struct Tally {
    sum_wpm: f64,
    sum_accuracy: f64,
    count: i32,
    best_wpm: f64,
    total_duration_ms: i64,
}

/// Materialize the ranked snapshot for one (period, mode, language) key.
///
/// Rebuilding an already-generated key replaces the previous snapshot and
/// its entries in the same transaction, so on-demand rebuilds never trip
/// uq_snapshot_key. Ranks are dense 1..N with a strict total order:
/// average wpm desc, average accuracy desc, user id asc.
pub async fn build_snapshot(
    db: &DbConn,
    period: SnapshotPeriod,
    mode: SnapshotMode,
    language: LanguageScope,
    as_of: NaiveDate,
    offset: FixedOffset,
) -> CoreResult<snapshots::Model> {
    let (start_date, end_date) = period_bounds(period, as_of);
    let (range_start, _) = local_day_bounds(start_date, offset);
    let (_, range_end) = local_day_bounds(end_date, offset);

    let txn = db.begin().await?;

    let mut query = sessions::Entity::find()
        .filter(sessions::Column::UserId.is_not_null())
        .filter(sessions::Column::StartedAt.gte(range_start))
        .filter(sessions::Column::StartedAt.lt(range_end));
    match mode {
        SnapshotMode::All => {}
        SnapshotMode::Practice => {
            query = query.filter(sessions::Column::Mode.eq(PracticeMode::Practice));
        }
        SnapshotMode::Ranked => {
            query = query.filter(sessions::Column::Mode.eq(PracticeMode::Ranked));
        }
    }
    match language {
        LanguageScope::All => {}
        LanguageScope::Ko => {
            query = query.filter(sessions::Column::Language.eq(Language::Ko));
        }
        LanguageScope::En => {
            query = query.filter(sessions::Column::Language.eq(Language::En));
        }
    }

    let mut tallies: BTreeMap<i32, Tally> = BTreeMap::new();
    for session in query.all(&txn).await? {
        let Some(user_id) = session.user_id else {
            continue;
        };
        let tally = tallies.entry(user_id).or_default();
        tally.sum_wpm += session.wpm;
        tally.sum_accuracy += session.accuracy;
        tally.count += 1;
        tally.best_wpm = tally.best_wpm.max(session.wpm);
        tally.total_duration_ms += session.duration_ms;
    }

    let mut ranked: Vec<(i32, Tally)> = tallies.into_iter().collect();
    ranked.sort_by(|(a_id, a), (b_id, b)| {
        let a_avg_wpm = a.sum_wpm / f64::from(a.count);
        let b_avg_wpm = b.sum_wpm / f64::from(b.count);
        let a_avg_acc = a.sum_accuracy / f64::from(a.count);
        let b_avg_acc = b.sum_accuracy / f64::from(b.count);
        b_avg_wpm
            .total_cmp(&a_avg_wpm)
            .then(b_avg_acc.total_cmp(&a_avg_acc))
            .then(a_id.cmp(b_id))
    });

    // regenerate-by-replace for the same key
    let previous = snapshots::Entity::find()
        .filter(snapshots::Column::Period.eq(period))
        .filter(snapshots::Column::StartDate.eq(start_date))
        .filter(snapshots::Column::EndDate.eq(end_date))
        .filter(snapshots::Column::Mode.eq(mode))
        .filter(snapshots::Column::Language.eq(language))
        .one(&txn)
        .await?;
    if let Some(previous) = previous {
        entries::Entity::delete_many()
            .filter(entries::Column::SnapshotId.eq(previous.id))
            .exec(&txn)
            .await?;
        snapshots::Entity::delete_by_id(previous.id).exec(&txn).await?;
    }

    let snapshot = snapshots::ActiveModel {
        period: Set(period),
        start_date: Set(start_date),
        end_date: Set(end_date),
        mode: Set(mode),
        language: Set(language),
        generated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    for (position, (user_id, tally)) in ranked.iter().enumerate() {
        entries::ActiveModel {
            snapshot_id: Set(snapshot.id),
            user_id: Set(*user_id),
            rank: Set(position as i32 + 1),
            score_wpm: Set(tally.sum_wpm / f64::from(tally.count)),
            score_accuracy: Set(tally.sum_accuracy / f64::from(tally.count)),
            session_count: Set(tally.count),
            best_wpm: Set(Some(tally.best_wpm)),
            total_duration_ms: Set(tally.total_duration_ms),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    tracing::info!(
        snapshot_id = snapshot.id,
        entries = ranked.len(),
        "Leaderboard snapshot generated"
    );

    txn.commit().await?;

    Ok(snapshot)
}

pub async fn latest_snapshot(
    db: &DbConn,
    query: SnapshotQuery,
) -> CoreResult<Option<snapshots::Model>> {
    let mut find = snapshots::Entity::find();

    if let Some(period) = query.period {
        find = find.filter(snapshots::Column::Period.eq(period));
    }
    if let Some(mode) = query.mode {
        find = find.filter(snapshots::Column::Mode.eq(mode));
    }
    if let Some(language) = query.language {
        find = find.filter(snapshots::Column::Language.eq(language));
    }

    Ok(find
        .order_by_desc(snapshots::Column::GeneratedAt)
        .one(db)
        .await?)
}

pub async fn snapshot_detail(db: &DbConn, snapshot_id: i32) -> CoreResult<SnapshotDetailSchema> {
    let snapshot = snapshots::Entity::find_by_id(snapshot_id)
        .one(db)
        .await?
        .ok_or_else(|| CoreError::not_found("Snapshot"))?;

    let rows = entries::Entity::find()
        .filter(entries::Column::SnapshotId.eq(snapshot.id))
        .order_by_asc(entries::Column::Rank)
        .find_also_related(users::Entity)
        .all(db)
        .await?;

    let entries = rows
        .into_iter()
        .map(|(entry, user)| match user {
            Some(user) => EntrySchema::with_username(entry, user.username),
            None => EntrySchema::from(entry),
        })
        .collect();

    Ok(SnapshotDetailSchema {
        snapshot: SnapshotSchema::from(snapshot),
        entries,
    })
}

/// The caller's entry in the latest matching snapshot, with the two ranks
/// on either side for context.
pub async fn my_rank(
    db: &DbConn,
    user_id: i32,
    query: SnapshotQuery,
) -> CoreResult<MyRankSchema> {
    let snapshot = latest_snapshot(db, query)
        .await?
        .ok_or_else(|| CoreError::not_found("Snapshot"))?;

    let my_entry = entries::Entity::find()
        .filter(entries::Column::SnapshotId.eq(snapshot.id))
        .filter(entries::Column::UserId.eq(user_id))
        .one(db)
        .await?;

    let neighbors = match &my_entry {
        Some(entry) => entries::Entity::find()
            .filter(entries::Column::SnapshotId.eq(snapshot.id))
            .filter(entries::Column::Rank.gte((entry.rank - NEIGHBOR_SPAN).max(1)))
            .filter(entries::Column::Rank.lte(entry.rank + NEIGHBOR_SPAN))
            .filter(entries::Column::UserId.ne(user_id))
            .order_by_asc(entries::Column::Rank)
            .all(db)
            .await?
            .into_iter()
            .map(EntrySchema::from)
            .collect(),
        None => Vec::new(),
    };

    Ok(MyRankSchema {
        snapshot: SnapshotSchema::from(snapshot),
        my_entry: my_entry.map(EntrySchema::from),
        neighbors,
    })
}

/// Standard snapshot keys rebuilt by the scheduler: every period, for all
/// modes combined, per language plus the combined board.
pub async fn rebuild_standard_snapshots(
    db: &DbConn,
    as_of: NaiveDate,
    offset: FixedOffset,
) -> CoreResult<()> {
    for period in [
        SnapshotPeriod::Daily,
        SnapshotPeriod::Weekly,
        SnapshotPeriod::Monthly,
    ] {
        for language in [LanguageScope::All, LanguageScope::Ko, LanguageScope::En] {
            build_snapshot(db, period, SnapshotMode::All, language, as_of, offset).await?;
        }
    }
    Ok(())
}
