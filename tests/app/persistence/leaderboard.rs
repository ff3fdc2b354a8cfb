use sea_orm::{EntityTrait, PaginatorTrait};

use app::persistence::leaderboard::{build_snapshot, my_rank, period_bounds, snapshot_detail};
use app::persistence::sessions::submit_session;
use models::domains::sea_orm_active_enums::{
    Language, LanguageScope, PracticeMode, SnapshotMode, SnapshotPeriod,
};
use models::domains::snapshots;
use models::queries::snapshot::SnapshotQuery;

use super::{day, seed_user, session_params, test_db, utc};

#[tokio::test]
async fn ranks_are_dense_and_tie_broken_by_accuracy() {
    let db = test_db().await;
    let slow = seed_user(&db, "slow").await;
    let sharp = seed_user(&db, "sharp").await;
    let sloppy = seed_user(&db, "sloppy").await;
    let date = day(2024, 1, 10);

    for (user_id, wpm, accuracy) in [
        (slow.id, 80.0, 90.0),
        (sharp.id, 95.0, 92.0),
        (sloppy.id, 95.0, 88.0),
    ] {
        submit_session(
            &db,
            Some(user_id),
            session_params(wpm, accuracy, Language::Ko, PracticeMode::Practice, date),
            utc(),
        )
        .await
        .unwrap();
    }

    let snapshot = build_snapshot(
        &db,
        SnapshotPeriod::Daily,
        SnapshotMode::All,
        LanguageScope::All,
        date,
        utc(),
    )
    .await
    .unwrap();

    let detail = snapshot_detail(&db, snapshot.id).await.unwrap();
    assert_eq!(detail.entries.len(), 3);

    let ranks: Vec<(i32, i32)> = detail.entries.iter().map(|e| (e.rank, e.user_id)).collect();
    assert_eq!(ranks, vec![(1, sharp.id), (2, sloppy.id), (3, slow.id)]);
}

#[tokio::test]
async fn rebuild_replaces_the_previous_snapshot() {
    let db = test_db().await;
    let user = seed_user(&db, "rebuilt").await;
    let date = day(2024, 1, 10);

    submit_session(
        &db,
        Some(user.id),
        session_params(70.0, 90.0, Language::Ko, PracticeMode::Practice, date),
        utc(),
    )
    .await
    .unwrap();

    let first = build_snapshot(
        &db,
        SnapshotPeriod::Daily,
        SnapshotMode::All,
        LanguageScope::All,
        date,
        utc(),
    )
    .await
    .unwrap();

    submit_session(
        &db,
        Some(user.id),
        session_params(90.0, 95.0, Language::Ko, PracticeMode::Practice, date),
        utc(),
    )
    .await
    .unwrap();

    let second = build_snapshot(
        &db,
        SnapshotPeriod::Daily,
        SnapshotMode::All,
        LanguageScope::All,
        date,
        utc(),
    )
    .await
    .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(snapshots::Entity::find().count(&db).await.unwrap(), 1);

    let detail = snapshot_detail(&db, second.id).await.unwrap();
    assert_eq!(detail.entries.len(), 1);
    assert!((detail.entries[0].score_wpm - 80.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn guest_sessions_never_enter_the_board() {
    let db = test_db().await;
    let user = seed_user(&db, "ranked").await;
    let date = day(2024, 1, 10);

    submit_session(
        &db,
        Some(user.id),
        session_params(70.0, 90.0, Language::Ko, PracticeMode::Practice, date),
        utc(),
    )
    .await
    .unwrap();

    let mut guest = session_params(99.0, 99.0, Language::Ko, PracticeMode::Practice, date);
    guest.guest_session_id = Some("guest-1".to_string());
    submit_session(&db, None, guest, utc()).await.unwrap();

    let snapshot = build_snapshot(
        &db,
        SnapshotPeriod::Daily,
        SnapshotMode::All,
        LanguageScope::All,
        date,
        utc(),
    )
    .await
    .unwrap();

    let detail = snapshot_detail(&db, snapshot.id).await.unwrap();
    assert_eq!(detail.entries.len(), 1);
    assert_eq!(detail.entries[0].user_id, user.id);
}

#[tokio::test]
async fn language_filter_narrows_the_board() {
    let db = test_db().await;
    let korean = seed_user(&db, "korean").await;
    let english = seed_user(&db, "english").await;
    let date = day(2024, 1, 10);

    submit_session(
        &db,
        Some(korean.id),
        session_params(70.0, 90.0, Language::Ko, PracticeMode::Practice, date),
        utc(),
    )
    .await
    .unwrap();
    submit_session(
        &db,
        Some(english.id),
        session_params(80.0, 90.0, Language::En, PracticeMode::Practice, date),
        utc(),
    )
    .await
    .unwrap();

    let snapshot = build_snapshot(
        &db,
        SnapshotPeriod::Daily,
        SnapshotMode::All,
        LanguageScope::Ko,
        date,
        utc(),
    )
    .await
    .unwrap();

    let detail = snapshot_detail(&db, snapshot.id).await.unwrap();
    assert_eq!(detail.entries.len(), 1);
    assert_eq!(detail.entries[0].user_id, korean.id);
}

#[tokio::test]
async fn my_rank_returns_neighbors() {
    let db = test_db().await;
    let date = day(2024, 1, 10);

    let mut middle_id = 0;
    for (i, wpm) in [95.0, 90.0, 85.0, 80.0, 75.0].iter().enumerate() {
        let user = seed_user(&db, &format!("racer{i}")).await;
        if i == 2 {
            middle_id = user.id;
        }
        submit_session(
            &db,
            Some(user.id),
            session_params(*wpm, 90.0, Language::Ko, PracticeMode::Practice, date),
            utc(),
        )
        .await
        .unwrap();
    }

    build_snapshot(
        &db,
        SnapshotPeriod::Daily,
        SnapshotMode::All,
        LanguageScope::All,
        date,
        utc(),
    )
    .await
    .unwrap();

    let result = my_rank(&db, middle_id, SnapshotQuery::default()).await.unwrap();

    assert_eq!(result.my_entry.as_ref().map(|e| e.rank), Some(3));
    let neighbor_ranks: Vec<i32> = result.neighbors.iter().map(|e| e.rank).collect();
    assert_eq!(neighbor_ranks, vec![1, 2, 4, 5]);
}

#[test]
fn period_bounds_follow_the_calendar() {
    let wednesday = day(2024, 1, 10);

    assert_eq!(
        period_bounds(SnapshotPeriod::Daily, wednesday),
        (wednesday, wednesday)
    );
    assert_eq!(
        period_bounds(SnapshotPeriod::Weekly, wednesday),
        (day(2024, 1, 8), day(2024, 1, 14))
    );
    assert_eq!(
        period_bounds(SnapshotPeriod::Monthly, wednesday),
        (day(2024, 1, 1), day(2024, 1, 31))
    );
}
