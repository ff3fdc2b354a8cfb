use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use app::persistence::sessions::{finish_session, submit_session, user_stats};
use models::domains::sea_orm_active_enums::{Language, PracticeMode};
use models::domains::{daily_stats, streaks};
use models::params::session::FinishSessionParams;

use super::{day, seed_user, session_params, test_db, utc};

#[tokio::test]
async fn daily_aggregate_is_mean_of_sessions() {
    let db = test_db().await;
    let user = seed_user(&db, "mina").await;
    let date = day(2024, 1, 10);

    for (wpm, accuracy) in [(60.0, 90.0), (80.0, 94.0), (70.0, 92.0)] {
        submit_session(
            &db,
            Some(user.id),
            session_params(wpm, accuracy, Language::Ko, PracticeMode::Practice, date),
            utc(),
        )
        .await
        .expect("Submit session failed!");
    }

    let stat = daily_stats::Entity::find()
        .filter(daily_stats::Column::UserId.eq(user.id))
        .filter(daily_stats::Column::Date.eq(date))
        .filter(daily_stats::Column::Language.eq(Language::Ko))
        .one(&db)
        .await
        .unwrap()
        .expect("Daily aggregate missing");

    assert_eq!(stat.total_sessions, 3);
    assert_eq!(stat.total_duration_ms, 180_000);
    assert_eq!(stat.total_chars, 360);
    assert_eq!(stat.total_errors, 18);
    assert!((stat.avg_wpm - 70.0).abs() < f64::EPSILON);
    assert!((stat.avg_accuracy - 92.0).abs() < f64::EPSILON);
    assert_eq!(stat.best_wpm, Some(80.0));
    assert_eq!(stat.best_accuracy, Some(94.0));
}

#[tokio::test]
async fn daily_aggregate_is_order_independent() {
    let db = test_db().await;
    let ascending = seed_user(&db, "asc").await;
    let descending = seed_user(&db, "desc").await;
    let date = day(2024, 3, 1);

    for wpm in [50.0, 65.0, 95.0] {
        submit_session(
            &db,
            Some(ascending.id),
            session_params(wpm, 90.0, Language::En, PracticeMode::Practice, date),
            utc(),
        )
        .await
        .unwrap();
    }
    for wpm in [95.0, 65.0, 50.0] {
        submit_session(
            &db,
            Some(descending.id),
            session_params(wpm, 90.0, Language::En, PracticeMode::Practice, date),
            utc(),
        )
        .await
        .unwrap();
    }

    let a = daily_stats::Entity::find()
        .filter(daily_stats::Column::UserId.eq(ascending.id))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    let b = daily_stats::Entity::find()
        .filter(daily_stats::Column::UserId.eq(descending.id))
        .one(&db)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(a.avg_wpm, b.avg_wpm);
    assert_eq!(a.best_wpm, b.best_wpm);
    assert_eq!(a.total_sessions, b.total_sessions);
}

#[tokio::test]
async fn aggregates_are_split_by_language() {
    let db = test_db().await;
    let user = seed_user(&db, "bilingual").await;
    let date = day(2024, 2, 2);

    submit_session(
        &db,
        Some(user.id),
        session_params(70.0, 95.0, Language::Ko, PracticeMode::Practice, date),
        utc(),
    )
    .await
    .unwrap();
    submit_session(
        &db,
        Some(user.id),
        session_params(40.0, 85.0, Language::En, PracticeMode::Practice, date),
        utc(),
    )
    .await
    .unwrap();

    let count = daily_stats::Entity::find()
        .filter(daily_stats::Column::UserId.eq(user.id))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn guest_sessions_skip_derived_state() {
    let db = test_db().await;

    let mut params = session_params(
        55.0,
        88.0,
        Language::En,
        PracticeMode::Practice,
        day(2024, 1, 5),
    );
    params.guest_session_id = Some("guest-abc".to_string());

    let session = submit_session(&db, None, params, utc()).await.unwrap();
    assert_eq!(session.user_id, None);
    assert_eq!(session.guest_session_id.as_deref(), Some("guest-abc"));

    assert_eq!(daily_stats::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(streaks::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn guest_sessions_require_guest_id() {
    let db = test_db().await;

    let params = session_params(
        55.0,
        88.0,
        Language::En,
        PracticeMode::Practice,
        day(2024, 1, 5),
    );

    let result = submit_session(&db, None, params, utc()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn finish_session_sets_end_time() {
    let db = test_db().await;
    let user = seed_user(&db, "finisher").await;
    let date = day(2024, 4, 4);

    let session = submit_session(
        &db,
        Some(user.id),
        session_params(62.0, 91.0, Language::Ko, PracticeMode::Practice, date),
        utc(),
    )
    .await
    .unwrap();
    assert!(session.ended_at.is_none());

    let ended_at = date.and_hms_opt(12, 2, 0).unwrap().and_utc().fixed_offset();
    let finished = finish_session(
        &db,
        session.id,
        FinishSessionParams {
            ended_at,
            duration_ms: 120_000,
        },
    )
    .await
    .unwrap();

    assert_eq!(finished.ended_at, Some(ended_at));
    assert_eq!(finished.duration_ms, 120_000);
}

#[tokio::test]
async fn user_stats_covers_whole_history() {
    let db = test_db().await;
    let user = seed_user(&db, "historian").await;

    submit_session(
        &db,
        Some(user.id),
        session_params(60.0, 90.0, Language::Ko, PracticeMode::Practice, day(2024, 1, 1)),
        utc(),
    )
    .await
    .unwrap();
    submit_session(
        &db,
        Some(user.id),
        session_params(80.0, 96.0, Language::En, PracticeMode::Ranked, day(2024, 1, 2)),
        utc(),
    )
    .await
    .unwrap();

    let stats = user_stats(&db, Some(user.id), None).await.unwrap();

    assert_eq!(stats.total_sessions, 2);
    assert!((stats.avg_wpm - 70.0).abs() < f64::EPSILON);
    assert_eq!(stats.best_wpm, Some(80.0));
    assert_eq!(stats.total_time_ms, 120_000);
    assert_eq!(stats.korean_sessions, 1);
    assert_eq!(stats.english_sessions, 1);
}
