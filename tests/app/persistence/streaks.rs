use app::persistence::streaks::update_streak;

use super::{day, seed_user, test_db};

#[tokio::test]
async fn first_activity_starts_a_streak() {
    let db = test_db().await;
    let user = seed_user(&db, "starter").await;
    let date = day(2024, 1, 10);

    let streak = update_streak(&db, user.id, date).await.unwrap();

    assert_eq!(streak.current_streak, 1);
    assert_eq!(streak.longest_streak, 1);
    assert_eq!(streak.last_active_date, Some(date));
    assert_eq!(streak.streak_start_date, Some(date));
}

#[tokio::test]
async fn same_day_update_is_idempotent() {
    let db = test_db().await;
    let user = seed_user(&db, "repeat").await;
    let date = day(2024, 1, 10);

    let first = update_streak(&db, user.id, date).await.unwrap();
    let second = update_streak(&db, user.id, date).await.unwrap();

    assert_eq!(first.current_streak, second.current_streak);
    assert_eq!(first.longest_streak, second.longest_streak);
    assert_eq!(first.streak_start_date, second.streak_start_date);
}

#[tokio::test]
async fn next_day_extends_the_streak() {
    let db = test_db().await;
    let user = seed_user(&db, "extender").await;

    for offset in 6..=10 {
        update_streak(&db, user.id, day(2024, 1, offset)).await.unwrap();
    }
    let streak = update_streak(&db, user.id, day(2024, 1, 11)).await.unwrap();

    assert_eq!(streak.current_streak, 6);
    assert_eq!(streak.longest_streak, 6);
    assert_eq!(streak.last_active_date, Some(day(2024, 1, 11)));
}

#[tokio::test]
async fn gap_resets_but_longest_survives() {
    let db = test_db().await;
    let user = seed_user(&db, "gapped").await;

    for offset in 6..=10 {
        update_streak(&db, user.id, day(2024, 1, offset)).await.unwrap();
    }
    let streak = update_streak(&db, user.id, day(2024, 1, 13)).await.unwrap();

    assert_eq!(streak.current_streak, 1);
    assert_eq!(streak.longest_streak, 5);
    assert_eq!(streak.streak_start_date, Some(day(2024, 1, 13)));
}

#[tokio::test]
async fn past_date_resets_the_streak() {
    // Backfilled dates fall through to the reset arm. Kept as-is on purpose;
    // see DESIGN.md.
    let db = test_db().await;
    let user = seed_user(&db, "backfill").await;

    update_streak(&db, user.id, day(2024, 1, 9)).await.unwrap();
    update_streak(&db, user.id, day(2024, 1, 10)).await.unwrap();
    let streak = update_streak(&db, user.id, day(2024, 1, 5)).await.unwrap();

    assert_eq!(streak.current_streak, 1);
    assert_eq!(streak.longest_streak, 2);
    assert_eq!(streak.last_active_date, Some(day(2024, 1, 5)));
}

#[tokio::test]
async fn longest_never_drops_below_current() {
    let db = test_db().await;
    let user = seed_user(&db, "invariant").await;

    let dates = [
        day(2024, 1, 1),
        day(2024, 1, 2),
        day(2024, 1, 2),
        day(2024, 1, 5),
        day(2024, 1, 6),
        day(2024, 1, 7),
        day(2024, 1, 8),
    ];
    for date in dates {
        let streak = update_streak(&db, user.id, date).await.unwrap();
        assert!(streak.longest_streak >= streak.current_streak);
    }
}
