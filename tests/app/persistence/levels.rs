use app::persistence::levels::{add_experience, add_points, get_or_create_level};

use super::{seed_user, test_db};

#[tokio::test]
async fn experience_rolls_over_at_level_times_100() {
    let db = test_db().await;
    let user = seed_user(&db, "lvl").await;

    add_experience(&db, user.id, 95).await.unwrap();
    let level = add_experience(&db, user.id, 30).await.unwrap();

    assert_eq!(level.level, 2);
    assert_eq!(level.experience, 25);
}

#[tokio::test]
async fn one_large_addition_can_jump_levels() {
    let db = test_db().await;
    let user = seed_user(&db, "jumper").await;

    // 100 + 200 + 300 exactly clears levels 1 through 3
    let level = add_experience(&db, user.id, 600).await.unwrap();

    assert_eq!(level.level, 4);
    assert_eq!(level.experience, 0);
}

#[tokio::test]
async fn points_accumulate_without_rollover() {
    let db = test_db().await;
    let user = seed_user(&db, "points").await;

    add_points(&db, user.id, 150).await.unwrap();
    let level = add_points(&db, user.id, 75).await.unwrap();

    assert_eq!(level.total_points, 225);
    assert_eq!(level.level, 1);
}

#[tokio::test]
async fn level_rows_start_at_level_one() {
    let db = test_db().await;
    let user = seed_user(&db, "fresh").await;

    let level = get_or_create_level(&db, user.id).await.unwrap();

    assert_eq!(level.level, 1);
    assert_eq!(level.experience, 0);
    assert_eq!(level.total_points, 0);
}
