use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use app::persistence::badges::{check_and_award, set_featured, user_badges};
use app::persistence::levels::get_or_create_level;
use app::persistence::sessions::submit_session;
use app::persistence::streaks::update_streak;
use models::domains::badges;
use models::domains::sea_orm_active_enums::{BadgeCondition, Language, PracticeMode};

use super::{day, seed_user, session_params, test_db, utc};

async fn seed_badge(
    db: &DatabaseConnection,
    code: &str,
    condition: BadgeCondition,
    condition_value: i32,
    reward_points: i32,
) -> badges::Model {
    badges::ActiveModel {
        code: Set(code.to_string()),
        name: Set(code.to_string()),
        description: Set(String::new()),
        icon: Set("🏆".to_string()),
        category: Set("milestone".to_string()),
        rarity: Set(1),
        condition: Set(condition),
        condition_value: Set(condition_value),
        reward_points: Set(reward_points),
        is_active: Set(true),
        created_at: Set(Utc::now().fixed_offset()),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Seed badge failed!")
}

#[tokio::test]
async fn thresholds_grant_badges_and_rewards() {
    let db = test_db().await;
    let user = seed_user(&db, "achiever").await;

    seed_badge(&db, "wpm-60", BadgeCondition::WpmThreshold, 60, 50).await;
    seed_badge(&db, "wpm-100", BadgeCondition::WpmThreshold, 100, 80).await;
    seed_badge(&db, "acc-90", BadgeCondition::AccuracyThreshold, 90, 30).await;
    seed_badge(&db, "sessions-2", BadgeCondition::SessionsThreshold, 2, 20).await;
    seed_badge(&db, "streak-7", BadgeCondition::StreakThreshold, 7, 40).await;

    let date = day(2024, 5, 1);
    submit_session(
        &db,
        Some(user.id),
        session_params(65.0, 92.0, Language::Ko, PracticeMode::Practice, date),
        utc(),
    )
    .await
    .unwrap();
    submit_session(
        &db,
        Some(user.id),
        session_params(55.0, 88.0, Language::Ko, PracticeMode::Practice, date),
        utc(),
    )
    .await
    .unwrap();

    let awarded = check_and_award(&db, user.id).await.unwrap();

    let mut codes: Vec<&str> = awarded.iter().map(|b| b.code.as_str()).collect();
    codes.sort();
    assert_eq!(codes, ["acc-90", "sessions-2", "wpm-60"]);

    // 50 + 30 + 20 points, half of each as experience
    let level = get_or_create_level(&db, user.id).await.unwrap();
    assert_eq!(level.total_points, 100);
    assert_eq!(level.experience, 50);
    assert_eq!(level.level, 1);
}

#[tokio::test]
async fn rerun_without_new_sessions_grants_nothing() {
    let db = test_db().await;
    let user = seed_user(&db, "idempotent").await;

    seed_badge(&db, "wpm-60", BadgeCondition::WpmThreshold, 60, 50).await;

    submit_session(
        &db,
        Some(user.id),
        session_params(70.0, 90.0, Language::En, PracticeMode::Practice, day(2024, 5, 2)),
        utc(),
    )
    .await
    .unwrap();

    let first = check_and_award(&db, user.id).await.unwrap();
    assert_eq!(first.len(), 1);

    let second = check_and_award(&db, user.id).await.unwrap();
    assert!(second.is_empty());

    // no double rewards either
    let level = get_or_create_level(&db, user.id).await.unwrap();
    assert_eq!(level.total_points, 50);
    assert_eq!(level.experience, 25);
}

#[tokio::test]
async fn streak_badges_use_current_streak() {
    let db = test_db().await;
    let user = seed_user(&db, "streaker").await;

    seed_badge(&db, "streak-3", BadgeCondition::StreakThreshold, 3, 60).await;

    for offset in 1..=3 {
        update_streak(&db, user.id, day(2024, 6, offset)).await.unwrap();
    }

    let awarded = check_and_award(&db, user.id).await.unwrap();
    assert_eq!(awarded.len(), 1);
    assert_eq!(awarded[0].code, "streak-3");
}

#[tokio::test]
async fn featuring_a_badge_clears_the_previous_one() {
    let db = test_db().await;
    let user = seed_user(&db, "curator").await;

    seed_badge(&db, "wpm-10", BadgeCondition::WpmThreshold, 10, 10).await;
    seed_badge(&db, "acc-50", BadgeCondition::AccuracyThreshold, 50, 10).await;

    submit_session(
        &db,
        Some(user.id),
        session_params(30.0, 80.0, Language::Ko, PracticeMode::Practice, day(2024, 7, 1)),
        utc(),
    )
    .await
    .unwrap();
    check_and_award(&db, user.id).await.unwrap();

    let owned = user_badges(&db, user.id).await.unwrap();
    assert_eq!(owned.len(), 2);

    set_featured(&db, user.id, owned[0].id).await.unwrap();
    set_featured(&db, user.id, owned[1].id).await.unwrap();

    let owned = user_badges(&db, user.id).await.unwrap();
    let featured: Vec<_> = owned.iter().filter(|b| b.is_featured).collect();
    assert_eq!(featured.len(), 1);
}
