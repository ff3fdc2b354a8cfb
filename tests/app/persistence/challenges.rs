use app::persistence::challenges::{
    claim_reward, create_challenge, get_participation, join_challenge,
};
use app::persistence::levels::get_or_create_level;
use app::persistence::sessions::submit_session;
use models::domains::sea_orm_active_enums::{ChallengeStatus, Language, PracticeMode};
use models::params::challenge::CreateChallengeParams;

use super::{day, seed_user, session_params, test_db, utc};

fn speed_challenge(date: chrono::NaiveDate) -> CreateChallengeParams {
    CreateChallengeParams {
        date,
        title: "Speed run".to_string(),
        description: "Reach 80 WPM twice".to_string(),
        difficulty: 2,
        target_wpm: Some(80),
        target_accuracy: None,
        target_sessions: Some(2),
        target_time_minutes: None,
        reward_points: Some(100),
    }
}

#[tokio::test]
async fn duplicate_join_returns_existing_participation() {
    let db = test_db().await;
    let user = seed_user(&db, "joiner").await;
    let challenge = create_challenge(&db, speed_challenge(day(2024, 1, 10)))
        .await
        .unwrap();

    let first = join_challenge(&db, user.id, challenge.id).await.unwrap();
    let second = join_challenge(&db, user.id, challenge.id).await.unwrap();

    assert_eq!(first.id, second.id);
}

#[tokio::test]
async fn duplicate_challenge_date_is_rejected() {
    let db = test_db().await;
    create_challenge(&db, speed_challenge(day(2024, 1, 10)))
        .await
        .unwrap();

    let result = create_challenge(&db, speed_challenge(day(2024, 1, 10))).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn completion_requires_every_configured_target() {
    let db = test_db().await;
    let user = seed_user(&db, "contender").await;
    let date = day(2024, 1, 10);
    let challenge = create_challenge(&db, speed_challenge(date)).await.unwrap();
    join_challenge(&db, user.id, challenge.id).await.unwrap();

    // fast enough, but only one session of the required two
    submit_session(
        &db,
        Some(user.id),
        session_params(85.0, 95.0, Language::Ko, PracticeMode::Challenge, date),
        utc(),
    )
    .await
    .unwrap();

    let participation = get_participation(&db, user.id, challenge.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(participation.status, ChallengeStatus::InProgress);
    assert_eq!(participation.current_sessions, 1);
    assert_eq!(participation.current_wpm, Some(85.0));

    submit_session(
        &db,
        Some(user.id),
        session_params(82.0, 93.0, Language::Ko, PracticeMode::Challenge, date),
        utc(),
    )
    .await
    .unwrap();

    let participation = get_participation(&db, user.id, challenge.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(participation.status, ChallengeStatus::Completed);
    assert!(participation.completed_at.is_some());
    // progress keeps the best session's values
    assert_eq!(participation.current_wpm, Some(85.0));
}

#[tokio::test]
async fn completion_is_one_way() {
    let db = test_db().await;
    let user = seed_user(&db, "locked").await;
    let date = day(2024, 1, 10);
    let challenge = create_challenge(&db, speed_challenge(date)).await.unwrap();
    join_challenge(&db, user.id, challenge.id).await.unwrap();

    for _ in 0..2 {
        submit_session(
            &db,
            Some(user.id),
            session_params(90.0, 95.0, Language::Ko, PracticeMode::Challenge, date),
            utc(),
        )
        .await
        .unwrap();
    }

    // a slow session afterwards must not revert the status
    submit_session(
        &db,
        Some(user.id),
        session_params(20.0, 60.0, Language::Ko, PracticeMode::Challenge, date),
        utc(),
    )
    .await
    .unwrap();

    let participation = get_participation(&db, user.id, challenge.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(participation.status, ChallengeStatus::Completed);
}

#[tokio::test]
async fn sessions_without_joining_leave_no_trace() {
    let db = test_db().await;
    let user = seed_user(&db, "bystander").await;
    let date = day(2024, 1, 10);
    let challenge = create_challenge(&db, speed_challenge(date)).await.unwrap();

    submit_session(
        &db,
        Some(user.id),
        session_params(90.0, 95.0, Language::Ko, PracticeMode::Challenge, date),
        utc(),
    )
    .await
    .unwrap();

    let participation = get_participation(&db, user.id, challenge.id).await.unwrap();
    assert!(participation.is_none());
}

#[tokio::test]
async fn rewards_claim_exactly_once() {
    let db = test_db().await;
    let user = seed_user(&db, "claimer").await;
    let date = day(2024, 1, 10);
    let challenge = create_challenge(&db, speed_challenge(date)).await.unwrap();
    let participation = join_challenge(&db, user.id, challenge.id).await.unwrap();

    // not completed yet
    assert!(claim_reward(&db, user.id, participation.id).await.is_err());

    for _ in 0..2 {
        submit_session(
            &db,
            Some(user.id),
            session_params(90.0, 95.0, Language::Ko, PracticeMode::Challenge, date),
            utc(),
        )
        .await
        .unwrap();
    }

    let reward = claim_reward(&db, user.id, participation.id).await.unwrap();
    assert_eq!(reward.reward_points, 100);

    let level = get_or_create_level(&db, user.id).await.unwrap();
    assert_eq!(level.total_points, 100);
    assert_eq!(level.experience, 50);

    // second claim is rejected
    assert!(claim_reward(&db, user.id, participation.id).await.is_err());
}
