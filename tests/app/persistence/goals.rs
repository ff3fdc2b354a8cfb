use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};

use app::persistence::goals::{create_goal, goal_progress};
use app::persistence::sessions::submit_session;
use models::domains::goals;
use models::domains::sea_orm_active_enums::{GoalKind, Language, LanguageScope, PracticeMode};
use models::params::goal::CreateGoalParams;

use super::{day, seed_user, session_params, test_db, utc};

#[tokio::test]
async fn time_goal_sums_across_languages() {
    let db = test_db().await;
    let user = seed_user(&db, "goalie").await;
    let date = day(2024, 1, 10);

    create_goal(
        &db,
        user.id,
        CreateGoalParams {
            kind: GoalKind::Time,
            target_value: 2,
            language: None,
        },
    )
    .await
    .unwrap();

    // one minute in each language
    submit_session(
        &db,
        Some(user.id),
        session_params(60.0, 90.0, Language::Ko, PracticeMode::Practice, date),
        utc(),
    )
    .await
    .unwrap();
    submit_session(
        &db,
        Some(user.id),
        session_params(60.0, 90.0, Language::En, PracticeMode::Practice, date),
        utc(),
    )
    .await
    .unwrap();

    let progress = goal_progress(&db, user.id, date).await.unwrap();

    assert_eq!(progress.len(), 1);
    assert_eq!(progress[0].current_value, 2);
    assert!((progress[0].progress_percent - 100.0).abs() < f64::EPSILON);
    assert!(progress[0].is_achieved);
}

#[tokio::test]
async fn language_scoped_goal_ignores_other_languages() {
    let db = test_db().await;
    let user = seed_user(&db, "scoped").await;
    let date = day(2024, 1, 11);

    create_goal(
        &db,
        user.id,
        CreateGoalParams {
            kind: GoalKind::Sessions,
            target_value: 2,
            language: Some(LanguageScope::Ko),
        },
    )
    .await
    .unwrap();

    submit_session(
        &db,
        Some(user.id),
        session_params(60.0, 90.0, Language::Ko, PracticeMode::Practice, date),
        utc(),
    )
    .await
    .unwrap();
    submit_session(
        &db,
        Some(user.id),
        session_params(60.0, 90.0, Language::En, PracticeMode::Practice, date),
        utc(),
    )
    .await
    .unwrap();

    let progress = goal_progress(&db, user.id, date).await.unwrap();

    assert_eq!(progress[0].current_value, 1);
    assert!((progress[0].progress_percent - 50.0).abs() < f64::EPSILON);
    assert!(!progress[0].is_achieved);
}

#[tokio::test]
async fn progress_caps_at_one_hundred_percent() {
    let db = test_db().await;
    let user = seed_user(&db, "overachiever").await;
    let date = day(2024, 1, 12);

    create_goal(
        &db,
        user.id,
        CreateGoalParams {
            kind: GoalKind::Sessions,
            target_value: 1,
            language: None,
        },
    )
    .await
    .unwrap();

    for _ in 0..3 {
        submit_session(
            &db,
            Some(user.id),
            session_params(60.0, 90.0, Language::Ko, PracticeMode::Practice, date),
            utc(),
        )
        .await
        .unwrap();
    }

    let progress = goal_progress(&db, user.id, date).await.unwrap();

    assert_eq!(progress[0].current_value, 3);
    assert!((progress[0].progress_percent - 100.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn zero_target_reports_zero_without_panicking() {
    let db = test_db().await;
    let user = seed_user(&db, "zero").await;
    let date = day(2024, 1, 13);

    // params validation rejects 0, so write the row directly
    goals::ActiveModel {
        user_id: Set(user.id),
        kind: Set(GoalKind::Sessions),
        target_value: Set(0),
        language: Set(LanguageScope::All),
        is_active: Set(true),
        created_at: Set(Utc::now().fixed_offset()),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    submit_session(
        &db,
        Some(user.id),
        session_params(60.0, 90.0, Language::Ko, PracticeMode::Practice, date),
        utc(),
    )
    .await
    .unwrap();

    let progress = goal_progress(&db, user.id, date).await.unwrap();

    assert!((progress[0].progress_percent - 0.0).abs() < f64::EPSILON);
    assert!(!progress[0].is_achieved);
}
