use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use app::error::CoreError;
use app::persistence::challenges::{
    active_challenges, claim_reward, create_challenge, get_participation, join_challenge,
    today_challenge,
};
use app::state::AppState;
use models::params::challenge::{CreateChallengeParams, JoinChallengeParams};
use models::schemas::challenge::{
    ChallengeProgressSchema, ChallengeSchema, ClaimRewardSchema, TodayChallengeSchema,
};

use crate::error::ApiError;
use crate::extractor::{Json, MaybeUserId, UserId, Valid};
use crate::ApiResponse;

#[utoipa::path(
    get,
    path = "/challenges/today",
    tag = "challenges",
    responses((status = 200, body = TodayChallengeSchema), (status = 404))
)]
pub(crate) async fn challenges_today_get(
    state: State<AppState>,
    MaybeUserId(user_id): MaybeUserId,
) -> Result<impl IntoResponse, ApiError> {
    let challenge = today_challenge(&state.conn, state.config.local_today())
        .await?
        .ok_or_else(|| CoreError::not_found("Challenge"))?;

    let my_progress = match user_id {
        Some(user_id) => get_participation(&state.conn, user_id, challenge.id)
            .await?
            .map(ChallengeProgressSchema::from),
        None => None,
    };

    Ok(Json(TodayChallengeSchema {
        challenge: ChallengeSchema::from(challenge),
        my_progress,
    }))
}

#[utoipa::path(
    post,
    path = "/challenges",
    tag = "challenges",
    request_body = CreateChallengeParams,
    responses((status = 201, body = ChallengeSchema), (status = 409))
)]
pub(crate) async fn challenges_post(
    state: State<AppState>,
    Valid(Json(params)): Valid<Json<CreateChallengeParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let challenge = create_challenge(&state.conn, params).await?;

    Ok((StatusCode::CREATED, Json(ChallengeSchema::from(challenge))))
}

#[utoipa::path(
    post,
    path = "/challenges/join",
    tag = "challenges",
    request_body = JoinChallengeParams,
    responses((status = 200, body = ChallengeProgressSchema), (status = 404))
)]
pub(crate) async fn challenges_join_post(
    state: State<AppState>,
    UserId(user_id): UserId,
    Valid(Json(params)): Valid<Json<JoinChallengeParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let participation = join_challenge(&state.conn, user_id, params.challenge_id).await?;

    Ok(Json(ChallengeProgressSchema::from(participation)))
}

#[utoipa::path(
    post,
    path = "/challenges/{id}/claim",
    tag = "challenges",
    responses((status = 200, body = ApiResponse<ClaimRewardSchema>), (status = 409))
)]
pub(crate) async fn challenges_claim_post(
    state: State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let reward = claim_reward(&state.conn, user_id, id).await?;

    Ok(Json(ApiResponse::success("Reward claimed", Some(reward))))
}

#[utoipa::path(
    get,
    path = "/challenges/active",
    tag = "challenges",
    responses((status = 200, body = [ChallengeProgressSchema]))
)]
pub(crate) async fn challenges_active_get(
    state: State<AppState>,
    UserId(user_id): UserId,
) -> Result<impl IntoResponse, ApiError> {
    let participations = active_challenges(&state.conn, user_id).await?;

    let result: Vec<ChallengeProgressSchema> = participations
        .into_iter()
        .map(ChallengeProgressSchema::from)
        .collect();
    Ok(Json(result))
}

pub fn create_challenge_router() -> Router<AppState> {
    Router::new()
        .route("/", post(challenges_post))
        .route("/today", get(challenges_today_get))
        .route("/join", post(challenges_join_post))
        .route("/active", get(challenges_active_get))
        .route("/{id}/claim", post(challenges_claim_post))
}
