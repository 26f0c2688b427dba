//! Route handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::gateway::{
    Acknowledgement, AgendaRequest, Gateway, PromptOverride, SummaryRequest, SummaryResult,
};
use crate::server::error::{ApiError, Operation};

type ApiResult<T> = Result<Json<T>, ApiError>;

/// POST /summarize
pub async fn summarize(
    State(gateway): State<Gateway>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> ApiResult<SummaryResult> {
    let Json(request) = payload?;

    gateway
        .summarize_meeting(&request)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_gateway(Operation::Summarize, e))
}

/// POST /summarize-agenda
pub async fn summarize_agenda(
    State(gateway): State<Gateway>,
    payload: Result<Json<AgendaRequest>, JsonRejection>,
) -> ApiResult<SummaryResult> {
    let Json(request) = payload?;

    gateway
        .summarize_agenda(&request)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_gateway(Operation::Summarize, e))
}

/// POST /retry-summary
pub async fn retry_summary(State(gateway): State<Gateway>) -> ApiResult<SummaryResult> {
    gateway
        .retry_summary()
        .await
        .map(Json)
        .map_err(|e| ApiError::from_gateway(Operation::Retry, e))
}

/// POST /customize-prompt
pub async fn customize_prompt(
    State(gateway): State<Gateway>,
    payload: Result<Json<PromptOverride>, JsonRejection>,
) -> ApiResult<Acknowledgement> {
    let Json(request) = payload?;

    gateway
        .set_custom_prompt(request)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_gateway(Operation::CustomizePrompt, e))
}
