use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{error, info, instrument};

use crate::cache::TRIAGE_STATUS_HEADER;
use crate::constants::MAX_MESSAGE_CHARS;
use crate::gateway::error::GatewayError;
use crate::gateway::payload::AnalyzeRequest;
use crate::gateway::state::HandlerState;
use crate::orchestrator::Outcome;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

#[instrument(skip_all, fields(request_id = tracing::field::Empty))]
pub async fn analyze_handler(
    State(state): State<HandlerState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let Json(request) = payload?;
    let message = validate_message(&request.message)?;

    let request_id = uuid::Uuid::new_v4();
    tracing::Span::current().record("request_id", tracing::field::display(&request_id));

    let outcome = state
        .orchestrator
        .handle(message, &request.conversation_history)
        .await
        .map_err(|e| {
            error!(error = %e, "Analyze request failed");
            GatewayError::from(e)
        })?;

    info!(
        status = %outcome.status,
        cache_hit = outcome.status.is_cache_hit(),
        intent = %outcome.reply.intent,
        confidence = outcome.reply.confidence,
        "Analyze request served"
    );

    make_response(outcome, request_id)
}

pub(crate) fn make_response(outcome: Outcome, request_id: uuid::Uuid) -> Result<Response, GatewayError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        TRIAGE_STATUS_HEADER,
        HeaderValue::from_static(outcome.status.as_header_value()),
    );
    headers.insert(
        REQUEST_ID_HEADER,
        HeaderValue::from_str(&request_id.to_string())
            .map_err(|e| GatewayError::InternalError(e.to_string()))?,
    );

    Ok((StatusCode::OK, headers, Json(outcome.reply)).into_response())
}

/// Trims `raw` and checks it is 1..=[`MAX_MESSAGE_CHARS`] characters.
pub(crate) fn validate_message(raw: &str) -> Result<&str, GatewayError> {
    let message = raw.trim();
    if message.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "`message` must not be empty".to_string(),
        ));
    }

    let chars = message.chars().count();
    if chars > MAX_MESSAGE_CHARS {
        return Err(GatewayError::InvalidRequest(format!(
            "`message` is {chars} characters; the limit is {MAX_MESSAGE_CHARS}"
        )));
    }

    Ok(message)
}
