use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::presentation::state::AppState;

use super::error_response::ErrorResponse;

pub const TRANSLATION_FAILED: &str = "translation failed";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: String,
    pub target_language: String,
}

#[derive(Serialize)]
pub struct TranslateResponse {
    pub translation: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn translate_handler(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Rejected translation request");
            return ErrorResponse::reply(StatusCode::BAD_REQUEST, "invalid translation request");
        }
    };

    match state
        .translation_service
        .translate(&request.text, &request.target_language)
        .await
    {
        Ok(translation) => {
            (StatusCode::OK, Json(TranslateResponse { translation })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Translation failed");
            ErrorResponse::reply(StatusCode::INTERNAL_SERVER_ERROR, TRANSLATION_FAILED)
        }
    }
}
