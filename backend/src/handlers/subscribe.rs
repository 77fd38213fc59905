//! HTTP handler for email alert signup

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services::SubscriberService;
use crate::AppState;

/// Signup payload from the email capture form
#[derive(Debug, Deserialize, Validate)]
pub struct SubscribeRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub source_page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

/// Subscribe an email address to the monthly digest.
/// Re-subscribing an unsubscribed address reactivates it; subscribing an
/// active address is a no-op. Both answer ok.
pub async fn subscribe(
    State(state): State<AppState>,
    Json(input): Json<SubscribeRequest>,
) -> AppResult<Json<OkResponse>> {
    input.validate().map_err(|_| AppError::Validation {
        field: "email".to_string(),
        message: "Invalid email format".to_string(),
    })?;

    let service = SubscriberService::new(state.db);
    service
        .subscribe(
            &input.email,
            input.source_page.as_deref(),
            state.config.email.confirm_required,
        )
        .await?;

    Ok(Json(OkResponse { ok: true }))
}
