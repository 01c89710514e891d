use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::errors::FulfillmentError;
use crate::models::{FulfillmentResponse, IntentRequest};
use crate::services::fulfillment;
use crate::state::AppState;

// POST /fulfill
pub async fn fulfill(
    State(state): State<Arc<AppState>>,
    Json(request): Json<IntentRequest>,
) -> Result<Json<FulfillmentResponse>, FulfillmentError> {
    let invocation = state.config.invocation();

    match fulfillment::dispatch(state.store.as_ref(), &request, &invocation).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!(
                error = %e,
                intent = %request.intent_name(),
                user_id = %request.user_id,
                "fulfillment failed"
            );
            Err(e)
        }
    }
}
