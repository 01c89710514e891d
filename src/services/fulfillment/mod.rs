pub mod car;
pub mod hotel;
pub mod sales;

use chrono::Utc;

use crate::config::InvocationConfig;
use crate::errors::FulfillmentError;
use crate::models::{FulfillmentResponse, IntentRequest, SupportedIntent};
use crate::services::store::RecordStore;

/// Route a code-hook event to the handler for its intent.
pub async fn dispatch(
    store: &dyn RecordStore,
    request: &IntentRequest,
    invocation: &InvocationConfig,
) -> Result<FulfillmentResponse, FulfillmentError> {
    let received_at = Utc::now().with_timezone(&invocation.display_timezone);
    tracing::debug!(bot = %request.bot.name, "code hook invoked");
    tracing::debug!(
        user_id = %request.user_id,
        intent = %request.intent_name(),
        received_at = %received_at.format("%Y-%m-%d %H:%M:%S %Z"),
        "dispatch"
    );

    let intent: SupportedIntent = request.intent_name().parse()?;

    match intent {
        SupportedIntent::SalesInquiry => sales::handle(store, request).await,
        SupportedIntent::BookHotel => hotel::handle(store, request).await,
        SupportedIntent::BookCar => car::handle(store, request).await,
    }
}

pub(crate) fn require_slot<'a>(
    request: &'a IntentRequest,
    name: &'static str,
) -> Result<&'a str, FulfillmentError> {
    request.slot(name).ok_or(FulfillmentError::MissingSlot(name))
}
