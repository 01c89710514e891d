use super::require_slot;
use crate::errors::FulfillmentError;
use crate::models::{CompositeKey, FulfillmentResponse, IntentRequest, Record, Table};
use crate::services::store::RecordStore;

pub async fn handle(
    store: &dyn RecordStore,
    request: &IntentRequest,
) -> Result<FulfillmentResponse, FulfillmentError> {
    let location = require_slot(request, "LocationSales")?;
    let client = require_slot(request, "Client")?;
    let time = require_slot(request, "Time")?;
    let product = require_slot(request, "Product")?;
    let day_of_meeting = require_slot(request, "DayOfMeeting")?;

    tracing::info!(location, client, time, product, day_of_meeting, "sales meeting received");

    let key = CompositeKey::from_parts(&[client, day_of_meeting, product]);
    let record = Record::new("ClientDate", key)
        .field("Client", client)
        .field("Location", location)
        .field("Product", product)
        .field("Time", time)
        .field("DayOfMeeting", day_of_meeting);

    store.put(Table::SalesCalendar, &record).await?;
    tracing::info!(client_date = %record.key(), "record written");

    // TODO: schedule the reminder promised below once a notification channel exists
    Ok(FulfillmentResponse::fulfilled(
        request.session_attributes.clone(),
        format!(
            "Thank you. Your meeting with {client} has been scheduled. We will send you a reminder 2 hours before your meeting."
        ),
    ))
}
