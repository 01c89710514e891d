use super::require_slot;
use crate::errors::FulfillmentError;
use crate::models::{CompositeKey, FulfillmentResponse, IntentRequest, Record, Table};
use crate::services::store::RecordStore;

pub async fn handle(
    store: &dyn RecordStore,
    request: &IntentRequest,
) -> Result<FulfillmentResponse, FulfillmentError> {
    let location = require_slot(request, "Location")?;
    let check_in_date = require_slot(request, "CheckInDate")?;
    let nights = require_slot(request, "Nights")?;
    let room_type = require_slot(request, "RoomType")?;

    tracing::info!(location, check_in_date, nights, room_type, "hotel booking received");

    let key = CompositeKey::from_parts(&[location, room_type, check_in_date]);
    let record = Record::new("BookingID", key)
        .field("Location", location)
        .field("CheckInDate", check_in_date)
        .field("Nights", nights)
        .field("RoomType", room_type);

    store.put(Table::HotelBookings, &record).await?;
    tracing::info!(booking_id = %record.key(), "record written");

    Ok(FulfillmentResponse::fulfilled(
        request.session_attributes.clone(),
        format!("Thank you. Your room booking for {nights} nights in {location} has been scheduled."),
    ))
}
