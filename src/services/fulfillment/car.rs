use super::require_slot;
use crate::errors::FulfillmentError;
use crate::models::{CompositeKey, FulfillmentResponse, IntentRequest, Record, Table};
use crate::services::store::RecordStore;

pub async fn handle(
    store: &dyn RecordStore,
    request: &IntentRequest,
) -> Result<FulfillmentResponse, FulfillmentError> {
    let pick_up_city = require_slot(request, "PickUpCity")?;
    let pick_up_date = require_slot(request, "PickUpDate")?;
    let return_date = require_slot(request, "ReturnDate")?;
    let driver_age = require_slot(request, "DriverAge")?;
    let car_type = require_slot(request, "CarType")?;

    tracing::info!(
        pick_up_city,
        pick_up_date,
        return_date,
        driver_age,
        car_type,
        "car booking received"
    );

    let key = CompositeKey::from_parts(&[pick_up_city, car_type, return_date]);
    let record = Record::new("BookingID", key)
        .field("PickUpCity", pick_up_city)
        .field("PickUpDate", pick_up_date)
        .field("ReturnDate", return_date)
        .field("DriverAge", driver_age)
        .field("CarType", car_type);

    store.put(Table::CarBookings, &record).await?;
    tracing::info!(booking_id = %record.key(), "record written");

    Ok(FulfillmentResponse::fulfilled(
        request.session_attributes.clone(),
        format!("Thank you. Your car booking for {pick_up_city} on {pick_up_date} has been scheduled."),
    ))
}
