pub mod fulfillment;
pub mod store;
