use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FulfillmentError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SupportedIntent {
    SalesInquiry,
    BookHotel,
    BookCar,
}

impl SupportedIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportedIntent::SalesInquiry => "SalesInquiry",
            SupportedIntent::BookHotel => "BookHotel",
            SupportedIntent::BookCar => "BookCar",
        }
    }
}

impl FromStr for SupportedIntent {
    type Err = FulfillmentError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SalesInquiry" => Ok(SupportedIntent::SalesInquiry),
            "BookHotel" => Ok(SupportedIntent::BookHotel),
            "BookCar" => Ok(SupportedIntent::BookCar),
            other => Err(FulfillmentError::UnsupportedIntent(other.to_string())),
        }
    }
}

impl fmt::Display for SupportedIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
