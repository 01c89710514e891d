use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Collections the hook writes to. Each one is a pre-existing keyed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    HotelBookings,
    CarBookings,
    SalesCalendar,
}

impl Table {
    pub const ALL: [Table; 3] = [Table::HotelBookings, Table::CarBookings, Table::SalesCalendar];

    pub fn as_str(&self) -> &'static str {
        match self {
            Table::HotelBookings => "HotelBookings",
            Table::CarBookings => "CarBookings",
            Table::SalesCalendar => "SalesCalendar",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup key built from slot values.
///
/// Parts are joined with no separator, so `("ab", "c")` and `("a", "bc")`
/// produce the same key. Existing stored keys use this encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeKey(String);

impl CompositeKey {
    pub fn from_parts(parts: &[&str]) -> Self {
        Self(parts.concat())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Flat record: named string fields plus the derived key under `key_field`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    key_field: &'static str,
    key: CompositeKey,
    fields: Vec<(&'static str, String)>,
}

impl Record {
    pub fn new(key_field: &'static str, key: CompositeKey) -> Self {
        Self {
            key_field,
            key,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: &'static str, value: &str) -> Self {
        self.fields.push((name, value.to_string()));
        self
    }

    pub fn key(&self) -> &CompositeKey {
        &self.key
    }

    pub fn key_field(&self) -> &'static str {
        self.key_field
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        if name == self.key_field {
            return Some(self.key.as_str());
        }
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.serialize_entry(self.key_field, self.key.as_str())?;
        map.end()
    }
}
