//! Loosely typed advertisement reports as delivered by platform scan callbacks

use std::collections::HashMap;

/// String keys under which scan callbacks deliver advertisement fields.
///
/// The key strings match the CoreBluetooth advertisement data constants, which bridge layers
/// on other platforms emit as well.
pub mod keys {
    /// The advertised local name
    pub const LOCAL_NAME: &str = "kCBAdvDataLocalName";
    /// The manufacturer specific data
    pub const MANUFACTURER_DATA: &str = "kCBAdvDataManufacturerData";
    /// Service specific data, keyed by service UUID
    pub const SERVICE_DATA: &str = "kCBAdvDataServiceData";
    /// The advertised service UUIDs
    pub const SERVICE_UUIDS: &str = "kCBAdvDataServiceUUIDs";
    /// Additional service UUIDs carried in the overflow area
    pub const OVERFLOW_SERVICE_UUIDS: &str = "kCBAdvDataOverflowServiceUUIDs";
    /// Service UUIDs the peripheral solicits from centrals
    pub const SOLICITED_SERVICE_UUIDS: &str = "kCBAdvDataSolicitedServiceUUIDs";
    /// The transmit power level in dBm
    pub const TX_POWER_LEVEL: &str = "kCBAdvDataTxPowerLevel";
    /// Whether the peripheral accepts connections
    pub const IS_CONNECTABLE: &str = "kCBAdvDataIsConnectable";
}

/// A single loosely typed value from an advertisement report.
///
/// Scan callbacks deliver advertisement fields as a keyed bag of heterogeneous values. This
/// closed set of shapes covers everything those callbacks produce; the snapshot builder checks
/// each field against the shape it expects and ignores mismatches.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReportValue {
    /// A UTF-8 string
    Text(String),
    /// An opaque byte buffer
    Bytes(Vec<u8>),
    /// A numeric value
    Number(f64),
    /// A boolean value
    Bool(bool),
    /// A list of UUIDs in big-endian byte layout
    Uuids(Vec<[u8; 16]>),
    /// A map from UUIDs in big-endian byte layout to byte buffers
    UuidMap(HashMap<[u8; 16], Vec<u8>>),
}

impl ReportValue {
    /// Returns the string value, if self is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ReportValue::Text(val) => Some(val),
            _ => None,
        }
    }

    /// Returns the byte buffer, if self is one
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ReportValue::Bytes(val) => Some(val),
            _ => None,
        }
    }

    /// Returns the numeric value, if self is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ReportValue::Number(val) => Some(*val),
            _ => None,
        }
    }

    /// Returns the boolean value, if self is a boolean or a number.
    ///
    /// Platforms encode flags as numbers about as often as booleans, so a number is accepted
    /// here and reads as true when non-zero.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ReportValue::Bool(val) => Some(*val),
            ReportValue::Number(val) => Some(*val != 0.0),
            _ => None,
        }
    }

    /// Returns the UUID list, if self is one
    pub fn as_uuids(&self) -> Option<&[[u8; 16]]> {
        match self {
            ReportValue::Uuids(val) => Some(val),
            _ => None,
        }
    }

    /// Returns the UUID-keyed map, if self is one
    pub fn as_uuid_map(&self) -> Option<&HashMap<[u8; 16], Vec<u8>>> {
        match self {
            ReportValue::UuidMap(val) => Some(val),
            _ => None,
        }
    }
}

/// A keyed bag of loosely typed advertisement fields from a single scan callback.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvertisementReport {
    fields: HashMap<String, ReportValue>,
}

impl AdvertisementReport {
    /// Creates an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key`, replacing any previous value for that key
    pub fn insert(&mut self, key: impl Into<String>, value: ReportValue) {
        self.fields.insert(key.into(), value);
    }

    /// Returns the value stored under `key`, if any
    pub fn get(&self, key: &str) -> Option<&ReportValue> {
        self.fields.get(key)
    }

    /// Returns `true` if the report has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of fields in the report
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates over the report's keys and values in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReportValue)> + '_ {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl From<HashMap<String, ReportValue>> for AdvertisementReport {
    fn from(fields: HashMap<String, ReportValue>) -> Self {
        AdvertisementReport { fields }
    }
}

impl<K: Into<String>> FromIterator<(K, ReportValue)> for AdvertisementReport {
    fn from_iter<I: IntoIterator<Item = (K, ReportValue)>>(iter: I) -> Self {
        AdvertisementReport {
            fields: iter.into_iter().map(|(key, value)| (key.into(), value)).collect(),
        }
    }
}
