use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::btuuid::BluetoothUuid;
use crate::report::{keys, AdvertisementReport, ReportValue};

/// Manufacturer specific data included in Bluetooth advertisements. See the Bluetooth Core
/// Specification Supplement §A.1.4 for details.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManufacturerData {
    /// Company identifier (defined [here](https://www.bluetooth.com/specifications/assigned-numbers/company-identifiers/))
    pub company_id: u16,
    /// Manufacturer specific data
    pub data: Vec<u8>,
}

impl ManufacturerData {
    /// Decodes the standard wire layout, a little-endian company identifier followed by the
    /// manufacturer's payload.
    ///
    /// Returns `None` if `bytes` is too short to carry the identifier. The payload may be
    /// empty.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        (bytes.len() >= 2).then(|| ManufacturerData {
            company_id: u16::from_le_bytes(bytes[0..2].try_into().unwrap()),
            data: bytes[2..].to_vec(),
        })
    }

    /// Encodes self back into the standard wire layout
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(2 + self.data.len());
        bytes.extend_from_slice(&self.company_id.to_le_bytes());
        bytes.extend_from_slice(&self.data);
        bytes
    }
}

/// A snapshot of the fields carried by a single advertisement.
///
/// Every field is optional. A field is `None` when the report omitted it or delivered it in a
/// shape the builder did not recognize, so an absent flag is distinguishable from a false one
/// and an absent UUID list from an empty one.
///
/// UUID lists are held as sets and service data as a map, so two snapshots compare equal
/// regardless of the order the platform delivered those collections in.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvertisementData {
    /// The (possibly shortened) local name of the device (CSS §A.1.2)
    pub local_name: Option<String>,
    /// Manufacturer specific data (CSS §A.1.4)
    pub manufacturer_data: Option<ManufacturerData>,
    /// Service associated data (CSS §A.1.11)
    pub service_data: Option<HashMap<BluetoothUuid, Vec<u8>>>,
    /// Advertised GATT service UUIDs (CSS §A.1.1)
    pub service_uuids: Option<HashSet<BluetoothUuid>>,
    /// Service UUIDs that did not fit in the advertisement and were carried in the overflow
    /// area instead
    pub overflow_service_uuids: Option<HashSet<BluetoothUuid>>,
    /// Service UUIDs the peripheral solicits from centrals (CSS §A.1.10)
    pub solicited_service_uuids: Option<HashSet<BluetoothUuid>>,
    /// Transmitted power level in dBm (CSS §A.1.5)
    pub tx_power_level: Option<f64>,
    /// Set to true for connectable advertising packets
    pub is_connectable: Option<bool>,
    // flags, appearance, peripheral connection interval range, uri
}

impl AdvertisementData {
    /// Builds a snapshot from a scan report.
    ///
    /// Each field is decoded independently. A field that is missing, has an unexpected shape,
    /// or fails to decode is left `None` without affecting any other field, so this never
    /// fails as a whole.
    pub fn from_report(report: &AdvertisementReport) -> Self {
        let local_name =
            shaped_field(report, keys::LOCAL_NAME, |val| val.as_text().map(str::to_owned));

        let manufacturer_data = shaped_field(report, keys::MANUFACTURER_DATA, ReportValue::as_bytes)
            .and_then(|bytes| {
                let decoded = ManufacturerData::from_bytes(bytes);
                if decoded.is_none() {
                    debug!("ignoring manufacturer data of {} bytes", bytes.len());
                }
                decoded
            });

        let service_data =
            shaped_field(report, keys::SERVICE_DATA, ReportValue::as_uuid_map).map(|map| {
                map.iter()
                    .map(|(uuid, data)| (BluetoothUuid::from_bytes(*uuid), data.clone()))
                    .collect()
            });

        let service_uuids =
            shaped_field(report, keys::SERVICE_UUIDS, ReportValue::as_uuids).map(uuid_set);

        let overflow_service_uuids =
            shaped_field(report, keys::OVERFLOW_SERVICE_UUIDS, ReportValue::as_uuids).map(uuid_set);

        let solicited_service_uuids =
            shaped_field(report, keys::SOLICITED_SERVICE_UUIDS, ReportValue::as_uuids).map(uuid_set);

        let tx_power_level = shaped_field(report, keys::TX_POWER_LEVEL, ReportValue::as_number);

        let is_connectable = shaped_field(report, keys::IS_CONNECTABLE, ReportValue::as_bool);

        AdvertisementData {
            local_name,
            manufacturer_data,
            service_data,
            service_uuids,
            overflow_service_uuids,
            solicited_service_uuids,
            tx_power_level,
            is_connectable,
        }
    }
}

impl From<&AdvertisementReport> for AdvertisementData {
    fn from(report: &AdvertisementReport) -> Self {
        AdvertisementData::from_report(report)
    }
}

fn shaped_field<'a, T>(
    report: &'a AdvertisementReport,
    key: &str,
    shape: impl FnOnce(&'a ReportValue) -> Option<T>,
) -> Option<T> {
    let value = report.get(key)?;
    let shaped = shape(value);
    if shaped.is_none() {
        debug!("ignoring advertisement field {} with unexpected shape", key);
    }
    shaped
}

fn uuid_set(uuids: &[[u8; 16]]) -> HashSet<BluetoothUuid> {
    uuids.iter().copied().map(BluetoothUuid::from_bytes).collect()
}
