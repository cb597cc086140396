#![warn(missing_docs)]

//! Bleadv decodes [Bluetooth Low Energy] advertisement payloads for [Rust]. It turns the
//! loosely typed reports delivered by platform scan callbacks into strongly typed, comparable
//! snapshots.
//!
//! Scan callbacks hand applications a keyed bag of heterogeneous values bridged from the
//! platform's Bluetooth stack. Bleadv models that bag as a closed set of value shapes and
//! decodes each advertisement field independently, so one malformed field never hides the
//! rest of the advertisement.
//!
//! [Rust]: https://www.rust-lang.org/
//! [Bluetooth Low Energy]: https://www.bluetooth.com/specifications/specs/
//!
//! # Usage
//!
//! ```rust
//! use bleadv::report::keys;
//! use bleadv::{AdvertisementData, AdvertisementReport, ReportValue};
//!
//! let mut report = AdvertisementReport::new();
//! report.insert(keys::LOCAL_NAME, ReportValue::Text("Thermo".to_string()));
//! report.insert(
//!     keys::MANUFACTURER_DATA,
//!     ReportValue::Bytes(vec![0x4c, 0x00, 0x02, 0x15]),
//! );
//!
//! let data = AdvertisementData::from_report(&report);
//! assert_eq!(data.local_name.as_deref(), Some("Thermo"));
//! assert_eq!(data.manufacturer_data.as_ref().map(|m| m.company_id), Some(0x004c));
//! assert_eq!(data.tx_power_level, None);
//! ```
//!
//! # Overview
//!
//! The primary functions provided by Bleadv are:
//!
//! - Decoding [scan reports][AdvertisementReport] into typed [advertisement
//!   snapshots][AdvertisementData]
//! - Canonicalizing [Bluetooth UUIDs][BluetoothUuid] between their 16-bit, 32-bit, and
//!   128-bit representations
//! - Decoding and encoding [manufacturer specific data][ManufacturerData]
//!
//! # Decoding tolerance
//!
//! Every field of [`AdvertisementData`] is optional and decodes on a best-effort basis. A
//! field that is missing from the report, arrives in an unexpected shape, or fails to decode
//! is left `None` without affecting any other field. Absence is preserved rather than
//! papered over with defaults: a report that never said whether the peripheral is connectable
//! produces a snapshot distinguishable from one that said it is not.
//!
//! Snapshots compare structurally. UUID lists compare as sets and service data by key, so the
//! order collections were delivered in does not affect equality.
//!
//! # Feature flags
//!
//! The `serde` feature is available to enable serializing/deserializing the crate's data
//! types.
//!
//! # Examples
//!
//! An example demonstrating basic usage is available in the [demos folder].
//!
//! [demos folder]: https://github.com/bleadv/bleadv/tree/main/demos

pub mod btuuid;
pub mod error;
pub mod report;

mod advertisement;

pub use advertisement::{AdvertisementData, ManufacturerData};
pub use btuuid::BluetoothUuid;
pub use error::Error;
pub use report::{AdvertisementReport, ReportValue};
pub use uuid::Uuid;

/// Convenience alias for a result with [`Error`]
pub type Result<T, E = Error> = core::result::Result<T, E>;
