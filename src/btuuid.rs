//! Bluetooth UUIDs in their 16-bit, 32-bit, and 128-bit representations

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::error::{Error, ErrorKind};

/// This is the Bluetooth Base UUID. It is used with 16-bit and 32-bit UUIDs
/// [defined](https://www.bluetooth.com/specifications/assigned-numbers/) by the Bluetooth SIG.
pub const BLUETOOTH_BASE_UUID: u128 = 0x00000000_0000_1000_8000_00805f9b34fb;

/// A Bluetooth UUID in its shortest standard representation.
///
/// The Bluetooth SIG assigns 16-bit and 32-bit UUIDs which abbreviate the full 128-bit value
/// formed by shifting them left 96 bits into [`BLUETOOTH_BASE_UUID`]. The canonicalizing
/// constructors ([`from_uuid`][Self::from_uuid] and [`from_bytes`][Self::from_bytes]) collapse
/// any 128-bit value in that range to the shortest form, so two UUIDs compare equal exactly
/// when they identify the same assigned number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BluetoothUuid {
    /// A 16-bit SIG-assigned UUID
    U16(u16),
    /// A 32-bit SIG-assigned UUID
    U32(u32),
    /// A full 128-bit UUID outside the Base UUID range
    U128(Uuid),
}

impl BluetoothUuid {
    /// Creates a Bluetooth UUID from a 16-bit SIG-assigned value
    pub const fn from_u16(uuid: u16) -> Self {
        BluetoothUuid::U16(uuid)
    }

    /// Creates a Bluetooth UUID from a 32-bit SIG-assigned value
    pub const fn from_u32(uuid: u32) -> Self {
        BluetoothUuid::U32(uuid)
    }

    /// Creates a Bluetooth UUID from the 16-byte big-endian layout used by platform scan
    /// results, collapsing values in the Base UUID range to their shortest form.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self::from_uuid(Uuid::from_bytes(bytes))
    }

    /// Creates a Bluetooth UUID from `uuid`, collapsing values in the Base UUID range to their
    /// shortest form.
    pub fn from_uuid(uuid: Uuid) -> Self {
        let value = uuid.as_u128();
        if (value & ((1 << 96) - 1)) != BLUETOOTH_BASE_UUID {
            return BluetoothUuid::U128(uuid);
        }

        let short = (value >> 96) as u32;
        if short & 0xffff_0000 == 0 {
            BluetoothUuid::U16(short as u16)
        } else {
            BluetoothUuid::U32(short)
        }
    }

    /// Returns the full 128-bit value of self, expanding short UUIDs into the Base UUID
    pub const fn as_u128(&self) -> u128 {
        match *self {
            BluetoothUuid::U16(uuid) => ((uuid as u128) << 96) | BLUETOOTH_BASE_UUID,
            BluetoothUuid::U32(uuid) => ((uuid as u128) << 96) | BLUETOOTH_BASE_UUID,
            BluetoothUuid::U128(uuid) => uuid.as_u128(),
        }
    }

    /// Converts self into a [`Uuid`], expanding short UUIDs into the Base UUID
    pub const fn to_uuid(&self) -> Uuid {
        Uuid::from_u128(self.as_u128())
    }

    /// Returns `true` if self is a 16-bit Bluetooth UUID
    pub const fn is_u16(&self) -> bool {
        matches!(self, BluetoothUuid::U16(_))
    }

    /// Returns `true` if self is representable as a 32-bit Bluetooth UUID
    pub const fn is_u32(&self) -> bool {
        matches!(self, BluetoothUuid::U16(_) | BluetoothUuid::U32(_))
    }

    /// Tries to convert self into a 16-bit Bluetooth UUID
    pub const fn try_to_u16(&self) -> Option<u16> {
        match *self {
            BluetoothUuid::U16(uuid) => Some(uuid),
            _ => None,
        }
    }

    /// Tries to convert self into a 32-bit Bluetooth UUID
    pub const fn try_to_u32(&self) -> Option<u32> {
        match *self {
            BluetoothUuid::U16(uuid) => Some(uuid as u32),
            BluetoothUuid::U32(uuid) => Some(uuid),
            BluetoothUuid::U128(_) => None,
        }
    }
}

impl From<BluetoothUuid> for Uuid {
    fn from(uuid: BluetoothUuid) -> Self {
        uuid.to_uuid()
    }
}

impl From<Uuid> for BluetoothUuid {
    fn from(uuid: Uuid) -> Self {
        BluetoothUuid::from_uuid(uuid)
    }
}

impl fmt::Display for BluetoothUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BluetoothUuid::U16(uuid) => write!(f, "{:04X}", uuid),
            BluetoothUuid::U32(uuid) => write!(f, "{:08X}", uuid),
            BluetoothUuid::U128(uuid) => fmt::Display::fmt(uuid, f),
        }
    }
}

impl FromStr for BluetoothUuid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.len() {
            4 if s.bytes().all(|b| b.is_ascii_hexdigit()) => u16::from_str_radix(s, 16)
                .map(BluetoothUuid::U16)
                .map_err(|err| {
                    Error::new(
                        ErrorKind::InvalidFormat,
                        Some(Box::new(err)),
                        format!("`{}` is not a 16-bit Bluetooth UUID", s),
                    )
                }),
            8 if s.bytes().all(|b| b.is_ascii_hexdigit()) => u32::from_str_radix(s, 16)
                .map(BluetoothUuid::U32)
                .map_err(|err| {
                    Error::new(
                        ErrorKind::InvalidFormat,
                        Some(Box::new(err)),
                        format!("`{}` is not a 32-bit Bluetooth UUID", s),
                    )
                }),
            _ => Uuid::parse_str(s).map(Self::from_uuid).map_err(|err| {
                Error::new(
                    ErrorKind::InvalidFormat,
                    Some(Box::new(err)),
                    format!("`{}` is not a Bluetooth UUID", s),
                )
            }),
        }
    }
}

/// Converts a big-endian byte slice in any of the three standard lengths (2, 4, or 16 bytes)
/// into a Bluetooth UUID.
impl TryFrom<&[u8]> for BluetoothUuid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes.len() {
            2 => Ok(BluetoothUuid::U16(u16::from_be_bytes(
                bytes.try_into().unwrap(),
            ))),
            4 => Ok(BluetoothUuid::U32(u32::from_be_bytes(
                bytes.try_into().unwrap(),
            ))),
            16 => Ok(BluetoothUuid::from_bytes(bytes.try_into().unwrap())),
            len => Err(Error::new(
                ErrorKind::InvalidLength,
                None,
                format!("{} bytes is not a Bluetooth UUID", len),
            )),
        }
    }
}

/// Bluetooth GATT Service 16-bit UUIDs
pub mod services {
    #![allow(missing_docs)]

    use super::BluetoothUuid;

    pub const GENERIC_ACCESS: BluetoothUuid = BluetoothUuid::from_u16(0x1800);
    pub const GENERIC_ATTRIBUTE: BluetoothUuid = BluetoothUuid::from_u16(0x1801);
    pub const IMMEDIATE_ALERT: BluetoothUuid = BluetoothUuid::from_u16(0x1802);
    pub const LINK_LOSS: BluetoothUuid = BluetoothUuid::from_u16(0x1803);
    pub const TX_POWER: BluetoothUuid = BluetoothUuid::from_u16(0x1804);
    pub const CURRENT_TIME: BluetoothUuid = BluetoothUuid::from_u16(0x1805);
    pub const GLUCOSE: BluetoothUuid = BluetoothUuid::from_u16(0x1808);
    pub const HEALTH_THERMOMETER: BluetoothUuid = BluetoothUuid::from_u16(0x1809);
    pub const DEVICE_INFORMATION: BluetoothUuid = BluetoothUuid::from_u16(0x180A);
    pub const HEART_RATE: BluetoothUuid = BluetoothUuid::from_u16(0x180D);
    pub const BATTERY: BluetoothUuid = BluetoothUuid::from_u16(0x180F);
    pub const BLOOD_PRESSURE: BluetoothUuid = BluetoothUuid::from_u16(0x1810);
    pub const ALERT_NOTIFICATION: BluetoothUuid = BluetoothUuid::from_u16(0x1811);
    pub const HUMAN_INTERFACE_DEVICE: BluetoothUuid = BluetoothUuid::from_u16(0x1812);
    pub const RUNNING_SPEED_AND_CADENCE: BluetoothUuid = BluetoothUuid::from_u16(0x1814);
    pub const CYCLING_SPEED_AND_CADENCE: BluetoothUuid = BluetoothUuid::from_u16(0x1816);
    pub const CYCLING_POWER: BluetoothUuid = BluetoothUuid::from_u16(0x1818);
    pub const LOCATION_AND_NAVIGATION: BluetoothUuid = BluetoothUuid::from_u16(0x1819);
    pub const ENVIRONMENTAL_SENSING: BluetoothUuid = BluetoothUuid::from_u16(0x181A);
    pub const BODY_COMPOSITION: BluetoothUuid = BluetoothUuid::from_u16(0x181B);
    pub const USER_DATA: BluetoothUuid = BluetoothUuid::from_u16(0x181C);
    pub const WEIGHT_SCALE: BluetoothUuid = BluetoothUuid::from_u16(0x181D);
    pub const BOND_MANAGEMENT: BluetoothUuid = BluetoothUuid::from_u16(0x181E);
    pub const CONTINUOUS_GLUCOSE_MONITORING: BluetoothUuid = BluetoothUuid::from_u16(0x181F);
    pub const INTERNET_PROTOCOL_SUPPORT: BluetoothUuid = BluetoothUuid::from_u16(0x1820);
    pub const PULSE_OXIMETER: BluetoothUuid = BluetoothUuid::from_u16(0x1822);
    pub const FITNESS_MACHINE: BluetoothUuid = BluetoothUuid::from_u16(0x1826);
    pub const MESH_PROVISIONING: BluetoothUuid = BluetoothUuid::from_u16(0x1827);
    pub const MESH_PROXY: BluetoothUuid = BluetoothUuid::from_u16(0x1828);
    pub const INSULIN_DELIVERY: BluetoothUuid = BluetoothUuid::from_u16(0x183A);
    pub const HEARING_ACCESS: BluetoothUuid = BluetoothUuid::from_u16(0x1854);
}
