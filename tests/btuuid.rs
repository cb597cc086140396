use bleadv::btuuid::{self, BLUETOOTH_BASE_UUID};
use bleadv::error::ErrorKind;
use bleadv::{BluetoothUuid, Uuid};

#[test]
fn base_uuid_matches_the_assigned_numbers_document() {
    assert_eq!(
        Uuid::from_u128(BLUETOOTH_BASE_UUID).to_string(),
        "00000000-0000-1000-8000-00805f9b34fb"
    );
}

#[test]
fn u16_expansion_fills_the_base_template() {
    let uuid = BluetoothUuid::from_u16(0x180d);
    assert_eq!(uuid.as_u128(), 0x0000180d_0000_1000_8000_00805f9b34fb);
    assert_eq!(
        uuid.to_uuid(),
        Uuid::from_u128(0x0000180d_0000_1000_8000_00805f9b34fb)
    );
}

#[test]
fn every_u16_value_collapses_back_to_its_short_form() {
    for short in 0..=u16::MAX {
        let full = Uuid::from_u128(((short as u128) << 96) | BLUETOOTH_BASE_UUID);
        assert_eq!(BluetoothUuid::from_uuid(full), BluetoothUuid::U16(short));
    }
}

#[test]
fn collapse_picks_u16_or_u32_at_the_width_boundary() {
    let full = |value: u32| Uuid::from_u128(((value as u128) << 96) | BLUETOOTH_BASE_UUID);
    assert_eq!(BluetoothUuid::from_uuid(full(0x0000ffff)), BluetoothUuid::U16(0xffff));
    assert_eq!(BluetoothUuid::from_uuid(full(0x00010000)), BluetoothUuid::U32(0x00010000));
    assert_eq!(BluetoothUuid::from_uuid(full(0xffffffff)), BluetoothUuid::U32(0xffffffff));
}

#[test]
fn u32_values_collapse_round_trip() {
    for value in [0x00010000_u32, 0x0001ffff, 0x12345678, 0xdeadbeef, 0xffffffff] {
        let uuid = BluetoothUuid::from_u32(value);
        assert_eq!(BluetoothUuid::from_uuid(uuid.to_uuid()), uuid);
        assert_eq!(uuid.as_u128(), ((value as u128) << 96) | BLUETOOTH_BASE_UUID);
    }
}

#[test]
fn base_uuid_itself_collapses_to_u16_zero() {
    assert_eq!(
        BluetoothUuid::from_uuid(Uuid::from_u128(BLUETOOTH_BASE_UUID)),
        BluetoothUuid::U16(0)
    );
}

#[test]
fn uuids_outside_the_base_range_stay_full_length() {
    // Nordic UART service
    let uuid = Uuid::from_u128(0x6e400001_b5a3_f393_e0a9_e50e24dcca9e);
    assert_eq!(BluetoothUuid::from_uuid(uuid), BluetoothUuid::U128(uuid));

    // one bit off the base pattern in the low 96 bits
    let near_miss = Uuid::from_u128((0x180d_u128 << 96) | (BLUETOOTH_BASE_UUID ^ 1));
    assert_eq!(BluetoothUuid::from_uuid(near_miss), BluetoothUuid::U128(near_miss));
}

#[test]
fn from_bytes_reads_the_big_endian_layout() {
    let mut bytes = [0u8; 16];
    bytes[..4].copy_from_slice(&0x0000180d_u32.to_be_bytes());
    bytes[4..].copy_from_slice(&[
        0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0x80, 0x5f, 0x9b, 0x34, 0xfb,
    ]);
    assert_eq!(BluetoothUuid::from_bytes(bytes), BluetoothUuid::U16(0x180d));
}

#[test]
fn displays_each_representation_in_its_standard_width() {
    assert_eq!(BluetoothUuid::from_u16(0x180d).to_string(), "180D");
    assert_eq!(BluetoothUuid::from_u32(0x1234abcd).to_string(), "1234ABCD");

    let uuid = Uuid::from_u128(0x6e400001_b5a3_f393_e0a9_e50e24dcca9e);
    assert_eq!(
        BluetoothUuid::from_uuid(uuid).to_string(),
        "6e400001-b5a3-f393-e0a9-e50e24dcca9e"
    );
}

#[test]
fn parses_strings_into_the_matching_representation() {
    assert_eq!("180D".parse::<BluetoothUuid>().unwrap(), BluetoothUuid::U16(0x180d));
    assert_eq!("180d".parse::<BluetoothUuid>().unwrap(), BluetoothUuid::U16(0x180d));
    assert_eq!(
        "1234ABCD".parse::<BluetoothUuid>().unwrap(),
        BluetoothUuid::U32(0x1234abcd)
    );
    assert_eq!(
        "6e400001-b5a3-f393-e0a9-e50e24dcca9e".parse::<BluetoothUuid>().unwrap(),
        BluetoothUuid::U128(Uuid::from_u128(0x6e400001_b5a3_f393_e0a9_e50e24dcca9e))
    );

    // full-length strings in the base range collapse like any other 128-bit value
    assert_eq!(
        "0000180d-0000-1000-8000-00805f9b34fb".parse::<BluetoothUuid>().unwrap(),
        BluetoothUuid::U16(0x180d)
    );
}

#[test]
fn rejects_strings_that_are_not_uuids() {
    assert!("".parse::<BluetoothUuid>().is_err());
    assert!("garbage".parse::<BluetoothUuid>().is_err());
    assert!("18zz".parse::<BluetoothUuid>().is_err());
    assert_eq!(
        "18zz".parse::<BluetoothUuid>().unwrap_err().kind(),
        ErrorKind::InvalidFormat
    );
}

#[test]
fn converts_big_endian_slices_of_each_standard_length() {
    assert_eq!(
        BluetoothUuid::try_from([0x18, 0x0d].as_slice()).unwrap(),
        BluetoothUuid::U16(0x180d)
    );
    assert_eq!(
        BluetoothUuid::try_from([0x12, 0x34, 0xab, 0xcd].as_slice()).unwrap(),
        BluetoothUuid::U32(0x1234abcd)
    );

    let full = BluetoothUuid::from_u16(0x180d).to_uuid();
    assert_eq!(
        BluetoothUuid::try_from(full.as_bytes().as_slice()).unwrap(),
        BluetoothUuid::U16(0x180d)
    );

    let err = BluetoothUuid::try_from([0u8; 3].as_slice()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidLength);
}

#[test]
fn short_forms_widen_but_never_narrow() {
    assert_eq!(BluetoothUuid::from_u16(0x180d).try_to_u16(), Some(0x180d));
    assert_eq!(BluetoothUuid::from_u16(0x180d).try_to_u32(), Some(0x180d));
    assert_eq!(BluetoothUuid::from_u32(0x00010000).try_to_u16(), None);
    assert_eq!(BluetoothUuid::from_u32(0x00010000).try_to_u32(), Some(0x00010000));

    let uuid = BluetoothUuid::from_uuid(Uuid::from_u128(0x6e400001_b5a3_f393_e0a9_e50e24dcca9e));
    assert!(!uuid.is_u16());
    assert!(!uuid.is_u32());
    assert_eq!(uuid.try_to_u16(), None);
    assert_eq!(uuid.try_to_u32(), None);
}

#[test]
fn derived_ordering_groups_by_representation_width() {
    let mut uuids = vec![
        BluetoothUuid::from_uuid(Uuid::from_u128(0x6e400001_b5a3_f393_e0a9_e50e24dcca9e)),
        BluetoothUuid::from_u32(0x00010000),
        BluetoothUuid::from_u16(0x180d),
        BluetoothUuid::from_u16(0x1800),
    ];
    uuids.sort();
    assert_eq!(
        uuids,
        vec![
            BluetoothUuid::U16(0x1800),
            BluetoothUuid::U16(0x180d),
            BluetoothUuid::U32(0x00010000),
            BluetoothUuid::U128(Uuid::from_u128(0x6e400001_b5a3_f393_e0a9_e50e24dcca9e)),
        ]
    );
}

#[test]
fn service_constants_are_the_assigned_numbers() {
    assert_eq!(btuuid::services::HEART_RATE, BluetoothUuid::from_u16(0x180d));
    assert_eq!(btuuid::services::BATTERY.try_to_u16(), Some(0x180f));
}
