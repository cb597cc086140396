use std::collections::HashMap;

use bleadv::report::keys;
use bleadv::{AdvertisementData, AdvertisementReport, BluetoothUuid, ReportValue};
use tracing::{info, metadata::LevelFilter};

fn main() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // the kind of report a scan callback delivers for an iBeacon with a battery service
    let battery = BluetoothUuid::from_u16(0x180f);
    let mut report = AdvertisementReport::new();
    report.insert(keys::LOCAL_NAME, ReportValue::Text("Thermo".to_string()));
    report.insert(
        keys::MANUFACTURER_DATA,
        ReportValue::Bytes(vec![
            0x4c, 0x00, 0x02, 0x15, 0xf7, 0x82, 0x6d, 0xa6, 0x4f, 0xa2, 0x4e, 0x98, 0x80, 0x24,
            0xbc, 0x5b, 0x71, 0xe0, 0x89, 0x3e, 0x00, 0x01, 0x00, 0x02, 0xc5,
        ]),
    );
    report.insert(
        keys::SERVICE_DATA,
        ReportValue::UuidMap(HashMap::from([(*battery.to_uuid().as_bytes(), vec![0x64])])),
    );
    report.insert(
        keys::SERVICE_UUIDS,
        ReportValue::Uuids(vec![*battery.to_uuid().as_bytes()]),
    );
    report.insert(keys::TX_POWER_LEVEL, ReportValue::Number(-4.0));
    report.insert(keys::IS_CONNECTABLE, ReportValue::Number(1.0));
    // a key this decoder does not model
    report.insert("kCBAdvDataTimestamp", ReportValue::Number(714234605.0));

    let data = AdvertisementData::from_report(&report);
    info!("decoded advertisement: {:?}", data);

    if let Some(manufacturer_data) = &data.manufacturer_data {
        info!(
            "manufacturer 0x{:04x} sent {} bytes",
            manufacturer_data.company_id,
            manufacturer_data.data.len()
        );
    }

    if let Some(uuids) = &data.service_uuids {
        for uuid in uuids {
            info!("advertises service {}", uuid);
        }
    }
}
