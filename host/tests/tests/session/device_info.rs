//! Tests for reading the device information and the glucose features

use glucose_core::assigned;
use glucose_host_tests::{init_logging, ScriptedMeter, FEATURE};
use glucose_records::GlucoseFeatures;
use glucose_session::{Error, GlucoseSession, SessionConfig};

async fn connected(meter: ScriptedMeter) -> GlucoseSession<ScriptedMeter> {
    init_logging();

    let mut session = GlucoseSession::new(meter, SessionConfig::default());

    session.connect().await.unwrap();

    session
}

#[tokio::test]
async fn device_info() {
    let mut session = connected(ScriptedMeter::new()).await;

    let info = session.get_device_info().await.unwrap();

    assert_eq!(vec!["Glucose Co.", "Glucose Company Ltd"], info.manufacturer);
    assert_eq!("GM-100", info.model);
    assert_eq!(Some("SN0042".to_string()), info.serial_number);
    assert_eq!(None, info.firmware_revision);
}

#[tokio::test]
async fn missing_model() {
    let mut session = connected(ScriptedMeter::new().without_model()).await;

    let info = session.get_device_info().await.unwrap();

    assert_eq!("", info.model);
    assert_eq!(2, info.manufacturer.len());
}

#[tokio::test]
async fn missing_device_information() {
    let mut session = connected(ScriptedMeter::new().without_device_information()).await;

    match session.get_device_info().await {
        Err(Error::MissingService(uuid)) => assert_eq!(assigned::DEVICE_INFORMATION_SERVICE, uuid),
        result => panic!("unexpected result {:?}", result),
    }
}

#[tokio::test]
async fn features() {
    let mut session = connected(ScriptedMeter::new()).await;

    let features = session.get_features().await.unwrap();

    assert!(features.contains(GlucoseFeatures::LOW_BATTERY_DETECTION | GlucoseFeatures::MULTIPLE_BOND));
    assert!(!features.contains(GlucoseFeatures::TIME_FAULT));
}

#[tokio::test]
async fn missing_features() {
    let mut session = connected(ScriptedMeter::new().without_characteristic(FEATURE)).await;

    assert!(matches!(
        session.get_features().await,
        Err(Error::MissingCharacteristic(uuid)) if uuid == assigned::GLUCOSE_FEATURE
    ));
}
