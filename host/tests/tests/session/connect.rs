//! Tests for connecting a session

use glucose_core::assigned;
use glucose_host_tests::{init_logging, ScriptedMeter, CONTEXT, CONTROL_POINT, MEASUREMENT};
use glucose_session::{Error, GlucoseSession, SessionConfig};
use std::time::Duration;

#[tokio::test]
async fn connect_subscribes() {
    init_logging();

    let mut session = GlucoseSession::new(ScriptedMeter::new(), SessionConfig::default());

    assert!(!session.is_connected());

    session.connect().await.unwrap();

    assert!(session.is_connected());

    let meter = session.transport();

    assert!(meter.is_subscribed(MEASUREMENT));
    assert!(meter.is_subscribed(CONTEXT));
    assert!(meter.is_subscribed(CONTROL_POINT));
}

#[tokio::test]
async fn meter_without_context() {
    init_logging();

    let mut session = GlucoseSession::new(ScriptedMeter::new().without_context(), SessionConfig::default());

    session.connect().await.unwrap();

    assert!(!session.transport().is_subscribed(CONTEXT));
    assert!(session.transport().is_subscribed(CONTROL_POINT));
}

#[tokio::test]
async fn connect_timeout() {
    init_logging();

    let mut session = GlucoseSession::new(ScriptedMeter::new().hang_on_connect(), SessionConfig::default());

    let timeout = Duration::from_millis(50);

    match session.connect_timeout(timeout).await {
        Err(Error::Timeout(t)) => assert_eq!(timeout, t),
        result => panic!("unexpected result {:?}", result),
    }

    assert!(!session.is_connected());
    assert!(matches!(session.get_record_count().await, Err(Error::NotConnected)));
}

#[tokio::test]
async fn scan_timeout() {
    init_logging();

    let config = SessionConfig {
        scan_timeout: Duration::from_millis(20),
        ..Default::default()
    };

    let mut session = GlucoseSession::new(ScriptedMeter::new().hang_on_discover(), config);

    match session.connect().await {
        Err(Error::Timeout(t)) => assert_eq!(Duration::from_millis(20), t),
        result => panic!("unexpected result {:?}", result),
    }

    // the meter was never connected so it is never disconnected
    assert_eq!(0, session.transport().disconnects);
}

#[tokio::test]
async fn reconnect() {
    init_logging();

    let mut session = GlucoseSession::new(ScriptedMeter::new(), SessionConfig::default());

    session.connect().await.unwrap();
    session.connect().await.unwrap();

    assert!(session.is_connected());
    assert_eq!(1, session.transport().disconnects);
    assert_eq!(3, session.transport().unsubscribed.len());
}

#[tokio::test]
async fn missing_control_point() {
    init_logging();

    let meter = ScriptedMeter::new().without_characteristic(CONTROL_POINT);

    let mut session = GlucoseSession::new(meter, SessionConfig::default());

    match session.connect().await {
        Err(Error::MissingCharacteristic(uuid)) => assert_eq!(assigned::RECORD_ACCESS_CONTROL_POINT, uuid),
        result => panic!("unexpected result {:?}", result),
    }

    // the half formed connection is closed
    assert!(!session.is_connected());
    assert_eq!(1, session.transport().disconnects);
}
