//! Tests for disconnecting a session

use glucose_host_tests::{init_logging, ScriptedMeter, CONTEXT, CONTROL_POINT, MEASUREMENT};
use glucose_session::{Error, GlucoseSession, SessionConfig};

async fn connected(meter: ScriptedMeter) -> GlucoseSession<ScriptedMeter> {
    init_logging();

    let mut session = GlucoseSession::new(meter, SessionConfig::default());

    session.connect().await.unwrap();

    session
}

#[tokio::test]
async fn disconnect_unsubscribes_first() {
    let mut session = connected(ScriptedMeter::new()).await;

    session.disconnect().await.unwrap();

    let meter = session.transport();

    assert_eq!(vec![MEASUREMENT, CONTEXT, CONTROL_POINT], meter.unsubscribed);
    assert_eq!(1, meter.disconnects);
    assert!(!session.is_connected());
}

#[tokio::test]
async fn disconnect_twice() {
    let mut session = connected(ScriptedMeter::new()).await;

    session.disconnect().await.unwrap();
    session.disconnect().await.unwrap();

    assert_eq!(1, session.transport().disconnects);
    assert_eq!(3, session.transport().unsubscribed.len());
}

#[tokio::test]
async fn disconnect_without_connecting() {
    init_logging();

    let mut session = GlucoseSession::new(ScriptedMeter::new(), SessionConfig::default());

    session.disconnect().await.unwrap();

    assert_eq!(0, session.transport().disconnects);
}

#[tokio::test]
async fn failed_unsubscribe_is_tolerated() {
    let mut session = connected(ScriptedMeter::new().refuse_unsubscribe(MEASUREMENT)).await;

    session.disconnect().await.unwrap();

    let meter = session.transport();

    // the remaining characteristics are still unsubscribed
    assert_eq!(vec![MEASUREMENT, CONTEXT, CONTROL_POINT], meter.unsubscribed);
    assert!(!meter.is_subscribed(CONTROL_POINT));
    assert_eq!(1, meter.disconnects);
    assert!(!session.is_connected());
}

#[tokio::test]
async fn commands_after_disconnect() {
    let mut session = connected(ScriptedMeter::new()).await;

    session.disconnect().await.unwrap();

    assert!(matches!(session.get_all_records().await, Err(Error::NotConnected)));
    assert!(matches!(session.get_device_info().await, Err(Error::NotConnected)));
}
