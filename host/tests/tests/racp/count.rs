//! Tests for the number of stored records request

use glucose_host_tests::{init_logging, measurement, Notification, ScriptedMeter};
use glucose_racp::{Filter, ProtocolError, State};
use glucose_session::{Error, GlucoseSession, SessionConfig, SessionEvent};

fn number_of_records(count: u16) -> Notification {
    let [lo, hi] = count.to_le_bytes();

    Notification::control_point(vec![0x05, 0x00, lo, hi])
}

async fn connected(meter: ScriptedMeter) -> GlucoseSession<ScriptedMeter> {
    init_logging();

    let mut session = GlucoseSession::new(meter, SessionConfig::default());

    session.connect().await.unwrap();

    session
}

#[tokio::test]
async fn count_all() {
    let mut session = connected(ScriptedMeter::new().reply(vec![number_of_records(42)])).await;

    let mut events = session.take_event_receiver().unwrap();

    assert_eq!(42, session.get_record_count().await.unwrap());

    assert_eq!(vec![vec![0x04, 0x01]], session.transport().writes);
    assert_eq!(SessionEvent::Count(42), events.try_recv().unwrap());
    assert!(events.try_recv().is_err());
    assert_eq!(State::Idle, session.racp_state());
}

#[tokio::test]
async fn count_since() {
    let mut session = connected(ScriptedMeter::new().reply(vec![number_of_records(3)])).await;

    assert_eq!(3, session.get_record_count_since(0x0102).await.unwrap());

    assert_eq!(vec![vec![0x04, 0x03, 0x01, 0x02, 0x01]], session.transport().writes);
}

#[tokio::test]
async fn count_within_range() {
    let mut session = connected(ScriptedMeter::new().reply(vec![number_of_records(11)])).await;

    assert_eq!(11, session.get_record_count_with(Filter::WithinRange(10, 20)).await.unwrap());

    assert_eq!(
        vec![vec![0x04, 0x04, 0x01, 0x0A, 0x00, 0x14, 0x00]],
        session.transport().writes
    );
}

#[tokio::test]
async fn consecutive_requests() {
    let meter = ScriptedMeter::new()
        .reply(vec![number_of_records(1)])
        .reply(vec![
            Notification::measurement(measurement(1, 0xB078)),
            Notification::control_point(vec![0x06, 0x00, 0x01, 0x01]),
        ])
        .reply(vec![number_of_records(1)]);

    let mut session = connected(meter).await;

    let mut events = session.take_event_receiver().unwrap();

    assert_eq!(1, session.get_record_count().await.unwrap());
    assert_eq!(1, session.get_all_records().await.unwrap().measurements.len());
    assert_eq!(1, session.get_record_count().await.unwrap());

    assert!(matches!(events.try_recv(), Ok(SessionEvent::Count(1))));
    assert!(matches!(events.try_recv(), Ok(SessionEvent::Data(_))));
    assert!(matches!(events.try_recv(), Ok(SessionEvent::Count(1))));
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn truncated_count() {
    let meter = ScriptedMeter::new().reply(vec![Notification::control_point(vec![0x05, 0x00, 0x2A])]);

    let mut session = connected(meter).await;

    assert!(matches!(
        session.get_record_count().await,
        Err(Error::Protocol(ProtocolError::Truncated(3)))
    ));
}

#[tokio::test]
async fn unsolicited_count_is_ignored() {
    let meter = ScriptedMeter::new().reply(vec![number_of_records(5)]);

    let mut session = connected(meter).await;

    let mut events = session.take_event_receiver().unwrap();

    session.transport_mut().notify(number_of_records(99));

    assert_eq!(5, session.get_record_count().await.unwrap());
    assert_eq!(SessionEvent::Count(5), events.try_recv().unwrap());
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn count_answered_with_response_code() {
    let meter = ScriptedMeter::new().reply(vec![Notification::control_point(vec![0x06, 0x00, 0x01, 0x01])]);

    let mut session = connected(meter).await;

    let mut events = session.take_event_receiver().unwrap();

    assert!(matches!(
        session.get_record_count().await,
        Err(Error::Protocol(ProtocolError::UnexpectedOpCode(_)))
    ));

    // a failed count is not reported as data
    assert!(events.try_recv().is_err());
    assert_eq!(State::Failed, session.racp_state());
}
