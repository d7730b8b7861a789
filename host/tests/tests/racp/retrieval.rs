//! Tests for retrieving records through the Record Access Control Point

use glucose_host_tests::{init_logging, meal_context, measurement, Notification, ScriptedMeter, CONTEXT};
use glucose_racp::{Filter, ProtocolError, State};
use glucose_records::codes::Meal;
use glucose_session::{Error, GlucoseSession, SessionConfig, SessionEvent};
use std::time::Duration;

const SUCCESS: [u8; 4] = [0x06, 0x00, 0x01, 0x01];
const NO_RECORDS: [u8; 4] = [0x06, 0x00, 0x01, 0x06];

async fn connected(meter: ScriptedMeter) -> GlucoseSession<ScriptedMeter> {
    init_logging();

    let mut session = GlucoseSession::new(meter, SessionConfig::default());

    session.connect().await.unwrap();

    session
}

fn sequence_numbers(session_event: &SessionEvent) -> Vec<u16> {
    match session_event {
        SessionEvent::Data(records) => records.measurements.iter().map(|m| m.sequence_number).collect(),
        event => panic!("unexpected event {:?}", event),
    }
}

#[tokio::test]
async fn all_records_in_arrival_order() {
    let meter = ScriptedMeter::new().reply(vec![
        Notification::measurement(measurement(3, 0xB078)),
        Notification::measurement(measurement(1, 0xB064)),
        Notification::measurement(measurement(2, 0xB05A)),
        Notification::control_point(SUCCESS.to_vec()),
    ]);

    let mut session = connected(meter).await;

    let mut events = session.take_event_receiver().unwrap();

    let records = session.get_all_records().await.unwrap();

    assert_eq!(vec![vec![0x01, 0x01]], session.transport().writes);

    let values: Vec<_> = records
        .measurements
        .iter()
        .map(|m| m.concentration.unwrap().value)
        .collect();

    assert_eq!(vec![120.0, 100.0, 90.0], values);

    // exactly one data event for the retrieval
    let event = events.try_recv().unwrap();

    assert_eq!(vec![3, 1, 2], sequence_numbers(&event));
    assert!(events.try_recv().is_err());

    assert_eq!(State::Idle, session.racp_state());
}

#[tokio::test]
async fn repeated_measurement_is_dropped() {
    let meter = ScriptedMeter::new().reply(vec![
        Notification::measurement(measurement(1, 0xB078)),
        Notification::measurement(measurement(1, 0xB078)),
        Notification::measurement(measurement(2, 0xB078)),
        Notification::measurement(measurement(1, 0xB078)),
        Notification::control_point(SUCCESS.to_vec()),
    ]);

    let mut session = connected(meter).await;

    let records = session.get_all_records().await.unwrap();

    let sequence_numbers: Vec<_> = records.measurements.iter().map(|m| m.sequence_number).collect();

    assert_eq!(vec![1, 2, 1], sequence_numbers);
}

#[tokio::test]
async fn records_with_context() {
    let meter = ScriptedMeter::new().reply(vec![
        Notification::measurement(measurement(7, 0xB078)),
        Notification::context(meal_context(7, 0x01)),
        Notification::measurement(measurement(8, 0xB078)),
        Notification::control_point(SUCCESS.to_vec()),
    ]);

    let mut session = connected(meter).await;

    assert!(session.transport().is_subscribed(CONTEXT));

    let records = session.get_records_since(7).await.unwrap();

    assert_eq!(vec![vec![0x01, 0x03, 0x01, 0x07, 0x00]], session.transport().writes);

    assert_eq!(
        Some(Meal::Preprandial),
        records.context_for(7).and_then(|context| context.meal)
    );
    assert!(records.context_for(8).is_none());
    assert_eq!(2, records.paired().count());
}

#[tokio::test]
async fn context_not_subscribed() {
    init_logging();

    let config = SessionConfig {
        subscribe_context: false,
        ..Default::default()
    };

    let meter = ScriptedMeter::new().reply(vec![
        Notification::measurement(measurement(7, 0xB078)),
        Notification::context(meal_context(7, 0x01)),
        Notification::control_point(SUCCESS.to_vec()),
    ]);

    let mut session = GlucoseSession::new(meter, config);

    session.connect().await.unwrap();

    assert!(!session.transport().is_subscribed(CONTEXT));

    let records = session.get_all_records().await.unwrap();

    assert_eq!(1, records.measurements.len());
    assert!(records.contexts.is_empty());
}

#[tokio::test]
async fn no_records_found() {
    let meter = ScriptedMeter::new().reply(vec![Notification::control_point(NO_RECORDS.to_vec())]);

    let mut session = connected(meter).await;

    let mut events = session.take_event_receiver().unwrap();

    let records = session.get_records_since(100).await.unwrap();

    assert!(records.is_empty());
    assert!(records.contexts.is_empty());
    assert_eq!(Vec::<u16>::new(), sequence_numbers(&events.try_recv().unwrap()));
}

#[tokio::test]
async fn filtered_records() {
    let meter = ScriptedMeter::new().reply(vec![
        Notification::measurement(measurement(5, 0xB078)),
        Notification::control_point(SUCCESS.to_vec()),
    ]);

    let mut session = connected(meter).await;

    let records = session.get_records_with(Filter::Last).await.unwrap();

    assert_eq!(vec![vec![0x01, 0x06]], session.transport().writes);
    assert_eq!(1, records.measurements.len());
}

#[tokio::test]
async fn stale_notifications_are_not_retrieved() {
    let meter = ScriptedMeter::new().reply(vec![
        Notification::measurement(measurement(2, 0xB078)),
        Notification::control_point(SUCCESS.to_vec()),
    ]);

    let mut session = connected(meter).await;

    session
        .transport_mut()
        .notify(Notification::measurement(measurement(1, 0xB078)));

    let records = session.get_all_records().await.unwrap();

    let sequence_numbers: Vec<_> = records.measurements.iter().map(|m| m.sequence_number).collect();

    assert_eq!(vec![2], sequence_numbers);
}

#[tokio::test]
async fn failed_response_code() {
    // operator not supported
    let meter = ScriptedMeter::new().reply(vec![Notification::control_point(vec![0x06, 0x00, 0x01, 0x04])]);

    let mut session = connected(meter).await;

    let mut events = session.take_event_receiver().unwrap();

    match session.get_all_records().await {
        Err(Error::Protocol(ProtocolError::UnexpectedResponseCode { request: 0x01, .. })) => (),
        result => panic!("unexpected result {:?}", result),
    }

    assert_eq!(State::Failed, session.racp_state());
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn unknown_op_code() {
    let meter = ScriptedMeter::new()
        .reply(vec![Notification::control_point(vec![0x09, 0x00, 0x00, 0x00])])
        .reply(vec![Notification::control_point(SUCCESS.to_vec())]);

    let mut session = connected(meter).await;

    assert!(matches!(
        session.get_all_records().await,
        Err(Error::Protocol(ProtocolError::UnknownOpCode(0x09)))
    ));

    assert_eq!(State::Failed, session.racp_state());

    // a failed request does not stop the next one
    assert!(session.get_all_records().await.unwrap().is_empty());
}

#[tokio::test]
async fn truncated_measurement() {
    let mut short = measurement(1, 0xB078);

    short.pop();

    let meter = ScriptedMeter::new().reply(vec![
        Notification::measurement(short),
        Notification::control_point(SUCCESS.to_vec()),
    ]);

    let mut session = connected(meter).await;

    assert!(matches!(session.get_all_records().await, Err(Error::Decode(_))));
}

#[tokio::test]
async fn response_never_arrives() {
    init_logging();

    let config = SessionConfig {
        response_timeout: Duration::from_millis(50),
        ..Default::default()
    };

    let mut session = GlucoseSession::new(ScriptedMeter::new(), config);

    session.connect().await.unwrap();

    assert!(matches!(session.get_all_records().await, Err(Error::Timeout(_))));
    assert_eq!(State::Failed, session.racp_state());
}

#[tokio::test]
async fn notifications_end() {
    let mut session = connected(ScriptedMeter::new()).await;

    session.transport_mut().drop_notifications();

    assert!(matches!(session.get_all_records().await, Err(Error::Closed)));
}

#[tokio::test]
async fn not_connected() {
    let mut session = GlucoseSession::new(ScriptedMeter::new(), SessionConfig::default());

    assert!(matches!(session.get_all_records().await, Err(Error::NotConnected)));
    assert!(session.transport().writes.is_empty());
}

#[tokio::test]
async fn retrieval_answered_with_count() {
    let meter = ScriptedMeter::new().reply(vec![
        Notification::measurement(measurement(1, 0xB078)),
        Notification::control_point(vec![0x05, 0x00, 0x01, 0x00]),
    ]);

    let mut session = connected(meter).await;

    let mut events = session.take_event_receiver().unwrap();

    assert!(matches!(
        session.get_records_with(Filter::Last).await,
        Err(Error::Protocol(ProtocolError::UnexpectedOpCode(_)))
    ));

    assert!(events.try_recv().is_err());
    assert_eq!(State::Failed, session.racp_state());
}

#[tokio::test]
async fn events_are_not_kept_before_the_receiver_is_taken() {
    let mut meter = ScriptedMeter::new();

    for _ in 0..4 {
        meter = meter.reply(vec![
            Notification::measurement(measurement(1, 0xB078)),
            Notification::measurement(measurement(2, 0xB078)),
            Notification::control_point(SUCCESS.to_vec()),
        ]);
    }

    let mut session = connected(meter).await;

    for _ in 0..3 {
        assert_eq!(2, session.get_all_records().await.unwrap().measurements.len());
    }

    let mut events = session.take_event_receiver().unwrap();

    assert!(events.try_recv().is_err());
    assert!(session.take_event_receiver().is_none());

    session.get_all_records().await.unwrap();

    assert_eq!(vec![1, 2], sequence_numbers(&events.try_recv().unwrap()));
    assert!(events.try_recv().is_err());
}
