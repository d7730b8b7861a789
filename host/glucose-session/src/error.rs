use crate::transport::TransportError;
use glucose_core::{DecodeError, Uuid};
use glucose_racp::ProtocolError;
use std::time::Duration;

/// Error of a glucose session
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connecting, scanning, or waiting for a RACP response took too long
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    /// An error returned by the transport
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The session is not connected to the meter
    #[error("not connected")]
    NotConnected,
    /// The meter does not have a required service
    #[error("service {0} not found")]
    MissingService(Uuid),
    /// The meter does not have a required characteristic
    #[error("characteristic {0} not found")]
    MissingCharacteristic(Uuid),
    /// The notification streams of the transport ended while awaiting a response
    #[error("the notification streams were closed")]
    Closed,
}

/// Error returned by [`connect`](crate::GlucoseSession::connect)
pub type ConnectError = Error;

/// Error returned by [`disconnect`](crate::GlucoseSession::disconnect)
pub type DisconnectError = Error;
