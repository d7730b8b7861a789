//! The transport used by a session
//!
//! A [`Transport`] is the connection to a single, already selected, glucose meter. It exposes the
//! GATT operations the session needs and nothing more. How the meter was found, how the link is
//! formed, and how characteristic descriptors are written to enable notifications is up to the
//! implementation.

use futures::stream::BoxStream;
use glucose_core::Uuid;

/// Error of a transport
///
/// The session never interprets the error of a transport, it is passed on to the caller.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// A characteristic value notified or indicated by the meter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleValue {
    /// Handle of the characteristic value
    pub handle: u16,
    pub value: Vec<u8>,
}

/// The notifications and indications of the meter in the order they were received
pub type Notifications = BoxStream<'static, HandleValue>;

/// A characteristic of a service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Characteristic {
    pub uuid: Uuid,
    /// Handle of the characteristic value
    pub handle: u16,
}

impl Characteristic {
    pub fn new(uuid: Uuid, handle: u16) -> Self {
        Characteristic { uuid, handle }
    }
}

impl core::fmt::Display for Characteristic {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} (handle {:#06x})", self.uuid, self.handle)
    }
}

/// The GATT client operations used by a glucose session
#[async_trait::async_trait]
pub trait Transport: Send {
    /// Find the meter
    ///
    /// This is called before `connect` and is bounded by the scan timeout of the session. The
    /// default implementation does nothing for transports where the meter is already known.
    async fn discover(&mut self) -> Result<(), TransportError> {
        Ok(())
    }

    /// Open the connection to the meter
    async fn connect(&mut self) -> Result<(), TransportError>;

    /// Close the connection to the meter
    async fn disconnect(&mut self) -> Result<(), TransportError>;

    fn is_connected(&self) -> bool;

    /// Get the UUIDs of the primary services of the meter
    async fn services(&mut self) -> Result<Vec<Uuid>, TransportError>;

    /// Get the characteristics of a service
    async fn characteristics(&mut self, service: Uuid) -> Result<Vec<Characteristic>, TransportError>;

    /// Read the value of a characteristic
    async fn read(&mut self, characteristic: &Characteristic) -> Result<Vec<u8>, TransportError>;

    /// Write to a characteristic and await the write response
    async fn write(&mut self, characteristic: &Characteristic, data: &[u8]) -> Result<(), TransportError>;

    /// Get the stream of notifications and indications
    ///
    /// The values of every subscribed characteristic are in one stream so that their order is
    /// kept. This is called once per connection after `connect`. The stream ends when the
    /// connection is closed.
    async fn notifications(&mut self) -> Result<Notifications, TransportError>;

    /// Enable the notifications (or indications) of a characteristic
    async fn subscribe(&mut self, characteristic: &Characteristic) -> Result<(), TransportError>;

    /// Disable the notifications (or indications) of a characteristic
    async fn unsubscribe(&mut self, characteristic: &Characteristic) -> Result<(), TransportError>;
}
