//! Glucose Profile Session
//!
//! This is the client side of the glucose profile. A [`GlucoseSession`] is created with a
//! [`Transport`] to a glucose meter and is used for connecting to the meter, reading its device
//! information, and retrieving the records stored on it through the Record Access Control Point.
//!
//! ```no_run
//! # async fn example<T: glucose_session::Transport>(transport: T) -> Result<(), glucose_session::Error> {
//! use glucose_session::{GlucoseSession, SessionConfig};
//!
//! let mut session = GlucoseSession::new(transport, SessionConfig::default());
//!
//! session.connect().await?;
//!
//! let count = session.get_record_count().await?;
//!
//! let records = session.get_all_records().await?;
//!
//! assert_eq!(count as usize, records.measurements.len());
//!
//! session.disconnect().await?;
//! # Ok(())
//! # }
//! ```
//!
//! Every answered request is also sent as a [`SessionEvent`] to the receiver returned by
//! [`take_event_receiver`](GlucoseSession::take_event_receiver).

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod config;
mod error;
mod event;
mod session;
pub mod transport;

pub use config::SessionConfig;
pub use error::{ConnectError, DisconnectError, Error};
pub use event::{DeviceInfo, SessionEvent};
pub use session::GlucoseSession;
pub use transport::{Characteristic, HandleValue, Notifications, Transport, TransportError};
