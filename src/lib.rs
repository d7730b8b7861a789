//! A Bluetooth Glucose Profile client
//!
//! This is the host side of the glucose profile for retrieving the records stored on a glucose
//! meter. The connection to the meter is not part of this library, it is provided through the
//! [`Transport`](host::session::Transport) trait of the session.
//!
//! The [`sfloat`] format and the record decoders within [`host`] have no dependency on an async
//! runtime.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod host;

pub use glucose_core::{assigned, buffer, sfloat};
pub use glucose_core::{DecodeError, GlucoseUnit, TransferFormatInto, TransferFormatTryFrom, Uuid};

#[cfg(feature = "session")]
pub use glucose_session::{GlucoseSession, SessionConfig, SessionEvent};
