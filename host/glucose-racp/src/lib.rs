//! Record Access Control Point
//!
//! The Record Access Control Point (RACP) is the control point of the glucose service used for
//! retrieving the records stored on a glucose meter. A request is written to the control point
//! and the meter answers with an indication. For a request of records, the records are sent as
//! notifications of the measurement and context characteristics *before* the indication of the
//! response.
//!
//! This crate contains the [`opcode`] vocabulary, the encoding of a [`Request`], the decoding of a
//! [`Response`], and the [`RacpStateMachine`] that tracks the outstanding request.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod machine;
pub mod opcode;
pub mod request;
pub mod response;

pub use machine::{RacpEvent, RacpStateMachine, State};
pub use request::{Filter, Request, RequestKind};
pub use response::Response;

use opcode::{OpCode, ResponseCode};

/// Error of the Record Access Control Point
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// The response op code is not an op code of the RACP
    #[error("unknown RACP op code {0:#x}")]
    UnknownOpCode(u8),
    /// The response op code is an op code of a request
    #[error("received '{0}' as a response")]
    UnexpectedOpCode(OpCode),
    /// The response code is neither success nor no records found
    #[error("request {request:#x} failed with response code '{code}'")]
    UnexpectedResponseCode { request: u8, code: ResponseCode },
    /// The response is shorter than four bytes
    #[error("RACP response of {0} bytes is truncated")]
    Truncated(usize),
    /// A request was started while another is awaiting its response
    #[error("a RACP request is already in progress")]
    Busy,
}
