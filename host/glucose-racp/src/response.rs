//! RACP responses
//!
//! Every response is four bytes, the op code, the operator (always null), and a `u16` operand.
//! The operand of a number of stored records response is the count. The operand of a response
//! code is the op code of the request in the low byte and the [`ResponseCode`] in the high byte.

use crate::opcode::{OpCode, ResponseCode};
use crate::ProtocolError;
use glucose_core::buffer::LeReader;

/// Operand of a successful retrieval
pub const SUCCESS_OPERAND: u16 = 0x0101;

/// Operand of a retrieval for which the meter had no records
pub const NO_RECORDS_OPERAND: u16 = 0x0601;

/// A response indicated by the Record Access Control Point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub op_code: u8,
    pub operator: u8,
    pub operand: u16,
}

impl Response {
    /// The minimum size of a response
    pub const SIZE: usize = 4;

    /// Try to create a `Response` from an indication of the control point
    pub fn try_from_indication(raw: &[u8]) -> Result<Self, ProtocolError> {
        let mut reader = LeReader::new(raw);

        let mut read = || -> Result<Response, glucose_core::DecodeError> {
            Ok(Response {
                op_code: reader.u8("op code")?,
                operator: reader.u8("operator")?,
                operand: reader.u16("operand")?,
            })
        };

        read().map_err(|_| ProtocolError::Truncated(raw.len()))
    }

    /// Get the op code if it is an op code of the RACP
    pub fn op_code(&self) -> Option<OpCode> {
        OpCode::try_from(self.op_code).ok()
    }

    /// Get the op code of the request and the response code
    ///
    /// This is only meaningful for a response code response.
    pub fn response_code(&self) -> (u8, ResponseCode) {
        let [request, code] = self.operand.to_le_bytes();

        (request, ResponseCode::from(code))
    }
}
