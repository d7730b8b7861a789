//! RACP requests
//!
//! A request is the op code, the operator, and an operand that depends on the operator. Filtering
//! by a sequence number prefixes the operand with the sequence number [`FilterType`].

use crate::opcode::{FilterType, OpCode, Operator};
use glucose_core::TransferFormatInto;

/// Selection of the records a request applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Filter {
    All,
    /// Records with a sequence number greater than or equal to this one
    GreaterOrEqual(u16),
    /// Records with a sequence number less than or equal to this one
    LessOrEqual(u16),
    /// Records with a sequence number within the inclusive range
    WithinRange(u16, u16),
    First,
    Last,
}

impl Filter {
    pub fn operator(&self) -> Operator {
        match self {
            Filter::All => Operator::AllRecords,
            Filter::GreaterOrEqual(_) => Operator::GreaterThanOrEqualTo,
            Filter::LessOrEqual(_) => Operator::LessThanOrEqualTo,
            Filter::WithinRange(..) => Operator::WithinRangeOf,
            Filter::First => Operator::FirstRecord,
            Filter::Last => Operator::LastRecord,
        }
    }
}

impl TransferFormatInto for Filter {
    fn len_of_into(&self) -> usize {
        match self {
            Filter::All | Filter::First | Filter::Last => 1,
            Filter::GreaterOrEqual(_) | Filter::LessOrEqual(_) => 4,
            Filter::WithinRange(..) => 6,
        }
    }

    fn build_into_ret(&self, into_ret: &mut [u8]) {
        into_ret[0] = self.operator().into();

        match self {
            Filter::All | Filter::First | Filter::Last => (),
            Filter::GreaterOrEqual(sequence_number) | Filter::LessOrEqual(sequence_number) => {
                into_ret[1] = FilterType::SequenceNumber.into();

                sequence_number.build_into_ret(&mut into_ret[2..4]);
            }
            Filter::WithinRange(minimum, maximum) => {
                into_ret[1] = FilterType::SequenceNumber.into();

                minimum.build_into_ret(&mut into_ret[2..4]);
                maximum.build_into_ret(&mut into_ret[4..6]);
            }
        }
    }
}

/// What a request asks the meter to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RequestKind {
    /// Report the number of records, answered with a number of stored records response
    Count,
    /// Send the records as notifications, answered with a response code
    Records,
}

impl RequestKind {
    pub fn op_code(&self) -> OpCode {
        match self {
            RequestKind::Count => OpCode::ReportNumberOfStoredRecords,
            RequestKind::Records => OpCode::ReportStoredRecords,
        }
    }
}

/// A request written to the Record Access Control Point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    pub kind: RequestKind,
    pub filter: Filter,
}

impl Request {
    pub fn new(kind: RequestKind, filter: Filter) -> Self {
        Request { kind, filter }
    }

    pub fn count() -> Self {
        Request::new(RequestKind::Count, Filter::All)
    }

    pub fn all() -> Self {
        Request::new(RequestKind::Records, Filter::All)
    }

    pub fn count_since(sequence_number: u16) -> Self {
        Request::new(RequestKind::Count, Filter::GreaterOrEqual(sequence_number))
    }

    pub fn since(sequence_number: u16) -> Self {
        Request::new(RequestKind::Records, Filter::GreaterOrEqual(sequence_number))
    }
}

impl TransferFormatInto for Request {
    fn len_of_into(&self) -> usize {
        1 + self.filter.len_of_into()
    }

    fn build_into_ret(&self, into_ret: &mut [u8]) {
        into_ret[0] = self.kind.op_code().into();

        self.filter.build_into_ret(&mut into_ret[1..]);
    }
}

impl core::fmt::Display for Request {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} ({:?})", self.kind.op_code(), self.filter)
    }
}
