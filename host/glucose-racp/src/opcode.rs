//! Values of the Record Access Control Point

/// Op code of a RACP request or response
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpCode {
    ReportStoredRecords,
    DeleteStoredRecords,
    AbortOperation,
    ReportNumberOfStoredRecords,
    NumberOfStoredRecordsResponse,
    ResponseCode,
}

impl TryFrom<u8> for OpCode {
    type Error = ();

    fn try_from(val: u8) -> Result<Self, ()> {
        match val {
            0x01 => Ok(OpCode::ReportStoredRecords),
            0x02 => Ok(OpCode::DeleteStoredRecords),
            0x03 => Ok(OpCode::AbortOperation),
            0x04 => Ok(OpCode::ReportNumberOfStoredRecords),
            0x05 => Ok(OpCode::NumberOfStoredRecordsResponse),
            0x06 => Ok(OpCode::ResponseCode),
            _ => Err(()),
        }
    }
}

impl From<OpCode> for u8 {
    fn from(op_code: OpCode) -> u8 {
        match op_code {
            OpCode::ReportStoredRecords => 0x01,
            OpCode::DeleteStoredRecords => 0x02,
            OpCode::AbortOperation => 0x03,
            OpCode::ReportNumberOfStoredRecords => 0x04,
            OpCode::NumberOfStoredRecordsResponse => 0x05,
            OpCode::ResponseCode => 0x06,
        }
    }
}

impl core::fmt::Display for OpCode {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            OpCode::ReportStoredRecords => write!(f, "Report Stored Records"),
            OpCode::DeleteStoredRecords => write!(f, "Delete Stored Records"),
            OpCode::AbortOperation => write!(f, "Abort Operation"),
            OpCode::ReportNumberOfStoredRecords => write!(f, "Report Number of Stored Records"),
            OpCode::NumberOfStoredRecordsResponse => write!(f, "Number of Stored Records Response"),
            OpCode::ResponseCode => write!(f, "Response Code"),
        }
    }
}

/// Operator of a RACP request
///
/// The operator selects which of the stored records a request applies to.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// Used by responses
    Null,
    AllRecords,
    LessThanOrEqualTo,
    GreaterThanOrEqualTo,
    WithinRangeOf,
    FirstRecord,
    LastRecord,
}

impl TryFrom<u8> for Operator {
    type Error = ();

    fn try_from(val: u8) -> Result<Self, ()> {
        match val {
            0x00 => Ok(Operator::Null),
            0x01 => Ok(Operator::AllRecords),
            0x02 => Ok(Operator::LessThanOrEqualTo),
            0x03 => Ok(Operator::GreaterThanOrEqualTo),
            0x04 => Ok(Operator::WithinRangeOf),
            0x05 => Ok(Operator::FirstRecord),
            0x06 => Ok(Operator::LastRecord),
            _ => Err(()),
        }
    }
}

impl From<Operator> for u8 {
    fn from(operator: Operator) -> u8 {
        match operator {
            Operator::Null => 0x00,
            Operator::AllRecords => 0x01,
            Operator::LessThanOrEqualTo => 0x02,
            Operator::GreaterThanOrEqualTo => 0x03,
            Operator::WithinRangeOf => 0x04,
            Operator::FirstRecord => 0x05,
            Operator::LastRecord => 0x06,
        }
    }
}

/// Filter type of an operand
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FilterType {
    SequenceNumber,
    UserFacingTime,
}

impl From<FilterType> for u8 {
    fn from(filter_type: FilterType) -> u8 {
        match filter_type {
            FilterType::SequenceNumber => 0x01,
            FilterType::UserFacingTime => 0x02,
        }
    }
}

/// Response code of a `ResponseCode` response
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResponseCode {
    Success,
    OpCodeNotSupported,
    InvalidOperator,
    OperatorNotSupported,
    InvalidOperand,
    NoRecordsFound,
    AbortUnsuccessful,
    ProcedureNotCompleted,
    OperandNotSupported,
    Reserved(u8),
}

impl From<u8> for ResponseCode {
    fn from(val: u8) -> Self {
        match val {
            0x01 => ResponseCode::Success,
            0x02 => ResponseCode::OpCodeNotSupported,
            0x03 => ResponseCode::InvalidOperator,
            0x04 => ResponseCode::OperatorNotSupported,
            0x05 => ResponseCode::InvalidOperand,
            0x06 => ResponseCode::NoRecordsFound,
            0x07 => ResponseCode::AbortUnsuccessful,
            0x08 => ResponseCode::ProcedureNotCompleted,
            0x09 => ResponseCode::OperandNotSupported,
            val => ResponseCode::Reserved(val),
        }
    }
}

impl From<ResponseCode> for u8 {
    fn from(code: ResponseCode) -> u8 {
        match code {
            ResponseCode::Success => 0x01,
            ResponseCode::OpCodeNotSupported => 0x02,
            ResponseCode::InvalidOperator => 0x03,
            ResponseCode::OperatorNotSupported => 0x04,
            ResponseCode::InvalidOperand => 0x05,
            ResponseCode::NoRecordsFound => 0x06,
            ResponseCode::AbortUnsuccessful => 0x07,
            ResponseCode::ProcedureNotCompleted => 0x08,
            ResponseCode::OperandNotSupported => 0x09,
            ResponseCode::Reserved(val) => val,
        }
    }
}

impl core::fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            ResponseCode::Success => write!(f, "Success"),
            ResponseCode::OpCodeNotSupported => write!(f, "Op Code not supported"),
            ResponseCode::InvalidOperator => write!(f, "Invalid Operator"),
            ResponseCode::OperatorNotSupported => write!(f, "Operator not supported"),
            ResponseCode::InvalidOperand => write!(f, "Invalid Operand"),
            ResponseCode::NoRecordsFound => write!(f, "No records found"),
            ResponseCode::AbortUnsuccessful => write!(f, "Abort unsuccessful"),
            ResponseCode::ProcedureNotCompleted => write!(f, "Procedure not completed"),
            ResponseCode::OperandNotSupported => write!(f, "Operand not supported"),
            ResponseCode::Reserved(val) => write!(f, "Reserved response code {:#x}", val),
        }
    }
}
