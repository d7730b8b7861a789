/// Error for decoding transfer formatted data
///
/// A `DecodeError` is returned whenever a characteristic value is shorter than its flags demand or
/// a field contains a value that cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The data ended before a field could be read
    #[error("expected a minimum size of {needed} bytes for {field}, data length is {len}")]
    TooShort {
        field: &'static str,
        needed: usize,
        len: usize,
    },
    /// A unit selector is neither mg/dL nor mmol/L
    #[error("unit selector {0:#x} is not a glucose concentration unit")]
    InvalidUnit(u8),
    /// The base time of a record is not a calendar date-time
    #[error("invalid base time {year:04}-{month:02}-{day:02} {hours:02}:{minutes:02}:{seconds:02}")]
    InvalidDateTime {
        year: u16,
        month: u8,
        day: u8,
        hours: u8,
        minutes: u8,
        seconds: u8,
    },
}
