use glucose_racp::RacpEvent;
use glucose_records::RecordSet;

/// The outcome of a RACP request
///
/// One event is sent for every request that the meter answered.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The number of stored records
    Count(u16),
    /// The records of a retrieval, this is empty if no records were found
    Data(RecordSet),
}

impl SessionEvent {
    pub(crate) fn from_racp(event: &RacpEvent) -> Option<Self> {
        match event {
            RacpEvent::Count(count) => Some(SessionEvent::Count(*count)),
            RacpEvent::Data(records) => Some(SessionEvent::Data(records.clone())),
            RacpEvent::Ignored => None,
        }
    }
}

/// Information about the meter from the device information service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceInfo {
    /// Every manufacturer name string of the service
    pub manufacturer: Vec<String>,
    /// The model number string, this is empty if the meter does not have one
    pub model: String,
    pub serial_number: Option<String>,
    pub firmware_revision: Option<String>,
}

impl DeviceInfo {
    /// Decode a string characteristic
    ///
    /// Some meters pad their strings with null characters, these are removed.
    pub(crate) fn decode_string(raw: &[u8]) -> String {
        String::from_utf8_lossy(raw).trim_end_matches('\0').to_string()
    }
}
