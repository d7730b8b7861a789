//! Session configuration

use std::time::Duration;

/// Configuration of a [`GlucoseSession`](crate::GlucoseSession)
///
/// With the `serde` feature the durations are (de)serialized as milliseconds and missing fields
/// take their default value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Bound of the entire connect sequence
    #[cfg_attr(feature = "serde", serde(rename = "connect_timeout_ms", with = "millis"))]
    pub connect_timeout: Duration,
    /// Bound of the discovery of the meter
    #[cfg_attr(feature = "serde", serde(rename = "scan_timeout_ms", with = "millis"))]
    pub scan_timeout: Duration,
    /// Bound of a single RACP request and its response
    #[cfg_attr(feature = "serde", serde(rename = "response_timeout_ms", with = "millis"))]
    pub response_timeout: Duration,
    /// Enable the notifications of the measurement context characteristic
    pub subscribe_context: bool,
}

impl SessionConfig {
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(40);
    pub const DEFAULT_SCAN_TIMEOUT: Duration = Duration::from_secs(15);
    pub const DEFAULT_RESPONSE_TIMEOUT: Duration = Duration::from_secs(30);

    /// Read a configuration from YAML
    #[cfg(feature = "yaml")]
    pub fn from_yaml<R: std::io::Read>(reader: R) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
            scan_timeout: Self::DEFAULT_SCAN_TIMEOUT,
            response_timeout: Self::DEFAULT_RESPONSE_TIMEOUT,
            subscribe_context: true,
        }
    }
}

#[cfg(feature = "serde")]
mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis().try_into().unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
