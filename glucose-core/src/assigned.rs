//! Assigned numbers used by the glucose profile

use crate::Uuid;

/// Glucose service
pub const GLUCOSE_SERVICE: Uuid = Uuid::from_u16(0x1808);

/// Glucose Measurement characteristic (notify)
pub const GLUCOSE_MEASUREMENT: Uuid = Uuid::from_u16(0x2A18);

/// Glucose Measurement Context characteristic (notify)
pub const GLUCOSE_MEASUREMENT_CONTEXT: Uuid = Uuid::from_u16(0x2A34);

/// Glucose Feature characteristic (read)
pub const GLUCOSE_FEATURE: Uuid = Uuid::from_u16(0x2A51);

/// Record Access Control Point characteristic (write, indicate)
pub const RECORD_ACCESS_CONTROL_POINT: Uuid = Uuid::from_u16(0x2A52);

/// Device Information service
pub const DEVICE_INFORMATION_SERVICE: Uuid = Uuid::from_u16(0x180A);

/// Manufacturer Name String characteristic
pub const MANUFACTURER_NAME_STRING: Uuid = Uuid::from_u16(0x2A29);

/// Model Number String characteristic
pub const MODEL_NUMBER_STRING: Uuid = Uuid::from_u16(0x2A24);

/// Serial Number String characteristic
pub const SERIAL_NUMBER_STRING: Uuid = Uuid::from_u16(0x2A25);

/// Firmware Revision String characteristic
pub const FIRMWARE_REVISION_STRING: Uuid = Uuid::from_u16(0x2A26);
