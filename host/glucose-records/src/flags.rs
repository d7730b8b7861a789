//! Flags of the glucose profile characteristics
//!
//! The flags are read once when a record is decoded and never changed afterwards. Bits that are
//! reserved for future use are retained.

use glucose_core::buffer::LeReader;
use glucose_core::{DecodeError, TransferFormatTryFrom};

bitflags::bitflags! {
    /// Flags of a glucose measurement
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MeasurementFlags: u8 {
        const TIME_OFFSET_PRESENT = 1 << 0;
        /// The concentration and the type-sample location are present
        const CONCENTRATION_PRESENT = 1 << 1;
        /// The concentration unit is mol/L instead of kg/L
        const UNITS_MOL_PER_LITER = 1 << 2;
        const SENSOR_STATUS_PRESENT = 1 << 3;
        /// A context record with the same sequence number follows the measurement
        const CONTEXT_INFORMATION_FOLLOWS = 1 << 4;
    }
}

bitflags::bitflags! {
    /// Flags of a glucose measurement context
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ContextFlags: u8 {
        const CARBOHYDRATE_PRESENT = 1 << 0;
        const MEAL_PRESENT = 1 << 1;
        const TESTER_HEALTH_PRESENT = 1 << 2;
        const EXERCISE_PRESENT = 1 << 3;
        const MEDICATION_PRESENT = 1 << 4;
        /// The medication unit is liters instead of kilograms
        const MEDICATION_UNITS_LITERS = 1 << 5;
        const HBA1C_PRESENT = 1 << 6;
        const EXTENDED_FLAGS_PRESENT = 1 << 7;
    }
}

bitflags::bitflags! {
    /// Sensor status annunciation of a measurement
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SensorStatus: u16 {
        const DEVICE_BATTERY_LOW = 1 << 0;
        const SENSOR_MALFUNCTION = 1 << 1;
        const SAMPLE_SIZE_INSUFFICIENT = 1 << 2;
        const STRIP_INSERTION_ERROR = 1 << 3;
        const STRIP_TYPE_INCORRECT = 1 << 4;
        const RESULT_TOO_HIGH = 1 << 5;
        const RESULT_TOO_LOW = 1 << 6;
        const TEMPERATURE_TOO_HIGH = 1 << 7;
        const TEMPERATURE_TOO_LOW = 1 << 8;
        const READ_INTERRUPTED = 1 << 9;
        const GENERAL_DEVICE_FAULT = 1 << 10;
        const TIME_FAULT = 1 << 11;
    }
}

bitflags::bitflags! {
    /// Features supported by the glucose meter
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct GlucoseFeatures: u16 {
        const LOW_BATTERY_DETECTION = 1 << 0;
        const SENSOR_MALFUNCTION_DETECTION = 1 << 1;
        const SENSOR_SAMPLE_SIZE = 1 << 2;
        const SENSOR_STRIP_INSERTION_ERROR_DETECTION = 1 << 3;
        const SENSOR_STRIP_TYPE_ERROR_DETECTION = 1 << 4;
        const SENSOR_RESULT_HIGH_LOW_DETECTION = 1 << 5;
        const SENSOR_TEMPERATURE_HIGH_LOW_DETECTION = 1 << 6;
        const SENSOR_READ_INTERRUPT_DETECTION = 1 << 7;
        const GENERAL_DEVICE_FAULT = 1 << 8;
        const TIME_FAULT = 1 << 9;
        const MULTIPLE_BOND = 1 << 10;
    }
}

impl TransferFormatTryFrom for GlucoseFeatures {
    fn try_from(raw: &[u8]) -> Result<Self, DecodeError> {
        LeReader::new(raw)
            .u16("glucose feature")
            .map(GlucoseFeatures::from_bits_retain)
    }
}
