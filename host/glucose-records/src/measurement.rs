//! Glucose Measurement
//!
//! The transfer format of a glucose measurement is
//!
//! | field                  | size | present when                  |
//! |------------------------|------|-------------------------------|
//! | flags                  | 1    | always                        |
//! | sequence number        | 2    | always                        |
//! | base time              | 7    | always                        |
//! | time offset            | 2    | `TIME_OFFSET_PRESENT`         |
//! | concentration (SFLOAT) | 2    | `CONCENTRATION_PRESENT`       |
//! | type-sample location   | 1    | `CONCENTRATION_PRESENT`       |
//! | sensor status          | 2    | `SENSOR_STATUS_PRESENT`       |
//!
//! The base time is the year (`u16`) followed by a byte each for the month, day, hours, minutes,
//! and seconds.

use crate::codes::{SampleLocation, SampleType};
use crate::flags::{MeasurementFlags, SensorStatus};
use glucose_core::buffer::LeReader;
use glucose_core::{sfloat, DecodeError, GlucoseUnit, TransferFormatTryFrom};
use time::{Date, Month, PrimitiveDateTime, Time};

/// A glucose concentration
///
/// The value and the unit are always present together.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Concentration {
    /// The concentration, this may be NaN or infinite for the special SFLOAT values
    pub value: f64,
    pub unit: GlucoseUnit,
}

impl core::fmt::Display for Concentration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// A glucose measurement record
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlucoseMeasurement {
    pub flags: MeasurementFlags,
    /// The sequence number of the record within the meter
    pub sequence_number: u16,
    /// The base time of the measurement
    ///
    /// This is the time as sent by the meter, the time offset is *not* applied to it. Use
    /// [`offset_timestamp`](GlucoseMeasurement::offset_timestamp) for the adjusted time.
    pub timestamp: PrimitiveDateTime,
    /// Time offset in minutes
    pub time_offset: Option<i16>,
    pub concentration: Option<Concentration>,
    pub sample_type: Option<SampleType>,
    pub sample_location: Option<SampleLocation>,
    pub sensor_status: Option<SensorStatus>,
    /// A context record follows this measurement
    pub has_context: bool,
}

impl GlucoseMeasurement {
    /// The month value some meters send for January
    const FIRMWARE_JANUARY: u8 = 13;

    /// Get the base time with the time offset applied to it
    pub fn offset_timestamp(&self) -> PrimitiveDateTime {
        match self.time_offset {
            Some(minutes) => self
                .timestamp
                .saturating_add(time::Duration::minutes(minutes.into())),
            None => self.timestamp,
        }
    }

    fn read_base_time(reader: &mut LeReader) -> Result<PrimitiveDateTime, DecodeError> {
        let year = reader.u16("base time year")?;
        let mut month = reader.u8("base time month")?;
        let day = reader.u8("base time day")?;
        let hours = reader.u8("base time hours")?;
        let minutes = reader.u8("base time minutes")?;
        let seconds = reader.u8("base time seconds")?;

        if month == Self::FIRMWARE_JANUARY {
            log::debug!("(GLS) normalizing base time month 13 to January");

            month = 1;
        }

        let invalid = || DecodeError::InvalidDateTime {
            year,
            month,
            day,
            hours,
            minutes,
            seconds,
        };

        let month_name = Month::try_from(month).map_err(|_| invalid())?;

        let date = Date::from_calendar_date(year.into(), month_name, day).map_err(|_| invalid())?;

        let time = Time::from_hms(hours, minutes, seconds).map_err(|_| invalid())?;

        Ok(PrimitiveDateTime::new(date, time))
    }
}

impl TransferFormatTryFrom for GlucoseMeasurement {
    fn try_from(raw: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = LeReader::new(raw);

        let flags = MeasurementFlags::from_bits_retain(reader.u8("measurement flags")?);

        let sequence_number = reader.u16("sequence number")?;

        let timestamp = Self::read_base_time(&mut reader)?;

        let time_offset = if flags.contains(MeasurementFlags::TIME_OFFSET_PRESENT) {
            Some(reader.i16("time offset")?)
        } else {
            None
        };

        let (concentration, sample_type, sample_location) =
            if flags.contains(MeasurementFlags::CONCENTRATION_PRESENT) {
                let unit = GlucoseUnit::from_flag(flags.contains(MeasurementFlags::UNITS_MOL_PER_LITER));

                let value = sfloat::decode_concentration(reader.u16("glucose concentration")?, unit);

                let type_location = reader.u8("type-sample location")?;

                (
                    Some(Concentration { value, unit }),
                    Some(SampleType::from(type_location >> 4)),
                    Some(SampleLocation::from(type_location & 0x0F)),
                )
            } else {
                (None, None, None)
            };

        let sensor_status = if flags.contains(MeasurementFlags::SENSOR_STATUS_PRESENT) {
            Some(SensorStatus::from_bits_retain(reader.u16("sensor status annunciation")?))
        } else {
            None
        };

        let has_context = flags.contains(MeasurementFlags::CONTEXT_INFORMATION_FOLLOWS);

        Ok(GlucoseMeasurement {
            flags,
            sequence_number,
            timestamp,
            time_offset,
            concentration,
            sample_type,
            sample_location,
            sensor_status,
            has_context,
        })
    }
}
