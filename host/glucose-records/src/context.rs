//! Glucose Measurement Context
//!
//! A context record adds information to the measurement with the same sequence number. After the
//! flags and the sequence number every group is optional and the groups that are present follow
//! each other in this order.
//!
//! | group                       | size | present when             |
//! |-----------------------------|------|--------------------------|
//! | extended flags              | 1    | `EXTENDED_FLAGS_PRESENT` |
//! | carbohydrate id + amount    | 3    | `CARBOHYDRATE_PRESENT`   |
//! | meal                        | 1    | `MEAL_PRESENT`           |
//! | tester-health               | 1    | `TESTER_HEALTH_PRESENT`  |
//! | exercise duration + intensity | 3  | `EXERCISE_PRESENT`       |
//! | medication id + amount      | 3    | `MEDICATION_PRESENT`     |
//! | HbA1c                       | 2    | `HBA1C_PRESENT`          |

use crate::codes::{CarbohydrateId, Health, Meal, MedicationId, Tester};
use crate::flags::ContextFlags;
use glucose_core::buffer::LeReader;
use glucose_core::{sfloat, DecodeError, TransferFormatTryFrom};

/// Carbohydrate intake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Carbohydrate {
    pub id: CarbohydrateId,
    /// The amount as a raw SFLOAT in kilograms
    pub amount: u16,
}

impl Carbohydrate {
    /// Get the amount in grams
    pub fn grams(&self) -> f64 {
        sfloat::decode_biased(self.amount, 3)
    }
}

/// Exercise before the measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exercise {
    /// Duration in seconds, `0xFFFF` is an overrun
    pub duration: u16,
    /// Intensity in percent
    pub intensity: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MedicationUnit {
    Milligrams,
    Milliliters,
}

impl MedicationUnit {
    /// The medication is sent in kilograms or liters
    const fn exponent_bias(self) -> i32 {
        match self {
            MedicationUnit::Milligrams => 6,
            MedicationUnit::Milliliters => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Medication {
    pub id: MedicationId,
    /// The amount as a raw SFLOAT in the base unit (kg or L)
    pub amount: u16,
    pub unit: MedicationUnit,
}

impl Medication {
    /// Get the amount in milligrams or milliliters (see `unit`)
    pub fn value(&self) -> f64 {
        sfloat::decode_biased(self.amount, self.unit.exponent_bias())
    }
}

/// A glucose measurement context record
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlucoseContext {
    pub flags: ContextFlags,
    /// Sequence number of the measurement this context belongs to
    pub sequence_number: u16,
    pub extended_flags: Option<u8>,
    pub carbohydrate: Option<Carbohydrate>,
    pub meal: Option<Meal>,
    pub tester: Option<Tester>,
    pub health: Option<Health>,
    pub exercise: Option<Exercise>,
    pub medication: Option<Medication>,
    /// HbA1c as a raw SFLOAT
    pub hba1c: Option<u16>,
}

impl GlucoseContext {
    /// Get the HbA1c in percent
    pub fn hba1c_percent(&self) -> Option<f64> {
        self.hba1c.map(sfloat::decode)
    }
}

impl TransferFormatTryFrom for GlucoseContext {
    fn try_from(raw: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = LeReader::new(raw);

        let flags = ContextFlags::from_bits_retain(reader.u8("context flags")?);

        let sequence_number = reader.u16("sequence number")?;

        let extended_flags = if flags.contains(ContextFlags::EXTENDED_FLAGS_PRESENT) {
            Some(reader.u8("extended flags")?)
        } else {
            None
        };

        let carbohydrate = if flags.contains(ContextFlags::CARBOHYDRATE_PRESENT) {
            let id = CarbohydrateId::from(reader.u8("carbohydrate id")?);
            let amount = reader.u16("carbohydrate amount")?;

            Some(Carbohydrate { id, amount })
        } else {
            None
        };

        let meal = if flags.contains(ContextFlags::MEAL_PRESENT) {
            Some(Meal::from(reader.u8("meal")?))
        } else {
            None
        };

        let (tester, health) = if flags.contains(ContextFlags::TESTER_HEALTH_PRESENT) {
            let tester_health = reader.u8("tester-health")?;

            (
                Some(Tester::from(tester_health & 0x0F)),
                Some(Health::from(tester_health >> 4)),
            )
        } else {
            (None, None)
        };

        let exercise = if flags.contains(ContextFlags::EXERCISE_PRESENT) {
            let duration = reader.u16("exercise duration")?;
            let intensity = reader.u8("exercise intensity")?;

            Some(Exercise { duration, intensity })
        } else {
            None
        };

        let medication = if flags.contains(ContextFlags::MEDICATION_PRESENT) {
            let id = MedicationId::from(reader.u8("medication id")?);
            let amount = reader.u16("medication amount")?;

            let unit = if flags.contains(ContextFlags::MEDICATION_UNITS_LITERS) {
                MedicationUnit::Milliliters
            } else {
                MedicationUnit::Milligrams
            };

            Some(Medication { id, amount, unit })
        } else {
            None
        };

        let hba1c = if flags.contains(ContextFlags::HBA1C_PRESENT) {
            Some(reader.u16("HbA1c")?)
        } else {
            None
        };

        if reader.remaining() != 0 {
            log::trace!(
                "(GLS) ignoring {} trailing bytes of context {}",
                reader.remaining(),
                sequence_number
            );
        }

        Ok(GlucoseContext {
            flags,
            sequence_number,
            extended_flags,
            carbohydrate,
            meal,
            tester,
            health,
            exercise,
            medication,
            hba1c,
        })
    }
}
