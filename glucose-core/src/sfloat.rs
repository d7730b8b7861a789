//! IEEE-11073 16-bit floating point (SFLOAT)
//!
//! An SFLOAT packs a signed 4-bit exponent (most significant nibble) and a signed 12-bit mantissa
//! into a `u16`. The value is `mantissa * 10^exponent`. Five bit patterns are reserved for special
//! values and are checked before any numeric decoding.
//!
//! The glucose concentration is sent in base units (kg/L or mol/L). The conversion to the display
//! units (mg/dL or mmol/L) is done by biasing the exponent, see [`GlucoseUnit::exponent_bias`].

use crate::DecodeError;

/// Not a Number
pub const NAN: u16 = 0x07FF;

/// Not at this Resolution
pub const NRES: u16 = 0x0800;

/// Reserved for future use
pub const RESERVED: u16 = 0x0801;

/// Positive infinity
pub const POSITIVE_INFINITY: u16 = 0x07FE;

/// Negative infinity
pub const NEGATIVE_INFINITY: u16 = 0x0802;

/// Get the special value of a reserved bit pattern
///
/// `NAN`, `NRES`, and `RESERVED` all map to [`f64::NAN`].
pub fn special_value(raw: u16) -> Option<f64> {
    match raw {
        NAN | NRES | RESERVED => Some(f64::NAN),
        POSITIVE_INFINITY => Some(f64::INFINITY),
        NEGATIVE_INFINITY => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

/// Split a raw SFLOAT into its exponent and mantissa
pub fn split(raw: u16) -> (i32, i32) {
    let exponent = (raw >> 12) as i32;
    let mantissa = (raw & 0x0FFF) as i32;

    let exponent = if exponent >= 0x8 { exponent - 0x10 } else { exponent };
    let mantissa = if mantissa >= 0x0800 { mantissa - 0x1000 } else { mantissa };

    (exponent, mantissa)
}

/// Decode a SFLOAT with an additional bias to the exponent
///
/// The bias is used for converting the unit of the value by a power of ten.
pub fn decode_biased(raw: u16, bias: i32) -> f64 {
    if let Some(special) = special_value(raw) {
        return special;
    }

    let (exponent, mantissa) = split(raw);

    let exponent = exponent + bias;

    // dividing for negative exponents keeps values such as 5.5 exact
    if exponent >= 0 {
        mantissa as f64 * 10f64.powi(exponent)
    } else {
        mantissa as f64 / 10f64.powi(-exponent)
    }
}

/// Decode a SFLOAT as is
pub fn decode(raw: u16) -> f64 {
    decode_biased(raw, 0)
}

/// Decode a glucose concentration
pub fn decode_concentration(raw: u16, unit: GlucoseUnit) -> f64 {
    decode_biased(raw, unit.exponent_bias())
}

/// Decode a glucose concentration with a raw unit selector
///
/// The unit selector is the value of the units bit of the measurement flags. Any other value than
/// zero (mg/dL) or one (mmol/L) is an error.
pub fn decode_with_selector(raw: u16, unit_selector: u8) -> Result<f64, DecodeError> {
    let unit = GlucoseUnit::try_from(unit_selector)?;

    Ok(decode_concentration(raw, unit))
}

/// Unit of a glucose concentration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GlucoseUnit {
    /// Sent as kg/L, reported as mg/dL
    MilligramsPerDeciliter,
    /// Sent as mol/L, reported as mmol/L
    MillimolesPerLiter,
}

impl GlucoseUnit {
    /// Get the unit from the state of the units flag
    pub fn from_flag(is_mol_per_liter: bool) -> Self {
        if is_mol_per_liter {
            GlucoseUnit::MillimolesPerLiter
        } else {
            GlucoseUnit::MilligramsPerDeciliter
        }
    }

    /// Exponent bias for converting from the sent unit to the reported unit
    ///
    /// kg/L to mg/dL is 10^5, mol/L to mmol/L is 10^3.
    pub const fn exponent_bias(self) -> i32 {
        match self {
            GlucoseUnit::MilligramsPerDeciliter => 5,
            GlucoseUnit::MillimolesPerLiter => 3,
        }
    }
}

impl TryFrom<u8> for GlucoseUnit {
    type Error = DecodeError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            0 => Ok(GlucoseUnit::MilligramsPerDeciliter),
            1 => Ok(GlucoseUnit::MillimolesPerLiter),
            _ => Err(DecodeError::InvalidUnit(selector)),
        }
    }
}

impl core::fmt::Display for GlucoseUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            GlucoseUnit::MilligramsPerDeciliter => f.write_str("mg/dL"),
            GlucoseUnit::MillimolesPerLiter => f.write_str("mmol/L"),
        }
    }
}
