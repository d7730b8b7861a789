//! Glucose Records
//!
//! A glucose meter sends its stored records as two kinds of notifications. Every record is sent as
//! a [`GlucoseMeasurement`] and when the meter has additional information about the measurement it
//! is followed by a [`GlucoseContext`] with the same sequence number. The two are never linked by
//! anything else than the sequence number.
//!
//! The decoders in this crate implement [`TransferFormatTryFrom`] for the transfer format of the
//! characteristic values.
//!
//! ```
//! use glucose_records::{GlucoseMeasurement, TransferFormatTryFrom};
//!
//! let raw = [
//!     0x02, // flags: concentration present, mg/dL
//!     0x07, 0x00, // sequence number 7
//!     0xE8, 0x07, 0x03, 0x14, 0x08, 0x1E, 0x00, // 2024-03-20 08:30:00
//!     0x78, 0xB0, // 120 mg/dL
//!     0x11, // capillary whole blood, finger
//! ];
//!
//! let measurement: GlucoseMeasurement = TransferFormatTryFrom::try_from(&raw).unwrap();
//!
//! assert_eq!(7, measurement.sequence_number);
//! assert_eq!(Some(120.0), measurement.concentration.map(|c| c.value));
//! ```
//!
//! The [`RecordStore`] accumulates the records of a retrieval in the order they are received.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

/// Create an enum for an assigned code of the glucose profile
///
/// Every code is a `u8` and values that are not assigned become the `Reserved` variant.
macro_rules! assigned_code {
    (
        $(#[$attr:meta])*
        pub enum $name:ident {
            $( $(#[$variant_attr:meta])* $variant:ident = $val:literal => $display:literal, )*
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $( $(#[$variant_attr])* $variant, )*
            /// A code that is reserved for future use
            Reserved(u8),
        }

        impl From<u8> for $name {
            fn from(code: u8) -> Self {
                match code {
                    $( $val => $name::$variant, )*
                    code => $name::Reserved(code),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(name: $name) -> u8 {
                match name {
                    $( $name::$variant => $val, )*
                    $name::Reserved(code) => code,
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                match self {
                    $( $name::$variant => f.write_str($display), )*
                    $name::Reserved(code) => write!(f, "reserved ({:#x})", code),
                }
            }
        }
    };
}

pub mod codes;
pub mod context;
pub mod flags;
pub mod measurement;
pub mod store;

pub use context::GlucoseContext;
pub use flags::{ContextFlags, GlucoseFeatures, MeasurementFlags, SensorStatus};
pub use glucose_core::{DecodeError, GlucoseUnit, TransferFormatTryFrom};
pub use measurement::{Concentration, GlucoseMeasurement};
pub use store::{RecordSet, RecordStore};
