//! Core items shared by the glucose profile crates
//!
//! Things that are not specific to a single part of the glucose profile are put here. This
//! includes the Bluetooth [`Uuid`], the assigned numbers used by the profile, the little endian
//! [`buffer`] reader used by every decoder, and the IEEE-11073 [`sfloat`] format. Generally things
//! within this lib are re-exported by the crates using them.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod assigned;
pub mod buffer;
mod error;
pub mod sfloat;
mod uuid;

pub use error::DecodeError;
pub use sfloat::GlucoseUnit;
pub use uuid::Uuid;

/// Convert raw transfer data into a type
///
/// The *transfer format* is the byte layout of a characteristic value as it is sent over the air.
/// All multi-byte fields of the glucose profile are little endian.
pub trait TransferFormatTryFrom {
    /// Try to create the type from a slice of transfer formatted data
    fn try_from(raw: &[u8]) -> Result<Self, DecodeError>
    where
        Self: Sized;
}

/// Convert a type into its transfer format
pub trait TransferFormatInto {
    /// Get the length of the data when it is in the transfer format
    fn len_of_into(&self) -> usize;

    /// Build the transfer format data
    ///
    /// The input `into_ret` is exactly [`len_of_into`] bytes in length.
    ///
    /// [`len_of_into`]: TransferFormatInto::len_of_into
    fn build_into_ret(&self, into_ret: &mut [u8]);

    /// Convert the type into a transfer formatted vector
    fn into(&self) -> Vec<u8> {
        let mut data = vec![0; self.len_of_into()];

        self.build_into_ret(&mut data);

        data
    }
}

impl TransferFormatTryFrom for u8 {
    fn try_from(raw: &[u8]) -> Result<Self, DecodeError> {
        buffer::LeReader::new(raw).u8("u8")
    }
}

impl TransferFormatTryFrom for u16 {
    fn try_from(raw: &[u8]) -> Result<Self, DecodeError> {
        buffer::LeReader::new(raw).u16("u16")
    }
}

impl TransferFormatInto for u8 {
    fn len_of_into(&self) -> usize {
        1
    }

    fn build_into_ret(&self, into_ret: &mut [u8]) {
        into_ret[0] = *self
    }
}

impl TransferFormatInto for u16 {
    fn len_of_into(&self) -> usize {
        2
    }

    fn build_into_ret(&self, into_ret: &mut [u8]) {
        into_ret.copy_from_slice(&self.to_le_bytes())
    }
}
