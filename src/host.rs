//! The host protocols

#[cfg(feature = "records")]
#[doc(inline)]
pub use glucose_records as records;

#[cfg(feature = "racp")]
#[doc(inline)]
pub use glucose_racp as racp;

#[cfg(feature = "session")]
#[doc(inline)]
pub use glucose_session as session;
