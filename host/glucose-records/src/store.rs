//! Accumulation of the records of a retrieval

use crate::context::GlucoseContext;
use crate::measurement::GlucoseMeasurement;

/// Records of a finished retrieval
///
/// Both sequences are in the order the notifications were received. A context is associated to
/// the measurement with the same sequence number.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordSet {
    pub measurements: Vec<GlucoseMeasurement>,
    pub contexts: Vec<GlucoseContext>,
}

impl RecordSet {
    /// Check if no measurement was retrieved
    ///
    /// An empty set is the result of a retrieval for which the meter had no records.
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Get the context for a sequence number
    ///
    /// If more than one context has the sequence number the first one received is returned.
    pub fn context_for(&self, sequence_number: u16) -> Option<&GlucoseContext> {
        self.contexts
            .iter()
            .find(|context| context.sequence_number == sequence_number)
    }

    /// Iterate over the measurements along with their context
    pub fn paired(&self) -> impl Iterator<Item = (&GlucoseMeasurement, Option<&GlucoseContext>)> + '_ {
        self.measurements
            .iter()
            .map(move |measurement| (measurement, self.context_for(measurement.sequence_number)))
    }
}

/// Store of the records received during a retrieval
///
/// Measurements are de-duplicated against the most recently appended measurement only. A meter
/// may resend the last record of a burst, but a record that reappears after a different record is
/// kept.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: RecordSet,
}

impl RecordStore {
    pub fn new() -> Self {
        RecordStore::default()
    }

    /// Clear all measurements and contexts
    pub fn reset(&mut self) {
        log::trace!(
            "(GLS) clearing {} measurements and {} contexts",
            self.records.measurements.len(),
            self.records.contexts.len()
        );

        self.records.measurements.clear();
        self.records.contexts.clear();
    }

    /// Append a measurement
    ///
    /// False is returned if the measurement was dropped because it has the same sequence number as
    /// the previously appended measurement.
    pub fn append_measurement(&mut self, measurement: GlucoseMeasurement) -> bool {
        match self.records.measurements.last() {
            Some(last) if last.sequence_number == measurement.sequence_number => {
                log::debug!("(GLS) dropping repeated measurement {}", measurement.sequence_number);

                false
            }
            _ => {
                log::trace!("(GLS) appending measurement {}", measurement.sequence_number);

                self.records.measurements.push(measurement);

                true
            }
        }
    }

    /// Append a context
    pub fn append_context(&mut self, context: GlucoseContext) {
        log::trace!("(GLS) appending context {}", context.sequence_number);

        self.records.contexts.push(context)
    }

    pub fn measurements(&self) -> &[GlucoseMeasurement] {
        &self.records.measurements
    }

    pub fn contexts(&self) -> &[GlucoseContext] {
        &self.records.contexts
    }

    pub fn is_empty(&self) -> bool {
        self.records.measurements.is_empty() && self.records.contexts.is_empty()
    }

    /// Copy the current records into a `RecordSet`
    pub fn snapshot(&self) -> RecordSet {
        self.records.clone()
    }
}
