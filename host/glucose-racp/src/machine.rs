//! The RACP state machine
//!
//! Only one request can be outstanding at a time. Writing a request moves the machine from
//! [`State::Idle`] to [`State::AwaitingResponse`] and the response indicated by the control point
//! moves it back to `Idle`. A response with an op code that is not part of the RACP moves the
//! machine to [`State::Failed`].
//!
//! The machine does not own the records, the measurements and contexts are notified outside of
//! the request/response cycle and are put into a [`RecordStore`] by the owner of the machine. A
//! retrieval is complete when the meter indicates the success response code, at which point the
//! contents of the store are the records of the retrieval.

use crate::opcode::OpCode;
use crate::request::{Filter, Request, RequestKind};
use crate::response::{Response, NO_RECORDS_OPERAND, SUCCESS_OPERAND};
use crate::ProtocolError;
use glucose_core::TransferFormatInto;
use glucose_records::{RecordSet, RecordStore};

/// State of a [`RacpStateMachine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    /// A request was written and its response has not been received
    AwaitingResponse(Request),
    Failed,
}

/// The outcome of a response
#[derive(Debug, Clone, PartialEq)]
pub enum RacpEvent {
    /// The number of stored records
    Count(u16),
    /// The records of a retrieval
    ///
    /// The set is empty when the meter has no records matching the request.
    Data(RecordSet),
    /// A response was received while no request was outstanding
    Ignored,
}

#[derive(Debug)]
pub struct RacpStateMachine {
    state: State,
}

impl Default for RacpStateMachine {
    fn default() -> Self {
        RacpStateMachine::new()
    }
}

impl RacpStateMachine {
    pub fn new() -> Self {
        RacpStateMachine { state: State::Idle }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Get the request that is waiting for its response
    pub fn pending(&self) -> Option<Request> {
        match self.state {
            State::AwaitingResponse(request) => Some(request),
            _ => None,
        }
    }

    /// Start a request
    ///
    /// The store is reset and the transfer formatted request is returned for writing to the
    /// control point. A new request can be started from `Idle` or `Failed`.
    ///
    /// # Error
    /// `ProtocolError::Busy` is returned if a request is awaiting its response.
    pub fn request(&mut self, request: Request, store: &mut RecordStore) -> Result<Vec<u8>, ProtocolError> {
        if let State::AwaitingResponse(pending) = self.state {
            log::warn!("(RACP) cannot start '{}' while awaiting '{}'", request, pending);

            return Err(ProtocolError::Busy);
        }

        store.reset();

        log::info!("(RACP) requesting {}", request);

        self.state = State::AwaitingResponse(request);

        Ok(TransferFormatInto::into(&request))
    }

    /// Request the number of all stored records
    pub fn request_count(&mut self, store: &mut RecordStore) -> Result<Vec<u8>, ProtocolError> {
        self.request(Request::count(), store)
    }

    /// Request all stored records
    pub fn request_all(&mut self, store: &mut RecordStore) -> Result<Vec<u8>, ProtocolError> {
        self.request(Request::all(), store)
    }

    /// Request the number of records starting at `sequence_number`
    pub fn request_count_since(
        &mut self,
        store: &mut RecordStore,
        sequence_number: u16,
    ) -> Result<Vec<u8>, ProtocolError> {
        self.request(Request::count_since(sequence_number), store)
    }

    /// Request the records starting at `sequence_number`
    pub fn request_since(&mut self, store: &mut RecordStore, sequence_number: u16) -> Result<Vec<u8>, ProtocolError> {
        self.request(Request::since(sequence_number), store)
    }

    /// Request the number of records selected by `filter`
    pub fn request_count_with(&mut self, store: &mut RecordStore, filter: Filter) -> Result<Vec<u8>, ProtocolError> {
        self.request(Request::new(RequestKind::Count, filter), store)
    }

    /// Request the records selected by `filter`
    pub fn request_records_with(
        &mut self,
        store: &mut RecordStore,
        filter: Filter,
    ) -> Result<Vec<u8>, ProtocolError> {
        self.request(Request::new(RequestKind::Records, filter), store)
    }

    /// Give up on the outstanding request
    ///
    /// This is used when the response never arrives. The machine is put in the `Failed` state.
    pub fn abandon(&mut self) {
        if let State::AwaitingResponse(request) = self.state {
            log::warn!("(RACP) abandoning '{}'", request);

            self.state = State::Failed;
        }
    }

    /// Process a response indicated by the control point
    ///
    /// The store is only read if the response completes a retrieval.
    pub fn on_response(&mut self, raw: &[u8], store: &RecordStore) -> Result<RacpEvent, ProtocolError> {
        let result = self.classify(raw, store);

        match &result {
            Ok(RacpEvent::Ignored) => (),
            Ok(_) => self.state = State::Idle,
            Err(e) => {
                log::error!("(RACP) {}", e);

                self.state = State::Failed
            }
        }

        result
    }

    fn classify(&self, raw: &[u8], store: &RecordStore) -> Result<RacpEvent, ProtocolError> {
        let response = Response::try_from_indication(raw)?;

        let op_code = response
            .op_code()
            .ok_or(ProtocolError::UnknownOpCode(response.op_code))?;

        let pending = match self.pending() {
            Some(pending) => pending,
            None => {
                log::info!("(RACP) ignoring unsolicited response '{}'", op_code);

                return Ok(RacpEvent::Ignored);
            }
        };

        match (op_code, pending.kind) {
            (OpCode::NumberOfStoredRecordsResponse, RequestKind::Count) => {
                log::info!("(RACP) number of stored records is {}", response.operand);

                Ok(RacpEvent::Count(response.operand))
            }
            (OpCode::ResponseCode, kind) => match response.operand {
                // a count is only ever answered with the number of records
                SUCCESS_OPERAND | NO_RECORDS_OPERAND if kind == RequestKind::Count => {
                    Err(ProtocolError::UnexpectedOpCode(op_code))
                }
                SUCCESS_OPERAND => {
                    log::info!(
                        "(RACP) retrieval complete with {} measurements and {} contexts",
                        store.measurements().len(),
                        store.contexts().len()
                    );

                    Ok(RacpEvent::Data(store.snapshot()))
                }
                NO_RECORDS_OPERAND => {
                    log::info!("(RACP) no records found");

                    Ok(RacpEvent::Data(RecordSet::default()))
                }
                _ => {
                    let (request, code) = response.response_code();

                    Err(ProtocolError::UnexpectedResponseCode { request, code })
                }
            },
            (op_code, _) => Err(ProtocolError::UnexpectedOpCode(op_code)),
        }
    }
}
