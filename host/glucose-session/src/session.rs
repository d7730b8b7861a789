//! Glucose session controller
//!
//! A [`GlucoseSession`] owns the [`Transport`] to a glucose meter along with the RACP state
//! machine and the record store of the connection. The notifications of the measurement, the
//! measurement context, and the RACP characteristics arrive in a single inbox that is only polled
//! by the session, so every notification is processed one at a time in the order it was received.
//!
//! A command borrows the session mutably until the meter responds, so there can never be more
//! than one RACP request outstanding.

use crate::config::SessionConfig;
use crate::error::{ConnectError, DisconnectError, Error};
use crate::event::{DeviceInfo, SessionEvent};
use crate::transport::{Characteristic, Transport};
use futures::future::FutureExt;
use futures::stream::{BoxStream, StreamExt};
use glucose_core::assigned;
use glucose_core::Uuid;
use glucose_racp::opcode::OpCode;
use glucose_racp::{Filter, ProtocolError, RacpEvent, RacpStateMachine};
use glucose_records::{
    GlucoseContext, GlucoseFeatures, GlucoseMeasurement, RecordSet, RecordStore, TransferFormatTryFrom,
};
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// A value received from one of the subscribed characteristics
#[derive(Debug)]
enum Inbound {
    Measurement(Vec<u8>),
    Context(Vec<u8>),
    ControlPoint(Vec<u8>),
}

type Inbox = BoxStream<'static, Inbound>;

/// Characteristics of the glucose service that are used after connecting
#[derive(Debug, Clone, Copy)]
struct GlucoseService {
    control_point: Characteristic,
    feature: Option<Characteristic>,
}

/// A session with a glucose meter
pub struct GlucoseSession<T> {
    transport: T,
    config: SessionConfig,
    racp: RacpStateMachine,
    store: RecordStore,
    service: Option<GlucoseService>,
    inbox: Option<Inbox>,
    subscribed: Vec<Characteristic>,
    sender: Option<UnboundedSender<SessionEvent>>,
    receiver_taken: bool,
}

impl<T: Transport> GlucoseSession<T> {
    pub fn new(transport: T, config: SessionConfig) -> Self {
        GlucoseSession {
            transport,
            config,
            racp: RacpStateMachine::new(),
            store: RecordStore::new(),
            service: None,
            inbox: None,
            subscribed: Vec::new(),
            sender: None,
            receiver_taken: false,
        }
    }

    /// Take the receiver of the session events
    ///
    /// A [`SessionEvent`] is sent for each RACP request answered by the meter after the receiver
    /// was taken. No events are kept before then. This can only be taken once, `None` is returned
    /// afterwards.
    pub fn take_event_receiver(&mut self) -> Option<UnboundedReceiver<SessionEvent>> {
        if self.receiver_taken {
            return None;
        }

        let (sender, receiver) = unbounded_channel();

        self.sender = Some(sender);
        self.receiver_taken = true;

        Some(receiver)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Get the records received so far by the current retrieval
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn racp_state(&self) -> glucose_racp::State {
        self.racp.state()
    }

    /// Check if the transport is connected to the meter
    pub fn is_connected(&self) -> bool {
        self.transport.is_connected()
    }

    /// Connect to the meter within the connect timeout of the configuration
    pub async fn connect(&mut self) -> Result<(), ConnectError> {
        let timeout = self.config.connect_timeout;

        self.connect_timeout(timeout).await
    }

    /// Connect to the meter
    ///
    /// This discovers the meter, connects to it, and subscribes to the characteristics of the
    /// glucose service. The whole sequence is bounded by `timeout`. If the sequence fails or times
    /// out, whatever was set up is torn down again before the error is returned.
    ///
    /// Any previous session state is discarded.
    pub async fn connect_timeout(&mut self, timeout: Duration) -> Result<(), ConnectError> {
        if self.service.is_some() {
            log::info!("(GLS) closing the previous session before connecting");

            self.teardown().await;
        }

        self.store.reset();
        self.racp = RacpStateMachine::new();

        let result = match tokio::time::timeout(timeout, self.establish()).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout(timeout)),
        };

        if let Err(e) = &result {
            log::error!("(GLS) failed to connect: {}", e);

            self.teardown().await;
        }

        result
    }

    async fn establish(&mut self) -> Result<(), Error> {
        let scan_timeout = self.config.scan_timeout;

        log::debug!("(GLS) discovering the meter");

        tokio::time::timeout(scan_timeout, self.transport.discover()).await
            .map_err(|_| Error::Timeout(scan_timeout))??;

        self.transport.connect().await?;

        log::info!("(GLS) connected");

        let services = self.transport.services().await?;

        if !services.contains(&assigned::GLUCOSE_SERVICE) {
            return Err(Error::MissingService(assigned::GLUCOSE_SERVICE));
        }

        let characteristics = self.transport.characteristics(assigned::GLUCOSE_SERVICE).await?;

        let find = |uuid: Uuid| characteristics.iter().copied().find(|c| c.uuid == uuid);

        let measurement = find(assigned::GLUCOSE_MEASUREMENT)
            .ok_or(Error::MissingCharacteristic(assigned::GLUCOSE_MEASUREMENT))?;

        let control_point = find(assigned::RECORD_ACCESS_CONTROL_POINT)
            .ok_or(Error::MissingCharacteristic(assigned::RECORD_ACCESS_CONTROL_POINT))?;

        let context = if self.config.subscribe_context {
            let context = find(assigned::GLUCOSE_MEASUREMENT_CONTEXT);

            if context.is_none() {
                log::info!("(GLS) meter does not have the measurement context characteristic");
            }

            context
        } else {
            None
        };

        let feature = find(assigned::GLUCOSE_FEATURE);

        let notifications = self.transport.notifications().await?;

        self.subscribe(measurement).await?;

        if let Some(context) = context {
            self.subscribe(context).await?;
        }

        self.subscribe(control_point).await?;

        let measurement = measurement.handle;
        let context = context.map(|c| c.handle);
        let control_point_handle = control_point.handle;

        let inbox = notifications.filter_map(move |notification| {
            let inbound = match notification.handle {
                handle if handle == measurement => Some(Inbound::Measurement(notification.value)),
                handle if Some(handle) == context => Some(Inbound::Context(notification.value)),
                handle if handle == control_point_handle => Some(Inbound::ControlPoint(notification.value)),
                handle => {
                    log::trace!("(GLS) ignoring notification of handle {:#06x}", handle);

                    None
                }
            };

            futures::future::ready(inbound)
        });

        self.inbox = Some(inbox.boxed());

        self.service = Some(GlucoseService { control_point, feature });

        Ok(())
    }

    async fn subscribe(&mut self, characteristic: Characteristic) -> Result<(), Error> {
        log::debug!("(GLS) subscribing to {}", characteristic);

        self.transport.subscribe(&characteristic).await?;

        self.subscribed.push(characteristic);

        Ok(())
    }

    /// Close the session state and unsubscribe from every subscribed characteristic
    ///
    /// A failure to unsubscribe is logged and does not stop the remaining characteristics from
    /// being unsubscribed.
    async fn close(&mut self) {
        self.inbox = None;
        self.service = None;
        self.racp.abandon();

        for characteristic in core::mem::take(&mut self.subscribed) {
            log::debug!("(GLS) unsubscribing from {}", characteristic);

            if let Err(e) = self.transport.unsubscribe(&characteristic).await {
                log::warn!("(GLS) failed to unsubscribe from {}: {}", characteristic, e);
            }
        }
    }

    /// Close whatever was set up by a failed connect
    async fn teardown(&mut self) {
        self.close().await;

        if self.transport.is_connected() {
            if let Err(e) = self.transport.disconnect().await {
                log::warn!("(GLS) failed to disconnect: {}", e);
            }
        }
    }

    /// Disconnect from the meter
    ///
    /// Every subscribed characteristic is unsubscribed before the transport is disconnected. A
    /// failure to unsubscribe is logged but does not stop the disconnect. Disconnecting a session
    /// that is not connected does nothing.
    pub async fn disconnect(&mut self) -> Result<(), DisconnectError> {
        let open = !self.subscribed.is_empty() || self.transport.is_connected();

        self.close().await;

        if !open {
            log::debug!("(GLS) already disconnected");

            return Ok(());
        }

        if self.transport.is_connected() {
            self.transport.disconnect().await?;
        }

        log::info!("(GLS) disconnected");

        Ok(())
    }

    fn glucose_service(&self) -> Result<GlucoseService, Error> {
        match self.service {
            Some(service) if self.transport.is_connected() => Ok(service),
            _ => Err(Error::NotConnected),
        }
    }

    /// Read the device information service
    pub async fn get_device_info(&mut self) -> Result<DeviceInfo, Error> {
        self.glucose_service()?;

        let services = self.transport.services().await?;

        if !services.contains(&assigned::DEVICE_INFORMATION_SERVICE) {
            return Err(Error::MissingService(assigned::DEVICE_INFORMATION_SERVICE));
        }

        let characteristics = self
            .transport
            .characteristics(assigned::DEVICE_INFORMATION_SERVICE)
            .await?;

        let mut info = DeviceInfo::default();
        let mut model = None;

        for characteristic in characteristics {
            match characteristic.uuid {
                assigned::MANUFACTURER_NAME_STRING => info.manufacturer.push(self.read_string(&characteristic).await?),
                assigned::MODEL_NUMBER_STRING => model = Some(self.read_string(&characteristic).await?),
                assigned::SERIAL_NUMBER_STRING => info.serial_number = Some(self.read_string(&characteristic).await?),
                assigned::FIRMWARE_REVISION_STRING => {
                    info.firmware_revision = Some(self.read_string(&characteristic).await?)
                }
                _ => log::trace!("(GLS) skipping device information {}", characteristic),
            }
        }

        info.model = model.unwrap_or_else(|| {
            log::warn!("(GLS) meter does not have a model number string");

            String::new()
        });

        Ok(info)
    }

    async fn read_string(&mut self, characteristic: &Characteristic) -> Result<String, Error> {
        let raw = self.transport.read(characteristic).await?;

        Ok(DeviceInfo::decode_string(&raw))
    }

    /// Read the features of the meter
    pub async fn get_features(&mut self) -> Result<GlucoseFeatures, Error> {
        let feature = self
            .glucose_service()?
            .feature
            .ok_or(Error::MissingCharacteristic(assigned::GLUCOSE_FEATURE))?;

        let raw = self.transport.read(&feature).await?;

        Ok(<GlucoseFeatures as TransferFormatTryFrom>::try_from(&raw)?)
    }

    /// Get the number of records stored on the meter
    pub async fn get_record_count(&mut self) -> Result<u16, Error> {
        self.count(|racp, store| racp.request_count(store)).await
    }

    /// Get the number of records with a sequence number greater than or equal to `sequence_number`
    pub async fn get_record_count_since(&mut self, sequence_number: u16) -> Result<u16, Error> {
        self.count(|racp, store| racp.request_count_since(store, sequence_number)).await
    }

    /// Get the number of records selected by `filter`
    pub async fn get_record_count_with(&mut self, filter: Filter) -> Result<u16, Error> {
        self.count(|racp, store| racp.request_count_with(store, filter)).await
    }

    /// Get every record stored on the meter
    pub async fn get_all_records(&mut self) -> Result<RecordSet, Error> {
        self.records(|racp, store| racp.request_all(store)).await
    }

    /// Get the records with a sequence number greater than or equal to `sequence_number`
    ///
    /// The returned set is empty if the meter has no such records.
    pub async fn get_records_since(&mut self, sequence_number: u16) -> Result<RecordSet, Error> {
        self.records(|racp, store| racp.request_since(store, sequence_number)).await
    }

    /// Get the records selected by `filter`
    pub async fn get_records_with(&mut self, filter: Filter) -> Result<RecordSet, Error> {
        self.records(|racp, store| racp.request_records_with(store, filter)).await
    }

    async fn count<F>(&mut self, start: F) -> Result<u16, Error>
    where
        F: FnOnce(&mut RacpStateMachine, &mut RecordStore) -> Result<Vec<u8>, ProtocolError>,
    {
        match self.transact(start).await? {
            RacpEvent::Count(count) => Ok(count),
            _ => Err(ProtocolError::UnexpectedOpCode(OpCode::ResponseCode).into()),
        }
    }

    async fn records<F>(&mut self, start: F) -> Result<RecordSet, Error>
    where
        F: FnOnce(&mut RacpStateMachine, &mut RecordStore) -> Result<Vec<u8>, ProtocolError>,
    {
        match self.transact(start).await? {
            RacpEvent::Data(records) => Ok(records),
            _ => Err(ProtocolError::UnexpectedOpCode(OpCode::NumberOfStoredRecordsResponse).into()),
        }
    }

    /// Start a request, write it to the control point, and process the inbox until it is answered
    async fn transact<F>(&mut self, start: F) -> Result<RacpEvent, Error>
    where
        F: FnOnce(&mut RacpStateMachine, &mut RecordStore) -> Result<Vec<u8>, ProtocolError>,
    {
        let control_point = self.glucose_service()?.control_point;

        self.drain_inbox();

        let data = start(&mut self.racp, &mut self.store)?;

        if let Err(e) = self.transport.write(&control_point, &data).await {
            self.racp.abandon();

            return Err(e.into());
        }

        let response_timeout = self.config.response_timeout;

        let result = match tokio::time::timeout(response_timeout, self.await_response()).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout(response_timeout)),
        };

        match result {
            Ok(event) => {
                if self.sender.is_some() {
                    if let Some(session_event) = SessionEvent::from_racp(&event) {
                        self.emit(session_event);
                    }
                }

                Ok(event)
            }
            Err(e) => {
                self.racp.abandon();

                Err(e)
            }
        }
    }

    async fn await_response(&mut self) -> Result<RacpEvent, Error> {
        loop {
            let inbound = match self.inbox.as_mut() {
                Some(inbox) => inbox.next().await,
                None => return Err(Error::NotConnected),
            };

            match inbound {
                Some(inbound) => {
                    if let Some(event) = self.dispatch(inbound)? {
                        return Ok(event);
                    }
                }
                None => return Err(Error::Closed),
            }
        }
    }

    /// Process the values that were received while no request was outstanding
    fn drain_inbox(&mut self) {
        while let Some(Some(inbound)) = self.inbox.as_mut().and_then(|inbox| inbox.next().now_or_never()) {
            log::debug!("(GLS) processing {:?} received outside of a request", inbound);

            if let Err(e) = self.dispatch(inbound) {
                log::warn!("(GLS) {}", e);
            }
        }
    }

    fn dispatch(&mut self, inbound: Inbound) -> Result<Option<RacpEvent>, Error> {
        match inbound {
            Inbound::Measurement(raw) => {
                let measurement = <GlucoseMeasurement as TransferFormatTryFrom>::try_from(&raw)?;

                self.store.append_measurement(measurement);

                Ok(None)
            }
            Inbound::Context(raw) => {
                let context = <GlucoseContext as TransferFormatTryFrom>::try_from(&raw)?;

                self.store.append_context(context);

                Ok(None)
            }
            Inbound::ControlPoint(raw) => match self.racp.on_response(&raw, &self.store)? {
                RacpEvent::Ignored => Ok(None),
                event => Ok(Some(event)),
            },
        }
    }

    fn emit(&mut self, event: SessionEvent) {
        let Some(sender) = self.sender.as_ref() else {
            return;
        };

        if sender.send(event).is_err() {
            log::trace!("(GLS) session event receiver was dropped");

            self.sender = None;
        }
    }
}

impl<T> core::fmt::Debug for GlucoseSession<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("GlucoseSession")
            .field("transport", &"..")
            .field("config", &self.config)
            .field("racp", &self.racp)
            .field("store", &self.store)
            .field("service", &self.service)
            .field("subscribed", &self.subscribed)
            .finish()
    }
}
