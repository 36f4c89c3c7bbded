//! In-memory transport for exercising the credential writer without a radio.
//!
//! Every call is appended to a shared event log together with the
//! [`tokio::time::Instant`] it happened at, so tests running on paused time can
//! check the delays between writes.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use btleplug::api::{BDAddr, WriteType};
use tokio::time::Instant;
use uuid::Uuid;

use crate::transport::{Link, Transport};
use crate::{Error, Result};

/// Something the mock peripheral observed.
#[derive(Debug, Clone)]
pub enum MockEvent {
    Connect {
        address: BDAddr,
    },
    IsConnected,
    Write {
        uuid: Uuid,
        data: Vec<u8>,
        write_type: WriteType,
        at: Instant,
    },
    Disconnect {
        at: Instant,
    },
}

#[derive(Default)]
struct Behaviour {
    refuse_connect: bool,
    reject_writes_to: Option<Uuid>,
    fail_disconnect: bool,
}

/// A [`Transport`] whose links record their calls instead of talking to hardware.
#[derive(Clone, Default)]
pub struct MockTransport {
    events: Arc<Mutex<Vec<MockEvent>>>,
    behaviour: Arc<Mutex<Behaviour>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `connect` fail as if the peripheral were out of range.
    pub fn refuse_connect(self) -> Self {
        self.behaviour.lock().expect("lock poisoned").refuse_connect = true;
        self
    }

    /// Make writes to `uuid` fail as if the peripheral rejected them.
    pub fn reject_writes_to(self, uuid: Uuid) -> Self {
        self.behaviour.lock().expect("lock poisoned").reject_writes_to = Some(uuid);
        self
    }

    pub fn fail_disconnect(self) -> Self {
        self.behaviour.lock().expect("lock poisoned").fail_disconnect = true;
        self
    }

    /// Snapshot of everything observed so far, oldest first.
    pub fn events(&self) -> Vec<MockEvent> {
        self.events.lock().expect("lock poisoned").clone()
    }

    /// Only the writes, as `(uuid, payload, write_type)`.
    pub fn writes(&self) -> Vec<(Uuid, Vec<u8>, WriteType)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                MockEvent::Write {
                    uuid,
                    data,
                    write_type,
                    ..
                } => Some((uuid, data, write_type)),
                _ => None,
            })
            .collect()
    }

    pub fn disconnect_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, MockEvent::Disconnect { .. }))
            .count()
    }

    fn record(&self, event: MockEvent) {
        self.events.lock().expect("lock poisoned").push(event);
    }
}

#[async_trait]
impl Transport for MockTransport {
    type Link = MockLink;

    async fn connect(&self, address: BDAddr) -> Result<MockLink> {
        if self.behaviour.lock().expect("lock poisoned").refuse_connect {
            return Err(Error::Connection {
                address,
                source: btleplug::Error::DeviceNotFound,
            });
        }

        self.record(MockEvent::Connect { address });

        Ok(MockLink {
            transport: self.clone(),
        })
    }
}

/// Link handed out by [`MockTransport`].
pub struct MockLink {
    transport: MockTransport,
}

#[async_trait]
impl Link for MockLink {
    async fn write(&self, uuid: Uuid, data: &[u8], write_type: WriteType) -> Result<()> {
        self.transport.record(MockEvent::Write {
            uuid,
            data: data.to_vec(),
            write_type,
            at: Instant::now(),
        });

        let rejected = self
            .transport
            .behaviour
            .lock()
            .expect("lock poisoned")
            .reject_writes_to
            == Some(uuid);

        if rejected {
            return Err(Error::Write {
                uuid,
                source: btleplug::Error::NotConnected,
            });
        }

        Ok(())
    }

    async fn is_connected(&self) -> Result<bool> {
        self.transport.record(MockEvent::IsConnected);

        Ok(self.transport.disconnect_count() == 0)
    }

    async fn disconnect(&self) -> Result<()> {
        self.transport.record(MockEvent::Disconnect { at: Instant::now() });

        if self.transport.behaviour.lock().expect("lock poisoned").fail_disconnect {
            return Err(Error::Disconnect(btleplug::Error::NotConnected));
        }

        Ok(())
    }
}
