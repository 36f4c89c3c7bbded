//! The capabilities the credential writer needs from a BLE client.
//!
//! [`BtleTransport`](crate::BtleTransport) provides them over btleplug and
//! [`MockTransport`](crate::mock::MockTransport) records them in memory.

use async_trait::async_trait;
use btleplug::api::{BDAddr, WriteType};
use uuid::Uuid;

use crate::Result;

/// Opens connections to peripherals.
#[async_trait]
pub trait Transport: Send + Sync {
    type Link: Link;

    /// Connect to the peripheral at `address`.
    async fn connect(&self, address: BDAddr) -> Result<Self::Link>;
}

/// An open connection to a single peripheral.
#[async_trait]
pub trait Link: Send + Sync {
    /// Write `data` to the characteristic identified by `uuid`.
    async fn write(&self, uuid: Uuid, data: &[u8], write_type: WriteType) -> Result<()>;

    async fn is_connected(&self) -> Result<bool>;

    /// Release the connection.
    async fn disconnect(&self) -> Result<()>;
}
