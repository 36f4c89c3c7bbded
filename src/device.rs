use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use btleplug::api::{BDAddr, Peripheral as _, WriteType};
use btleplug::platform::{Adapter, Peripheral};
use uuid::Uuid;

use crate::common::CONNECT_TIMEOUT;
use crate::transport::{Link, Transport};
use crate::{Characteristic, Error, Result, ScanConfig};

#[derive(Debug, Clone)]
pub struct Device {
    _adapter: Adapter,
    pub(crate) peripheral: Peripheral,
}

impl Device {
    pub(crate) fn new(adapter: Adapter, peripheral: Peripheral) -> Self {
        Self {
            _adapter: adapter,
            peripheral,
        }
    }

    #[inline]
    pub fn address(&self) -> BDAddr {
        self.peripheral.address()
    }

    /// Local name of the device
    #[inline]
    pub async fn local_name(&self) -> Option<String> {
        self.peripheral
            .properties()
            .await
            .ok()
            .flatten()
            .and_then(|props| props.local_name)
    }

    /// Connect to the device and discover its services
    pub async fn connect(&self) -> Result<()> {
        let address = self.address();

        if !self.peripheral.is_connected().await? {
            log::debug!("Connecting to device {}", address);
            self.peripheral
                .connect()
                .await
                .map_err(|source| Error::Connection { address, source })?;
        }

        self.peripheral.discover_services().await?;

        Ok(())
    }

    /// Disconnect from the device
    #[inline]
    pub async fn disconnect(&self) -> Result<()> {
        self.peripheral.disconnect().await.map_err(Error::Disconnect)
    }

    /// Get characteristic by UUID
    pub async fn characteristic(&self, uuid: Uuid) -> Result<Option<Characteristic>> {
        let mut characteristics = self.peripheral.characteristics();
        if characteristics.is_empty() {
            self.peripheral.discover_services().await?;
            characteristics = self.peripheral.characteristics();
        }
        let characteristic = characteristics
            .into_iter()
            .find(|characteristic| characteristic.uuid == uuid);

        Ok(characteristic.map(|characteristic| Characteristic {
            peripheral: self.peripheral.clone(),
            characteristic,
        }))
    }
}

#[async_trait]
impl Link for Device {
    async fn write(&self, uuid: Uuid, data: &[u8], write_type: WriteType) -> Result<()> {
        let characteristic = self
            .characteristic(uuid)
            .await?
            .ok_or(Error::CharacteristicNotFound(uuid))?;

        match write_type {
            WriteType::WithResponse => characteristic.write_request(data).await,
            WriteType::WithoutResponse => characteristic.write_command(data).await,
        }
    }

    async fn is_connected(&self) -> Result<bool> {
        Ok(self.peripheral.is_connected().await?)
    }

    async fn disconnect(&self) -> Result<()> {
        Device::disconnect(self).await
    }
}

/// Connects to peripherals through the host's bluetooth adapter.
pub struct BtleTransport {
    config: ScanConfig,
    connect_timeout: Duration,
}

impl Default for BtleTransport {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

impl BtleTransport {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            connect_timeout: CONNECT_TIMEOUT,
        }
    }

    /// Give up on connecting and service discovery after the given duration
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

#[async_trait]
impl Transport for BtleTransport {
    type Link = Device;

    async fn connect(&self, address: BDAddr) -> Result<Device> {
        let device = self.config.find(address).await?;

        if let Some(name) = device.local_name().await {
            log::info!("Found {} ({})", name, address);
        }

        let connected = connect_within(self.connect_timeout, address, device.connect()).await;

        if let Err(e) = connected {
            // The link may already be up when discovery fails or the deadline hits.
            if let Err(disconnect_error) = device.peripheral.disconnect().await {
                log::warn!("Could not disconnect from {}: {}", address, disconnect_error);
            }
            return Err(e);
        }

        Ok(device)
    }
}

async fn connect_within(
    timeout: Duration,
    address: BDAddr,
    connect: impl Future<Output = Result<()>>,
) -> Result<()> {
    match tokio::time::timeout(timeout, connect).await {
        Ok(result) => result,
        Err(_) => Err(Error::ConnectTimeout { address, timeout }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> BDAddr {
        BDAddr::from([0x2C, 0xCF, 0x67, 0xBE, 0x04, 0x21])
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_connect_times_out() {
        let result = connect_within(
            CONNECT_TIMEOUT,
            address(),
            futures::future::pending::<Result<()>>(),
        )
        .await;

        match result {
            Err(Error::ConnectTimeout { address: addr, timeout }) => {
                assert_eq!(addr, address());
                assert_eq!(timeout, CONNECT_TIMEOUT);
            }
            other => panic!("expected connect timeout, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn connect_error_passes_through() {
        let result = connect_within(CONNECT_TIMEOUT, address(), async {
            Err(Error::Connection {
                address: address(),
                source: btleplug::Error::NotConnected,
            })
        })
        .await;

        assert!(matches!(result, Err(Error::Connection { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn quick_connect_succeeds() {
        let result = connect_within(CONNECT_TIMEOUT, address(), async { Ok(()) }).await;

        assert!(result.is_ok());
    }
}
