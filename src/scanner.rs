use std::time::Duration;

use btleplug::api::{BDAddr, Central, CentralEvent, Manager as _, Peripheral as _, ScanFilter};
use btleplug::platform::{Adapter, Manager, Peripheral};
use futures::StreamExt;

use crate::common::SCAN_TIMEOUT;
use crate::{Device, Error, Result};

pub struct ScanConfig {
    /// Index of the Bluetooth adapter to use. The first found adapter is used by default.
    adapter_index: usize,
    /// The scan is stopped when timeout duration is reached.
    timeout: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            adapter_index: 0,
            timeout: SCAN_TIMEOUT,
        }
    }
}

impl ScanConfig {
    /// Index of bluetooth adapter to use
    pub fn adapter_index(mut self, index: usize) -> Self {
        self.adapter_index = index;
        self
    }

    /// Stop the scan after given duration
    pub fn stop_after_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Scan until a peripheral with the given address shows up.
    pub async fn find(&self, address: BDAddr) -> Result<Device> {
        let manager = Manager::new().await?;
        let mut adapters = manager.adapters().await?;

        if self.adapter_index >= adapters.len() {
            return Err(Error::AdapterNotFound(self.adapter_index));
        }

        let adapter = adapters.swap_remove(self.adapter_index);

        log::trace!("Using adapter: {:?}", adapter);
        log::info!("Scanning for device {}", address);

        let mut events = adapter.events().await?;
        adapter.start_scan(ScanFilter::default()).await?;

        let found = tokio::time::timeout(self.timeout, async {
            if let Some(peripheral) = known_peripheral(&adapter, address).await {
                return Some(peripheral);
            }

            while let Some(event) = events.next().await {
                let peripheral_id = match event {
                    CentralEvent::DeviceDiscovered(id) | CentralEvent::DeviceUpdated(id) => id,
                    _ => continue,
                };

                if let Ok(peripheral) = adapter.peripheral(&peripheral_id).await {
                    log::trace!("Device discovered: {:?}", peripheral);

                    if peripheral.address() == address {
                        return Some(peripheral);
                    }
                }
            }

            None
        })
        .await
        .ok()
        .flatten();

        if let Err(e) = adapter.stop_scan().await {
            log::debug!("Could not stop the scan: {:?}", e);
        }

        match found {
            Some(peripheral) => {
                log::debug!("Found device: {:?}", peripheral);
                Ok(Device::new(adapter, peripheral))
            }
            None => Err(Error::DeviceNotFound(address)),
        }
    }
}

/// Peripherals seen before the scan started do not produce a discovery event.
async fn known_peripheral(adapter: &Adapter, address: BDAddr) -> Option<Peripheral> {
    adapter
        .peripherals()
        .await
        .ok()?
        .into_iter()
        .find(|peripheral| peripheral.address() == address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_first_adapter_and_scan_timeout() {
        let config = ScanConfig::default();

        assert_eq!(config.adapter_index, 0);
        assert_eq!(config.timeout, SCAN_TIMEOUT);
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = ScanConfig::default()
            .adapter_index(1)
            .stop_after_timeout(Duration::from_secs(3));

        assert_eq!(config.adapter_index, 1);
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
