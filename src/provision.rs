//! Writes Wi-Fi credentials to the provisioning peripheral.
//!
//! The session is strictly linear:
//!
//! ```text
//! Disconnected -> Connected -> SSID written -> password written -> Disconnected
//! ```
//!
//! Nothing is retried. The first failure ends the session, and once a link is
//! open it is released exactly once whether the writes succeeded or not.

use std::time::Duration;

use btleplug::api::{BDAddr, WriteType};
use uuid::Uuid;

use crate::common::{self, characteristics, WRITE_DELAY};
use crate::transport::{Link, Transport};
use crate::{Credentials, Result};

/// Where and how the credentials are written.
#[derive(Debug, Clone)]
pub struct ProvisionConfig {
    pub address: BDAddr,
    pub ssid_characteristic: Uuid,
    pub password_characteristic: Uuid,
    /// Pause after each write so the peripheral can process it.
    pub write_delay: Duration,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            address: common::peripheral_address(),
            ssid_characteristic: characteristics::WIFI_SSID,
            password_characteristic: characteristics::WIFI_PASSWORD,
            write_delay: WRITE_DELAY,
        }
    }
}

pub struct CredentialWriter<T> {
    transport: T,
    config: ProvisionConfig,
}

impl<T: Transport> CredentialWriter<T> {
    pub fn new(transport: T, config: ProvisionConfig) -> Self {
        Self { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Connect, write the SSID then the password, and disconnect.
    pub async fn write(&self, credentials: &Credentials) -> Result<()> {
        let link = self.transport.connect(self.config.address).await?;

        match link.is_connected().await {
            Ok(connected) => log::info!("Connected: {}", connected),
            Err(e) => log::debug!("Could not query connection state: {}", e),
        }

        let written = self.write_sequence(&link, credentials).await;
        let released = link.disconnect().await;

        match (written, released) {
            (Err(e), Err(disconnect_error)) => {
                log::warn!("{}", disconnect_error);
                Err(e)
            }
            (Err(e), Ok(())) => Err(e),
            (Ok(()), released) => {
                released?;
                log::info!("Disconnected from {}", self.config.address);
                Ok(())
            }
        }
    }

    async fn write_sequence(&self, link: &T::Link, credentials: &Credentials) -> Result<()> {
        log::info!("Writing SSID...");
        link.write(
            self.config.ssid_characteristic,
            credentials.ssid_bytes(),
            WriteType::WithResponse,
        )
        .await?;
        tokio::time::sleep(self.config.write_delay).await;

        log::info!("Writing password...");
        link.write(
            self.config.password_characteristic,
            credentials.password_bytes(),
            WriteType::WithResponse,
        )
        .await?;
        tokio::time::sleep(self.config.write_delay).await;

        Ok(())
    }
}
