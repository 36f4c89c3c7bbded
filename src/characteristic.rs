use btleplug::api::{Characteristic as BtleCharacteristic, Peripheral as _, WriteType};
use btleplug::platform::Peripheral;
use uuid::Uuid;

use crate::{Error, Result};

#[derive(Clone)]
pub struct Characteristic {
    pub(crate) peripheral: Peripheral,
    pub(crate) characteristic: BtleCharacteristic,
}

impl Characteristic {
    /// Write with response. The peripheral acknowledges the write.
    pub async fn write_request(&self, data: &[u8]) -> Result<()> {
        self.write(data, WriteType::WithResponse).await
    }

    /// Write without response.
    pub async fn write_command(&self, data: &[u8]) -> Result<()> {
        self.write(data, WriteType::WithoutResponse).await
    }

    async fn write(&self, data: &[u8], write_type: WriteType) -> Result<()> {
        log::trace!(
            "Writing {} bytes to {} ({:?})",
            data.len(),
            self.uuid(),
            write_type
        );

        self.peripheral
            .write(&self.characteristic, data, write_type)
            .await
            .map_err(|source| Error::Write {
                uuid: self.uuid(),
                source,
            })
    }

    pub fn uuid(&self) -> Uuid {
        self.characteristic.uuid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_and_command_writes_are_public() {
        let _request = Characteristic::write_request;
        let _command = Characteristic::write_command;
    }
}
