use std::time::Duration;

use btleplug::api::BDAddr;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no bluetooth adapter at index {0}")]
    AdapterNotFound(usize),

    #[error("peripheral {0} was not found")]
    DeviceNotFound(BDAddr),

    #[error("could not connect to {address}: {source}")]
    Connection {
        address: BDAddr,
        #[source]
        source: btleplug::Error,
    },

    #[error("connecting to {address} timed out after {timeout:?}")]
    ConnectTimeout { address: BDAddr, timeout: Duration },

    #[error("characteristic {0} is not exposed by the peripheral")]
    CharacteristicNotFound(Uuid),

    #[error("write to characteristic {uuid} failed: {source}")]
    Write {
        uuid: Uuid,
        #[source]
        source: btleplug::Error,
    },

    #[error("disconnect failed: {0}")]
    Disconnect(#[source] btleplug::Error),

    #[error(transparent)]
    Bluetooth(#[from] btleplug::Error),
}
