use std::time::Duration;

use btleplug::api::BDAddr;

/// Address of the Pico W running the provisioning GATT server.
pub const PERIPHERAL_ADDRESS: [u8; 6] = [0x2C, 0xCF, 0x67, 0xBE, 0x04, 0x21];

/// Time given to the peripheral to process each write.
pub const WRITE_DELAY: Duration = Duration::from_secs(1);

/// How long to scan for the peripheral before giving up.
pub const SCAN_TIMEOUT: Duration = Duration::from_secs(10);

/// How long connecting and service discovery may take once the peripheral is found.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub fn peripheral_address() -> BDAddr {
    BDAddr::from(PERIPHERAL_ADDRESS)
}

pub mod characteristics {
    use uuid::Uuid;

    pub const WIFI_SSID: Uuid = Uuid::from_bytes([
        0xb1, 0x82, 0x98, 0x13, 0xe8, 0xec, 0x46, 0x21, 0xb9, 0xb5, 0x6c, 0x1b, 0xe4, 0x3f, 0xe2, 0x23,
    ]);
    pub const WIFI_PASSWORD: Uuid = Uuid::from_bytes([
        0x41, 0x0f, 0x50, 0x77, 0x9e, 0x81, 0x4f, 0x3b, 0xb8, 0x88, 0xbf, 0x43, 0x51, 0x74, 0xfa, 0x58,
    ]);
}
