//! Wi-Fi credential provisioning for a Pico W over BLE.
//!
//! The peripheral exposes two writable GATT characteristics, one for the
//! network name and one for the password. This crate connects to it, writes
//! both values with write-with-response and disconnects again.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use picoprov::{BtleTransport, CredentialWriter, Credentials, Error, ProvisionConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Error> {
//!     pretty_env_logger::init();
//!
//!     let writer = CredentialWriter::new(BtleTransport::default(), ProvisionConfig::default());
//!     writer.write(&Credentials::new("MyNet", "secret123")).await?;
//!
//!     Ok(())
//! }
//!```
//!
//! The writer is generic over [`Transport`], so the same sequence runs against
//! [`mock::MockTransport`] in tests.

#![warn(clippy::all, future_incompatible, nonstandard_style, rust_2018_idioms)]

pub use btleplug::api::BDAddr;

pub use characteristic::Characteristic;
pub use credentials::Credentials;
pub use device::{BtleTransport, Device};
pub use error::{Error, Result};
pub use provision::{CredentialWriter, ProvisionConfig};
pub use scanner::ScanConfig;
pub use transport::{Link, Transport};

mod device;
mod scanner;

mod characteristic;
pub mod common;
mod credentials;
mod error;
pub mod mock;
mod provision;
mod transport;
