//! Writes a Wi-Fi SSID and password to the provisioning peripheral.

use clap::Parser;
use picoprov::{BtleTransport, CredentialWriter, Credentials, Error, ProvisionConfig};

/// ssid and password parser
#[derive(Debug, Parser)]
struct Cli {
    ssid: String,
    password: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    pretty_env_logger::formatted_builder()
        .filter_module("picoprov", log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    let writer = CredentialWriter::new(BtleTransport::default(), ProvisionConfig::default());
    writer.write(&Credentials::new(cli.ssid, cli.password)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn takes_ssid_and_password_positionals() {
        let cli = Cli::try_parse_from(["picoprov", "MyNet", "secret123"]).unwrap();

        assert_eq!(cli.ssid, "MyNet");
        assert_eq!(cli.password, "secret123");
    }

    #[test]
    fn accepts_empty_values() {
        let cli = Cli::try_parse_from(["picoprov", "", ""]).unwrap();

        assert!(cli.ssid.is_empty());
        assert!(cli.password.is_empty());
    }

    #[test]
    fn rejects_missing_or_extra_arguments() {
        assert!(Cli::try_parse_from(["picoprov", "MyNet"]).is_err());
        assert!(Cli::try_parse_from(["picoprov", "MyNet", "secret123", "extra"]).is_err());
    }
}
