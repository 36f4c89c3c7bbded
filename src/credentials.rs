use std::fmt;

/// Wi-Fi network name and password destined for the peripheral.
///
/// Neither value is validated. Empty strings are written as zero-length payloads.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub ssid: String,
    pub password: String,
}

impl Credentials {
    pub fn new(ssid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            password: password.into(),
        }
    }

    pub fn ssid_bytes(&self) -> &[u8] {
        self.ssid.as_bytes()
    }

    pub fn password_bytes(&self) -> &[u8] {
        self.password.as_bytes()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("ssid", &self.ssid)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_password() {
        let credentials = Credentials::new("MyNet", "secret123");
        let printed = format!("{:?}", credentials);

        assert!(printed.contains("MyNet"));
        assert!(!printed.contains("secret123"));
    }

    #[test]
    fn payloads_are_utf8_bytes() {
        let credentials = Credentials::new("Café", "pässwörd");

        assert_eq!(credentials.ssid_bytes(), "Café".as_bytes());
        assert_eq!(credentials.password_bytes(), "pässwörd".as_bytes());
        assert_eq!(credentials.ssid_bytes().len(), 5);
    }

    #[test]
    fn empty_values_give_empty_payloads() {
        let credentials = Credentials::new("", "");

        assert!(credentials.ssid_bytes().is_empty());
        assert!(credentials.password_bytes().is_empty());
    }
}
