use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub const fn new_unchecked(address: String) -> Self {
        Self(address)
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Error)]
#[error("Invalid e-mail address")]
pub struct EmailAddressParseError;

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;
    fn from_str(s: &str) -> Result<EmailAddress, Self::Err> {
        let info = mailparse::addrparse(s)
            .ok()
            .and_then(|list| list.extract_single_info())
            .ok_or(EmailAddressParseError)?;
        Ok(Self(info.addr))
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_email_address() {
        assert!("foo@bar.com".parse::<EmailAddress>().is_ok());
        assert!("".parse::<EmailAddress>().is_err());
    }

    #[test]
    fn parse_email_address_with_display_name() {
        let parsed = "Jane Doe <jane@doe.com>".parse::<EmailAddress>().unwrap();
        assert_eq!(parsed.as_str(), "jane@doe.com");
    }
}
