//! Marketplace locales and their API endpoints

use crate::error::ProductAdvertisingError;
use std::fmt;
use std::str::FromStr;

/// Amazon marketplace the requests are sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    BR,
    CA,
    CN,
    DE,
    ES,
    FR,
    IN,
    IT,
    #[default]
    JP,
    MX,
    UK,
    US,
}

impl Locale {
    /// API host for this marketplace
    pub fn host(&self) -> &'static str {
        match self {
            Self::BR => "webservices.amazon.com.br",
            Self::CA => "webservices.amazon.ca",
            Self::CN => "webservices.amazon.cn",
            Self::DE => "webservices.amazon.de",
            Self::ES => "webservices.amazon.es",
            Self::FR => "webservices.amazon.fr",
            Self::IN => "webservices.amazon.in",
            Self::IT => "webservices.amazon.it",
            Self::JP => "webservices.amazon.co.jp",
            Self::MX => "webservices.amazon.com.mx",
            Self::UK => "webservices.amazon.co.uk",
            Self::US => "webservices.amazon.com",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::BR => "BR",
            Self::CA => "CA",
            Self::CN => "CN",
            Self::DE => "DE",
            Self::ES => "ES",
            Self::FR => "FR",
            Self::IN => "IN",
            Self::IT => "IT",
            Self::JP => "JP",
            Self::MX => "MX",
            Self::UK => "UK",
            Self::US => "US",
        }
    }
}

impl FromStr for Locale {
    type Err = ProductAdvertisingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BR" => Ok(Self::BR),
            "CA" => Ok(Self::CA),
            "CN" => Ok(Self::CN),
            "DE" => Ok(Self::DE),
            "ES" => Ok(Self::ES),
            "FR" => Ok(Self::FR),
            "IN" => Ok(Self::IN),
            "IT" => Ok(Self::IT),
            "JP" => Ok(Self::JP),
            "MX" => Ok(Self::MX),
            // GB is the ISO code, UK is what the API documentation uses
            "UK" | "GB" => Ok(Self::UK),
            "US" => Ok(Self::US),
            _ => Err(ProductAdvertisingError::UnknownLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_jp() {
        assert_eq!(Locale::default(), Locale::JP);
        assert_eq!(Locale::default().host(), "webservices.amazon.co.jp");
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("us".parse::<Locale>().unwrap(), Locale::US);
        assert_eq!(" De ".parse::<Locale>().unwrap(), Locale::DE);
        assert_eq!("GB".parse::<Locale>().unwrap(), Locale::UK);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "XX".parse::<Locale>().unwrap_err();
        assert!(matches!(err, ProductAdvertisingError::UnknownLocale(ref c) if c == "XX"));
    }

    #[test]
    fn test_display_round_trips_code() {
        for locale in [Locale::BR, Locale::JP, Locale::UK, Locale::US] {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }
}
