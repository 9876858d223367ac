//! Log sequence numbers.
//!
//! An LSN is a 64-bit byte position in the write-ahead log. PostgreSQL prints
//! it as two hex halves separated by a slash (`16/B374D848`), which is the form
//! shown in tables. Documents carry the plain number.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::WalShowError;

/// A write-ahead-log sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Lsn(pub u64);

impl Lsn {
    /// Build an LSN from its high and low 32-bit halves.
    pub const fn from_parts(hi: u32, lo: u32) -> Self {
        Self(((hi as u64) << 32) | lo as u64)
    }

    /// The raw 64-bit position.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Lsn {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Lsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}/{:X}", self.0 >> 32, self.0 as u32)
    }
}

impl FromStr for Lsn {
    type Err = WalShowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hi, lo) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| WalShowError::InvalidInput(format!("LSN without '/': {}", s)))?;
        let hi = u32::from_str_radix(hi, 16)
            .map_err(|e| WalShowError::InvalidInput(format!("LSN {}: {}", s, e)))?;
        let lo = u32::from_str_radix(lo, 16)
            .map_err(|e| WalShowError::InvalidInput(format!("LSN {}: {}", s, e)))?;
        Ok(Self::from_parts(hi, lo))
    }
}

/// Accepted encodings when reading an LSN from a document.
#[derive(Deserialize)]
#[serde(untagged)]
enum LsnRepr {
    Number(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for Lsn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match LsnRepr::deserialize(deserializer)? {
            LsnRepr::Number(value) => Ok(Self(value)),
            LsnRepr::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_hi_lo_notation() {
        let lsn = Lsn::from_parts(0x16, 0xB374_D848);
        assert_eq!(lsn.to_string(), "16/B374D848");
    }

    #[test]
    fn test_display_zero() {
        assert_eq!(Lsn::default().to_string(), "0/0");
    }

    #[test]
    fn test_parse_hi_lo_notation() {
        let lsn: Lsn = "16/B374D848".parse().unwrap();
        assert_eq!(lsn.value(), 0x16_B374_D848);
    }

    #[test]
    fn test_parse_rejects_missing_slash() {
        let err = "16B374D848".parse::<Lsn>().unwrap_err();
        assert!(matches!(err, WalShowError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_rejects_oversized_half() {
        assert!("1/123456789".parse::<Lsn>().is_err());
        assert!("XYZ/0".parse::<Lsn>().is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Lsn::from_parts(1, 0x28)).unwrap();
        assert_eq!(json, "4294967336");
    }

    #[test]
    fn test_deserializes_number_or_text() {
        let from_number: Lsn = serde_json::from_str("4294967336").unwrap();
        let from_text: Lsn = serde_json::from_str("\"1/28\"").unwrap();
        assert_eq!(from_number, from_text);
    }

    #[test]
    fn test_deserialize_rejects_bad_text() {
        assert!(serde_json::from_str::<Lsn>("\"not-an-lsn\"").is_err());
    }
}
