//! GSTIN (GST Identification Number) parsing and verification

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::supply::states::{self, GstState};
use crate::types::{GstError, GstResult};

const CHARSET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const GSTIN_LEN: usize = 15;

/// A structurally valid GSTIN with a verified check character
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gstin(String);

impl Gstin {
    /// Parse and verify a GSTIN.
    ///
    /// Layout: 2-digit state code, 10-character PAN (5 letters, 4 digits,
    /// 1 letter), entity number, the literal `Z`, and a mod-36 check character.
    pub fn parse(input: &str) -> GstResult<Self> {
        let gstin = input.trim().to_ascii_uppercase();

        if gstin.len() != GSTIN_LEN || !gstin.is_ascii() {
            return Err(GstError::InvalidGstin(format!(
                "'{}' must be {} characters",
                input.trim(),
                GSTIN_LEN
            )));
        }

        let bytes = gstin.as_bytes();
        let structure_ok = bytes[..2].iter().all(u8::is_ascii_digit)
            && bytes[2..7].iter().all(u8::is_ascii_uppercase)
            && bytes[7..11].iter().all(u8::is_ascii_digit)
            && bytes[11].is_ascii_uppercase()
            && bytes[12].is_ascii_alphanumeric()
            && bytes[13] == b'Z'
            && bytes[14].is_ascii_alphanumeric();
        if !structure_ok {
            return Err(GstError::InvalidGstin(format!(
                "'{}' does not follow the GSTIN layout",
                gstin
            )));
        }

        if states::by_code(&gstin[..2]).is_none() {
            return Err(GstError::InvalidGstin(format!(
                "'{}' has unregistered state code {}",
                gstin,
                &gstin[..2]
            )));
        }

        let expected = check_character(&gstin[..14]).ok_or_else(|| {
            GstError::InvalidGstin(format!("'{}' contains invalid characters", gstin))
        })?;
        if bytes[14] as char != expected {
            return Err(GstError::InvalidGstin(format!(
                "'{}' has check character {}, expected {}",
                gstin, bytes[14] as char, expected
            )));
        }

        Ok(Self(gstin))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two-digit state code prefix
    pub fn state_code(&self) -> &str {
        &self.0[..2]
    }

    /// The registered state this GSTIN belongs to
    pub fn state(&self) -> Option<GstState> {
        states::by_code(self.state_code())
    }

    /// The embedded PAN of the registered person
    pub fn pan(&self) -> &str {
        &self.0[2..12]
    }
}

impl fmt::Display for Gstin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Gstin {
    type Error = GstError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Gstin> for String {
    fn from(gstin: Gstin) -> Self {
        gstin.0
    }
}

/// State signalled by the first two characters of a GSTIN, if they form a
/// registered code. The rest of the GSTIN is not inspected.
pub fn state_from_prefix(gstin: &str) -> Option<GstState> {
    let prefix = gstin.trim().get(..2)?;
    if !prefix.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    states::by_code(prefix)
}

/// Compute the mod-36 check character for the first 14 characters of a GSTIN
pub fn check_character(body: &str) -> Option<char> {
    let mut sum = 0u32;
    for (i, c) in body.chars().enumerate() {
        let value = CHARSET.iter().position(|&b| b as char == c)? as u32;
        let product = value * if i % 2 == 0 { 1 } else { 2 };
        sum += product / 36 + product % 36;
    }
    let check = (36 - sum % 36) % 36;
    Some(CHARSET[check as usize] as char)
}
