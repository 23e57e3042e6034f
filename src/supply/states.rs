//! GST state code registry
//!
//! Static, read-only table mapping the two-digit state codes that prefix every
//! GSTIN to state and union territory names.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A registered GST state or union territory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GstState {
    code: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
}

impl GstState {
    const fn new(code: &'static str, name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self {
            code,
            name,
            aliases,
        }
    }

    /// Two-digit GST state code
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Official state name
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for GstState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.code, self.name)
    }
}

impl Serialize for GstState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

/// Accepts a state code or name as a string, or a numeric code such as `27`
struct GstStateVisitor;

impl<'de> Visitor<'de> for GstStateVisitor {
    type Value = GstState;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a GST state code or name")
    }

    fn visit_str<E: de::Error>(self, raw: &str) -> Result<GstState, E> {
        resolve(raw).ok_or_else(|| E::custom(format!("unknown GST state '{}'", raw)))
    }

    fn visit_u64<E: de::Error>(self, code: u64) -> Result<GstState, E> {
        by_code(&code.to_string())
            .ok_or_else(|| E::custom(format!("unknown GST state code {}", code)))
    }

    fn visit_i64<E: de::Error>(self, code: i64) -> Result<GstState, E> {
        match u64::try_from(code) {
            Ok(code) => self.visit_u64(code),
            Err(_) => Err(E::custom(format!("unknown GST state code {}", code))),
        }
    }
}

impl<'de> Deserialize<'de> for GstState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(GstStateVisitor)
    }
}

static STATES: [GstState; 40] = [
    GstState::new("01", "Jammu and Kashmir", &[]),
    GstState::new("02", "Himachal Pradesh", &[]),
    GstState::new("03", "Punjab", &[]),
    GstState::new("04", "Chandigarh", &[]),
    GstState::new("05", "Uttarakhand", &["Uttaranchal"]),
    GstState::new("06", "Haryana", &[]),
    GstState::new("07", "Delhi", &["New Delhi", "NCT of Delhi"]),
    GstState::new("08", "Rajasthan", &[]),
    GstState::new("09", "Uttar Pradesh", &[]),
    GstState::new("10", "Bihar", &[]),
    GstState::new("11", "Sikkim", &[]),
    GstState::new("12", "Arunachal Pradesh", &[]),
    GstState::new("13", "Nagaland", &[]),
    GstState::new("14", "Manipur", &[]),
    GstState::new("15", "Mizoram", &[]),
    GstState::new("16", "Tripura", &[]),
    GstState::new("17", "Meghalaya", &[]),
    GstState::new("18", "Assam", &[]),
    GstState::new("19", "West Bengal", &[]),
    GstState::new("20", "Jharkhand", &[]),
    GstState::new("21", "Odisha", &["Orissa"]),
    GstState::new("22", "Chhattisgarh", &["Chattisgarh"]),
    GstState::new("23", "Madhya Pradesh", &[]),
    GstState::new("24", "Gujarat", &[]),
    GstState::new("25", "Daman and Diu", &[]),
    GstState::new(
        "26",
        "Dadra and Nagar Haveli and Daman and Diu",
        &["Dadra and Nagar Haveli"],
    ),
    GstState::new("27", "Maharashtra", &[]),
    GstState::new("28", "Andhra Pradesh (Before Division)", &[]),
    GstState::new("29", "Karnataka", &[]),
    GstState::new("30", "Goa", &[]),
    GstState::new("31", "Lakshadweep", &[]),
    GstState::new("32", "Kerala", &[]),
    GstState::new("33", "Tamil Nadu", &[]),
    GstState::new("34", "Puducherry", &["Pondicherry"]),
    GstState::new(
        "35",
        "Andaman and Nicobar Islands",
        &["Andaman and Nicobar"],
    ),
    GstState::new("36", "Telangana", &[]),
    GstState::new("37", "Andhra Pradesh", &["Andhra Pradesh (New)"]),
    GstState::new("38", "Ladakh", &[]),
    GstState::new("97", "Other Territory", &[]),
    GstState::new("99", "Centre Jurisdiction", &[]),
];

/// All registered states, ordered by code
pub fn all() -> &'static [GstState] {
    &STATES
}

/// Look up a state by its code; single-digit codes are zero-padded ("7" -> "07")
pub fn by_code(code: &str) -> Option<GstState> {
    let code = code.trim();
    if code.is_empty() || code.len() > 2 || !code.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let padded = format!("{:0>2}", code);
    STATES.iter().find(|state| state.code == padded).copied()
}

/// Look up a state by official name or a known alias, ignoring case, spacing and "&"
pub fn by_name(name: &str) -> Option<GstState> {
    let wanted = normalize_name(name);
    if wanted.is_empty() {
        return None;
    }

    STATES
        .iter()
        .find(|state| normalize_name(state.name) == wanted)
        .or_else(|| {
            STATES.iter().find(|state| {
                state
                    .aliases
                    .iter()
                    .any(|alias| normalize_name(alias) == wanted)
            })
        })
        .copied()
}

/// Resolve either a code or a name
pub fn resolve(input: &str) -> Option<GstState> {
    by_code(input).or_else(|| by_name(input))
}

fn normalize_name(name: &str) -> String {
    name.replace('&', " and ")
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_code() {
        assert_eq!(by_code("27").unwrap().name(), "Maharashtra");
        assert_eq!(by_code("20").unwrap().name(), "Jharkhand");
        assert_eq!(by_code("7").unwrap().code(), "07");
        assert_eq!(by_code(" 32 ").unwrap().name(), "Kerala");
        assert!(by_code("00").is_none());
        assert!(by_code("40").is_none());
        assert!(by_code("2A").is_none());
        assert!(by_code("").is_none());
    }

    #[test]
    fn test_lookup_by_name_is_forgiving() {
        assert_eq!(by_name("maharashtra").unwrap().code(), "27");
        assert_eq!(by_name("  Tamil   Nadu ").unwrap().code(), "33");
        assert_eq!(by_name("Jammu & Kashmir").unwrap().code(), "01");
        assert_eq!(by_name("Orissa").unwrap().code(), "21");
        assert_eq!(by_name("Andhra Pradesh").unwrap().code(), "37");
        assert!(by_name("Atlantis").is_none());
        assert!(by_name("   ").is_none());
    }

    #[test]
    fn test_resolve_code_or_name() {
        assert_eq!(resolve("29").unwrap().name(), "Karnataka");
        assert_eq!(resolve("Karnataka").unwrap().code(), "29");
        assert!(resolve("ZZ").is_none());
    }

    #[test]
    fn test_registry_codes_are_unique() {
        let mut codes: Vec<_> = all().iter().map(|s| s.code()).collect();
        codes.dedup();
        assert_eq!(codes.len(), all().len());
    }

    #[test]
    fn test_state_serializes_as_code() {
        let state = by_code("27").unwrap();
        assert_eq!(serde_json::to_string(&state).unwrap(), "\"27\"");

        let parsed: GstState = serde_json::from_str("\"Maharashtra\"").unwrap();
        assert_eq!(parsed, state);
        assert!(serde_json::from_str::<GstState>("\"Narnia\"").is_err());
    }

    #[test]
    fn test_state_deserializes_from_numeric_code() {
        let parsed: GstState = serde_json::from_str("27").unwrap();
        assert_eq!(parsed.name(), "Maharashtra");
        assert_eq!(serde_json::from_str::<GstState>("7").unwrap().code(), "07");
        assert!(serde_json::from_str::<GstState>("45").is_err());
        assert!(serde_json::from_str::<GstState>("-3").is_err());
        assert!(serde_json::from_str::<GstState>("true").is_err());
    }
}
