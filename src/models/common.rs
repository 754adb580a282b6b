use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A value the API sends either as a string or as a number, depending on
/// the endpoint (map difficulty, plan names, division types, score amounts).
/// Kept as text so both forms decode to the same thing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Label(pub String);

impl Label {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric reading of the label, when it is one.
    pub fn as_f64(&self) -> Option<f64> {
        self.0.trim().parse().ok()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label(value.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = match RawLabel::deserialize(deserializer)? {
            RawLabel::Text(s) => s,
            RawLabel::Integer(i) => i.to_string(),
            RawLabel::Float(f) => f.to_string(),
            RawLabel::Flag(b) => b.to_string(),
        };
        Ok(Label(text))
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Score or distance wrapper: `{"amount": "24853", "unit": "points"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    pub amount: Label,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub percentage: Option<f64>,
}

impl Amount {
    pub fn value(&self) -> Option<f64> {
        self.amount.as_f64()
    }
}

/// Bronze/silver/gold/platinum counters used for badges and medals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MedalCounts {
    #[serde(default)]
    pub bronze: u32,
    #[serde(default)]
    pub silver: u32,
    #[serde(default)]
    pub gold: u32,
    #[serde(default)]
    pub platinum: u32,
}

impl MedalCounts {
    pub fn total(&self) -> u32 {
        self.bronze + self.silver + self.gold + self.platinum
    }
}
