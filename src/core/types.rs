// src/core/types.rs
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Identifier of a character in the vocabulary. 0 means "unknown".
pub type TokenId = u32;

/// Reserved identifier for characters the vocabulary has never seen.
pub const UNKNOWN_TOKEN: TokenId = 0;

/// Number of slots in a feature vector.
pub const FEATURE_DIM: usize = 8;

/// One identifier per character of the input text.
pub type Sequence = Vec<TokenId>;

/// Fixed-length stand-in for a learned representation. Values land roughly
/// in [-1, 1] but are not clamped.
pub type FeatureVector = [f64; FEATURE_DIM];

/// A probability kept as whole hundredths so a distribution can sum to
/// exactly 1.00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Probability(i32);

impl Probability {
    pub fn from_hundredths(hundredths: i32) -> Self {
        Self(hundredths)
    }

    pub fn hundredths(self) -> i32 {
        self.0
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl std::fmt::Display for Probability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.value())
    }
}

/// Category to probability, in the order the categories were given.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityDistribution {
    entries: Vec<(String, Probability)>,
}

impl ProbabilityDistribution {
    pub(crate) fn new(entries: Vec<(String, Probability)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, category: &str) -> Option<Probability> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|&(_, p)| p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Probability)> {
        self.entries.iter().map(|(name, p)| (name.as_str(), *p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_hundredths(&self) -> i32 {
        self.entries.iter().map(|(_, p)| p.hundredths()).sum()
    }

    /// The category with the highest probability. On a tie the later
    /// category wins.
    pub fn predicted(&self) -> Option<&str> {
        self.entries
            .iter()
            .reduce(|best, next| if best.1 > next.1 { best } else { next })
            .map(|(name, _)| name.as_str())
    }
}

// Serializes as an ordered `{ category: 0.66, ... }` map.
impl Serialize for ProbabilityDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, p) in &self.entries {
            map.serialize_entry(name, &p.value())?;
        }
        map.end()
    }
}

/// Rounds to two decimals, half away from zero. Never returns `-0.0`.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}
