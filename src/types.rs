//! Core types and structures for wordforge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Numbers-table profile
///
/// Selects which digit-string table the injectors and combiner draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberProfile {
    /// Single digits 0-9
    Basic,
    /// Digits plus a curated set of memorable patterns (palindromes,
    /// repeats, common PINs)
    Curated,
    /// Every integer string from 0 up to and including `bound`
    Exhaustive { bound: u32 },
}

/// Default upper bound for the exhaustive profile
pub const DEFAULT_EXHAUSTIVE_BOUND: u32 = 10_000;

impl std::fmt::Display for NumberProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberProfile::Basic => write!(f, "basic"),
            NumberProfile::Curated => write!(f, "curated"),
            NumberProfile::Exhaustive { bound } => write!(f, "exhaustive:{}", bound),
        }
    }
}

impl std::str::FromStr for NumberProfile {
    type Err = crate::error::WordforgeError;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s {
            "basic" => Ok(NumberProfile::Basic),
            "curated" => Ok(NumberProfile::Curated),
            "exhaustive" => Ok(NumberProfile::Exhaustive {
                bound: DEFAULT_EXHAUSTIVE_BOUND,
            }),
            other => {
                if let Some(bound) = other.strip_prefix("exhaustive:") {
                    let bound = bound.parse::<u32>().map_err(|_| {
                        crate::error::WordforgeError::cli(format!(
                            "invalid exhaustive bound '{}'",
                            bound
                        ))
                    })?;
                    Ok(NumberProfile::Exhaustive { bound })
                } else {
                    Err(crate::error::WordforgeError::cli(format!(
                        "unknown numbers profile '{}' (expected basic, curated, or exhaustive[:bound])",
                        other
                    )))
                }
            }
        }
    }
}

/// Case-variant profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseProfile {
    /// lower, UPPER, Capitalized, AlTeRnAtInG
    Basic,
    /// Basic plus the first-lower-rest-capitalized variant
    Extended,
}

impl std::fmt::Display for CaseProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseProfile::Basic => write!(f, "basic"),
            CaseProfile::Extended => write!(f, "extended"),
        }
    }
}

impl std::str::FromStr for CaseProfile {
    type Err = crate::error::WordforgeError;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s {
            "basic" => Ok(CaseProfile::Basic),
            "extended" => Ok(CaseProfile::Extended),
            other => Err(crate::error::WordforgeError::cli(format!(
                "unknown cases profile '{}' (expected basic or extended)",
                other
            ))),
        }
    }
}

/// Combiner strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombinerProfile {
    /// Seven fixed concatenation patterns over single symbol/digit pairs
    Fixed,
    /// symbol+number compound fragment placed as suffix, prefix, or
    /// middle insertion
    Cross,
}

impl std::fmt::Display for CombinerProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombinerProfile::Fixed => write!(f, "fixed"),
            CombinerProfile::Cross => write!(f, "cross"),
        }
    }
}

impl std::str::FromStr for CombinerProfile {
    type Err = crate::error::WordforgeError;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s {
            "fixed" => Ok(CombinerProfile::Fixed),
            "cross" => Ok(CombinerProfile::Cross),
            other => Err(crate::error::WordforgeError::cli(format!(
                "unknown combiner profile '{}' (expected fixed or cross)",
                other
            ))),
        }
    }
}

/// Output sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Plain ascending lexicographic
    Lexicographic,
    /// Ascending by length, lexicographic within equal lengths
    Length,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Lexicographic => write!(f, "lex"),
            SortOrder::Length => write!(f, "length"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = crate::error::WordforgeError;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s {
            "lex" => Ok(SortOrder::Lexicographic),
            "length" => Ok(SortOrder::Length),
            other => Err(crate::error::WordforgeError::cli(format!(
                "unknown sort order '{}' (expected lex or length)",
                other
            ))),
        }
    }
}

/// Inclusive bounds on accepted candidate length (in characters)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthWindow {
    pub min: usize,
    pub max: usize,
}

impl LengthWindow {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Whether a character count falls inside the window.
    ///
    /// A window with min > max contains nothing; that is defined behavior
    /// (empty output), not an error.
    pub fn contains(&self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }

    /// Whether a candidate string falls inside the window.
    /// Lengths are counted in characters, not bytes.
    pub fn accepts(&self, candidate: &str) -> bool {
        self.contains(candidate.chars().count())
    }
}

impl Default for LengthWindow {
    fn default() -> Self {
        Self { min: 6, max: 16 }
    }
}

/// Configuration for the mutation engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationConfig {
    pub window: LengthWindow,
    /// Enable symbol/number injection and combination beyond case variants
    pub strong: bool,
    pub numbers: NumberProfile,
    pub cases: CaseProfile,
    pub combiner: CombinerProfile,
    pub sort: SortOrder,
    /// Hard cap on the deduplicated candidate count; None disables it
    pub max_candidates: Option<usize>,
    /// Worker count for the parallel driver
    pub concurrency: usize,
}

/// Default hard cap on generated candidates
pub const DEFAULT_MAX_CANDIDATES: usize = 5_000_000;

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            window: LengthWindow::default(),
            strong: false,
            numbers: NumberProfile::Curated,
            cases: CaseProfile::Basic,
            combiner: CombinerProfile::Cross,
            sort: SortOrder::Lexicographic,
            max_candidates: Some(DEFAULT_MAX_CANDIDATES),
            concurrency: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
        }
    }
}

/// Summary of one generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub seed_count: usize,
    /// Number of base strings (size-1 and size-2 seed permutations)
    pub base_count: usize,
    pub candidate_count: usize,
    pub strong: bool,
    pub window: LengthWindow,
    pub numbers: NumberProfile,
    pub elapsed: Duration,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_contains() {
        let w = LengthWindow::new(6, 16);
        assert!(!w.contains(5));
        assert!(w.contains(6));
        assert!(w.contains(16));
        assert!(!w.contains(17));
    }

    #[test]
    fn test_degenerate_window_is_empty() {
        let w = LengthWindow::new(10, 5);
        for len in 0..20 {
            assert!(!w.contains(len));
        }
    }

    #[test]
    fn test_window_counts_chars_not_bytes() {
        let w = LengthWindow::new(2, 2);
        assert!(w.accepts("éé"));
        assert!(!w.accepts("ééé"));
    }

    #[test]
    fn test_number_profile_parse() {
        assert_eq!("basic".parse::<NumberProfile>().unwrap(), NumberProfile::Basic);
        assert_eq!(
            "exhaustive".parse::<NumberProfile>().unwrap(),
            NumberProfile::Exhaustive { bound: DEFAULT_EXHAUSTIVE_BOUND }
        );
        assert_eq!(
            "exhaustive:500".parse::<NumberProfile>().unwrap(),
            NumberProfile::Exhaustive { bound: 500 }
        );
        assert!("exhaustive:x".parse::<NumberProfile>().is_err());
        assert!("fancy".parse::<NumberProfile>().is_err());
    }

    #[test]
    fn test_profile_display() {
        assert_eq!(NumberProfile::Curated.to_string(), "curated");
        assert_eq!(
            NumberProfile::Exhaustive { bound: 100 }.to_string(),
            "exhaustive:100"
        );
        assert_eq!(CombinerProfile::Cross.to_string(), "cross");
        assert_eq!(SortOrder::Lexicographic.to_string(), "lex");
    }
}
