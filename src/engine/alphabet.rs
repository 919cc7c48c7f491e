//! Fixed injection alphabets
//!
//! The symbol table is identical across all profiles; the numbers table
//! varies by `NumberProfile` richness.

use crate::types::NumberProfile;

/// Injection symbols, in table order
pub const SYMBOLS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '[', ']', '{', '}',
    '|', ':', ';', '"', '\'', '<', '>', ',', '.', '?', '/', '~',
];

/// Curated numeric patterns beyond the plain digits 0-10.
///
/// Hand-picked strings people actually append to passwords: palindromes,
/// repeats, primes near 100, keyboard ladders, common 4-digit codes,
/// "lucky" numbers, and mobile-prefix lookalikes. Duplicates between
/// groups are fine; the table is deduplicated at build time.
const CURATED_PATTERNS: &[&str] = &[
    // Palindromic numbers
    "101", "111", "121", "131", "141", "151", "161", "171", "181", "191",
    "202", "212", "222", "232", "242", "252", "262", "272", "282", "292",
    "303", "313", "323", "333", "343", "353", "363", "373", "383", "393",
    "404", "414", "424", "434", "444", "454", "464", "474", "484", "494",
    "505", "515", "525", "535", "545", "555", "565", "575", "585", "595",
    "606", "616", "626", "636", "646", "656", "666", "676", "686", "696",
    "707", "717", "727", "737", "747", "757", "767", "777", "787", "797",
    "808", "818", "828", "838", "848", "858", "868", "878", "888", "898",
    "909", "919", "929", "939", "949", "959", "969", "979", "989", "999",
    // Repeating double/triple
    "11", "22", "33", "44", "55", "66", "77", "88", "99",
    "111", "222", "333", "444", "555", "666", "777", "888", "999",
    // Primes near 100
    "97", "101", "103", "107", "109", "113", "127", "131", "137", "139", "149",
    // Ladder patterns
    "123", "234", "345", "456", "567", "678", "789", "890",
    "321", "432", "543", "654", "765", "876", "987",
    "369", "420", "505", "606", "707", "808", "909",
    // Mirrored patterns
    "121", "232", "343", "454", "565", "676", "787", "898",
    // Common 4-digit codes
    "1001", "1212", "1313", "1414", "1515", "1999", "2002",
    "2112", "2121", "2222", "2323", "2424", "2525", "3003", "3131",
    "3333", "4004", "4040", "4141", "4444", "5050", "5252", "5555",
    "5656", "6006", "6060", "6666", "7007", "7171", "7777", "8008",
    "8080", "8888", "9009", "9090", "9119", "9211", "9292", "9393",
    "9494", "9595", "9696", "9797", "9898", "9999",
    // Repeated pair patterns
    "1122", "2233", "3344", "4455", "5566", "6677", "7788",
    "8899", "9900", "1234", "4321", "6789", "9876", "2468",
    "1357", "1020", "2020",
    // Angel/lucky numbers
    "1111", "2222", "3333", "4444", "5555", "6666", "7777", "8888", "9999",
    "1212", "1313", "1414", "1515", "1717", "1818", "1919", "2020",
    // Mobile-like prefixes
    "0311", "0321", "0333", "0345", "0300", "0301", "0302", "0312",
    "0340", "0355", "0366", "0399", "0400", "0420", "0444", "0500",
    "0515", "0606", "0707", "0808", "0900", "0911", "0922", "0933",
    "0944", "0955", "0966", "0977", "0988", "0999",
];

/// Immutable injection tables, built once per engine
#[derive(Debug, Clone)]
pub struct Alphabet {
    numbers: Vec<String>,
}

impl Alphabet {
    /// Build the numbers table for a profile
    pub fn new(profile: NumberProfile) -> Self {
        let mut numbers: Vec<String> = match profile {
            NumberProfile::Basic => (0..10).map(|n| n.to_string()).collect(),
            NumberProfile::Curated => (0..=10)
                .map(|n: u32| n.to_string())
                .chain(CURATED_PATTERNS.iter().map(|s| s.to_string()))
                .collect(),
            NumberProfile::Exhaustive { bound } => {
                (0..=bound).map(|n| n.to_string()).collect()
            }
        };
        numbers.sort();
        numbers.dedup();
        Self { numbers }
    }

    pub fn symbols(&self) -> &'static [char] {
        SYMBOLS
    }

    pub fn numbers(&self) -> &[String] {
        &self.numbers
    }

    /// Shortest entry in the numbers table, in characters.
    /// Used by injector early-exit checks.
    pub fn min_number_len(&self) -> usize {
        self.numbers.iter().map(|n| n.len()).min().unwrap_or(0)
    }
}
