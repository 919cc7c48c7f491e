//! Case variant generator

use crate::types::CaseProfile;

/// Produce the deduplicated casing transforms of one string.
///
/// Basic profile: all-lower, all-upper, capitalize-first, alternating
/// starting upper at index 0. Extended adds the first-lower-rest-capitalized
/// variant. Several transforms coincide on short or uniform-case input, so
/// the result is deduplicated while keeping first-seen order.
pub fn case_variants(s: &str, profile: CaseProfile) -> Vec<String> {
    let mut variants = vec![
        s.to_lowercase(),
        s.to_uppercase(),
        capitalize(s),
        alternating(s),
    ];
    if profile == CaseProfile::Extended {
        variants.push(first_lower_rest_capitalized(s));
    }

    let mut out: Vec<String> = Vec::with_capacity(variants.len());
    for v in variants.drain(..) {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

/// First character uppercased, remainder lowercased ("word" -> "Word")
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

/// Alternating case, uppercase at even character indices ("AbCdEf")
fn alternating(s: &str) -> String {
    s.chars()
        .enumerate()
        .flat_map(|(i, c)| {
            let upper = i % 2 == 0;
            let iter: Box<dyn Iterator<Item = char>> = if upper {
                Box::new(c.to_uppercase())
            } else {
                Box::new(c.to_lowercase())
            };
            iter
        })
        .collect()
}

/// First character lowercased, remainder capitalized from index 1
/// ("abcd" -> "aBcd"). Single-character input collapses to lowercase.
fn first_lower_rest_capitalized(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let rest: String = chars.collect();
            if rest.is_empty() {
                s.to_lowercase()
            } else {
                first.to_lowercase().chain(capitalize(&rest).chars()).collect()
            }
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_char_input() {
        // Alternating case of "ab" is "Ab" (uppercase at index 0), which
        // coincides with capitalize, so Basic yields 3 distinct variants
        let variants = case_variants("ab", CaseProfile::Basic);
        assert_eq!(variants.len(), 3);
        for expected in ["ab", "AB", "Ab"] {
            assert!(variants.contains(&expected.to_string()), "missing {}", expected);
        }
        assert!(!variants.contains(&"aB".to_string()));
    }

    #[test]
    fn test_two_char_input_extended() {
        // "aB" comes from the first-lower-rest-capitalized variant only
        let variants = case_variants("ab", CaseProfile::Extended);
        assert_eq!(variants.len(), 4);
        for expected in ["ab", "AB", "Ab", "aB"] {
            assert!(variants.contains(&expected.to_string()), "missing {}", expected);
        }
    }

    #[test]
    fn test_longer_input() {
        let variants = case_variants("password", CaseProfile::Basic);
        assert!(variants.contains(&"password".to_string()));
        assert!(variants.contains(&"PASSWORD".to_string()));
        assert!(variants.contains(&"Password".to_string()));
        assert!(variants.contains(&"PaSsWoRd".to_string()));
        assert_eq!(variants.len(), 4);
    }

    #[test]
    fn test_extended_profile() {
        let variants = case_variants("abcd", CaseProfile::Extended);
        assert!(variants.contains(&"aBcd".to_string()));
        assert_eq!(variants.len(), 5);
    }

    #[test]
    fn test_single_char_collapses() {
        // capitalize and alternating coincide with upper; the extended
        // variant collapses to lower
        let variants = case_variants("a", CaseProfile::Extended);
        assert_eq!(variants.len(), 2);
        assert!(variants.contains(&"a".to_string()));
        assert!(variants.contains(&"A".to_string()));
    }

    #[test]
    fn test_mixed_case_input_normalizes() {
        let variants = case_variants("AlBo", CaseProfile::Basic);
        assert!(variants.contains(&"albo".to_string()));
        assert!(variants.contains(&"ALBO".to_string()));
        assert!(variants.contains(&"Albo".to_string()));
        assert!(variants.contains(&"AlBo".to_string()));
    }

    #[test]
    fn test_digits_are_case_stable() {
        let variants = case_variants("1995", CaseProfile::Basic);
        assert_eq!(variants, vec!["1995".to_string()]);
    }
}
